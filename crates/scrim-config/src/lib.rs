//! Scrim configuration system
//!
//! This crate provides centralized configuration management for Scrim,
//! loading transition tuning from `scrim.toml` as an alternative to
//! environment variables.

use serde::{Deserialize, Serialize};
use std::path::Path;

use scrim_motion::content::FadeTuning;
use scrim_motion::crossfade::CrossfadeTuning;
use scrim_motion::pulse::PulseTuning;

/// Error loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for this schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Main configuration structure for Scrim
///
/// Every section and field is optional in the TOML document; missing values
/// take the documented defaults and unrecognized keys are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScrimConfig {
    /// Demo application settings
    pub demo: DemoConfig,
    /// Content fade tuning (out/swap/in transition)
    pub fade: FadeTuning,
    /// Color crossfade tuning
    pub color: CrossfadeTuning,
    /// Splash pulse tuning
    pub splash: PulseTuning,
}

/// Demo application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DemoConfig {
    /// Default scene to run (swap, theme, splash)
    pub scene: Option<String>,
    /// Frame step fed to the simulated loop, in milliseconds
    pub frame_step_ms: Option<f32>,
}

impl ScrimConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration from the default location (scrim.toml in the
    /// current directory) or return default configuration if file doesn't
    /// exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("scrim.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        // Demo settings
        if let Ok(scene) = std::env::var("SCRIM_SCENE") {
            self.demo.scene = Some(scene);
        }
        if let Ok(val) = std::env::var("SCRIM_FRAME_STEP_MS") {
            if let Ok(step) = val.parse::<f32>() {
                self.demo.frame_step_ms = Some(step);
            }
        }

        // Fade settings
        if let Ok(val) = std::env::var("SCRIM_FADE_OUT_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.fade.fade_out_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("SCRIM_FADE_IN_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.fade.fade_in_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("SCRIM_FADE_IN_DELAY_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.fade.fade_in_delay_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("SCRIM_OFFSET") {
            if let Ok(offset) = val.parse::<f32>() {
                self.fade.offset = offset;
            }
        }
        if let Ok(val) = std::env::var("SCRIM_DIRECT_DRIVER") {
            self.fade.direct_driver = val == "1" || val.eq_ignore_ascii_case("true");
        }

        // Color settings
        if let Ok(val) = std::env::var("SCRIM_COLOR_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.color.duration_ms = ms;
            }
        }

        // Splash settings
        if let Ok(val) = std::env::var("SCRIM_PULSE_HALF_PERIOD_MS") {
            if let Ok(ms) = val.parse::<f32>() {
                self.splash.half_period_ms = ms;
            }
        }
        if let Ok(val) = std::env::var("SCRIM_PULSE_MIN") {
            if let Ok(min) = val.parse::<f32>() {
                self.splash.min = min;
            }
        }
        if let Ok(val) = std::env::var("SCRIM_PULSE_MAX") {
            if let Ok(max) = val.parse::<f32>() {
                self.splash.max = max;
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from scrim.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScrimConfig::default();
        assert_eq!(config.fade.fade_out_ms, 150.0);
        assert_eq!(config.fade.fade_in_ms, 300.0);
        assert_eq!(config.fade.fade_in_delay_ms, 50.0);
        assert_eq!(config.fade.offset, 10.0);
        assert!(config.demo.scene.is_none());
    }

    #[test]
    fn test_toml_serialization() {
        let config = ScrimConfig::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: ScrimConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.fade.fade_out_ms, 150.0);
        assert_eq!(parsed.color.duration_ms, config.color.duration_ms);
    }

    #[test]
    fn test_partial_document_takes_defaults() {
        let parsed: ScrimConfig = toml::from_str(
            r#"
            [fade]
            fade_out_ms = 90.0
            "#,
        )
        .unwrap();

        assert_eq!(parsed.fade.fade_out_ms, 90.0);
        assert_eq!(parsed.fade.fade_in_ms, 300.0);
        assert_eq!(parsed.fade.fade_in_delay_ms, 50.0);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        let parsed: ScrimConfig = toml::from_str(
            r#"
            shimmer = "plenty"

            [fade]
            fade_in_ms = 250.0
            sparkle_count = 7
            "#,
        )
        .unwrap();

        assert_eq!(parsed.fade.fade_in_ms, 250.0);
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if scrim.toml doesn't exist
        let config = ScrimConfig::load_or_default();
        assert_eq!(config.fade.offset, 10.0);
    }

    #[test]
    fn test_load_from_missing_file_errors() {
        let err = ScrimConfig::load_from_file("definitely-not-here.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_merge_with_env() {
        // Set environment variable
        unsafe {
            std::env::set_var("SCRIM_SCENE", "splash");
            std::env::set_var("SCRIM_FADE_OUT_MS", "80");
        }

        let mut config = ScrimConfig::default();
        config.merge_with_env();

        assert_eq!(config.demo.scene.as_deref(), Some("splash"));
        assert_eq!(config.fade.fade_out_ms, 80.0);

        // Clean up
        unsafe {
            std::env::remove_var("SCRIM_SCENE");
            std::env::remove_var("SCRIM_FADE_OUT_MS");
        }
    }
}
