//! Crossfade: transition between successive values of an interpolable type.
//!
//! Where [`ContentFade`](crate::content::ContentFade) drives a bare scalar,
//! `Crossfade` carries the value itself: each accepted `set()` snapshots
//! the previous and new endpoints and interpolates between them over a
//! single timed phase. The endpoints stay fixed for the whole run, so the
//! interpolation domain cannot shift mid-flight if the caller's underlying
//! value changes again before the run finishes.
//!
//! The very first `set()` snaps straight to the value: there is no previous
//! endpoint to fade from, and no phantom transition may be observed.

use serde::{Deserialize, Serialize};

use crate::easing::EasingCurve;
use crate::lerp::Lerp;

/// Default crossfade duration in milliseconds.
pub const DEFAULT_CROSSFADE_MS: f32 = 200.0;

/// Tuning for a crossfade.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossfadeTuning {
    /// Duration of one crossfade in milliseconds.
    pub duration_ms: f32,
    /// Easing curve shaping the blend.
    pub easing: EasingCurve,
}

impl Default for CrossfadeTuning {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_CROSSFADE_MS,
            easing: EasingCurve::default(),
        }
    }
}

/// Captured endpoints of one crossfade run.
#[derive(Debug, Clone)]
struct Endpoints<T> {
    from: T,
    to: T,
}

/// Blends between successive values of an interpolable type.
///
/// `ColorFade` is the canonical instance, blending RGBA colors.
#[derive(Debug, Clone)]
pub struct Crossfade<T> {
    tuning: CrossfadeTuning,
    endpoints: Option<Endpoints<T>>,
    elapsed_ms: f32,
    running: bool,
}

/// Crossfade over RGBA color values.
pub type ColorFade = Crossfade<[f32; 4]>;

impl<T> Crossfade<T>
where
    T: Lerp + Clone + PartialEq,
{
    /// Create a crossfade with the given tuning. No value is held until
    /// the first `set()`.
    pub fn new(tuning: CrossfadeTuning) -> Self {
        Self {
            tuning,
            endpoints: None,
            elapsed_ms: 0.0,
            running: false,
        }
    }

    /// Replace the tuning; takes effect on the next accepted `set()`.
    pub fn configure(&mut self, tuning: CrossfadeTuning) {
        self.tuning = tuning;
    }

    /// The current tuning.
    pub fn tuning(&self) -> &CrossfadeTuning {
        &self.tuning
    }

    /// Move towards a new value.
    ///
    /// - First call ever: snaps directly to `value`, no transition plays.
    /// - While a run is in flight: silent no-op returning `false`; the
    ///   captured endpoints stay fixed.
    /// - Equal to the current target: no-op returning `false`.
    /// - Otherwise: captures `(current target, value)` as the run's
    ///   endpoints and begins blending.
    pub fn set(&mut self, value: T) -> bool {
        let Some(endpoints) = &mut self.endpoints else {
            self.endpoints = Some(Endpoints {
                from: value.clone(),
                to: value,
            });
            return true;
        };

        if self.running {
            tracing::trace!("set ignored: crossfade in flight");
            return false;
        }
        if endpoints.to == value {
            return false;
        }

        endpoints.from = endpoints.to.clone();
        endpoints.to = value;
        self.elapsed_ms = 0.0;
        if self.tuning.duration_ms > 0.0 {
            self.running = true;
        } else {
            endpoints.from = endpoints.to.clone();
        }
        true
    }

    /// Advance by `delta_ms`; returns `true` while a run is in flight.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        if !self.running {
            return false;
        }

        self.elapsed_ms += delta_ms.max(0.0);
        if self.elapsed_ms >= self.tuning.duration_ms {
            self.running = false;
            if let Some(endpoints) = &mut self.endpoints {
                endpoints.from = endpoints.to.clone();
            }
            return false;
        }
        true
    }

    /// Live blended value; `None` before the first `set()`.
    pub fn value(&self) -> Option<T> {
        let endpoints = self.endpoints.as_ref()?;
        if !self.running {
            return Some(endpoints.to.clone());
        }

        let t = (self.elapsed_ms / self.tuning.duration_ms).clamp(0.0, 1.0);
        Some(endpoints.from.lerp(&endpoints.to, self.tuning.easing.evaluate(t)))
    }

    /// True while a run is in flight.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Cancel any in-flight run and settle on the current target value.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_ms = 0.0;
        if let Some(endpoints) = &mut self.endpoints {
            endpoints.from = endpoints.to.clone();
        }
    }
}

static_assertions::assert_impl_all!(ColorFade: Send);
