use anyhow::Result;
use scrim_config::ScrimConfig;
use scrim_motion::{ColorFade, ContentFade, MotionObserver, PacingMonitor, Pulse};

/// How often the loop logs the live values, in frames.
const LOG_EVERY: u32 = 5;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = ScrimConfig::load();
    let step_ms = config.demo.frame_step_ms.unwrap_or(16.7);

    // Scene selection: scrim.toml / SCRIM_SCENE, or --scene=<name> on the
    // command line.
    let scene = config
        .demo
        .scene
        .clone()
        .or_else(|| std::env::args().find_map(|a| a.strip_prefix("--scene=").map(str::to_owned)));

    match scene.as_deref() {
        Some("swap") => run_swap(&config, step_ms),
        Some("theme") => run_theme(&config, step_ms),
        Some("splash") => run_splash(&config, step_ms),
        Some(other) => anyhow::bail!("unknown scene: {other} (expected swap, theme, or splash)"),
        None => {
            run_splash(&config, step_ms);
            run_swap(&config, step_ms);
            run_theme(&config, step_ms);
            Ok(())
        }
    }
}

/// Content swap: fade out, replace at the midpoint, fade back in.
fn run_swap(config: &ScrimConfig, step_ms: f32) -> Result<()> {
    tracing::info!(scene = "swap", ?step_ms, "scene starting");

    let mut fade = ContentFade::new(config.fade);
    let mut monitor = PacingMonitor::default();

    fade.start_with(|| {
        tracing::info!("midpoint: content swapped");
    });
    // A second trigger while the first swap is in flight is dropped.
    let accepted = fade.start();
    tracing::debug!(accepted, "re-entrant start");

    let mut frame = 0u32;
    let mut t_ms = 0.0;
    loop {
        let running = fade.update(step_ms);
        monitor.on_frame(step_ms);
        for event in fade.drain_events() {
            tracing::debug!(?event, t_ms, "fade event");
            monitor.on_event(event);
        }

        if frame % LOG_EVERY == 0 {
            tracing::info!(
                t_ms,
                opacity = fade.value(),
                offset = fade.translation(),
                stage = ?fade.stage(),
                "frame"
            );
        }
        frame += 1;
        t_ms += step_ms;
        if !running {
            break;
        }
    }

    tracing::info!(
        frames = monitor.frames(),
        over_budget = monitor.over_budget(),
        "scene finished"
    );
    Ok(())
}

/// Theme change: crossfade the background color between captured endpoints.
fn run_theme(config: &ScrimConfig, step_ms: f32) -> Result<()> {
    tracing::info!(scene = "theme", ?step_ms, "scene starting");

    const LIGHT: [f32; 4] = [0.98, 0.97, 0.95, 1.0];
    const DARK: [f32; 4] = [0.09, 0.10, 0.12, 1.0];

    let mut background = ColorFade::new(config.color);

    // First observation snaps to the theme color; no transition plays.
    background.set(LIGHT);
    tracing::info!(color = ?background.value(), "initial theme applied");

    background.set(DARK);
    let mut t_ms = 0.0;
    let mut frame = 0u32;
    while background.update(step_ms) {
        t_ms += step_ms;
        if frame % LOG_EVERY == 0 {
            tracing::info!(t_ms, color = ?background.value(), "frame");
        }
        frame += 1;
    }

    tracing::info!(color = ?background.value(), "theme settled");
    Ok(())
}

/// Splash: pulse the logo, then hand off to a content fade.
fn run_splash(config: &ScrimConfig, step_ms: f32) -> Result<()> {
    tracing::info!(scene = "splash", ?step_ms, "scene starting");

    let mut pulse = Pulse::new(config.splash);
    pulse.start();

    let mut t_ms = 0.0;
    let mut frame = 0u32;
    while pulse.half_cycles() < 4 {
        pulse.update(step_ms);
        t_ms += step_ms;
        if frame % LOG_EVERY == 0 {
            tracing::info!(t_ms, scale = pulse.value(), "frame");
        }
        frame += 1;
    }
    pulse.stop();
    tracing::info!(
        half_cycles = pulse.half_cycles(),
        held = pulse.value(),
        "pulse stopped"
    );

    // The content fade takes over once startup is done.
    let mut reveal = ContentFade::new(config.fade);
    reveal.start_with(|| {
        tracing::info!("midpoint: splash replaced by content");
    });
    while reveal.update(step_ms) {}
    tracing::info!(opacity = reveal.value(), "content revealed");
    Ok(())
}
