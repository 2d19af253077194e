//! Content fade: the two-phase swap transition.
//!
//! `ContentFade` drives the opacity/offset pattern used when a view's
//! content is replaced: fade the old content out, swap at the midpoint,
//! fade the new content in after a short breath. The progress value is 1.0
//! at rest (content fully visible), falls to 0.0 over the out-phase, and
//! rises back to 1.0 over the in-phase. Callers project it into opacity
//! directly and into a translation offset via [`translation`](ContentFade::translation).

use serde::{Deserialize, Serialize};

use crate::easing::EasingCurve;
use crate::events::SequencerEvent;
use crate::phase::{Phase, PhasePlan};
use crate::sequencer::PhaseSequencer;

/// Default out-phase duration in milliseconds.
pub const DEFAULT_FADE_OUT_MS: f32 = 150.0;
/// Default in-phase duration in milliseconds.
pub const DEFAULT_FADE_IN_MS: f32 = 300.0;
/// Default delay between the midpoint and the in-phase, in milliseconds.
pub const DEFAULT_FADE_IN_DELAY_MS: f32 = 50.0;
/// Default translation offset in layout units.
pub const DEFAULT_OFFSET: f32 = 10.0;

/// Tuning for a content fade.
///
/// Missing fields take the documented defaults when deserialized; unknown
/// fields in the source document are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeTuning {
    /// Out-phase duration in milliseconds.
    pub fade_out_ms: f32,
    /// In-phase duration in milliseconds.
    pub fade_in_ms: f32,
    /// Delay between midpoint and in-phase, in milliseconds.
    pub fade_in_delay_ms: f32,
    /// Translation offset applied while faded, in layout units.
    pub offset: f32,
    /// Easing curve for both phases.
    pub easing: EasingCurve,
    /// Rendering-backend hint: visual updates may bypass the logical
    /// thread. Has no effect on timing or values.
    pub direct_driver: bool,
}

impl Default for FadeTuning {
    fn default() -> Self {
        Self {
            fade_out_ms: DEFAULT_FADE_OUT_MS,
            fade_in_ms: DEFAULT_FADE_IN_MS,
            fade_in_delay_ms: DEFAULT_FADE_IN_DELAY_MS,
            offset: DEFAULT_OFFSET,
            easing: EasingCurve::default(),
            direct_driver: true,
        }
    }
}

impl FadeTuning {
    /// Build the two-phase plan this tuning describes.
    pub fn plan(&self) -> PhasePlan {
        PhasePlan::new()
            .then(Phase::to(0.0, self.fade_out_ms).with_easing(self.easing))
            .then(
                Phase::to(1.0, self.fade_in_ms)
                    .with_delay(self.fade_in_delay_ms)
                    .with_easing(self.easing),
            )
    }
}

/// Stage of a content fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FadeStage {
    /// At rest, content fully visible.
    Idle,
    /// Old content fading out.
    FadingOut,
    /// New content fading in (including the lead-in delay).
    FadingIn,
}

/// Two-phase content swap transition.
pub struct ContentFade {
    tuning: FadeTuning,
    seq: PhaseSequencer,
}

impl std::fmt::Debug for ContentFade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentFade")
            .field("tuning", &self.tuning)
            .field("seq", &self.seq)
            .finish()
    }
}

impl Default for ContentFade {
    fn default() -> Self {
        Self::new(FadeTuning::default())
    }
}

impl ContentFade {
    /// Create a content fade at rest (value 1.0) with the given tuning.
    pub fn new(tuning: FadeTuning) -> Self {
        Self {
            tuning,
            seq: PhaseSequencer::new(tuning.plan(), 1.0),
        }
    }

    /// Replace the tuning.
    ///
    /// Takes effect on the next accepted `start()`; a run already in flight
    /// keeps the plan it captured.
    pub fn configure(&mut self, tuning: FadeTuning) {
        self.tuning = tuning;
        self.seq.configure(tuning.plan());
    }

    /// The current tuning.
    pub fn tuning(&self) -> &FadeTuning {
        &self.tuning
    }

    /// Begin a fade without a midpoint callback.
    ///
    /// Silent no-op returning `false` while a fade is in flight.
    pub fn start(&mut self) -> bool {
        self.seq.configure(self.tuning.plan()) && self.seq.start()
    }

    /// Begin a fade; `on_midpoint` runs synchronously when the out-phase
    /// completes, before the in-phase begins.
    ///
    /// Silent no-op returning `false` while a fade is in flight; the
    /// rejected call's callback is dropped uninvoked.
    pub fn start_with<F>(&mut self, on_midpoint: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.seq.configure(self.tuning.plan()) && self.seq.start_with(on_midpoint)
    }

    /// Advance by `delta_ms`; returns `true` while the fade is in flight.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        self.seq.update(delta_ms)
    }

    /// Live progress value in [0, 1]; 1.0 at rest.
    pub fn value(&self) -> f32 {
        self.seq.value()
    }

    /// Translation offset for the current progress: `offset * (1 - value)`.
    pub fn translation(&self) -> f32 {
        self.tuning.offset * (1.0 - self.seq.value())
    }

    /// Current stage of the fade.
    pub fn stage(&self) -> FadeStage {
        match self.seq.phase_index() {
            None => FadeStage::Idle,
            Some(0) => FadeStage::FadingOut,
            Some(_) => FadeStage::FadingIn,
        }
    }

    /// True while a fade is in flight.
    pub fn is_running(&self) -> bool {
        self.seq.is_running()
    }

    /// Cancel any in-flight fade, drop its pending callback, and settle at
    /// rest (value 1.0).
    pub fn reset(&mut self) {
        self.seq.reset();
    }

    /// Drain lifecycle events accumulated since the last drain.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SequencerEvent> + '_ {
        self.seq.drain_events()
    }
}

static_assertions::assert_impl_all!(ContentFade: Send);
