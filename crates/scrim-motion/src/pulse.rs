//! Pulse: an infinite alternating oscillation for attract states.
//!
//! A `Pulse` swings a scalar between a minimum and maximum value, one
//! half-period per direction, until told to stop. It is the splash-screen
//! idiom: the logo breathes while startup work happens elsewhere, then the
//! pulse is stopped and a content fade takes over.
//!
//! Playback alternates direction each half-cycle; the value is a pure
//! function of elapsed time, so oversized ticks land exactly where smaller
//! ones would.

use serde::{Deserialize, Serialize};

use crate::easing::EasingCurve;
use crate::lerp::Lerp;

/// Default pulse floor.
pub const DEFAULT_PULSE_MIN: f32 = 0.4;
/// Default pulse ceiling.
pub const DEFAULT_PULSE_MAX: f32 = 1.0;
/// Default half-period in milliseconds (one min-to-max sweep).
pub const DEFAULT_HALF_PERIOD_MS: f32 = 700.0;

/// Tuning for a pulse.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PulseTuning {
    /// Lowest value of the swing.
    pub min: f32,
    /// Highest value of the swing.
    pub max: f32,
    /// Duration of one sweep between the endpoints, in milliseconds.
    pub half_period_ms: f32,
    /// Easing curve applied to each sweep.
    pub easing: EasingCurve,
}

impl Default for PulseTuning {
    fn default() -> Self {
        Self {
            min: DEFAULT_PULSE_MIN,
            max: DEFAULT_PULSE_MAX,
            half_period_ms: DEFAULT_HALF_PERIOD_MS,
            easing: EasingCurve::default(),
        }
    }
}

/// Infinite alternating oscillation between two values.
#[derive(Debug, Clone)]
pub struct Pulse {
    tuning: PulseTuning,
    elapsed_ms: f32,
    value: f32,
    running: bool,
}

impl Default for Pulse {
    fn default() -> Self {
        Self::new(PulseTuning::default())
    }
}

impl Pulse {
    /// Create a pulse at rest on `min`. Nothing moves until `start()`.
    pub fn new(tuning: PulseTuning) -> Self {
        Self {
            tuning,
            elapsed_ms: 0.0,
            value: tuning.min,
            running: false,
        }
    }

    /// Replace the tuning; takes effect on the next `start()`.
    pub fn configure(&mut self, tuning: PulseTuning) {
        if !self.running {
            self.tuning = tuning;
        }
    }

    /// The current tuning.
    pub fn tuning(&self) -> &PulseTuning {
        &self.tuning
    }

    /// Begin oscillating from `min`. No-op returning `false` while already
    /// running.
    pub fn start(&mut self) -> bool {
        if self.running {
            return false;
        }
        self.elapsed_ms = 0.0;
        self.value = self.tuning.min;
        self.running = true;
        tracing::trace!(half_period_ms = self.tuning.half_period_ms, "pulse started");
        true
    }

    /// Advance by `delta_ms`; returns `true` while oscillating.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        if !self.running {
            return false;
        }
        if self.tuning.half_period_ms <= 0.0 {
            self.value = self.tuning.max;
            return true;
        }

        self.elapsed_ms += delta_ms.max(0.0);
        let sweeps = self.elapsed_ms / self.tuning.half_period_ms;
        let fraction = sweeps.fract();

        // Odd half-cycles play the sweep backwards.
        let reversed = sweeps as u64 % 2 == 1;
        let t = if reversed { 1.0 - fraction } else { fraction };
        self.value = self
            .tuning
            .min
            .lerp(&self.tuning.max, self.tuning.easing.evaluate(t));
        true
    }

    /// Live value of the swing; holds the last value once stopped.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Number of completed half-cycles (min-to-max or max-to-min sweeps).
    pub fn half_cycles(&self) -> u64 {
        if self.tuning.half_period_ms <= 0.0 {
            return 0;
        }
        (self.elapsed_ms / self.tuning.half_period_ms) as u64
    }

    /// True while oscillating.
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Halt at the current value.
    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            tracing::trace!(half_cycles = self.half_cycles(), "pulse stopped");
        }
    }

    /// Halt and settle back on `min`.
    pub fn reset(&mut self) {
        self.running = false;
        self.elapsed_ms = 0.0;
        self.value = self.tuning.min;
    }
}

static_assertions::assert_impl_all!(Pulse: Send);
