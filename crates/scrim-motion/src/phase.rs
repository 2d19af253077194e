//! Phase descriptors for transition runs.
//!
//! A `Phase` is one timed segment of a transition: a target value, a
//! duration, an optional lead-in delay, and an easing curve. A `PhasePlan`
//! is the ordered sequence of phases a sequencer walks through during one
//! run. Plans are captured when a run starts and stay fixed until it ends.

use serde::{Deserialize, Serialize};

use crate::easing::EasingCurve;

/// One timed segment of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Phase {
    /// Value the progress settles at when this phase completes.
    pub target: f32,
    /// Duration of the segment in milliseconds.
    pub duration_ms: f32,
    /// Delay before the segment starts advancing, in milliseconds.
    pub delay_ms: f32,
    /// Easing curve shaping the segment.
    pub easing: EasingCurve,
}

impl Default for Phase {
    fn default() -> Self {
        Self {
            target: 1.0,
            duration_ms: 300.0,
            delay_ms: 0.0,
            easing: EasingCurve::default(),
        }
    }
}

impl Phase {
    /// Create a phase driving progress to `target` over `duration_ms`.
    pub fn to(target: f32, duration_ms: f32) -> Self {
        Self {
            target,
            duration_ms,
            delay_ms: 0.0,
            easing: EasingCurve::default(),
        }
    }

    /// Set the lead-in delay.
    pub fn with_delay(mut self, delay_ms: f32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    /// Set the easing curve.
    pub fn with_easing(mut self, easing: EasingCurve) -> Self {
        self.easing = easing;
        self
    }

    /// Total wall-clock span of this phase, delay included.
    pub fn span_ms(&self) -> f32 {
        self.delay_ms + self.duration_ms
    }
}

/// Ordered sequence of phases for one transition run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PhasePlan {
    /// Phases in execution order.
    pub phases: Vec<Phase>,
}

impl PhasePlan {
    /// Create an empty plan.
    pub fn new() -> Self {
        Self { phases: Vec::new() }
    }

    /// Append a phase to the plan.
    pub fn then(mut self, phase: Phase) -> Self {
        self.phases.push(phase);
        self
    }

    /// Number of phases in the plan.
    pub fn len(&self) -> usize {
        self.phases.len()
    }

    /// Returns true if the plan has no phases.
    pub fn is_empty(&self) -> bool {
        self.phases.is_empty()
    }

    /// Get a phase by index.
    pub fn get(&self, index: usize) -> Option<&Phase> {
        self.phases.get(index)
    }

    /// Total wall-clock span of the plan, delays included.
    pub fn span_ms(&self) -> f32 {
        self.phases.iter().map(Phase::span_ms).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_builders() {
        let phase = Phase::to(0.0, 150.0)
            .with_delay(50.0)
            .with_easing(EasingCurve::Linear);

        assert_eq!(phase.target, 0.0);
        assert_eq!(phase.duration_ms, 150.0);
        assert_eq!(phase.delay_ms, 50.0);
        assert_eq!(phase.easing, EasingCurve::Linear);
        assert_eq!(phase.span_ms(), 200.0);
    }

    #[test]
    fn test_phase_defaults() {
        let phase = Phase::default();
        assert_eq!(phase.duration_ms, 300.0);
        assert_eq!(phase.delay_ms, 0.0);
        assert_eq!(phase.easing, EasingCurve::EaseInOut);
    }

    #[test]
    fn test_plan_span() {
        let plan = PhasePlan::new()
            .then(Phase::to(0.0, 150.0))
            .then(Phase::to(1.0, 300.0).with_delay(50.0));

        assert_eq!(plan.len(), 2);
        assert!(!plan.is_empty());
        assert_eq!(plan.span_ms(), 500.0);
    }

    #[test]
    fn test_empty_plan() {
        let plan = PhasePlan::new();
        assert!(plan.is_empty());
        assert_eq!(plan.span_ms(), 0.0);
        assert!(plan.get(0).is_none());
    }
}
