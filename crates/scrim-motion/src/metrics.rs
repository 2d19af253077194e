//! Pacing observation for transition runs.
//!
//! Frame pacing is observed through an injectable [`MotionObserver`] rather
//! than any process-wide collector: the owner feeds its observer the same
//! frame deltas and drained events it feeds its sequencers, and the observer
//! decides what to count. [`PacingMonitor`] is the stock implementation; it
//! tracks frames that blow the budget and logs a warning when a run janked.

use crate::events::SequencerEvent;

/// Default frame budget in milliseconds (one 60 Hz frame).
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 16.7;

/// Observer of frame pacing and sequencer lifecycle.
pub trait MotionObserver {
    /// A frame elapsed, `delta_ms` after the previous one.
    fn on_frame(&mut self, delta_ms: f32);

    /// A sequencer reported a lifecycle event.
    fn on_event(&mut self, event: SequencerEvent);
}

/// Counts frames over budget and flags janky transition runs.
#[derive(Debug, Clone)]
pub struct PacingMonitor {
    budget_ms: f32,
    frames: u64,
    over_budget: u64,
    worst_frame_ms: f32,
    /// Over-budget frames seen since the current run started.
    run_over_budget: u64,
    in_run: bool,
}

impl Default for PacingMonitor {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_BUDGET_MS)
    }
}

impl PacingMonitor {
    /// Create a monitor with the given frame budget in milliseconds.
    pub fn new(budget_ms: f32) -> Self {
        Self {
            budget_ms,
            frames: 0,
            over_budget: 0,
            worst_frame_ms: 0.0,
            run_over_budget: 0,
            in_run: false,
        }
    }

    /// The frame budget in milliseconds.
    pub fn budget_ms(&self) -> f32 {
        self.budget_ms
    }

    /// Total frames observed.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Frames that exceeded the budget.
    pub fn over_budget(&self) -> u64 {
        self.over_budget
    }

    /// Longest frame observed, in milliseconds.
    pub fn worst_frame_ms(&self) -> f32 {
        self.worst_frame_ms
    }

    /// Forget everything observed so far.
    pub fn reset(&mut self) {
        *self = Self::new(self.budget_ms);
    }
}

impl MotionObserver for PacingMonitor {
    fn on_frame(&mut self, delta_ms: f32) {
        self.frames += 1;
        self.worst_frame_ms = self.worst_frame_ms.max(delta_ms);
        if delta_ms > self.budget_ms {
            self.over_budget += 1;
            if self.in_run {
                self.run_over_budget += 1;
            }
        }
    }

    fn on_event(&mut self, event: SequencerEvent) {
        match event {
            SequencerEvent::Started => {
                self.in_run = true;
                self.run_over_budget = 0;
            }
            SequencerEvent::Finished | SequencerEvent::Cancelled => {
                if self.in_run && self.run_over_budget > 0 {
                    tracing::warn!(
                        dropped = self.run_over_budget,
                        budget_ms = self.budget_ms,
                        worst_ms = self.worst_frame_ms,
                        "transition ran over frame budget"
                    );
                }
                self.in_run = false;
            }
            SequencerEvent::Midpoint | SequencerEvent::PhaseCompleted { .. } => {}
        }
    }
}

static_assertions::assert_impl_all!(PacingMonitor: Send);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_over_budget_frames() {
        let mut monitor = PacingMonitor::new(16.7);

        monitor.on_frame(10.0);
        monitor.on_frame(16.0);
        monitor.on_frame(33.0);
        monitor.on_frame(50.0);

        assert_eq!(monitor.frames(), 4);
        assert_eq!(monitor.over_budget(), 2);
        assert_eq!(monitor.worst_frame_ms(), 50.0);
    }

    #[test]
    fn test_run_scoped_counting() {
        let mut monitor = PacingMonitor::new(16.7);

        // Jank outside any run is counted globally but not per-run.
        monitor.on_frame(40.0);
        monitor.on_event(SequencerEvent::Started);
        monitor.on_frame(10.0);
        monitor.on_frame(25.0);
        monitor.on_event(SequencerEvent::Finished);

        assert_eq!(monitor.over_budget(), 2);
        assert!(!monitor.in_run);
    }

    #[test]
    fn test_run_counter_resets_per_run() {
        let mut monitor = PacingMonitor::new(16.7);

        monitor.on_event(SequencerEvent::Started);
        monitor.on_frame(30.0);
        monitor.on_event(SequencerEvent::Finished);

        monitor.on_event(SequencerEvent::Started);
        assert_eq!(monitor.run_over_budget, 0);
    }

    #[test]
    fn test_reset_keeps_budget() {
        let mut monitor = PacingMonitor::new(8.3);
        monitor.on_frame(20.0);
        monitor.reset();

        assert_eq!(monitor.budget_ms(), 8.3);
        assert_eq!(monitor.frames(), 0);
        assert_eq!(monitor.over_budget(), 0);
        assert_eq!(monitor.worst_frame_ms(), 0.0);
    }
}
