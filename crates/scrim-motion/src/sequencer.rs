//! Phase sequencer: the state machine driving a progress value through
//! caller-defined timed phases.
//!
//! A `PhaseSequencer` owns a single scalar progress value and advances it
//! through the phases of a [`PhasePlan`](crate::phase::PhasePlan) as its
//! owner feeds it elapsed time. One callback slot fires when the designated
//! swap phase completes, before the next phase begins. At most one run is
//! in flight per instance; a `start()` while running is a silent no-op.
//!
//! The sequencer has no timer of its own: the owner's frame loop calls
//! `update(delta_ms)`. Dropping the instance therefore cancels everything —
//! there is nothing left to fire afterwards.
//!
//! # Usage
//!
//! ```
//! use scrim_motion::phase::{Phase, PhasePlan};
//! use scrim_motion::sequencer::PhaseSequencer;
//!
//! let plan = PhasePlan::new()
//!     .then(Phase::to(0.0, 150.0))
//!     .then(Phase::to(1.0, 300.0).with_delay(50.0));
//!
//! let mut seq = PhaseSequencer::new(plan, 1.0);
//! seq.start_with(|| { /* swap content here */ });
//!
//! // each frame:
//! let animating = seq.update(16.7);
//! let opacity = seq.value();
//! ```

use crate::events::{EventQueue, SequencerEvent};
use crate::lerp::Lerp;
use crate::phase::PhasePlan;

/// Callback invoked when the swap phase completes.
type SwapFn = Box<dyn FnOnce() + Send>;

/// Position of an in-flight run.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    /// Index of the active phase.
    index: usize,
    /// Progress value the active phase started from.
    from: f32,
    /// Time spent inside the active phase, delay included.
    elapsed_ms: f32,
}

/// Drives a scalar progress value through timed phases.
pub struct PhaseSequencer {
    value: f32,
    idle_value: f32,
    plan: PhasePlan,
    /// Phase index after which the swap callback fires.
    swap_after: usize,
    on_swap: Option<SwapFn>,
    cursor: Option<Cursor>,
    events: EventQueue,
}

impl std::fmt::Debug for PhaseSequencer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhaseSequencer")
            .field("value", &self.value)
            .field("idle_value", &self.idle_value)
            .field("plan", &self.plan)
            .field("swap_after", &self.swap_after)
            .field("cursor", &self.cursor)
            .finish_non_exhaustive()
    }
}

impl PhaseSequencer {
    /// Create a sequencer at rest on `idle_value` with the given plan.
    ///
    /// No transition plays until `start()`; the first observation of
    /// `value()` sees the idle endpoint.
    pub fn new(plan: PhasePlan, idle_value: f32) -> Self {
        Self {
            value: idle_value,
            idle_value,
            plan,
            swap_after: 0,
            on_swap: None,
            cursor: None,
            events: EventQueue::new(),
        }
    }

    /// Set the phase index after which the swap callback fires.
    ///
    /// Defaults to 0 (after the first phase).
    pub fn with_swap_after(mut self, index: usize) -> Self {
        self.swap_after = index;
        self
    }

    /// Replace the phase plan for subsequent runs.
    ///
    /// A plan captured by an in-flight run stays fixed: while running this
    /// call is ignored and returns `false`.
    pub fn configure(&mut self, plan: PhasePlan) -> bool {
        if self.cursor.is_some() {
            return false;
        }
        self.plan = plan;
        true
    }

    /// Begin a run without a swap callback.
    ///
    /// Returns `false` (and does nothing — no queue, no restart) if a run
    /// is already in flight or the plan is empty.
    pub fn start(&mut self) -> bool {
        self.start_run(None)
    }

    /// Begin a run, invoking `on_swap` synchronously when the swap phase
    /// completes and before the next phase begins.
    ///
    /// Same re-entrancy rule as [`start`](Self::start); a dropped call also
    /// drops its callback uninvoked.
    pub fn start_with<F>(&mut self, on_swap: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        self.start_run(Some(Box::new(on_swap)))
    }

    fn start_run(&mut self, on_swap: Option<SwapFn>) -> bool {
        if self.cursor.is_some() {
            tracing::trace!("start ignored: run already in flight");
            return false;
        }
        if self.plan.is_empty() {
            return false;
        }

        self.on_swap = on_swap;
        self.cursor = Some(Cursor {
            index: 0,
            from: self.value,
            elapsed_ms: 0.0,
        });
        self.events.push(SequencerEvent::Started);
        tracing::trace!(phases = self.plan.len(), "run started");
        true
    }

    /// Advance the run by `delta_ms` of wall-clock time.
    ///
    /// Large deltas cascade across phase boundaries, so a single oversized
    /// tick still completes every phase it spans (callback included).
    /// Returns `true` while a run remains in flight.
    pub fn update(&mut self, delta_ms: f32) -> bool {
        let Some(mut cursor) = self.cursor.take() else {
            return false;
        };

        let mut remaining = delta_ms.max(0.0);
        loop {
            // Plan length is checked at start and the plan is immutable
            // while running, so the index stays valid.
            let phase = self.plan.phases[cursor.index];
            let step = remaining.min(phase.span_ms() - cursor.elapsed_ms);
            cursor.elapsed_ms += step;
            remaining -= step;

            let active = (cursor.elapsed_ms - phase.delay_ms).max(0.0);
            let t = if phase.duration_ms > 0.0 {
                (active / phase.duration_ms).clamp(0.0, 1.0)
            } else {
                1.0
            };
            self.value = cursor.from.lerp(&phase.target, phase.easing.evaluate(t));

            if cursor.elapsed_ms < phase.span_ms() {
                self.cursor = Some(cursor);
                return true;
            }

            // Phase complete.
            self.value = phase.target;
            self.events.push(SequencerEvent::PhaseCompleted { index: cursor.index });
            if cursor.index == self.swap_after {
                if let Some(swap) = self.on_swap.take() {
                    swap();
                }
                self.events.push(SequencerEvent::Midpoint);
            }

            if cursor.index + 1 >= self.plan.len() {
                self.on_swap = None;
                self.events.push(SequencerEvent::Finished);
                tracing::trace!("run finished");
                return false;
            }

            cursor.index += 1;
            cursor.from = self.value;
            cursor.elapsed_ms = 0.0;
            if remaining <= 0.0 {
                self.cursor = Some(cursor);
                return true;
            }
        }
    }

    /// Live progress value; valid at any time, including before any run.
    pub fn value(&self) -> f32 {
        self.value
    }

    /// True while a run is in flight.
    pub fn is_running(&self) -> bool {
        self.cursor.is_some()
    }

    /// Index of the active phase, if a run is in flight.
    pub fn phase_index(&self) -> Option<usize> {
        self.cursor.as_ref().map(|c| c.index)
    }

    /// The current phase plan.
    pub fn plan(&self) -> &PhasePlan {
        &self.plan
    }

    /// Cancel any in-flight run and settle on the idle endpoint.
    ///
    /// The pending swap callback is dropped without being invoked.
    pub fn reset(&mut self) {
        if self.cursor.take().is_some() {
            self.events.push(SequencerEvent::Cancelled);
            tracing::trace!("run cancelled");
        }
        self.on_swap = None;
        self.value = self.idle_value;
    }

    /// Drain lifecycle events accumulated since the last drain.
    pub fn drain_events(&mut self) -> impl Iterator<Item = SequencerEvent> + '_ {
        self.events.drain()
    }
}

static_assertions::assert_impl_all!(PhaseSequencer: Send);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::easing::EasingCurve;
    use crate::phase::Phase;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn fade_plan() -> PhasePlan {
        PhasePlan::new()
            .then(Phase::to(0.0, 150.0).with_easing(EasingCurve::Linear))
            .then(
                Phase::to(1.0, 300.0)
                    .with_delay(50.0)
                    .with_easing(EasingCurve::Linear),
            )
    }

    #[test]
    fn test_idle_before_start() {
        let seq = PhaseSequencer::new(fade_plan(), 1.0);
        assert!(!seq.is_running());
        assert_eq!(seq.value(), 1.0);
        assert_eq!(seq.phase_index(), None);
    }

    #[test]
    fn test_documented_timeline() {
        // out 150ms, delay 50ms, in 300ms: value 0 at t=150, rise starts
        // at t=200, value 1 at t=500.
        let mut seq = PhaseSequencer::new(fade_plan(), 1.0);
        let fired = Arc::new(AtomicU32::new(0));
        let flag = fired.clone();
        assert!(seq.start_with(move || {
            flag.fetch_add(1, Ordering::SeqCst);
        }));

        seq.update(75.0);
        assert!((seq.value() - 0.5).abs() < 0.001);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        seq.update(75.0); // t = 150: out-phase done, callback fires
        assert_eq!(seq.value(), 0.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(seq.is_running());

        seq.update(25.0); // t = 175: inside the delay, value holds
        assert_eq!(seq.value(), 0.0);

        seq.update(25.0); // t = 200: delay over
        assert_eq!(seq.value(), 0.0);

        seq.update(150.0); // t = 350: halfway up
        assert!((seq.value() - 0.5).abs() < 0.001);

        assert!(!seq.update(150.0)); // t = 500: done
        assert_eq!(seq.value(), 1.0);
        assert!(!seq.is_running());
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_reentrant_start_is_noop() {
        let mut seq = PhaseSequencer::new(fade_plan(), 1.0);
        let fired = Arc::new(AtomicU32::new(0));

        assert!(seq.start());
        seq.update(75.0);
        let mid_value = seq.value();

        // A second start must not restart, queue, or change the trajectory.
        let flag = fired.clone();
        assert!(!seq.start_with(move || {
            flag.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(seq.value(), mid_value);
        assert_eq!(seq.phase_index(), Some(0));

        seq.update(75.0);
        assert_eq!(seq.value(), 0.0);
        // The dropped call's callback never fires, at the midpoint or later.
        seq.update(400.0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_restartable_after_completion() {
        let mut seq = PhaseSequencer::new(fade_plan(), 1.0);

        assert!(seq.start());
        seq.update(600.0);
        assert!(!seq.is_running());

        assert!(seq.start());
        assert!(seq.is_running());
    }

    #[test]
    fn test_midpoint_fires_once_before_in_phase() {
        let mut seq = PhaseSequencer::new(fade_plan(), 1.0);
        let order = Arc::new(AtomicU32::new(0));

        let seen = order.clone();
        seq.start_with(move || {
            seen.store(1, Ordering::SeqCst);
        });

        // One oversized tick spans the midpoint and the whole in-phase.
        assert!(!seq.update(1000.0));
        assert_eq!(order.load(Ordering::SeqCst), 1);

        let events: Vec<_> = seq.drain_events().collect();
        assert_eq!(
            events,
            vec![
                SequencerEvent::Started,
                SequencerEvent::PhaseCompleted { index: 0 },
                SequencerEvent::Midpoint,
                SequencerEvent::PhaseCompleted { index: 1 },
                SequencerEvent::Finished,
            ]
        );
    }

    #[test]
    fn test_reset_mid_phase() {
        let mut seq = PhaseSequencer::new(fade_plan(), 1.0);
        let fired = Arc::new(AtomicU32::new(0));

        let flag = fired.clone();
        seq.start_with(move || {
            flag.fetch_add(1, Ordering::SeqCst);
        });
        seq.update(100.0);
        assert!(seq.is_running());

        seq.reset();
        assert!(!seq.is_running());
        assert_eq!(seq.value(), 1.0);

        // No further callbacks, even if the owner keeps ticking.
        seq.update(1000.0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        let events: Vec<_> = seq.drain_events().collect();
        assert_eq!(
            events,
            vec![SequencerEvent::Started, SequencerEvent::Cancelled]
        );
    }

    #[test]
    fn test_reset_while_idle_is_harmless() {
        let mut seq = PhaseSequencer::new(fade_plan(), 1.0);
        seq.reset();
        assert_eq!(seq.value(), 1.0);
        assert!(seq.drain_events().next().is_none());
    }

    #[test]
    fn test_configure_rejected_while_running() {
        let mut seq = PhaseSequencer::new(fade_plan(), 1.0);
        seq.start();

        let other = PhasePlan::new().then(Phase::to(0.5, 10.0));
        assert!(!seq.configure(other.clone()));
        assert_eq!(seq.plan().len(), 2);

        seq.update(600.0);
        assert!(seq.configure(other));
        assert_eq!(seq.plan().len(), 1);
    }

    #[test]
    fn test_empty_plan_never_starts() {
        let mut seq = PhaseSequencer::new(PhasePlan::new(), 0.0);
        assert!(!seq.start());
        assert!(!seq.is_running());
        assert!(seq.drain_events().next().is_none());
    }

    #[test]
    fn test_zero_duration_phase_completes_immediately() {
        let plan = PhasePlan::new()
            .then(Phase::to(0.0, 0.0))
            .then(Phase::to(1.0, 100.0).with_easing(EasingCurve::Linear));
        let mut seq = PhaseSequencer::new(plan, 1.0);
        let fired = Arc::new(AtomicU32::new(0));

        let flag = fired.clone();
        seq.start_with(move || {
            flag.fetch_add(1, Ordering::SeqCst);
        });

        // First tick completes the zero-length phase and starts the next.
        assert!(seq.update(50.0));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!((seq.value() - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_swap_after_selects_phase() {
        let plan = PhasePlan::new()
            .then(Phase::to(0.5, 100.0).with_easing(EasingCurve::Linear))
            .then(Phase::to(0.0, 100.0).with_easing(EasingCurve::Linear))
            .then(Phase::to(1.0, 100.0).with_easing(EasingCurve::Linear));
        let mut seq = PhaseSequencer::new(plan, 1.0).with_swap_after(1);
        let fired = Arc::new(AtomicU32::new(0));

        let flag = fired.clone();
        seq.start_with(move || {
            flag.fetch_add(1, Ordering::SeqCst);
        });

        seq.update(100.0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        seq.update(100.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        seq.update(100.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_update_while_idle() {
        let mut seq = PhaseSequencer::new(fade_plan(), 1.0);
        assert!(!seq.update(100.0));
        assert_eq!(seq.value(), 1.0);
    }
}
