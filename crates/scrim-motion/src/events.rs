//! Lifecycle events for transition runs.
//!
//! A sequencer records what happened to it in a small queue that its owner
//! drains after each update. This keeps observation decoupled from the
//! midpoint callback: collaborators that only need to know "a transition
//! finished" subscribe here instead of threading closures through.
//!
//! # Usage
//!
//! ```
//! use scrim_motion::content::{ContentFade, FadeTuning};
//! use scrim_motion::events::SequencerEvent;
//!
//! let mut fade = ContentFade::new(FadeTuning::default());
//! fade.start();
//! fade.update(500.0);
//!
//! for event in fade.drain_events() {
//!     if event == SequencerEvent::Finished {
//!         // swap complete
//!     }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Event emitted by a sequencer as a run progresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SequencerEvent {
    /// A run was accepted and began.
    Started,
    /// A phase ran to completion.
    PhaseCompleted { index: usize },
    /// The midpoint was crossed (out-phase done, in-phase about to begin).
    Midpoint,
    /// The final phase completed and the run ended normally.
    Finished,
    /// The run was cancelled by `reset()` before completing.
    Cancelled,
}

impl SequencerEvent {
    /// Check if this event ends a run (normally or by cancellation).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Finished | Self::Cancelled)
    }
}

/// Queue collecting sequencer events between drains.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<SequencerEvent>,
}

impl EventQueue {
    /// Create a new empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push an event onto the queue.
    pub fn push(&mut self, event: SequencerEvent) {
        self.events.push_back(event);
    }

    /// Check if the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Pop the next event.
    pub fn pop(&mut self) -> Option<SequencerEvent> {
        self.events.pop_front()
    }

    /// Peek at the next event without removing it.
    pub fn peek(&self) -> Option<&SequencerEvent> {
        self.events.front()
    }

    /// Drain all pending events in order.
    pub fn drain(&mut self) -> impl Iterator<Item = SequencerEvent> + '_ {
        self.events.drain(..)
    }

    /// Discard all pending events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}
