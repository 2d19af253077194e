//! Transition sequencing for UI front-ends.
//!
//! This crate provides:
//! - **Phase sequencing**: A progress value driven through timed phases with
//!   a midpoint callback and a re-entrancy guard
//! - **Content fades**: The two-phase out/swap/in transition with documented
//!   defaults
//! - **Crossfades**: Endpoint-snapshotting blends between successive values
//!   of an interpolable type
//! - **Pulses**: Infinite alternating oscillation for attract states
//! - **Easing Functions**: Standard cubic-bezier timing curves
//! - **Pacing metrics**: An injectable observer of frame pacing and
//!   sequencer lifecycle
//!
//! # Architecture
//!
//! ```text
//! PhaseSequencer
//!   ├── PhasePlan (ordered Phase descriptors, captured per run)
//!   └── EventQueue (drained lifecycle events)
//!
//! ContentFade / Crossfade / Pulse
//!   └── Owner's frame loop feeds update(delta_ms); values are read back
//!       each redraw and projected into opacity, offset, or color
//! ```
//!
//! Every driver here is caller-ticked: no instance owns a timer, so dropping
//! one cancels everything it would ever have done.

pub mod content;
pub mod crossfade;
pub mod easing;
pub mod events;
pub mod lerp;
pub mod metrics;
pub mod phase;
pub mod pulse;
pub mod sequencer;

pub use content::{ContentFade, FadeStage, FadeTuning};
pub use crossfade::{ColorFade, Crossfade, CrossfadeTuning};
pub use easing::EasingCurve;
pub use events::{EventQueue, SequencerEvent};
pub use lerp::Lerp;
pub use metrics::{MotionObserver, PacingMonitor};
pub use phase::{Phase, PhasePlan};
pub use pulse::{Pulse, PulseTuning};
pub use sequencer::PhaseSequencer;
