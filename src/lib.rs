//! Scrim — transition sequencing and value interpolation for UI front-ends.
//!
//! This crate re-exports the public API of `scrim-motion`. See that crate
//! for the sequencer, crossfade, and pulse documentation.

pub use scrim_motion::*;
