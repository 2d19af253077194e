//! Easing curves for transition timing.
//!
//! An easing curve is a monotonic mapping from elapsed-time fraction to
//! progress fraction, shaping acceleration and deceleration over a phase.
//!
//! # Usage
//!
//! ```
//! use scrim_motion::easing::EasingCurve;
//!
//! let curve = EasingCurve::EaseInOut;
//! let progress = curve.evaluate(0.5);
//!
//! let custom = EasingCurve::bezier(0.4, 0.0, 0.2, 1.0);
//! let progress = custom.evaluate(0.5);
//! ```

use serde::{Deserialize, Serialize};

/// Easing curve for phase timing.
///
/// Maps a linear time fraction (0.0 to 1.0) to an eased progress fraction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EasingCurve {
    /// No easing; progress tracks time exactly.
    Linear,

    /// Slow start, accelerating.
    /// Equivalent to `cubic-bezier(0.42, 0, 1, 1)`.
    EaseIn,

    /// Fast start, decelerating.
    /// Equivalent to `cubic-bezier(0, 0, 0.58, 1)`.
    EaseOut,

    /// Slow start and end, fast middle.
    /// Equivalent to `cubic-bezier(0.42, 0, 0.58, 1)`.
    EaseInOut,

    /// Custom cubic bezier curve with control points (x1, y1), (x2, y2).
    /// x values must lie in [0, 1].
    CubicBezier { x1: f32, y1: f32, x2: f32, y2: f32 },
}

impl Default for EasingCurve {
    fn default() -> Self {
        Self::EaseInOut
    }
}

impl EasingCurve {
    /// Evaluate the curve at time fraction `t`.
    ///
    /// Input is clamped to [0, 1]; output is the eased progress fraction.
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => bezier_progress(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => bezier_progress(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => bezier_progress(0.42, 0.0, 0.58, 1.0, t),
            Self::CubicBezier { x1, y1, x2, y2 } => bezier_progress(*x1, *y1, *x2, *y2, t),
        }
    }

    /// Create a custom cubic bezier curve.
    ///
    /// # Panics
    /// Panics if `x1` or `x2` lie outside [0, 1].
    pub fn bezier(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        assert!(
            (0.0..=1.0).contains(&x1) && (0.0..=1.0).contains(&x2),
            "bezier x control points must be in [0, 1]"
        );
        Self::CubicBezier { x1, y1, x2, y2 }
    }
}

/// Evaluate a cubic bezier timing curve at the given time fraction.
fn bezier_progress(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    if t <= 0.0 {
        return 0.0;
    }
    if t >= 1.0 {
        return 1.0;
    }

    let s = solve_curve_x(x1, x2, t);
    axis_at(y1, y2, s)
}

/// Find the curve parameter whose x coordinate equals `target` using
/// Newton-Raphson iteration.
fn solve_curve_x(x1: f32, x2: f32, target: f32) -> f32 {
    let mut s = target;

    for _ in 0..8 {
        let err = axis_at(x1, x2, s) - target;
        if err.abs() < 1e-6 {
            break;
        }

        let slope = axis_slope(x1, x2, s);
        if slope.abs() < 1e-6 {
            break;
        }

        s -= err / slope;
        s = s.clamp(0.0, 1.0);
    }

    s
}

/// One axis of the bezier: 3(1-s)²s·c1 + 3(1-s)s²·c2 + s³.
#[inline]
fn axis_at(c1: f32, c2: f32, s: f32) -> f32 {
    let s2 = s * s;
    let inv = 1.0 - s;
    3.0 * inv * inv * s * c1 + 3.0 * inv * s2 * c2 + s2 * s
}

/// Derivative of one axis with respect to the curve parameter.
#[inline]
fn axis_slope(c1: f32, c2: f32, s: f32) -> f32 {
    let inv = 1.0 - s;
    3.0 * inv * inv * c1 + 6.0 * inv * s * (c2 - c1) + 3.0 * s * s * (1.0 - c2)
}
