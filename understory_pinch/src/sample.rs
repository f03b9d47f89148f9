// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch samples as delivered by a gesture recognizer.

use core::fmt;

use kurbo::Point;

/// Phase of a pinch gesture.
///
/// A well-formed stream for one gesture is `Begin`, one or more `Active`,
/// then exactly one of `End` or `Cancelled`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GesturePhase {
    /// Two fingers came down; no scaling yet.
    Begin,
    /// The fingers moved.
    Active,
    /// The fingers lifted.
    End,
    /// The recognizer gave up on the gesture. Treated like [`GesturePhase::End`].
    Cancelled,
}

impl GesturePhase {
    /// Returns `true` for [`GesturePhase::End`] and [`GesturePhase::Cancelled`].
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::End | Self::Cancelled)
    }
}

/// One tick of a pinch gesture.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PinchSample {
    /// Gesture phase.
    pub phase: GesturePhase,
    /// Scale relative to the start of this gesture, not to the previous sample.
    pub cumulative_scale: f64,
    /// Midpoint between the fingers, in viewport coordinates (top-left origin).
    pub focal: Point,
}

impl PinchSample {
    /// Creates a sample.
    #[must_use]
    pub const fn new(phase: GesturePhase, cumulative_scale: f64, focal: Point) -> Self {
        Self {
            phase,
            cumulative_scale,
            focal,
        }
    }

    /// A [`GesturePhase::Begin`] sample at `focal`.
    #[must_use]
    pub const fn begin(focal: Point) -> Self {
        Self::new(GesturePhase::Begin, 1.0, focal)
    }

    /// A [`GesturePhase::Active`] sample.
    #[must_use]
    pub const fn active(cumulative_scale: f64, focal: Point) -> Self {
        Self::new(GesturePhase::Active, cumulative_scale, focal)
    }

    /// A [`GesturePhase::End`] sample.
    #[must_use]
    pub const fn end(cumulative_scale: f64, focal: Point) -> Self {
        Self::new(GesturePhase::End, cumulative_scale, focal)
    }

    /// A [`GesturePhase::Cancelled`] sample.
    #[must_use]
    pub const fn cancelled(cumulative_scale: f64, focal: Point) -> Self {
        Self::new(GesturePhase::Cancelled, cumulative_scale, focal)
    }

    /// Checks the numeric fields.
    pub fn validate(&self) -> Result<(), SampleError> {
        let s = self.cumulative_scale;
        if !s.is_finite() {
            return Err(SampleError::NonFiniteScale(s));
        }
        if s <= 0.0 {
            return Err(SampleError::NonPositiveScale(s));
        }
        if !self.focal.is_finite() {
            return Err(SampleError::NonFiniteFocal);
        }
        Ok(())
    }

    /// Returns a sample that is safe to feed into the transform math.
    ///
    /// A bad scale becomes `1.0`. A bad focal point becomes `center`, which
    /// the controller treats as a pinch without translation.
    #[must_use]
    pub fn sanitized(self, center: Point) -> Self {
        let cumulative_scale = if self.cumulative_scale.is_finite() && self.cumulative_scale > 0.0
        {
            self.cumulative_scale
        } else {
            1.0
        };
        let focal = if self.focal.is_finite() {
            self.focal
        } else {
            center
        };
        Self {
            phase: self.phase,
            cumulative_scale,
            focal,
        }
    }
}

/// A sample field that cannot be used as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SampleError {
    /// Cumulative scale is NaN or infinite.
    NonFiniteScale(f64),
    /// Cumulative scale is zero or negative.
    NonPositiveScale(f64),
    /// Focal point has a NaN or infinite coordinate.
    NonFiniteFocal,
}

impl fmt::Display for SampleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteScale(s) => write!(f, "cumulative scale {s} is not finite"),
            Self::NonPositiveScale(s) => write!(f, "cumulative scale {s} is not positive"),
            Self::NonFiniteFocal => f.write_str("focal point is not finite"),
        }
    }
}

impl core::error::Error for SampleError {}
