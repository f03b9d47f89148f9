// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recognizer turning incremental pinch deltas into cumulative pinch samples.
//!
//! Platform event sources (and `ui-events`) usually report a pinch as a
//! stream of per-event magnification deltas with no explicit begin or end.
//! [`PinchController`](crate::PinchController) needs the scale relative to the
//! start of the gesture, bracketed by begin and end phases. [`PinchRecognizer`]
//! bridges the two.
//!
//! ## Usage
//!
//! 1) Call [`PinchRecognizer::pinch_delta`] for every magnification delta; the
//!    first one of a gesture also yields a begin sample.
//! 2) Call [`PinchRecognizer::release`] when the fingers lift, or
//!    [`PinchRecognizer::cancel`] when the platform aborts the gesture.
//! 3) Forward every produced sample to the controller in order.
//!
//! With the `ui_events_adapter` feature, [`PinchRecognizer::recognize`] does
//! the dispatch for a `ui_events::pointer::PointerEvent`.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_pinch::{GesturePhase, PinchRecognizer};
//!
//! let mut recognizer = PinchRecognizer::new();
//! let focal = Point::new(120.0, 80.0);
//!
//! let samples = recognizer.pinch_delta(0.5, focal);
//! assert_eq!(samples[0].phase, GesturePhase::Begin);
//! assert_eq!(samples[1].cumulative_scale, 1.5);
//!
//! let samples = recognizer.pinch_delta(1.0, focal);
//! assert_eq!(samples[0].cumulative_scale, 3.0);
//!
//! let end = recognizer.release().unwrap();
//! assert_eq!(end.phase, GesturePhase::End);
//! ```

use kurbo::Point;
use smallvec::SmallVec;

use crate::sample::PinchSample;

/// Samples produced for one input event; at most a begin and an active sample.
pub type RecognizedSamples = SmallVec<[PinchSample; 2]>;

/// Accumulates pinch deltas into a cumulative scale.
#[derive(Clone, Copy, Debug)]
pub struct PinchRecognizer {
    cumulative: f64,
    focal: Point,
    in_gesture: bool,
}

impl Default for PinchRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl PinchRecognizer {
    /// Creates a recognizer with no gesture in progress.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cumulative: 1.0,
            focal: Point::ZERO,
            in_gesture: false,
        }
    }

    /// Returns `true` between the first delta of a gesture and its release.
    #[must_use]
    pub fn in_gesture(&self) -> bool {
        self.in_gesture
    }

    /// Returns the scale accumulated since the gesture started.
    #[must_use]
    pub fn cumulative_scale(&self) -> f64 {
        self.cumulative
    }

    /// Records a magnification delta at `focal`.
    ///
    /// The factor applied is `1 + delta`. Deltas that would make the factor
    /// non-positive or non-finite are dropped, but the focal point still
    /// updates and an active sample is still produced.
    pub fn pinch_delta(&mut self, delta: f64, focal: Point) -> RecognizedSamples {
        let mut samples = RecognizedSamples::new();
        if !self.in_gesture {
            self.in_gesture = true;
            self.cumulative = 1.0;
            samples.push(PinchSample::begin(focal));
        }

        let factor = 1.0 + delta;
        if factor.is_finite() && factor > 0.0 {
            self.cumulative *= factor;
        } else {
            log::warn!("ignoring pinch delta {delta}");
        }
        self.focal = focal;

        samples.push(PinchSample::active(self.cumulative, focal));
        samples
    }

    /// Ends the current gesture, if any.
    pub fn release(&mut self) -> Option<PinchSample> {
        self.finish().map(|(scale, focal)| PinchSample::end(scale, focal))
    }

    /// Cancels the current gesture, if any.
    pub fn cancel(&mut self) -> Option<PinchSample> {
        self.finish()
            .map(|(scale, focal)| PinchSample::cancelled(scale, focal))
    }

    /// Translates a `ui-events` pointer event into pinch samples.
    ///
    /// Pinch gestures feed [`PinchRecognizer::pinch_delta`], pointer up ends
    /// the gesture, pointer cancel cancels it. Everything else is ignored.
    ///
    /// Touchpad pinches in `ui-events` carry no end marker and are not
    /// followed by a pointer up, so on that input this never produces an end
    /// sample. Hosts driving touchpad pinches must call
    /// [`PinchRecognizer::release`] themselves, for example when the platform
    /// reports the end of the gesture or after a quiet period.
    #[cfg(feature = "ui_events_adapter")]
    pub fn recognize(&mut self, event: &ui_events::pointer::PointerEvent) -> RecognizedSamples {
        use ui_events::pointer::{PointerEvent, PointerGesture};

        match event {
            PointerEvent::Gesture(gesture_event) => {
                let PointerGesture::Pinch(delta) = &gesture_event.gesture else {
                    return RecognizedSamples::new();
                };
                self.pinch_delta(f64::from(*delta), gesture_event.state.logical_point())
            }
            PointerEvent::Up(_) => self.release().into_iter().collect(),
            PointerEvent::Cancel(_) => self.cancel().into_iter().collect(),
            _ => RecognizedSamples::new(),
        }
    }

    fn finish(&mut self) -> Option<(f64, Point)> {
        if !self.in_gesture {
            return None;
        }
        self.in_gesture = false;
        let scale = core::mem::replace(&mut self.cumulative, 1.0);
        Some((scale, self.focal))
    }
}
