// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};

use crate::sample::{GesturePhase, PinchSample};
use crate::state::GestureState;
use crate::transforms::LayerTransforms;

/// Scale at or below which a finished gesture snaps back to the unscaled fit.
pub const ZOOM_FLOOR: f64 = 1.0;

/// Where the controller is in the gesture lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ControllerPhase {
    /// No gesture in progress.
    #[default]
    Idle,
    /// A gesture began but has not moved yet.
    Armed,
    /// A gesture is scaling.
    Active,
}

/// Pinch-to-zoom state machine for one mounted image viewer.
///
/// Feed it every sample of the pinch gesture stream, in order, through
/// [`PinchController::on_sample`] and apply the returned [`LayerTransforms`]
/// to the container and image layers right away.
///
/// While a gesture is active, the container origin is chosen so that the
/// point under the fingers keeps its position relative to the origin the
/// gesture started from. Once the effective scale drops to [`ZOOM_FLOOR`] or
/// below, the origin stops following the fingers until the gesture ends. A
/// gesture that ends at or below the floor resets everything to identity;
/// one that ends above it becomes the starting point of the next gesture.
///
/// The controller is meant to be driven from a single event loop; it does no
/// locking and keeps no shared state.
///
/// ```rust
/// use kurbo::{Point, Size, Vec2};
/// use understory_pinch::{PinchController, PinchSample};
///
/// let mut pinch = PinchController::new(Size::new(1000.0, 2000.0));
/// let center = Point::new(500.0, 1000.0);
///
/// pinch.on_sample(PinchSample::begin(center));
/// let t = pinch.on_sample(PinchSample::active(2.0, center));
/// assert_eq!(t.container.scale, 2.0);
/// assert_eq!(t.container.translation, Vec2::ZERO);
///
/// pinch.on_sample(PinchSample::end(2.0, center));
/// assert_eq!(pinch.state().base_scale, 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct PinchController {
    viewport: Size,
    state: GestureState,
    phase: ControllerPhase,
    // Origin computed from the most recent active sample, adopted or not.
    candidate_origin: Vec2,
    transforms: LayerTransforms,
}

impl PinchController {
    /// Creates an idle controller at identity for a viewport of the given size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            viewport,
            state: GestureState::IDENTITY,
            phase: ControllerPhase::Idle,
            candidate_origin: Vec2::ZERO,
            transforms: LayerTransforms::IDENTITY,
        }
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Sets the viewport size used to center focal points.
    ///
    /// Retained state is kept as is.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Returns the viewport center in viewport coordinates.
    #[must_use]
    pub fn viewport_center(&self) -> Point {
        Point::new(self.viewport.width * 0.5, self.viewport.height * 0.5)
    }

    /// Returns the retained gesture state.
    #[must_use]
    pub fn state(&self) -> &GestureState {
        &self.state
    }

    /// Returns the lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> ControllerPhase {
        self.phase
    }

    /// Returns the transforms produced by the most recent sample.
    #[must_use]
    pub fn transforms(&self) -> LayerTransforms {
        self.transforms
    }

    /// Returns `true` if the committed scale is above [`ZOOM_FLOOR`].
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.state.base_scale > ZOOM_FLOOR
    }

    /// Drops all state and returns to identity.
    pub fn reset(&mut self) {
        self.state = GestureState::IDENTITY;
        self.phase = ControllerPhase::Idle;
        self.candidate_origin = Vec2::ZERO;
        self.transforms = LayerTransforms::IDENTITY;
    }

    /// Consumes one gesture sample and returns the transforms to apply.
    ///
    /// Samples with a non-finite or non-positive scale are processed with a
    /// scale of `1.0`; a non-finite focal point is replaced by the viewport
    /// center.
    pub fn on_sample(&mut self, sample: PinchSample) -> LayerTransforms {
        let center = self.viewport_center();
        if let Err(err) = sample.validate() {
            log::warn!("clamping malformed pinch sample: {err}");
        }
        let sample = sample.sanitized(center);

        match sample.phase {
            GesturePhase::Begin => self.begin(),
            GesturePhase::Active => self.update(sample.cumulative_scale, sample.focal - center),
            GesturePhase::End | GesturePhase::Cancelled => self.finish(sample.phase),
        }

        self.transforms = LayerTransforms::from_state(&self.state);
        self.transforms
    }

    fn begin(&mut self) {
        self.state.scale = self.state.base_scale;
        self.state.origin = self.state.base_origin;
        self.candidate_origin = self.state.base_origin;
        self.phase = ControllerPhase::Armed;
    }

    fn update(&mut self, cumulative_scale: f64, focal: Vec2) {
        if self.phase == ControllerPhase::Idle {
            log::trace!("pinch update without begin");
            self.begin();
        }
        self.phase = ControllerPhase::Active;

        let base_origin = self.state.base_origin;
        self.candidate_origin = (focal - base_origin) / cumulative_scale + base_origin;
        self.state.scale = cumulative_scale * self.state.base_scale;
        if self.state.scale > ZOOM_FLOOR {
            self.state.origin = self.candidate_origin;
        }

        log::trace!(
            "pinch x{cumulative_scale:.4}: scale {:.4}, origin ({:.2}, {:.2})",
            self.state.scale,
            self.state.origin.x,
            self.state.origin.y
        );
    }

    fn finish(&mut self, phase: GesturePhase) {
        if self.state.scale <= ZOOM_FLOOR {
            log::debug!(
                "pinch {phase:?} at scale {:.4}, snapping back to fit",
                self.state.scale
            );
            self.state = GestureState::IDENTITY;
            self.candidate_origin = Vec2::ZERO;
        } else {
            self.state.base_scale = self.state.scale;
            self.state.base_origin = self.candidate_origin;
            self.state.origin = self.candidate_origin;
            log::debug!(
                "pinch {phase:?} committed scale {:.4}, origin ({:.2}, {:.2})",
                self.state.base_scale,
                self.state.base_origin.x,
                self.state.base_origin.y
            );
        }
        self.phase = ControllerPhase::Idle;
    }
}
