// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pinch --heading-base-level=0

//! Understory Pinch: pinch-to-zoom for image viewers.
//!
//! This crate turns a stream of pinch samples (phase, scale since the gesture
//! started, focal point) into two layer transforms for an image viewer:
//! - the **container** is translated and scaled;
//! - the **image** inside it is translated the opposite way, so the picture
//!   pans under a fixed-size window instead of the window sliding around.
//!
//! Successive gestures compose: a gesture that ends zoomed in becomes the
//! starting point of the next one. A gesture that ends at or below
//! [`ZOOM_FLOOR`] snaps the viewer back to the unscaled, centered fit.
//!
//! It does **not** render anything or talk to a platform gesture API. Callers
//! are expected to:
//! - Produce [`PinchSample`]s from their gesture source, directly or through
//!   [`PinchRecognizer`] when the source reports per-event deltas.
//! - Apply the [`LayerTransforms`] returned for every sample immediately.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_pinch::{PinchController, PinchSample};
//!
//! let mut pinch = PinchController::new(Size::new(1000.0, 2000.0));
//! let focal = Point::new(500.0, 1000.0);
//!
//! // Zoom in 2x around the viewport center and let go.
//! pinch.on_sample(PinchSample::begin(focal));
//! pinch.on_sample(PinchSample::active(2.0, focal));
//! pinch.on_sample(PinchSample::end(2.0, focal));
//! assert_eq!(pinch.state().base_scale, 2.0);
//!
//! // Pinch out to an effective 0.8x: releasing snaps back to the fit.
//! pinch.on_sample(PinchSample::begin(focal));
//! pinch.on_sample(PinchSample::active(0.4, focal));
//! pinch.on_sample(PinchSample::end(0.4, focal));
//! assert!(pinch.state().is_identity());
//! ```
//!
//! ## Features
//!
//! - `ui_events_adapter`: [`PinchRecognizer::recognize`] for `ui-events` pointer events.
//! - `image_fit_adapter`: [`ImageViewer`], combining the controller with
//!   `understory_image_fit` letterbox sizing.
//! - `serde`: serialization for samples, state and transforms.
//!
//! Diagnostics go through the `log` facade.
//!
//! This crate is `no_std`.

#![no_std]

mod controller;
pub mod recognizer;
mod sample;
mod state;
mod transforms;
#[cfg(feature = "image_fit_adapter")]
mod viewer;

pub use controller::{ControllerPhase, PinchController, ZOOM_FLOOR};
pub use recognizer::{PinchRecognizer, RecognizedSamples};
pub use sample::{GesturePhase, PinchSample, SampleError};
pub use state::GestureState;
pub use transforms::{LayerTransform, LayerTransforms};
#[cfg(feature = "image_fit_adapter")]
pub use viewer::ImageViewer;
