// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_image_fit --heading-base-level=0

//! Understory Image Fit: letterbox sizing of images inside a viewport.
//!
//! This crate answers one question for image viewers: how large should an
//! image be drawn, unscaled, so that it fits entirely inside the viewport
//! while keeping its aspect ratio?
//!
//! - [`compute_display_size`] picks width-fit or height-fit depending on
//!   whether the image is relatively wider than the viewport.
//! - [`ImageFit`] tracks the metadata lookup for the current image source,
//!   using a square placeholder until (and unless) the natural size arrives.
//!
//! It does **not** decode images or perform any I/O. Callers are expected to:
//! - Resolve each [`MetadataRequest`] through their own image pipeline.
//! - Feed the answer back through [`ImageFit::resolve`].
//! - Lay out the image using [`ImageFit::display_rect`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use understory_image_fit::{ImageFit, ImageGeometry, MetadataError};
//!
//! let mut fit = ImageFit::new(Size::new(1000.0, 2000.0));
//! let request = fit.request(Some("https://example.com/thumb.jpg")).unwrap();
//!
//! // The lookup failed: the square placeholder stays in place.
//! fit.resolve(request.generation, Err(MetadataError::Unavailable));
//! assert_eq!(fit.display_size(), Size::new(1000.0, 1000.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod fit;
mod metadata;

pub use fit::{ImageGeometry, PLACEHOLDER_ASPECT, centered_rect, compute_display_size, fit_aspect};
pub use metadata::{ImageFit, MetadataError, MetadataRequest};
