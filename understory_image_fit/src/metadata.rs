// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tracking of asynchronously delivered image metadata.
//!
//! The host owns the actual lookup (decoding headers, a platform image API,
//! a network round-trip). [`ImageFit`] only hands out [`MetadataRequest`]s and
//! folds the answers back into a display size, ignoring answers that belong
//! to a source which has since been replaced.

use alloc::string::{String, ToString};
use core::fmt;

use kurbo::{Rect, Size};

use crate::fit::{ImageGeometry, PLACEHOLDER_ASPECT, centered_rect, fit_aspect};

/// Reason an image's natural size could not be determined.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MetadataError {
    /// The lookup failed or the source could not be decoded.
    Unavailable,
    /// The lookup succeeded but reported unusable dimensions.
    InvalidDimensions {
        /// Reported width.
        width: f64,
        /// Reported height.
        height: f64,
    },
}

impl fmt::Display for MetadataError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unavailable => f.write_str("image metadata unavailable"),
            Self::InvalidDimensions { width, height } => {
                write!(f, "image reported invalid dimensions {width}x{height}")
            }
        }
    }
}

impl core::error::Error for MetadataError {}

/// A pending metadata lookup issued by [`ImageFit::request`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetadataRequest {
    /// Source to resolve.
    pub uri: String,
    /// Generation to pass back to [`ImageFit::resolve`].
    pub generation: u64,
}

/// Display sizing for one image inside one viewport.
///
/// Starts out with the square placeholder and switches to the real aspect
/// ratio once metadata for the current source resolves. Switching to another
/// source goes back to the placeholder until its own metadata arrives, so a
/// failed lookup never leaves a previous image's aspect behind. Failures are
/// logged and otherwise absorbed.
///
/// ```rust
/// use kurbo::Size;
/// use understory_image_fit::{ImageFit, ImageGeometry};
///
/// let mut fit = ImageFit::new(Size::new(1000.0, 2000.0));
/// assert_eq!(fit.display_size(), Size::new(1000.0, 1000.0));
///
/// let request = fit.request(Some("thumb.jpg")).unwrap();
/// fit.resolve(request.generation, Ok(ImageGeometry::new(800.0, 400.0)));
/// assert_eq!(fit.display_size(), Size::new(1000.0, 500.0));
/// ```
#[derive(Clone, Debug)]
pub struct ImageFit {
    viewport: Size,
    placeholder_aspect: f64,
    aspect: Option<f64>,
    uri: Option<String>,
    generation: u64,
    display: Size,
}

impl ImageFit {
    /// Creates a fit for `viewport` using [`PLACEHOLDER_ASPECT`] until metadata arrives.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        let mut fit = Self {
            viewport,
            placeholder_aspect: PLACEHOLDER_ASPECT,
            aspect: None,
            uri: None,
            generation: 0,
            display: Size::ZERO,
        };
        fit.refit();
        fit
    }

    /// Uses a different aspect ratio while metadata is unknown.
    ///
    /// Invalid values are ignored.
    #[must_use]
    pub fn with_placeholder_aspect(mut self, aspect: f64) -> Self {
        if aspect.is_finite() && aspect > 0.0 {
            self.placeholder_aspect = aspect;
            self.refit();
        }
        self
    }

    /// Returns the viewport size.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Replaces the viewport size and re-derives the display size.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        self.viewport = viewport;
        self.refit();
    }

    /// Returns the source currently being displayed, if any.
    #[must_use]
    pub fn uri(&self) -> Option<&str> {
        self.uri.as_deref()
    }

    /// Returns the generation of the most recent request.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts tracking a new source.
    ///
    /// Returns the lookup the host should perform, or `None` when there is no
    /// source or it is the one already tracked. A changed source falls back
    /// to the placeholder aspect until the new lookup resolves.
    pub fn request(&mut self, uri: Option<&str>) -> Option<MetadataRequest> {
        if self.uri.as_deref() == uri {
            return None;
        }
        self.generation = self.generation.wrapping_add(1);
        self.uri = uri.map(ToString::to_string);
        if self.aspect.take().is_some() {
            self.refit();
        }
        let uri = self.uri.clone()?;
        log::debug!("requesting image metadata for {uri} (generation {})", self.generation);
        Some(MetadataRequest {
            uri,
            generation: self.generation,
        })
    }

    /// Applies the answer to a lookup.
    ///
    /// Answers for an outdated generation are dropped. Errors, including
    /// geometry with degenerate dimensions, leave the placeholder in place.
    /// Returns `true` if the display size changed.
    pub fn resolve(
        &mut self,
        generation: u64,
        result: Result<ImageGeometry, MetadataError>,
    ) -> bool {
        if generation != self.generation {
            log::trace!(
                "dropping stale image metadata (generation {generation}, current {})",
                self.generation
            );
            return false;
        }

        let result = result.and_then(|geometry| {
            geometry
                .aspect_ratio()
                .ok_or(MetadataError::InvalidDimensions {
                    width: geometry.natural_width,
                    height: geometry.natural_height,
                })
        });

        match result {
            Ok(aspect) => {
                self.aspect = Some(aspect);
                let before = self.display;
                self.refit();
                log::debug!(
                    "image metadata resolved: aspect {aspect:.4}, display {}x{}",
                    self.display.width,
                    self.display.height
                );
                before != self.display
            }
            Err(err) => {
                log::warn!("keeping placeholder image size: {err}");
                false
            }
        }
    }

    /// Returns the aspect ratio in use, which may be the placeholder.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.aspect.unwrap_or(self.placeholder_aspect)
    }

    /// Returns `true` while no metadata has resolved for the current source.
    #[must_use]
    pub fn is_placeholder(&self) -> bool {
        self.aspect.is_none()
    }

    /// Returns the unscaled, letterboxed display size.
    #[must_use]
    pub fn display_size(&self) -> Size {
        self.display
    }

    /// Returns the display box centered in the viewport.
    #[must_use]
    pub fn display_rect(&self) -> Rect {
        centered_rect(self.display, self.viewport)
    }

    fn refit(&mut self) {
        self.display = fit_aspect(self.aspect_ratio(), self.viewport);
    }
}
