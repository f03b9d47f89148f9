// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

/// Aspect ratio assumed while the natural size of an image is unknown.
///
/// A square keeps the letterboxed box on screen and inside the viewport until
/// the real metadata arrives (or forever, if it never does).
pub const PLACEHOLDER_ASPECT: f64 = 1.0;

/// Natural pixel dimensions of a decoded image.
///
/// This is derived once per image source and treated as immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageGeometry {
    /// Natural width in pixels.
    pub natural_width: f64,
    /// Natural height in pixels.
    pub natural_height: f64,
}

impl ImageGeometry {
    /// Creates geometry from natural pixel dimensions.
    #[must_use]
    pub const fn new(natural_width: f64, natural_height: f64) -> Self {
        Self {
            natural_width,
            natural_height,
        }
    }

    /// Returns the natural size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.natural_width, self.natural_height)
    }

    /// Returns `true` if both dimensions are finite and strictly positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        is_positive(self.natural_width) && is_positive(self.natural_height)
    }

    /// Returns `width / height`, or `None` for degenerate geometry.
    #[must_use]
    pub fn aspect_ratio(&self) -> Option<f64> {
        self.is_valid()
            .then(|| self.natural_width / self.natural_height)
    }
}

/// Computes the largest size with the aspect ratio of `natural` that fits
/// entirely inside `viewport`.
///
/// When the image is relatively wider than the viewport it is fit to the
/// viewport width, otherwise to the viewport height. The matching dimension is
/// reproduced exactly; the other one never exceeds the viewport.
///
/// A degenerate `natural` size falls back to [`PLACEHOLDER_ASPECT`].
///
/// ```rust
/// use kurbo::Size;
/// use understory_image_fit::compute_display_size;
///
/// let display = compute_display_size(Size::new(800.0, 400.0), Size::new(1000.0, 2000.0));
/// assert_eq!(display, Size::new(1000.0, 500.0));
/// ```
#[must_use]
pub fn compute_display_size(natural: Size, viewport: Size) -> Size {
    let aspect = ImageGeometry::new(natural.width, natural.height)
        .aspect_ratio()
        .unwrap_or(PLACEHOLDER_ASPECT);
    fit_aspect(aspect, viewport)
}

/// Fits a box with the given `width / height` aspect ratio inside `viewport`.
///
/// Non-finite or non-positive aspects are replaced by [`PLACEHOLDER_ASPECT`].
/// A degenerate viewport yields [`Size::ZERO`].
#[must_use]
pub fn fit_aspect(aspect: f64, viewport: Size) -> Size {
    if !is_positive(viewport.width) || !is_positive(viewport.height) {
        return Size::ZERO;
    }
    let aspect = if is_positive(aspect) {
        aspect
    } else {
        PLACEHOLDER_ASPECT
    };

    let viewport_aspect = viewport.width / viewport.height;
    if aspect > viewport_aspect {
        Size::new(
            viewport.width,
            (viewport.width / aspect).min(viewport.height),
        )
    } else {
        Size::new(
            (viewport.height * aspect).min(viewport.width),
            viewport.height,
        )
    }
}

/// Places a display box of size `display` at the center of a viewport whose
/// top-left corner is the origin.
#[must_use]
pub fn centered_rect(display: Size, viewport: Size) -> Rect {
    let center = Point::new(viewport.width * 0.5, viewport.height * 0.5);
    Rect::from_center_size(center, display)
}

fn is_positive(v: f64) -> bool {
    v.is_finite() && v > 0.0
}
