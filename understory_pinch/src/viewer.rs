// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A complete image viewer state: letterbox fit plus pinch zoom.

use kurbo::{Point, Rect, Size};
use understory_image_fit::{ImageFit, ImageGeometry, MetadataError, MetadataRequest};

use crate::controller::PinchController;
use crate::sample::PinchSample;
use crate::transforms::LayerTransforms;

/// State of one mounted image viewer.
///
/// Owns its own [`ImageFit`] and [`PinchController`]; nothing is shared
/// between viewers. The host resolves metadata requests, forwards pinch
/// samples, and draws the image inside [`ImageViewer::display_rect`] with the
/// current [`ImageViewer::transforms`].
///
/// ```rust
/// use kurbo::{Point, Size};
/// use understory_image_fit::ImageGeometry;
/// use understory_pinch::{ImageViewer, PinchSample};
///
/// let mut viewer = ImageViewer::new(Size::new(1000.0, 2000.0));
/// if let Some(request) = viewer.load(Some("thumb.jpg")) {
///     viewer.on_metadata(request.generation, Ok(ImageGeometry::new(800.0, 400.0)));
/// }
/// assert_eq!(viewer.display_size(), Size::new(1000.0, 500.0));
///
/// let center = Point::new(500.0, 1000.0);
/// viewer.on_sample(PinchSample::begin(center));
/// let t = viewer.on_sample(PinchSample::active(2.0, center));
/// assert_eq!(t.container.scale, 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct ImageViewer {
    fit: ImageFit,
    pinch: PinchController,
}

impl ImageViewer {
    /// Creates a viewer for a viewport of the given size.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            fit: ImageFit::new(viewport),
            pinch: PinchController::new(viewport),
        }
    }

    /// Creates a viewer around an existing fit, e.g. one with a custom placeholder.
    #[must_use]
    pub fn with_fit(fit: ImageFit) -> Self {
        let pinch = PinchController::new(fit.viewport());
        Self { fit, pinch }
    }

    /// Shows a new source. Zoom is reset when the source changes.
    ///
    /// Returns the metadata lookup the host should perform.
    pub fn load(&mut self, uri: Option<&str>) -> Option<MetadataRequest> {
        if self.fit.uri() != uri {
            self.pinch.reset();
        }
        self.fit.request(uri)
    }

    /// Applies the answer to a metadata lookup. Returns `true` if the display size changed.
    pub fn on_metadata(
        &mut self,
        generation: u64,
        result: Result<ImageGeometry, MetadataError>,
    ) -> bool {
        self.fit.resolve(generation, result)
    }

    /// Forwards a pinch sample and returns the transforms to apply.
    pub fn on_sample(&mut self, sample: PinchSample) -> LayerTransforms {
        self.pinch.on_sample(sample)
    }

    /// Replaces the viewport size for both the fit and the controller.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.fit.set_viewport(viewport);
        self.pinch.set_viewport(viewport);
    }

    /// Returns the unscaled display size.
    #[must_use]
    pub fn display_size(&self) -> Size {
        self.fit.display_size()
    }

    /// Returns the unscaled display box, centered in the viewport.
    #[must_use]
    pub fn display_rect(&self) -> Rect {
        self.fit.display_rect()
    }

    /// Returns the transforms produced by the most recent sample.
    #[must_use]
    pub fn transforms(&self) -> LayerTransforms {
        self.pinch.transforms()
    }

    /// Returns the zoomed image bounds on screen.
    #[must_use]
    pub fn visible_image_rect(&self) -> Rect {
        let rect = self.display_rect();
        let center = self.pinch.viewport_center();
        let t = self.transforms();
        let p0 = t.image_to_viewport(Point::new(rect.x0, rect.y0), center);
        let p1 = t.image_to_viewport(Point::new(rect.x1, rect.y1), center);
        Rect::from_points(p0, p1)
    }

    /// Returns the letterbox fit.
    #[must_use]
    pub fn fit(&self) -> &ImageFit {
        &self.fit
    }

    /// Returns the pinch controller.
    #[must_use]
    pub fn pinch(&self) -> &PinchController {
        &self.pinch
    }
}
