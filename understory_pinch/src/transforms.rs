// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Transform descriptors for the two rendered layers.

use kurbo::{Affine, Point, Vec2};

use crate::state::GestureState;

/// Translate-then-scale descriptor for one layer.
///
/// Both parts are relative to the layer's own center, which is how view
/// systems with a centered transform origin apply them.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerTransform {
    /// Translation in the parent's units.
    pub translation: Vec2,
    /// Uniform scale about the layer center.
    pub scale: f64,
}

impl LayerTransform {
    /// No translation, unit scale.
    pub const IDENTITY: Self = Self {
        translation: Vec2::ZERO,
        scale: 1.0,
    };

    /// Returns the transform as an affine map on center-relative coordinates.
    ///
    /// A layer-local point `p` lands at `translation + scale * p` in the parent.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation) * Affine::scale(self.scale)
    }
}

impl Default for LayerTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// The pair of transforms applied on every pinch sample.
///
/// The container scales and moves with the gesture; the image inside it moves
/// the opposite way so the picture pans under a fixed-size window.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayerTransforms {
    /// `translate(origin)` then `scale(scale)`.
    pub container: LayerTransform,
    /// `translate(-origin)`, never scaled.
    pub image: LayerTransform,
}

impl LayerTransforms {
    /// Both layers at identity.
    pub const IDENTITY: Self = Self {
        container: LayerTransform::IDENTITY,
        image: LayerTransform::IDENTITY,
    };

    /// Derives the layer transforms from the live `scale` and `origin`.
    #[must_use]
    pub fn from_state(state: &GestureState) -> Self {
        Self {
            container: LayerTransform {
                translation: state.origin,
                scale: state.scale,
            },
            image: LayerTransform {
                translation: -state.origin,
                scale: 1.0,
            },
        }
    }

    /// Combined map from image-local to viewport-center-relative coordinates.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        self.container.to_affine() * self.image.to_affine()
    }

    /// Maps a point of the unscaled image, in viewport coordinates, to where it
    /// is drawn on screen. Both layers are centered on `viewport_center`.
    ///
    /// Useful for hit testing against the zoomed image.
    #[must_use]
    pub fn image_to_viewport(&self, point: Point, viewport_center: Point) -> Point {
        let local = (point - viewport_center).to_point();
        viewport_center + (self.to_affine() * local).to_vec2()
    }

    /// Inverse of [`LayerTransforms::image_to_viewport`].
    #[must_use]
    pub fn viewport_to_image(&self, point: Point, viewport_center: Point) -> Point {
        let local = (point - viewport_center).to_point();
        viewport_center + (self.to_affine().inverse() * local).to_vec2()
    }
}
