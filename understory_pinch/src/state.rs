// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Retained zoom state of one image viewer.
///
/// All values are in viewport units, with translations measured from the
/// viewport center. The `base_*` fields hold what earlier, completed gestures
/// committed; `scale` and `origin` are live while a gesture is in progress.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GestureState {
    /// Effective scale.
    pub scale: f64,
    /// Scale committed by completed gestures.
    pub base_scale: f64,
    /// Container translation.
    pub origin: Vec2,
    /// Translation committed by completed gestures.
    pub base_origin: Vec2,
}

impl GestureState {
    /// Unscaled and centered.
    pub const IDENTITY: Self = Self {
        scale: 1.0,
        base_scale: 1.0,
        origin: Vec2::ZERO,
        base_origin: Vec2::ZERO,
    };

    /// Returns `true` if every value is exactly at identity.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns `true` if the live values equal the committed ones.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.scale == self.base_scale && self.origin == self.base_origin
    }
}

impl Default for GestureState {
    fn default() -> Self {
        Self::IDENTITY
    }
}
