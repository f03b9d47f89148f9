// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scripted pinch replays.
//!
//! A gesture script is a JSON document with a viewport, optional image
//! geometry and a list of pinch samples. [`replay`] drives an
//! [`ImageViewer`] through it and records what the viewer produced for every
//! sample.

use std::fmt;

use kurbo::{Rect, Size};
use serde::Deserialize;
use understory_image_fit::{ImageGeometry, MetadataError};
use understory_pinch::{GestureState, ImageViewer, LayerTransforms, PinchSample};

/// A recorded gesture stream.
#[derive(Clone, Debug, Deserialize)]
pub struct GestureScript {
    /// Viewport size.
    pub viewport: Size,
    /// Natural image size; `None` replays a failed metadata lookup.
    #[serde(default)]
    pub image: Option<ImageGeometry>,
    /// Samples in delivery order.
    pub samples: Vec<PinchSample>,
}

impl GestureScript {
    /// Parses a script from JSON.
    pub fn from_json(json: &str) -> Result<Self, ScriptError> {
        serde_json::from_str(json).map_err(ScriptError::Parse)
    }
}

/// A script could not be loaded.
#[derive(Debug)]
pub enum ScriptError {
    /// Malformed JSON or missing fields.
    Parse(serde_json::Error),
    /// The script contains no samples.
    Empty,
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "invalid gesture script: {err}"),
            Self::Empty => f.write_str("gesture script has no samples"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(err) => Some(err),
            Self::Empty => None,
        }
    }
}

/// What the viewer produced for one sample.
#[derive(Clone, Copy, Debug)]
pub struct ReplayStep {
    /// The sample as fed to the viewer.
    pub sample: PinchSample,
    /// Transforms returned for it.
    pub transforms: LayerTransforms,
    /// Retained state afterwards.
    pub state: GestureState,
}

/// Result of a replay.
#[derive(Clone, Debug)]
pub struct Replay {
    /// Unscaled display box of the image.
    pub display_rect: Rect,
    /// One entry per sample.
    pub steps: Vec<ReplayStep>,
}

/// Runs `script` through a fresh viewer.
pub fn replay(script: &GestureScript) -> Result<Replay, ScriptError> {
    if script.samples.is_empty() {
        return Err(ScriptError::Empty);
    }

    let mut viewer = ImageViewer::new(script.viewport);
    if let Some(request) = viewer.load(Some("script")) {
        let result = script.image.ok_or(MetadataError::Unavailable);
        viewer.on_metadata(request.generation, result);
    }

    let steps = script
        .samples
        .iter()
        .map(|&sample| {
            let transforms = viewer.on_sample(sample);
            ReplayStep {
                sample,
                transforms,
                state: *viewer.pinch().state(),
            }
        })
        .collect();

    Ok(Replay {
        display_rect: viewer.display_rect(),
        steps,
    })
}
