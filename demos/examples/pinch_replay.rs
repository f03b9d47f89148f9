// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pinch replay.
//!
//! Replay a JSON gesture script through an image viewer and print the layer
//! transforms produced for each sample.
//!
//! Run:
//! - `cargo run -p understory_demos --example pinch_replay`
//! - `cargo run -p understory_demos --example pinch_replay -- path/to/script.json`

use std::error::Error;

use understory_demos::{GestureScript, replay};

const WALKTHROUGH: &str = include_str!("../gestures/walkthrough.json");

fn main() -> Result<(), Box<dyn Error>> {
    let json = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => WALKTHROUGH.to_owned(),
    };
    let script = GestureScript::from_json(&json)?;
    let replay = replay(&script)?;

    let r = replay.display_rect;
    println!(
        "display box: {:.1}x{:.1} at ({:.1}, {:.1})",
        r.width(),
        r.height(),
        r.x0,
        r.y0
    );

    for (i, step) in replay.steps.iter().enumerate() {
        let t = step.transforms;
        println!(
            "{i:>3} {:<9} x{:<6.3} focal ({:>7.1}, {:>7.1}) | container t=({:>8.2}, {:>8.2}) s={:.3} | image t=({:>8.2}, {:>8.2}) | base s={:.3}",
            format!("{:?}", step.sample.phase),
            step.sample.cumulative_scale,
            step.sample.focal.x,
            step.sample.focal.y,
            t.container.translation.x,
            t.container.translation.y,
            t.container.scale,
            t.image.translation.x,
            t.image.translation.y,
            step.state.base_scale,
        );
    }
    Ok(())
}
