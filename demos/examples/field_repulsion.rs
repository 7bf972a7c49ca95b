// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer repulsion end to end: sweep a pointer across the container and
//! watch nearby items give way, then relax.
//!
//! Run:
//! - `cargo run -p windfall_demos --example field_repulsion`

use kurbo::{Point, Size};
use windfall_field::{FieldEngine, FieldParams};
use windfall_grid::LayoutParams;

fn main() {
    let labels = vec![
        "React", "TypeScript", "Three.js", "WebGL", "GSAP", "Tailwind", "CSS", "HTML", "Node.js",
    ];
    let mut engine = FieldEngine::new(labels, FieldParams::default(), LayoutParams::default());
    engine.resized(Size::new(600.0, 400.0));
    let _ = engine.tick();

    // Sweep left to right through the vertical middle, one sample per frame.
    println!("== Sweep ==");
    for frame in 0..=60 {
        engine.pointer_moved(Point::new(10.0 * frame as f64, 200.0));
        let p = engine.tick()[4];
        if frame % 20 == 0 {
            let label = engine.items()[4];
            println!("  frame {frame:>2}: {label:<12} at ({:7.2}, {:7.2})", p.x, p.y);
        }
    }

    // Pointer leaves; everything settles back onto its anchor.
    engine.pointer_left();
    for _ in 0..240 {
        let _ = engine.tick();
    }
    println!("== At rest ==");
    let anchors = engine.anchors().to_vec();
    let positions = engine.tick().to_vec();
    for ((label, anchor), p) in engine.items().iter().zip(&anchors).zip(&positions) {
        let drift = (*p - *anchor).hypot();
        println!("  {label:<12} drift from anchor: {drift:.6}");
        assert!(drift < 1e-3);
    }
}
