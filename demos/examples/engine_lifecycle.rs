// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine lifecycle: unmeasured mounts, coalesced resizes, and idempotent
//! teardown.
//!
//! Run:
//! - `cargo run -p windfall_demos --example engine_lifecycle`

use kurbo::{Point, Size};
use windfall_field::{FieldEngine, FieldParams};
use windfall_grid::LayoutParams;

fn main() {
    let mut engine = FieldEngine::new(
        vec!["about", "projects", "skills", "contact"],
        FieldParams::default(),
        LayoutParams::default(),
    );

    // Mount: the container has not been measured, so frames are empty.
    assert!(engine.tick().is_empty());
    println!("unmeasured: empty frame");

    // Two resize observations land before the next frame; the second wins.
    engine.resized(Size::new(320.0, 200.0));
    engine.resized(Size::new(640.0, 400.0));
    let count = engine.tick().len();
    println!("after coalesced resize: {count} positions");
    assert_eq!(count, 4);
    // 2×2 grid over the 580×340 padded region: first cell center.
    assert_eq!(engine.anchors()[0], Point::new(175.0, 115.0));

    // Displace, resize, and note the field survives the relayout.
    engine.pointer_moved(Point::new(180.0, 115.0));
    for _ in 0..30 {
        let _ = engine.tick();
    }
    engine.resized(Size::new(800.0, 500.0));
    let p = engine.tick()[0];
    let drift = (p - engine.anchors()[0]).hypot();
    println!("offset carried across resize: {drift:.2} px");
    assert!(drift > 1.0);

    // Teardown is idempotent and final.
    engine.teardown();
    engine.teardown();
    assert!(!engine.is_running());
    assert!(engine.tick().is_empty());
    println!("torn down twice: no further frames");
}
