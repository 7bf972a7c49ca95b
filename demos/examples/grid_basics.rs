// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor layout basics: the deterministic grid and the jittered variant.
//!
//! Run:
//! - `cargo run -p windfall_demos --example grid_basics`

use kurbo::Size;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use windfall_grid::{GridSpec, JitterParams, LayoutParams, generate, generate_jittered};

fn main() {
    let labels = [
        "React",
        "TypeScript",
        "Three.js",
        "WebGL",
        "GSAP",
        "Tailwind",
        "Node.js",
        "Vite",
        "GraphQL",
    ];
    let size = Size::new(640.0, 420.0);
    let params = LayoutParams::default();

    let spec = GridSpec::for_count(labels.len());
    println!(
        "== Grid ==\n  {} items -> {} x {} cells",
        labels.len(),
        spec.cols,
        spec.rows
    );

    let anchors = generate(labels.len(), size, &params);
    for (label, a) in labels.iter().zip(&anchors) {
        println!("  {label:<12} anchor ({:7.2}, {:7.2})", a.x, a.y);
    }

    // Same arguments, same table.
    assert_eq!(anchors, generate(labels.len(), size, &params));

    println!("== Jittered (seed 7) ==");
    let mut rng = SmallRng::seed_from_u64(7);
    let jittered = generate_jittered(
        labels.len(),
        size,
        &params,
        &JitterParams::default(),
        &mut rng,
    );
    for (label, a) in labels.iter().zip(&jittered) {
        println!("  {label:<12} anchor ({:7.2}, {:7.2})", a.x, a.y);
    }
}
