// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Falling words end to end: split display text, gate the start, scatter,
//! and let everything rain onto the floor.
//!
//! Run:
//! - `cargo run -p windfall_demos --example falling_words`

use kurbo::Rect;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use windfall_field::measure::{DEFAULT_MEASURE_HOPS, Measurable, visible_bounds};
use windfall_world::{ArenaParams, Ballistic, FallingScene, StartLatch, Trigger, WorldParams, words};

struct Element {
    rect: Rect,
    parent: Option<Box<Element>>,
}

impl Measurable for Element {
    fn bounds(&self) -> Rect {
        self.rect
    }
    fn parent(&self) -> Option<&Self> {
        self.parent.as_deref()
    }
}

fn main() {
    let spans = words::split_words(
        "React JavaScript TypeScript Three.js WebGL GSAP Tailwind CSS",
        &["React", "Three", "Tailwind"],
    );
    println!("== Words ==");
    for s in &spans {
        let mark = if s.highlighted { "*" } else { " " };
        println!("  {mark} {}", s.text);
    }

    // The effect container mounts collapsed; its styled wrapper has the
    // real bounds, so the measurement walk lands there.
    let container = Element {
        rect: Rect::ZERO,
        parent: Some(Box::new(Element {
            rect: Rect::new(0.0, 0.0, 640.0, 420.0),
            parent: None,
        })),
    };
    let size = visible_bounds(&container, DEFAULT_MEASURE_HOPS).size();
    println!("measured container: {} x {}", size.width, size.height);

    // Fake the host's measurement pass: one rect per word, flowed into
    // wrapped rows near the top of the container.
    let mut x = 20.0;
    let mut y = 24.0;
    let rects: Vec<Rect> = spans
        .iter()
        .map(|s| {
            let w = 24.0 + 14.0 * s.text.len() as f64;
            if x + w > size.width - 20.0 {
                x = 20.0;
                y += 36.0;
            }
            let r = Rect::new(x, y, x + w, y + 28.0);
            x += w + 8.0;
            r
        })
        .collect();

    // The effect is armed to start when the section scrolls into view.
    let mut latch = StartLatch::new(Trigger::Scroll);
    assert!(!latch.started());
    let fired = latch.on_intersection(0.25);
    assert!(fired && latch.started());
    println!("latch fired on intersection");

    // Slightly lighter-than-standard gravity, the way the skills section
    // tunes it.
    let world = Ballistic::with_params(WorldParams { gravity: 0.8 });
    let mut scene = FallingScene::mount(world, &rects, size, ArenaParams::default());
    println!("mounted {} words", scene.word_count());
    scene.scatter(&mut SmallRng::seed_from_u64(7));

    // Three seconds at the reference rate.
    for _ in 0..180 {
        let _ = scene.tick(1.0 / 60.0);
    }

    println!("== After 3 s ==");
    // The words are 28 px tall; no bottom edge ever passes below the
    // floor's top surface.
    let floor_top = scene.arena().floor_top(size.height);
    let poses = scene.tick(1.0 / 60.0).to_vec();
    for (s, pose) in spans.iter().zip(&poses) {
        println!(
            "  {:<12} at ({:7.2}, {:7.2}) angle {:+.3} rad",
            s.text, pose.position.x, pose.position.y, pose.angle
        );
        assert!(
            pose.position.y + 14.0 <= floor_top + 1e-6,
            "word sank through the floor"
        );
    }

    scene.teardown();
    scene.teardown();
    println!("torn down: {} poses", scene.tick(1.0 / 60.0).len());
}
