// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windfall_field --heading-base-level=0

//! Windfall Field: a pointer repulsion-field simulator for anchored items.
//!
//! ## Overview
//!
//! Given an anchor table (from the `windfall_grid` layout crate or any
//! other source) and a
//! stream of pointer samples, this crate computes, once per display frame,
//! a smoothed displacement per item that pushes it away from the pointer and
//! relaxes it back when the pointer moves on. The emitted absolute positions
//! (`anchor + offset`) are the simulator's only output; rendering them is
//! the host's concern.
//!
//! ## Pieces
//!
//! - [`field`]: the pure per-frame math — linear-falloff repulsion targets
//!   and the exponential smoothing step.
//! - [`pointer`]: the latest-wins [`PointerTracker`](pointer::PointerTracker)
//!   cell fed by asynchronous pointer events.
//! - [`measure`]: latest-wins size observation and the collapsed-container
//!   measurement fallback.
//! - [`engine`] (feature `grid`): [`FieldEngine`](engine::FieldEngine), the
//!   full frame-driven component tying layout, simulation, and lifecycle
//!   together.
//!
//! ## Concurrency model
//!
//! Single-threaded and frame-driven by design. The offset table has exactly
//! one mutator (the per-frame step); pointer samples and sizes are plain
//! latest-wins cells written by event handlers and read at the next frame
//! boundary. On a run-to-completion event loop that is already race-free.
//! If you embed this in a genuinely multi-threaded host, put a
//! single-consumer channel in front of the cells instead of sharing them.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Vec2};
//! use windfall_field::{FieldParams, StepOutcome, field};
//!
//! let params = FieldParams {
//!     radius: 100.0,
//!     strength: 80.0,
//!     ..FieldParams::default()
//! };
//! let anchors = [Point::new(150.0, 200.0)];
//! let mut offsets = [Vec2::ZERO];
//!
//! // One frame with the pointer 50 px above the anchor.
//! let out = field::step(
//!     &anchors,
//!     &mut offsets,
//!     Some(Point::new(150.0, 150.0)),
//!     &params,
//! );
//! assert_eq!(out, StepOutcome::Advanced);
//! assert!(offsets[0].y > 0.0, "pushed away from the pointer");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "grid")]
pub mod engine;
pub mod field;
pub mod measure;
pub mod pointer;
pub mod types;

#[cfg(feature = "grid")]
pub use engine::FieldEngine;
pub use types::{FieldParams, StepOutcome};
