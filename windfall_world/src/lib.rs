// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windfall_world --heading-base-level=0

//! Windfall World: a physics capability and a built-in falling-body world.
//!
//! ## Overview
//!
//! This crate powers the gravity-driven variant of the word effects: words
//! become rectangular bodies, rain into an arena of static boundaries, and
//! report their poses back once per frame for the host to paint.
//!
//! The physics surface is deliberately tiny. [`Backend`] is the complete
//! capability a scene consumes — add a body, nudge it, step time, read its
//! pose — so the built-in [`Ballistic`] integrator and an adapter over a
//! full rigid-body engine are interchangeable. `Ballistic` covers gravity,
//! air drag, boundary bounces, and sleeping; it deliberately does not solve
//! body-to-body contacts or constraints.
//!
//! ## Pieces
//!
//! - [`types`]: body handles (generational), flags, materials, definitions.
//! - [`backend`]: the [`Backend`] capability trait.
//! - [`ballistic`]: the built-in integrator.
//! - [`arena`]: floor/walls/ceiling construction sized to the tallest word,
//!   with resize-follow.
//! - [`words`]: display-text splitting and highlight classification.
//! - [`trigger`]: one-shot start gating (auto / scroll / click / hover).
//! - [`scene`]: [`FallingScene`], the per-frame orchestration over any
//!   backend.
//!
//! ## Example
//!
//! ```
//! use kurbo::{Rect, Size};
//! use windfall_world::{ArenaParams, Ballistic, FallingScene, words};
//!
//! let spans = words::split_words("React Three.js Tailwind", &["Three"]);
//! assert!(spans[1].highlighted);
//!
//! // One measured rect per word, then let them fall.
//! let rects = [
//!     Rect::new(20.0, 10.0, 90.0, 34.0),
//!     Rect::new(100.0, 10.0, 190.0, 34.0),
//!     Rect::new(200.0, 10.0, 290.0, 34.0),
//! ];
//! let mut scene = FallingScene::mount(
//!     Ballistic::new(),
//!     &rects,
//!     Size::new(400.0, 300.0),
//!     ArenaParams::default(),
//! );
//! for _ in 0..120 {
//!     let poses = scene.tick(1.0 / 60.0);
//!     assert_eq!(poses.len(), 3);
//! }
//! scene.teardown();
//! ```

pub mod arena;
pub mod backend;
pub mod ballistic;
pub mod scene;
pub mod trigger;
pub mod types;
pub mod words;

pub use arena::{Arena, ArenaParams};
pub use backend::Backend;
pub use ballistic::{Ballistic, WorldParams};
pub use scene::{FallingScene, Pose};
pub use trigger::{StartLatch, Trigger};
pub use types::{BodyDef, BodyFlags, BodyId, Material};
