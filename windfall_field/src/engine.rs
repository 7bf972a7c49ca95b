// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The repulsion-field engine: layout, simulation, and lifecycle in one
//! frame-driven component.
//!
//! ## Overview
//!
//! [`FieldEngine`] owns the three index-aligned tables the simulation runs
//! on: the item list, the anchor table, and the offset table. The host wires
//! its collaborators to the engine's inputs and calls [`FieldEngine::tick`]
//! once per display frame:
//!
//! - resize observations → [`FieldEngine::resized`] (latest wins, consumed
//!   at the next tick);
//! - pointer moves/leaves → [`FieldEngine::pointer_moved`] /
//!   [`FieldEngine::pointer_left`];
//! - teardown → [`FieldEngine::teardown`] (idempotent).
//!
//! `tick` returns the emitted absolute position per item. That slice is the
//! engine's only output; painting it is the host's problem.
//!
//! ## Lifecycle
//!
//! Until the first nonzero size arrives, ticks emit an empty frame — the
//! expected transient state while the container is unmeasured. A host
//! without any resize-observation capability can call [`FieldEngine::resized`]
//! once at mount and never again; the engine then runs a one-shot layout
//! with no subsequent resize adaptation.
//!
//! Offsets survive relayouts of the same item count, so a resize decays the
//! field toward the new anchors instead of snapping.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use windfall_field::{FieldEngine, FieldParams};
//! use windfall_grid::LayoutParams;
//!
//! let mut engine = FieldEngine::new(
//!     vec!["Rust", "Kurbo", "Criterion"],
//!     FieldParams::default(),
//!     LayoutParams::default(),
//! );
//!
//! // Unmeasured: nothing to emit yet.
//! assert!(engine.tick().is_empty());
//!
//! // Measure, then tick: one position per item.
//! engine.resized(Size::new(600.0, 400.0));
//! engine.pointer_moved(Point::new(300.0, 200.0));
//! assert_eq!(engine.tick().len(), 3);
//!
//! engine.teardown();
//! engine.teardown(); // double teardown is fine
//! assert!(engine.tick().is_empty());
//! ```

use alloc::vec::Vec;

use kurbo::{Point, Size, Vec2};

use windfall_grid::{LayoutParams, generate};

use crate::field;
use crate::measure::SizeCell;
use crate::pointer::PointerTracker;
use crate::types::{FieldParams, StepOutcome};

/// A complete repulsion-field component over an opaque item list.
///
/// The payload type `T` is never inspected; it rides along so hosts can zip
/// the emitted positions back to whatever they render. Item, anchor, and
/// offset tables are index-aligned at every observation point between calls.
#[derive(Clone, Debug)]
pub struct FieldEngine<T> {
    items: Vec<T>,
    field: FieldParams,
    layout: LayoutParams,
    /// Last applied container size; `Size::ZERO` until first measured.
    size: Size,
    pending: SizeCell,
    anchors: Vec<Point>,
    offsets: Vec<Vec2>,
    emitted: Vec<Point>,
    pointer: PointerTracker,
    running: bool,
}

impl<T> FieldEngine<T> {
    /// Create an engine over `items`. No layout happens until a size is
    /// observed.
    pub fn new(items: Vec<T>, field: FieldParams, layout: LayoutParams) -> Self {
        Self {
            items,
            field,
            layout,
            size: Size::ZERO,
            pending: SizeCell::new(),
            anchors: Vec::new(),
            offsets: Vec::new(),
            emitted: Vec::new(),
            pointer: PointerTracker::new(),
            running: true,
        }
    }

    /// The item list, index-aligned with the emitted positions.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Replace the item list wholesale.
    ///
    /// A changed count rebuilds both tables at the next tick (offsets reset);
    /// a same-count replacement keeps the current field state.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;
    }

    /// The current anchor table. Empty until the container has been
    /// measured.
    pub fn anchors(&self) -> &[Point] {
        &self.anchors
    }

    /// Record an observed container size. Latest wins; the size is applied
    /// at the next tick.
    pub fn resized(&mut self, size: Size) {
        self.pending.observe(size);
    }

    /// Record a pointer sample in container-local coordinates.
    pub fn pointer_moved(&mut self, local: Point) {
        self.pointer.set_local(local);
    }

    /// The pointer left the container; items relax back to their anchors.
    pub fn pointer_left(&mut self) {
        self.pointer.clear();
    }

    /// Whether the engine is still live (i.e. [`Self::teardown`] has not
    /// run).
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one frame and return the emitted absolute positions,
    /// index-aligned with [`Self::items`].
    ///
    /// Applies any pending resize first, then steps the field once. Returns
    /// an empty slice while the container is unmeasured, the item list is
    /// empty, or the engine is torn down.
    pub fn tick(&mut self) -> &[Point] {
        if !self.running {
            return &[];
        }

        if let Some(size) = self.pending.take() {
            self.size = size;
            self.relayout();
        } else if self.anchors.len() != self.items.len() {
            // Item list changed since the last frame.
            self.relayout();
        }

        if self.anchors.is_empty() {
            self.emitted.clear();
            return &self.emitted;
        }

        let params = self.frame_params();
        match field::step(
            &self.anchors,
            &mut self.offsets,
            self.pointer.sample(),
            &params,
        ) {
            StepOutcome::Advanced => {
                self.emitted.clear();
                self.emitted
                    .extend(field::positions(&self.anchors, &self.offsets));
            }
            // Defensive: tables disagreed, hold the previous frame.
            StepOutcome::Skipped => {}
        }
        &self.emitted
    }

    /// Stop the engine. Tables are discarded together and subsequent ticks
    /// emit nothing. Safe to call any number of times.
    pub fn teardown(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        self.anchors.clear();
        self.offsets.clear();
        self.emitted.clear();
        self.pointer.clear();
        let _ = self.pending.take();
    }

    /// Regenerate the anchor table for the current size, resetting offsets
    /// only when the item count changed.
    fn relayout(&mut self) {
        self.anchors = generate(self.items.len(), self.size, &self.layout);
        if self.offsets.len() != self.anchors.len() {
            self.offsets.clear();
            self.offsets.resize(self.anchors.len(), Vec2::ZERO);
        }
    }

    /// Per-frame parameters: the configured field with the falloff radius
    /// capped for the current container width.
    fn frame_params(&self) -> FieldParams {
        FieldParams {
            radius: self.field.effective_radius(self.size.width),
            ..self.field
        }
    }
}
