// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame repulsion step.
//!
//! ## Model
//!
//! Every item has an anchor (its base position from the layout) and an
//! offset (its current simulated displacement). Each frame computes a
//! *target* displacement per item from the pointer sample, then moves the
//! actual offset a fixed fraction of the way toward it:
//!
//! - Pointer absent, or at least [`FieldParams::radius`] away: the target is
//!   zero and the item relaxes back toward its anchor.
//! - Pointer inside the radius: the item is pushed directly away from the
//!   pointer with a force that decays linearly from
//!   [`FieldParams::strength`] at distance zero to nothing at the radius.
//!
//! The smoothing blend bounds the frame-to-frame velocity: no offset ever
//! jumps more than `smoothing * |target - offset|` in a single frame, and
//! for `smoothing` in `(0, 1]` the offset never overshoots its target.

use kurbo::{Point, Vec2};

use crate::types::{FieldParams, StepOutcome};

/// Scalar repulsion force at the given pointer-to-anchor distance.
///
/// Linear falloff: `strength` at distance zero, zero at and beyond the
/// radius.
pub fn force_at(dist: f64, params: &FieldParams) -> f64 {
    if dist >= params.radius {
        0.0
    } else {
        (1.0 - dist / params.radius) * params.strength
    }
}

/// Target displacement for one anchor given the current pointer sample.
///
/// An absent pointer yields zero. A pointer sitting exactly on the anchor
/// also yields zero: the push direction is undefined there, and
/// [`FieldParams::epsilon`] guards the normalization rather than inventing
/// one.
pub fn target_displacement(anchor: Point, pointer: Option<Point>, params: &FieldParams) -> Vec2 {
    let Some(p) = pointer else {
        return Vec2::ZERO;
    };
    let d = anchor - p;
    let dist = d.hypot().max(params.epsilon);
    if dist >= params.radius {
        return Vec2::ZERO;
    }
    (d / dist) * force_at(dist, params)
}

/// Advance every offset one frame toward its target displacement.
///
/// `anchors` and `offsets` must be index-aligned with the same item
/// ordering. A length mismatch is a wiring bug in the caller; the step
/// detects it and returns [`StepOutcome::Skipped`] without touching any
/// offset, so a broken frame degrades to a visual pause instead of a panic
/// inside the host's render loop.
pub fn step(
    anchors: &[Point],
    offsets: &mut [Vec2],
    pointer: Option<Point>,
    params: &FieldParams,
) -> StepOutcome {
    if anchors.len() != offsets.len() {
        return StepOutcome::Skipped;
    }
    for (anchor, offset) in anchors.iter().zip(offsets.iter_mut()) {
        let target = target_displacement(*anchor, pointer, params);
        *offset += (target - *offset) * params.smoothing;
    }
    StepOutcome::Advanced
}

/// Emitted positions: `anchor + offset`, index-aligned with the inputs.
pub fn positions<'a>(
    anchors: &'a [Point],
    offsets: &'a [Vec2],
) -> impl Iterator<Item = Point> + 'a {
    anchors.iter().zip(offsets.iter()).map(|(a, o)| *a + *o)
}
