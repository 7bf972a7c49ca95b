// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Anchor table generation.

use alloc::vec::Vec;

use kurbo::{Point, Size};

use crate::types::{GridSpec, LayoutParams};

#[cfg(feature = "jitter")]
use crate::types::JitterParams;
#[cfg(feature = "jitter")]
use rand::Rng;

/// Compute the anchor table for `count` items in a container of `size`.
///
/// Anchors are the centers of a row-major near-square grid of cells, inset
/// by [`LayoutParams::padding`] on every edge. The result is index-aligned
/// with the caller's item ordering.
///
/// Returns an empty table when `count == 0` or either container dimension is
/// not positive. Callers treat that as the transient unmeasured state and
/// simply produce no output until a real size arrives.
pub fn generate(count: usize, size: Size, params: &LayoutParams) -> Vec<Point> {
    if count == 0 || size.width <= 0.0 || size.height <= 0.0 {
        return Vec::new();
    }

    let spec = GridSpec::for_count(count);
    let cell_w = (size.width - 2.0 * params.padding) / spec.cols as f64;
    let cell_h = (size.height - 2.0 * params.padding) / spec.rows as f64;

    let mut anchors = Vec::with_capacity(count);
    for i in 0..count {
        let (col, row) = spec.cell_of(i);
        anchors.push(Point::new(
            params.padding + cell_w * col as f64 + cell_w / 2.0,
            params.padding + cell_h * row as f64 + cell_h / 2.0,
        ));
    }
    anchors
}

/// [`generate`], then displace each anchor by a bounded uniform jitter.
///
/// Each anchor moves by an independent offset drawn from
/// `[-max_dx, max_dx] × [-max_dy, max_dy]` and is clamped back into
/// `[0, w] × [0, h]`. Determinism is up to the caller: seed `rng` to make
/// the table reproducible.
#[cfg(feature = "jitter")]
pub fn generate_jittered(
    count: usize,
    size: Size,
    params: &LayoutParams,
    jitter: &JitterParams,
    rng: &mut impl Rng,
) -> Vec<Point> {
    let mut anchors = generate(count, size, params);
    let max_dx = jitter.max_dx.max(0.0);
    let max_dy = jitter.max_dy.max(0.0);
    for a in &mut anchors {
        if max_dx > 0.0 {
            a.x += rng.random_range(-max_dx..=max_dx);
        }
        if max_dy > 0.0 {
            a.y += rng.random_range(-max_dy..=max_dy);
        }
        a.x = a.x.clamp(0.0, size.width);
        a.y = a.y.clamp(0.0, size.height);
    }
    anchors
}
