// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Container measurement: latest-wins size observation and a fallback walk
//! for collapsed containers.
//!
//! Resize observations follow the same "last observed wins" policy as
//! pointer samples: [`SizeCell`] stores at most one pending size, and the
//! engine consumes it at the next frame boundary. If two resizes land
//! between frames, the second fully overwrites the first; nothing is queued.

use kurbo::{Rect, Size};

/// Latest-wins cell for observed container sizes.
///
/// Written by a resize-observation collaborator, drained once per frame by
/// the engine. `observe` overwrites any pending size; `take` hands the
/// pending size to the caller exactly once.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct SizeCell {
    pending: Option<Size>,
}

impl SizeCell {
    /// Create an empty cell.
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Record an observed size, replacing any pending one.
    pub const fn observe(&mut self, size: Size) {
        self.pending = Some(size);
    }

    /// Consume the pending size, if any.
    pub const fn take(&mut self) -> Option<Size> {
        let pending = self.pending;
        self.pending = None;
        pending
    }

    /// Whether a size is waiting to be consumed.
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

/// Number of elements the measurement fallback inspects, starting element
/// included.
pub const DEFAULT_MEASURE_HOPS: usize = 6;

/// Something with measurable bounds and an optional parent, e.g. a host
/// toolkit's element wrapper.
pub trait Measurable {
    /// Current bounds in window space.
    fn bounds(&self) -> Rect;
    /// Enclosing element, if any.
    fn parent(&self) -> Option<&Self>;
}

/// Bounds of the nearest element with positive size, starting at `el` and
/// walking at most `max_hops` elements up the parent chain.
///
/// A container that is still collapsed (zero-sized) at mount time is common;
/// its nearest sized ancestor is usually the styled wrapper around it, and
/// measuring that instead keeps the layout from degenerating. If nothing in
/// range has positive size, `el`'s own bounds are returned and the caller
/// ends up in the ordinary unmeasured state.
pub fn visible_bounds<M: Measurable + ?Sized>(el: &M, max_hops: usize) -> Rect {
    let mut cur = el;
    for _ in 0..max_hops {
        let r = cur.bounds();
        if r.width() > 0.0 && r.height() > 0.0 {
            return r;
        }
        match cur.parent() {
            Some(p) => cur = p,
            None => break,
        }
    }
    el.bounds()
}
