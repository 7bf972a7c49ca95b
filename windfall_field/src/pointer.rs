// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Latest-wins pointer sample cell.
//!
//! Pointer-move events arrive asynchronously and faster than frames are
//! consumed; the simulator only ever wants the most recent sample. This cell
//! overwrites on every write and never queues. An explicit leave event, or a
//! window-space sample that falls outside the container, clears the cell to
//! the absent state, which the simulator reads as "relax everything back to
//! its anchor".

use kurbo::{Point, Rect};

/// The most recent pointer sample in container-local coordinates, or absent.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct PointerTracker {
    latest: Option<Point>,
}

impl PointerTracker {
    /// Create a tracker with no sample (pointer absent).
    pub const fn new() -> Self {
        Self { latest: None }
    }

    /// The most recent sample, if the pointer is inside the container.
    pub const fn sample(&self) -> Option<Point> {
        self.latest
    }

    /// Record a sample already expressed in container-local coordinates.
    /// Overwrites any previous sample.
    pub const fn set_local(&mut self, local: Point) {
        self.latest = Some(local);
    }

    /// Record a window-space sample against the container's window-space
    /// rect. Samples inside the rect are stored translated into
    /// container-local coordinates; samples outside clear the cell, since a
    /// pointer beyond the container exerts no field.
    pub fn set_window(&mut self, window: Point, container: Rect) {
        if container.contains(window) {
            self.latest = Some(Point::new(window.x - container.x0, window.y - container.y0));
        } else {
            self.latest = None;
        }
    }

    /// The pointer left the container.
    pub const fn clear(&mut self) {
        self.latest = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Writes overwrite; reads do not consume.
    #[test]
    fn latest_sample_wins() {
        let mut t = PointerTracker::new();
        assert_eq!(t.sample(), None);
        t.set_local(Point::new(1.0, 2.0));
        t.set_local(Point::new(3.0, 4.0));
        assert_eq!(t.sample(), Some(Point::new(3.0, 4.0)));
        assert_eq!(t.sample(), Some(Point::new(3.0, 4.0)));
    }

    // Window samples are translated into container-local space.
    #[test]
    fn window_sample_is_localized() {
        let mut t = PointerTracker::new();
        let container = Rect::new(100.0, 50.0, 400.0, 250.0);
        t.set_window(Point::new(150.0, 60.0), container);
        assert_eq!(t.sample(), Some(Point::new(50.0, 10.0)));
    }

    // A sample outside the container reads as absent.
    #[test]
    fn outside_sample_clears() {
        let mut t = PointerTracker::new();
        let container = Rect::new(0.0, 0.0, 100.0, 100.0);
        t.set_local(Point::new(10.0, 10.0));
        t.set_window(Point::new(500.0, 500.0), container);
        assert_eq!(t.sample(), None);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut t = PointerTracker::new();
        t.set_local(Point::new(1.0, 1.0));
        t.clear();
        t.clear();
        assert_eq!(t.sample(), None);
    }
}
