// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Static boundaries around the container: floor, side walls, ceiling.
//!
//! The floor is thickened to the tallest word so that words visually rest
//! inside the container instead of sinking halfway out of it: its top
//! surface sits half a word-height above the container's bottom edge. Walls
//! and ceiling are centered just outside the container so bodies can kiss
//! the edges without tunneling escape routes at the corners.

use kurbo::{Point, Rect, Size};

use crate::backend::Backend;
use crate::types::{BodyDef, BodyId};

/// Boundary construction tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ArenaParams {
    /// Thickness of the side walls and ceiling.
    pub wall_thickness: f64,
    /// How far outside the container the wall/ceiling centers sit.
    pub wall_inset: f64,
    /// Minimum floor thickness.
    pub min_floor: f64,
    /// Extra floor thickness on top of the tallest word.
    pub floor_margin: f64,
}

impl Default for ArenaParams {
    fn default() -> Self {
        Self {
            wall_thickness: 50.0,
            wall_inset: 25.0,
            min_floor: 50.0,
            floor_margin: 8.0,
        }
    }
}

/// The four boundary bodies installed in a world.
#[derive(Copy, Clone, Debug)]
pub struct Arena {
    floor: BodyId,
    left: BodyId,
    right: BodyId,
    ceiling: BodyId,
    floor_h: f64,
    tallest: f64,
    params: ArenaParams,
}

impl Arena {
    /// Build boundaries for a container of `size`, sized for words up to
    /// `tallest` high, and add them to `backend`.
    pub fn install<B: Backend>(
        backend: &mut B,
        size: Size,
        tallest: f64,
        params: ArenaParams,
    ) -> Self {
        let floor_h = params.min_floor.max(tallest.ceil() + params.floor_margin);
        let centers = Self::centers(size, tallest, floor_h, &params);
        let t = params.wall_thickness;
        let floor = backend.add_body(BodyDef::fixed(Rect::from_center_size(
            centers.floor,
            Size::new(size.width, floor_h),
        )));
        let left = backend.add_body(BodyDef::fixed(Rect::from_center_size(
            centers.left,
            Size::new(t, size.height),
        )));
        let right = backend.add_body(BodyDef::fixed(Rect::from_center_size(
            centers.right,
            Size::new(t, size.height),
        )));
        let ceiling = backend.add_body(BodyDef::fixed(Rect::from_center_size(
            centers.ceiling,
            Size::new(size.width, t),
        )));
        Self {
            floor,
            left,
            right,
            ceiling,
            floor_h,
            tallest,
            params,
        }
    }

    /// Reposition all four boundaries for a new container size. Extents are
    /// kept; only centers move, matching the latest observed size.
    pub fn resize<B: Backend>(&self, backend: &mut B, size: Size) {
        let centers = Self::centers(size, self.tallest, self.floor_h, &self.params);
        backend.set_position(self.floor, centers.floor);
        backend.set_position(self.left, centers.left);
        backend.set_position(self.right, centers.right);
        backend.set_position(self.ceiling, centers.ceiling);
    }

    /// The floor body's handle.
    pub fn floor(&self) -> BodyId {
        self.floor
    }

    /// Remove all four boundary bodies from `backend`.
    pub fn remove<B: Backend>(&self, backend: &mut B) {
        backend.remove_body(self.floor);
        backend.remove_body(self.left);
        backend.remove_body(self.right);
        backend.remove_body(self.ceiling);
    }

    /// Vertical coordinate of the floor's top surface for a container of
    /// the given height: half the tallest word above the bottom edge.
    pub fn floor_top(&self, container_height: f64) -> f64 {
        container_height - self.tallest / 2.0
    }

    fn centers(size: Size, tallest: f64, floor_h: f64, params: &ArenaParams) -> Centers {
        Centers {
            floor: Point::new(
                size.width / 2.0,
                size.height - tallest / 2.0 + floor_h / 2.0,
            ),
            left: Point::new(-params.wall_inset, size.height / 2.0),
            right: Point::new(size.width + params.wall_inset, size.height / 2.0),
            ceiling: Point::new(size.width / 2.0, -params.wall_inset),
        }
    }
}

struct Centers {
    floor: Point,
    left: Point,
    right: Point,
    ceiling: Point,
}
