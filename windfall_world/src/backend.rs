// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The minimal physics capability a scene needs.
//!
//! The scene layer only ever creates bodies, nudges them, steps time, and
//! reads poses back. Anything that can do those four things — the built-in
//! [`Ballistic`](crate::ballistic::Ballistic) integrator or an adapter over
//! a full rigid-body engine — is interchangeable behind this trait.

use kurbo::{Point, Vec2};

use crate::types::{BodyDef, BodyId};

/// A steppable world of rectangular bodies.
pub trait Backend {
    /// Add a body and return its handle.
    fn add_body(&mut self, def: BodyDef) -> BodyId;

    /// Remove a body. Stale or unknown handles are ignored.
    fn remove_body(&mut self, id: BodyId);

    /// Teleport a body's center, waking it if asleep. Works on static
    /// bodies too (used when boundaries follow a container resize).
    fn set_position(&mut self, id: BodyId, pos: Point);

    /// Set a body's linear velocity in px/s, waking it if asleep.
    fn set_velocity(&mut self, id: BodyId, vel: Vec2);

    /// Set a body's angular velocity in rad/s, waking it if asleep.
    fn set_angular_velocity(&mut self, id: BodyId, omega: f64);

    /// Advance the world by `dt` seconds.
    fn step(&mut self, dt: f64);

    /// A body's current center, or `None` for a stale handle.
    fn position(&self, id: BodyId) -> Option<Point>;

    /// A body's current rotation in radians, or `None` for a stale handle.
    fn angle(&self, id: BodyId) -> Option<f64>;
}
