// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The built-in world: gravity, air drag, and boundary bounces.
//!
//! ## Scope
//!
//! [`Ballistic`] integrates dynamic bodies under gravity and resolves their
//! collisions against *static* bodies only. Body-to-body collision, joints,
//! and constraint solving are deliberately out of scope: a scene that needs
//! them should adapt a full rigid-body engine behind
//! [`Backend`](crate::backend::Backend) instead. For word-scatter effects —
//! rectangles raining onto a floor between two walls — this integrator is
//! all the physics required.
//!
//! ## Units
//!
//! Positions are container-local pixels, time is seconds. Gravity is
//! expressed as a multiple of [`STANDARD_GRAVITY`]; materials carry their
//! damping per 60 Hz reference frame and are rescaled to the actual `dt`,
//! so behavior does not drift with the display's refresh rate.

use kurbo::{Point, Vec2};

use crate::backend::Backend;
use crate::types::{BodyDef, BodyFlags, BodyId};

/// Acceleration, in px/s², that a gravity scale of `1.0` maps to.
pub const STANDARD_GRAVITY: f64 = 980.0;

/// Reference frame rate the material damping constants are expressed at.
const REFERENCE_HZ: f64 = 60.0;

/// Linear speed below which a supported body is put to sleep, in px/s.
/// Must sit above the micro-bounce limit cycle a resting body settles into
/// (about `restitution * gravity * dt` of rebound speed per frame), or a
/// settled body never qualifies. 30 px/s is half a pixel per reference
/// frame: visually at rest.
const SLEEP_SPEED: f64 = 30.0;

/// Angular speed below which a supported body is put to sleep, in rad/s.
const SLEEP_SPIN: f64 = 0.05;

/// World-level tuning.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct WorldParams {
    /// Downward acceleration as a multiple of [`STANDARD_GRAVITY`].
    pub gravity: f64,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self { gravity: 1.0 }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    generation: u32,
    def: BodyDef,
    flags: BodyFlags,
    pos: Point,
    vel: Vec2,
    angle: f64,
    omega: f64,
}

impl Entry {
    fn half(&self) -> Vec2 {
        Vec2::new(self.def.rect.width() / 2.0, self.def.rect.height() / 2.0)
    }
}

/// The built-in [`Backend`]: semi-implicit integration with static-body
/// bounces and sleeping.
#[derive(Clone, Debug, Default)]
pub struct Ballistic {
    params: WorldParams,
    entries: Vec<Option<Entry>>,
    free_list: Vec<usize>,
}

impl Ballistic {
    /// Create a world with default parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a world with the given parameters.
    pub fn with_params(params: WorldParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    /// A body's current linear velocity, or `None` for a stale handle.
    pub fn velocity(&self, id: BodyId) -> Option<Vec2> {
        self.entry(id).map(|e| e.vel)
    }

    /// Whether the body has been put to sleep by the integrator.
    pub fn is_sleeping(&self, id: BodyId) -> bool {
        self.entry(id)
            .is_some_and(|e| e.flags.contains(BodyFlags::SLEEPING))
    }

    /// Number of live bodies.
    pub fn len(&self) -> usize {
        self.entries.iter().flatten().count()
    }

    /// Whether the world holds no bodies.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn entry(&self, id: BodyId) -> Option<&Entry> {
        let e = self.entries.get(id.idx())?.as_ref()?;
        (e.generation == id.1).then_some(e)
    }

    fn entry_mut(&mut self, id: BodyId) -> Option<&mut Entry> {
        let e = self.entries.get_mut(id.idx())?.as_mut()?;
        (e.generation == id.1).then_some(e)
    }

    fn wake(e: &mut Entry) {
        e.flags.remove(BodyFlags::SLEEPING);
    }
}

impl Backend for Ballistic {
    fn add_body(&mut self, def: BodyDef) -> BodyId {
        let entry = |generation| Entry {
            generation,
            def,
            flags: def.flags,
            pos: def.rect.center(),
            vel: Vec2::ZERO,
            angle: 0.0,
            omega: 0.0,
        };
        if let Some(idx) = self.free_list.pop() {
            let generation = self.entries[idx]
                .as_ref()
                .map(|e| e.generation)
                .unwrap_or(0)
                + 1;
            self.entries[idx] = Some(entry(generation));
            BodyId::new(idx, generation)
        } else {
            self.entries.push(Some(entry(1)));
            BodyId::new(self.entries.len() - 1, 1)
        }
    }

    fn remove_body(&mut self, id: BodyId) {
        if self.entry(id).is_some() {
            self.entries[id.idx()] = None;
            self.free_list.push(id.idx());
        }
    }

    fn set_position(&mut self, id: BodyId, pos: Point) {
        if let Some(e) = self.entry_mut(id) {
            e.pos = pos;
            Self::wake(e);
        }
    }

    fn set_velocity(&mut self, id: BodyId, vel: Vec2) {
        if let Some(e) = self.entry_mut(id) {
            e.vel = vel;
            Self::wake(e);
        }
    }

    fn set_angular_velocity(&mut self, id: BodyId, omega: f64) {
        if let Some(e) = self.entry_mut(id) {
            e.omega = omega;
            Self::wake(e);
        }
    }

    fn step(&mut self, dt: f64) {
        if dt <= 0.0 {
            return;
        }

        // Snapshot static extents first so the mutable walk below does not
        // alias them.
        let statics: Vec<(Point, Vec2)> = self
            .entries
            .iter()
            .flatten()
            .filter(|e| e.flags.contains(BodyFlags::STATIC))
            .map(|e| (e.pos, e.half()))
            .collect();

        let drag_frames = dt * REFERENCE_HZ;
        let gravity = self.params.gravity * STANDARD_GRAVITY;

        for slot in &mut self.entries {
            let Some(e) = slot.as_mut() else {
                continue;
            };
            if e.flags.intersects(BodyFlags::STATIC | BodyFlags::SLEEPING) {
                continue;
            }

            e.vel.y += gravity * dt;
            let drag = (1.0 - e.def.material.friction_air).powf(drag_frames);
            e.vel = e.vel * drag;
            e.pos += e.vel * dt;
            e.angle += e.omega * dt;

            let half = e.half();
            let m = e.def.material;
            let mut supported = false;
            for &(center, s_half) in &statics {
                let dx = e.pos.x - center.x;
                let dy = e.pos.y - center.y;
                let pen_x = (half.x + s_half.x) - dx.abs();
                let pen_y = (half.y + s_half.y) - dy.abs();
                if pen_x <= 0.0 || pen_y <= 0.0 {
                    continue;
                }
                if pen_x < pen_y {
                    let sign = if dx >= 0.0 { 1.0 } else { -1.0 };
                    e.pos.x += sign * pen_x;
                    e.vel.x = -e.vel.x * m.restitution;
                    e.vel.y *= 1.0 - m.friction;
                } else {
                    let sign = if dy >= 0.0 { 1.0 } else { -1.0 };
                    e.pos.y += sign * pen_y;
                    e.vel.y = -e.vel.y * m.restitution;
                    e.vel.x *= 1.0 - m.friction;
                    e.omega *= 1.0 - m.friction;
                    // Pushed upward: resting contact with whatever is below.
                    if sign < 0.0 {
                        supported = true;
                    }
                }
            }

            if supported && e.vel.hypot() < SLEEP_SPEED && e.omega.abs() < SLEEP_SPIN {
                e.vel = Vec2::ZERO;
                e.omega = 0.0;
                e.flags.insert(BodyFlags::SLEEPING);
            }
        }
    }

    fn position(&self, id: BodyId) -> Option<Point> {
        self.entry(id).map(|e| e.pos)
    }

    fn angle(&self, id: BodyId) -> Option<f64> {
        self.entry(id).map(|e| e.angle)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;

    use super::*;

    const DT: f64 = 1.0 / 60.0;

    fn world() -> Ballistic {
        Ballistic::new()
    }

    fn body_at(w: &mut Ballistic, x: f64, y: f64) -> BodyId {
        w.add_body(BodyDef::word(Rect::new(x - 20.0, y - 8.0, x + 20.0, y + 8.0)))
    }

    // Gravity pulls dynamic bodies down.
    #[test]
    fn bodies_fall() {
        let mut w = world();
        let id = body_at(&mut w, 100.0, 50.0);
        let y0 = w.position(id).unwrap().y;
        for _ in 0..30 {
            w.step(DT);
        }
        assert!(w.position(id).unwrap().y > y0, "body did not fall");
    }

    // Static bodies never move, whatever happens around them.
    #[test]
    fn statics_hold_still() {
        let mut w = world();
        let floor = w.add_body(BodyDef::fixed(Rect::new(0.0, 280.0, 400.0, 330.0)));
        let _word = body_at(&mut w, 100.0, 50.0);
        for _ in 0..240 {
            w.step(DT);
        }
        assert_eq!(w.position(floor).unwrap(), Point::new(200.0, 305.0));
    }

    // A falling body bounces off the floor and eventually comes to rest on
    // top of it.
    #[test]
    fn floor_catches_falling_body() {
        let mut w = world();
        let _floor = w.add_body(BodyDef::fixed(Rect::new(0.0, 280.0, 400.0, 330.0)));
        let id = body_at(&mut w, 100.0, 50.0);
        for _ in 0..1200 {
            w.step(DT);
        }
        let rest = w.position(id).unwrap();
        // Resting pose: body bottom on the floor top (280), center 8 above.
        assert!((rest.y - 272.0).abs() < 1.0, "rest y was {}", rest.y);
        assert!(w.is_sleeping(id), "body should have gone to sleep");
    }

    // Restitution reverses the vertical velocity at impact.
    #[test]
    fn impact_reverses_velocity() {
        let mut w = world();
        let _floor = w.add_body(BodyDef::fixed(Rect::new(0.0, 100.0, 400.0, 150.0)));
        let id = body_at(&mut w, 100.0, 80.0);
        w.set_velocity(id, Vec2::new(0.0, 600.0));
        // A few steps carry the body into the floor; the bounce sends it up.
        let mut bounced = false;
        for _ in 0..10 {
            w.step(DT);
            if w.velocity(id).unwrap().y < 0.0 {
                bounced = true;
                break;
            }
        }
        assert!(bounced, "no bounce");
    }

    // Air drag bleeds horizontal speed without any contact.
    #[test]
    fn air_drag_decays_speed() {
        let mut w = world();
        let id = body_at(&mut w, 100.0, 50.0);
        w.set_velocity(id, Vec2::new(200.0, 0.0));
        for _ in 0..60 {
            w.step(DT);
        }
        let vx = w.velocity(id).unwrap().x;
        assert!(vx > 0.0 && vx < 200.0, "vx was {vx}");
    }

    // Sleeping bodies are skipped until re-excited.
    #[test]
    fn sleepers_wake_on_impulse() {
        let mut w = world();
        let _floor = w.add_body(BodyDef::fixed(Rect::new(0.0, 280.0, 400.0, 330.0)));
        let id = body_at(&mut w, 100.0, 50.0);
        for _ in 0..1200 {
            w.step(DT);
        }
        assert!(w.is_sleeping(id));
        let rest = w.position(id).unwrap();
        w.step(DT);
        assert_eq!(w.position(id).unwrap(), rest);

        w.set_velocity(id, Vec2::new(0.0, -300.0));
        assert!(!w.is_sleeping(id));
        w.step(DT);
        assert!(w.position(id).unwrap().y < rest.y);
    }

    // The gravity scale feeds integration directly: heavier worlds fall
    // farther in the same time.
    #[test]
    fn gravity_scale_changes_fall_rate() {
        let mut gentle = Ballistic::with_params(WorldParams { gravity: 0.5 });
        let mut heavy = Ballistic::with_params(WorldParams { gravity: 2.0 });
        let a = body_at(&mut gentle, 100.0, 50.0);
        let b = body_at(&mut heavy, 100.0, 50.0);
        for _ in 0..30 {
            gentle.step(DT);
            heavy.step(DT);
        }
        let gentle_y = gentle.position(a).unwrap().y;
        let heavy_y = heavy.position(b).unwrap().y;
        assert!(gentle_y > 50.0, "gentle world did not fall");
        assert!(heavy_y > gentle_y, "gravity scale had no effect");
    }

    // Stale handles read back as absent after slot reuse.
    #[test]
    fn stale_handles_are_rejected() {
        let mut w = world();
        let id = body_at(&mut w, 100.0, 50.0);
        w.remove_body(id);
        assert_eq!(w.position(id), None);
        let replacement = body_at(&mut w, 10.0, 10.0);
        // Same slot, new generation: the old handle stays dead.
        assert_eq!(id.idx(), replacement.idx());
        assert_eq!(w.position(id), None);
        assert!(w.position(replacement).is_some());
    }

    #[test]
    fn angle_integrates_spin() {
        let mut w = world();
        let id = body_at(&mut w, 100.0, 50.0);
        w.set_angular_velocity(id, 1.5);
        w.step(0.5);
        assert!((w.angle(id).unwrap() - 0.75).abs() < 1e-12);
    }
}
