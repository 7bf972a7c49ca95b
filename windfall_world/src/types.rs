// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the world: body identifiers, flags, materials, and
//! definitions.

use kurbo::Rect;

/// Identifier for a body in a world.
///
/// A small, copyable handle that stays stable across steps but becomes
/// invalid when the underlying slot is reused. It consists of a slot index
/// and a generation counter: on removal the slot is freed, and on reuse the
/// generation is incremented, so a stale `BodyId` never aliases a different
/// live body.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct BodyId(pub(crate) u32, pub(crate) u32);

impl BodyId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Body ids are intentionally 32-bit; higher bits are truncated by design."
    )]
    pub(crate) const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Body flags controlling simulation participation.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BodyFlags: u8 {
        /// Body never moves; dynamic bodies collide against it.
        const STATIC   = 0b0000_0001;
        /// Body has come to rest and is skipped by integration until it is
        /// re-excited through `set_velocity` or `set_position`.
        const SLEEPING = 0b0000_0010;
    }
}

impl Default for BodyFlags {
    fn default() -> Self {
        Self::empty()
    }
}

/// Surface and damping properties of a body.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Material {
    /// Bounce energy retained on impact, in `[0, 1]`.
    pub restitution: f64,
    /// Tangential velocity lost on contact, in `[0, 1]`.
    pub friction: f64,
    /// Air drag per reference frame (60 Hz), in `[0, 1)`.
    pub friction_air: f64,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            restitution: 0.8,
            friction: 0.2,
            friction_air: 0.01,
        }
    }
}

/// Everything needed to add a body to a world.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BodyDef {
    /// Initial axis-aligned bounds in container coordinates. The body's
    /// position is the rect center; the extent stays fixed for the body's
    /// lifetime.
    pub rect: Rect,
    /// Surface and damping properties.
    pub material: Material,
    /// Simulation flags.
    pub flags: BodyFlags,
}

impl BodyDef {
    /// A dynamic word body with the default word material.
    pub fn word(rect: Rect) -> Self {
        Self {
            rect,
            material: Material::default(),
            flags: BodyFlags::default(),
        }
    }

    /// A static boundary body (floor, wall, ceiling).
    pub fn fixed(rect: Rect) -> Self {
        Self {
            rect,
            material: Material {
                restitution: 0.0,
                friction: 0.0,
                friction_air: 0.0,
            },
            flags: BodyFlags::STATIC,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_bodies_are_dynamic() {
        let def = BodyDef::word(Rect::new(0.0, 0.0, 40.0, 16.0));
        assert!(!def.flags.contains(BodyFlags::STATIC));
        assert_eq!(def.material.restitution, 0.8);
    }

    #[test]
    fn fixed_bodies_are_static() {
        let def = BodyDef::fixed(Rect::new(0.0, 0.0, 400.0, 50.0));
        assert!(def.flags.contains(BodyFlags::STATIC));
    }
}
