// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=windfall_grid --heading-base-level=0

//! Windfall Grid: deterministic anchor layout for labeled items.
//!
//! Windfall Grid computes the base ("anchor") position of every item in a
//! rectangular container. The simulation layers above it
//! (`windfall_field`, `windfall_world`) displace items *from* these anchors;
//! this crate only decides where the anchors are.
//!
//! - Items are tiled into a near-square grid: `cols` is the smallest integer
//!   whose square covers the item count, `rows` follows from it.
//! - Anchors sit at cell centers, inset by a configurable padding.
//! - A container that has not been measured yet (zero or negative size)
//!   produces an empty table. That is an expected transient state during
//!   mount, not an error.
//! - Output is a pure function of `(count, size, params)`: calling
//!   [`generate`] twice with identical arguments yields bit-identical tables.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use windfall_grid::{LayoutParams, generate};
//!
//! // Nine items in a 300×300 container with no padding: a 3×3 grid of
//! // cell centers.
//! let params = LayoutParams { padding: 0.0 };
//! let anchors = generate(9, Size::new(300.0, 300.0), &params);
//! assert_eq!(anchors.len(), 9);
//! assert_eq!(anchors[0], Point::new(50.0, 50.0));
//! assert_eq!(anchors[4], Point::new(150.0, 150.0));
//! assert_eq!(anchors[8], Point::new(250.0, 250.0));
//! ```
//!
//! With the `jitter` feature enabled, [`generate_jittered`] perturbs each
//! anchor by a bounded uniform offset and clamps the result back into the
//! container. Determinism is preserved by seeding the caller-supplied RNG:
//!
//! ```rust
//! # #[cfg(feature = "jitter")] {
//! use kurbo::Size;
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use windfall_grid::{JitterParams, LayoutParams, generate_jittered};
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let anchors = generate_jittered(
//!     12,
//!     Size::new(640.0, 420.0),
//!     &LayoutParams::default(),
//!     &JitterParams::default(),
//!     &mut rng,
//! );
//! assert_eq!(anchors.len(), 12);
//! # }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod grid;
pub mod types;

pub use grid::generate;
#[cfg(feature = "jitter")]
pub use grid::generate_jittered;
pub use types::{GridSpec, LayoutParams};

#[cfg(feature = "jitter")]
pub use types::JitterParams;

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;

    #[test]
    fn generate_matches_grid_shape() {
        for n in 1..=40_usize {
            let anchors = generate(n, Size::new(800.0, 480.0), &LayoutParams::default());
            assert_eq!(anchors.len(), n);
            let spec = GridSpec::for_count(n);
            assert!(spec.cols * spec.rows >= n);
        }
    }

    #[test]
    fn unmeasured_container_yields_empty_table() {
        let params = LayoutParams::default();
        assert!(generate(5, Size::new(0.0, 300.0), &params).is_empty());
        assert!(generate(5, Size::new(300.0, -1.0), &params).is_empty());
        assert!(generate(0, Size::new(300.0, 300.0), &params).is_empty());
    }
}
