// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the simulator: tuning parameters and step outcomes.

/// Tuning for the repulsion field.
///
/// All distances are in container-local units. The defaults are the values
/// the engine ships with; deployments normally only adjust `radius` and
/// `strength`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FieldParams {
    /// Falloff radius: the maximum pointer-to-anchor distance at which the
    /// repulsion force is nonzero.
    pub radius: f64,
    /// Peak displacement magnitude, reached as the pointer-to-anchor
    /// distance approaches zero. Force decays linearly to zero at `radius`.
    pub strength: f64,
    /// Exponential smoothing factor applied per frame:
    /// `offset += (target - offset) * smoothing`. Expected in `(0, 1]`;
    /// higher values converge faster. Values near `0.18` read as fluid at
    /// display refresh rates.
    pub smoothing: f64,
    /// Lower bound on the pointer-to-anchor distance used for normalization,
    /// so a pointer sitting exactly on an anchor does not divide by zero.
    pub epsilon: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            radius: 220.0,
            strength: 80.0,
            smoothing: 0.18,
            epsilon: 1e-3,
        }
    }
}

impl FieldParams {
    /// The falloff radius to use for a container of the given width: the
    /// configured radius, capped at half the container width so narrow
    /// containers do not put every anchor inside the field at once.
    pub fn effective_radius(&self, container_width: f64) -> f64 {
        self.radius.min(container_width / 2.0)
    }
}

/// Result of one simulation step.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum StepOutcome {
    /// Offsets were advanced one frame.
    Advanced,
    /// The frame was skipped because the anchor and offset tables disagreed
    /// in length. Offsets are left untouched; the caller's previously
    /// emitted positions remain valid.
    Skipped,
}

#[cfg(test)]
mod tests {
    use super::*;

    // Wide containers use the configured radius; narrow ones cap at w/2.
    #[test]
    fn effective_radius_caps_at_half_width() {
        let params = FieldParams::default();
        assert_eq!(params.effective_radius(1000.0), 220.0);
        assert_eq!(params.effective_radius(300.0), 150.0);
    }
}
