// Copyright 2025 the Windfall Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! One-shot start gating for the falling effect.
//!
//! The effect can start immediately, when the container scrolls into view,
//! or on the first click/hover. Whatever the mode, the latch fires exactly
//! once: later events are ignored, and the host can disconnect its observer
//! as soon as a feed method returns `true`.

/// How the effect is armed to start.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Trigger {
    /// Start as soon as the scene mounts.
    #[default]
    Auto,
    /// Start when the container becomes sufficiently visible.
    Scroll,
    /// Start on the first click inside the container.
    Click,
    /// Start when the pointer first enters the container.
    Hover,
}

/// Fraction of the container that must be visible to fire a [`Trigger::Scroll`]
/// latch.
pub const INTERSECTION_THRESHOLD: f64 = 0.1;

/// A one-shot latch gating the start of the effect.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct StartLatch {
    trigger: Trigger,
    started: bool,
}

impl StartLatch {
    /// Create a latch for the given trigger mode. `Auto` latches are born
    /// started.
    pub fn new(trigger: Trigger) -> Self {
        Self {
            trigger,
            started: trigger == Trigger::Auto,
        }
    }

    /// Whether the effect should be running.
    pub fn started(&self) -> bool {
        self.started
    }

    /// Feed a visibility observation. Returns `true` when this call fired
    /// the latch, signaling the host to disconnect its observer.
    pub fn on_intersection(&mut self, visible_ratio: f64) -> bool {
        self.fire_if(self.trigger == Trigger::Scroll && visible_ratio >= INTERSECTION_THRESHOLD)
    }

    /// Feed a click inside the container.
    pub fn on_click(&mut self) -> bool {
        self.fire_if(self.trigger == Trigger::Click)
    }

    /// Feed a pointer-enter on the container.
    pub fn on_hover(&mut self) -> bool {
        self.fire_if(self.trigger == Trigger::Hover)
    }

    fn fire_if(&mut self, condition: bool) -> bool {
        if self.started || !condition {
            return false;
        }
        self.started = true;
        true
    }
}
