//! Continuous globe rotation.
//!
//! The controller owns the azimuthal angle and advances it once per frame
//! unless suspended. Drag input bypasses the suspension gate: suspension
//! only stops the *automatic* advance, never the user's hand.

use std::f32::consts::TAU;

use meridian_core::config::FRAME_BUDGET_MS;
use meridian_core::time::MAX_FRAME_DELTA;

/// Rotation angle plus the rules for advancing it.
///
/// Speeds are radians per frame budget (16.67 ms), so a configured speed
/// means the same visual rate at any refresh rate. Two tiers exist: the
/// base rate, and a slowed rate while the pointer hovers a pin.
#[derive(Debug, Clone)]
pub struct RotationState {
    angle: f32,
    base_speed: f32,
    hover_speed: f32,
    hovering: bool,
    suspended: bool,
}

impl RotationState {
    pub fn new(base_speed: f32, hover_speed: f32, suspended: bool) -> Self {
        Self {
            angle: 0.0,
            base_speed,
            hover_speed,
            hovering: false,
            suspended,
        }
    }

    /// Advances the angle for one frame. `dt` is seconds since the last
    /// tick, clamped to [`MAX_FRAME_DELTA`] so a backgrounded window does
    /// not jump on refocus. Suspension is checked once, here at tick start.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.clamp(0.0, MAX_FRAME_DELTA);
        if self.suspended {
            return;
        }
        let frames = dt * 1000.0 / FRAME_BUDGET_MS;
        self.angle = (self.angle + self.velocity() * frames).rem_euclid(TAU);
    }

    /// Applies a horizontal drag, in pixels. Not gated by suspension.
    pub fn apply_drag(&mut self, dx_px: f32, sensitivity: f32) {
        self.angle = (self.angle + dx_px * sensitivity).rem_euclid(TAU);
    }

    /// Current per-frame rate, accounting for the hover tier.
    pub fn velocity(&self) -> f32 {
        if self.hovering {
            self.hover_speed
        } else {
            self.base_speed
        }
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn set_angle(&mut self, angle: f32) {
        self.angle = angle.rem_euclid(TAU);
    }

    pub fn set_suspended(&mut self, suspended: bool) {
        self.suspended = suspended;
    }

    pub fn suspended(&self) -> bool {
        self.suspended
    }

    pub fn set_hovering(&mut self, hovering: bool) {
        self.hovering = hovering;
    }
}
