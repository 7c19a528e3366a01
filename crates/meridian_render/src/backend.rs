//! The seam between the widget core and whatever engine draws the sphere.
//!
//! Sphere meshes, textures and real camera projection belong to an external
//! rendering library. This trait is the full surface the widget needs from
//! one: accept the pin set, the per-frame rotation, camera flights and
//! resizes. Every method has a default no-op so adapters only implement
//! what their engine supports.

use thiserror::Error;

use meridian_core::geo::CameraPose;
use meridian_core::marker::Marker;
use meridian_core::viewport::Viewport;
use meridian_gui::widget::GlobeCommand;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The engine failed to load or construct. Terminal for this widget
    /// instance; the embedding page decides what to show instead.
    #[error("rendering backend failed to initialize: {0}")]
    Init(String),
    /// A resize could not be applied. Non-fatal; the previous size stays.
    #[error("rendering backend failed to resize: {0}")]
    Resize(String),
}

/// Adapter over a concrete globe-rendering engine.
#[allow(unused_variables)]
pub trait GlobeBackend {
    /// Construct engine resources for the given viewport. Called once
    /// before the first frame.
    fn init(&mut self, viewport: Viewport) -> Result<(), BackendError> {
        Ok(())
    }

    /// Replace the engine's pin set.
    fn set_markers(&mut self, markers: &[Marker]) {}

    /// Rotation angle for the frame being built, radians.
    fn set_rotation(&mut self, angle: f32) {}

    /// Animate the camera toward `pose` over `duration_ms`.
    ///
    /// Adapters whose engine has its own camera interpolation forward this
    /// call; the rest can drive a [`crate::camera::CameraAnimator`] and
    /// push its pose each frame. Either way the widget never waits on a
    /// completion signal from here.
    fn fly_to(&mut self, pose: CameraPose, duration_ms: u64) {}

    /// Apply a new viewport after a window resize.
    fn resize(&mut self, viewport: Viewport) -> Result<(), BackendError> {
        Ok(())
    }

    /// Produce the frame. Called once per tick after all state updates;
    /// `dt` is the frame delta in seconds for engine-owned animations.
    fn present(&mut self, dt: f32) {}
}

/// Forwards one frame's widget commands to a backend.
pub fn apply_commands(backend: &mut dyn GlobeBackend, commands: Vec<GlobeCommand>) {
    for command in commands {
        match command {
            GlobeCommand::SetMarkers(markers) => backend.set_markers(&markers),
            GlobeCommand::SetRotation(angle) => backend.set_rotation(angle),
            GlobeCommand::FlyTo { pose, duration_ms } => backend.fly_to(pose, duration_ms),
        }
    }
}
