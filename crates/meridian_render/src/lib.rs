//! Rendering-backend seam for the testimonial globe.
//!
//! | Module     | Responsibility                                      |
//! |------------|-----------------------------------------------------|
//! | `backend`  | `GlobeBackend` trait + widget-command fan-out       |
//! | `camera`   | Fly-to interpolation for engines without their own  |
//! | `headless` | Recording backend for tests and the demo            |
//!
//! Draw calls, sphere meshes and textures live in whichever external
//! engine an adapter wraps; nothing in this crate renders.

pub mod backend;
pub mod camera;
pub mod headless;

pub use backend::{apply_commands, BackendError, GlobeBackend};
pub use camera::CameraAnimator;
pub use headless::{HeadlessBackend, RecordedCall};
