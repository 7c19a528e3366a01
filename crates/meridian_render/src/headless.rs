//! A backend with no engine behind it.
//!
//! Records everything the widget asks for and keeps a [`CameraAnimator`]
//! flying, so integration tests and the demo binary can observe exactly
//! what a real adapter would have been told.

use log::{info, warn};

use meridian_core::geo::{CameraPose, GeoPoint};
use meridian_core::marker::Marker;
use meridian_core::viewport::Viewport;

use crate::backend::{BackendError, GlobeBackend};
use crate::camera::CameraAnimator;

/// One recorded backend call.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
    Init(Viewport),
    SetMarkers(usize),
    SetRotation(f32),
    FlyTo(CameraPose, u64),
    Resize(Viewport),
    Present,
}

/// Recording backend for tests and the demo.
pub struct HeadlessBackend {
    pub calls: Vec<RecordedCall>,
    camera: CameraAnimator,
    markers: Vec<Marker>,
    rotation: f32,
    /// When set, `init` fails; exercises the embedder's error path.
    pub fail_init: Option<String>,
}

impl HeadlessBackend {
    pub fn new(initial_pose: CameraPose, min_altitude: f32, max_altitude: f32) -> Self {
        Self {
            calls: Vec::new(),
            camera: CameraAnimator::new(initial_pose, min_altitude, max_altitude),
            markers: Vec::new(),
            rotation: 0.0,
            fail_init: None,
        }
    }

    /// Wide default view over the prime meridian.
    pub fn with_defaults() -> Self {
        Self::new(CameraPose::new(GeoPoint::new(0.0, 0.0), 2.2), 1.2, 3.0)
    }

    pub fn camera_pose(&self) -> CameraPose {
        self.camera.pose()
    }

    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Recorded calls of one kind, for assertions.
    pub fn count_flights(&self) -> usize {
        self.calls
            .iter()
            .filter(|c| matches!(c, RecordedCall::FlyTo(..)))
            .count()
    }
}

impl GlobeBackend for HeadlessBackend {
    fn init(&mut self, viewport: Viewport) -> Result<(), BackendError> {
        if let Some(reason) = self.fail_init.take() {
            warn!("headless backend configured to fail init: {reason}");
            return Err(BackendError::Init(reason));
        }
        info!(
            "headless backend ready, viewport {}x{} at ({}, {})",
            viewport.width, viewport.height, viewport.x, viewport.y
        );
        self.calls.push(RecordedCall::Init(viewport));
        Ok(())
    }

    fn set_markers(&mut self, markers: &[Marker]) {
        info!("marker set replaced: {} pin(s)", markers.len());
        self.markers = markers.to_vec();
        self.calls.push(RecordedCall::SetMarkers(markers.len()));
    }

    fn set_rotation(&mut self, angle: f32) {
        self.rotation = angle;
        self.calls.push(RecordedCall::SetRotation(angle));
    }

    fn fly_to(&mut self, pose: CameraPose, duration_ms: u64) {
        info!(
            "camera flight to ({:.4}, {:.4}) altitude {:.2} over {duration_ms} ms",
            pose.target.lat_deg, pose.target.lon_deg, pose.altitude
        );
        self.camera.fly_to(pose, duration_ms);
        self.calls.push(RecordedCall::FlyTo(pose, duration_ms));
    }

    fn resize(&mut self, viewport: Viewport) -> Result<(), BackendError> {
        self.calls.push(RecordedCall::Resize(viewport));
        Ok(())
    }

    fn present(&mut self, dt: f32) {
        self.camera.tick(dt);
        self.calls.push(RecordedCall::Present);
    }
}
