//! Geographic coordinates and the globe's screen projection.
//!
//! The widget never talks to a real projection matrix: hit-testing and
//! marker overlays both use the same fixed orthographic-style projection,
//! centred on the viewport, with a small depth-dependent scale so pins near
//! the limb don't bunch up.
//!
//! Axis convention for [`GeoPoint::to_unit_sphere`]:
//! +Y is north, +Z points toward the viewer, and the current rotation angle
//! is added to the longitude before conversion.

use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

/// Two coordinates closer than this (per axis, in degrees) are treated as
/// the same pin location.
pub const COORD_EPSILON_DEG: f32 = 0.001;

/// Base scale applied when projecting a unit-sphere point to screen space.
pub const PROJECTION_BASE: f32 = 0.45;

/// How much the projection scale grows as a point recedes from the viewer.
pub const PROJECTION_DEPTH_GAIN: f32 = 0.2;

/// Screen-space centre of the globe in normalized viewport coordinates.
pub const SCREEN_CENTER: Vec2 = Vec2::new(0.5, 0.5);

/// A point on the globe, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north. Valid range [-90, 90].
    pub lat_deg: f32,
    /// Longitude in degrees, positive east. Valid range [-180, 180].
    pub lon_deg: f32,
}

impl GeoPoint {
    pub const fn new(lat_deg: f32, lon_deg: f32) -> Self {
        Self { lat_deg, lon_deg }
    }

    /// Whether both components are inside their documented ranges.
    pub fn is_valid(&self) -> bool {
        self.lat_deg.is_finite()
            && self.lon_deg.is_finite()
            && (-90.0..=90.0).contains(&self.lat_deg)
            && (-180.0..=180.0).contains(&self.lon_deg)
    }

    /// Per-axis comparison against [`COORD_EPSILON_DEG`].
    pub fn approx_same(&self, other: GeoPoint) -> bool {
        (self.lat_deg - other.lat_deg).abs() < COORD_EPSILON_DEG
            && (self.lon_deg - other.lon_deg).abs() < COORD_EPSILON_DEG
    }

    /// Converts to a point on the unit sphere under the given azimuthal
    /// rotation (radians).
    pub fn to_unit_sphere(&self, rotation: f32) -> Vec3 {
        let lat = self.lat_deg.to_radians();
        let lon = self.lon_deg.to_radians() + rotation;
        Vec3::new(lat.cos() * lon.sin(), lat.sin(), lat.cos() * lon.cos())
    }
}

/// Projects a unit-sphere point into normalized viewport space ([0,1]²).
///
/// The scale factor grows slightly with distance from the viewer so that
/// markers halfway to the limb still land where the rendered pin appears.
/// Callers are expected to cull back-facing points themselves; this
/// function projects whatever it is given.
pub fn project_to_screen(unit: Vec3) -> Vec2 {
    let factor = PROJECTION_BASE * (1.0 + PROJECTION_DEPTH_GAIN * (1.0 - unit.z));
    Vec2::new(
        SCREEN_CENTER.x + unit.x * factor,
        SCREEN_CENTER.y - unit.y * factor,
    )
}

/// A camera target: where to look and from how far out.
///
/// `altitude` is expressed in globe radii above the surface, matching the
/// convention of the rendering engines this widget delegates to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPose {
    pub target: GeoPoint,
    pub altitude: f32,
}

impl CameraPose {
    pub const fn new(target: GeoPoint, altitude: f32) -> Self {
        Self { target, altitude }
    }

    /// Same target location and altitude within tolerance.
    pub fn approx_same(&self, other: CameraPose) -> bool {
        self.target.approx_same(other.target) && (self.altitude - other.altitude).abs() < 1e-3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f32, b: f32, eps: f32) {
        let diff = (a - b).abs();
        assert!(diff <= eps, "expected {a} ~= {b} (diff {diff})");
    }

    #[test]
    fn equator_prime_meridian_faces_viewer() {
        let p = GeoPoint::new(0.0, 0.0).to_unit_sphere(0.0);
        assert_close(p.x, 0.0, 1e-6);
        assert_close(p.y, 0.0, 1e-6);
        assert_close(p.z, 1.0, 1e-6);
    }

    #[test]
    fn north_pole_is_up() {
        let p = GeoPoint::new(90.0, 0.0).to_unit_sphere(0.0);
        assert_close(p.y, 1.0, 1e-6);
        assert_close(p.x, 0.0, 1e-6);
    }

    #[test]
    fn rotation_offsets_longitude() {
        // Rotating by -lon brings the point to front centre.
        let point = GeoPoint::new(0.0, 74.0);
        let p = point.to_unit_sphere(-point.lon_deg.to_radians());
        assert_close(p.x, 0.0, 1e-5);
        assert_close(p.z, 1.0, 1e-5);
    }

    #[test]
    fn front_centre_projects_to_screen_centre() {
        let unit = GeoPoint::new(0.0, 0.0).to_unit_sphere(0.0);
        let screen = project_to_screen(unit);
        assert_close(screen.x, 0.5, 1e-6);
        assert_close(screen.y, 0.5, 1e-6);
    }

    #[test]
    fn northern_points_project_above_centre() {
        let unit = GeoPoint::new(45.0, 0.0).to_unit_sphere(0.0);
        let screen = project_to_screen(unit);
        assert!(screen.y < 0.5);
        assert_close(screen.x, 0.5, 1e-6);
    }

    #[test]
    fn validation_bounds() {
        assert!(GeoPoint::new(41.8781, -87.6298).is_valid());
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, -181.0).is_valid());
        assert!(!GeoPoint::new(f32::NAN, 0.0).is_valid());
    }

    #[test]
    fn epsilon_comparison() {
        let a = GeoPoint::new(41.8781, -87.6298);
        assert!(a.approx_same(GeoPoint::new(41.8785, -87.6298)));
        assert!(!a.approx_same(GeoPoint::new(41.8801, -87.6298)));
    }
}
