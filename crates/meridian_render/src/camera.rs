//! Camera flight interpolation.
//!
//! Engines with their own `fly_to` get the widget's calls forwarded
//! verbatim; engines that only accept an absolute camera pose per frame
//! drive one of these instead and push [`CameraAnimator::pose`] every tick.
//!
//! Completion is deliberately not reported anywhere: the widget times its
//! popup against a fixed settle delay because not every engine exposes a
//! reliable animation-complete callback. [`CameraAnimator::is_settled`]
//! exists for adapters that want it, but no widget transition depends on
//! it, and the timeout path must keep working even when it is used.

use meridian_core::geo::{CameraPose, GeoPoint};

#[derive(Debug, Clone)]
struct Flight {
    from: CameraPose,
    to: CameraPose,
    duration_s: f32,
    elapsed_s: f32,
}

/// Smoothly interpolating camera with altitude limits.
#[derive(Debug, Clone)]
pub struct CameraAnimator {
    current: CameraPose,
    min_altitude: f32,
    max_altitude: f32,
    flight: Option<Flight>,
}

impl CameraAnimator {
    /// Starts at `initial` with the given altitude clamp range.
    pub fn new(initial: CameraPose, min_altitude: f32, max_altitude: f32) -> Self {
        let mut current = initial;
        current.altitude = current.altitude.clamp(min_altitude, max_altitude);
        Self {
            current,
            min_altitude,
            max_altitude,
            flight: None,
        }
    }

    /// Begins a flight toward `pose`.
    ///
    /// - A flight toward a *different* target cancels the in-flight one and
    ///   departs from the current interpolated pose.
    /// - Re-issuing the current target (in flight or already settled) is a
    ///   no-op, so repeated identical calls end in the same state as one.
    pub fn fly_to(&mut self, pose: CameraPose, duration_ms: u64) {
        let mut target = pose;
        target.altitude = target.altitude.clamp(self.min_altitude, self.max_altitude);

        if let Some(flight) = &self.flight {
            if flight.to.approx_same(target) {
                return;
            }
        } else if self.current.approx_same(target) {
            return;
        }

        if duration_ms == 0 {
            self.current = target;
            self.flight = None;
            return;
        }

        self.flight = Some(Flight {
            from: self.current,
            to: target,
            duration_s: duration_ms as f32 / 1000.0,
            elapsed_s: 0.0,
        });
    }

    /// Advances the flight by `dt` seconds.
    pub fn tick(&mut self, dt: f32) {
        let Some(flight) = self.flight.as_mut() else {
            return;
        };
        flight.elapsed_s += dt.max(0.0);
        let t = (flight.elapsed_s / flight.duration_s).min(1.0);
        self.current = interpolate(flight.from, flight.to, smoothstep(t));
        if t >= 1.0 {
            self.current = flight.to;
            self.flight = None;
        }
    }

    /// Pose for the frame being built.
    pub fn pose(&self) -> CameraPose {
        self.current
    }

    /// Whether no flight is in progress. Advisory only; see the module
    /// docs.
    pub fn is_settled(&self) -> bool {
        self.flight.is_none()
    }
}

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Interpolates poses, taking the short way around the antimeridian.
fn interpolate(from: CameraPose, to: CameraPose, s: f32) -> CameraPose {
    let dlon = wrap_degrees(to.target.lon_deg - from.target.lon_deg);
    CameraPose {
        target: GeoPoint::new(
            from.target.lat_deg + (to.target.lat_deg - from.target.lat_deg) * s,
            wrap_degrees(from.target.lon_deg + dlon * s),
        ),
        altitude: from.altitude + (to.altitude - from.altitude) * s,
    }
}

/// Wraps a longitude difference or value into [-180, 180).
fn wrap_degrees(deg: f32) -> f32 {
    (deg + 180.0).rem_euclid(360.0) - 180.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pose(lat: f32, lon: f32, altitude: f32) -> CameraPose {
        CameraPose::new(GeoPoint::new(lat, lon), altitude)
    }

    fn run(animator: &mut CameraAnimator, total_s: f32) {
        let mut remaining = total_s;
        while remaining > 0.0 {
            let step = remaining.min(0.016);
            animator.tick(step);
            remaining -= step;
        }
    }

    #[test]
    fn flight_reaches_its_target() {
        let mut cam = CameraAnimator::new(pose(0.0, 0.0, 2.2), 1.2, 3.0);
        cam.fly_to(pose(41.8781, -87.6298, 2.0), 900);
        run(&mut cam, 1.0);
        assert!(cam.is_settled());
        assert!(cam.pose().approx_same(pose(41.8781, -87.6298, 2.0)));
    }

    #[test]
    fn repeating_the_same_target_matches_a_single_call() {
        let mut once = CameraAnimator::new(pose(0.0, 0.0, 2.2), 1.2, 3.0);
        once.fly_to(pose(10.0, 20.0, 2.0), 900);
        run(&mut once, 0.4);

        let mut twice = CameraAnimator::new(pose(0.0, 0.0, 2.2), 1.2, 3.0);
        twice.fly_to(pose(10.0, 20.0, 2.0), 900);
        run(&mut twice, 0.2);
        twice.fly_to(pose(10.0, 20.0, 2.0), 900); // must not restart the flight
        run(&mut twice, 0.2);

        assert!(once.pose().approx_same(twice.pose()));
        run(&mut once, 0.6);
        run(&mut twice, 0.6);
        assert!(once.pose().approx_same(twice.pose()));
    }

    #[test]
    fn retargeting_cancels_the_first_flight() {
        let mut cam = CameraAnimator::new(pose(0.0, 0.0, 2.2), 1.2, 3.0);
        cam.fly_to(pose(40.0, 40.0, 2.0), 900);
        run(&mut cam, 0.3);
        cam.fly_to(pose(-30.0, -60.0, 2.0), 900);
        run(&mut cam, 1.0);
        assert!(cam.pose().approx_same(pose(-30.0, -60.0, 2.0)));
    }

    #[test]
    fn altitude_is_clamped_to_the_configured_range() {
        let mut cam = CameraAnimator::new(pose(0.0, 0.0, 10.0), 1.2, 3.0);
        assert_eq!(cam.pose().altitude, 3.0);
        cam.fly_to(pose(0.0, 10.0, 0.1), 500);
        run(&mut cam, 1.0);
        assert_eq!(cam.pose().altitude, 1.2);
    }

    #[test]
    fn longitude_crosses_the_antimeridian_the_short_way() {
        let mut cam = CameraAnimator::new(pose(0.0, 170.0, 2.0), 1.2, 3.0);
        cam.fly_to(pose(0.0, -170.0, 2.0), 1000);
        run(&mut cam, 0.5);
        // Halfway through, the camera should be near ±180, not near 0.
        assert!(cam.pose().target.lon_deg.abs() > 170.0);
        run(&mut cam, 0.6);
        assert!(cam.pose().approx_same(pose(0.0, -170.0, 2.0)));
    }

    #[test]
    fn zero_duration_jumps_immediately() {
        let mut cam = CameraAnimator::new(pose(0.0, 0.0, 2.2), 1.2, 3.0);
        cam.fly_to(pose(5.0, 5.0, 2.0), 0);
        assert!(cam.is_settled());
        assert!(cam.pose().approx_same(pose(5.0, 5.0, 2.0)));
    }
}
