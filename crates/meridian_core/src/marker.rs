//! Render markers derived from the testimonial dataset.
//!
//! Multiple testimonials can share one location; rendering wants exactly one
//! pin per location, slightly enlarged when it stands for more than one
//! quote.

use serde::{Deserialize, Serialize};

use crate::geo::GeoPoint;
use crate::testimonial::{Testimonial, TestimonialId};

/// Growth applied per additional co-located testimonial.
const SIZE_GROWTH_PER_EXTRA: f32 = 0.25;

/// Multi-quote pins never grow past this multiple of the single-pin size.
const SIZE_GROWTH_CAP: f32 = 2.0;

/// A renderable pin at a geographic coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub coordinate: GeoPoint,
    /// Size hint forwarded to the rendering engine.
    pub visual_size: f32,
    /// Testimonials shown when this pin is selected, in dataset order.
    pub testimonials: Vec<TestimonialId>,
}

/// Collapses a dataset into one marker per unique coordinate.
///
/// Ordering contract:
/// - Markers appear in first-encounter dataset order.
/// - Within a marker, testimonial ids keep dataset order.
///
/// Coordinates are matched with the per-axis epsilon from
/// [`crate::geo::COORD_EPSILON_DEG`]; `base_size` is the single-testimonial
/// pin size after any renderer-facing boost has been applied.
pub fn from_testimonials(testimonials: &[Testimonial], base_size: f32) -> Vec<Marker> {
    let mut markers: Vec<Marker> = Vec::new();
    for (index, t) in testimonials.iter().enumerate() {
        let id = TestimonialId(index as u32);
        match markers.iter_mut().find(|m| m.coordinate.approx_same(t.coordinate)) {
            Some(marker) => {
                marker.testimonials.push(id);
                let extras = (marker.testimonials.len() - 1) as f32;
                let growth = (1.0 + SIZE_GROWTH_PER_EXTRA * extras).min(SIZE_GROWTH_CAP);
                marker.visual_size = base_size * growth;
            }
            None => markers.push(Marker {
                coordinate: t.coordinate,
                visual_size: base_size,
                testimonials: vec![id],
            }),
        }
    }
    markers
}

/// Finds the marker for a coordinate, if one still exists.
///
/// Used when a delayed focus animation settles: the dataset may have been
/// replaced in the meantime, in which case the lookup comes back empty and
/// the caller abandons the selection.
pub fn at_coordinate(markers: &[Marker], coordinate: GeoPoint) -> Option<&Marker> {
    markers.iter().find(|m| m.coordinate.approx_same(coordinate))
}
