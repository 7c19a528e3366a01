//! Testimonial records: the immutable dataset the globe presents.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geo::GeoPoint;

/// Stable identifier of a testimonial within a dataset.
///
/// Ids are positional: the record's index in the dataset the widget was
/// constructed with. Datasets are immutable after load, so the mapping
/// never shifts underneath a live selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TestimonialId(pub u32);

/// One client testimonial, pinned to a location.
///
/// Loaded once at startup; never mutated or persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Person the quote is attributed to.
    pub display_name: String,
    /// Company or role line shown under the name.
    pub affiliation: String,
    /// Human-readable place name ("Chicago", "Goa, India").
    pub location_label: String,
    /// The quote itself.
    pub body_text: String,
    pub coordinate: GeoPoint,
}

#[derive(Debug, Error, PartialEq)]
pub enum DatasetError {
    #[error("testimonial dataset is empty")]
    Empty,
    #[error("testimonial {index} ({name:?}) has an out-of-range coordinate ({lat}, {lon})")]
    InvalidCoordinate {
        index: usize,
        name: String,
        lat: f32,
        lon: f32,
    },
}

/// Checks a dataset before the widget accepts it.
pub fn validate(testimonials: &[Testimonial]) -> Result<(), DatasetError> {
    if testimonials.is_empty() {
        return Err(DatasetError::Empty);
    }
    for (index, t) in testimonials.iter().enumerate() {
        if !t.coordinate.is_valid() {
            return Err(DatasetError::InvalidCoordinate {
                index,
                name: t.display_name.clone(),
                lat: t.coordinate.lat_deg,
                lon: t.coordinate.lon_deg,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(lat: f32, lon: f32) -> Testimonial {
        Testimonial {
            display_name: "A. Client".into(),
            affiliation: "Somewhere Inc.".into(),
            location_label: "Somewhere".into(),
            body_text: "Great work.".into(),
            coordinate: GeoPoint::new(lat, lon),
        }
    }

    #[test]
    fn empty_dataset_rejected() {
        assert_eq!(validate(&[]), Err(DatasetError::Empty));
    }

    #[test]
    fn bad_latitude_rejected() {
        let err = validate(&[record(0.0, 0.0), record(95.0, 10.0)]).unwrap_err();
        match err {
            DatasetError::InvalidCoordinate { index, .. } => assert_eq!(index, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn valid_dataset_accepted() {
        assert!(validate(&[record(41.8781, -87.6298)]).is_ok());
    }
}
