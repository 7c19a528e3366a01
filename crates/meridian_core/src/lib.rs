// meridian_core: foundation types for the testimonial globe widget

pub mod color;
pub mod config;
pub mod dataset;
pub mod geo;
pub mod input;
pub mod marker;
pub mod testimonial;
pub mod time;
pub mod viewport;

// re-export the types nearly every consumer touches
pub use color::Color;
pub use config::{GlobeConfig, FRAME_BUDGET_MS};
pub use geo::{CameraPose, GeoPoint, COORD_EPSILON_DEG};
pub use input::{PointerButton, PointerState};
pub use marker::Marker;
pub use testimonial::{DatasetError, Testimonial, TestimonialId};
pub use time::{Time, TimeClock, MAX_FRAME_DELTA};
pub use viewport::Viewport;

// glam math types, re-exported so downstream crates agree on versions
pub use glam;
