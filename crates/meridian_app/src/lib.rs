//! Host integration for the testimonial globe.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use meridian_app::{App, GlobeConfig};
//! use meridian_render::HeadlessBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     meridian_app::logging::init(log::LevelFilter::Info)?;
//!     App::new(HeadlessBackend::with_defaults(), ())
//!         .with_title("Client globe")
//!         .with_globe_config(GlobeConfig::light())
//!         .run()
//! }
//! ```

pub mod builder;
pub mod config_io;
pub mod context;
pub mod logging;
mod runner;
pub mod traits;

pub use builder::{App, WindowConfig};
pub use context::AppContext;
pub use traits::GlobeHost;

// ── Re-export the most-used primitives ──────────────────────────────────
// Embedders can use meridian_app alone for the common path.
pub use meridian_core::{
    Color,
    GlobeConfig,
    GeoPoint,
    Testimonial,
    TestimonialId,
    Time,
    TimeClock,
    Viewport,
};
pub use meridian_gui::{GlobeCommand, GlobeWidget, InteractionMode, SelectionContext};
pub use meridian_render::{BackendError, GlobeBackend, HeadlessBackend};
