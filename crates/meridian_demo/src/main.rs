//! Interactive testbed for the globe widget.
//!
//! Opens a window over the recording backend and the built-in dataset.
//! Drag to rotate, click a pin to focus it, Escape closes the popup and
//! the arrow keys cycle multi-quote pins. Everything the widget tells a
//! real rendering adapter shows up on stdout instead.

use log::info;
use meridian_app::{App, AppContext, GlobeHost, HeadlessBackend, Testimonial};

struct ConsoleHost;

impl GlobeHost for ConsoleHost {
    fn on_popup_opened(&mut self, testimonial: &Testimonial) {
        info!(
            "\"{}\" — {}, {} ({})",
            testimonial.body_text,
            testimonial.display_name,
            testimonial.affiliation,
            testimonial.location_label
        );
    }

    fn on_popup_closed(&mut self) {
        info!("popup closed, rotation resumes shortly");
    }

    fn on_frame(&mut self, ctx: &mut AppContext) {
        // One status line per second keeps the console readable.
        if ctx.time.frame_count % 60 == 0 {
            let widget = &ctx.widget;
            log::debug!(
                "mode={} angle={:.3} suspended={}",
                widget.mode().label(),
                widget.rotation().angle(),
                widget.rotation().suspended()
            );
        }
    }
}

fn main() -> anyhow::Result<()> {
    meridian_app::logging::init(log::LevelFilter::Info)?;

    // An optional TOML path overrides the stock configuration.
    let config = match std::env::args().nth(1) {
        Some(path) => meridian_app::config_io::load(path)?,
        None => meridian_app::GlobeConfig::default(),
    };

    App::new(HeadlessBackend::with_defaults(), ConsoleHost)
        .with_title("Meridian — testimonial globe")
        .with_size(900, 900)
        .with_globe_config(config)
        .run()
}
