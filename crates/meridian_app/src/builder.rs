use meridian_core::config::GlobeConfig;
use meridian_core::testimonial::Testimonial;
use meridian_gui::widget::GlobeWidget;
use meridian_render::backend::GlobeBackend;

use crate::traits::GlobeHost;

/// Initial window setup.
#[derive(Clone)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Meridian".to_string(),
            width: 900,
            height: 900,
        }
    }
}

/// Entry point builder: backend + host + configuration, then `run()`.
pub struct App<B: GlobeBackend, H: GlobeHost> {
    window: WindowConfig,
    globe: GlobeConfig,
    testimonials: Option<Vec<Testimonial>>,
    backend: B,
    host: H,
}

impl<B: GlobeBackend + 'static, H: GlobeHost + 'static> App<B, H> {
    /// Pass `()` as the host for embeddings without chrome callbacks.
    pub fn new(backend: B, host: H) -> Self {
        Self {
            window: WindowConfig::default(),
            globe: GlobeConfig::default(),
            testimonials: None,
            backend,
            host,
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.window.title = title.to_string();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    pub fn with_globe_config(mut self, config: GlobeConfig) -> Self {
        self.globe = config;
        self
    }

    /// Supplies the dataset. Honoured verbatim; without this call the
    /// built-in records are used.
    pub fn with_testimonials(mut self, testimonials: Vec<Testimonial>) -> Self {
        self.testimonials = Some(testimonials);
        self
    }

    /// Runs the event loop until the window closes.
    ///
    /// Returns an error when the dataset fails validation, the event loop
    /// cannot start, or the backend fails to initialize. Backend init
    /// failure is terminal for this instance; there are no retries.
    pub fn run(self) -> anyhow::Result<()> {
        let widget = match self.testimonials {
            Some(data) => GlobeWidget::new(self.globe, data)?,
            None => GlobeWidget::with_builtin(self.globe),
        };
        crate::runner::run_internal(self.window, widget, self.backend, self.host)
    }
}
