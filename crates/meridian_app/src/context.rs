use meridian_core::time::Time;
use meridian_gui::widget::GlobeWidget;

/// Per-frame context passed to every [`crate::GlobeHost`] callback.
pub struct AppContext<'a> {
    /// Frame timing: delta, elapsed, frame count.
    pub time: Time,

    /// Current window size in physical pixels.
    pub window_size: (u32, u32),

    /// The widget itself. Read its mode/selection to drive chrome, or call
    /// its popup/dataset methods to react to host UI.
    pub widget: &'a mut GlobeWidget,

    pub(crate) exit_requested: bool,
}

impl<'a> AppContext<'a> {
    /// Signal the event loop to shut down after the current frame.
    pub fn request_exit(&mut self) {
        self.exit_requested = true;
    }

    /// Shortcut: window width in physical pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.window_size.0
    }

    /// Shortcut: window height in physical pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.window_size.1
    }
}
