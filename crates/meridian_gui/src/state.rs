//! Interaction modes of the widget.

use meridian_core::geo::GeoPoint;

/// What the widget is currently doing. Exactly one mode is active; every
/// pointer event and timer expiry is interpreted against it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InteractionMode {
    /// Auto-rotating (unless configured off), waiting for input.
    Idle,
    /// Primary button held; horizontal motion rotates the globe.
    Dragging {
        /// Pointer x at press time, window pixels.
        start_x: f32,
        /// Total absolute horizontal travel so far. A release below the
        /// click slop is a click, not a drag.
        travel: f32,
    },
    /// Camera is flying toward a clicked pin; the popup opens when the
    /// settle timer expires.
    AnimatingToTarget {
        /// Coordinate of the clicked pin. Looked up again at settle time;
        /// the dataset may have been replaced while the camera was moving.
        target: GeoPoint,
    },
    /// Popup is showing a selection; rotation stays suspended.
    PopupOpen,
}

impl InteractionMode {
    /// Short name for log lines.
    pub fn label(&self) -> &'static str {
        match self {
            InteractionMode::Idle => "idle",
            InteractionMode::Dragging { .. } => "dragging",
            InteractionMode::AnimatingToTarget { .. } => "animating",
            InteractionMode::PopupOpen => "popup",
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, InteractionMode::Idle)
    }

    pub fn is_popup_open(&self) -> bool {
        matches!(self, InteractionMode::PopupOpen)
    }
}
