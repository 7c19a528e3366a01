use std::collections::HashSet;

use glam::Vec2;

/// Pointer buttons, window-system agnostic.
///
/// The widget only ever acts on `Primary`; the others are tracked so hosts
/// can gate their own shortcuts on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// State of the pointer at a given moment.
///
/// The host event loop feeds this from its native events (window cursor
/// moves, DOM pointer events, ...). Button-press events usually arrive
/// without a position attached, so the last reported position is kept here
/// for them.
#[derive(Default)]
pub struct PointerState {
    position: Vec2,
    buttons_down: HashSet<PointerButton>,
}

impl PointerState {
    pub fn new() -> Self {
        Default::default()
    }

    /// Called by the host when the pointer moves (window coordinates).
    pub fn set_position(&mut self, x: f32, y: f32) {
        self.position = Vec2::new(x, y);
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Called by the host on button press/release.
    pub fn update_button(&mut self, button: PointerButton, pressed: bool) {
        if pressed {
            self.buttons_down.insert(button);
        } else {
            self.buttons_down.remove(&button);
        }
    }

    pub fn is_down(&self, button: PointerButton) -> bool {
        self.buttons_down.contains(&button)
    }
}
