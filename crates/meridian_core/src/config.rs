//! Widget configuration.
//!
//! Every field has a documented default so embedding pages only spell out
//! what they change. The struct deserializes from TOML (or any serde
//! format) with omitted fields falling back to those defaults.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Milliseconds in one frame at the 60 fps reference rate. Rotation speeds
/// are expressed per frame budget so they match across refresh rates.
pub const FRAME_BUDGET_MS: f32 = 1000.0 / 60.0;

/// Configuration for one globe widget instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobeConfig {
    /// Advance the rotation automatically while the user is not interacting.
    pub auto_rotate: bool,
    /// Base rotation rate in radians per frame budget.
    pub auto_rotate_speed: f32,
    /// Slowed rate applied while the pointer hovers a pin, to make precise
    /// clicking easier.
    pub hover_rotate_speed: f32,
    /// Radians of rotation per pixel of horizontal drag.
    pub drag_sensitivity: f32,

    /// Maximum weighted pointer-to-pin distance (normalized units) that
    /// still counts as a click. Looser values trade precision for
    /// ease-of-use; the shipped default is the loose end of the range.
    pub click_threshold: f32,
    /// Pointer distance from the viewport centre beyond which clicks are
    /// treated as off-globe.
    pub visibility_radius: f32,

    /// Camera flight duration when focusing a pin, in milliseconds.
    pub fly_duration_ms: u64,
    /// Wait after starting a focus flight before the popup opens. Matched
    /// to `fly_duration_ms`; there is no completion callback to rely on.
    pub settle_delay_ms: u64,
    /// Wait after a drag ends before auto-rotation resumes.
    pub drag_resume_delay_ms: u64,
    /// Wait after the popup closes before rotation resumes and the camera
    /// recentres.
    pub close_resume_delay_ms: u64,

    /// Camera altitude (globe radii) when focused on a pin.
    pub focus_altitude: f32,
    /// Camera altitude for the resting wide view.
    pub wide_altitude: f32,
    /// Altitude clamp range, keeping the camera off the surface and within
    /// a usable zoom.
    pub min_altitude: f32,
    pub max_altitude: f32,

    /// Single-testimonial pin size before the render boost.
    pub marker_base_size: f32,
    /// Multiplier applied to every pin for renderer visibility.
    pub marker_size_boost: f32,

    pub marker_color: Color,
    pub base_color: Color,
    pub glow_color: Color,
    pub background_color: Color,

    /// Optional surface texture for engines that support one.
    pub globe_texture_url: Option<String>,
    /// Optional terrain bump texture.
    pub bump_texture_url: Option<String>,
}

impl Default for GlobeConfig {
    fn default() -> Self {
        Self::dark()
    }
}

impl GlobeConfig {
    /// Dark preset: space-blue oceans, orange pins.
    pub fn dark() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: 0.002,
            hover_rotate_speed: 0.0005,
            drag_sensitivity: 0.005,
            click_threshold: 0.35,
            visibility_radius: 0.5,
            fly_duration_ms: 900,
            settle_delay_ms: 900,
            drag_resume_delay_ms: 100,
            close_resume_delay_ms: 300,
            focus_altitude: 2.0,
            wide_altitude: 2.2,
            min_altitude: 1.2,
            max_altitude: 3.0,
            marker_base_size: 0.15,
            marker_size_boost: 1.1,
            marker_color: Color::from_rgb8(251, 100, 21),
            base_color: Color::rgb(0.3, 0.3, 1.0),
            glow_color: Color::rgb(0.2, 0.4, 1.0),
            background_color: Color::BLACK,
            globe_texture_url: None,
            bump_texture_url: None,
        }
    }

    /// Light preset: white oceans, blue pins, pale glow.
    pub fn light() -> Self {
        Self {
            marker_color: Color::rgb(0.1, 0.5, 1.0),
            base_color: Color::WHITE,
            glow_color: Color::rgb(0.8, 0.8, 0.8),
            background_color: Color::WHITE,
            ..Self::dark()
        }
    }

    /// The pin size actually handed to the renderer for a single
    /// testimonial.
    pub fn effective_marker_size(&self) -> f32 {
        self.marker_base_size * self.marker_size_boost
    }
}
