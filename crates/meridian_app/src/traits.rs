use meridian_core::geo::GeoPoint;
use meridian_core::testimonial::Testimonial;

use crate::context::AppContext;

/// Hooks for the layer that draws chrome around the globe.
///
/// The widget core owns no visuals; whoever embeds it renders the popup,
/// close button and navigation arrows from the state on [`AppContext`].
/// All methods have empty default implementations so a minimal embedding
/// overrides nothing.
#[allow(unused_variables)]
pub trait GlobeHost {
    /// Called once per frame after the widget has ticked, before commands
    /// are forwarded to the backend. Mutate the widget here (close the
    /// popup on your own button, cycle testimonials, swap datasets).
    fn on_frame(&mut self, ctx: &mut AppContext) {}

    /// A pin was clicked and the camera is on its way there.
    fn on_marker_resolved(&mut self, target: GeoPoint, ctx: &mut AppContext) {}

    /// The settle delay elapsed and the popup is now showing `testimonial`.
    fn on_popup_opened(&mut self, testimonial: &Testimonial) {}

    /// The popup was dismissed.
    fn on_popup_closed(&mut self) {}
}

/// The do-nothing host, for embeddings that poll widget state themselves.
impl GlobeHost for () {}
