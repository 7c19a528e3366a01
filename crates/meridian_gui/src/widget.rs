//! The globe widget: one struct owning every piece of interaction state.
//!
//! Hosts feed it pointer events and a per-frame tick; it answers with a
//! batch of [`GlobeCommand`]s for the rendering backend and exposes its
//! mode/selection/rotation for whatever chrome the host draws around it.
//! Nothing here touches a window system or a GPU.

use std::time::Duration;

use glam::Vec2;
use log::debug;

use meridian_core::config::GlobeConfig;
use meridian_core::geo::{CameraPose, GeoPoint};
use meridian_core::marker::{self, Marker};
use meridian_core::testimonial::{self, DatasetError, Testimonial, TestimonialId};
use meridian_core::viewport::Viewport;

use crate::hit_test::{self, HitParams};
use crate::rotation::RotationState;
use crate::selection::SelectionContext;
use crate::state::InteractionMode;
use crate::timer::{TimerId, TimerQueue};

/// Horizontal travel (pixels) below which a press/release pair counts as a
/// click instead of a drag.
pub const CLICK_SLOP_PX: f32 = 4.0;

/// Instructions for the rendering backend, drained once per frame.
#[derive(Debug, Clone, PartialEq)]
pub enum GlobeCommand {
    /// Replace the backend's pin set.
    SetMarkers(Vec<Marker>),
    /// Current rotation angle for this frame, radians.
    SetRotation(f32),
    /// Animate the camera toward a pose.
    FlyTo { pose: CameraPose, duration_ms: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerKind {
    /// Re-enable auto-rotation after a drag ended.
    ResumeAfterDrag,
    /// Settle delay elapsed; open the popup for the focused pin.
    OpenPopup,
    /// Re-enable auto-rotation and recentre after the popup closed.
    ResumeAfterClose,
}

/// Interactive testimonial globe.
pub struct GlobeWidget {
    config: GlobeConfig,
    testimonials: Vec<Testimonial>,
    markers: Vec<Marker>,

    rotation: RotationState,
    mode: InteractionMode,
    selection: Option<SelectionContext>,
    hovered: Option<usize>,
    /// Where the camera was last pointed; recentring keeps this target and
    /// only pulls the altitude back out.
    camera_center: GeoPoint,

    timers: TimerQueue<TimerKind>,
    clock: Duration,
    pending_resume: Option<TimerId>,
    pending_settle: Option<TimerId>,

    commands: Vec<GlobeCommand>,
    viewport: Viewport,
    last_pointer_x: f32,
}

impl GlobeWidget {
    /// Builds a widget over a caller-supplied dataset.
    ///
    /// The dataset is validated and then owned verbatim; the built-in
    /// records are never merged in. Use [`GlobeWidget::with_builtin`] to
    /// get the stock dataset.
    pub fn new(config: GlobeConfig, testimonials: Vec<Testimonial>) -> Result<Self, DatasetError> {
        testimonial::validate(&testimonials)?;
        let markers = marker::from_testimonials(&testimonials, config.effective_marker_size());
        let rotation = RotationState::new(
            config.auto_rotate_speed,
            config.hover_rotate_speed,
            !config.auto_rotate,
        );
        let commands = vec![GlobeCommand::SetMarkers(markers.clone())];
        Ok(Self {
            config,
            testimonials,
            markers,
            rotation,
            mode: InteractionMode::Idle,
            selection: None,
            hovered: None,
            camera_center: GeoPoint::new(0.0, 0.0),
            timers: TimerQueue::new(),
            clock: Duration::ZERO,
            pending_resume: None,
            pending_settle: None,
            commands,
            viewport: Viewport::new(0, 0, 0, 0),
            last_pointer_x: 0.0,
        })
    }

    /// Widget over the built-in dataset.
    pub fn with_builtin(config: GlobeConfig) -> Self {
        // The built-in dataset is validated by its own tests; this cannot
        // fail at runtime.
        match Self::new(config, meridian_core::dataset::builtin()) {
            Ok(widget) => widget,
            Err(_) => unreachable!("built-in dataset is always valid"),
        }
    }

    // ── Frame tick ──────────────────────────────────────────────────────

    /// Advances the widget by one frame. `dt` is seconds since the last
    /// tick (the host's clock already clamps stalls). Timer expiries are
    /// processed first, then the rotation advances, then the frame's
    /// rotation command is queued.
    pub fn tick(&mut self, dt: f32) {
        let dt = dt.max(0.0);
        self.clock += Duration::from_secs_f32(dt);

        for (id, kind) in self.timers.pop_due(self.clock) {
            self.on_timer(id, kind);
        }

        self.rotation.tick(dt);
        self.commands.push(GlobeCommand::SetRotation(self.rotation.angle()));
    }

    fn on_timer(&mut self, id: TimerId, kind: TimerKind) {
        match kind {
            TimerKind::ResumeAfterDrag | TimerKind::ResumeAfterClose => {
                // A newer interaction re-schedules under a fresh id; an old
                // deadline that somehow survives cancellation is ignored.
                if self.pending_resume != Some(id) {
                    return;
                }
                self.pending_resume = None;
                if !self.mode.is_idle() || self.selection.is_some() {
                    return;
                }
                if self.config.auto_rotate {
                    self.rotation.set_suspended(false);
                }
                if kind == TimerKind::ResumeAfterClose {
                    self.fly_to(CameraPose::new(self.camera_center, self.config.wide_altitude));
                }
            }
            TimerKind::OpenPopup => {
                if self.pending_settle != Some(id) {
                    return;
                }
                self.pending_settle = None;
                let InteractionMode::AnimatingToTarget { target } = self.mode else {
                    return;
                };
                match marker::at_coordinate(&self.markers, target)
                    .and_then(|m| SelectionContext::new(m.testimonials.clone()))
                {
                    Some(selection) => {
                        debug!(
                            "popup open at ({:.4}, {:.4}) with {} testimonial(s)",
                            target.lat_deg,
                            target.lon_deg,
                            selection.len()
                        );
                        self.selection = Some(selection);
                        self.mode = InteractionMode::PopupOpen;
                    }
                    None => {
                        // The dataset changed while the camera was flying;
                        // drop the focus without surfacing anything.
                        debug!(
                            "focused pin at ({:.4}, {:.4}) no longer exists, abandoning popup",
                            target.lat_deg, target.lon_deg
                        );
                        self.mode = InteractionMode::Idle;
                        self.schedule_resume(TimerKind::ResumeAfterDrag, self.config.drag_resume_delay_ms);
                    }
                }
            }
        }
    }

    // ── Pointer events ──────────────────────────────────────────────────

    /// Primary button pressed at window position `(x, y)`. Only the x
    /// coordinate matters at press time; y participates at release when a
    /// click is synthesized.
    pub fn on_pointer_down(&mut self, x: f32, _y: f32) {
        if self.mode.is_popup_open() {
            // The popup chrome sits above the globe; clicks belong to it.
            return;
        }
        self.cancel_pending_resume();
        self.cancel_pending_settle();
        self.mode = InteractionMode::Dragging {
            start_x: x,
            travel: 0.0,
        };
        self.last_pointer_x = x;
        self.rotation.set_suspended(true);
    }

    /// Pointer moved to window position `(x, y)`.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        if let InteractionMode::Dragging { start_x, travel } = self.mode {
            let dx = x - self.last_pointer_x;
            self.last_pointer_x = x;
            self.rotation.apply_drag(dx, self.config.drag_sensitivity);
            self.mode = InteractionMode::Dragging {
                start_x,
                travel: travel + dx.abs(),
            };
            return;
        }

        if self.mode.is_idle() {
            self.hovered = self
                .viewport
                .normalize(x, y)
                .and_then(|pointer| self.resolve_pointer(pointer));
            self.rotation.set_hovering(self.hovered.is_some());
        }
    }

    /// Primary button released at window position `(x, y)`.
    pub fn on_pointer_up(&mut self, x: f32, y: f32) {
        let InteractionMode::Dragging { travel, .. } = self.mode else {
            return;
        };
        if travel <= CLICK_SLOP_PX {
            self.handle_click(x, y);
        } else {
            self.end_drag();
        }
    }

    /// Pointer left the widget. Ends any drag without synthesizing a click.
    pub fn on_pointer_leave(&mut self) {
        self.hovered = None;
        self.rotation.set_hovering(false);
        if matches!(self.mode, InteractionMode::Dragging { .. }) {
            self.end_drag();
        }
    }

    fn handle_click(&mut self, x: f32, y: f32) {
        let hit = self
            .viewport
            .normalize(x, y)
            .and_then(|pointer| self.resolve_pointer(pointer));
        match hit {
            Some(index) => self.focus_marker(index),
            None => self.end_drag(),
        }
    }

    fn resolve_pointer(&self, pointer: Vec2) -> Option<usize> {
        let params = HitParams {
            visibility_radius: self.config.visibility_radius,
            click_threshold: self.config.click_threshold,
        };
        hit_test::resolve(pointer, self.rotation.angle(), &self.markers, &params)
    }

    fn focus_marker(&mut self, index: usize) {
        let target = self.markers[index].coordinate;
        debug!(
            "pin clicked at ({:.4}, {:.4}), flying camera",
            target.lat_deg, target.lon_deg
        );
        self.mode = InteractionMode::AnimatingToTarget { target };
        self.rotation.set_suspended(true);
        self.cancel_pending_resume();
        self.camera_center = target;
        self.fly_to(CameraPose::new(target, self.config.focus_altitude));
        self.pending_settle = Some(self.timers.schedule(
            self.clock,
            Duration::from_millis(self.config.settle_delay_ms),
            TimerKind::OpenPopup,
        ));
    }

    fn end_drag(&mut self) {
        self.mode = InteractionMode::Idle;
        self.schedule_resume(TimerKind::ResumeAfterDrag, self.config.drag_resume_delay_ms);
    }

    // ── Popup control ───────────────────────────────────────────────────

    /// Closes the popup. Rotation resumes and the camera recentres after
    /// the configured delay.
    pub fn close_popup(&mut self) {
        if !self.mode.is_popup_open() {
            return;
        }
        debug!("popup closed");
        self.selection = None;
        self.mode = InteractionMode::Idle;
        self.schedule_resume(TimerKind::ResumeAfterClose, self.config.close_resume_delay_ms);
    }

    /// Cycles to the next testimonial on a multi-quote pin.
    pub fn next_testimonial(&mut self) {
        if let Some(selection) = self.selection.as_mut() {
            selection.next();
        }
    }

    /// Cycles to the previous testimonial on a multi-quote pin.
    pub fn prev_testimonial(&mut self) {
        if let Some(selection) = self.selection.as_mut() {
            selection.prev();
        }
    }

    // ── Dataset and layout ──────────────────────────────────────────────

    /// Replaces the dataset. An open popup is closed first since its
    /// selection indexes the old records; an in-flight focus resolves
    /// against the new markers when it settles (and is silently dropped if
    /// its pin is gone).
    pub fn set_testimonials(&mut self, testimonials: Vec<Testimonial>) -> Result<(), DatasetError> {
        testimonial::validate(&testimonials)?;
        if self.mode.is_popup_open() {
            self.close_popup();
        }
        self.markers =
            marker::from_testimonials(&testimonials, self.config.effective_marker_size());
        self.testimonials = testimonials;
        self.hovered = None;
        self.rotation.set_hovering(false);
        self.commands.push(GlobeCommand::SetMarkers(self.markers.clone()));
        Ok(())
    }

    /// Recomputes the globe viewport for a new window size. Synchronous;
    /// rotation is not suspended by a resize.
    pub fn on_resize(&mut self, window_width: u32, window_height: u32) {
        self.viewport = Viewport::square_fit(window_width, window_height);
    }

    // ── State exposed to the host ───────────────────────────────────────

    pub fn mode(&self) -> InteractionMode {
        self.mode
    }

    pub fn rotation(&self) -> &RotationState {
        &self.rotation
    }

    /// Sets the rotation angle directly, for hosts restoring a saved view.
    pub fn set_rotation_angle(&mut self, angle: f32) {
        self.rotation.set_angle(angle);
    }

    pub fn selection(&self) -> Option<&SelectionContext> {
        self.selection.as_ref()
    }

    /// The record the popup is currently showing.
    pub fn current_testimonial(&self) -> Option<&Testimonial> {
        self.selection
            .as_ref()
            .and_then(|s| self.testimonial(s.current()))
    }

    pub fn testimonial(&self, id: TestimonialId) -> Option<&Testimonial> {
        self.testimonials.get(id.0 as usize)
    }

    /// Index of the pin under the pointer, if any.
    pub fn hovered_marker(&self) -> Option<usize> {
        self.hovered
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn config(&self) -> &GlobeConfig {
        &self.config
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Drains the commands queued since the last call. The host forwards
    /// them to its rendering backend once per frame.
    pub fn take_commands(&mut self) -> Vec<GlobeCommand> {
        std::mem::take(&mut self.commands)
    }

    // ── Internals ───────────────────────────────────────────────────────

    fn fly_to(&mut self, pose: CameraPose) {
        self.commands.push(GlobeCommand::FlyTo {
            pose,
            duration_ms: self.config.fly_duration_ms,
        });
    }

    fn schedule_resume(&mut self, kind: TimerKind, delay_ms: u64) {
        self.cancel_pending_resume();
        self.pending_resume =
            Some(self.timers.schedule(self.clock, Duration::from_millis(delay_ms), kind));
    }

    fn cancel_pending_resume(&mut self) {
        if let Some(id) = self.pending_resume.take() {
            self.timers.cancel(id);
        }
    }

    fn cancel_pending_settle(&mut self) {
        if let Some(id) = self.pending_settle.take() {
            self.timers.cancel(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use meridian_core::geo;

    const VIEW: f32 = 800.0;

    fn widget() -> GlobeWidget {
        let mut w = GlobeWidget::with_builtin(GlobeConfig::default());
        w.on_resize(VIEW as u32, VIEW as u32);
        w
    }

    /// Window-pixel position of marker `index` under the current rotation.
    fn marker_px(w: &GlobeWidget, index: usize) -> (f32, f32) {
        let unit = w.markers()[index].coordinate.to_unit_sphere(w.rotation().angle());
        let screen = geo::project_to_screen(unit);
        (screen.x * VIEW, screen.y * VIEW)
    }

    /// Rotate marker `index` to front centre and click it.
    fn click_marker(w: &mut GlobeWidget, index: usize) {
        let lon = w.markers()[index].coordinate.lon_deg;
        w.set_rotation_angle(-lon.to_radians());
        let (x, y) = marker_px(w, index);
        w.on_pointer_down(x, y);
        w.on_pointer_up(x, y);
    }

    /// Tick in small steps until `total_ms` of widget time has passed.
    fn run_for_ms(w: &mut GlobeWidget, total_ms: u64) {
        let mut remaining = total_ms as f32 / 1000.0;
        while remaining > 0.0 {
            let step = remaining.min(0.016);
            w.tick(step);
            remaining -= step;
        }
    }

    #[test]
    fn initial_commands_carry_the_marker_set() {
        let mut w = widget();
        let commands = w.take_commands();
        assert!(matches!(&commands[0], GlobeCommand::SetMarkers(m) if !m.is_empty()));
    }

    #[test]
    fn dragging_suspends_rotation_until_shortly_after_release() {
        let mut w = widget();
        assert!(!w.rotation().suspended());

        w.on_pointer_down(400.0, 400.0);
        assert!(w.rotation().suspended());
        w.on_pointer_move(430.0, 400.0);
        assert!(matches!(w.mode(), InteractionMode::Dragging { .. }));

        w.on_pointer_up(430.0, 400.0);
        assert!(w.mode().is_idle());
        run_for_ms(&mut w, 50);
        assert!(w.rotation().suspended(), "resume fired too early");
        run_for_ms(&mut w, 60);
        assert!(!w.rotation().suspended(), "resume did not fire");
    }

    #[test]
    fn drag_rotates_by_sensitivity() {
        let mut w = widget();
        w.on_pointer_down(400.0, 400.0);
        w.on_pointer_move(500.0, 400.0);
        let expected = 100.0 * w.config().drag_sensitivity;
        assert!((w.rotation().angle() - expected).abs() < 1e-5);
    }

    #[test]
    fn a_new_drag_keeps_the_stale_resume_timer_from_firing() {
        let mut w = widget();
        w.on_pointer_down(400.0, 400.0);
        w.on_pointer_move(450.0, 400.0);
        w.on_pointer_up(450.0, 400.0);

        // Second drag begins before the 100 ms resume deadline.
        run_for_ms(&mut w, 40);
        w.on_pointer_down(400.0, 400.0);
        w.on_pointer_move(420.0, 400.0);
        run_for_ms(&mut w, 200);
        assert!(
            w.rotation().suspended(),
            "old resume timer acted during an active drag"
        );
    }

    #[test]
    fn clicking_a_pin_flies_the_camera_then_opens_the_popup() {
        let mut w = widget();
        click_marker(&mut w, 0);

        assert!(matches!(w.mode(), InteractionMode::AnimatingToTarget { .. }));
        assert!(w.rotation().suspended());
        let commands = w.take_commands();
        let focus_altitude = w.config().focus_altitude;
        assert!(commands.iter().any(|c| matches!(
            c,
            GlobeCommand::FlyTo { pose, .. } if (pose.altitude - focus_altitude).abs() < 1e-6
        )));
        assert!(w.selection().is_none(), "popup opened before the settle delay");

        let settle = w.config().settle_delay_ms + 20;
        run_for_ms(&mut w, settle);
        assert!(w.mode().is_popup_open());
        let selection = w.selection().expect("selection populated");
        // The first builtin pin carries both Chicago records.
        assert_eq!(selection.len(), 2);
        assert_eq!(
            w.current_testimonial().map(|t| t.display_name.as_str()),
            Some("Maren Voss")
        );
    }

    #[test]
    fn popup_navigation_wraps_both_directions() {
        let mut w = widget();
        click_marker(&mut w, 0);
        let settle = w.config().settle_delay_ms + 20;
        run_for_ms(&mut w, settle);

        assert_eq!(w.selection().unwrap().index(), 0);
        w.prev_testimonial();
        assert_eq!(w.selection().unwrap().index(), 1, "prev from 0 must wrap to the last entry");
        w.next_testimonial();
        assert_eq!(w.selection().unwrap().index(), 0);
    }

    #[test]
    fn closing_the_popup_resumes_rotation_and_recentres_after_the_delay() {
        let mut w = widget();
        click_marker(&mut w, 0);
        let settle = w.config().settle_delay_ms + 20;
        run_for_ms(&mut w, settle);
        w.take_commands();

        w.close_popup();
        assert!(w.mode().is_idle());
        assert!(w.selection().is_none());
        assert!(w.rotation().suspended(), "rotation resumed without the close delay");

        let resume = w.config().close_resume_delay_ms + 20;
        run_for_ms(&mut w, resume);
        assert!(!w.rotation().suspended());
        let wide_altitude = w.config().wide_altitude;
        assert!(w.take_commands().iter().any(|c| matches!(
            c,
            GlobeCommand::FlyTo { pose, .. } if (pose.altitude - wide_altitude).abs() < 1e-6
        )));
    }

    #[test]
    fn clicks_outside_the_globe_change_nothing() {
        let mut w = widget();
        w.take_commands();
        w.on_pointer_down(780.0, 780.0);
        w.on_pointer_up(780.0, 780.0);
        run_for_ms(&mut w, 200);
        assert!(w.mode().is_idle());
        assert!(!w
            .take_commands()
            .iter()
            .any(|c| matches!(c, GlobeCommand::FlyTo { .. })));
    }

    #[test]
    fn stale_focus_target_skips_the_popup() {
        let mut w = widget();
        click_marker(&mut w, 0);

        // Swap the dataset mid-flight for one nowhere near the target.
        let replacement = vec![Testimonial {
            display_name: "Solo".into(),
            affiliation: String::new(),
            location_label: String::new(),
            body_text: String::new(),
            coordinate: GeoPoint::new(-33.8688, 151.2093),
        }];
        w.set_testimonials(replacement).unwrap();

        let settle = w.config().settle_delay_ms + 20;
        run_for_ms(&mut w, settle);
        assert!(w.mode().is_idle(), "stale focus should fall back to idle");
        assert!(w.selection().is_none());
        run_for_ms(&mut w, 200);
        assert!(!w.rotation().suspended());
    }

    #[test]
    fn replacing_the_dataset_while_the_popup_is_open_closes_it() {
        let mut w = widget();
        click_marker(&mut w, 0);
        let settle = w.config().settle_delay_ms + 20;
        run_for_ms(&mut w, settle);
        assert!(w.mode().is_popup_open());

        w.set_testimonials(meridian_core::dataset::builtin()).unwrap();
        assert!(w.mode().is_idle());
        assert!(w.selection().is_none());
    }

    #[test]
    fn hovering_a_pin_slows_rotation() {
        let mut w = widget();
        let lon = w.markers()[2].coordinate.lon_deg;
        w.set_rotation_angle(-lon.to_radians());
        let (x, y) = marker_px(&w, 2);

        w.on_pointer_move(x, y);
        assert_eq!(w.hovered_marker(), Some(2));
        assert_eq!(w.rotation().velocity(), w.config().hover_rotate_speed);

        w.on_pointer_move(790.0, 790.0);
        assert_eq!(w.hovered_marker(), None);
        assert_eq!(w.rotation().velocity(), w.config().auto_rotate_speed);
    }

    #[test]
    fn auto_rotate_off_stays_suspended() {
        let cfg = GlobeConfig {
            auto_rotate: false,
            ..GlobeConfig::default()
        };
        let mut w = GlobeWidget::new(cfg, meridian_core::dataset::builtin()).unwrap();
        w.on_resize(VIEW as u32, VIEW as u32);

        assert!(w.rotation().suspended());
        w.on_pointer_down(400.0, 400.0);
        w.on_pointer_move(450.0, 400.0);
        w.on_pointer_up(450.0, 400.0);
        run_for_ms(&mut w, 300);
        assert!(w.rotation().suspended(), "auto_rotate=false must never resume");
    }

    #[test]
    fn pointer_leave_ends_a_drag_without_a_click() {
        let mut w = widget();
        w.take_commands();
        w.on_pointer_down(400.0, 400.0);
        w.on_pointer_leave();
        assert!(w.mode().is_idle());
        run_for_ms(&mut w, 150);
        assert!(!w.rotation().suspended());
        assert!(!w
            .take_commands()
            .iter()
            .any(|c| matches!(c, GlobeCommand::FlyTo { .. })));
    }

    #[test]
    fn resize_recomputes_a_square_viewport() {
        let mut w = widget();
        w.on_resize(1280, 720);
        assert_eq!(w.viewport(), Viewport::new(280, 0, 720, 720));
        assert!(!w.rotation().suspended(), "resize must not suspend rotation");
    }
}
