use std::sync::Arc;

use log::{debug, error, warn};
use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{ElementState, KeyEvent, MouseButton, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::{Window, WindowId},
};

use meridian_core::input::{PointerButton, PointerState};
use meridian_core::time::TimeClock;
use meridian_core::viewport::Viewport;
use meridian_gui::state::InteractionMode;
use meridian_gui::widget::GlobeWidget;
use meridian_render::backend::{apply_commands, GlobeBackend};

use crate::builder::WindowConfig;
use crate::context::AppContext;
use crate::traits::GlobeHost;

struct Runner<B: GlobeBackend, H: GlobeHost> {
    config: WindowConfig,
    widget: GlobeWidget,
    backend: B,
    host: H,
    window: Option<Arc<Window>>,
    window_size: (u32, u32),
    pointer: PointerState,
    clock: TimeClock,
    /// Transition tracking for host callbacks.
    was_animating: bool,
    was_popup_open: bool,
    /// First failure; surfaced by `run_internal` after the loop exits.
    fatal: Option<anyhow::Error>,
}

impl<B: GlobeBackend, H: GlobeHost> Runner<B, H> {
    fn new(config: WindowConfig, widget: GlobeWidget, backend: B, host: H) -> Self {
        Self {
            config,
            widget,
            backend,
            host,
            window: None,
            window_size: (0, 0),
            pointer: PointerState::new(),
            clock: TimeClock::new(),
            was_animating: false,
            was_popup_open: false,
            fatal: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        error!("{err:#}");
        if self.fatal.is_none() {
            self.fatal = Some(err);
        }
        event_loop.exit();
    }
}

impl<B: GlobeBackend, H: GlobeHost> ApplicationHandler for Runner<B, H> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        let attributes = Window::default_attributes()
            .with_title(&self.config.title)
            .with_inner_size(PhysicalSize::new(self.config.width, self.config.height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(err) => {
                self.fail(event_loop, anyhow::Error::new(err).context("window creation failed"));
                return;
            }
        };

        self.window_size = (self.config.width, self.config.height);
        self.widget.on_resize(self.config.width, self.config.height);

        if let Err(err) = self.backend.init(self.widget.viewport()) {
            self.fail(
                event_loop,
                anyhow::Error::new(err).context("rendering backend did not come up"),
            );
            return;
        }

        self.window = Some(window);
    }

    fn suspended(&mut self, _event_loop: &ActiveEventLoop) {}

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                let candidate = Viewport::square_fit(size.width, size.height);
                // A backend that cannot take the new size keeps drawing at
                // the old one; never fatal.
                match self.backend.resize(candidate) {
                    Ok(()) => {
                        self.window_size = (size.width, size.height);
                        self.widget.on_resize(size.width, size.height);
                    }
                    Err(err) => warn!("resize to {}x{} rejected: {err}", size.width, size.height),
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.set_position(position.x as f32, position.y as f32);
                let pos = self.pointer.position();
                self.widget.on_pointer_move(pos.x, pos.y);
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer.update_button(PointerButton::Primary, false);
                self.widget.on_pointer_leave();
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let pressed = state == ElementState::Pressed;
                let mapped = match button {
                    MouseButton::Left => PointerButton::Primary,
                    MouseButton::Right => PointerButton::Secondary,
                    MouseButton::Middle => PointerButton::Middle,
                    _ => return,
                };
                self.pointer.update_button(mapped, pressed);
                if mapped == PointerButton::Primary {
                    let pos = self.pointer.position();
                    if pressed {
                        self.widget.on_pointer_down(pos.x, pos.y);
                    } else {
                        self.widget.on_pointer_up(pos.x, pos.y);
                    }
                }
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => match code {
                KeyCode::Escape => self.widget.close_popup(),
                KeyCode::ArrowRight => self.widget.next_testimonial(),
                KeyCode::ArrowLeft => self.widget.prev_testimonial(),
                _ => {}
            },

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.fatal.is_some() {
            return;
        }
        let Some(window) = self.window.clone() else {
            return;
        };

        let time = self.clock.tick();
        self.widget.tick(time.delta);

        // ── Host transition callbacks ────────────────────────────────────
        let animating = matches!(self.widget.mode(), InteractionMode::AnimatingToTarget { .. });
        if animating && !self.was_animating {
            if let InteractionMode::AnimatingToTarget { target } = self.widget.mode() {
                debug!("camera en route, mode={}", self.widget.mode().label());
                let mut ctx = AppContext {
                    time,
                    window_size: self.window_size,
                    widget: &mut self.widget,
                    exit_requested: false,
                };
                self.host.on_marker_resolved(target, &mut ctx);
            }
        }
        self.was_animating = animating;

        let popup_open = self.widget.mode().is_popup_open();
        if popup_open && !self.was_popup_open {
            if let Some(testimonial) = self.widget.current_testimonial() {
                self.host.on_popup_opened(testimonial);
            }
        } else if !popup_open && self.was_popup_open {
            self.host.on_popup_closed();
        }
        self.was_popup_open = popup_open;

        // ── Host frame hook ──────────────────────────────────────────────
        {
            let mut ctx = AppContext {
                time,
                window_size: self.window_size,
                widget: &mut self.widget,
                exit_requested: false,
            };
            self.host.on_frame(&mut ctx);
            if ctx.exit_requested {
                event_loop.exit();
                return;
            }
        }

        // ── Forward this frame's commands and draw ───────────────────────
        apply_commands(&mut self.backend, self.widget.take_commands());
        self.backend.present(time.delta);

        window.request_redraw();
    }
}

pub(crate) fn run_internal<B, H>(
    config: WindowConfig,
    widget: GlobeWidget,
    backend: B,
    host: H,
) -> anyhow::Result<()>
where
    B: GlobeBackend + 'static,
    H: GlobeHost + 'static,
{
    let event_loop = EventLoop::new()?;
    // Poll keeps the rotation advancing every frame instead of sleeping
    // until the next input event.
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut runner = Runner::new(config, widget, backend, host);
    event_loop.run_app(&mut runner)?;

    match runner.fatal {
        Some(err) => Err(err),
        None => Ok(()),
    }
}
