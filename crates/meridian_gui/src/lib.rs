//! Interaction core of the testimonial globe.
//!
//! | Module      | Responsibility                                        |
//! |-------------|-------------------------------------------------------|
//! | `rotation`  | Auto-rotation angle, speed tiers, drag input          |
//! | `state`     | Interaction modes (idle / drag / animate / popup)     |
//! | `hit_test`  | Pointer-to-pin resolution under the current rotation  |
//! | `selection` | Testimonials behind a clicked pin + wrap-around cursor|
//! | `timer`     | Frame-driven cancelable delays                        |
//! | `widget`    | `GlobeWidget`: owns the above, emits backend commands |
//!
//! The crate is renderer-agnostic and window-system-free: hosts feed
//! pointer events in and forward the emitted [`GlobeCommand`]s to whatever
//! engine actually draws the sphere.

pub mod rotation;
pub mod selection;
pub mod state;
pub mod timer;
pub mod widget;

pub use hit_test::{HitParams, BACK_FACE_CUTOFF};
pub use rotation::RotationState;
pub use selection::SelectionContext;
pub use state::InteractionMode;
pub use timer::{TimerId, TimerQueue};
pub use widget::{GlobeCommand, GlobeWidget, CLICK_SLOP_PX};
