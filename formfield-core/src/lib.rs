//! Core focus and transition engine for formfield widgets.
//!
//! Every field in the formfield family shares the same small lifecycle: a
//! labeled input area that is *collapsed* (label centered, input hidden)
//! until the field is focused or holds content, at which point it becomes
//! *expanded* (label floated, input active). This crate owns that lifecycle
//! and nothing else; it has no opinion on layout, styling, or rendering.
//!
//! # Usage
//!
//! Pair a [`FieldFocusController`] with a [`TransitionAnimator`] and drive
//! both from the host event loop:
//!
//! ```
//! use std::time::{Duration, Instant};
//! use formfield_core::{FieldFocusController, TransitionAnimator};
//!
//! let mut controller = FieldFocusController::new(false);
//! let mut animator = TransitionAnimator::new(controller.is_expanded());
//!
//! // User taps the collapsed field.
//! let t0 = Instant::now();
//! controller.request_focus();
//! animator.set_expanded(controller.is_expanded(), t0);
//!
//! // Frame ticks until the expand transition completes.
//! let mut granted = false;
//! if animator.tick(t0 + Duration::from_millis(250)).is_some() {
//!     granted = controller.on_animation_complete();
//! }
//! assert!(granted);
//! ```
//!
//! Consumers read [`TransitionAnimator::eased_progress`] and map the scalar
//! to whatever the presentation needs (label offset, font scale, container
//! height). The animator never touches presentation itself.
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animation;

mod callback;
mod focus;
mod transition;
mod validity;

pub use callback::{Callback, CallbackWith};
pub use focus::FieldFocusController;
pub use transition::{TransitionAnimator, TransitionEnd};
pub use validity::Validity;
