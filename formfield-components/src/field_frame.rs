//! Shared focus/transition/validity glue owned by every field model.
//!
//! ## Usage
//!
//! Field models embed a [`FieldFrame`] and forward interaction events to it;
//! the frame keeps the focus controller and the transition animator in step
//! and carries the presentation-only validity signal.

use std::time::{Duration, Instant};

use derive_setters::Setters;
use formfield_core::{Callback, FieldFocusController, TransitionAnimator, Validity};

use crate::description::Description;

/// Arguments for constructing a [`FieldFrame`].
#[derive(Clone, Setters)]
pub struct FieldFrameArgs {
    /// Label shown centered while collapsed and floated while expanded.
    #[setters(into)]
    pub label: String,
    /// Whether the field starts with a non-empty value.
    pub initial_has_content: bool,
    /// Optional description rendered above the input area.
    #[setters(strip_option)]
    pub description: Option<Description>,
    /// Fired once per `false -> true` focus edge.
    #[setters(strip_option, into)]
    pub on_focus: Option<Callback>,
    /// Fired once per `true -> false` focus edge.
    #[setters(strip_option, into)]
    pub on_blur: Option<Callback>,
    /// Deferred action run when an expand transition completes while the
    /// field is still expanded.
    #[setters(strip_option, into)]
    pub on_input_focus: Option<Callback>,
    /// Full-distance duration of the expand/collapse transition.
    pub transition_duration: Duration,
}

impl Default for FieldFrameArgs {
    fn default() -> Self {
        Self {
            label: String::new(),
            initial_has_content: false,
            description: None,
            on_focus: None,
            on_blur: None,
            on_input_focus: None,
            transition_duration: TransitionAnimator::DEFAULT_DURATION,
        }
    }
}

/// Per-field composition of a [`FieldFocusController`] and a
/// [`TransitionAnimator`], plus the label, optional description, and the
/// caller-supplied validity signal.
///
/// Every mutating entry point commits exactly one focus-state mutation and
/// immediately syncs the derived expanded value into the animator, so no
/// intermediate edge is ever dropped or batched away.
pub struct FieldFrame {
    label: String,
    description: Option<Description>,
    controller: FieldFocusController,
    animator: TransitionAnimator,
    validity: Validity,
}

impl FieldFrame {
    /// Creates a frame from its arguments.
    pub fn new(args: FieldFrameArgs) -> Self {
        let mut controller = FieldFocusController::new(args.initial_has_content);
        if let Some(on_focus) = args.on_focus {
            controller.set_on_focus(on_focus);
        }
        if let Some(on_blur) = args.on_blur {
            controller.set_on_blur(on_blur);
        }
        if let Some(on_input_focus) = args.on_input_focus {
            controller.set_on_input_focus(on_input_focus);
        }
        let animator =
            TransitionAnimator::with_duration(controller.is_expanded(), args.transition_duration);
        Self {
            label: args.label,
            description: args.description,
            controller,
            animator,
            validity: Validity::Unknown,
        }
    }

    /// The field's label text.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The field's optional description.
    pub fn description(&self) -> Option<&Description> {
        self.description.as_ref()
    }

    /// Returns whether the field currently has focus.
    pub fn is_focused(&self) -> bool {
        self.controller.is_focused()
    }

    /// Returns the derived expanded state.
    pub fn is_expanded(&self) -> bool {
        self.controller.is_expanded()
    }

    /// Returns whether an expand/collapse transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Linear interpolation scalar in `[0, 1]` (0 collapsed, 1 expanded).
    pub fn progress(&self) -> f32 {
        self.animator.progress()
    }

    /// Eased interpolation scalar consumed by label/container mapping.
    pub fn label_fraction(&self) -> f32 {
        self.animator.eased_progress()
    }

    /// The caller-supplied validity signal.
    pub fn validity(&self) -> Validity {
        self.validity
    }

    /// Stores the caller's validity judgement.
    ///
    /// Pass-through display state only: the transition timeline is not
    /// touched, so recoloring mid-animation cannot restart or alter it.
    pub fn set_validity(&mut self, validity: impl Into<Validity>) {
        self.validity = validity.into();
    }

    /// User tapped the field surface.
    pub fn press(&mut self, now: Instant) {
        self.controller.request_focus();
        self.sync_expanded(now);
    }

    /// Relay from the input surface gaining low-level focus.
    pub fn native_focus(&mut self, now: Instant) {
        self.controller.on_native_focus();
        self.sync_expanded(now);
    }

    /// Relay from the input surface losing low-level focus.
    pub fn native_blur(&mut self, now: Instant) {
        self.controller.on_native_blur();
        self.sync_expanded(now);
    }

    /// Records whether the field's value is non-empty.
    pub fn set_has_content(&mut self, has_content: bool, now: Instant) {
        self.controller.notify_text_changed(has_content);
        self.sync_expanded(now);
    }

    /// Advances the transition timeline.
    ///
    /// When the in-flight transition completes, the controller is notified;
    /// returns `true` when the deferred input-focus grant ran (the field was
    /// still expanded at completion time).
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.animator.tick(now) {
            Some(_) => self.controller.on_animation_complete(),
            None => false,
        }
    }

    /// One mutation, then one derived `set_expanded`, per event-loop turn.
    fn sync_expanded(&mut self, now: Instant) {
        self.animator.set_expanded(self.controller.is_expanded(), now);
    }
}
