//! Single-line text field model.
//!
//! ## Usage
//!
//! Collect short-form inputs like names or references. The hosting UI
//! relays taps, native focus/blur, and text edits; the model keeps the
//! floating-label lifecycle and tells the host when to move caret focus
//! into the input.

use std::time::{Duration, Instant};

use derive_setters::Setters;
use formfield_core::{Callback, CallbackWith, TransitionAnimator, Validity};

use crate::{
    description::Description,
    field_frame::{FieldFrame, FieldFrameArgs},
};

/// Arguments for configuring a [`SingleLineField`].
#[derive(Clone, Setters)]
pub struct SingleLineFieldArgs {
    /// Label floated while the field is focused or non-empty.
    #[setters(into)]
    pub label: String,
    /// Initial text content.
    #[setters(into)]
    pub initial_text: String,
    /// Optional description rendered above the input area.
    #[setters(strip_option)]
    pub description: Option<Description>,
    /// Called with the new content whenever the text changes.
    #[setters(strip_option, into)]
    pub on_change: Option<CallbackWith<String>>,
    /// Fired once per focus edge.
    #[setters(strip_option, into)]
    pub on_focus: Option<Callback>,
    /// Fired once per blur edge.
    #[setters(strip_option, into)]
    pub on_blur: Option<Callback>,
    /// Full-distance duration of the expand/collapse transition.
    pub transition_duration: Duration,
}

impl Default for SingleLineFieldArgs {
    fn default() -> Self {
        Self {
            label: String::new(),
            initial_text: String::new(),
            description: None,
            on_change: None,
            on_focus: None,
            on_blur: None,
            transition_duration: TransitionAnimator::DEFAULT_DURATION,
        }
    }
}

/// A labeled single-line text input with a floating label, validity accent,
/// and animation-gated caret focus.
pub struct SingleLineField {
    frame: FieldFrame,
    value: String,
    caret_active: bool,
    on_change: Option<CallbackWith<String>>,
}

impl SingleLineField {
    /// Creates a field from its arguments.
    pub fn new(args: SingleLineFieldArgs) -> Self {
        let mut frame_args = FieldFrameArgs::default()
            .label(args.label)
            .initial_has_content(!args.initial_text.is_empty())
            .transition_duration(args.transition_duration);
        if let Some(description) = args.description {
            frame_args = frame_args.description(description);
        }
        if let Some(on_focus) = args.on_focus {
            frame_args = frame_args.on_focus(on_focus);
        }
        if let Some(on_blur) = args.on_blur {
            frame_args = frame_args.on_blur(on_blur);
        }
        Self {
            frame: FieldFrame::new(frame_args),
            value: args.initial_text,
            caret_active: false,
            on_change: args.on_change,
        }
    }

    /// Current text content.
    pub fn text(&self) -> &str {
        &self.value
    }

    /// Replaces the text content, updating expansion and notifying
    /// `on_change`. No-op when the text is unchanged.
    pub fn set_text(&mut self, text: impl Into<String>, now: Instant) {
        let text = text.into();
        if text == self.value {
            return;
        }
        self.value = text;
        self.frame.set_has_content(!self.value.is_empty(), now);
        if let Some(on_change) = &self.on_change {
            on_change.call(self.value.clone());
        }
    }

    /// User tapped the field surface.
    pub fn press(&mut self, now: Instant) {
        self.frame.press(now);
    }

    /// Relay from the input surface gaining low-level focus.
    pub fn native_focus(&mut self, now: Instant) {
        self.frame.native_focus(now);
    }

    /// Relay from the input surface losing low-level focus.
    pub fn native_blur(&mut self, now: Instant) {
        self.caret_active = false;
        self.frame.native_blur(now);
    }

    /// Advances the transition; activates the caret when the expand
    /// animation completes while the field is still focused.
    pub fn tick(&mut self, now: Instant) {
        if self.frame.tick(now) && self.frame.is_focused() {
            self.caret_active = true;
        }
    }

    /// Whether caret focus has been granted to the input.
    pub fn caret_active(&self) -> bool {
        self.caret_active
    }

    /// Stores the caller's validity judgement for display.
    pub fn set_validity(&mut self, validity: impl Into<Validity>) {
        self.frame.set_validity(validity);
    }

    /// The caller-supplied validity signal.
    pub fn validity(&self) -> Validity {
        self.frame.validity()
    }

    /// Returns the derived expanded state.
    pub fn is_expanded(&self) -> bool {
        self.frame.is_expanded()
    }

    /// Returns whether the field currently has focus.
    pub fn is_focused(&self) -> bool {
        self.frame.is_focused()
    }

    /// Eased label/container interpolation scalar.
    pub fn label_fraction(&self) -> f32 {
        self.frame.label_fraction()
    }

    /// Shared frame accessor for label and description presentation.
    pub fn frame(&self) -> &FieldFrame {
        &self.frame
    }
}
