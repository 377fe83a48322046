//! Multiple-choice question field model.
//!
//! Thin wrapper over the shared lifecycle: the answer list rendering is an
//! external collaborator, this model owns the selection set and the
//! optional foldable presentation. Any selection counts as content, so a
//! field with picked answers stays expanded without focus.

use std::time::{Duration, Instant};

use derive_setters::Setters;
use formfield_core::{Callback, CallbackWith, TransitionAnimator, Validity};
use smallvec::SmallVec;

use crate::{
    description::Description,
    field_frame::{FieldFrame, FieldFrameArgs},
};

/// Arguments for configuring a [`ChoiceField`].
#[derive(Clone, Setters)]
pub struct ChoiceFieldArgs {
    /// Label floated while the field is focused or has selections.
    #[setters(into)]
    pub label: String,
    /// The selectable answers, in display order.
    #[setters(into)]
    pub possible_answers: SmallVec<[String; 4]>,
    /// Indices selected at construction time.
    #[setters(into)]
    pub initial_selected: SmallVec<[usize; 4]>,
    /// Whether the answer list can fold behind a summary label.
    pub foldable: bool,
    /// Summary label shown while the foldable list is open.
    #[setters(strip_option, into)]
    pub open_foldable_label: Option<String>,
    /// Summary label shown while the foldable list is closed.
    #[setters(strip_option, into)]
    pub close_foldable_label: Option<String>,
    /// Optional description rendered above the answers.
    #[setters(strip_option)]
    pub description: Option<Description>,
    /// Called with the toggled answer index.
    #[setters(strip_option, into)]
    pub on_select: Option<CallbackWith<usize>>,
    /// Fired once per focus edge.
    #[setters(strip_option, into)]
    pub on_focus: Option<Callback>,
    /// Fired once per blur edge.
    #[setters(strip_option, into)]
    pub on_blur: Option<Callback>,
    /// Full-distance duration of the expand/collapse transition.
    pub transition_duration: Duration,
}

impl Default for ChoiceFieldArgs {
    fn default() -> Self {
        Self {
            label: String::new(),
            possible_answers: SmallVec::new(),
            initial_selected: SmallVec::new(),
            foldable: false,
            open_foldable_label: None,
            close_foldable_label: None,
            description: None,
            on_select: None,
            on_focus: None,
            on_blur: None,
            transition_duration: TransitionAnimator::DEFAULT_DURATION,
        }
    }
}

/// A labeled multiple-choice field sharing the floating-label lifecycle.
pub struct ChoiceField {
    frame: FieldFrame,
    answers: SmallVec<[String; 4]>,
    selected: SmallVec<[usize; 4]>,
    foldable: bool,
    folded: bool,
    open_foldable_label: Option<String>,
    close_foldable_label: Option<String>,
    on_select: Option<CallbackWith<usize>>,
}

impl ChoiceField {
    /// Creates a field from its arguments.
    pub fn new(args: ChoiceFieldArgs) -> Self {
        let mut selected = args.initial_selected;
        // Out-of-range and repeated indices would break toggle semantics.
        let answer_count = args.possible_answers.len();
        let mut seen: SmallVec<[usize; 4]> = SmallVec::new();
        selected.retain(|index| {
            let keep = *index < answer_count && !seen.contains(index);
            if keep {
                seen.push(*index);
            }
            keep
        });
        let mut frame_args = FieldFrameArgs::default()
            .label(args.label)
            .initial_has_content(!selected.is_empty())
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
            answers: args.possible_answers,
            selected,
            foldable: args.foldable,
            folded: args.foldable,
            open_foldable_label: args.open_foldable_label,
            close_foldable_label: args.close_foldable_label,
            on_select: args.on_select,
        }
    }

    /// The selectable answers.
    pub fn possible_answers(&self) -> &[String] {
        &self.answers
    }

    /// The currently selected indices, in toggle order.
    pub fn selected_indices(&self) -> &[usize] {
        &self.selected
    }

    /// Returns whether the answer at `index` is selected.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    /// Toggles the answer at `index`, updating expansion and notifying
    /// `on_select`. Out-of-range indices are ignored.
    pub fn toggle_answer(&mut self, index: usize, now: Instant) {
        if index >= self.answers.len() {
            tracing::warn!(index, answers = self.answers.len(), "ignoring out-of-range answer");
            return;
        }
        if let Some(position) = self.selected.iter().position(|i| *i == index) {
            self.selected.remove(position);
        } else {
            self.selected.push(index);
        }
        self.frame.set_has_content(!self.selected.is_empty(), now);
        if let Some(on_select) = &self.on_select {
            on_select.call(index);
        }
    }

    /// Whether the foldable answer list is currently folded away.
    pub fn is_folded(&self) -> bool {
        self.foldable && self.folded
    }

    /// The summary label for the current fold state, when foldable.
    pub fn foldable_label(&self) -> Option<&str> {
        if !self.foldable {
            return None;
        }
        if self.folded {
            self.close_foldable_label.as_deref()
        } else {
            self.open_foldable_label.as_deref()
        }
    }

    /// User tapped the field surface.
    ///
    /// Non-foldable fields just take focus. Foldable fields toggle between
    /// the folded summary and the open answer list, reusing the focus
    /// lifecycle for the fold transition.
    pub fn press(&mut self, now: Instant) {
        if self.foldable && !self.folded {
            self.folded = true;
            self.frame.native_blur(now);
        } else {
            self.folded = false;
            self.frame.press(now);
        }
    }

    /// Advances the transition timeline.
    pub fn tick(&mut self, now: Instant) {
        self.frame.tick(now);
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

    /// Shared frame accessor for label and description presentation.
    pub fn frame(&self) -> &FieldFrame {
        &self.frame
    }
}
