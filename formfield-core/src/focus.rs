//! Focus lifecycle for a single field instance.
//!
//! ## Usage
//!
//! One controller per field. The hosting widget relays user interaction
//! (taps, text changes, native focus/blur from the input surface) into the
//! controller and reads [`FieldFocusController::is_expanded`] back out to
//! drive its transition animator.

use crate::Callback;

/// Single source of truth for one field's focus and expansion lifecycle.
///
/// The controller owns two booleans: whether the field is focused and
/// whether it currently holds content. The visual "expanded" state is never
/// stored; it is always derived as `is_focused || has_content`.
///
/// Focus and blur callbacks fire exactly once per transition edge
/// (`false -> true` for focus, `true -> false` for blur). State is committed
/// before any callback runs, so a callback that re-reads the controller
/// never observes a stale value. Redundant calls are no-ops.
pub struct FieldFocusController {
    is_focused: bool,
    has_content: bool,
    on_focus: Option<Callback>,
    on_blur: Option<Callback>,
    on_input_focus: Option<Callback>,
}

impl FieldFocusController {
    /// Creates a controller for a freshly constructed field.
    ///
    /// `initial_has_content` should be `true` when the field starts with a
    /// non-empty value, so that it renders expanded from the first frame.
    pub fn new(initial_has_content: bool) -> Self {
        Self {
            is_focused: false,
            has_content: initial_has_content,
            on_focus: None,
            on_blur: None,
            on_input_focus: None,
        }
    }

    /// Sets the callback fired once per `false -> true` focus edge.
    pub fn set_on_focus(&mut self, callback: impl Into<Callback>) {
        self.on_focus = Some(callback.into());
    }

    /// Sets the callback fired once per `true -> false` focus edge.
    pub fn set_on_blur(&mut self, callback: impl Into<Callback>) {
        self.on_blur = Some(callback.into());
    }

    /// Sets the deferred action performed when an expand animation completes
    /// while the field is still expanded (typically: move caret focus into
    /// the now-visible input).
    pub fn set_on_input_focus(&mut self, callback: impl Into<Callback>) {
        self.on_input_focus = Some(callback.into());
    }

    /// Returns whether the field currently has focus.
    pub fn is_focused(&self) -> bool {
        self.is_focused
    }

    /// Returns whether the field currently holds content.
    pub fn has_content(&self) -> bool {
        self.has_content
    }

    /// Returns the derived expanded state: `is_focused || has_content`.
    pub fn is_expanded(&self) -> bool {
        self.is_focused || self.has_content
    }

    /// Requests focus for the field, e.g. when the user taps its collapsed
    /// surface. No-op if already focused.
    pub fn request_focus(&mut self) {
        self.set_focused(true);
    }

    /// Records whether the field's value is non-empty.
    ///
    /// Content alone can drive expansion: a non-focused field with a value
    /// stays expanded, and clearing it programmatically collapses it without
    /// any focus change.
    pub fn notify_text_changed(&mut self, has_text: bool) {
        if self.has_content != has_text {
            self.has_content = has_text;
            tracing::trace!(has_content = has_text, "field content changed");
        }
    }

    /// Relay from the input surface gaining low-level input focus.
    pub fn on_native_focus(&mut self) {
        self.set_focused(true);
    }

    /// Relay from the input surface losing low-level input focus.
    ///
    /// Idempotent: blurring an already-unfocused field changes nothing and
    /// fires no callback.
    pub fn on_native_blur(&mut self) {
        self.set_focused(false);
    }

    /// Invoked when the expand/collapse transition finishes.
    ///
    /// If the field is still expanded at invocation time, the deferred
    /// input-focus grant runs and this returns `true`. If expansion has
    /// since flipped off (rapid toggle delivering a stale completion), the
    /// grant is suppressed.
    pub fn on_animation_complete(&self) -> bool {
        if !self.is_expanded() {
            return false;
        }
        if let Some(grant) = &self.on_input_focus {
            grant.call();
        }
        true
    }

    /// Commits a focus value and fires the matching edge callback once.
    fn set_focused(&mut self, focused: bool) {
        if self.is_focused == focused {
            return;
        }
        // Commit before notify: callbacks must observe the new state.
        self.is_focused = focused;
        tracing::trace!(focused, "focus edge");
        let edge = if focused {
            self.on_focus.clone()
        } else {
            self.on_blur.clone()
        };
        if let Some(callback) = edge {
            callback.call();
        }
    }
}

impl Default for FieldFocusController {
    fn default() -> Self {
        Self::new(false)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;

    fn counting_callback() -> (Callback, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let callback = {
            let hits = hits.clone();
            Callback::new(move || {
                hits.fetch_add(1, Ordering::SeqCst);
            })
        };
        (callback, hits)
    }

    fn wired_controller() -> (FieldFocusController, Arc<AtomicUsize>, Arc<AtomicUsize>) {
        let mut controller = FieldFocusController::new(false);
        let (on_focus, focus_hits) = counting_callback();
        let (on_blur, blur_hits) = counting_callback();
        controller.set_on_focus(on_focus);
        controller.set_on_blur(on_blur);
        (controller, focus_hits, blur_hits)
    }

    #[test]
    fn test_focus_fires_once_per_edge() {
        let (mut controller, focus_hits, blur_hits) = wired_controller();

        controller.request_focus();
        controller.request_focus();
        controller.on_native_focus();
        assert_eq!(focus_hits.load(Ordering::SeqCst), 1);

        controller.on_native_blur();
        controller.on_native_blur();
        assert_eq!(blur_hits.load(Ordering::SeqCst), 1);

        controller.request_focus();
        assert_eq!(focus_hits.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_blur_before_any_focus_is_noop() {
        let (mut controller, focus_hits, blur_hits) = wired_controller();
        controller.on_native_blur();
        assert_eq!(focus_hits.load(Ordering::SeqCst), 0);
        assert_eq!(blur_hits.load(Ordering::SeqCst), 0);
        assert!(!controller.is_focused());
    }

    #[test]
    fn test_expanded_is_derived_from_focus_and_content() {
        let mut controller = FieldFocusController::new(true);
        assert!(controller.is_expanded());

        // Clearing while focused keeps the field expanded.
        controller.request_focus();
        controller.notify_text_changed(false);
        assert!(controller.is_expanded());

        // Blur with no content collapses it.
        controller.on_native_blur();
        assert!(!controller.is_expanded());

        // Content alone re-expands without focus.
        controller.notify_text_changed(true);
        assert!(controller.is_expanded());
        assert!(!controller.is_focused());
    }

    #[test]
    fn test_animation_complete_gated_on_expansion() {
        let mut controller = FieldFocusController::new(false);
        let (grant, grant_hits) = counting_callback();
        controller.set_on_input_focus(grant);

        // Expanded: the deferred grant runs.
        controller.request_focus();
        assert!(controller.on_animation_complete());
        assert_eq!(grant_hits.load(Ordering::SeqCst), 1);

        // Collapsed again before the (stale) completion arrives: suppressed.
        controller.on_native_blur();
        assert!(!controller.on_animation_complete());
        assert_eq!(grant_hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_round_trip_restores_state() {
        let (mut controller, _, _) = wired_controller();
        let before = (
            controller.is_focused(),
            controller.has_content(),
            controller.is_expanded(),
        );

        controller.request_focus();
        controller.on_native_blur();
        controller.request_focus();
        controller.on_native_blur();

        let after = (
            controller.is_focused(),
            controller.has_content(),
            controller.is_expanded(),
        );
        assert_eq!(before, after);
    }

    #[test]
    fn test_redundant_content_updates_do_nothing() {
        let mut controller = FieldFocusController::new(true);
        controller.notify_text_changed(true);
        controller.notify_text_changed(true);
        assert!(controller.has_content());
        controller.notify_text_changed(false);
        assert!(!controller.has_content());
    }
}
