//! Expand/collapse transition timeline for one field.
//!
//! ## Usage
//!
//! The hosting widget forwards its derived expanded state via
//! [`TransitionAnimator::set_expanded`] and advances the timeline from its
//! frame loop with [`TransitionAnimator::tick`]. The current scalar is read
//! back per frame and mapped to label offset, font scale, and container
//! height by the presentation layer.

use std::time::{Duration, Instant};

use crate::animation;

/// One-shot completion event for a transition that reached its target.
///
/// Emitted at most once per transition actually started by
/// [`TransitionAnimator::set_expanded`]; preempted transitions never emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransitionEnd {
    /// The target state the transition settled on.
    pub expanded: bool,
}

struct Transition {
    started: Instant,
    from: f32,
    duration: Duration,
}

/// Drives a continuous interpolation scalar in `[0, 1]` between the
/// collapsed (0) and expanded (1) presentation of a field.
///
/// The animator owns timing and progress only; it is presentation-agnostic.
/// Transitions run at a constant rate: reversing mid-flight continues
/// smoothly from the current interpolated value, with the remaining duration
/// scaled by the remaining distance. Starting a new transition preempts any
/// in-flight one, and only the latest transition's completion is ever
/// surfaced (last-transition-wins).
pub struct TransitionAnimator {
    expanded: bool,
    progress: f32,
    transition: Option<Transition>,
    full_duration: Duration,
}

impl TransitionAnimator {
    /// Duration of a full-distance transition.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(200);

    /// Creates an animator settled on the given state.
    pub fn new(initial_expanded: bool) -> Self {
        Self::with_duration(initial_expanded, Self::DEFAULT_DURATION)
    }

    /// Creates an animator with a custom full-distance duration.
    pub fn with_duration(initial_expanded: bool, duration: Duration) -> Self {
        Self {
            expanded: initial_expanded,
            progress: if initial_expanded { 1.0 } else { 0.0 },
            transition: None,
            full_duration: duration,
        }
    }

    /// Returns the current transition target.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns the last sampled interpolation scalar in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Returns the current scalar mapped through cubic ease-in-out.
    pub fn eased_progress(&self) -> f32 {
        animation::easing(self.progress)
    }

    /// Returns whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Starts a transition toward the given target.
    ///
    /// No-op when the target is already current, whether settled or in
    /// flight toward it; such calls emit no completion. A reversal replaces
    /// the in-flight transition (whose completion is discarded) and departs
    /// from the current interpolated value. Returns immediately; completion
    /// is observed through [`TransitionAnimator::tick`].
    pub fn set_expanded(&mut self, expanded: bool, now: Instant) {
        if self.expanded == expanded {
            return;
        }
        self.sample(now);
        self.expanded = expanded;
        let target = target_scalar(expanded);
        // Constant rate: remaining distance scales the duration, so a
        // reversal from mid-flight takes proportionally less time.
        let distance = (target - self.progress).abs();
        let duration = self.full_duration.mul_f32(distance);
        tracing::trace!(expanded, from = self.progress, "transition started");
        self.transition = Some(Transition {
            started: now,
            from: self.progress,
            duration,
        });
    }

    /// Advances the timeline to `now`.
    ///
    /// Returns the one-shot [`TransitionEnd`] when the in-flight transition
    /// reaches its target on this tick; `None` otherwise. Once emitted, the
    /// transition is consumed and later ticks return `None` until the next
    /// `set_expanded`.
    pub fn tick(&mut self, now: Instant) -> Option<TransitionEnd> {
        let transition = self.transition.as_ref()?;
        let target = target_scalar(self.expanded);
        let fraction = fraction_at(transition, now);
        self.progress = animation::lerp(transition.from, target, fraction);
        if fraction >= 1.0 {
            self.progress = target;
            self.transition = None;
            tracing::trace!(expanded = self.expanded, "transition completed");
            return Some(TransitionEnd {
                expanded: self.expanded,
            });
        }
        None
    }

    /// Updates the scalar without consuming a completion.
    ///
    /// Used when a reversal preempts an in-flight transition: the preempted
    /// completion must never surface, but the departure value must reflect
    /// the time that has passed.
    fn sample(&mut self, now: Instant) {
        let Some(transition) = self.transition.as_ref() else {
            return;
        };
        let target = target_scalar(self.expanded);
        let fraction = fraction_at(transition, now);
        self.progress = animation::lerp(transition.from, target, fraction);
        if fraction >= 1.0 {
            self.progress = target;
            self.transition = None;
        }
    }
}

impl Default for TransitionAnimator {
    fn default() -> Self {
        Self::new(false)
    }
}

fn target_scalar(expanded: bool) -> f32 {
    if expanded { 1.0 } else { 0.0 }
}

fn fraction_at(transition: &Transition, now: Instant) -> f32 {
    if transition.duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(transition.started);
    (elapsed.as_secs_f32() / transition.duration.as_secs_f32()).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_initial_state_is_settled() {
        let collapsed = TransitionAnimator::new(false);
        assert_eq!(collapsed.progress(), 0.0);
        assert!(!collapsed.is_animating());

        let expanded = TransitionAnimator::new(true);
        assert_eq!(expanded.progress(), 1.0);
        assert!(expanded.is_expanded());
    }

    #[test]
    fn test_expand_completes_exactly_once() {
        let mut animator = TransitionAnimator::new(false);
        let t0 = Instant::now();
        animator.set_expanded(true, t0);

        assert_eq!(animator.tick(t0 + 100 * MS), None);
        assert!(approx_eq(animator.progress(), 0.5));

        let end = animator.tick(t0 + 200 * MS);
        assert_eq!(end, Some(TransitionEnd { expanded: true }));
        assert_eq!(animator.progress(), 1.0);

        // The completion is one-shot.
        assert_eq!(animator.tick(t0 + 300 * MS), None);
        assert!(!animator.is_animating());
    }

    #[test]
    fn test_same_target_is_noop() {
        let mut animator = TransitionAnimator::new(false);
        let t0 = Instant::now();

        // Settled on the target: nothing starts, nothing completes.
        animator.set_expanded(false, t0);
        assert!(!animator.is_animating());
        assert_eq!(animator.tick(t0 + 500 * MS), None);

        // In flight toward the target: the call must not restart the clock.
        animator.set_expanded(true, t0);
        animator.tick(t0 + 100 * MS);
        animator.set_expanded(true, t0 + 100 * MS);
        let end = animator.tick(t0 + 200 * MS);
        assert_eq!(end, Some(TransitionEnd { expanded: true }));
    }

    #[test]
    fn test_reversal_departs_from_current_value() {
        let mut animator = TransitionAnimator::new(false);
        let t0 = Instant::now();
        animator.set_expanded(true, t0);
        animator.tick(t0 + 100 * MS);
        assert!(approx_eq(animator.progress(), 0.5));

        // Reverse halfway: no snap, and the collapse covers half the
        // distance in half the full duration.
        animator.set_expanded(false, t0 + 100 * MS);
        assert!(approx_eq(animator.progress(), 0.5));
        assert_eq!(animator.tick(t0 + 150 * MS), None);
        assert!(approx_eq(animator.progress(), 0.25));

        let end = animator.tick(t0 + 200 * MS);
        assert_eq!(end, Some(TransitionEnd { expanded: false }));
        assert_eq!(animator.progress(), 0.0);
    }

    #[test]
    fn test_preempted_completion_never_fires() {
        let mut animator = TransitionAnimator::new(false);
        let t0 = Instant::now();
        animator.set_expanded(true, t0);
        animator.tick(t0 + 150 * MS);
        animator.set_expanded(false, t0 + 150 * MS);

        // Tick far past where the expand would have completed: only the
        // collapse's completion surfaces, exactly once.
        let mut completions = Vec::new();
        for i in 1..=10 {
            if let Some(end) = animator.tick(t0 + (150 + i * 50) * MS) {
                completions.push(end);
            }
        }
        assert_eq!(completions, vec![TransitionEnd { expanded: false }]);
    }

    #[test]
    fn test_immediate_toggle_yields_one_final_completion() {
        let mut animator = TransitionAnimator::new(false);
        let t0 = Instant::now();
        animator.set_expanded(true, t0);
        animator.set_expanded(false, t0);

        // Zero distance back to the origin still completes, once, for the
        // final target.
        let end = animator.tick(t0 + MS);
        assert_eq!(end, Some(TransitionEnd { expanded: false }));
        assert_eq!(animator.tick(t0 + 2 * MS), None);
        assert_eq!(animator.progress(), 0.0);
    }

    #[test]
    fn test_reversal_after_settling_without_tick() {
        let mut animator = TransitionAnimator::new(false);
        let t0 = Instant::now();
        animator.set_expanded(true, t0);
        // No tick consumed the expand completion before the reversal; it is
        // preempted and must never surface.
        animator.set_expanded(false, t0 + 400 * MS);
        assert!(approx_eq(animator.progress(), 1.0));

        let end = animator.tick(t0 + 600 * MS);
        assert_eq!(end, Some(TransitionEnd { expanded: false }));
        assert_eq!(animator.progress(), 0.0);
    }

    #[test]
    fn test_eased_progress_maps_scalar_through_easing() {
        let mut animator = TransitionAnimator::new(false);
        let t0 = Instant::now();
        animator.set_expanded(true, t0);

        // Midpoint of cubic ease-in-out is the identity.
        animator.tick(t0 + 100 * MS);
        assert!(approx_eq(animator.eased_progress(), 0.5));

        // Past the midpoint the eased curve runs ahead of linear progress.
        animator.tick(t0 + 150 * MS);
        assert!(approx_eq(animator.progress(), 0.75));
        assert!(approx_eq(animator.eased_progress(), 0.9375));
    }
}
