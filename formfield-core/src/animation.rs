//! Progress mapping helpers for field transitions.

/// Cubic ease-in-out mapping.
///
/// Input is linear progress in `[0.0, 1.0]`; output is eased progress in the
/// same range. Out-of-range inputs are clamped.
pub fn easing(progress: f32) -> f32 {
    let t = progress.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

/// Linear interpolation between `from` and `to` by factor `t`.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        assert_eq!(easing(0.0), 0.0);
        assert_eq!(easing(1.0), 1.0);
        assert_eq!(easing(0.5), 0.5);
    }

    #[test]
    fn test_easing_clamps_out_of_range() {
        assert_eq!(easing(-1.0), 0.0);
        assert_eq!(easing(2.0), 1.0);
    }

    #[test]
    fn test_easing_is_monotonic() {
        let mut prev = easing(0.0);
        for i in 1..=100 {
            let next = easing(i as f32 / 100.0);
            assert!(next >= prev);
            prev = next;
        }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 1.0, 0.25), 0.25);
        assert_eq!(lerp(1.0, 0.0, 0.5), 0.5);
        assert_eq!(lerp(0.2, 0.2, 0.9), 0.2);
    }
}
