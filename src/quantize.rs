//! Quantization and clamping helpers shared by the clock, the editors and the ruler.
//!
//! All rounding is round-half-up: `x.5` always goes towards positive infinity,
//! for negative values too (`-5` quantized to 10 becomes `0`, not `-10`).

/// Resolution of every time value on the timeline, in milliseconds.
pub const TIME_QUANTUM: i64 = 10;

/// Rounds `value` to the nearest multiple of `step` (round-half-up).
///
/// A `step` of zero or less is treated as 1. Non-finite input yields `None`.
///
/// # Examples
/// ```
/// use rtimeline::quantize::quantize;
/// assert_eq!(quantize(375.0, 10), Some(380));
/// assert_eq!(quantize(382.0, 10), Some(380));
/// assert_eq!(quantize(7.0, 10), Some(10));
/// ```
pub fn quantize(value: f64, step: i64) -> Option<i64> {
    if !value.is_finite() {
        return None;
    }
    let step = step.max(1);
    let steps = (value / step as f64 + 0.5).floor();
    // Casts saturate; keep the multiplication saturating too
    Some((steps as i64).saturating_mul(step))
}

/// Rounds `value` to the nearest multiple of [`TIME_QUANTUM`].
pub fn round_to_ten(value: f64) -> Option<i64> {
    quantize(value, TIME_QUANTUM)
}

/// Smallest multiple of `step` that is not below `value`.
pub fn align_up(value: i64, step: i64) -> i64 {
    let step = step.max(1);
    match value.rem_euclid(step) {
        0 => value,
        rem => value.saturating_add(step - rem),
    }
}

/// Largest multiple of `step` that is not above `value`.
pub fn align_down(value: i64, step: i64) -> i64 {
    let step = step.max(1);
    value.saturating_sub(value.rem_euclid(step))
}

/// Clamps `value` into `[min, max]`, checking `min` first.
///
/// Either bound may be absent. When both are present and `min > max`,
/// the lower bound wins, matching how the editors apply them.
pub fn clamp_optional(value: i64, min: Option<i64>, max: Option<i64>) -> i64 {
    match (min, max) {
        (Some(min), _) if value < min => min,
        (_, Some(max)) if value > max => max,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        assert_eq!(quantize(5.0, 10), Some(10));
        assert_eq!(quantize(4.999, 10), Some(0));
        assert_eq!(quantize(-5.0, 10), Some(0));
        assert_eq!(quantize(1e30, 10), Some(i64::MAX));
        assert_eq!(quantize(-6.0, 10), Some(-10));
        assert_eq!(quantize(2.5, 1), Some(3));
        assert_eq!(quantize(-2.5, 1), Some(-2));
    }

    #[test]
    fn test_align_to_step() {
        assert_eq!(align_up(105, 10), 110);
        assert_eq!(align_up(110, 10), 110);
        assert_eq!(align_up(-5, 10), 0);
        assert_eq!(align_down(5995, 10), 5990);
        assert_eq!(align_down(6000, 10), 6000);
        assert_eq!(align_down(-5, 10), -10);
    }

    #[test]
    fn test_rounds_before_clamping() {
        // 7000 stays 7000 after rounding; bounds are applied afterwards.
        assert_eq!(round_to_ten(7000.0), Some(7000));
        assert_eq!(clamp_optional(7000, Some(100), Some(6000)), 6000);
    }

    #[test]
    fn test_non_finite_rejected() {
        assert_eq!(quantize(f64::NAN, 10), None);
        assert_eq!(quantize(f64::INFINITY, 10), None);
    }

    #[test]
    fn test_degenerate_step() {
        assert_eq!(quantize(12.4, 0), Some(12));
        assert_eq!(quantize(12.6, -3), Some(13));
    }

    #[test]
    fn test_clamp_optional() {
        assert_eq!(clamp_optional(-20, Some(0), Some(2000)), 0);
        assert_eq!(clamp_optional(2500, Some(0), Some(2000)), 2000);
        assert_eq!(clamp_optional(1500, None, None), 1500);
        assert_eq!(clamp_optional(1500, None, Some(1000)), 1000);
    }
}
