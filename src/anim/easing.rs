//! Nonlinear easing of interpolation progress
//!
//! A symmetric two-piece power curve: the sharpness exponent bends linear
//! progress into an S-curve (sharpness > 1) or its inverse (sharpness < 1).

/// Lowest sharpness control level (maps to a linear curve)
pub const SHARPNESS_LEVEL_MIN: i32 = -1;
/// Highest sharpness control level
pub const SHARPNESS_LEVEL_MAX: i32 = 21;

/// Reshape progress `t` in [0, 1] through a power curve with the given
/// sharpness exponent.
///
/// Sharpness 1 is the identity; above 1 gives slow-fast-slow, in (0, 1)
/// fast-slow-fast. At sharpness 0 the endpoints hit `0^0`, which `powf`
/// defines as 1 - the curve degenerates to a constant 0.5 rather than NaN,
/// the convention chosen here.
pub fn ease(t: f32, sharpness: f32) -> f32 {
    if t < 0.5 {
        0.5 * (2.0 * t).powf(sharpness)
    } else {
        1.0 - 0.5 * (2.0 * (1.0 - t)).powf(sharpness)
    }
}

/// Map a discrete sharpness control level to the continuous exponent.
///
/// Level -1 is special-cased to exactly 1.0 (linear); all other levels map
/// via `2^(level/2 - 2) + 1`, strictly increasing and always above 1.
///
/// Assumes `level` is already clamped to
/// [`SHARPNESS_LEVEL_MIN`, `SHARPNESS_LEVEL_MAX`] by the caller; performs no
/// bounds checking itself.
pub fn sharpness_from_level(level: i32) -> f32 {
    if level == -1 {
        1.0
    } else {
        2.0_f32.powf(level as f32 / 2.0 - 2.0) + 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SHARPNESS_SAMPLES: [f32; 4] = [0.5, 1.0, 2.0, 8.0];

    #[test]
    fn test_ease_endpoints() {
        for s in SHARPNESS_SAMPLES {
            assert_eq!(ease(0.0, s), 0.0, "ease(0, {}) != 0", s);
            assert_eq!(ease(1.0, s), 1.0, "ease(1, {}) != 1", s);
        }
    }

    #[test]
    fn test_ease_fixed_midpoint() {
        for s in SHARPNESS_SAMPLES {
            assert_eq!(ease(0.5, s), 0.5, "ease(0.5, {}) != 0.5", s);
        }
    }

    #[test]
    fn test_ease_linear_at_sharpness_one() {
        for i in 0..=20 {
            let t = i as f32 / 20.0;
            assert!((ease(t, 1.0) - t).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ease_zero_sharpness_has_no_nan() {
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            assert!(ease(t, 0.0).is_finite());
        }
    }

    #[test]
    fn test_sharpness_level_linear_special_case() {
        assert_eq!(sharpness_from_level(-1), 1.0);
    }

    #[test]
    fn test_sharpness_level_zero() {
        // 2^(-2) + 1
        assert!((sharpness_from_level(0) - 1.25).abs() < 1e-6);
    }

    #[test]
    fn test_sharpness_strictly_increasing() {
        let mut prev = sharpness_from_level(SHARPNESS_LEVEL_MIN);
        for level in 0..=SHARPNESS_LEVEL_MAX {
            let s = sharpness_from_level(level);
            assert!(
                s > prev,
                "sharpness not increasing at level {}: {} <= {}",
                level,
                s,
                prev
            );
            prev = s;
        }
    }

    proptest! {
        #[test]
        fn prop_ease_stays_in_unit_interval(t in 0.0f32..=1.0, s in 0.1f32..16.0) {
            let eased = ease(t, s);
            prop_assert!((0.0..=1.0).contains(&eased));
        }

        #[test]
        fn prop_ease_monotonic(t1 in 0.0f32..=1.0, t2 in 0.0f32..=1.0) {
            let (lo, hi) = if t1 <= t2 { (t1, t2) } else { (t2, t1) };
            for s in SHARPNESS_SAMPLES {
                prop_assert!(ease(lo, s) <= ease(hi, s) + 1e-6);
            }
        }
    }
}
