//! Small numeric helpers

/// Bound `value` into the closed range `[low, high]`
///
/// Returns `low` when `value < low`, `high` when `value > high`, and `value`
/// otherwise. Unlike `f64::clamp` this never panics on an inverted range; the
/// lower bound is checked first. A value that compares unordered with both
/// bounds (a float NaN) is returned as-is.
pub fn clamp<T: PartialOrd>(value: T, low: T, high: T) -> T {
    if value < low {
        low
    } else if value > high {
        high
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_clamp_below_range() {
        assert_eq!(clamp(-5, 0, 10), 0);
    }

    #[test]
    fn test_clamp_above_range() {
        assert_eq!(clamp(15, 0, 10), 10);
    }

    #[test]
    fn test_clamp_inside_range() {
        assert_eq!(clamp(7, 0, 10), 7);
        assert!((clamp(3.6_f64, 0.0, 50.0) - 3.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_clamp_passes_nan_through() {
        assert!(clamp(f64::NAN, 0.0, 10.0).is_nan());
        assert_eq!(clamp(f64::INFINITY, 0.0, 10.0), 10.0);
        assert_eq!(clamp(f64::NEG_INFINITY, 0.0, 10.0), 0.0);
    }

    #[test]
    fn test_clamp_on_bounds() {
        assert_eq!(clamp(0, 0, 10), 0);
        assert_eq!(clamp(10, 0, 10), 10);
    }

    proptest! {
        #[test]
        fn prop_clamp_stays_in_range(
            value in -1.0e6f64..1.0e6f64,
            low in -1000.0f64..0.0f64,
            high in 0.0f64..1000.0f64
        ) {
            let clamped = clamp(value, low, high);
            prop_assert!(clamped >= low);
            prop_assert!(clamped <= high);
        }

        #[test]
        fn prop_clamp_identity_inside_range(low in -1000i64..0i64, high in 0i64..1000i64, offset in 0u32..1000u32) {
            let span = (high - low) as u64;
            let value = low + (offset as u64 % (span + 1)) as i64;
            prop_assert_eq!(clamp(value, low, high), value);
        }
    }
}
