/* halftrig | common.rs
 * Copyright (c) 2025 The halftrig developers
 * SPDX-License-Identifier: MIT
 */

/* Domain reduction helpers shared by the sine and cosine recurrences */

/******************************************************************************/

/// Largest exponent worth passing to `ldexp`
///
/// Any finite `f64` scaled by 2^-1100 is already zero.
const SEED_EXPONENT_LIMIT: u32 = 1100;

/******************************************************************************/

/// Floor modulo of `value` by `divisor`
///
/// For a positive `divisor`, the result is always in `[0, divisor)`, whatever the sign of
/// `value`. The truncating remainder is taken first, then shifted up by `divisor` if it came
/// out negative.
///
/// The result for `divisor <= 0` is unspecified. Non-finite inputs give NaN.
///
/// ```
/// assert_eq!(halftrig::floor_modulo(7.0, 3.0), 1.0);
/// assert_eq!(halftrig::floor_modulo(-7.0, 3.0), 2.0);
/// ```
pub fn floor_modulo(value: f64, divisor: f64) -> f64 {
    let remainder = value % divisor;
    if remainder < 0.0 {
        let wrapped = remainder + divisor;
        // -1e-20 + 2pi rounds to 2pi itself
        if wrapped < divisor { wrapped } else { 0.0 }
    } else {
        remainder
    }
}

/// Sign of `x` as -1, 0 or +1
///
/// Unlike [`f64::signum`], zero maps to itself, so an angle that folds onto a zero crossing
/// yields an exact zero. NaN maps to NaN.
pub(crate) fn signum(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        x
    }
}

/// Scales `x` down by 2^`iterations`
///
/// This is the half-angle seed: for a small enough angle, the angle itself stands in for its
/// own sine. The scaling is an exact exponent adjustment, so it neither overflows for large
/// iteration counts nor loses mantissa bits until the result becomes subnormal.
pub(crate) fn half_angle_seed(x: f64, iterations: u32) -> f64 {
    let exponent = iterations.min(SEED_EXPONENT_LIMIT) as i32;
    libm::ldexp(x, -exponent)
}

/// Checks whether a squared seed has lost the angle it was derived from
///
/// Once the square leaves the normal range, the doubling recurrences can no longer climb back
/// to the folded angle `x`. Only a zero angle may legitimately start from zero.
pub(crate) fn is_degenerate_seed(x: f64, seed_squared: f64) -> bool {
    x != 0.0 && !seed_squared.is_normal()
}

/******************************************************************************/

#[cfg(test)]
mod tests {
    use super::*;
    use core::f64::consts::{PI, TAU};
    use approx::assert_ulps_eq;

    #[test]
    fn test_floor_modulo_positive() {
        assert_ulps_eq!(floor_modulo(0.0, TAU), 0.0);
        assert_ulps_eq!(floor_modulo(PI, TAU), PI);
        assert_ulps_eq!(floor_modulo(5.5, 2.0), 1.5);
        assert_ulps_eq!(floor_modulo(TAU, TAU), 0.0);
    }

    #[test]
    fn test_floor_modulo_negative() {
        assert_ulps_eq!(floor_modulo(-1.0, 4.0), 3.0);
        assert_ulps_eq!(floor_modulo(-5.5, 2.0), 0.5);
        assert_ulps_eq!(floor_modulo(-PI / 2.0, TAU), 3.0 * PI / 2.0);
        assert_eq!(floor_modulo(-4.0, 4.0), 0.0);
    }

    #[test]
    fn test_floor_modulo_tiny_negative() {
        // Must stay strictly below the divisor
        let r = floor_modulo(-1e-20, TAU);
        assert!((0.0..TAU).contains(&r));
    }

    #[test]
    fn test_floor_modulo_non_finite() {
        assert!(floor_modulo(f64::INFINITY, TAU).is_nan());
        assert!(floor_modulo(f64::NEG_INFINITY, TAU).is_nan());
        assert!(floor_modulo(f64::NAN, TAU).is_nan());
    }

    #[test]
    fn test_signum() {
        assert_eq!(signum(3.5), 1.0);
        assert_eq!(signum(-1e-300), -1.0);
        assert_eq!(signum(0.0), 0.0);
        assert_eq!(signum(-0.0), 0.0);
        assert!(signum(f64::NAN).is_nan());
    }

    #[test]
    fn test_half_angle_seed() {
        assert_eq!(half_angle_seed(1.0, 0), 1.0);
        assert_eq!(half_angle_seed(3.0, 3), 0.375);
        assert_eq!(half_angle_seed(-PI, 10), -PI / 1024.0);
        assert_eq!(half_angle_seed(PI, 64), PI / 18_446_744_073_709_551_616.0);
        assert_eq!(half_angle_seed(PI, u32::MAX), 0.0);
    }

    #[test]
    fn test_is_degenerate_seed() {
        assert!(!is_degenerate_seed(0.0, 0.0));
        assert!(!is_degenerate_seed(1.0, 1e-300));
        assert!(is_degenerate_seed(1.0, 0.0));
        assert!(is_degenerate_seed(-1.0, f64::MIN_POSITIVE / 2.0));
        assert!(is_degenerate_seed(f64::NAN, f64::NAN));
    }
}
