/* halftrig | cosine.rs
 * Copyright (c) 2025 The halftrig developers
 * SPDX-License-Identifier: MIT
 */

/* Cosine by Chebyshev doubling */

/******************************************************************************/

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::common::{floor_modulo, half_angle_seed, is_degenerate_seed, signum};
use crate::sine::sin_n;

/******************************************************************************/

/// Cosine of `angle` (radians) using `iterations` doubling steps
///
/// The angle is folded into `[0, pi/2]` and the sign of the result is recovered separately.
/// The folded angle is halved `iterations` times and treated as its own sine. The first
/// doubling is `cos(2t) = 1 - 2 sin^2(t)`, and the remaining `iterations - 1` use
/// `cos(2t) = 2 cos^2(t) - 1`.
///
/// The recurrence needs at least one step, so zero iterations behave like one. Past roughly
/// 16 iterations the rounding error of the seed is amplified faster than the truncation error
/// shrinks, and the result gets worse again. Once the squared seed underflows the normal range
/// the result is NaN, as for [`sin_n()`](crate::sin_n).
pub fn cos_n(angle: f64, iterations: u32) -> f64 {
    let iterations = if iterations == 0 {
        log::trace!("cosine needs at least one doubling, using 1 instead of 0");
        1
    } else {
        iterations
    };

    // [0, 2pi) -> [0, pi] -> [0, pi/2]
    let t = floor_modulo(angle, TAU);
    let t = if t > PI { TAU - t } else { t };
    let x = FRAC_PI_2 - libm::fabs(FRAC_PI_2 - t);
    let sign = signum(FRAC_PI_2 - t);

    let sin = half_angle_seed(x, iterations);
    let sin2 = sin * sin;
    if is_degenerate_seed(x, sin2) {
        log::trace!("half-angle seed of {} underflowed after {} halvings", angle, iterations);
        return f64::NAN;
    }

    let mut cos = 1.0 - 2.0 * sin2;
    for _ in 1..iterations {
        if cos == 1.0 {
            break;
        }
        cos = 2.0 * cos * cos - 1.0;
    }

    sign * cos
}

/// Cosine of `angle` (radians) computed as `sin(pi/2 - angle)`
///
/// Kept for comparison with [`cos_n()`]: the sine recurrence needs more iterations to reach the
/// same accuracy near the zero crossings of the cosine.
pub fn cos_pass_through_n(angle: f64, iterations: u32) -> f64 {
    sin_n(FRAC_PI_2 - angle, iterations)
}

/******************************************************************************/
