/* halftrig | sine.rs
 * Copyright (c) 2025 The halftrig developers
 * SPDX-License-Identifier: MIT
 */

/* Sine by squared half-angle doubling */

/******************************************************************************/

use core::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::common::{floor_modulo, half_angle_seed, is_degenerate_seed, signum};

/******************************************************************************/

/// Sine of `angle` (radians) using `iterations` doubling steps
///
/// The angle is folded into `[-pi/2, pi/2]`, where the sine is odd and monotonic. That angle is
/// halved `iterations` times and treated as its own sine, then squared and doubled back up with
/// `s <- 4s(1 - s)`, which maps sin^2(t) to sin^2(2t). This is the logistic map at r = 4.
///
/// Each extra iteration divides the error by roughly four, until the small-angle error drops
/// below rounding (see [`MAX_USEFUL_ITERATIONS`](crate::MAX_USEFUL_ITERATIONS)); past that the
/// result stays put. If `iterations` is so large that the squared seed underflows the normal
/// range (about 510 for angles near 1), the angle is lost and the result is NaN. Non-finite
/// input also gives NaN.
pub fn sin_n(angle: f64, iterations: u32) -> f64 {
    // Shift by a quarter turn so the fold is symmetric around zero
    let t = floor_modulo(FRAC_PI_2 - angle, TAU);
    let x = if t > PI { -3.0 * FRAC_PI_2 + t } else { FRAC_PI_2 - t };
    let sign = signum(x);

    let seed = half_angle_seed(x, iterations);
    let mut sin2 = seed * seed;
    if is_degenerate_seed(x, sin2) {
        log::trace!("half-angle seed of {} underflowed after {} halvings", angle, iterations);
        return f64::NAN;
    }

    for _ in 0..iterations {
        if sin2 == 0.0 {
            break;
        }
        sin2 = 4.0 * sin2 * (1.0 - sin2);
    }

    // Only reachable when the seed itself is out of range (zero iterations)
    if sin2 < 0.0 || sin2 > 1.0 {
        log::trace!("clamping sin^2 = {} for angle {} after {} iterations", sin2, angle, iterations);
        sin2 = sin2.clamp(0.0, 1.0);
    }

    sign * libm::sqrt(sin2)
}

/******************************************************************************/
