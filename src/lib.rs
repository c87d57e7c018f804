/* halftrig | lib.rs
 * Copyright (c) 2025 The halftrig developers
 * SPDX-License-Identifier: MIT
 */

/* Sine and cosine by repeated angle halving and doubling */

/******************************************************************************/

#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

/******************************************************************************/

mod common;
mod cosine;
mod sine;

pub use common::floor_modulo;
pub use cosine::{cos_n, cos_pass_through_n};
pub use sine::sin_n;

/******************************************************************************/

/// Default number of doubling steps for [`cos()`]
///
/// The direct cosine recurrence converges quickly but amplifies rounding error, so its best
/// results sit at a much lower count than the sine.
pub const COS_ITERATIONS: u32 = 10;

/// Default number of doubling steps for [`sin()`] and [`cos_pass_through()`]
///
/// Accuracy keeps improving roughly linearly in bits with the iteration count, until the
/// half-angle seed stops carrying new information.
pub const SIN_ITERATIONS: u32 = 22;

/// Iteration count past which the small-angle error of the seed is below `f64` rounding
///
/// The seed error shrinks by a factor of four per halving, so half the mantissa width is enough.
/// Larger counts cannot improve the sine and make the cosine worse. Far larger counts (about 510
/// for angles near 1) underflow the squared seed, and both recurrences then return NaN.
pub const MAX_USEFUL_ITERATIONS: u32 = (f64::MANTISSA_DIGITS + 1) / 2;

/******************************************************************************/

/// Sine of `angle` in radians, using [`SIN_ITERATIONS`] steps
pub fn sin(angle: f64) -> f64 {
    sin_n(angle, SIN_ITERATIONS)
}

/// Sine of `angle` in degrees
pub fn sin_deg(angle: f64) -> f64 {
    sin(deg_to_rad(angle))
}

/// Cosine of `angle` in radians, using [`COS_ITERATIONS`] steps
pub fn cos(angle: f64) -> f64 {
    cos_n(angle, COS_ITERATIONS)
}

/// Cosine of `angle` in degrees
pub fn cos_deg(angle: f64) -> f64 {
    cos(deg_to_rad(angle))
}

/// Cosine of `angle` in radians through the sine recurrence, using [`SIN_ITERATIONS`] steps
pub fn cos_pass_through(angle: f64) -> f64 {
    cos_pass_through_n(angle, SIN_ITERATIONS)
}

fn deg_to_rad(angle: f64) -> f64 {
    angle / 360.0 * core::f64::consts::TAU
}

/******************************************************************************/

/// A pair of iteration counts for the sine and cosine recurrences
///
/// The free functions use the crate-wide defaults. This structure lets a caller pick its own
/// accuracy / cost trade-off once and carry it around, for example in a `static`:
/// ```
/// static COARSE: halftrig::Trig = halftrig::Trig::new(8, 6);
///
/// let (s, c) = COARSE.sin_cos(0.5);
/// assert!((s - 0.479_425_538_604_203).abs() < 1e-5);
/// assert!((c - 0.877_582_561_890_372_8).abs() < 1e-4);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Trig {
    sin_iterations: u32,
    cos_iterations: u32
}

impl Trig {
    /// Creates a new set of iteration counts
    pub const fn new(sin_iterations: u32, cos_iterations: u32) -> Self {
        Self {
            sin_iterations,
            cos_iterations
        }
    }

    /// Number of doubling steps used for the sine
    pub const fn sin_iterations(&self) -> u32 {
        self.sin_iterations
    }

    /// Number of doubling steps used for the cosine
    pub const fn cos_iterations(&self) -> u32 {
        self.cos_iterations
    }

    /// Sine of `angle` in radians
    pub fn sin(&self, angle: f64) -> f64 {
        sin_n(angle, self.sin_iterations)
    }

    /// Sine of `angle` in degrees
    pub fn sin_deg(&self, angle: f64) -> f64 {
        self.sin(deg_to_rad(angle))
    }

    /// Cosine of `angle` in radians
    pub fn cos(&self, angle: f64) -> f64 {
        cos_n(angle, self.cos_iterations)
    }

    /// Cosine of `angle` in degrees
    pub fn cos_deg(&self, angle: f64) -> f64 {
        self.cos(deg_to_rad(angle))
    }

    /// Cosine of `angle` in radians through the sine recurrence
    ///
    /// Uses the sine iteration count.
    pub fn cos_pass_through(&self, angle: f64) -> f64 {
        cos_pass_through_n(angle, self.sin_iterations)
    }

    /// Sine and cosine of `angle` in radians
    pub fn sin_cos(&self, angle: f64) -> (f64, f64) {
        (self.sin(angle), self.cos(angle))
    }
}

impl Default for Trig {
    fn default() -> Self {
        Self::new(SIN_ITERATIONS, COS_ITERATIONS)
    }
}

/******************************************************************************/
