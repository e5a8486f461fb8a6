// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Tolerant float32 comparison shared by the quaternion routines.
//!
//! Comparison is two-tier: an absolute bound catches values that should be
//! zero but carry rounding residue, and a relative bound (scaled by the larger
//! magnitude) handles everything else. A single tolerance would either reject
//! legitimate near-zero residue or accept genuinely different large values.

/// Relative tolerance: the gap between `1.0` and the next representable `f32`.
pub const FLT_EPSILON: f32 = f32::EPSILON;

/// Absolute tolerance applied before the relative check.
pub const MAX_DELTA: f32 = 1.0e-10;

/// Returns `true` when `a` and `b` are equal within [`MAX_DELTA`] absolutely or
/// within [`FLT_EPSILON`] relative to the larger magnitude.
///
/// Any comparison involving NaN returns `false`.
///
/// # Examples
/// ```
/// use orient_core::math::almost_equal_relative_and_abs;
/// assert!(almost_equal_relative_and_abs(1.0, 1.0 + f32::EPSILON));
/// assert!(almost_equal_relative_and_abs(0.0, 1.0e-11));
/// assert!(!almost_equal_relative_and_abs(0.0, 1.0e-9));
/// ```
pub fn almost_equal_relative_and_abs(a: f32, b: f32) -> bool {
    let diff = (a - b).abs();
    if diff <= MAX_DELTA {
        return true;
    }

    let largest = a.abs().max(b.abs());
    diff <= largest * FLT_EPSILON
}

/// Reinterprets the IEEE-754 bit pattern of `value` as an `i32`.
///
/// Every NaN collapses to the canonical quiet NaN `0x7fc0_0000` so that
/// fingerprints do not depend on NaN payloads or sign.
#[allow(clippy::cast_possible_wrap)]
pub fn float_to_int_bits(value: f32) -> i32 {
    if value.is_nan() {
        return 0x7fc0_0000;
    }
    value.to_bits() as i32
}
