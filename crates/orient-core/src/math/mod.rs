// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Float32 rotation math: the [`Quat`] value type and the tolerant scalar
//! comparison it is built on.
//!
//! Components are stored as `f32`; trigonometry and the normalization divisor
//! are evaluated in `f64` and narrowed.

mod quat;
pub mod scalar;

pub use quat::Quat;
pub use scalar::{almost_equal_relative_and_abs, FLT_EPSILON, MAX_DELTA};
