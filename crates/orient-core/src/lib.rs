// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! orient-core: float32 rotation quaternions for device-orientation code.
//!
//! [`math::Quat`] is a unit quaternion that normalizes on every construction
//! and compares by rotation identity within a tolerance. The [`hid`] module
//! turns raw device-orientation reports into `Quat` values and remaps them
//! into the consumer's axis convention.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use,
    clippy::unreadable_literal,
    clippy::missing_const_for_fn,
    clippy::suboptimal_flops,
    clippy::redundant_pub_crate,
    clippy::many_single_char_names,
    clippy::module_name_repetitions,
    clippy::use_self
)]

pub mod hid;
pub mod math;

pub use hid::{AxisRemap, OrientationReport, ReportError, ReportLayout};
pub use math::Quat;
