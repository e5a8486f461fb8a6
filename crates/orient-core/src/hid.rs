// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Decoding of HID device-orientation input reports into [`Quat`] values.
//!
//! A device-orientation report carries a quaternion as four little-endian
//! `i16` values in `(x, y, z, w)` order with a unit exponent of `-3`, so each
//! raw value is divided by `1000`. The device's own axes do not match the
//! consumer's frame; [`AxisRemap`] composes a fixed correction rotation onto
//! every decoded orientation.
//!
//! Transport, smoothing and sensor fusion live with the consumer.

use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::math::Quat;

/// Report id assigned to the device-orientation sensor.
pub const ORIENTATION_REPORT_ID: u8 = 4;

/// Divisor applied to raw quaternion components (unit exponent `0x0D`).
pub const ROTATION_SCALE: f64 = 1000.0;

const STATE_OFFSET: usize = 1;
const EVENT_OFFSET: usize = 2;

/// Errors produced while decoding an orientation report.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    /// The buffer ends before the last quaternion component.
    #[error("orientation report truncated: got {len} bytes, need {needed}")]
    Truncated {
        /// Bytes available.
        len: usize,
        /// Bytes required by the layout.
        needed: usize,
    },
    /// The first byte names a different sensor.
    #[error("unexpected report id {found} (expected {expected})")]
    UnexpectedReportId {
        /// Id found in the buffer.
        found: u8,
        /// Id the layout expects.
        expected: u8,
    },
}

/// Byte layout of an orientation report.
///
/// Each offset points at the least significant byte of a little-endian `i16`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportLayout {
    /// Expected value of byte 0.
    pub report_id: u8,
    /// Offset of the `x` component.
    pub x_offset: usize,
    /// Offset of the `y` component.
    pub y_offset: usize,
    /// Offset of the `z` component.
    pub z_offset: usize,
    /// Offset of the `w` component.
    pub w_offset: usize,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            report_id: ORIENTATION_REPORT_ID,
            x_offset: 3,
            y_offset: 5,
            z_offset: 7,
            w_offset: 9,
        }
    }
}

impl ReportLayout {
    /// Minimum buffer length this layout can decode.
    pub fn min_len(&self) -> usize {
        let last = self
            .x_offset
            .max(self.y_offset)
            .max(self.z_offset)
            .max(self.w_offset);
        last.saturating_add(2).max(EVENT_OFFSET + 1)
    }
}

fn read_le_i16(bytes: &[u8], offset: usize) -> i16 {
    bytes_to_i16(bytes[offset + 1], bytes[offset])
}

/// Combines a most- and least-significant byte into a signed 16-bit value.
pub fn bytes_to_i16(msb: u8, lsb: u8) -> i16 {
    i16::from_be_bytes([msb, lsb])
}

/// Applies the report unit exponent to a raw quaternion component.
#[allow(clippy::cast_possible_truncation)]
pub fn decode_component(raw: i16) -> f32 {
    (f64::from(raw) / ROTATION_SCALE) as f32
}

/// A decoded device-orientation report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrientationReport {
    /// Sensor state byte, kept for diagnostics.
    pub state: u8,
    /// Sensor event byte, kept for diagnostics.
    pub event: u8,
    /// Raw `(x, y, z, w)` components before scaling.
    pub raw: [i16; 4],
}

impl OrientationReport {
    /// Parses `bytes` according to `layout`.
    ///
    /// # Errors
    /// [`ReportError::Truncated`] when `bytes` is shorter than
    /// [`ReportLayout::min_len`], [`ReportError::UnexpectedReportId`] when
    /// byte 0 does not match `layout.report_id`.
    pub fn parse(bytes: &[u8], layout: &ReportLayout) -> Result<Self, ReportError> {
        let needed = layout.min_len();
        if bytes.len() < needed {
            return Err(ReportError::Truncated {
                len: bytes.len(),
                needed,
            });
        }
        if bytes[0] != layout.report_id {
            return Err(ReportError::UnexpectedReportId {
                found: bytes[0],
                expected: layout.report_id,
            });
        }

        let report = Self {
            state: bytes[STATE_OFFSET],
            event: bytes[EVENT_OFFSET],
            raw: [
                read_le_i16(bytes, layout.x_offset),
                read_le_i16(bytes, layout.y_offset),
                read_le_i16(bytes, layout.z_offset),
                read_le_i16(bytes, layout.w_offset),
            ],
        };
        debug!(
            state = report.state,
            event = report.event,
            raw = ?report.raw,
            "decoded orientation report"
        );
        Ok(report)
    }

    /// Scaled `(x, y, z, w)` components, not yet normalized.
    pub fn components(&self) -> [f32; 4] {
        self.raw.map(decode_component)
    }

    /// The reported orientation as a unit quaternion.
    ///
    /// An all-zero report cannot be normalized and yields the identity.
    pub fn quat(&self) -> Quat {
        let [x, y, z, w] = self.components();
        let mut q = Quat::identity();
        if !q.set(x, y, z, w) {
            warn!(raw = ?self.raw, "degenerate orientation report, using identity");
        }
        q
    }

    /// The reported orientation expressed in the remapped frame.
    pub fn remapped(&self, remap: &AxisRemap) -> Quat {
        remap.apply(&self.quat())
    }
}

/// Fixed rotation composed onto device orientations to move them into the
/// consumer's axis convention.
///
/// The default turns the device frame 90° about `+X`. [`AxisRemap::legacy`]
/// turns it about `-X`, which leaves north and south mirrored on readback.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AxisRemap {
    /// Rotation axis; need not be unit length.
    pub axis: [f32; 3],
    /// Rotation angle in degrees.
    pub degrees: f32,
}

impl Default for AxisRemap {
    fn default() -> Self {
        Self {
            axis: [1.0, 0.0, 0.0],
            degrees: 90.0,
        }
    }
}

impl AxisRemap {
    /// Remap used by the older sensor interface: 90° about `-X`.
    pub fn legacy() -> Self {
        Self {
            axis: [-1.0, 0.0, 0.0],
            degrees: 90.0,
        }
    }

    /// Remap that leaves orientations unchanged.
    pub fn none() -> Self {
        Self {
            axis: [1.0, 0.0, 0.0],
            degrees: 0.0,
        }
    }

    /// The correction rotation as a quaternion.
    pub fn rotation(&self) -> Quat {
        let [ax, ay, az] = self.axis;
        Quat::from_axis_angle(ax, ay, az, self.degrees)
    }

    /// Composes the correction onto `orientation`.
    ///
    /// The correction is applied first, then the device orientation:
    /// `orientation * rotation()`.
    pub fn apply(&self, orientation: &Quat) -> Quat {
        let remapped = orientation.multiply(&self.rotation());
        trace!(%orientation, %remapped, "remapped device axes");
        remapped
    }
}
