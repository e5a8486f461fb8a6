// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::hash::{Hash, Hasher};
use core::ops::{Add, Mul, Neg};

use crate::math::scalar::{almost_equal_relative_and_abs, float_to_int_bits};

/// Rotation quaternion stored as `(x, y, z, w)` with `w` as the scalar part.
///
/// * Hamiltonian product, right-hand rule.
/// * Every constructor and every `set*` call normalizes to unit length. A
///   degenerate input (squared norm tolerantly zero) becomes the identity.
/// * [`Quat::scaled`] and [`Quat::add`] are the only operations that return a
///   non-unit value; renormalize before treating their result as a rotation.
///
/// Equality is rotation identity under a tolerance: `a == b` iff
/// `a.dot(&b)` is tolerantly `1.0`. A quaternion and its negation describe the
/// same rotation but compare unequal (their dot product is `-1.0`).
#[derive(Debug, Copy, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "[f32; 4]", into = "[f32; 4]"))]
pub struct Quat {
    data: [f32; 4],
}

impl Quat {
    /// Creates a quaternion from components and normalizes it.
    ///
    /// Yields [`Quat::identity`] when the components are (tolerantly) all zero.
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        let mut q = Self::from_raw([x, y, z, w]);
        q.normalize();
        q
    }

    /// Copies `other` and normalizes the copy.
    pub fn from_quat(other: &Self) -> Self {
        Self::new(other.x(), other.y(), other.z(), other.w())
    }

    /// Returns the identity quaternion `(0, 0, 0, 1)`.
    pub const fn identity() -> Self {
        Self::from_raw([0.0, 0.0, 0.0, 1.0])
    }

    const fn from_raw(data: [f32; 4]) -> Self {
        Self { data }
    }

    /// Builds a rotation of `degrees` around the axis `(axis_x, axis_y, axis_z)`.
    ///
    /// The axis need not be unit length; the final normalization corrects the
    /// overall magnitude. Trigonometry runs in `f64` and each component is
    /// narrowed to `f32` afterwards.
    ///
    /// # Examples
    /// ```
    /// use orient_core::math::Quat;
    /// let half_turn = Quat::from_axis_angle(1.0, 0.0, 0.0, 180.0);
    /// let full_turn = half_turn.multiply(&half_turn);
    /// // A full turn is `(0, 0, 0, -1)`: the identity rotation with the
    /// // opposite sign, which tolerant equality does not fold together.
    /// assert_ne!(full_turn, Quat::identity());
    /// assert_eq!(full_turn, Quat::identity().negated());
    /// assert_eq!(full_turn.multiply(&full_turn), Quat::identity());
    /// ```
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_axis_angle(axis_x: f32, axis_y: f32, axis_z: f32, degrees: f32) -> Self {
        let half = f64::from(degrees).to_radians() / 2.0;
        let factor = half.sin();

        let mut q = Self::from_raw([
            (f64::from(axis_x) * factor) as f32,
            (f64::from(axis_y) * factor) as f32,
            (f64::from(axis_z) * factor) as f32,
            half.cos() as f32,
        ]);
        q.normalize();
        q
    }

    /// X component of the vector part.
    pub const fn x(&self) -> f32 {
        self.data[0]
    }

    /// Y component of the vector part.
    pub const fn y(&self) -> f32 {
        self.data[1]
    }

    /// Z component of the vector part.
    pub const fn z(&self) -> f32 {
        self.data[2]
    }

    /// Scalar part.
    pub const fn w(&self) -> f32 {
        self.data[3]
    }

    /// Returns the components as `[x, y, z, w]`.
    pub const fn to_array(self) -> [f32; 4] {
        self.data
    }

    /// Overwrites all four components and normalizes.
    ///
    /// Returns the result of [`Quat::normalize`]: `false` means the input was
    /// degenerate and `self` is now the identity.
    pub fn set(&mut self, x: f32, y: f32, z: f32, w: f32) -> bool {
        self.data = [x, y, z, w];
        self.normalize()
    }

    /// Copies the components of `other` and normalizes.
    pub fn set_from(&mut self, other: &Self) -> bool {
        self.set(other.x(), other.y(), other.z(), other.w())
    }

    /// Resets to the identity quaternion.
    pub fn set_identity(&mut self) {
        *self = Self::identity();
    }

    /// Rescales to unit length in place.
    ///
    /// When the squared norm is tolerantly zero the quaternion cannot be
    /// scaled; it is reset to identity and `false` is returned. A squared norm
    /// of exactly `1.0` is left untouched.
    ///
    /// A squared norm that overflows to infinity (any component beyond about
    /// `1.8e19`) also counts as degenerate and resets to identity.
    #[allow(clippy::float_cmp, clippy::cast_possible_truncation)]
    pub fn normalize(&mut self) -> bool {
        let norm_sq = self.dot(self);
        if almost_equal_relative_and_abs(norm_sq, 0.0) {
            tracing::trace!(quat = %self, "degenerate quaternion reset to identity");
            self.set_identity();
            return false;
        }
        if norm_sq != 1.0 {
            let inv = (1.0 / f64::from(norm_sq).sqrt()) as f32;
            for c in &mut self.data {
                *c *= inv;
            }
        }
        true
    }

    /// Returns a unit-length copy, leaving `self` unchanged.
    ///
    /// The copy is built with [`Quat::from_quat`] and normalized once more,
    /// so the result is bit-identical to two successive normalize passes.
    pub fn normalized(&self) -> Self {
        let mut q = Self::from_quat(self);
        q.normalize();
        q
    }

    /// Returns the opposite rotation `(-x, -y, -z, w)`.
    ///
    /// The conjugate equals the inverse only for unit quaternions, which the
    /// constructors guarantee.
    pub fn inverted(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), self.w())
    }

    /// Returns `(-x, -y, -z, -w)`: the same rotation with the opposite sign.
    ///
    /// The result does *not* compare equal to `self`.
    pub fn negated(&self) -> Self {
        Self::new(-self.x(), -self.y(), -self.z(), -self.w())
    }

    /// Hamilton product `self * rhs`.
    ///
    /// Applying the result is equivalent to applying `rhs` first and then
    /// `self`. The product is non-commutative. The result is normalized.
    ///
    /// # Examples
    /// ```
    /// use orient_core::math::Quat;
    /// let yaw = Quat::from_axis_angle(0.0, 1.0, 0.0, 90.0);
    /// let pitch = Quat::from_axis_angle(1.0, 0.0, 0.0, 90.0);
    /// assert_ne!(yaw.multiply(&pitch), pitch.multiply(&yaw));
    /// ```
    pub fn multiply(&self, rhs: &Self) -> Self {
        let [lx, ly, lz, lw] = self.data;
        let [rx, ry, rz, rw] = rhs.data;

        Self::new(
            lw * rx + lx * rw + ly * rz - lz * ry,
            lw * ry - lx * rz + ly * rw + lz * rx,
            lw * rz + lx * ry - ly * rx + lz * rw,
            lw * rw - lx * rx - ly * ry - lz * rz,
        )
    }

    /// Multiplies every component by `a` without normalizing.
    pub fn scaled(&self, a: f32) -> Self {
        Self::from_raw(self.data.map(|c| c * a))
    }

    /// Componentwise sum without normalizing.
    pub fn add(&self, rhs: &Self) -> Self {
        Self::from_raw([
            self.x() + rhs.x(),
            self.y() + rhs.y(),
            self.z() + rhs.z(),
            self.w() + rhs.w(),
        ])
    }

    /// Four-component dot product.
    pub fn dot(&self, rhs: &Self) -> f32 {
        self.x() * rhs.x() + self.y() * rhs.y() + self.z() * rhs.z() + self.w() * rhs.w()
    }

    /// Tolerant rotation equality: `self.dot(rhs)` is almost `1.0`.
    ///
    /// `q.equals(&q.negated())` is `false` even though both encode the same
    /// rotation.
    pub fn equals(&self, rhs: &Self) -> bool {
        almost_equal_relative_and_abs(self.dot(rhs), 1.0)
    }

    /// Polynomial hash over the raw bit patterns of `w, x, y, z`.
    ///
    /// Only bit-identical quaternions are guaranteed to share a fingerprint;
    /// two values that are [`Quat::equals`] within tolerance may still differ.
    pub fn fingerprint(&self) -> i32 {
        const PRIME: i32 = 31;
        [self.w(), self.x(), self.y(), self.z()]
            .into_iter()
            .fold(1_i32, |acc, c| {
                PRIME.wrapping_mul(acc).wrapping_add(float_to_int_bits(c))
            })
    }
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

/// Components are taken as `(x, y, z, w)` and normalized.
impl From<[f32; 4]> for Quat {
    fn from(value: [f32; 4]) -> Self {
        let [x, y, z, w] = value;
        Self::new(x, y, z, w)
    }
}

impl From<Quat> for [f32; 4] {
    fn from(value: Quat) -> Self {
        value.data
    }
}

impl PartialEq for Quat {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.equals(other)
    }
}

// Consistent with `PartialEq` only for bit-identical values.
impl Hash for Quat {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.fingerprint());
    }
}

impl fmt::Display for Quat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[x={}, y={}, z={}, w={}]",
            self.x(),
            self.y(),
            self.z(),
            self.w()
        )
    }
}

impl Mul for Quat {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.multiply(&rhs)
    }
}

impl Mul<f32> for Quat {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        self.scaled(rhs)
    }
}

impl Add for Quat {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Quat::add(&self, &rhs)
    }
}

impl Neg for Quat {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

#[cfg(test)]
mod tests {
    use super::Quat;

    #[test]
    fn already_unit_input_is_stored_verbatim() {
        let q = Quat::new(0.0, 0.0, 1.0, 0.0);
        assert_eq!(q.to_array(), [0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn scaled_and_add_skip_normalization() {
        let q = Quat::identity().scaled(3.0);
        assert_eq!(q.to_array(), [0.0, 0.0, 0.0, 3.0]);
        let sum = Quat::identity().add(&Quat::identity());
        assert_eq!(sum.to_array(), [0.0, 0.0, 0.0, 2.0]);
    }

    #[test]
    fn fingerprint_of_identity_matches_reference_accumulator() {
        // ((((1 * 31 + bits(1.0)) * 31 + 0) * 31 + 0) * 31 + 0), wrapping.
        let expected = 31_i32
            .wrapping_add(0x3f80_0000)
            .wrapping_mul(31)
            .wrapping_mul(31)
            .wrapping_mul(31);
        assert_eq!(Quat::identity().fingerprint(), expected);
    }

    #[test]
    fn op_traits_forward_to_named_operations() {
        let a = Quat::from_axis_angle(0.0, 0.0, 1.0, 30.0);
        let b = Quat::from_axis_angle(0.0, 1.0, 0.0, 45.0);
        assert_eq!((a * b).to_array(), a.multiply(&b).to_array());
        assert_eq!((a * 2.0).to_array(), a.scaled(2.0).to_array());
        assert_eq!((a + b).to_array(), a.add(&b).to_array());
        assert_eq!((-a).to_array(), a.negated().to_array());
    }
}
