// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};

use crate::diag::{self, Degeneracy};
use crate::interop::{QuaternionLike, Vector3Like};
use crate::tolerance::tolerance;
use crate::Mat4;

/// 3D vector used for both points and directions.
///
/// * Mutators work in place and return `&mut Self` for chaining.
/// * Use [`Vec3::apply_mat4`] for points (translation applied) and
///   [`Vec3::apply_mat4_rotation`] for directions (rotation block only).
/// * Arguments are taken as [`Vector3Like`], so arrays, tuples, and foreign
///   vector types are accepted wherever a `Vec3` is.
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vec3 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis.
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Copies any [`Vector3Like`] into a `Vec3`.
    pub fn from_like(v: &impl Vector3Like) -> Self {
        Self::new(v.x(), v.y(), v.z())
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Overwrites all components.
    pub fn set(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Copies the components of `other`.
    pub fn copy_from(&mut self, other: &impl Vector3Like) -> &mut Self {
        self.set(other.x(), other.y(), other.z())
    }

    /// Adds `other` component-wise.
    pub fn add(&mut self, other: &impl Vector3Like) -> &mut Self {
        self.x += other.x();
        self.y += other.y();
        self.z += other.z();
        self
    }

    /// Subtracts `other` component-wise.
    pub fn sub(&mut self, other: &impl Vector3Like) -> &mut Self {
        self.x -= other.x();
        self.y -= other.y();
        self.z -= other.z();
        self
    }

    /// Multiplies every component by `scalar`.
    pub fn scale(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self.z *= scalar;
        self
    }

    /// Divides every component by `scalar`.
    ///
    /// A divisor within tolerance of zero is reported as
    /// [`Degeneracy::DivideByZero`] and leaves the vector unchanged.
    #[track_caller]
    pub fn div_scalar(&mut self, scalar: f64) -> &mut Self {
        if scalar.abs() <= tolerance() {
            diag::report(Degeneracy::DivideByZero, "Vec3::div_scalar");
            return self;
        }
        self.scale(1.0 / scalar)
    }

    /// Flips every component.
    pub fn negate(&mut self) -> &mut Self {
        self.scale(-1.0)
    }

    /// Moves toward `other` by `alpha` (0 keeps `self`, 1 lands on `other`).
    pub fn lerp(&mut self, other: &impl Vector3Like, alpha: f64) -> &mut Self {
        self.x += (other.x() - self.x) * alpha;
        self.y += (other.y() - self.y) * alpha;
        self.z += (other.z() - self.z) * alpha;
        self
    }

    /// Component-wise minimum.
    pub fn min(&mut self, other: &impl Vector3Like) -> &mut Self {
        self.x = self.x.min(other.x());
        self.y = self.y.min(other.y());
        self.z = self.z.min(other.z());
        self
    }

    /// Component-wise maximum.
    pub fn max(&mut self, other: &impl Vector3Like) -> &mut Self {
        self.x = self.x.max(other.x());
        self.y = self.y.max(other.y());
        self.z = self.z.max(other.z());
        self
    }

    /// Dot product.
    pub fn dot(&self, other: &impl Vector3Like) -> f64 {
        self.x * other.x() + self.y * other.y() + self.z * other.z()
    }

    /// Sets `self = self × other` (right-handed).
    pub fn cross(&mut self, other: &impl Vector3Like) -> &mut Self {
        let a = *self;
        self.cross_vectors(&a, other)
    }

    /// Sets `self = a × b` (right-handed).
    pub fn cross_vectors(&mut self, a: &impl Vector3Like, b: &impl Vector3Like) -> &mut Self {
        let (ax, ay, az) = (a.x(), a.y(), a.z());
        let (bx, by, bz) = (b.x(), b.y(), b.z());
        self.set(ay * bz - az * by, az * bx - ax * bz, ax * by - ay * bx)
    }

    /// Squared length; prefer this when only comparisons matter.
    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    /// Distance to `other`.
    pub fn distance_to(&self, other: &impl Vector3Like) -> f64 {
        let mut d = *self;
        d.sub(other);
        d.length()
    }

    /// Unsigned angle to `other` in `[0, π]`; `π/2` if either is zero.
    pub fn angle_to(&self, other: &impl Vector3Like) -> f64 {
        let denom = (self.length_sq() * Self::from_like(other).length_sq()).sqrt();
        if denom == 0.0 {
            return core::f64::consts::FRAC_PI_2;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    /// Scales to unit length.
    ///
    /// If the length is within tolerance of zero a
    /// [`Degeneracy::ZeroLengthVector`] diagnostic is emitted and the vector
    /// is left exactly as it was.
    #[track_caller]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len <= tolerance() {
            diag::report(Degeneracy::ZeroLengthVector, "Vec3::normalize");
            return self;
        }
        self.scale(1.0 / len)
    }

    /// `true` when every component differs from `other` by at most the tolerance.
    pub fn equals(&self, other: &impl Vector3Like) -> bool {
        let tol = tolerance();
        (self.x - other.x()).abs() <= tol
            && (self.y - other.y()).abs() <= tol
            && (self.z - other.z()).abs() <= tol
    }

    /// `true` when `length_sq() <= tolerance²`.
    pub fn is_zero(&self) -> bool {
        let tol = tolerance();
        self.length_sq() <= tol * tol
    }

    /// Unit vector orthogonal to `v`.
    ///
    /// Zeroes whichever of `v.x` / `v.z` has the larger magnitude:
    /// `(-y, x, 0)` when `|x| > |z|`, otherwise `(0, -z, y)`. This is the
    /// fallback axis for rotations between antiparallel vectors.
    #[track_caller]
    pub fn any_orthogonal(v: &impl Vector3Like) -> Self {
        let mut axis = if v.x().abs() > v.z().abs() {
            Self::new(-v.y(), v.x(), 0.0)
        } else {
            Self::new(0.0, -v.z(), v.y())
        };
        axis.normalize();
        axis
    }

    /// Transforms this point by `m`: `R·p + t`.
    pub fn apply_mat4(&mut self, m: &Mat4) -> &mut Self {
        if m.is_identity() {
            return self;
        }
        let e = m.elements();
        let (x, y, z) = (self.x, self.y, self.z);
        self.set(
            e[0] * x + e[1] * y + e[2] * z + e[3],
            e[4] * x + e[5] * y + e[6] * z + e[7],
            e[8] * x + e[9] * y + e[10] * z + e[11],
        )
    }

    /// Rotates this direction by the rotation block of `m`, ignoring translation.
    pub fn apply_mat4_rotation(&mut self, m: &Mat4) -> &mut Self {
        if m.is_identity() {
            return self;
        }
        let e = m.elements();
        let (x, y, z) = (self.x, self.y, self.z);
        self.set(
            e[0] * x + e[1] * y + e[2] * z,
            e[4] * x + e[5] * y + e[6] * z,
            e[8] * x + e[9] * y + e[10] * z,
        )
    }

    /// Rotates this vector by the unit quaternion `q` (`q · v · q*`).
    pub fn apply_quat(&mut self, q: &impl QuaternionLike) -> &mut Self {
        let (x, y, z) = (self.x, self.y, self.z);
        let (qx, qy, qz, qw) = (q.x(), q.y(), q.z(), q.w());

        // q * v
        let ix = qw * x + qy * z - qz * y;
        let iy = qw * y + qz * x - qx * z;
        let iz = qw * z + qx * y - qy * x;
        let iw = -qx * x - qy * y - qz * z;

        // (q * v) * conj(q)
        self.set(
            ix * qw + iw * -qx + iy * -qz - iz * -qy,
            iy * qw + iw * -qy + iz * -qx - ix * -qz,
            iz * qw + iw * -qz + ix * -qy - iy * -qx,
        )
    }
}

impl Vector3Like for Vec3 {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> f64 {
        self.z
    }
}

/// Converts `[x, y, z]` into a `Vec3`.
///
/// # Examples
/// ```
/// use rigid_math::Vec3;
/// let v = Vec3::from([1.0, 2.0, 3.0]);
/// assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
/// ```
impl From<[f64; 3]> for Vec3 {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<Vec3> for [f64; 3] {
    fn from(value: Vec3) -> Self {
        value.to_array()
    }
}

impl core::ops::Add for Vec3 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl core::ops::Sub for Vec3 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl core::ops::Mul<f64> for Vec3 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl core::ops::Mul<Vec3> for f64 {
    type Output = Vec3;
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign<f64> for Vec3 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cross_is_right_handed() {
        let mut v = Vec3::UNIT_X;
        v.cross(&Vec3::UNIT_Y);
        assert_eq!(v.to_array(), [0.0, 0.0, 1.0]);
        let mut w = Vec3::ZERO;
        w.cross_vectors(&Vec3::UNIT_Z, &Vec3::UNIT_Y);
        assert_eq!(w.to_array(), [-1.0, 0.0, 0.0]);
    }

    #[test]
    fn degenerate_normalize_leaves_vector_unchanged() {
        let mut v = Vec3::new(1e-17, -1e-17, 0.0);
        v.normalize();
        assert_eq!(v.to_array(), [1e-17, -1e-17, 0.0]);
    }

    #[test]
    fn normalize_unit_length() {
        let mut v = Vec3::new(2.0, 4.5, 3.4);
        v.normalize();
        assert!((v.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn any_orthogonal_tie_break() {
        let a = Vec3::any_orthogonal(&[3.0, 1.0, 2.0]);
        // |x| > |z|: (-y, x, 0)
        assert!(a.z == 0.0);
        assert!(a.dot(&[3.0, 1.0, 2.0]).abs() < 1e-12);
        let b = Vec3::any_orthogonal(&[1.0, 1.0, 1.0]);
        // |x| == |z| falls to (0, -z, y)
        assert!(b.x == 0.0);
        assert!((b.length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn identity_matrix_skips_arithmetic() {
        let mut v = Vec3::new(1.5, -2.0, 0.25);
        v.apply_mat4(&Mat4::identity()).apply_mat4_rotation(&Mat4::identity());
        assert_eq!(v.to_array(), [1.5, -2.0, 0.25]);
    }

    #[test]
    fn apply_quat_identity_is_noop() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        v.apply_quat(&[0.0, 0.0, 0.0, 1.0]);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn is_zero_uses_squared_tolerance() {
        assert!(Vec3::ZERO.is_zero());
        assert!(!Vec3::new(0.0, 1e-6, 0.0).is_zero());
    }

    #[test]
    fn add_sub_mul_ops_work() {
        let a = Vec3::new(1.0, -2.0, 0.5);
        let b = Vec3::new(-3.0, 4.0, 1.5);
        assert_eq!((a + b).to_array(), [-2.0, 2.0, 2.0]);
        assert_eq!((a - b).to_array(), [4.0, -6.0, -1.0]);
        assert_eq!((a * 2.0).to_array(), [2.0, -4.0, 1.0]);
        assert_eq!((2.0 * a).to_array(), [2.0, -4.0, 1.0]);
        let mut c = a;
        c += b;
        c -= b;
        c *= 2.0;
        assert_eq!(c.to_array(), [2.0, -4.0, 1.0]);
    }
}
