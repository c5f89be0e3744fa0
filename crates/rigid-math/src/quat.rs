// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};

use crate::diag::{self, Degeneracy};
use crate::interop::{QuaternionLike, Vector3Like};
use crate::tolerance::tolerance;
use crate::Vec3;

/// `from · to + 1` at or below this is treated as antiparallel. Covers the
/// rounding left in the dot product of two normalized vectors.
const ANTIPARALLEL_EPSILON: f64 = 4.0 * f64::EPSILON;

/// Rotation quaternion stored as `(x, y, z, w)` with `w` the scalar part.
///
/// * Unit length is a soft invariant: [`Quat::normalize`] restores it, raw
///   construction does not enforce it.
/// * Components are read-only. They change only through whole-quaternion
///   operations ([`Quat::set`], [`Quat::multiply`], ...), never one at a time.
/// * Angles are radians.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quat {
    x: f64,
    y: f64,
    z: f64,
    w: f64,
}

impl Default for Quat {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quat {
    /// Creates a quaternion from components; no normalization is applied.
    pub const fn new(x: f64, y: f64, z: f64, w: f64) -> Self {
        Self { x, y, z, w }
    }

    /// Returns the identity rotation `(0, 0, 0, 1)`.
    pub const fn identity() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// X component of the vector part.
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Y component of the vector part.
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Z component of the vector part.
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Scalar part.
    pub const fn w(&self) -> f64 {
        self.w
    }

    /// Returns `[x, y, z, w]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Overwrites all four components.
    pub fn set(&mut self, x: f64, y: f64, z: f64, w: f64) -> &mut Self {
        *self = Self::new(x, y, z, w);
        self
    }

    /// Copies the components of `other`.
    pub fn copy_from(&mut self, other: &impl QuaternionLike) -> &mut Self {
        self.set(other.x(), other.y(), other.z(), other.w())
    }

    /// Rotation of `angle` radians about the unit vector `axis`.
    ///
    /// `axis` is assumed normalized.
    pub fn set_from_axis_angle(&mut self, axis: &impl Vector3Like, angle: f64) -> &mut Self {
        let (s, c) = (angle * 0.5).sin_cos();
        self.set(axis.x() * s, axis.y() * s, axis.z() * s, c)
    }

    /// Shortest-arc rotation taking `from` onto `to`.
    ///
    /// Both inputs must already be unit vectors; they are not re-normalized.
    /// For antiparallel inputs the rotation is a half turn about an arbitrary
    /// axis orthogonal to `from` (see [`Vec3::any_orthogonal`] for the
    /// tie-break), yielding `w == 0`.
    ///
    /// ```
    /// use rigid_math::{Quat, Vec3};
    /// let mut q = Quat::identity();
    /// q.set_from_unit_vectors(&Vec3::UNIT_X, &Vec3::UNIT_Y);
    /// let mut v = Vec3::UNIT_X;
    /// v.apply_quat(&q);
    /// assert!(v.x.abs() < 1e-12 && (v.y - 1.0).abs() < 1e-12);
    /// ```
    #[track_caller]
    pub fn set_from_unit_vectors(
        &mut self,
        from: &impl Vector3Like,
        to: &impl Vector3Like,
    ) -> &mut Self {
        let from = Vec3::from_like(from);
        let r = from.dot(to) + 1.0;

        if r <= ANTIPARALLEL_EPSILON {
            diag::report(Degeneracy::AntiparallelVectors, "Quat::set_from_unit_vectors");
            if from.x.abs() > from.z.abs() {
                self.set(-from.y, from.x, 0.0, 0.0);
            } else {
                self.set(0.0, -from.z, from.y, 0.0);
            }
        } else {
            let mut axis = from;
            axis.cross(to);
            self.set(axis.x, axis.y, axis.z, r);
        }
        self.normalize()
    }

    /// Sets `self = a * b` (Hamilton product).
    ///
    /// Applied to a vector, the result rotates by `b` first, then by `a`.
    pub fn multiply_quaternions(
        &mut self,
        a: &impl QuaternionLike,
        b: &impl QuaternionLike,
    ) -> &mut Self {
        let (ax, ay, az, aw) = (a.x(), a.y(), a.z(), a.w());
        let (bx, by, bz, bw) = (b.x(), b.y(), b.z(), b.w());

        self.set(
            ax * bw + aw * bx + ay * bz - az * by,
            ay * bw + aw * by + az * bx - ax * bz,
            az * bw + aw * bz + ax * by - ay * bx,
            aw * bw - ax * bx - ay * by - az * bz,
        )
    }

    /// Sets `self = self * other`: `other` is applied first, then `self`.
    ///
    /// Quaternion multiplication is non-commutative.
    pub fn multiply(&mut self, other: &impl QuaternionLike) -> &mut Self {
        let a = *self;
        self.multiply_quaternions(&a, other)
    }

    /// Sets `self = other * self`: `self` is applied first, then `other`.
    pub fn premultiply(&mut self, other: &impl QuaternionLike) -> &mut Self {
        let b = *self;
        self.multiply_quaternions(other, &b)
    }

    /// Negates the vector part; for unit quaternions this is the inverse rotation.
    pub fn conjugate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Four-component dot product.
    pub fn dot(&self, other: &impl QuaternionLike) -> f64 {
        self.x * other.x() + self.y * other.y() + self.z * other.z() + self.w * other.w()
    }

    /// Squared norm.
    pub fn length_sq(&self) -> f64 {
        self.dot(self)
    }

    /// Norm.
    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    /// Scales to unit length.
    ///
    /// A norm within tolerance of zero resets to the identity rotation and
    /// emits [`Degeneracy::ZeroLengthQuaternion`].
    #[track_caller]
    pub fn normalize(&mut self) -> &mut Self {
        let len = self.length();
        if len <= tolerance() {
            diag::report(Degeneracy::ZeroLengthQuaternion, "Quat::normalize");
            *self = Self::identity();
            return self;
        }
        let inv = 1.0 / len;
        self.set(self.x * inv, self.y * inv, self.z * inv, self.w * inv)
    }

    /// `true` when every component differs by at most the tolerance.
    pub fn equals(&self, other: &impl QuaternionLike) -> bool {
        let tol = tolerance();
        (self.x - other.x()).abs() <= tol
            && (self.y - other.y()).abs() <= tol
            && (self.z - other.z()).abs() <= tol
            && (self.w - other.w()).abs() <= tol
    }
}

impl QuaternionLike for Quat {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
    fn z(&self) -> f64 {
        self.z
    }
    fn w(&self) -> f64 {
        self.w
    }
}

/// Converts `[x, y, z, w]` into a `Quat` verbatim; normalization is not enforced.
impl From<[f64; 4]> for Quat {
    fn from(value: [f64; 4]) -> Self {
        Self::new(value[0], value[1], value[2], value[3])
    }
}

impl From<Quat> for [f64; 4] {
    fn from(value: Quat) -> Self {
        value.to_array()
    }
}
