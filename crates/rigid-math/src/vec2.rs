// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};

use crate::diag::{self, Degeneracy};
use crate::interop::Vector2Like;
use crate::tolerance::tolerance;
use crate::Mat3;

/// 2D vector with in-place, chainable mutators.
///
/// Mutators return `&mut Self` so calls chain:
/// ```
/// use rigid_math::Vec2;
/// let mut v = Vec2::new(3.0, 4.0);
/// v.scale(2.0).normalize();
/// assert!((v.length() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
}

impl Vec2 {
    /// Zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Creates a vector from components.
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the components as an array.
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Overwrites both components.
    pub fn set(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Copies the components of `other`.
    pub fn copy_from(&mut self, other: &impl Vector2Like) -> &mut Self {
        self.set(other.x(), other.y())
    }

    /// Adds `other` component-wise.
    pub fn add(&mut self, other: &impl Vector2Like) -> &mut Self {
        self.x += other.x();
        self.y += other.y();
        self
    }

    /// Subtracts `other` component-wise.
    pub fn sub(&mut self, other: &impl Vector2Like) -> &mut Self {
        self.x -= other.x();
        self.y -= other.y();
        self
    }

    /// Multiplies both components by `scalar`.
    pub fn scale(&mut self, scalar: f64) -> &mut Self {
        self.x *= scalar;
        self.y *= scalar;
        self
    }

    /// Divides both components by `scalar`.
    ///
    /// A divisor within tolerance of zero is reported as
    /// [`Degeneracy::DivideByZero`] and leaves the vector unchanged.
    #[track_caller]
    pub fn div_scalar(&mut self, scalar: f64) -> &mut Self {
        if scalar.abs() <= tolerance() {
            diag::report(Degeneracy::DivideByZero, "Vec2::div_scalar");
            return self;
        }
        self.scale(1.0 / scalar)
    }

    /// Flips both components.
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self
    }

    /// Moves toward `other` by `alpha` (0 keeps `self`, 1 lands on `other`).
    pub fn lerp(&mut self, other: &impl Vector2Like, alpha: f64) -> &mut Self {
        self.x += (other.x() - self.x) * alpha;
        self.y += (other.y() - self.y) * alpha;
        self
    }

    /// Component-wise minimum.
    pub fn min(&mut self, other: &impl Vector2Like) -> &mut Self {
        self.x = self.x.min(other.x());
        self.y = self.y.min(other.y());
        self
    }

    /// Component-wise maximum.
    pub fn max(&mut self, other: &impl Vector2Like) -> &mut Self {
        self.x = self.x.max(other.x());
        self.y = self.y.max(other.y());
        self
    }

    /// Dot product.
    pub fn dot(&self, other: &impl Vector2Like) -> f64 {
        self.x * other.x() + self.y * other.y()
    }

    /// Scalar wedge product `self.x * other.y - self.y * other.x`.
    pub fn cross(&self, other: &impl Vector2Like) -> f64 {
        self.x * other.y() - self.y * other.x()
    }

    /// Squared length; prefer this when only comparisons matter.
    pub fn length_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Euclidean length.
    pub fn length(&self) -> f64 {
        self.length_sq().sqrt()
    }

    /// Distance to `other`.
    pub fn distance_to(&self, other: &impl Vector2Like) -> f64 {
        let dx = self.x - other.x();
        let dy = self.y - other.y();
        (dx * dx + dy * dy).sqrt()
    }

    /// Unsigned angle to `other` in `[0, π]`; `π/2` if either is zero.
    pub fn angle_to(&self, other: &impl Vector2Like) -> f64 {
        let denom = (self.length_sq() * (other.x() * other.x() + other.y() * other.y())).sqrt();
        if denom == 0.0 {
            return core::f64::consts::FRAC_PI_2;
        }
        (self.dot(other) / denom).clamp(-1.0, 1.0).acos()
    }

    /// Scales to unit length.
    ///
    /// If the length is within tolerance of zero a
    /// [`Degeneracy::ZeroLengthVector`] diagnostic is emitted and the
    /// divisor is replaced with `1`, so a zero vector stays zero instead of
    /// turning into NaN.
    #[track_caller]
    pub fn normalize(&mut self) -> &mut Self {
        let mut len = self.length();
        if len <= tolerance() {
            diag::report(Degeneracy::ZeroLengthVector, "Vec2::normalize");
            len = 1.0;
        }
        self.scale(1.0 / len)
    }

    /// `true` when every component differs from `other` by at most the tolerance.
    pub fn equals(&self, other: &impl Vector2Like) -> bool {
        let tol = tolerance();
        (self.x - other.x()).abs() <= tol && (self.y - other.y()).abs() <= tol
    }

    /// `true` when both components are within tolerance of zero.
    pub fn is_zero(&self) -> bool {
        let tol = tolerance();
        self.x.abs() <= tol && self.y.abs() <= tol
    }

    /// Transforms this point by `m` (rotation then translation).
    pub fn apply_mat3(&mut self, m: &Mat3) -> &mut Self {
        if m.is_identity() {
            return self;
        }
        let [n11, n12, n13, n21, n22, n23] = m.elements();
        let (x, y) = (self.x, self.y);
        self.x = n11 * x + n12 * y + n13;
        self.y = n21 * x + n22 * y + n23;
        self
    }

    /// Rotates this direction by the rotation block of `m`, ignoring translation.
    pub fn apply_mat3_rotation(&mut self, m: &Mat3) -> &mut Self {
        if m.is_identity() {
            return self;
        }
        let [n11, n12, _, n21, n22, _] = m.elements();
        let (x, y) = (self.x, self.y);
        self.x = n11 * x + n12 * y;
        self.y = n21 * x + n22 * y;
        self
    }
}

impl Vector2Like for Vec2 {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

impl From<[f64; 2]> for Vec2 {
    fn from(value: [f64; 2]) -> Self {
        Self::new(value[0], value[1])
    }
}

impl From<Vec2> for [f64; 2] {
    fn from(value: Vec2) -> Self {
        value.to_array()
    }
}

impl core::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl core::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl core::ops::Mul<f64> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl core::ops::Mul<Vec2> for f64 {
    type Output = Vec2;
    fn mul(self, rhs: Vec2) -> Vec2 {
        rhs * self
    }
}

impl core::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl core::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::MulAssign<f64> for Vec2 {
    fn mul_assign(&mut self, rhs: f64) {
        *self = *self * rhs;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chained_arithmetic() {
        let mut v = Vec2::new(1.0, 2.0);
        v.add(&[1.0, 1.0]).scale(2.0).sub(&Vec2::new(4.0, 0.0));
        assert_eq!(v.to_array(), [0.0, 6.0]);
    }

    #[test]
    fn wedge_product_sign() {
        let x = Vec2::new(1.0, 0.0);
        let y = Vec2::new(0.0, 1.0);
        assert_eq!(x.cross(&y), 1.0);
        assert_eq!(y.cross(&x), -1.0);
    }

    #[test]
    fn zero_normalize_stays_zero() {
        let mut v = Vec2::ZERO;
        v.normalize();
        assert_eq!(v.to_array(), [0.0, 0.0]);
        assert!(v.x.is_finite() && v.y.is_finite());
    }

    #[test]
    fn div_by_zero_leaves_vector_unchanged() {
        let mut v = Vec2::new(3.0, -1.0);
        v.div_scalar(0.0);
        assert_eq!(v.to_array(), [3.0, -1.0]);
    }

    #[test]
    fn angle_between_axes() {
        let a = Vec2::new(2.0, 0.0);
        let b = Vec2::new(0.0, -5.0);
        assert!((a.angle_to(&b) - core::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert_eq!(a.angle_to(&Vec2::ZERO), core::f64::consts::FRAC_PI_2);
    }

    #[test]
    fn lerp_min_max() {
        let mut v = Vec2::new(0.0, 10.0);
        v.lerp(&(10.0, 0.0), 0.25);
        assert_eq!(v.to_array(), [2.5, 7.5]);
        v.min(&[1.0, 100.0]).max(&[0.0, 8.0]);
        assert_eq!(v.to_array(), [1.0, 8.0]);
    }

    #[test]
    fn operators_match_methods() {
        let a = Vec2::new(1.0, -2.0);
        let b = Vec2::new(0.5, 4.0);
        let mut m = a;
        m.add(&b);
        assert_eq!((a + b).to_array(), m.to_array());
        assert_eq!((2.0 * a).to_array(), (a * 2.0).to_array());
        assert_eq!((-a).to_array(), [-1.0, 2.0]);
    }
}
