// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};

use crate::interop::Vector2Like;
use crate::tolerance::tolerance;

const IDENTITY: [f64; 6] = [
    1.0, 0.0, 0.0, // row 1
    0.0, 1.0, 0.0, // row 2
];

/// 2D rigid transform (rotation + translation) in reduced storage.
///
/// Logically the 3×3 homogeneous matrix
/// ```text
/// | n11 n12 n13 |
/// | n21 n22 n23 |
/// |  0   0   1  |
/// ```
/// of which only the top two rows are stored, row-major.
///
/// The matrix caches whether it is the identity. The flag is set by every
/// mutator (either from known algebra or by re-checking the elements against
/// the current tolerance), so applying or composing an identity matrix skips
/// the arithmetic entirely. Elements and the flag are read-only from outside.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 6]", into = "[f64; 6]")]
pub struct Mat3 {
    elements: [f64; 6],
    is_identity: bool,
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat3 {
    /// Identity transform.
    pub const fn identity() -> Self {
        Self {
            elements: IDENTITY,
            is_identity: true,
        }
    }

    /// Creates a matrix from `[n11, n12, n13, n21, n22, n23]`; the identity
    /// flag is derived from the elements.
    pub fn new(elements: [f64; 6]) -> Self {
        Self {
            elements,
            is_identity: Self::elements_are_identity(&elements),
        }
    }

    /// Creates a matrix with a caller-asserted identity flag.
    ///
    /// The flag is trusted as given. Passing `true` for non-identity elements
    /// makes applications and compositions treat the matrix as identity.
    pub const fn from_parts(elements: [f64; 6], is_identity: bool) -> Self {
        Self {
            elements,
            is_identity,
        }
    }

    /// Copy of the stored elements, row-major.
    pub const fn elements(&self) -> [f64; 6] {
        self.elements
    }

    /// Cached identity flag.
    pub const fn is_identity(&self) -> bool {
        self.is_identity
    }

    /// Resets to the identity transform.
    pub fn set_identity(&mut self) -> &mut Self {
        *self = Self::identity();
        self
    }

    /// Copies `other`, including its identity flag verbatim.
    pub fn copy_from(&mut self, other: &Self) -> &mut Self {
        *self = *other;
        self
    }

    /// Builds `R(angle) · T(translation)`: translate, then rotate by `angle`
    /// radians counter-clockwise.
    ///
    /// Collapses to the identity when the angle and both translation
    /// components are within tolerance of zero.
    ///
    /// ```
    /// use rigid_math::{Mat3, Vec2};
    /// let mut m = Mat3::identity();
    /// m.set_from_rotation_translation(core::f64::consts::FRAC_PI_2, &[1.0, 0.0]);
    /// let mut p = Vec2::new(0.0, 0.0);
    /// p.apply_mat3(&m);
    /// assert!(p.x.abs() < 1e-12 && (p.y - 1.0).abs() < 1e-12);
    /// ```
    pub fn set_from_rotation_translation(
        &mut self,
        angle: f64,
        translation: &impl Vector2Like,
    ) -> &mut Self {
        let tol = tolerance();
        let (tx, ty) = (translation.x(), translation.y());
        if angle.abs() <= tol && tx.abs() <= tol && ty.abs() <= tol {
            return self.set_identity();
        }

        let (sin, cos) = angle.sin_cos();
        let r11 = cos;
        let r12 = -sin;
        let r21 = -r12;
        let r22 = r11;

        self.elements = [
            r11,
            r12,
            r11 * tx + r12 * ty,
            r21,
            r22,
            r21 * tx + r22 * ty,
        ];
        self.is_identity = Self::elements_are_identity(&self.elements);
        self
    }

    /// Sets `self = self · other`; `other` is applied to points first.
    pub fn multiply(&mut self, other: &Self) -> &mut Self {
        let a = *self;
        self.multiply_matrices(&a, other)
    }

    /// Sets `self = other · self`; `self` is applied to points first.
    pub fn premultiply(&mut self, other: &Self) -> &mut Self {
        let b = *self;
        self.multiply_matrices(other, &b)
    }

    /// Sets `self = a · b` as affine maps: `(R_a R_b, R_a t_b + t_a)`.
    ///
    /// If either operand is flagged identity the other is copied.
    pub fn multiply_matrices(&mut self, a: &Self, b: &Self) -> &mut Self {
        if a.is_identity {
            return self.copy_from(b);
        }
        if b.is_identity {
            return self.copy_from(a);
        }

        let [a11, a12, a13, a21, a22, a23] = a.elements;
        let [b11, b12, b13, b21, b22, b23] = b.elements;

        *self = Self::new([
            a11 * b11 + a12 * b21,
            a11 * b12 + a12 * b22,
            a11 * b13 + a12 * b23 + a13,
            a21 * b11 + a22 * b21,
            a21 * b12 + a22 * b22,
            a21 * b13 + a22 * b23 + a23,
        ]);
        self
    }

    /// Inverts in place assuming an orthonormal rotation block.
    ///
    /// The rotation becomes its transpose and the translation `-Rᵀ·t`.
    pub fn invert_transform(&mut self) -> &mut Self {
        if self.is_identity {
            return self;
        }
        let [n11, n12, n13, n21, n22, n23] = self.elements;
        *self = Self::new([
            n11,
            n21,
            -(n11 * n13 + n21 * n23),
            n12,
            n22,
            -(n12 * n13 + n22 * n23),
        ]);
        self
    }

    /// Element-wise comparison within tolerance.
    pub fn equals(&self, other: &Self) -> bool {
        let tol = tolerance();
        self.elements
            .iter()
            .zip(other.elements.iter())
            .all(|(a, b)| (a - b).abs() <= tol)
    }

    fn elements_are_identity(elements: &[f64; 6]) -> bool {
        let tol = tolerance();
        elements
            .iter()
            .zip(IDENTITY.iter())
            .all(|(e, i)| (e - i).abs() <= tol)
    }
}

impl From<[f64; 6]> for Mat3 {
    fn from(value: [f64; 6]) -> Self {
        Self::new(value)
    }
}

impl From<Mat3> for [f64; 6] {
    fn from(value: Mat3) -> Self {
        value.elements
    }
}
