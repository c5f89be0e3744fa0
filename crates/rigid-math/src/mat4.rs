// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::{Deserialize, Serialize};

use crate::diag::{self, Degeneracy};
use crate::interop::{QuaternionLike, Vector3Like};
use crate::tolerance::tolerance;
use crate::Vec3;

const IDENTITY: [f64; 12] = [
    1.0, 0.0, 0.0, 0.0, // row 1
    0.0, 1.0, 0.0, 0.0, // row 2
    0.0, 0.0, 1.0, 0.0, // row 3
];

/// Row-major 3×3 linear block.
type Block = [f64; 9];

/// 3D rigid transform (rotation + translation) in reduced storage.
///
/// Logically the 4×4 homogeneous matrix
/// ```text
/// | n11 n12 n13 n14 |
/// | n21 n22 n23 n24 |
/// | n31 n32 n33 n34 |
/// |  0   0   0   1  |
/// ```
/// of which the top three rows are stored row-major (12 elements). The
/// left 3×3 block is the rotation `R`, the last column the translation `t`,
/// and a point maps as `p' = R·p + t`.
///
/// - The identity flag is cached and kept current by every mutator, so
///   applying or composing an identity matrix skips the arithmetic.
/// - [`Mat4::invert_transform`] relies on `R` being orthonormal. Every
///   constructor here preserves that, except [`Mat4::new`] /
///   [`Mat4::from_parts`] with arbitrary caller data.
/// - Elements and the flag are read-only from outside.
///
/// # Examples
/// ```
/// use rigid_math::{Mat4, Vec3};
/// let mut m = Mat4::identity();
/// m.set_translation(&[5.0, -3.0, 2.0]);
/// let mut p = Vec3::new(2.0, 4.0, -1.0);
/// p.apply_mat4(&m);
/// assert_eq!(p.to_array(), [7.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 12]", into = "[f64; 12]")]
pub struct Mat4 {
    elements: [f64; 12],
    is_identity: bool,
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    /// Identity transform.
    pub const fn identity() -> Self {
        Self {
            elements: IDENTITY,
            is_identity: true,
        }
    }

    /// Creates a matrix from 12 row-major elements; the identity flag is
    /// derived from the elements.
    pub fn new(elements: [f64; 12]) -> Self {
        Self {
            elements,
            is_identity: Self::elements_are_identity(&elements),
        }
    }

    /// Creates a matrix with a caller-asserted identity flag.
    ///
    /// The flag is trusted as given. Passing `true` for non-identity elements
    /// makes applications and compositions treat the matrix as identity.
    pub const fn from_parts(elements: [f64; 12], is_identity: bool) -> Self {
        Self {
            elements,
            is_identity,
        }
    }

    /// Copy of the stored elements, row-major.
    pub const fn elements(&self) -> [f64; 12] {
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

    /// Pure translation; collapses to identity when every component is within
    /// tolerance of zero.
    pub fn set_translation(&mut self, translation: &impl Vector3Like) -> &mut Self {
        let tol = tolerance();
        let (tx, ty, tz) = (translation.x(), translation.y(), translation.z());
        if tx.abs() <= tol && ty.abs() <= tol && tz.abs() <= tol {
            return self.set_identity();
        }
        self.elements = [
            1.0, 0.0, 0.0, tx, //
            0.0, 1.0, 0.0, ty, //
            0.0, 0.0, 1.0, tz, //
        ];
        self.is_identity = false;
        self
    }

    /// Rotation of `angle` radians about the unit `axis` through the origin.
    pub fn set_rotation_axis_angle(&mut self, axis: &impl Vector3Like, angle: f64) -> &mut Self {
        if angle.abs() <= tolerance() {
            return self.set_identity();
        }
        let (s, c) = angle.sin_cos();
        self.set_linear(&rodrigues(&Vec3::from_like(axis), s, c), None)
    }

    /// Rotation of `angle` radians about the unit `axis` through `offset`.
    ///
    /// Equivalent to `T(offset) · R · T(-offset)`, computed in closed form:
    /// the point at `offset` is fixed and the translation is `offset - R·offset`.
    pub fn set_rotation_axis_angle_at_offset(
        &mut self,
        axis: &impl Vector3Like,
        angle: f64,
        offset: &impl Vector3Like,
    ) -> &mut Self {
        if angle.abs() <= tolerance() {
            return self.set_identity();
        }
        let (s, c) = angle.sin_cos();
        self.set_linear(
            &rodrigues(&Vec3::from_like(axis), s, c),
            Some(&Vec3::from_like(offset)),
        )
    }

    /// Shortest rotation about the origin taking the direction of `from` onto
    /// the direction of `to`.
    ///
    /// See [`Mat4::set_rotation_from_vector_to_vector_at_offset`].
    #[track_caller]
    pub fn set_rotation_from_vector_to_vector(
        &mut self,
        from: &impl Vector3Like,
        to: &impl Vector3Like,
    ) -> &mut Self {
        self.rotation_between(from, to, None)
    }

    /// Shortest rotation about `offset` taking the direction of `from` onto
    /// the direction of `to`.
    ///
    /// Both inputs are normalized internally. Equal directions yield the
    /// identity. For antiparallel directions the cross product carries no
    /// axis, so a half turn about [`Vec3::any_orthogonal`]`(from)` is used
    /// and a [`Degeneracy::AntiparallelVectors`] diagnostic is emitted. A
    /// zero-length input has no direction: the result is the identity and a
    /// [`Degeneracy::ZeroLengthVector`] diagnostic is emitted.
    #[track_caller]
    pub fn set_rotation_from_vector_to_vector_at_offset(
        &mut self,
        from: &impl Vector3Like,
        to: &impl Vector3Like,
        offset: &impl Vector3Like,
    ) -> &mut Self {
        self.rotation_between(from, to, Some(&Vec3::from_like(offset)))
    }

    /// Householder reflection `I - 2·n·nᵀ` across the plane through the
    /// origin with unit normal `normal`.
    pub fn set_reflection_normal(&mut self, normal: &impl Vector3Like) -> &mut Self {
        self.set_linear(&householder(&Vec3::from_like(normal)), None)
    }

    /// Householder reflection across the plane through `offset` with unit
    /// normal `normal`; the translation is `offset - R·offset`.
    pub fn set_reflection_normal_at_offset(
        &mut self,
        normal: &impl Vector3Like,
        offset: &impl Vector3Like,
    ) -> &mut Self {
        self.set_linear(
            &householder(&Vec3::from_like(normal)),
            Some(&Vec3::from_like(offset)),
        )
    }

    /// Rotation block from the unit quaternion `q`, no translation.
    pub fn set_from_quat(&mut self, q: &impl QuaternionLike) -> &mut Self {
        let (x, y, z, w) = (q.x(), q.y(), q.z(), q.w());
        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, xz, yz) = (x * y, x * z, y * z);
        let (wx, wy, wz) = (w * x, w * y, w * z);
        self.set_linear(
            &[
                1.0 - 2.0 * (yy + zz),
                2.0 * (xy - wz),
                2.0 * (xz + wy),
                2.0 * (xy + wz),
                1.0 - 2.0 * (xx + zz),
                2.0 * (yz - wx),
                2.0 * (xz - wy),
                2.0 * (yz + wx),
                1.0 - 2.0 * (xx + yy),
            ],
            None,
        )
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

    /// Sets `self = a · b` as affine maps: `(R_a·R_b, R_a·t_b + t_a)`.
    ///
    /// If either operand is flagged identity the other is copied verbatim.
    /// Otherwise the identity flag is recomputed from the product, since e.g.
    /// a transform times its inverse lands on the identity.
    pub fn multiply_matrices(&mut self, a: &Self, b: &Self) -> &mut Self {
        if a.is_identity {
            return self.copy_from(b);
        }
        if b.is_identity {
            return self.copy_from(a);
        }

        let [a11, a12, a13, a14, a21, a22, a23, a24, a31, a32, a33, a34] = a.elements;
        let [b11, b12, b13, b14, b21, b22, b23, b24, b31, b32, b33, b34] = b.elements;

        *self = Self::new([
            a11 * b11 + a12 * b21 + a13 * b31,
            a11 * b12 + a12 * b22 + a13 * b32,
            a11 * b13 + a12 * b23 + a13 * b33,
            a11 * b14 + a12 * b24 + a13 * b34 + a14,
            a21 * b11 + a22 * b21 + a23 * b31,
            a21 * b12 + a22 * b22 + a23 * b32,
            a21 * b13 + a22 * b23 + a23 * b33,
            a21 * b14 + a22 * b24 + a23 * b34 + a24,
            a31 * b11 + a32 * b21 + a33 * b31,
            a31 * b12 + a32 * b22 + a33 * b32,
            a31 * b13 + a32 * b23 + a33 * b33,
            a31 * b14 + a32 * b24 + a33 * b34 + a34,
        ]);
        self
    }

    /// Inverts in place using the rigid-transform structure.
    ///
    /// The rotation block becomes its transpose and the translation `-Rᵀ·t`.
    /// Only valid for orthonormal rotation blocks (no scale or shear).
    pub fn invert_transform(&mut self) -> &mut Self {
        if self.is_identity {
            return self;
        }
        let [n11, n12, n13, tx, n21, n22, n23, ty, n31, n32, n33, tz] = self.elements;
        *self = Self::new([
            n11,
            n21,
            n31,
            -(n11 * tx + n21 * ty + n31 * tz),
            n12,
            n22,
            n32,
            -(n12 * tx + n22 * ty + n32 * tz),
            n13,
            n23,
            n33,
            -(n13 * tx + n23 * ty + n33 * tz),
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

    #[track_caller]
    fn rotation_between(
        &mut self,
        from: &impl Vector3Like,
        to: &impl Vector3Like,
        pivot: Option<&Vec3>,
    ) -> &mut Self {
        let mut from = Vec3::from_like(from);
        let mut to = Vec3::from_like(to);
        if from.is_zero() || to.is_zero() {
            diag::report(
                Degeneracy::ZeroLengthVector,
                "Mat4::set_rotation_from_vector_to_vector",
            );
            return self.set_identity();
        }
        from.normalize();
        to.normalize();

        if from.equals(&to) {
            return self.set_identity();
        }

        let mut axis = from;
        axis.cross(&to);
        let sin = axis.length();
        let cos = from.dot(&to);

        if sin <= tolerance() {
            if cos > 0.0 {
                return self.set_identity();
            }
            diag::report(
                Degeneracy::AntiparallelVectors,
                "Mat4::set_rotation_from_vector_to_vector",
            );
            let fallback = Vec3::any_orthogonal(&from);
            return self.set_linear(&rodrigues(&fallback, 0.0, -1.0), pivot);
        }

        axis.scale(1.0 / sin);
        self.set_linear(&rodrigues(&axis, sin, cos), pivot)
    }

    /// Installs `r` as the linear block; with a pivot the translation keeps
    /// the pivot fixed (`t = p - R·p`), otherwise it is zero.
    fn set_linear(&mut self, r: &Block, pivot: Option<&Vec3>) -> &mut Self {
        let [r11, r12, r13, r21, r22, r23, r31, r32, r33] = *r;
        let (tx, ty, tz) = match pivot {
            Some(p) => (
                p.x - (r11 * p.x + r12 * p.y + r13 * p.z),
                p.y - (r21 * p.x + r22 * p.y + r23 * p.z),
                p.z - (r31 * p.x + r32 * p.y + r33 * p.z),
            ),
            None => (0.0, 0.0, 0.0),
        };
        *self = Self::new([
            r11, r12, r13, tx, //
            r21, r22, r23, ty, //
            r31, r32, r33, tz, //
        ]);
        self
    }

    fn elements_are_identity(elements: &[f64; 12]) -> bool {
        let tol = tolerance();
        elements
            .iter()
            .zip(IDENTITY.iter())
            .all(|(e, i)| (e - i).abs() <= tol)
    }
}

/// Rodrigues' rotation block for unit `axis` with `s = sin θ`, `c = cos θ`.
fn rodrigues(axis: &Vec3, s: f64, c: f64) -> Block {
    let (x, y, z) = (axis.x, axis.y, axis.z);
    let t = 1.0 - c;
    let (tx, ty) = (t * x, t * y);
    [
        tx * x + c,
        tx * y - s * z,
        tx * z + s * y,
        tx * y + s * z,
        ty * y + c,
        ty * z - s * x,
        tx * z - s * y,
        ty * z + s * x,
        t * z * z + c,
    ]
}

/// Householder block `I - 2·n·nᵀ` for unit `n`.
fn householder(n: &Vec3) -> Block {
    let (x, y, z) = (n.x, n.y, n.z);
    let r12 = -2.0 * x * y;
    let r13 = -2.0 * x * z;
    let r23 = -2.0 * y * z;
    [
        1.0 - 2.0 * x * x,
        r12,
        r13,
        r12,
        1.0 - 2.0 * y * y,
        r23,
        r13,
        r23,
        1.0 - 2.0 * z * z,
    ]
}

impl From<[f64; 12]> for Mat4 {
    fn from(value: [f64; 12]) -> Self {
        Self::new(value)
    }
}

impl From<Mat4> for [f64; 12] {
    fn from(value: Mat4) -> Self {
        value.elements
    }
}
