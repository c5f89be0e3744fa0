// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! rigid-math: rigid-transform algebra for 2D and 3D.
//!
//! Provides vectors ([`Vec2`], [`Vec3`]), reduced-storage rigid transforms
//! ([`Mat3`] stores a 2×3 block, [`Mat4`] a 3×4 block; the trivial homogeneous
//! row is implicit), unit quaternions ([`Quat`]), and scalar helpers.
//!
//! Every fuzzy comparison (equality, zero checks, identity detection, and
//! degeneracy branches) consults the process-wide tolerance in [`tolerance`](mod@tolerance),
//! read at call time. Degenerate inputs never fail: they emit a `tracing`
//! warning (see [`diag`]) and fall back to a documented safe value.
#![forbid(unsafe_code)]

pub mod config;
pub mod diag;
mod error;
pub mod fields;
pub mod interop;
mod mat3;
mod mat4;
mod quat;
pub mod scalar;
pub mod tolerance;
mod vec2;
mod vec3;

pub use config::ToleranceConfig;
pub use diag::Degeneracy;
pub use error::MathError;
pub use fields::{FieldAccess, FieldValue};
pub use interop::{QuaternionLike, Vector2Like, Vector3Like};
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::Quat;
pub use scalar::{clamp, deg_to_rad, rad_to_deg, round_to_increment};
pub use tolerance::{scoped_tolerance, set_tolerance, tolerance, ToleranceGuard};
pub use vec2::Vec2;
pub use vec3::Vec3;
