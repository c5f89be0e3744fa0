// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Degenerate-input diagnostics.
//!
//! Degenerate inputs are advisories, not errors: the operation applies its
//! documented fallback and keeps going. Each occurrence emits one `WARN` event
//! on the [`TARGET`] target with the kind, a short context string, and the
//! caller location. Public entry points that can degenerate are
//! `#[track_caller]`, so the reported location is the caller's code rather
//! than this crate.

use core::fmt;
use std::panic::Location;

/// `tracing` target used for every degenerate-input event.
pub const TARGET: &str = "rigid_math::degenerate";

/// Kinds of degenerate input recovered locally.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Degeneracy {
    /// Normalizing a vector whose length is within tolerance of zero.
    ZeroLengthVector,
    /// Normalizing a quaternion whose length is within tolerance of zero.
    ZeroLengthQuaternion,
    /// Dividing by a scalar within tolerance of zero.
    DivideByZero,
    /// Rotating between antiparallel vectors; the axis is arbitrary.
    AntiparallelVectors,
}

impl Degeneracy {
    /// Stable message for the kind.
    pub const fn message(self) -> &'static str {
        match self {
            Self::ZeroLengthVector => "cannot normalize zero-length vector",
            Self::ZeroLengthQuaternion => "cannot normalize zero-length quaternion",
            Self::DivideByZero => "division by near-zero scalar",
            Self::AntiparallelVectors => "antiparallel vectors have no unique rotation axis",
        }
    }
}

impl fmt::Display for Degeneracy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Emits a degenerate-input warning attributed to the caller.
#[track_caller]
pub(crate) fn report(kind: Degeneracy, context: &str) {
    let location = Location::caller();
    tracing::warn!(
        target: TARGET,
        kind = ?kind,
        context,
        location = %location,
        "{}",
        kind.message()
    );
}
