// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Errors surfaced to callers.
//!
//! Only fatal conditions live here. Degenerate geometry (zero-length
//! normalization, antiparallel inputs) is reported through [`crate::diag`] and
//! recovered locally.

use thiserror::Error;

/// Errors emitted by rigid-math.
#[derive(Debug, Error)]
pub enum MathError {
    /// An argument was outside the domain the operation accepts.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },
    /// A read-only field was assigned directly.
    #[error("{ty}.{field} has no setter; use the {ty} mutation methods")]
    ImmutableField {
        /// Owning type.
        ty: &'static str,
        /// Field that was assigned.
        field: String,
    },
    /// The field name does not exist on the type.
    #[error("{ty} has no field `{field}`")]
    UnknownField {
        /// Owning type.
        ty: &'static str,
        /// Requested field.
        field: String,
    },
    /// The value kind does not match the field.
    #[error("{ty}.{field} expects {expected}")]
    FieldType {
        /// Owning type.
        ty: &'static str,
        /// Field that was assigned.
        field: String,
        /// Expected value kind.
        expected: &'static str,
    },
    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_json::Error),
    /// Configuration could not be read.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
