// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Dynamic, name-keyed field access for binding layers.
//!
//! Scripting and FFI front-ends address values by field name. Vectors are
//! plain data and accept writes. Quaternion components and matrix
//! elements/identity flags are read-only: writes fail with
//! [`MathError::ImmutableField`] so rotation consistency and the cached
//! identity flag can only change through whole-value mutation methods.

use crate::{Mat3, Mat4, MathError, Quat, Vec2, Vec3};

/// A field value crossing the dynamic boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A single component.
    Number(f64),
    /// A boolean flag such as `is_identity`.
    Flag(bool),
    /// A copied-out element array.
    Elements(Vec<f64>),
}

/// Name-keyed field reads and writes.
pub trait FieldAccess {
    /// Type name used in error messages.
    fn type_name(&self) -> &'static str;

    /// Reads the field called `name`.
    fn get_field(&self, name: &str) -> Result<FieldValue, MathError>;

    /// Writes the field called `name`.
    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), MathError>;
}

fn unknown(ty: &'static str, name: &str) -> MathError {
    MathError::UnknownField {
        ty,
        field: name.to_owned(),
    }
}

fn immutable(ty: &'static str, name: &str) -> MathError {
    MathError::ImmutableField {
        ty,
        field: name.to_owned(),
    }
}

fn number(ty: &'static str, name: &str, value: FieldValue) -> Result<f64, MathError> {
    match value {
        FieldValue::Number(n) => Ok(n),
        _ => Err(MathError::FieldType {
            ty,
            field: name.to_owned(),
            expected: "a number",
        }),
    }
}

impl FieldAccess for Vec2 {
    fn type_name(&self) -> &'static str {
        "Vec2"
    }

    fn get_field(&self, name: &str) -> Result<FieldValue, MathError> {
        match name {
            "x" => Ok(FieldValue::Number(self.x)),
            "y" => Ok(FieldValue::Number(self.y)),
            _ => Err(unknown(self.type_name(), name)),
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), MathError> {
        let slot = match name {
            "x" => &mut self.x,
            "y" => &mut self.y,
            _ => return Err(unknown("Vec2", name)),
        };
        *slot = number("Vec2", name, value)?;
        Ok(())
    }
}

impl FieldAccess for Vec3 {
    fn type_name(&self) -> &'static str {
        "Vec3"
    }

    fn get_field(&self, name: &str) -> Result<FieldValue, MathError> {
        match name {
            "x" => Ok(FieldValue::Number(self.x)),
            "y" => Ok(FieldValue::Number(self.y)),
            "z" => Ok(FieldValue::Number(self.z)),
            _ => Err(unknown(self.type_name(), name)),
        }
    }

    fn set_field(&mut self, name: &str, value: FieldValue) -> Result<(), MathError> {
        let slot = match name {
            "x" => &mut self.x,
            "y" => &mut self.y,
            "z" => &mut self.z,
            _ => return Err(unknown("Vec3", name)),
        };
        *slot = number("Vec3", name, value)?;
        Ok(())
    }
}

impl FieldAccess for Quat {
    fn type_name(&self) -> &'static str {
        "Quat"
    }

    fn get_field(&self, name: &str) -> Result<FieldValue, MathError> {
        match name {
            "x" => Ok(FieldValue::Number(self.x())),
            "y" => Ok(FieldValue::Number(self.y())),
            "z" => Ok(FieldValue::Number(self.z())),
            "w" => Ok(FieldValue::Number(self.w())),
            _ => Err(unknown(self.type_name(), name)),
        }
    }

    fn set_field(&mut self, name: &str, _value: FieldValue) -> Result<(), MathError> {
        match name {
            "x" | "y" | "z" | "w" => Err(immutable(self.type_name(), name)),
            _ => Err(unknown(self.type_name(), name)),
        }
    }
}

impl FieldAccess for Mat3 {
    fn type_name(&self) -> &'static str {
        "Mat3"
    }

    fn get_field(&self, name: &str) -> Result<FieldValue, MathError> {
        match name {
            "elements" => Ok(FieldValue::Elements(self.elements().to_vec())),
            "is_identity" => Ok(FieldValue::Flag(self.is_identity())),
            _ => Err(unknown(self.type_name(), name)),
        }
    }

    fn set_field(&mut self, name: &str, _value: FieldValue) -> Result<(), MathError> {
        match name {
            "elements" | "is_identity" => Err(immutable(self.type_name(), name)),
            _ => Err(unknown(self.type_name(), name)),
        }
    }
}

impl FieldAccess for Mat4 {
    fn type_name(&self) -> &'static str {
        "Mat4"
    }

    fn get_field(&self, name: &str) -> Result<FieldValue, MathError> {
        match name {
            "elements" => Ok(FieldValue::Elements(self.elements().to_vec())),
            "is_identity" => Ok(FieldValue::Flag(self.is_identity())),
            _ => Err(unknown(self.type_name(), name)),
        }
    }

    fn set_field(&mut self, name: &str, _value: FieldValue) -> Result<(), MathError> {
        match name {
            "elements" | "is_identity" => Err(immutable(self.type_name(), name)),
            _ => Err(unknown(self.type_name(), name)),
        }
    }
}
