//! Typed attribute validation
//!
//! Every settable field of every notifier goes through [`check`]. A value is
//! accepted only when its kind is exactly the declared one: there is no
//! coercion between strings, integers, floats and booleans.

use std::fmt;

use crate::domain::error::TypeMismatch;

/// Declared type of a notifier field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrType {
    Str,
    Int,
    Bool,
}

impl AttrType {
    /// Short name used in error messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for AttrType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A field value as supplied by a caller, before validation
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
}

impl AttrValue {
    /// Runtime kind of this value
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Str(_) => "str",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
        }
    }

    /// Validate as a string and unwrap it
    pub fn into_string(self) -> Result<String, TypeMismatch> {
        match check(self, AttrType::Str)? {
            Self::Str(s) => Ok(s),
            other => Err(TypeMismatch::new(AttrType::Str, &other)),
        }
    }

    /// Validate as an integer and unwrap it
    pub fn into_int(self) -> Result<i64, TypeMismatch> {
        match check(self, AttrType::Int)? {
            Self::Int(n) => Ok(n),
            other => Err(TypeMismatch::new(AttrType::Int, &other)),
        }
    }

    /// Validate as a boolean and unwrap it
    pub fn into_bool(self) -> Result<bool, TypeMismatch> {
        match check(self, AttrType::Bool)? {
            Self::Bool(b) => Ok(b),
            other => Err(TypeMismatch::new(AttrType::Bool, &other)),
        }
    }
}

/// Return `value` unchanged if its kind matches `declared` exactly.
pub fn check(value: AttrValue, declared: AttrType) -> Result<AttrValue, TypeMismatch> {
    let matches = matches!(
        (&value, declared),
        (AttrValue::Str(_), AttrType::Str)
            | (AttrValue::Int(_), AttrType::Int)
            | (AttrValue::Bool(_), AttrType::Bool)
    );

    if matches {
        Ok(value)
    } else {
        Err(TypeMismatch::new(declared, &value))
    }
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<i64> for AttrValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for AttrValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
