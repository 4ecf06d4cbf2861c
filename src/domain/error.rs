//! Domain error types

use thiserror::Error;

use crate::domain::attribute::{AttrType, AttrValue};

/// A field was given a value of the wrong kind
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("can only set {declared} (not \"{actual}\")")]
pub struct TypeMismatch {
    pub declared: AttrType,
    pub actual: &'static str,
}

impl TypeMismatch {
    pub fn new(declared: AttrType, value: &AttrValue) -> Self {
        Self {
            declared,
            actual: value.kind(),
        }
    }
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
