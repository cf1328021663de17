//! Error types for the Fieldmap core library
//!
//! This module defines the error handling system for Fieldmap, using thiserror
//! for ergonomic error definitions and anyhow for wrapping parser failures and
//! configuration sources.

use serde_json::Value;
use thiserror::Error;

/// Main error type for Fieldmap operations
#[derive(Error, Debug)]
pub enum Error {
    /// A required field hit a non-mapping value before its path was exhausted
    #[error("Field {segment} is required for field {target} given source {source_path}")]
    MissingPath {
        target: String,
        segment: String,
        source_path: String,
    },

    /// The resolved value failed the declared type predicate
    #[error("Field {target} is of type {actual} but expected {expected}")]
    TypeMismatch {
        target: String,
        expected: String,
        actual: String,
    },

    /// The declared parser rejected the resolved value
    #[error("Field {target} failed to parse value {value}: {source}")]
    Parse {
        target: String,
        value: Value,
        #[source]
        source: anyhow::Error,
    },

    /// Adapter declaration or declarative configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand for a configuration error without an underlying cause
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
            source: None,
        }
    }

    /// Target field name for errors raised while resolving a field
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::MissingPath { target, .. }
            | Error::TypeMismatch { target, .. }
            | Error::Parse { target, .. } => Some(target),
            Error::Configuration { .. } => None,
        }
    }

    /// Whether this error was raised during conversion rather than declaration
    pub fn is_conversion_error(&self) -> bool {
        self.field().is_some()
    }
}

/// JSON type name of a value, as reported in type mismatch errors
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_i64() || n.is_u64() => "integer",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
