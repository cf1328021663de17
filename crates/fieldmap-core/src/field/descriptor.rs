//! Field descriptor and dotted-path resolution
//!
//! A [`Field`] describes how one target attribute is pulled out of a nested
//! source record: which path to follow, which type to expect, how to parse
//! the value and what to fall back to when the path cannot be followed.
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use crate::error::{value_type_name, Error, Result};
use super::types::{Parser, TypePredicate};
use serde_json::Value;
use std::sync::RwLock;

/// Resolved value for keys that are not present in the source record
static NULL: Value = Value::Null;

/// Declaration of a single target attribute
///
/// Fields are built once when an adapter is declared and shared read-only by
/// every conversion. The only mutable state is the name of the target most
/// recently resolved, kept for diagnostics.
#[derive(Debug)]
pub struct Field {
    source: Option<String>,
    dtype: Option<TypePredicate>,
    parser: Option<Parser>,
    required: bool,
    default: Value,
    target: RwLock<Option<String>>,
}

impl Default for Field {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for Field {
    fn clone(&self) -> Self {
        Self {
            source: self.source.clone(),
            dtype: self.dtype.clone(),
            parser: self.parser.clone(),
            required: self.required,
            default: self.default.clone(),
            target: RwLock::new(self.last_target()),
        }
    }
}

impl Field {
    /// A required field read from the key named after its target
    pub fn new() -> Self {
        Self {
            source: None,
            dtype: None,
            parser: None,
            required: true,
            default: Value::Null,
            target: RwLock::new(None),
        }
    }

    /// A required field read from a dotted source path
    pub fn from_source(path: impl Into<String>) -> Self {
        Self::new().source(path)
    }

    /// Set the dotted source path
    pub fn source(mut self, path: impl Into<String>) -> Self {
        self.source = Some(path.into());
        self
    }

    /// Set the expected type of the resolved value
    pub fn dtype(mut self, dtype: TypePredicate) -> Self {
        self.dtype = Some(dtype);
        self
    }

    /// Set the parser applied to non-null resolved values
    pub fn parser(mut self, parser: Parser) -> Self {
        self.parser = Some(parser);
        self
    }

    /// Set whether a broken path is an error
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Shorthand for `required(false)`
    pub fn optional(self) -> Self {
        self.required(false)
    }

    /// Value returned when an optional field's path cannot be followed
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = value.into();
        self
    }

    /// Declared source path, if any
    pub fn source_path(&self) -> Option<&str> {
        self.source.as_deref().filter(|s| !s.is_empty())
    }

    pub fn dtype_name(&self) -> Option<&str> {
        self.dtype.as_ref().map(TypePredicate::name)
    }

    pub fn parser_name(&self) -> Option<&str> {
        self.parser.as_ref().map(Parser::name)
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn default_value(&self) -> &Value {
        &self.default
    }

    /// Target name passed to the most recent [`Field::resolve`] call
    pub fn last_target(&self) -> Option<String> {
        self.target.read().ok().and_then(|t| t.clone())
    }

    /// Path segments followed when resolving `target`
    pub fn lookup_keys<'a>(&'a self, target: &'a str) -> Vec<&'a str> {
        match self.source_path() {
            Some(path) => path.split('.').collect(),
            None => vec![target],
        }
    }

    /// Resolve the value of `target` from `source_data`
    ///
    /// Follows the lookup keys through nested objects, then applies the type
    /// check and the parser. Null values skip both.
    ///
    /// A `source_data` that is not an object is treated like a scalar met at
    /// the first segment: required fields fail with [`Error::MissingPath`],
    /// optional ones resolve to their default.
    pub fn resolve(&self, target: &str, source_data: &Value) -> Result<Value> {
        self.remember_target(target);

        let value = self.lookup(target, source_data)?;

        if value.is_null() {
            log::trace!("Field '{}' resolved to null", target);
            return Ok(Value::Null);
        }

        if let Some(dtype) = &self.dtype {
            if !dtype.matches(value) {
                return Err(Error::TypeMismatch {
                    target: target.to_string(),
                    expected: dtype.name().to_string(),
                    actual: value_type_name(value).to_string(),
                });
            }
        }

        match &self.parser {
            Some(parser) => parser.apply(value).map_err(|source| Error::Parse {
                target: target.to_string(),
                value: value.clone(),
                source,
            }),
            None => Ok(value.clone()),
        }
    }

    /// Record `target` as the last resolved name, locking for writes only
    /// when it changes
    fn remember_target(&self, target: &str) {
        let unchanged = self
            .target
            .read()
            .map_or(true, |last| last.as_deref() == Some(target));
        if unchanged {
            return;
        }
        if let Ok(mut last) = self.target.write() {
            *last = Some(target.to_string());
        }
    }

    /// Walk the lookup keys through `source_data`
    fn lookup<'a>(&'a self, target: &'a str, source_data: &'a Value) -> Result<&'a Value> {
        let mut current = source_data;
        for key in self.lookup_keys(target) {
            let Some(object) = current.as_object() else {
                if self.required {
                    return Err(Error::MissingPath {
                        target: target.to_string(),
                        segment: key.to_string(),
                        source_path: self.source_path().unwrap_or(target).to_string(),
                    });
                }
                log::debug!(
                    "Optional field '{}' fell back to its default at segment '{}'",
                    target,
                    key
                );
                return Ok(&self.default);
            };
            current = object.get(key).unwrap_or(&NULL);
        }
        Ok(current)
    }
}
