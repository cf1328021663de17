//! Core types for field resolution
//!
//! Type predicates and parsers are named function objects. The name is what
//! shows up in error messages and schema summaries; the function does the work.
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Signature of a type check applied to a resolved value
pub type PredicateFn = dyn Fn(&Value) -> bool + Send + Sync;

/// Signature of a value transform applied to a resolved value
pub type ParserFn = dyn Fn(&Value) -> anyhow::Result<Value> + Send + Sync;

/// A named runtime type check for resolved values
#[derive(Clone)]
pub struct TypePredicate {
    name: String,
    check: Arc<PredicateFn>,
}

impl TypePredicate {
    /// Create a predicate from a name and a check function
    pub fn new<F>(name: impl Into<String>, check: F) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            check: Arc::new(check),
        }
    }

    /// Name reported as the expected type in mismatch errors
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the value satisfies this predicate
    pub fn matches(&self, value: &Value) -> bool {
        (self.check)(value)
    }
}

impl fmt::Debug for TypePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypePredicate").field(&self.name).finish()
    }
}

impl PartialEq for TypePredicate {
    fn eq(&self, other: &Self) -> bool {
        // Compare only by name for function objects
        self.name == other.name
    }
}

/// A named transform applied to non-null resolved values
#[derive(Clone)]
pub struct Parser {
    name: String,
    parse: Arc<ParserFn>,
}

impl Parser {
    /// Create a parser from a name and a transform function
    pub fn new<F>(name: impl Into<String>, parse: F) -> Self
    where
        F: Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            parse: Arc::new(parse),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply the transform
    pub fn apply(&self, value: &Value) -> anyhow::Result<Value> {
        (self.parse)(value)
    }
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Parser").field(&self.name).finish()
    }
}

impl PartialEq for Parser {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}
