//! Built-in type predicates
//!
//! Pre-configured [`TypePredicate`]s for the JSON value kinds. Names match the
//! ones accepted by declarative adapter configs.
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use super::types::TypePredicate;
use serde_json::Value;

/// String values
pub fn string() -> TypePredicate {
    TypePredicate::new("string", Value::is_string)
}

/// Whole numbers representable as i64 or u64 (booleans are not integers)
pub fn integer() -> TypePredicate {
    TypePredicate::new("integer", |v| v.is_i64() || v.is_u64())
}

/// Any JSON number
pub fn number() -> TypePredicate {
    TypePredicate::new("number", Value::is_number)
}

pub fn boolean() -> TypePredicate {
    TypePredicate::new("boolean", Value::is_boolean)
}

pub fn object() -> TypePredicate {
    TypePredicate::new("object", Value::is_object)
}

pub fn array() -> TypePredicate {
    TypePredicate::new("array", Value::is_array)
}

/// Satisfied when any of `predicates` is
pub fn any_of(predicates: Vec<TypePredicate>) -> TypePredicate {
    let name = predicates
        .iter()
        .map(TypePredicate::name)
        .collect::<Vec<_>>()
        .join(" | ");
    TypePredicate::new(name, move |v| predicates.iter().any(|p| p.matches(v)))
}

/// A caller-supplied predicate
pub fn custom<F>(name: impl Into<String>, check: F) -> TypePredicate
where
    F: Fn(&Value) -> bool + Send + Sync + 'static,
{
    TypePredicate::new(name, check)
}

/// Look up a built-in predicate by its config name
pub fn by_name(name: &str) -> Option<TypePredicate> {
    let predicate = match name {
        "string" | "str" => string(),
        "integer" | "int" => integer(),
        "number" | "float" => number(),
        "boolean" | "bool" => boolean(),
        "object" | "dict" => object(),
        "array" | "list" => array(),
        _ => return None,
    };
    Some(predicate)
}

/// Config names of every built-in predicate
pub const BUILT_IN: &[&str] = &["string", "integer", "number", "boolean", "object", "array"];
