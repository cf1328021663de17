//! Built-in parsers for common value transforms
//!
//! This module provides pre-configured [`Parser`]s such as case folding,
//! string/number/boolean conversions, enum mappings, linear unit scaling and
//! date normalization.
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use crate::error::{value_type_name, Error, Result};
use super::types::Parser;
use anyhow::{anyhow, bail, Context};
use chrono::NaiveDate;
use regex::Regex;
use serde_json::{Number, Value};
use std::collections::HashMap;

fn expect_str<'a>(value: &'a Value, parser: &str) -> anyhow::Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| anyhow!("{} expects a string, found {}", parser, value_type_name(value)))
}

fn number_from_f64(n: f64) -> anyhow::Result<Value> {
    Number::from_f64(n)
        .map(Value::Number)
        .ok_or_else(|| anyhow!("{} is not a finite number", n))
}

/// Uppercase a string
pub fn uppercase() -> Parser {
    Parser::new("uppercase", |v| Ok(Value::String(expect_str(v, "uppercase")?.to_uppercase())))
}

/// Lowercase a string
pub fn lowercase() -> Parser {
    Parser::new("lowercase", |v| Ok(Value::String(expect_str(v, "lowercase")?.to_lowercase())))
}

/// Strip leading and trailing whitespace
pub fn trim() -> Parser {
    Parser::new("trim", |v| Ok(Value::String(expect_str(v, "trim")?.trim().to_string())))
}

/// Parse a numeric string; integers stay integers
pub fn string_to_number() -> Parser {
    Parser::new("string_to_number", |v| {
        let s = expect_str(v, "string_to_number")?.trim();
        if let Ok(n) = s.parse::<i64>() {
            return Ok(Value::Number(n.into()));
        }
        let n = s
            .parse::<f64>()
            .with_context(|| format!("cannot convert '{}' to a number", s))?;
        number_from_f64(n)
    })
}

/// Render a number as a string
pub fn number_to_string() -> Parser {
    Parser::new("number_to_string", |v| match v {
        Value::Number(n) => Ok(Value::String(n.to_string())),
        other => bail!("number_to_string expects a number, found {}", value_type_name(other)),
    })
}

/// Parse `true/yes/1/on` and `false/no/0/off`, case-insensitively
pub fn string_to_boolean() -> Parser {
    Parser::new("string_to_boolean", |v| {
        let s = expect_str(v, "string_to_boolean")?;
        match s.trim().to_lowercase().as_str() {
            "true" | "yes" | "1" | "on" => Ok(Value::Bool(true)),
            "false" | "no" | "0" | "off" => Ok(Value::Bool(false)),
            _ => bail!("cannot convert '{}' to a boolean", s),
        }
    })
}

/// Map string values through a lookup table
///
/// Unmapped values resolve to `default` when given and fail otherwise.
pub fn enum_map(mappings: HashMap<String, Value>, default: Option<Value>) -> Parser {
    Parser::new("enum_map", move |v| {
        let key = expect_str(v, "enum_map")?;
        match mappings.get(key).or(default.as_ref()) {
            Some(mapped) => Ok(mapped.clone()),
            None => {
                let mut available: Vec<&str> = mappings.keys().map(String::as_str).collect();
                available.sort_unstable();
                bail!("no mapping for '{}' (available: {})", key, available.join(", "))
            }
        }
    })
}

/// Linear unit conversion: `value * scale + offset`
pub fn linear(scale: f64, offset: f64) -> Parser {
    Parser::new("linear", move |v| {
        let n = v
            .as_f64()
            .ok_or_else(|| anyhow!("linear expects a number, found {}", value_type_name(v)))?;
        number_from_f64(n * scale + offset)
    })
}

/// Parse a date written in `format` and normalize it to `YYYY-MM-DD`
pub fn date(format: impl Into<String>) -> Parser {
    let format = format.into();
    Parser::new("date", move |v| {
        let s = expect_str(v, "date")?;
        let parsed = NaiveDate::parse_from_str(s, &format)
            .with_context(|| format!("'{}' does not match date format '{}'", s, format))?;
        Ok(Value::String(parsed.format("%Y-%m-%d").to_string()))
    })
}

/// Extract the first capture group of `pattern`
///
/// Falls back to the whole match when the pattern has no groups.
pub fn capture(pattern: &str) -> Result<Parser> {
    let regex = Regex::new(pattern).map_err(|e| Error::Configuration {
        message: format!("Invalid capture pattern '{}'", pattern),
        source: Some(e.into()),
    })?;
    Ok(Parser::new("capture", move |v| {
        let s = expect_str(v, "capture")?;
        let caps = regex
            .captures(s)
            .ok_or_else(|| anyhow!("'{}' does not match /{}/", s, regex.as_str()))?;
        let matched = caps.get(1).or_else(|| caps.get(0)).map(|m| m.as_str()).unwrap_or_default();
        Ok(Value::String(matched.to_string()))
    }))
}

/// Apply `parsers` left to right
pub fn chain(parsers: Vec<Parser>) -> Parser {
    let name = parsers.iter().map(Parser::name).collect::<Vec<_>>().join(" > ");
    Parser::new(name, move |v| {
        let mut current = v.clone();
        for parser in &parsers {
            if current.is_null() {
                break;
            }
            current = parser.apply(&current)?;
        }
        Ok(current)
    })
}

/// A caller-supplied parser
pub fn custom<F>(name: impl Into<String>, parse: F) -> Parser
where
    F: Fn(&Value) -> anyhow::Result<Value> + Send + Sync + 'static,
{
    Parser::new(name, parse)
}

/// Look up a parser that takes no arguments by its config name
pub fn by_name(name: &str) -> Option<Parser> {
    let parser = match name {
        "uppercase" | "upper" => uppercase(),
        "lowercase" | "lower" => lowercase(),
        "trim" => trim(),
        "string_to_number" => string_to_number(),
        "number_to_string" => number_to_string(),
        "string_to_boolean" => string_to_boolean(),
        _ => return None,
    };
    Some(parser)
}
