//! Named type predicates and parsers available to adapter documents
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::field::{dtype, parsers, Parser, TypePredicate};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EnumMapArgs {
    mappings: HashMap<String, Value>,
    #[serde(default)]
    default: Option<Value>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct LinearArgs {
    scale: f64,
    #[serde(default)]
    offset: f64,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DateArgs {
    format: String,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct CaptureArgs {
    pattern: String,
}

/// Parser names that require `parser_args`
pub const PARAMETRIZED_PARSERS: &[&str] = &["enum_map", "linear", "date", "capture"];

/// Lookup table from config names to predicates and parsers
///
/// Custom entries shadow built-ins of the same name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dtypes: HashMap<String, TypePredicate>,
    parsers: HashMap<String, Parser>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `predicate` available as `dtype: <name>`
    pub fn register_dtype(&mut self, name: impl Into<String>, predicate: TypePredicate) -> &mut Self {
        self.dtypes.insert(name.into(), predicate);
        self
    }

    /// Make `parser` available as `parser: <name>`
    pub fn register_parser(&mut self, name: impl Into<String>, parser: Parser) -> &mut Self {
        self.parsers.insert(name.into(), parser);
        self
    }

    /// Resolve a type predicate by name
    pub fn dtype(&self, name: &str) -> Result<TypePredicate> {
        self.dtypes
            .get(name)
            .cloned()
            .or_else(|| dtype::by_name(name))
            .ok_or_else(|| Error::configuration(format!("Unknown dtype '{}'", name)))
    }

    /// Resolve a parser by name, building parametrized ones from `args`
    pub fn parser(&self, name: &str, args: Option<&Value>) -> Result<Parser> {
        if let Some(parser) = self.parsers.get(name) {
            return match args {
                None => Ok(parser.clone()),
                Some(_) => Err(Error::configuration(format!(
                    "Parser '{}' does not take arguments",
                    name
                ))),
            };
        }

        if PARAMETRIZED_PARSERS.contains(&name) {
            let args = args.ok_or_else(|| {
                Error::configuration(format!("Parser '{}' requires parser_args", name))
            })?;
            return match name {
                "enum_map" => {
                    let EnumMapArgs { mappings, default } = parse_args(name, args)?;
                    Ok(parsers::enum_map(mappings, default))
                }
                "linear" => {
                    let LinearArgs { scale, offset } = parse_args(name, args)?;
                    Ok(parsers::linear(scale, offset))
                }
                "date" => {
                    let DateArgs { format } = parse_args(name, args)?;
                    Ok(parsers::date(format))
                }
                _ => {
                    let CaptureArgs { pattern } = parse_args(name, args)?;
                    parsers::capture(&pattern)
                }
            };
        }

        let parser = parsers::by_name(name)
            .ok_or_else(|| Error::configuration(format!("Unknown parser '{}'", name)))?;
        if args.is_some() {
            return Err(Error::configuration(format!(
                "Parser '{}' does not take arguments",
                name
            )));
        }
        Ok(parser)
    }
}

fn parse_args<T: DeserializeOwned>(parser: &str, args: &Value) -> Result<T> {
    serde_json::from_value(args.clone()).map_err(|e| Error::Configuration {
        message: format!("Invalid parser_args for '{}'", parser),
        source: Some(e.into()),
    })
}
