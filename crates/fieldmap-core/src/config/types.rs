//! Serializable adapter declarations
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One adapter as written in a YAML or JSON document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AdapterConfig {
    /// Name other documents use in `extends`
    pub name: String,

    /// Previously registered adapters to inherit from, earliest first
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    /// Field declarations in document order
    #[serde(default, with = "ordered_fields")]
    pub fields: Vec<(String, FieldConfig)>,
}

/// One field as written in an adapter document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    /// Dotted source path; defaults to the field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Catalog name of the expected type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dtype: Option<String>,

    /// Catalog name of the parser
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,

    /// Arguments for parametrized parsers (`enum_map`, `linear`, `date`, `capture`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_args: Option<Value>,

    #[serde(default = "default_required")]
    pub required: bool,

    #[serde(default)]
    pub default: Value,
}

fn default_required() -> bool {
    true
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            source: None,
            dtype: None,
            parser: None,
            parser_args: None,
            required: true,
            default: Value::Null,
        }
    }
}

/// Keeps `fields` in document order while reading and writing it as a map
mod ordered_fields {
    use super::FieldConfig;
    use serde::de::{MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};
    use std::fmt;

    pub fn serialize<S>(fields: &[(String, FieldConfig)], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(fields.len()))?;
        for (name, field) in fields {
            map.serialize_entry(name, field)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<(String, FieldConfig)>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = Vec<(String, FieldConfig)>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of field names to field declarations")
            }

            fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, FieldConfig>()? {
                    fields.push(entry);
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}
