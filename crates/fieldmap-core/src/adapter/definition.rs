//! Adapter definitions and their declaration-time field aggregation
//!
//! An [`AdapterDefinition`] is built once through [`AdapterDefinitionBuilder`]:
//! ancestor field sets are folded together earliest first, then the adapter's
//! own declarations are overlaid by name. The resulting field set never
//! changes afterwards and is shared by every conversion.
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use crate::field::Field;
use super::field_set::FieldSet;
use super::instance::AdapterInstance;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;

/// Flat record produced by a conversion
pub type Record = serde_json::Map<String, Value>;

/// A named, immutable set of field declarations
#[derive(Debug)]
pub struct AdapterDefinition {
    name: String,
    parents: Vec<String>,
    fields: FieldSet,
}

/// Schema entry for one declared field, for documentation and reports
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    pub name: String,
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parser: Option<String>,
    pub required: bool,
    pub default: Value,
}

impl AdapterDefinition {
    /// Start declaring an adapter
    pub fn builder(name: impl Into<String>) -> AdapterDefinitionBuilder {
        AdapterDefinitionBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names of the adapters this one directly extends
    pub fn parents(&self) -> &[String] {
        &self.parents
    }

    /// Aggregated fields, inherited ones included
    pub fn fields(&self) -> &FieldSet {
        &self.fields
    }

    /// Bind a default source record
    pub fn bind(&self, data: Value) -> AdapterInstance<'_> {
        AdapterInstance::new(self, data)
    }

    /// Convert `data` into a flat record
    ///
    /// Every declared field is resolved exactly once. The first failing field
    /// aborts the conversion and its error is returned unchanged.
    pub fn convert_data(&self, data: &Value) -> Result<Record> {
        let span = tracing::debug_span!("convert", adapter = %self.name, fields = self.fields.len());
        let _enter = span.enter();

        let mut converted = Record::new();
        for (name, field) in self.fields.iter() {
            let value = field.resolve(name, data)?;
            converted.insert(name.to_string(), value);
        }

        tracing::debug!("converted {} fields", converted.len());
        Ok(converted)
    }

    /// Describe every declared field without converting anything
    pub fn describe(&self) -> Vec<FieldSummary> {
        self.fields
            .iter()
            .map(|(name, field)| FieldSummary {
                name: name.to_string(),
                source: field.source_path().unwrap_or(name).to_string(),
                dtype: field.dtype_name().map(str::to_string),
                parser: field.parser_name().map(str::to_string),
                required: field.is_required(),
                default: field.default_value().clone(),
            })
            .collect()
    }
}

/// Builder collecting ancestors and local field declarations
pub struct AdapterDefinitionBuilder {
    name: String,
    parents: Vec<String>,
    inherited: FieldSet,
    local: Vec<(String, Field)>,
}

impl AdapterDefinitionBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parents: Vec::new(),
            inherited: FieldSet::new(),
            local: Vec::new(),
        }
    }

    /// Inherit every field of `parent`
    ///
    /// Parents are applied in call order; a later parent overrides an earlier
    /// one on shared names.
    pub fn extends(mut self, parent: &AdapterDefinition) -> Self {
        self.parents.push(parent.name.clone());
        self.inherited.merge(&parent.fields);
        self
    }

    /// Declare a field of this adapter
    pub fn field(mut self, name: impl Into<String>, field: Field) -> Self {
        self.local.push((name.into(), field));
        self
    }

    /// Aggregate inherited and local fields into a definition
    pub fn build(self) -> Result<AdapterDefinition> {
        let mut seen = HashSet::new();
        for (name, _) in &self.local {
            if name.is_empty() {
                return Err(Error::configuration(format!(
                    "Adapter '{}' declares a field with an empty name",
                    self.name
                )));
            }
            if !seen.insert(name.as_str()) {
                return Err(Error::configuration(format!(
                    "Adapter '{}' declares field '{}' more than once",
                    self.name, name
                )));
            }
        }

        let mut fields = self.inherited;
        for (name, field) in self.local {
            if fields.insert(name.clone(), Arc::new(field)).is_some() {
                log::debug!("Adapter '{}' overrides inherited field '{}'", self.name, name);
            }
        }

        log::debug!(
            "Declared adapter '{}' with {} fields ({} parents)",
            self.name,
            fields.len(),
            self.parents.len()
        );

        Ok(AdapterDefinition {
            name: self.name,
            parents: self.parents,
            fields,
        })
    }
}
