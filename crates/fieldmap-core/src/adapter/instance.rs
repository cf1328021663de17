//! Adapter instances bound to a default source record
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use super::definition::{AdapterDefinition, Record};
use super::field_set::FieldSet;
use serde_json::Value;

/// An adapter definition paired with the record it converts by default
#[derive(Debug, Clone)]
pub struct AdapterInstance<'d> {
    definition: &'d AdapterDefinition,
    data: Value,
}

impl<'d> AdapterInstance<'d> {
    pub fn new(definition: &'d AdapterDefinition, data: Value) -> Self {
        Self { definition, data }
    }

    pub fn definition(&self) -> &'d AdapterDefinition {
        self.definition
    }

    /// The bound source record
    pub fn data(&self) -> &Value {
        &self.data
    }

    /// Aggregated fields of the underlying definition
    pub fn fields(&self) -> &'d FieldSet {
        self.definition.fields()
    }

    /// Convert `data`, or the bound record when `None`
    pub fn convert(&self, data: Option<&Value>) -> Result<Record> {
        self.definition.convert_data(data.unwrap_or(&self.data))
    }
}
