//! Registry of adapters declared at runtime
//!
//! Adapters are registered one document at a time. `extends` can only name
//! adapters that are already registered, so declarations are read in
//! dependency order and inheritance cycles cannot be expressed.
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use crate::adapter::{AdapterDefinition, Record};
use crate::error::{Error, Result};
use crate::field::Field;
use super::catalog::Catalog;
use super::types::{AdapterConfig, FieldConfig};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Adapters by name, plus the catalog their documents are resolved against
#[derive(Debug, Default)]
pub struct AdapterRegistry {
    catalog: Catalog,
    adapters: HashMap<String, Arc<AdapterDefinition>>,
    order: Vec<String>,
}

impl AdapterRegistry {
    /// A registry resolving names against the built-ins only
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable catalog, for registering custom predicates and parsers
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    /// Register a programmatically built definition
    pub fn register(&mut self, definition: AdapterDefinition) -> Result<Arc<AdapterDefinition>> {
        let name = definition.name().to_string();
        if self.adapters.contains_key(&name) {
            return Err(Error::configuration(format!(
                "Adapter '{}' is already registered",
                name
            )));
        }
        let definition = Arc::new(definition);
        self.adapters.insert(name.clone(), Arc::clone(&definition));
        self.order.push(name);
        Ok(definition)
    }

    /// Build and register an adapter from its declaration
    pub fn register_config(&mut self, config: AdapterConfig) -> Result<Arc<AdapterDefinition>> {
        let mut builder = AdapterDefinition::builder(config.name.clone());

        for parent in &config.extends {
            let definition = self.adapters.get(parent).ok_or_else(|| {
                Error::configuration(format!(
                    "Adapter '{}' extends unknown adapter '{}'",
                    config.name, parent
                ))
            })?;
            builder = builder.extends(definition);
        }

        for (name, decl) in &config.fields {
            let field = self.build_field(decl).map_err(|e| Error::Configuration {
                message: format!("Adapter '{}' field '{}' is invalid", config.name, name),
                source: Some(e.into()),
            })?;
            builder = builder.field(name.clone(), field);
        }

        let definition = self.register(builder.build()?)?;
        log::info!(
            "Registered adapter '{}' with {} fields",
            definition.name(),
            definition.fields().len()
        );
        Ok(definition)
    }

    /// Register one adapter from a YAML document
    pub fn register_yaml(&mut self, yaml: &str) -> Result<Arc<AdapterDefinition>> {
        let config: AdapterConfig = serde_yaml::from_str(yaml).map_err(|e| Error::Configuration {
            message: "Failed to parse adapter YAML".to_string(),
            source: Some(e.into()),
        })?;
        self.register_config(config)
    }

    /// Register every adapter of a multi-document YAML stream, in order
    ///
    /// Empty documents are skipped. Either every adapter in the stream is
    /// registered or, on the first error, none is.
    pub fn register_yaml_documents(&mut self, yaml: &str) -> Result<Vec<Arc<AdapterDefinition>>> {
        let mut configs = Vec::new();
        for (index, document) in serde_yaml::Deserializer::from_str(yaml).enumerate() {
            let config = Option::<AdapterConfig>::deserialize(document).map_err(|e| {
                Error::Configuration {
                    message: format!("Failed to parse adapter YAML document {}", index + 1),
                    source: Some(e.into()),
                }
            })?;
            configs.extend(config);
        }

        let adapters = self.adapters.clone();
        let order_len = self.order.len();
        let mut registered = Vec::with_capacity(configs.len());
        for config in configs {
            match self.register_config(config) {
                Ok(definition) => registered.push(definition),
                Err(e) => {
                    self.adapters = adapters;
                    self.order.truncate(order_len);
                    return Err(e);
                }
            }
        }
        Ok(registered)
    }

    /// Register one adapter from a JSON value
    pub fn register_json(&mut self, value: Value) -> Result<Arc<AdapterDefinition>> {
        let config: AdapterConfig = serde_json::from_value(value).map_err(|e| Error::Configuration {
            message: "Failed to parse adapter JSON".to_string(),
            source: Some(e.into()),
        })?;
        self.register_config(config)
    }

    pub fn get(&self, name: &str) -> Option<Arc<AdapterDefinition>> {
        self.adapters.get(name).cloned()
    }

    /// Registered adapter names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Convert `data` with the adapter registered as `adapter`
    pub fn convert(&self, adapter: &str, data: &Value) -> Result<Record> {
        let definition = self
            .adapters
            .get(adapter)
            .ok_or_else(|| Error::configuration(format!("Unknown adapter '{}'", adapter)))?;
        definition.convert_data(data)
    }

    fn build_field(&self, decl: &FieldConfig) -> Result<Field> {
        let mut field = Field::new()
            .required(decl.required)
            .with_default(decl.default.clone());

        if let Some(source) = &decl.source {
            field = field.source(source.clone());
        }
        if let Some(dtype) = &decl.dtype {
            field = field.dtype(self.catalog.dtype(dtype)?);
        }
        match (&decl.parser, &decl.parser_args) {
            (Some(parser), args) => {
                field = field.parser(self.catalog.parser(parser, args.as_ref())?);
            }
            (None, Some(_)) => {
                return Err(Error::configuration("parser_args given without a parser"));
            }
            (None, None) => {}
        }

        Ok(field)
    }
}
