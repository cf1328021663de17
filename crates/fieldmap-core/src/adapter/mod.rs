//! Adapter definitions: aggregating fields and converting records
//!
//! # Module Organization
//!
//! - [`field_set`] - Ordered, unique-by-name field collection
//! - [`definition`] - [`AdapterDefinition`] and its declaration-time builder
//! - [`instance`] - Definitions bound to a default source record
//! - [`declare`] - The [`Adapter`] trait for statically declared types
//!
//! # Examples
//!
//! ```
//! use fieldmap_core::{dtype, AdapterDefinition, Field};
//! use serde_json::json;
//!
//! let person = AdapterDefinition::builder("Person")
//!     .field("last_name", Field::from_source("person.last_name").dtype(dtype::string()))
//!     .field("age", Field::from_source("person.age").dtype(dtype::integer()))
//!     .build()
//!     .unwrap();
//!
//! let instance = person.bind(json!({"person": {"last_name": "Smith", "age": 30}}));
//! let record = instance.convert(None).unwrap();
//! assert_eq!(record["last_name"], json!("Smith"));
//! ```
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

pub mod field_set;
pub mod definition;
pub mod instance;
pub mod declare;

#[cfg(test)]
mod tests;

pub use field_set::FieldSet;
pub use definition::{AdapterDefinition, AdapterDefinitionBuilder, FieldSummary, Record};
pub use instance::AdapterInstance;
pub use declare::Adapter;
