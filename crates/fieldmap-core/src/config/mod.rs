//! Declarative adapter configuration
//!
//! Adapters can be declared in YAML or JSON documents instead of code. Type
//! and parser names are looked up in a [`Catalog`], and `extends` names
//! adapters already held by the [`AdapterRegistry`].
//!
//! ```
//! use fieldmap_core::config::AdapterRegistry;
//! use serde_json::json;
//!
//! let mut registry = AdapterRegistry::new();
//! registry
//!     .register_yaml(
//!         r#"
//! name: Person
//! fields:
//!   last_name: { source: person.last_name, dtype: string, parser: uppercase }
//!   age: { source: person.age, dtype: integer }
//! "#,
//!     )
//!     .unwrap();
//!
//! let record = registry
//!     .convert("Person", &json!({"person": {"last_name": "Smith", "age": 30}}))
//!     .unwrap();
//! assert_eq!(record["last_name"], json!("SMITH"));
//! ```
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

pub mod types;
pub mod catalog;
pub mod registry;


pub use types::{AdapterConfig, FieldConfig};
pub use catalog::{Catalog, PARAMETRIZED_PARSERS};
pub use registry::AdapterRegistry;
