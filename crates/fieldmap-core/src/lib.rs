//! Fieldmap Core - Declarative adapters from nested records to flat ones
//!
//! This crate converts a nested source record (a `serde_json::Value` tree) into
//! a flat record by resolving a fixed set of named fields, each declared with a
//! dotted source path, an optional type check, an optional parser and a
//! fallback for optional paths.
//!
//! # Main Components
//!
//! - **Field Descriptors**: [`Field`] and its path resolution
//! - **Adapter Definitions**: field aggregation with inheritance, and conversion
//! - **Built-ins**: [`dtype`] predicates and [`parsers`]
//! - **Configuration**: adapters declared in YAML/JSON documents
//! - **Error Handling**: error types using `thiserror` and `anyhow`
//!
//! # Example
//!
//! ```
//! use fieldmap_core::{adapter, dtype, Adapter, Field, Result};
//! use serde_json::json;
//!
//! adapter! {
//!     pub struct PersonAdapter {
//!         last_name: Field::from_source("person.last_name").dtype(dtype::string()),
//!         first_name: Field::from_source("person.first_name").dtype(dtype::string()),
//!         age: Field::from_source("person.age").dtype(dtype::integer()),
//!     }
//! }
//!
//! fn example() -> Result<()> {
//!     let source = json!({"person": {"last_name": "Smith", "first_name": "John", "age": 30}});
//!     let record = PersonAdapter::bind(source).convert(None)?;
//!     assert_eq!(
//!         serde_json::Value::Object(record),
//!         json!({"last_name": "Smith", "first_name": "John", "age": 30})
//!     );
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod error;
pub mod field;
pub mod adapter;
pub mod config;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use field::{dtype, parsers, Field, Parser, TypePredicate};
pub use adapter::{
    Adapter, AdapterDefinition, AdapterDefinitionBuilder, AdapterInstance, FieldSet,
    FieldSummary, Record,
};
pub use config::{AdapterConfig, AdapterRegistry, Catalog, FieldConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_definitions_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AdapterDefinition>();
        assert_send_sync::<Field>();
        assert_send_sync::<AdapterRegistry>();
    }
}
