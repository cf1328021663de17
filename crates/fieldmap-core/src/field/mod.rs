//! Field descriptors: resolving one target attribute from a nested record
//!
//! # Module Organization
//!
//! - [`types`] - Named type predicates and parsers
//! - [`descriptor`] - The [`Field`] declaration and its path resolution
//! - [`dtype`] - Built-in type predicates
//! - [`parsers`] - Built-in parsers
//!
//! # Examples
//!
//! ```
//! use fieldmap_core::{dtype, parsers, Field};
//! use serde_json::json;
//!
//! let last_name = Field::from_source("person.last_name")
//!     .dtype(dtype::string())
//!     .parser(parsers::uppercase());
//!
//! let source = json!({"person": {"last_name": "Smith"}});
//! assert_eq!(last_name.resolve("last_name", &source).unwrap(), json!("SMITH"));
//! ```
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

pub mod types;
pub mod descriptor;
pub mod dtype;
pub mod parsers;



pub use types::{Parser, ParserFn, PredicateFn, TypePredicate};
pub use descriptor::Field;
