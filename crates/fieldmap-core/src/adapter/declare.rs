//! Statically declared adapter types
//!
//! A type implementing [`Adapter`] owns one [`AdapterDefinition`], built the
//! first time it is asked for and shared by every instance afterwards. The
//! [`adapter!`](crate::adapter!) macro writes the implementation.
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use crate::error::Result;
use super::definition::{AdapterDefinition, Record};
use super::field_set::FieldSet;
use super::instance::AdapterInstance;
use serde_json::Value;

/// An adapter type with a type-level field declaration
pub trait Adapter {
    /// The definition shared by every instance of this type
    fn definition() -> &'static AdapterDefinition;

    /// Aggregated fields, inherited ones included
    fn fields() -> &'static FieldSet {
        Self::definition().fields()
    }

    /// Bind a default source record
    fn bind(data: Value) -> AdapterInstance<'static> {
        Self::definition().bind(data)
    }

    /// Convert an explicit record
    fn convert_data(data: &Value) -> Result<Record> {
        Self::definition().convert_data(data)
    }
}

/// Declare an adapter type
///
/// Each entry is `target_name: <Field expression>`. Parents listed after
/// `extends` contribute their fields first; local entries override them by
/// name.
///
/// ```
/// use fieldmap_core::{adapter, dtype, Adapter, Field};
/// use serde_json::json;
///
/// adapter! {
///     pub struct PersonAdapter {
///         last_name: Field::from_source("person.last_name").dtype(dtype::string()),
///         age: Field::from_source("person.age").dtype(dtype::integer()),
///     }
/// }
///
/// adapter! {
///     pub struct EmployeeAdapter extends [PersonAdapter] {
///         salary: Field::from_source("job.salary").optional().with_default(0),
///     }
/// }
///
/// let record = EmployeeAdapter::convert_data(&json!({
///     "person": {"last_name": "Smith", "age": 30}
/// }))
/// .unwrap();
/// assert_eq!(record["salary"], json!(0));
/// assert_eq!(EmployeeAdapter::fields().len(), 3);
/// ```
///
/// Repeating a target name within one declaration does not compile:
///
/// ```compile_fail
/// use fieldmap_core::{adapter, Field};
///
/// adapter! {
///     pub struct Repeated {
///         name: Field::from_source("a.name"),
///         name: Field::from_source("b.name"),
///     }
/// }
/// ```
#[macro_export]
macro_rules! adapter {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident $(extends [$($parent:ident),* $(,)?])? {
            $($field:ident : $decl:expr),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default)]
        $vis struct $name;

        const _: () = {
            #[allow(dead_code, non_snake_case)]
            struct __DeclaredFields {
                $($field: (),)*
            }
        };

        impl $crate::Adapter for $name {
            fn definition() -> &'static $crate::AdapterDefinition {
                static DEFINITION: ::std::sync::OnceLock<$crate::AdapterDefinition> =
                    ::std::sync::OnceLock::new();
                DEFINITION.get_or_init(|| {
                    let builder = $crate::AdapterDefinition::builder(stringify!($name));
                    $($(
                        let builder = builder
                            .extends(<$parent as $crate::Adapter>::definition());
                    )*)?
                    $(
                        let builder = builder.field(stringify!($field), $decl);
                    )*
                    builder.build().unwrap_or_else(|e| {
                        panic!("invalid adapter declaration `{}`: {}", stringify!($name), e)
                    })
                })
            }
        }
    };
}
