//! Shared test support utilities for integration tests

#![allow(dead_code)]

use fieldmap_core::{adapter, dtype, parsers, Field};
use serde_json::{json, Value};

adapter! {
    /// The person record used across integration tests
    pub struct PersonAdapter {
        last_name: Field::from_source("person.last_name").dtype(dtype::string()),
        first_name: Field::from_source("person.first_name").dtype(dtype::string()),
        age: Field::from_source("person.age").dtype(dtype::integer()),
    }
}

adapter! {
    /// Person plus employment details, with a shouting last name
    pub struct EmployeeAdapter extends [PersonAdapter] {
        last_name: Field::from_source("person.last_name")
            .dtype(dtype::string())
            .parser(parsers::uppercase()),
        title: Field::from_source("job.title").optional().with_default("unassigned"),
        salary: Field::from_source("job.salary")
            .dtype(dtype::number())
            .optional()
            .with_default(0),
    }
}

/// A minimal person record
pub fn person_source() -> Value {
    json!({
        "person": {"last_name": "Smith", "first_name": "John", "age": 30}
    })
}

/// A person record with employment details
pub fn employee_source() -> Value {
    json!({
        "person": {"last_name": "Smith", "first_name": "John", "age": 30},
        "job": {"title": "Engineer", "salary": 85000.5}
    })
}
