//! Tests for adapter aggregation and conversion
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use super::{Adapter, AdapterDefinition, FieldSummary};
use crate::field::{dtype, parsers, Field};
use crate::{adapter, Error};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn person_definition() -> AdapterDefinition {
    AdapterDefinition::builder("Person")
        .field("last_name", Field::from_source("person.last_name").dtype(dtype::string()))
        .field("first_name", Field::from_source("person.first_name").dtype(dtype::string()))
        .field("age", Field::from_source("person.age").dtype(dtype::integer()))
        .build()
        .unwrap()
}

fn person_source() -> Value {
    json!({"person": {"last_name": "Smith", "first_name": "John", "age": 30}})
}

adapter! {
    struct BaseAdapter {
        x: Field::from_source("a.x"),
    }
}

adapter! {
    struct DerivedAdapter extends [BaseAdapter] {
        y: Field::from_source("a.y"),
        x: Field::from_source("b.x").parser(parsers::uppercase()),
    }
}

adapter! {
    /// Adapter with nothing of its own
    struct PassThroughAdapter extends [DerivedAdapter] {}
}

#[test]
fn test_convert_person_record() {
    let record = person_definition().convert_data(&person_source()).unwrap();
    assert_eq!(
        Value::Object(record),
        json!({"last_name": "Smith", "first_name": "John", "age": 30})
    );
}

#[test]
fn test_instance_uses_bound_record_by_default() {
    let definition = person_definition();
    let instance = definition.bind(person_source());
    let record = instance.convert(None).unwrap();
    assert_eq!(record["first_name"], json!("John"));
    assert_eq!(instance.data(), &person_source());
}

#[test]
fn test_instance_prefers_explicit_record() {
    let definition = person_definition();
    let instance = definition.bind(person_source());
    let other = json!({"person": {"last_name": "Doe", "first_name": "Jane", "age": 41}});
    let record = instance.convert(Some(&other)).unwrap();
    assert_eq!(record["last_name"], json!("Doe"));
    assert_eq!(record["age"], json!(41));
}

#[test]
fn test_output_has_one_key_per_field() {
    let definition = person_definition();
    let record = definition.convert_data(&json!({"person": {}})).unwrap();
    assert_eq!(record.len(), definition.fields().len());
    assert!(record.values().all(Value::is_null));
}

#[test]
fn test_first_failure_aborts_conversion() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let definition = AdapterDefinition::builder("Counting")
        .field("broken", Field::from_source("a.b"))
        .field(
            "counted",
            Field::from_source("c").parser(parsers::custom("count", move |v| {
                counter.fetch_add(1, Ordering::SeqCst);
                Ok(v.clone())
            })),
        )
        .build()
        .unwrap();

    let err = definition.convert_data(&json!({"a": 1, "c": 2})).unwrap_err();
    assert!(matches!(err, Error::MissingPath { .. }));
    assert_eq!(err.field(), Some("broken"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn test_type_mismatch_surfaces_unchanged() {
    let source = json!({"person": {"last_name": "Smith", "first_name": "John", "age": "30"}});
    let err = person_definition().convert_data(&source).unwrap_err();
    match err {
        Error::TypeMismatch { target, expected, actual } => {
            assert_eq!(target, "age");
            assert_eq!(expected, "integer");
            assert_eq!(actual, "string");
        }
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_derived_fields_override_and_extend() {
    let source = json!({"a": {"x": "base", "y": 2}, "b": {"x": "derived"}});
    let record = DerivedAdapter::convert_data(&source).unwrap();
    assert_eq!(record.len(), 2);
    assert_eq!(record["x"], json!("DERIVED"));
    assert_eq!(record["y"], json!(2));

    // The parent keeps its own declaration
    let base = BaseAdapter::convert_data(&source).unwrap();
    assert_eq!(base["x"], json!("base"));
}

#[test]
fn test_override_keeps_inherited_position() {
    let names: Vec<&str> = DerivedAdapter::fields().names().collect();
    assert_eq!(names, vec!["x", "y"]);
}

#[test]
fn test_inheritance_is_transitive() {
    let fields = PassThroughAdapter::fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields.get("x").and_then(Field::source_path), Some("b.x"));
    assert_eq!(PassThroughAdapter::definition().parents(), &["DerivedAdapter".to_string()]);
}

#[test]
fn test_definition_is_shared_across_instances() {
    let first = DerivedAdapter::definition();
    let second = DerivedAdapter::definition();
    assert!(std::ptr::eq(first, second));

    let a = DerivedAdapter::bind(json!({}));
    let b = DerivedAdapter::bind(json!({"a": {}}));
    assert!(std::ptr::eq(a.fields(), b.fields()));
}

#[test]
fn test_later_parent_wins_on_shared_names() {
    let left = AdapterDefinition::builder("Left")
        .field("id", Field::from_source("left.id"))
        .field("only_left", Field::new())
        .build()
        .unwrap();
    let right = AdapterDefinition::builder("Right")
        .field("id", Field::from_source("right.id"))
        .build()
        .unwrap();

    let both = AdapterDefinition::builder("Both")
        .extends(&left)
        .extends(&right)
        .build()
        .unwrap();

    assert_eq!(both.fields().get("id").and_then(Field::source_path), Some("right.id"));
    assert_eq!(both.fields().names().collect::<Vec<_>>(), vec!["id", "only_left"]);
    assert_eq!(both.parents(), &["Left".to_string(), "Right".to_string()]);
}

#[test]
fn test_duplicate_local_field_is_rejected() {
    let result = AdapterDefinition::builder("Twice")
        .field("x", Field::new())
        .field("x", Field::new().optional())
        .build();
    match result {
        Err(Error::Configuration { message, .. }) => assert!(message.contains("'x'")),
        other => panic!("expected configuration error, got {:?}", other.map(|d| d.name().to_string())),
    }
}

#[test]
fn test_empty_field_name_is_rejected() {
    let result = AdapterDefinition::builder("Nameless").field("", Field::new()).build();
    assert!(matches!(result, Err(Error::Configuration { .. })));
}

#[test]
fn test_describe_reports_schema() {
    let definition = AdapterDefinition::builder("Described")
        .field("age", Field::new().dtype(dtype::integer()))
        .field(
            "salary",
            Field::from_source("job.salary")
                .parser(parsers::linear(1.0, 0.0))
                .optional()
                .with_default(0),
        )
        .build()
        .unwrap();

    let summary = definition.describe();
    assert_eq!(
        summary[0],
        FieldSummary {
            name: "age".to_string(),
            source: "age".to_string(),
            dtype: Some("integer".to_string()),
            parser: None,
            required: true,
            default: Value::Null,
        }
    );
    let rendered = serde_json::to_value(&summary[1]).unwrap();
    assert_eq!(
        rendered,
        json!({"name": "salary", "source": "job.salary", "parser": "linear", "required": false, "default": 0})
    );
}

#[test]
fn test_concurrent_conversions_share_definition() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let source = json!({"a": {"y": i}, "b": {"x": format!("t{}", i)}});
                DerivedAdapter::convert_data(&source).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let record = handle.join().unwrap();
        assert_eq!(record["y"], json!(i));
        assert_eq!(record["x"], json!(format!("T{}", i)));
    }
}
