//! Ordered, unique-by-name collection of field declarations
//!
//! Copyright (c) 2025 Fieldmap Team
//! Licensed under the Apache-2.0 license

use crate::field::Field;
use std::sync::Arc;

/// Target name → field declaration, in declaration order
///
/// Inserting an existing name replaces its field in place, so an override
/// keeps the position of the declaration it replaces.
#[derive(Debug, Clone, Default)]
pub struct FieldSet {
    entries: Vec<(String, Arc<Field>)>,
}

impl FieldSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a field, returning the one it replaced
    pub fn insert(&mut self, name: impl Into<String>, field: Arc<Field>) -> Option<Arc<Field>> {
        let name = name.into();
        match self.entries.iter().position(|(existing, _)| *existing == name) {
            Some(index) => Some(std::mem::replace(&mut self.entries[index].1, field)),
            None => {
                self.entries.push((name, field));
                None
            }
        }
    }

    /// Overlay every field of `other` onto this set
    pub fn merge(&mut self, other: &FieldSet) {
        for (name, field) in &other.entries {
            self.insert(name.clone(), Arc::clone(field));
        }
    }

    pub fn get(&self, name: &str) -> Option<&Field> {
        self.get_shared(name).map(Arc::as_ref)
    }

    /// Shared handle to a field, for definitions that reuse it
    pub fn get_shared(&self, name: &str) -> Option<&Arc<Field>> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, field)| field)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get_shared(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Field)> {
        self.entries.iter().map(|(name, field)| (name.as_str(), field.as_ref()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a FieldSet {
    type Item = (&'a str, &'a Field);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a Field)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
