//! Raw form input as supplied by the presentation boundary.
//!
//! A [`RawInput`] is the field-name → value mapping collected from the form.
//! It exists only for the duration of one prediction call and carries no
//! ordering guarantees; column order is fixed by the schema, never by the
//! map's iteration order.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single raw field value: bounded integer or enumerated text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Int(i64),
    Text(String),
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

/// Field-name → value mapping for one prediction request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawInput {
    values: BTreeMap<String, RawValue>,
}

impl RawInput {
    /// Create an empty input.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<RawValue>) {
        self.values.insert(name.into(), value.into());
    }

    /// Builder-style [`set`](Self::set).
    pub fn with(mut self, name: impl Into<String>, value: impl Into<RawValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&RawValue> {
        self.values.get(name)
    }

    /// Number of fields present.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no fields are present.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}
