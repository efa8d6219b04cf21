//! Image processing parameters.

use crate::{Error, ErrorContext, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Named processing options such as `width`, `height` or `format`.
///
/// Insertion order is irrelevant: entries are kept sorted by name, so two
/// maps with the same entries always render the same canonical string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Parameters(BTreeMap<String, Value>);

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    pub fn has(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        self.0.remove(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn get_str(&self, name: &str) -> Result<&str> {
        self.require(name)?
            .as_str()
            .ok_or_else(|| wrong_type(name, "string"))
    }

    pub fn get_i64(&self, name: &str) -> Result<i64> {
        self.require(name)?
            .as_i64()
            .ok_or_else(|| wrong_type(name, "integer"))
    }

    pub fn get_u64(&self, name: &str) -> Result<u64> {
        self.require(name)?
            .as_u64()
            .ok_or_else(|| wrong_type(name, "unsigned integer"))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool> {
        self.require(name)?
            .as_bool()
            .ok_or_else(|| wrong_type(name, "boolean"))
    }

    /// Compact JSON with keys in sorted order.
    pub fn to_canonical_string(&self) -> String {
        // A map of JSON values with string keys always serializes.
        serde_json::to_string(&self.0).unwrap_or_default()
    }

    fn require(&self, name: &str) -> Result<&Value> {
        self.0.get(name).ok_or_else(|| {
            Error::parameter_with_context(
                "missing parameter",
                ErrorContext::new().field(name),
            )
        })
    }
}

fn wrong_type(name: &str, expected: &str) -> Error {
    Error::parameter_with_context(
        "unexpected parameter type",
        ErrorContext::new()
            .field(name)
            .detail(format!("expected {}", expected)),
    )
}

impl FromIterator<(String, Value)> for Parameters {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
