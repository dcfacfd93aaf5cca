//! Task configuration loaded from JSON
//!
//! Accepts both a flat `{"Tasks": "clean build"}` map and the CI host's
//! envelope form `{"Tasks": {"value": "clean build"}}`. Booleans and numbers
//! read as their JSON text, so `{"Offline": true}` is the flag `"true"`.
//! `null`, arrays and envelopes without a value read as absent.

use super::{GradleProperty, PropertySource};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A single property value as it appears in a configuration file
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Plain(String),
    Bool(bool),
    Number(serde_json::Number),
    Envelope { value: Option<Box<PropertyValue>> },
    Unsupported(serde_json::Value),
}

impl PropertyValue {
    /// The property as a string, or `None` when it carries no usable scalar
    pub fn into_string(self) -> Option<String> {
        match self {
            PropertyValue::Plain(v) => Some(v),
            PropertyValue::Bool(b) => Some(b.to_string()),
            PropertyValue::Number(n) => Some(n.to_string()),
            PropertyValue::Envelope { value } => value?.into_string(),
            PropertyValue::Unsupported(_) => None,
        }
    }
}

/// Property values for one Gradle task, keyed by property name
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(
    from = "BTreeMap<String, Option<PropertyValue>>",
    into = "BTreeMap<String, String>"
)]
pub struct TaskConfiguration {
    values: BTreeMap<String, String>,
}

impl From<BTreeMap<String, Option<PropertyValue>>> for TaskConfiguration {
    fn from(raw: BTreeMap<String, Option<PropertyValue>>) -> Self {
        let values = raw
            .into_iter()
            .filter_map(|(key, value)| Some((key, value?.into_string()?)))
            .collect();
        Self { values }
    }
}

impl From<TaskConfiguration> for BTreeMap<String, String> {
    fn from(config: TaskConfiguration) -> Self {
        config.values
    }
}

impl TaskConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a task configuration file
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!("Loading task configuration from {:?}", path);
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Fill keys that are missing with the defaults of the known properties
    pub fn with_defaults(mut self) -> Self {
        for property in GradleProperty::ALL {
            if let Some(default) = property.default_value() {
                self.values
                    .entry(property.key().to_string())
                    .or_insert_with(|| default.to_string());
            }
        }
        self
    }

    /// Keys that do not belong to any known property
    pub fn unknown_keys(&self) -> impl Iterator<Item = &str> {
        self.values
            .keys()
            .map(String::as_str)
            .filter(|key| GradleProperty::from_key(key).is_none())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl PropertySource for TaskConfiguration {
    fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}
