//! Task configuration access
//!
//! The resolver never owns task configuration. It queries a [`PropertySource`]
//! on demand and interprets the raw strings with the helpers below.

pub mod properties;
pub mod task_config;

pub use properties::GradleProperty;
pub use task_config::{PropertyValue, TaskConfiguration};

use std::collections::HashMap;

/// Read-only lookup of task properties by key
pub trait PropertySource {
    fn get(&self, key: &str) -> Option<&str>;
}

impl PropertySource for HashMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl PropertySource for HashMap<&str, &str> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).copied()
    }
}

impl<T: PropertySource + ?Sized> PropertySource for &T {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

/// True when the value is absent, empty or whitespace only
pub fn is_blank(value: Option<&str>) -> bool {
    value.is_none_or(|v| v.trim().is_empty())
}

/// Returns the value only when it carries something other than whitespace
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// A flag property is on only for the literal `true`, compared case-insensitively.
///
/// Surrounding whitespace is not trimmed, so `" true"` is off.
pub fn is_truthy(value: Option<&str>) -> bool {
    non_blank(value).is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// Splits on runs of whitespace, dropping empty tokens
pub fn split_tokens(value: Option<&str>) -> Vec<String> {
    non_blank(value)
        .map(|v| v.split_whitespace().map(str::to_string).collect())
        .unwrap_or_default()
}
