//! In-memory configuration holding option values for one job

use super::types::{OptionDefinition, OptionValue};
use anyhow::{Context, Result};
use std::collections::HashMap;

/// Mutable key/value configuration, read through option definitions.
///
/// Values keep the form they were written in; conversion to the option's declared
/// type happens on read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Configuration {
    values: HashMap<String, OptionValue>,
}

impl Configuration {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value for `option`, falling back to its default.
    ///
    /// Returns `None` when the option is unset and has no default.
    pub fn get(&self, option: &OptionDefinition) -> Result<Option<OptionValue>> {
        match self.get_optional(option)? {
            Some(value) => Ok(Some(value)),
            None => Ok(option.default.clone()),
        }
    }

    /// Get the explicitly set value for `option`, converted to its declared type
    pub fn get_optional(&self, option: &OptionDefinition) -> Result<Option<OptionValue>> {
        let Some(raw) = self.values.get(&option.key) else {
            return Ok(None);
        };
        raw.coerce(option.value_type)
            .map(Some)
            .with_context(|| format!("Invalid value for option '{}'", option.key))
    }

    /// Get bool value
    pub fn get_bool(&self, option: &OptionDefinition) -> Result<Option<bool>> {
        self.get(option)?.map(|v| v.as_bool()).transpose()
    }

    /// Get 32-bit integer value
    pub fn get_integer(&self, option: &OptionDefinition) -> Result<Option<i32>> {
        self.get(option)?.map(|v| v.as_int()).transpose()
    }

    /// Get 64-bit integer value
    pub fn get_long(&self, option: &OptionDefinition) -> Result<Option<i64>> {
        self.get(option)?.map(|v| v.as_long()).transpose()
    }

    /// Get double value
    pub fn get_double(&self, option: &OptionDefinition) -> Result<Option<f64>> {
        self.get(option)?.map(|v| v.as_double()).transpose()
    }

    /// Get string value
    pub fn get_string(&self, option: &OptionDefinition) -> Result<Option<String>> {
        self.get(option)?.map(|v| v.as_string()).transpose()
    }

    /// Get the raw stored value for a key, without conversion
    pub fn get_raw(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Set a value for `key`, replacing any previous one
    pub fn set(&mut self, key: &str, value: impl Into<OptionValue>) {
        let value = value.into();
        log::debug!("Set option: {} = {}", key, value);
        self.values.insert(key.to_string(), value);
    }

    /// Set string value
    pub fn set_string(&mut self, key: &str, value: impl Into<String>) {
        self.set(key, OptionValue::String(value.into()));
    }

    /// Set bool value
    pub fn set_bool(&mut self, key: &str, value: bool) {
        self.set(key, OptionValue::Bool(value));
    }

    /// Set 32-bit integer value
    pub fn set_integer(&mut self, key: &str, value: i32) {
        self.set(key, OptionValue::Int(value));
    }

    /// Set 64-bit integer value
    pub fn set_long(&mut self, key: &str, value: i64) {
        self.set(key, OptionValue::Long(value));
    }

    /// Set double value
    pub fn set_double(&mut self, key: &str, value: f64) {
        self.set(key, OptionValue::Double(value));
    }

    /// Remove a key, returning its stored value
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.values.remove(key)
    }

    /// Check whether a key has an explicit value
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Iterate over explicitly set keys
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Explicitly set entries in their string form; defaults are not included
    pub fn to_map(&self) -> HashMap<String, String> {
        self.values
            .iter()
            .map(|(key, value)| (key.clone(), value.to_string()))
            .collect()
    }
}
