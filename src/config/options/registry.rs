//! Registry of option definitions

use super::registrations;
use super::types::OptionDefinition;
use anyhow::Result;
use std::collections::HashMap;

/// Ordered set of option definitions.
///
/// Built once at startup and read-only afterwards; share it by reference.
#[derive(Debug, Clone, Default)]
pub struct OptionsRegistry {
    definitions: Vec<OptionDefinition>,
    index: HashMap<String, usize>,
}

impl OptionsRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the registry holding every table read/write option
    pub fn hoodie() -> Result<Self> {
        let mut registry = Self::new();
        registrations::register_all(&mut registry)?;
        log::debug!("Option registry ready with {} options", registry.len());
        Ok(registry)
    }

    /// Register a new option definition
    ///
    /// Returns an error if an option with the same key is already registered
    pub fn register(&mut self, def: OptionDefinition) -> Result<()> {
        if self.index.contains_key(&def.key) {
            anyhow::bail!("Option '{}' is already registered", def.key);
        }
        log::debug!("Registered option: {} ({})", def.key, def.value_type);
        self.index.insert(def.key.clone(), self.definitions.len());
        self.definitions.push(def);
        Ok(())
    }

    /// Get option definition by key
    pub fn get(&self, key: &str) -> Option<&OptionDefinition> {
        self.index.get(key).map(|&i| &self.definitions[i])
    }

    /// Get option definition by key, failing if it is not registered
    pub fn require(&self, key: &str) -> Result<&OptionDefinition> {
        self.get(key)
            .ok_or_else(|| anyhow::anyhow!("Option '{}' is not registered", key))
    }

    /// Check if an option is registered
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Every registered option, in registration order
    pub fn all_options(&self) -> &[OptionDefinition] {
        &self.definitions
    }

    /// Every option except the base table path, which has to be supplied by the user
    pub fn optional_options(&self) -> Vec<&OptionDefinition> {
        self.definitions
            .iter()
            .filter(|def| !def.is_required())
            .collect()
    }

    /// List all options in a group, in registration order
    pub fn list_group(&self, group: &str) -> Vec<&OptionDefinition> {
        self.definitions
            .iter()
            .filter(|def| def.group == group)
            .collect()
    }

    /// Get all groups in the order they were first registered
    pub fn groups(&self) -> Vec<&str> {
        let mut groups: Vec<&str> = Vec::new();
        for def in &self.definitions {
            if !groups.contains(&def.group.as_str()) {
                groups.push(&def.group);
            }
        }
        groups
    }

    /// Get total number of registered options
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
