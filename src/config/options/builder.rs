//! Fluent builder API for creating option definitions

use super::types::{OptionDefinition, OptionValue, ValueType};
use anyhow::Result;

/// Builder for creating option definitions with a fluent API
pub struct OptionDefBuilder {
    group: String,
    key: String,
    description: Option<String>,
    value_type: Option<ValueType>,
    default: Option<OptionValue>,
    no_default: bool,
    allowed_values: Vec<String>,
}

impl OptionDefBuilder {
    /// Create a new builder for the option `key`, registered under `group`
    pub fn new(group: &str, key: &str) -> Self {
        Self {
            group: group.to_string(),
            key: key.to_string(),
            description: None,
            value_type: None,
            default: None,
            no_default: false,
            allowed_values: Vec::new(),
        }
    }

    /// Set the description (help text)
    pub fn description(mut self, desc: &str) -> Self {
        self.description = Some(desc.to_string());
        self
    }

    /// Define as a boolean type with default value
    pub fn bool_type(mut self, default: bool) -> Self {
        self.value_type = Some(ValueType::Boolean);
        self.default = Some(OptionValue::Bool(default));
        self
    }

    /// Define as a 32-bit integer type with default value
    pub fn int_type(mut self, default: i32) -> Self {
        self.value_type = Some(ValueType::Integer);
        self.default = Some(OptionValue::Int(default));
        self
    }

    /// Define as a 64-bit integer type with default value
    pub fn long_type(mut self, default: i64) -> Self {
        self.value_type = Some(ValueType::Long);
        self.default = Some(OptionValue::Long(default));
        self
    }

    /// Define as a double type with default value
    pub fn double_type(mut self, default: f64) -> Self {
        self.value_type = Some(ValueType::Double);
        self.default = Some(OptionValue::Double(default));
        self
    }

    /// Define as a string type with default value
    pub fn string_type(mut self, default: &str) -> Self {
        self.value_type = Some(ValueType::String);
        self.default = Some(OptionValue::String(default.to_string()));
        self
    }

    /// Define as a string type that has no default and must be supplied
    pub fn string_type_no_default(mut self) -> Self {
        self.value_type = Some(ValueType::String);
        self.default = None;
        self.no_default = true;
        self
    }

    /// Define as a string type whose documented legal values are `variants`.
    ///
    /// The variants are recorded for help output only.
    pub fn enum_type(mut self, variants: &[&str], default: &str) -> Self {
        self.value_type = Some(ValueType::String);
        self.default = Some(OptionValue::String(default.to_string()));
        self.allowed_values = variants.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Build the option definition
    ///
    /// Returns an error if required fields are missing
    pub fn build(self) -> Result<OptionDefinition> {
        if self.key.is_empty() {
            anyhow::bail!("key is required");
        }
        let value_type = self.value_type.ok_or_else(|| {
            anyhow::anyhow!(
                "type is required for '{}' (use bool_type, int_type, string_type, etc.)",
                self.key
            )
        })?;
        if self.default.is_none() && !self.no_default {
            anyhow::bail!("default value is required for '{}'", self.key);
        }
        if let Some(default) = &self.default {
            if !self.allowed_values.is_empty() && !self.allowed_values.contains(&default.to_string()) {
                anyhow::bail!(
                    "default '{}' of '{}' is not one of {:?}",
                    default,
                    self.key,
                    self.allowed_values
                );
            }
        }

        Ok(OptionDefinition {
            key: self.key,
            group: self.group,
            value_type,
            default: self.default,
            description: self.description.unwrap_or_default(),
            allowed_values: self.allowed_values,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_builder() {
        let def = OptionDefBuilder::new("read", "read.streaming.enabled")
            .description("Whether to read as streaming source")
            .bool_type(false)
            .build()
            .unwrap();

        assert_eq!(def.key, "read.streaming.enabled");
        assert_eq!(def.group, "read");
        assert_eq!(def.description, "Whether to read as streaming source");
        assert_eq!(def.value_type, ValueType::Boolean);
        assert_eq!(def.default, Some(OptionValue::Bool(false)));
        assert!(def.allowed_values.is_empty());
    }

    #[test]
    fn test_long_builder() {
        let def = OptionDefBuilder::new("write", "write.retry.interval.ms")
            .long_type(2000)
            .build()
            .unwrap();

        assert_eq!(def.value_type, ValueType::Long);
        assert_eq!(def.default, Some(OptionValue::Long(2000)));
    }

    #[test]
    fn test_no_default_builder() {
        let def = OptionDefBuilder::new("base", "path")
            .description("Base path for the target table")
            .string_type_no_default()
            .build()
            .unwrap();

        assert_eq!(def.value_type, ValueType::String);
        assert!(!def.has_default());
    }

    #[test]
    fn test_enum_builder() {
        let def = OptionDefBuilder::new("compaction", "compaction.trigger.strategy")
            .enum_type(
                &["num_commits", "time_elapsed", "num_and_time", "num_or_time"],
                "num_commits",
            )
            .build()
            .unwrap();

        assert_eq!(def.value_type, ValueType::String);
        assert_eq!(def.default, Some(OptionValue::String("num_commits".to_string())));
        assert_eq!(def.allowed_values.len(), 4);
        assert!(def.allowed_values.contains(&"num_or_time".to_string()));
    }

    #[test]
    fn test_enum_default_must_be_a_variant() {
        let result = OptionDefBuilder::new("read", "hoodie.datasource.query.type")
            .enum_type(&["snapshot", "incremental"], "latest")
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_type() {
        let result = OptionDefBuilder::new("write", "write.tasks")
            .description("Parallelism")
            .build();

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_key() {
        let result = OptionDefBuilder::new("write", "").int_type(4).build();

        assert!(result.is_err());
    }
}
