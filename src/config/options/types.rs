//! Core types for the options system

use super::keys;
use anyhow::Result;
use std::fmt;

/// The declared type of an option
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    String,
    Boolean,
    Integer,
    Long,
    Double,
}

impl ValueType {
    pub fn name(&self) -> &'static str {
        match self {
            ValueType::String => "string",
            ValueType::Boolean => "boolean",
            ValueType::Integer => "integer",
            ValueType::Long => "long",
            ValueType::Double => "double",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// A value held by a configuration, either typed or as the raw string it arrived as
#[derive(Debug, Clone, PartialEq)]
pub enum OptionValue {
    Bool(bool),
    Int(i32),
    Long(i64),
    Double(f64),
    String(String),
}

impl OptionValue {
    /// The type this value was stored with
    pub fn value_type(&self) -> ValueType {
        match self {
            OptionValue::Bool(_) => ValueType::Boolean,
            OptionValue::Int(_) => ValueType::Integer,
            OptionValue::Long(_) => ValueType::Long,
            OptionValue::Double(_) => ValueType::Double,
            OptionValue::String(_) => ValueType::String,
        }
    }

    /// Get as bool, returning error if wrong type
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            OptionValue::Bool(v) => Ok(*v),
            _ => anyhow::bail!("Expected Bool, got {:?}", self),
        }
    }

    /// Get as int, returning error if wrong type
    pub fn as_int(&self) -> Result<i32> {
        match self {
            OptionValue::Int(v) => Ok(*v),
            _ => anyhow::bail!("Expected Int, got {:?}", self),
        }
    }

    /// Get as long, returning error if wrong type
    pub fn as_long(&self) -> Result<i64> {
        match self {
            OptionValue::Long(v) => Ok(*v),
            _ => anyhow::bail!("Expected Long, got {:?}", self),
        }
    }

    /// Get as double, returning error if wrong type
    pub fn as_double(&self) -> Result<f64> {
        match self {
            OptionValue::Double(v) => Ok(*v),
            _ => anyhow::bail!("Expected Double, got {:?}", self),
        }
    }

    /// Get as string, returning error if wrong type
    pub fn as_string(&self) -> Result<String> {
        match self {
            OptionValue::String(v) => Ok(v.clone()),
            _ => anyhow::bail!("Expected String, got {:?}", self),
        }
    }

    /// Convert to the requested type.
    ///
    /// Strings are parsed (trimmed, booleans case-insensitive), numbers widen where
    /// lossless, and every value has a string form.
    pub fn coerce(&self, ty: ValueType) -> Result<OptionValue> {
        let coerced = match (ty, self) {
            (ValueType::String, value) => Some(OptionValue::String(value.to_string())),

            (ValueType::Boolean, OptionValue::Bool(v)) => Some(OptionValue::Bool(*v)),
            (ValueType::Boolean, OptionValue::String(raw)) => {
                let raw = raw.trim();
                if raw.eq_ignore_ascii_case("true") {
                    Some(OptionValue::Bool(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Some(OptionValue::Bool(false))
                } else {
                    None
                }
            }

            (ValueType::Integer, OptionValue::Int(v)) => Some(OptionValue::Int(*v)),
            (ValueType::Integer, OptionValue::Long(v)) => {
                i32::try_from(*v).ok().map(OptionValue::Int)
            }
            (ValueType::Integer, OptionValue::String(raw)) => {
                raw.trim().parse::<i32>().ok().map(OptionValue::Int)
            }

            (ValueType::Long, OptionValue::Int(v)) => Some(OptionValue::Long(i64::from(*v))),
            (ValueType::Long, OptionValue::Long(v)) => Some(OptionValue::Long(*v)),
            (ValueType::Long, OptionValue::String(raw)) => {
                raw.trim().parse::<i64>().ok().map(OptionValue::Long)
            }

            (ValueType::Double, OptionValue::Int(v)) => Some(OptionValue::Double(f64::from(*v))),
            (ValueType::Double, OptionValue::Long(v)) => Some(OptionValue::Double(*v as f64)),
            (ValueType::Double, OptionValue::Double(v)) => Some(OptionValue::Double(*v)),
            (ValueType::Double, OptionValue::String(raw)) => {
                raw.trim().parse::<f64>().ok().map(OptionValue::Double)
            }

            _ => None,
        };

        coerced.ok_or_else(|| anyhow::anyhow!("Could not convert '{}' to {}", self, ty))
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Bool(v) => write!(f, "{}", v),
            OptionValue::Int(v) => write!(f, "{}", v),
            OptionValue::Long(v) => write!(f, "{}", v),
            OptionValue::Double(v) => write!(f, "{}", v),
            OptionValue::String(v) => f.write_str(v),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(v: bool) -> Self {
        OptionValue::Bool(v)
    }
}

impl From<i32> for OptionValue {
    fn from(v: i32) -> Self {
        OptionValue::Int(v)
    }
}

impl From<i64> for OptionValue {
    fn from(v: i64) -> Self {
        OptionValue::Long(v)
    }
}

impl From<f64> for OptionValue {
    fn from(v: f64) -> Self {
        OptionValue::Double(v)
    }
}

impl From<&str> for OptionValue {
    fn from(v: &str) -> Self {
        OptionValue::String(v.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(v: String) -> Self {
        OptionValue::String(v)
    }
}

/// Complete definition of a single named, typed option
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDefinition {
    /// Full key as operators write it (e.g., "write.tasks")
    pub key: String,

    /// Registration group (e.g., "write", "hive_sync")
    pub group: String,

    /// Declared type, used to coerce stored values on read
    pub value_type: ValueType,

    /// Default value, `None` when the option must be supplied
    pub default: Option<OptionValue>,

    /// Detailed description for help text
    pub description: String,

    /// Documented legal values for enumerated string options.
    ///
    /// Informational; the registry never rejects a value that is not listed.
    pub allowed_values: Vec<String>,
}

impl OptionDefinition {
    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    /// Whether the user has to supply this option.
    ///
    /// Only the base table path is; options without a default are simply unset.
    pub fn is_required(&self) -> bool {
        self.key == keys::PATH
    }

    /// Whether `value` is one of the documented legal values.
    ///
    /// Options without a documented value set accept anything.
    pub fn accepts(&self, value: &str) -> bool {
        self.allowed_values.is_empty() || self.allowed_values.iter().any(|v| v == value)
    }
}
