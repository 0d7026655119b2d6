//! Legacy field-based streamer configuration and its bridge into `Configuration`

use crate::config::options::{Configuration, keys};
use crate::config::properties::from_map;
use crate::config::props_file;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Write operation requested by a streamer job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(try_from = "String")]
pub enum WriteOperationType {
    #[value(name = "insert")]
    Insert,
    #[default]
    #[value(name = "upsert")]
    Upsert,
    #[value(name = "bulk_insert")]
    BulkInsert,
    #[value(name = "delete")]
    Delete,
    #[value(name = "insert_overwrite")]
    InsertOverwrite,
    #[value(name = "insert_overwrite_table")]
    InsertOverwriteTable,
}

impl WriteOperationType {
    /// The token stored under `write.operation`
    pub fn value(&self) -> &'static str {
        match self {
            WriteOperationType::Insert => "insert",
            WriteOperationType::Upsert => "upsert",
            WriteOperationType::BulkInsert => "bulk_insert",
            WriteOperationType::Delete => "delete",
            WriteOperationType::InsertOverwrite => "insert_overwrite",
            WriteOperationType::InsertOverwriteTable => "insert_overwrite_table",
        }
    }
}

impl fmt::Display for WriteOperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value())
    }
}

impl FromStr for WriteOperationType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        <WriteOperationType as ValueEnum>::from_str(s.trim(), true)
            .map_err(|_| anyhow::anyhow!("Unknown write operation '{}'", s))
    }
}

impl TryFrom<String> for WriteOperationType {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// The legacy streamer job configuration.
///
/// Accepted from the command line or from a TOML file with the same field names.
#[derive(Debug, Clone, Args, Deserialize)]
pub struct StreamerConfig {
    /// Base path for the target hoodie table
    #[arg(long = "target-base-path")]
    pub target_base_path: String,

    /// Avro schema file path used for deserialization
    #[arg(long = "read-schema-path")]
    #[serde(default)]
    pub read_schema_file_path: Option<String>,

    /// Name of the target table
    #[arg(long = "target-table")]
    pub target_table_name: String,

    /// Type of table, COPY_ON_WRITE or MERGE_ON_READ (case-insensitive)
    #[arg(long = "table-type", default_value = keys::TABLE_TYPE_COPY_ON_WRITE)]
    #[serde(default = "default_table_type")]
    pub table_type: String,

    /// Properties file with free-form job properties
    #[arg(long = "props")]
    #[serde(default, rename = "props")]
    pub props_file_path: Option<PathBuf>,

    /// Extra property in key=value form, overrides the properties file (repeatable)
    #[arg(long = "hoodie-conf", value_name = "KEY=VALUE")]
    #[serde(default, rename = "hoodie_conf")]
    pub configs: Vec<String>,

    /// Write operation
    #[arg(long = "op", value_enum, ignore_case = true, default_value_t = WriteOperationType::Upsert)]
    #[serde(default)]
    pub operation: WriteOperationType,

    /// Field used to pick the latest of two records with the same key
    #[arg(long = "source-ordering-field", default_value = "ts")]
    #[serde(default = "default_source_ordering_field")]
    pub source_ordering_field: String,

    /// Payload class implementing the merge logic
    #[arg(long = "payload-class", default_value = keys::DEFAULT_PAYLOAD_CLASS)]
    #[serde(default = "default_payload_class_name")]
    pub payload_class_name: String,

    /// Drop duplicates upon insert
    #[arg(long = "filter-dupes")]
    #[serde(default)]
    pub filter_dupes: bool,

    /// How many times a failed checkpoint batch is retried
    #[arg(long = "instant-retry-times", default_value = "3")]
    #[serde(default = "default_instant_retry_times")]
    pub instant_retry_times: String,

    /// Milliseconds before retrying a failed checkpoint batch
    #[arg(long = "instant-retry-interval", default_value = "2000")]
    #[serde(default = "default_instant_retry_interval")]
    pub instant_retry_interval: String,

    /// Commit even when some records failed to write
    #[arg(long = "commit-on-errors")]
    #[serde(default)]
    pub commit_on_errors: bool,

    /// Record key field
    #[arg(long = "record-key-field", default_value = "uuid")]
    #[serde(default = "default_record_key_field")]
    pub record_key_field: String,

    /// Partition path field
    #[arg(long = "partition-path-field", default_value = "partition-path")]
    #[serde(default = "default_partition_path_field")]
    pub partition_path_field: String,

    /// Key generator class
    #[arg(long = "keygen-class", default_value = keys::DEFAULT_KEYGEN_CLASS)]
    #[serde(default = "default_keygen_class")]
    pub keygen_class: String,

    /// Parallelism of write tasks
    #[arg(long = "write-task-num", default_value_t = 4)]
    #[serde(default = "default_write_task_num")]
    pub write_task_num: i32,
}

fn default_table_type() -> String {
    keys::TABLE_TYPE_COPY_ON_WRITE.to_string()
}

fn default_source_ordering_field() -> String {
    "ts".to_string()
}

fn default_payload_class_name() -> String {
    keys::DEFAULT_PAYLOAD_CLASS.to_string()
}

fn default_instant_retry_times() -> String {
    "3".to_string()
}

fn default_instant_retry_interval() -> String {
    "2000".to_string()
}

fn default_record_key_field() -> String {
    "uuid".to_string()
}

fn default_partition_path_field() -> String {
    "partition-path".to_string()
}

fn default_keygen_class() -> String {
    keys::DEFAULT_KEYGEN_CLASS.to_string()
}

fn default_write_task_num() -> i32 {
    4
}

impl StreamerConfig {
    /// A config for `target_base_path`/`target_table_name` with every other field defaulted
    pub fn new(target_base_path: impl Into<String>, target_table_name: impl Into<String>) -> Self {
        Self {
            target_base_path: target_base_path.into(),
            read_schema_file_path: None,
            target_table_name: target_table_name.into(),
            table_type: default_table_type(),
            props_file_path: None,
            configs: Vec::new(),
            operation: WriteOperationType::default(),
            source_ordering_field: default_source_ordering_field(),
            payload_class_name: default_payload_class_name(),
            filter_dupes: false,
            instant_retry_times: default_instant_retry_times(),
            instant_retry_interval: default_instant_retry_interval(),
            commit_on_errors: false,
            record_key_field: default_record_key_field(),
            partition_path_field: default_partition_path_field(),
            keygen_class: default_keygen_class(),
            write_task_num: default_write_task_num(),
        }
    }

    /// Parse a legacy config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse legacy streamer config")
    }

    /// Load a legacy config from a TOML file
    pub fn from_toml_file(path: &Path) -> Result<Self> {
        log::debug!("Loading legacy streamer config from: {:?}", path);

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read legacy config file: {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse legacy config file: {:?}", path))
    }

    /// Free-form job properties: the properties file, then every `--hoodie-conf` entry on top
    pub fn props(&self) -> Result<HashMap<String, String>> {
        let mut props = match &self.props_file_path {
            Some(path) => props_file::load(path)?,
            None => HashMap::new(),
        };

        for entry in &self.configs {
            let (key, value) = entry.split_once('=').ok_or_else(|| {
                anyhow::anyhow!("Invalid --hoodie-conf entry '{}', expected KEY=VALUE", entry)
            })?;
            props.insert(key.trim().to_string(), value.trim().to_string());
        }

        Ok(props)
    }
}

/// Build a configuration from a legacy streamer config.
///
/// Starts from the free-form properties and overlays the dedicated fields, which
/// always take precedence over properties of the same name.
pub fn from_streamer_config(config: &StreamerConfig) -> Result<Configuration> {
    let mut conf = from_map(config.props()?);

    conf.set_string(keys::PATH, config.target_base_path.as_str());
    if let Some(schema_path) = &config.read_schema_file_path {
        conf.set_string(keys::READ_AVRO_SCHEMA_PATH, schema_path.as_str());
    }
    conf.set_string(keys::TABLE_NAME, config.target_table_name.as_str());
    // copy_on_write works the same as COPY_ON_WRITE
    conf.set_string(keys::TABLE_TYPE, config.table_type.to_uppercase());
    conf.set_string(keys::OPERATION, config.operation.value());
    conf.set_string(keys::PRECOMBINE_FIELD, config.source_ordering_field.as_str());
    conf.set_string(keys::PAYLOAD_CLASS, config.payload_class_name.as_str());
    conf.set_bool(keys::INSERT_DROP_DUPS, config.filter_dupes);

    let retry_times = config
        .instant_retry_times
        .trim()
        .parse::<i32>()
        .with_context(|| {
            format!("Invalid instant retry times '{}'", config.instant_retry_times)
        })?;
    conf.set_integer(keys::RETRY_TIMES, retry_times);

    let retry_interval = config
        .instant_retry_interval
        .trim()
        .parse::<i64>()
        .with_context(|| {
            format!("Invalid instant retry interval '{}'", config.instant_retry_interval)
        })?;
    conf.set_long(keys::RETRY_INTERVAL_MS, retry_interval);

    conf.set_bool(keys::IGNORE_FAILED, config.commit_on_errors);
    conf.set_string(keys::RECORD_KEY_FIELD, config.record_key_field.as_str());
    conf.set_string(keys::PARTITION_PATH_FIELD, config.partition_path_field.as_str());
    conf.set_string(keys::KEYGEN_CLASS, config.keygen_class.as_str());
    conf.set_integer(keys::WRITE_TASKS, config.write_task_num);

    log::info!(
        "Built configuration for table '{}' with {} entries",
        config.target_table_name,
        conf.len()
    );
    Ok(conf)
}
