//! Integration tests for the option registry and configuration helpers
//!
//! Covers the operator-facing key namespace, default detection and the
//! passthrough property helpers working together.

use hoodie_options::config::{
    Configuration, OptionValue, OptionsRegistry, ValueType, flat_options, from_map,
    get_hoodie_properties, is_default_value_defined, keys,
};
use std::collections::{HashMap, HashSet};

fn string_map(entries: &[(&str, &str)]) -> HashMap<String, String> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Test that the documented keys, types and defaults are all declared
#[test]
fn test_documented_keys_and_defaults() {
    let registry = OptionsRegistry::hoodie().unwrap();

    let expected: Vec<(&str, ValueType, Option<OptionValue>)> = vec![
        ("path", ValueType::String, None),
        ("partition.default_name", ValueType::String, Some("__DEFAULT_PARTITION__".into())),
        ("index.bootstrap.enabled", ValueType::Boolean, Some(false.into())),
        ("read.tasks", ValueType::Integer, Some(4i32.into())),
        ("hoodie.datasource.query.type", ValueType::String, Some("snapshot".into())),
        ("hoodie.datasource.merge.type", ValueType::String, Some("payload_combine".into())),
        ("hoodie.datasource.hive_style_partition", ValueType::Boolean, Some(false.into())),
        ("read.utc-timezone", ValueType::Boolean, Some(true.into())),
        ("read.streaming.enabled", ValueType::Boolean, Some(false.into())),
        ("read.streaming.check-interval", ValueType::Integer, Some(60i32.into())),
        ("table.type", ValueType::String, Some("COPY_ON_WRITE".into())),
        ("write.operation", ValueType::String, Some("upsert".into())),
        ("write.precombine.field", ValueType::String, Some("ts".into())),
        ("write.insert.drop.duplicates", ValueType::Boolean, Some(false.into())),
        ("write.retry.times", ValueType::Integer, Some(3i32.into())),
        ("write.retry.interval.ms", ValueType::Long, Some(2000i64.into())),
        ("write.ignore.failed", ValueType::Boolean, Some(true.into())),
        ("hoodie.datasource.write.recordkey.field", ValueType::String, Some("uuid".into())),
        ("hoodie.datasource.write.partitionpath.field", ValueType::String, Some("partition-path".into())),
        ("write.partition.url_encode", ValueType::Boolean, Some(false.into())),
        ("write.tasks", ValueType::Integer, Some(4i32.into())),
        ("write.batch.size.MB", ValueType::Double, Some(64.0.into())),
        ("write.log_block.size.MB", ValueType::Integer, Some(128i32.into())),
        ("write.merge.max_memory", ValueType::Integer, Some(100i32.into())),
        ("compaction.async.enabled", ValueType::Boolean, Some(true.into())),
        ("compaction.tasks", ValueType::Integer, Some(10i32.into())),
        ("compaction.trigger.strategy", ValueType::String, Some("num_commits".into())),
        ("compaction.delta_commits", ValueType::Integer, Some(5i32.into())),
        ("compaction.delta_seconds", ValueType::Integer, Some(3600i32.into())),
        ("compaction.max_memory", ValueType::Integer, Some(100i32.into())),
        ("clean.async.enabled", ValueType::Boolean, Some(true.into())),
        ("clean.retain_commits", ValueType::Integer, Some(10i32.into())),
        ("hive_sync.enable", ValueType::Boolean, Some(false.into())),
        ("hive_sync.file_format", ValueType::String, Some("PARQUET".into())),
        ("hive_sync.jdbc_url", ValueType::String, Some("jdbc:hive2://localhost:10000".into())),
        ("hive_sync.use_jdbc", ValueType::Boolean, Some(true.into())),
    ];

    for (key, value_type, default) in expected {
        let option = registry
            .get(key)
            .unwrap_or_else(|| panic!("option '{}' is not registered", key));
        assert_eq!(option.value_type, value_type, "type of {}", key);
        assert_eq!(option.default, default, "default of {}", key);
    }
}

/// Test that enumerated options document their legal values
#[test]
fn test_enumerated_options_document_values() {
    let registry = OptionsRegistry::hoodie().unwrap();

    let strategy = registry.require(keys::COMPACTION_TRIGGER_STRATEGY).unwrap();
    assert_eq!(
        strategy.allowed_values,
        vec!["num_commits", "time_elapsed", "num_and_time", "num_or_time"]
    );

    let table_type = registry.require(keys::TABLE_TYPE).unwrap();
    assert!(table_type.accepts("MERGE_ON_READ"));
    assert!(!table_type.accepts("merge_on_read"));
}

/// Test that every hive sync option lives in its own group
#[test]
fn test_hive_sync_group() {
    let registry = OptionsRegistry::hoodie().unwrap();
    let hive_sync = registry.list_group("hive_sync");

    assert_eq!(hive_sync.len(), 15);
    assert!(hive_sync.iter().all(|option| option.key.starts_with("hive_sync.")));
    assert_eq!(
        registry.groups(),
        vec!["base", "read", "write", "compaction", "clean", "hive_sync"]
    );
}

/// Test that all_options lists each option once and optional_options drops only the path
#[test]
fn test_all_and_optional_options() {
    let registry = OptionsRegistry::hoodie().unwrap();

    let all: Vec<&str> = registry.all_options().iter().map(|o| o.key.as_str()).collect();
    let unique: HashSet<&str> = all.iter().copied().collect();
    assert_eq!(all.len(), unique.len());
    assert_eq!(all[0], keys::PATH);

    let optional: HashSet<&str> = registry
        .optional_options()
        .into_iter()
        .map(|o| o.key.as_str())
        .collect();
    let missing: Vec<_> = unique.difference(&optional).collect();
    assert_eq!(missing, vec![&keys::PATH]);
}

/// Test default detection across a fresh and an edited configuration
#[test]
fn test_default_detection() {
    let registry = OptionsRegistry::hoodie().unwrap();
    let mut conf = Configuration::new();

    let batch_size = registry.require(keys::WRITE_BATCH_SIZE).unwrap();
    assert!(is_default_value_defined(&conf, batch_size));

    conf.set_string(keys::WRITE_BATCH_SIZE, "64");
    assert!(is_default_value_defined(&conf, batch_size));

    conf.set_double(keys::WRITE_BATCH_SIZE, 128.0);
    assert!(!is_default_value_defined(&conf, batch_size));

    let use_jdbc = registry.require(keys::HIVE_SYNC_USE_JDBC).unwrap();
    conf.set_string(keys::HIVE_SYNC_USE_JDBC, "TRUE");
    assert!(is_default_value_defined(&conf, use_jdbc));
}

/// Test typed reads of string values that came from a map
#[test]
fn test_lazy_conversion_from_map() {
    let registry = OptionsRegistry::hoodie().unwrap();
    let conf = from_map(string_map(&[
        (keys::READ_AS_STREAMING, "true"),
        (keys::RETRY_INTERVAL_MS, "8000"),
        (keys::WRITE_BATCH_SIZE, "12.5"),
    ]));

    let streaming = registry.require(keys::READ_AS_STREAMING).unwrap();
    let interval = registry.require(keys::RETRY_INTERVAL_MS).unwrap();
    let batch = registry.require(keys::WRITE_BATCH_SIZE).unwrap();
    let path = registry.require(keys::PATH).unwrap();

    assert_eq!(conf.get_bool(streaming).unwrap(), Some(true));
    assert_eq!(conf.get_long(interval).unwrap(), Some(8000));
    assert_eq!(conf.get_double(batch).unwrap(), Some(12.5));
    assert_eq!(conf.get_string(path).unwrap(), None);
}

/// Test that passthrough properties are unwrapped
#[test]
fn test_flat_options_from_map() {
    let conf = from_map(string_map(&[("a", "1"), ("properties.b", "2")]));
    let flat = flat_options(&conf);

    assert_eq!(flat.to_map(), string_map(&[("a", "1"), ("b", "2")]));
}

/// Test that only prefixed keys are collected
#[test]
fn test_get_hoodie_properties() {
    let props = get_hoodie_properties(&string_map(&[("properties.x", "y"), ("z", "w")]));
    assert_eq!(props, string_map(&[("x", "y")]));
}

/// Test that a configuration survives a trip through its string map
#[test]
fn test_map_round_trip() {
    let registry = OptionsRegistry::hoodie().unwrap();
    let mut conf = Configuration::new();
    conf.set_string(keys::PATH, "/data/t1");
    conf.set_bool(keys::HIVE_SYNC_ENABLED, true);
    conf.set_integer(keys::COMPACTION_DELTA_COMMITS, 7);
    conf.set_long(keys::RETRY_INTERVAL_MS, 10_000);
    conf.set_double(keys::WRITE_BATCH_SIZE, 96.0);
    conf.set_string("properties.hoodie.index.type", "BLOOM");

    let copy = from_map(conf.to_map());

    assert_eq!(copy.to_map(), conf.to_map());
    for option in registry.all_options() {
        assert_eq!(copy.get(option).unwrap(), conf.get(option).unwrap(), "{}", option.key);
    }
}
