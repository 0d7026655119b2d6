//! Hive sync options registration

use crate::config::options::keys;
use crate::config::options::{OptionDefBuilder, OptionsRegistry};
use anyhow::Result;

/// Register all Hive metastore sync options
pub fn register(registry: &mut OptionsRegistry) -> Result<()> {
    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_ENABLED)
            .description("Asynchronously sync Hive meta to HMS, default false")
            .bool_type(false)
            .build()?,
    )?;

    // Target database and table
    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_DB)
            .description("Database name for hive sync, default 'default'")
            .string_type("default")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_TABLE)
            .description("Table name for hive sync, default 'unknown'")
            .string_type("unknown")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_FILE_FORMAT)
            .description("File format for hive sync, default 'PARQUET'")
            .string_type("PARQUET")
            .build()?,
    )?;

    // Connection
    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_USERNAME)
            .description("Username for hive sync, default 'hive'")
            .string_type("hive")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_PASSWORD)
            .description("Password for hive sync, default 'hive'")
            .string_type("hive")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_JDBC_URL)
            .description("Jdbc URL for hive sync, default 'jdbc:hive2://localhost:10000'")
            .string_type("jdbc:hive2://localhost:10000")
            .build()?,
    )?;

    // Partitioning
    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_PARTITION_FIELDS)
            .description("Partition fields for hive sync, default ''")
            .string_type("")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_PARTITION_EXTRACTOR_CLASS)
            .description(
                "Tool to extract the partition value from HDFS path, \
                 default 'SlashEncodedDayPartitionValueExtractor'",
            )
            .string_type(keys::DEFAULT_PARTITION_EXTRACTOR_CLASS)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_ASSUME_DATE_PARTITION)
            .description("Assume partitioning is yyyy/mm/dd, default false")
            .bool_type(false)
            .build()?,
    )?;

    // Behavior
    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_USE_JDBC)
            .description("Use JDBC when hive synchronization is enabled, default true")
            .bool_type(true)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_AUTO_CREATE_DB)
            .description("Auto create hive database if it does not exists, default true")
            .bool_type(true)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_IGNORE_EXCEPTIONS)
            .description("Ignore exceptions during hive synchronization, default false")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_SKIP_RO_SUFFIX)
            .description(
                "Skip the _ro suffix for Read optimized table when registering, default false",
            )
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("hive_sync", keys::HIVE_SYNC_SUPPORT_TIMESTAMP)
            .description(
                "INT64 with original type TIMESTAMP_MICROS is converted to hive timestamp type.\n\
                 Disabled by default for backward compatibility.",
            )
            .bool_type(false)
            .build()?,
    )?;

    log::info!("Registered {} hive sync options", 15);
    Ok(())
}
