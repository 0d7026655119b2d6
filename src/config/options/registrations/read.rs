//! Read options registration

use crate::config::options::keys;
use crate::config::options::{OptionDefBuilder, OptionsRegistry};
use anyhow::Result;

/// Register all read-side options
pub fn register(registry: &mut OptionsRegistry) -> Result<()> {
    registry.register(
        OptionDefBuilder::new("read", keys::READ_TASKS)
            .description("Parallelism of tasks that do actual read, default is 4")
            .int_type(4)
            .build()?,
    )?;

    // Schema, either as a file or inline
    registry.register(
        OptionDefBuilder::new("read", keys::READ_AVRO_SCHEMA_PATH)
            .description("Avro schema file path, the parsed schema is used for deserialization")
            .string_type_no_default()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("read", keys::READ_AVRO_SCHEMA)
            .description("Avro schema string, the parsed schema is used for deserialization")
            .string_type_no_default()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("read", keys::QUERY_TYPE)
            .description(
                "Decides how data files need to be read, in\n\
                 1) Snapshot mode (obtain latest view, based on row & columnar data);\n\
                 2) incremental mode (new data since an instantTime);\n\
                 3) Read Optimized mode (obtain latest view, based on columnar data)\n.\
                 Default: snapshot",
            )
            .enum_type(
                &[
                    keys::QUERY_TYPE_SNAPSHOT,
                    keys::QUERY_TYPE_INCREMENTAL,
                    keys::QUERY_TYPE_READ_OPTIMIZED,
                ],
                keys::QUERY_TYPE_SNAPSHOT,
            )
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("read", keys::MERGE_TYPE)
            .description(
                "For Snapshot query on merge on read table. Use this key to define how the payloads are merged, in\n\
                 1) skip_merge: read the base file records plus the log file records;\n\
                 2) payload_combine: read the base file records first, for each record in base file, checks whether the key is in the\n   \
                 log file records(combines the two records with same key for base and log file records), then read the left log file records",
            )
            .enum_type(
                &[keys::REALTIME_SKIP_MERGE, keys::REALTIME_PAYLOAD_COMBINE],
                keys::REALTIME_PAYLOAD_COMBINE,
            )
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("read", keys::HIVE_STYLE_PARTITION)
            .description(
                "Whether the partition path is with Hive style, e.g. '{partition key}={partition value}', default false",
            )
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("read", keys::UTC_TIMEZONE)
            .description(
                "Use UTC timezone or local timezone to the conversion between epoch \
                 time and LocalDateTime. Hive 0.x/1.x/2.x use local timezone. But Hive 3.x \
                 use UTC timezone, by default true",
            )
            .bool_type(true)
            .build()?,
    )?;

    // Streaming read
    registry.register(
        OptionDefBuilder::new("read", keys::READ_AS_STREAMING)
            .description("Whether to read as streaming source, default false")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("read", keys::READ_STREAMING_CHECK_INTERVAL)
            .description("Check interval for streaming read of SECOND, default 1 minute")
            .int_type(60)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("read", keys::READ_STREAMING_START_COMMIT)
            .description(
                "Start commit instant for streaming read, the commit time format should be 'yyyyMMddHHmmss', \
                 by default reading from the latest instant",
            )
            .string_type_no_default()
            .build()?,
    )?;

    log::info!("Registered {} read options", 10);
    Ok(())
}
