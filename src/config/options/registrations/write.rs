//! Write options registration

use crate::config::options::keys;
use crate::config::options::{OptionDefBuilder, OptionsRegistry};
use anyhow::Result;

/// Register all write-side options
pub fn register(registry: &mut OptionsRegistry) -> Result<()> {
    // Table identity
    registry.register(
        OptionDefBuilder::new("write", keys::TABLE_NAME)
            .description("Table name to register to Hive metastore")
            .string_type_no_default()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::TABLE_TYPE)
            .description("Type of table to write. COPY_ON_WRITE (or) MERGE_ON_READ")
            .enum_type(
                &[keys::TABLE_TYPE_COPY_ON_WRITE, keys::TABLE_TYPE_MERGE_ON_READ],
                keys::TABLE_TYPE_COPY_ON_WRITE,
            )
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::OPERATION)
            .description("The write operation, that this write should do")
            .string_type("upsert")
            .build()?,
    )?;

    // Record merging
    registry.register(
        OptionDefBuilder::new("write", keys::PRECOMBINE_FIELD)
            .description(
                "Field used in preCombining before actual write. When two records have the same\n\
                 key value, we will pick the one with the largest value for the precombine field,\n\
                 determined by the natural ordering of the field values",
            )
            .string_type("ts")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::PAYLOAD_CLASS)
            .description(
                "Payload class used. Override this, if you like to roll your own merge logic, when upserting/inserting.\n\
                 This will render any value set for the option in-effective",
            )
            .string_type(keys::DEFAULT_PAYLOAD_CLASS)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::INSERT_DROP_DUPS)
            .description(
                "Flag to indicate whether to drop duplicates upon insert.\n\
                 By default insert will accept duplicates, to gain extra performance",
            )
            .bool_type(false)
            .build()?,
    )?;

    // Checkpoint retries, consumed by the writer
    registry.register(
        OptionDefBuilder::new("write", keys::RETRY_TIMES)
            .description(
                "Flag to indicate how many times streaming job should retry for a failed checkpoint batch.\n\
                 By default 3",
            )
            .int_type(3)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::RETRY_INTERVAL_MS)
            .description(
                "Flag to indicate how long (by millisecond) before a retry should issued for failed checkpoint batch.\n\
                 By default 2000 and it will be doubled by every retry",
            )
            .long_type(2000)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::IGNORE_FAILED)
            .description(
                "Flag to indicate whether to ignore any non exception error (e.g. writestatus error). within a checkpoint batch.\n\
                 By default true (in favor of streaming progressing over data integrity)",
            )
            .bool_type(true)
            .build()?,
    )?;

    // Keys and partitioning
    registry.register(
        OptionDefBuilder::new("write", keys::RECORD_KEY_FIELD)
            .description(
                "Record key field. Value to be used as the `recordKey` component of `HoodieKey`.\n\
                 Actual value will be obtained by converting the field value to a string. Nested fields can be specified using \
                 the dot notation eg: `a.b.c`",
            )
            .string_type("uuid")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::PARTITION_PATH_FIELD)
            .description(
                "Partition path field. Value to be used at the `partitionPath` component of `HoodieKey`.\n\
                 Actual value obtained by converting the field value to a string",
            )
            .string_type("partition-path")
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::PARTITION_PATH_URL_ENCODE)
            .description("Whether to encode the partition path url, default false")
            .bool_type(false)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::KEYGEN_CLASS)
            .description(
                "Key generator class, that implements will extract the key out of incoming record",
            )
            .string_type(keys::DEFAULT_KEYGEN_CLASS)
            .build()?,
    )?;

    // Parallelism and buffers
    registry.register(
        OptionDefBuilder::new("write", keys::WRITE_TASKS)
            .description("Parallelism of tasks that do actual write, default is 4")
            .int_type(4)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::WRITE_BATCH_SIZE)
            .description(
                "Batch buffer size in MB to flush data into the underneath filesystem, default 64MB",
            )
            .double_type(64.0)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::WRITE_LOG_BLOCK_SIZE)
            .description("Max log block size in MB for log file, default 128MB")
            .int_type(128)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("write", keys::WRITE_MERGE_MAX_MEMORY)
            .description("Max memory in MB for merge, default 100MB")
            .int_type(100)
            .build()?,
    )?;

    log::info!("Registered {} write options", 17);
    Ok(())
}
