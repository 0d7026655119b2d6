//! Option keys and documented option values.
//!
//! Keys are the operator-facing contract and must stay byte-for-byte stable.

// Base
pub const PATH: &str = "path";
pub const PARTITION_DEFAULT_NAME: &str = "partition.default_name";
pub const INDEX_BOOTSTRAP_ENABLED: &str = "index.bootstrap.enabled";

// Read
pub const READ_TASKS: &str = "read.tasks";
pub const READ_AVRO_SCHEMA_PATH: &str = "read.avro-schema.path";
pub const READ_AVRO_SCHEMA: &str = "read.avro-schema";
pub const QUERY_TYPE: &str = "hoodie.datasource.query.type";
pub const MERGE_TYPE: &str = "hoodie.datasource.merge.type";
pub const HIVE_STYLE_PARTITION: &str = "hoodie.datasource.hive_style_partition";
pub const UTC_TIMEZONE: &str = "read.utc-timezone";
pub const READ_AS_STREAMING: &str = "read.streaming.enabled";
pub const READ_STREAMING_CHECK_INTERVAL: &str = "read.streaming.check-interval";
pub const READ_STREAMING_START_COMMIT: &str = "read.streaming.start-commit";

// Write
pub const TABLE_NAME: &str = "hoodie.table.name";
pub const TABLE_TYPE: &str = "table.type";
pub const OPERATION: &str = "write.operation";
pub const PRECOMBINE_FIELD: &str = "write.precombine.field";
pub const PAYLOAD_CLASS: &str = "write.payload.class";
pub const INSERT_DROP_DUPS: &str = "write.insert.drop.duplicates";
pub const RETRY_TIMES: &str = "write.retry.times";
pub const RETRY_INTERVAL_MS: &str = "write.retry.interval.ms";
pub const IGNORE_FAILED: &str = "write.ignore.failed";
pub const RECORD_KEY_FIELD: &str = "hoodie.datasource.write.recordkey.field";
pub const PARTITION_PATH_FIELD: &str = "hoodie.datasource.write.partitionpath.field";
pub const PARTITION_PATH_URL_ENCODE: &str = "write.partition.url_encode";
pub const KEYGEN_CLASS: &str = "hoodie.datasource.write.keygenerator.class";
pub const WRITE_TASKS: &str = "write.tasks";
pub const WRITE_BATCH_SIZE: &str = "write.batch.size.MB";
pub const WRITE_LOG_BLOCK_SIZE: &str = "write.log_block.size.MB";
pub const WRITE_MERGE_MAX_MEMORY: &str = "write.merge.max_memory";

// Compaction
pub const COMPACTION_ASYNC_ENABLED: &str = "compaction.async.enabled";
pub const COMPACTION_TASKS: &str = "compaction.tasks";
pub const COMPACTION_TRIGGER_STRATEGY: &str = "compaction.trigger.strategy";
pub const COMPACTION_DELTA_COMMITS: &str = "compaction.delta_commits";
pub const COMPACTION_DELTA_SECONDS: &str = "compaction.delta_seconds";
pub const COMPACTION_MAX_MEMORY: &str = "compaction.max_memory";

// Clean
pub const CLEAN_ASYNC_ENABLED: &str = "clean.async.enabled";
pub const CLEAN_RETAIN_COMMITS: &str = "clean.retain_commits";

// Hive sync
pub const HIVE_SYNC_ENABLED: &str = "hive_sync.enable";
pub const HIVE_SYNC_DB: &str = "hive_sync.db";
pub const HIVE_SYNC_TABLE: &str = "hive_sync.table";
pub const HIVE_SYNC_FILE_FORMAT: &str = "hive_sync.file_format";
pub const HIVE_SYNC_USERNAME: &str = "hive_sync.username";
pub const HIVE_SYNC_PASSWORD: &str = "hive_sync.password";
pub const HIVE_SYNC_JDBC_URL: &str = "hive_sync.jdbc_url";
pub const HIVE_SYNC_PARTITION_FIELDS: &str = "hive_sync.partition_fields";
pub const HIVE_SYNC_PARTITION_EXTRACTOR_CLASS: &str = "hive_sync.partition_extractor_class";
pub const HIVE_SYNC_ASSUME_DATE_PARTITION: &str = "hive_sync.assume_date_partitioning";
pub const HIVE_SYNC_USE_JDBC: &str = "hive_sync.use_jdbc";
pub const HIVE_SYNC_AUTO_CREATE_DB: &str = "hive_sync.auto_create_db";
pub const HIVE_SYNC_IGNORE_EXCEPTIONS: &str = "hive_sync.ignore_exceptions";
pub const HIVE_SYNC_SKIP_RO_SUFFIX: &str = "hive_sync.skip_ro_suffix";
pub const HIVE_SYNC_SUPPORT_TIMESTAMP: &str = "hive_sync.support_timestamp";

/// Query types accepted by `hoodie.datasource.query.type`
pub const QUERY_TYPE_SNAPSHOT: &str = "snapshot";
pub const QUERY_TYPE_READ_OPTIMIZED: &str = "read_optimized";
pub const QUERY_TYPE_INCREMENTAL: &str = "incremental";

/// Merge types accepted by `hoodie.datasource.merge.type`
pub const REALTIME_SKIP_MERGE: &str = "skip_merge";
pub const REALTIME_PAYLOAD_COMBINE: &str = "payload_combine";

/// Table types accepted by `table.type`
pub const TABLE_TYPE_COPY_ON_WRITE: &str = "COPY_ON_WRITE";
pub const TABLE_TYPE_MERGE_ON_READ: &str = "MERGE_ON_READ";

/// Compaction trigger strategies accepted by `compaction.trigger.strategy`
pub const NUM_COMMITS: &str = "num_commits";
pub const TIME_ELAPSED: &str = "time_elapsed";
pub const NUM_AND_TIME: &str = "num_and_time";
pub const NUM_OR_TIME: &str = "num_or_time";

pub const DEFAULT_PARTITION_NAME: &str = "__DEFAULT_PARTITION__";
pub const DEFAULT_PAYLOAD_CLASS: &str = "org.apache.hudi.common.model.OverwriteWithLatestAvroPayload";
pub const DEFAULT_KEYGEN_CLASS: &str = "org.apache.hudi.keygen.SimpleAvroKeyGenerator";
pub const DEFAULT_PARTITION_EXTRACTOR_CLASS: &str =
    "org.apache.hudi.hive.SlashEncodedDayPartitionValueExtractor";

/// Prefix marking a passthrough property forwarded to the storage engine
pub const PROPERTIES_PREFIX: &str = "properties.";
