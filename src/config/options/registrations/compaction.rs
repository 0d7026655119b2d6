//! Compaction options registration

use crate::config::options::keys;
use crate::config::options::{OptionDefBuilder, OptionsRegistry};
use anyhow::Result;

/// Register all compaction options
pub fn register(registry: &mut OptionsRegistry) -> Result<()> {
    registry.register(
        OptionDefBuilder::new("compaction", keys::COMPACTION_ASYNC_ENABLED)
            .description("Async Compaction, enabled by default for MOR")
            .bool_type(true)
            .build()?,
    )?;

    // WRITE_TASKS * COMPACTION_DELTA_COMMITS * 0.5, two commits per bucket
    registry.register(
        OptionDefBuilder::new("compaction", keys::COMPACTION_TASKS)
            .description("Parallelism of tasks that do actual compaction, default is 10")
            .int_type(10)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("compaction", keys::COMPACTION_TRIGGER_STRATEGY)
            .description(
                "Strategy to trigger compaction, options are 'num_commits': trigger compaction when reach N delta commits;\n\
                 'time_elapsed': trigger compaction when time elapsed > N seconds since last compaction;\n\
                 'num_and_time': trigger compaction when both NUM_COMMITS and TIME_ELAPSED are satisfied;\n\
                 'num_or_time': trigger compaction when NUM_COMMITS or TIME_ELAPSED is satisfied.\n\
                 Default is 'num_commits'",
            )
            .enum_type(
                &[
                    keys::NUM_COMMITS,
                    keys::TIME_ELAPSED,
                    keys::NUM_AND_TIME,
                    keys::NUM_OR_TIME,
                ],
                keys::NUM_COMMITS,
            )
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("compaction", keys::COMPACTION_DELTA_COMMITS)
            .description("Max delta commits needed to trigger compaction, default 5 commits")
            .int_type(5)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("compaction", keys::COMPACTION_DELTA_SECONDS)
            .description("Max delta seconds time needed to trigger compaction, default 1 hour")
            .int_type(3600)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("compaction", keys::COMPACTION_MAX_MEMORY)
            .description("Max memory in MB for compaction spillable map, default 100MB")
            .int_type(100)
            .build()?,
    )?;

    log::info!("Registered {} compaction options", 6);
    Ok(())
}
