//! Clean options registration

use crate::config::options::keys;
use crate::config::options::{OptionDefBuilder, OptionsRegistry};
use anyhow::Result;

/// Register all clean options
pub fn register(registry: &mut OptionsRegistry) -> Result<()> {
    registry.register(
        OptionDefBuilder::new("clean", keys::CLEAN_ASYNC_ENABLED)
            .description(
                "Whether to cleanup the old commits immediately on new commits, enabled by default",
            )
            .bool_type(true)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("clean", keys::CLEAN_RETAIN_COMMITS)
            .description(
                "Number of commits to retain. So data will be retained for num_of_commits * time_between_commits (scheduled).\n\
                 This also directly translates into how much you can incrementally pull on this table, default 10",
            )
            .int_type(10)
            .build()?,
    )?;

    log::info!("Registered {} clean options", 2);
    Ok(())
}
