//! Base, common and index options registration

use crate::config::options::keys;
use crate::config::options::{OptionDefBuilder, OptionsRegistry};
use anyhow::Result;

/// Register the table path plus the common and index options
pub fn register(registry: &mut OptionsRegistry) -> Result<()> {
    registry.register(
        OptionDefBuilder::new("base", keys::PATH)
            .description(
                "Base path for the target hoodie table.\n\
                 The path would be created if it does not exist,\n\
                 otherwise a Hoodie table expects to be initialized successfully",
            )
            .string_type_no_default()
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("base", keys::PARTITION_DEFAULT_NAME)
            .description(
                "The default partition name in case the dynamic partition \
                 column value is null/empty string",
            )
            .string_type(keys::DEFAULT_PARTITION_NAME)
            .build()?,
    )?;

    registry.register(
        OptionDefBuilder::new("base", keys::INDEX_BOOTSTRAP_ENABLED)
            .description(
                "Whether to bootstrap the index state from existing hoodie table, default false",
            )
            .bool_type(false)
            .build()?,
    )?;

    log::info!("Registered {} base options", 3);
    Ok(())
}
