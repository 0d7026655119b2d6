//! Registration of all table read/write options
//!
//! The order of registration is the order `OptionsRegistry::all_options` reports.

pub mod base;
pub mod clean;
pub mod compaction;
pub mod hive_sync;
pub mod read;
pub mod write;

use super::OptionsRegistry;
use anyhow::Result;

/// Register all options from all groups
pub fn register_all(registry: &mut OptionsRegistry) -> Result<()> {
    base::register(registry)?;
    read::register(registry)?;
    write::register(registry)?;
    compaction::register(registry)?;
    clean::register(registry)?;
    hive_sync::register(registry)?;
    Ok(())
}
