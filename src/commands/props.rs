use super::output;
use crate::cli::commands::PropsArgs;
use crate::config::{get_hoodie_properties_with_prefix, props_file};
use anyhow::Result;
use std::collections::BTreeMap;

/// Print the passthrough properties of a properties file
pub fn props_command(args: &PropsArgs) -> Result<()> {
    let props = props_file::load(&args.path)?;
    let selected: BTreeMap<String, String> =
        get_hoodie_properties_with_prefix(&props, &args.prefix).into_iter().collect();

    log::info!(
        "Selected {} of {} properties with prefix '{}'",
        selected.len(),
        props.len(),
        args.prefix
    );
    print!("{}", output::render(&selected, args.format)?);
    Ok(())
}
