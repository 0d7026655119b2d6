use super::output;
use crate::cli::commands::OutputArgs;
use crate::config::{
    Configuration, OptionsRegistry, StreamerConfig, flat_options, from_streamer_config,
    is_default_value_defined,
};
use anyhow::Result;
use log::{info, warn};
use std::collections::BTreeMap;
use std::path::Path;

/// Build a configuration from streamer flags and print it
pub fn resolve_command(
    registry: &OptionsRegistry,
    streamer: &StreamerConfig,
    args: &OutputArgs,
) -> Result<()> {
    info!("Resolving configuration for table: {}", streamer.target_table_name);

    let conf = from_streamer_config(streamer)?;
    print_configuration(registry, &conf, args)
}

/// Build a configuration from a legacy TOML file and print it
pub fn import_command(registry: &OptionsRegistry, path: &Path, args: &OutputArgs) -> Result<()> {
    info!("Importing legacy streamer config: {:?}", path);

    let streamer = StreamerConfig::from_toml_file(path)?;
    resolve_command(registry, &streamer, args)
}

fn print_configuration(
    registry: &OptionsRegistry,
    conf: &Configuration,
    args: &OutputArgs,
) -> Result<()> {
    let conf = if args.flat { flat_options(conf) } else { conf.clone() };

    for problem in check_values(registry, &conf) {
        warn!("{}", problem);
    }

    let entries = collect_entries(registry, &conf, args.changed_only);
    print!("{}", output::render(&entries, args.format)?);
    Ok(())
}

/// Explicit entries sorted by key, optionally without registered options left at their default
pub fn collect_entries(
    registry: &OptionsRegistry,
    conf: &Configuration,
    changed_only: bool,
) -> BTreeMap<String, String> {
    conf.to_map()
        .into_iter()
        .filter(|(key, _)| {
            !changed_only
                || registry
                    .get(key)
                    .is_none_or(|option| !is_default_value_defined(conf, option))
        })
        .collect()
}

/// Values of registered options that a consumer would trip over
pub fn check_values(registry: &OptionsRegistry, conf: &Configuration) -> Vec<String> {
    let mut problems = Vec::new();

    for option in registry.all_options() {
        match conf.get_optional(option) {
            Ok(Some(value)) if !option.accepts(&value.to_string()) => problems.push(format!(
                "'{}' = '{}' is not one of: {}",
                option.key,
                value,
                option.allowed_values.join(", ")
            )),
            Ok(_) => {}
            Err(err) => problems.push(format!("{:#}", err)),
        }
    }

    problems
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{from_map, keys};

    #[test]
    fn test_collect_entries_changed_only() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let conf = from_map([
            (keys::PATH, "/tmp/t1"),
            (keys::WRITE_TASKS, "4"),
            (keys::READ_TASKS, "8"),
            ("hoodie.index.type", "BLOOM"),
        ]);

        let all = collect_entries(&registry, &conf, false);
        assert_eq!(all.len(), 4);

        let changed = collect_entries(&registry, &conf, true);
        let changed_keys: Vec<_> = changed.keys().map(String::as_str).collect();
        assert_eq!(changed_keys, vec!["hoodie.index.type", keys::PATH, keys::READ_TASKS]);
    }

    #[test]
    fn test_check_values() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let conf = from_map([
            (keys::QUERY_TYPE, "latest"),
            (keys::TABLE_TYPE, "MERGE_ON_READ"),
            (keys::WRITE_TASKS, "lots"),
            (keys::OPERATION, "anything"),
        ]);

        let problems = check_values(&registry, &conf);
        assert_eq!(problems.len(), 2);
        assert!(problems.iter().any(|p| p.contains(keys::QUERY_TYPE)));
        assert!(problems.iter().any(|p| p.contains(keys::WRITE_TASKS)));
    }

    #[test]
    fn test_check_values_clean_config() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let conf = from_streamer_config(&StreamerConfig::new("/tmp/t1", "t1")).unwrap();
        assert!(check_values(&registry, &conf).is_empty());
    }
}
