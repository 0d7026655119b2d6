use crate::cli::commands::ListArgs;
use crate::cli::commands::options::ListFormat;
use crate::config::{OptionDefinition, OptionsRegistry};
use anyhow::{Context, Result};
use log::info;
use serde::Serialize;

/// Serializable view of an option for machine-readable listings
#[derive(Debug, Serialize)]
pub struct OptionSummary<'a> {
    pub key: &'a str,
    pub group: &'a str,
    #[serde(rename = "type")]
    pub value_type: &'static str,
    pub default: Option<String>,
    pub required: bool,
    #[serde(skip_serializing_if = "no_values")]
    pub allowed_values: &'a [String],
    pub description: &'a str,
}

impl<'a> From<&'a OptionDefinition> for OptionSummary<'a> {
    fn from(def: &'a OptionDefinition) -> Self {
        Self {
            key: &def.key,
            group: &def.group,
            value_type: def.value_type.name(),
            default: def.default.as_ref().map(|v| v.to_string()),
            required: def.is_required(),
            allowed_values: &def.allowed_values,
            description: &def.description,
        }
    }
}

fn no_values(values: &&[String]) -> bool {
    values.is_empty()
}

/// Options selected by the list filters, in registration order
pub fn select<'a>(registry: &'a OptionsRegistry, args: &ListArgs) -> Result<Vec<&'a OptionDefinition>> {
    if let Some(group) = &args.group {
        if !registry.groups().contains(&group.as_str()) {
            anyhow::bail!(
                "Unknown option group '{}'. Known groups: {}",
                group,
                registry.groups().join(", ")
            );
        }
    }

    let mut selected: Vec<&OptionDefinition> = if args.optional {
        registry.optional_options()
    } else {
        registry.all_options().iter().collect()
    };

    if args.required {
        selected.retain(|def| def.is_required());
    }
    if let Some(group) = &args.group {
        selected.retain(|def| &def.group == group);
    }

    Ok(selected)
}

/// List declared options
pub fn list_command(registry: &OptionsRegistry, args: &ListArgs) -> Result<()> {
    let selected = select(registry, args)?;
    info!("Listing {} of {} options", selected.len(), registry.len());

    match args.format {
        ListFormat::Json => {
            let summaries: Vec<OptionSummary> = selected.into_iter().map(OptionSummary::from).collect();
            let json = serde_json::to_string_pretty(&summaries)
                .context("Failed to serialize options to JSON")?;
            println!("{}", json);
        }
        ListFormat::Text => {
            if selected.is_empty() {
                println!("No options found.");
                return Ok(());
            }

            let width = selected.iter().map(|def| def.key.len()).max().unwrap_or(0);
            for def in &selected {
                let default = match &def.default {
                    Some(value) => format!("default: {:?}", value.to_string()),
                    None if def.is_required() => "required".to_string(),
                    None => "no default".to_string(),
                };
                println!("{:<width$}  {:<8} {}", def.key, def.value_type, default, width = width);
            }
            println!("\nTotal options: {}", selected.len());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keys;

    fn args(group: Option<&str>, required: bool, optional: bool) -> ListArgs {
        ListArgs {
            group: group.map(str::to_string),
            required,
            optional,
            format: ListFormat::Text,
        }
    }

    #[test]
    fn test_select_all() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let selected = select(&registry, &args(None, false, false)).unwrap();
        assert_eq!(selected.len(), registry.len());
    }

    #[test]
    fn test_select_group() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let selected = select(&registry, &args(Some("clean"), false, false)).unwrap();

        let selected_keys: Vec<_> = selected.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(selected_keys, vec![keys::CLEAN_ASYNC_ENABLED, keys::CLEAN_RETAIN_COMMITS]);
    }

    #[test]
    fn test_select_unknown_group() {
        let registry = OptionsRegistry::hoodie().unwrap();
        assert!(select(&registry, &args(Some("metrics"), false, false)).is_err());
    }

    #[test]
    fn test_select_required() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let selected = select(&registry, &args(None, true, false)).unwrap();

        let selected_keys: Vec<_> = selected.iter().map(|d| d.key.as_str()).collect();
        assert_eq!(selected_keys, vec![keys::PATH]);
    }

    #[test]
    fn test_required_and_optional_partition_options() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let required = select(&registry, &args(None, true, false)).unwrap();
        let optional = select(&registry, &args(None, false, true)).unwrap();

        assert_eq!(required.len() + optional.len(), registry.len());
        assert!(required.iter().all(|def| !optional.iter().any(|o| o.key == def.key)));

        // options without a default are still optional
        let summary = OptionSummary::from(registry.require(keys::TABLE_NAME).unwrap());
        assert!(!summary.required);
        assert!(optional.iter().any(|def| def.key == keys::TABLE_NAME));

        let summary = OptionSummary::from(registry.require(keys::PATH).unwrap());
        assert!(summary.required);
    }

    #[test]
    fn test_summary_serialization() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let summary = OptionSummary::from(registry.require(keys::QUERY_TYPE).unwrap());
        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["type"], "string");
        assert_eq!(value["default"], "snapshot");
        assert_eq!(value["required"], false);
        assert_eq!(value["allowed_values"].as_array().unwrap().len(), 3);

        let summary = OptionSummary::from(registry.require(keys::WRITE_TASKS).unwrap());
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("allowed_values").is_none());
    }
}
