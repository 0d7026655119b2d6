use crate::config::OptionsRegistry;
use anyhow::Result;

/// Show everything known about one option
pub fn describe_command(registry: &OptionsRegistry, key: &str) -> Result<()> {
    let def = registry.get(key).ok_or_else(|| {
        anyhow::anyhow!("Unknown option '{}'. Use 'list' to see available options", key)
    })?;

    println!("Key:      {}", def.key);
    println!("Group:    {}", def.group);
    println!("Type:     {}", def.value_type);
    match &def.default {
        Some(value) => println!("Default:  {:?}", value.to_string()),
        None => println!("Default:  (none, must be supplied)"),
    }
    if !def.allowed_values.is_empty() {
        println!("Values:   {}", def.allowed_values.join(", "));
    }
    println!();
    for line in def.description.lines() {
        println!("  {}", line);
    }

    Ok(())
}
