//! Rendering of key/value maps for command output

use crate::cli::commands::OutputFormat;
use anyhow::{Context, Result};
use std::collections::BTreeMap;

/// Render `entries` in the requested format, keys in sorted order
pub fn render(entries: &BTreeMap<String, String>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Properties => Ok(render_properties(entries)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(entries).context("Failed to serialize to JSON")
        }
        OutputFormat::Toml => toml::to_string(entries).context("Failed to serialize to TOML"),
    }
}

fn render_properties(entries: &BTreeMap<String, String>) -> String {
    entries
        .iter()
        .map(|(key, value)| format!("{}={}\n", escape(key, true), escape(value, false)))
        .collect()
}

fn escape(text: &str, is_key: bool) -> String {
    let mut escaped = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            // a leading '#' or '!' would read back as a comment line
            '#' | '!' if is_key && i == 0 => {
                escaped.push('\\');
                escaped.push(c);
            }
            '=' | ':' if is_key => {
                escaped.push('\\');
                escaped.push(c);
            }
            ' ' if is_key || i == 0 => escaped.push_str("\\ "),
            c => escaped.push(c),
        }
    }
    escaped
}
