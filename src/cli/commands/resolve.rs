use crate::config::StreamerConfig;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args)]
pub struct ResolveArgs {
    #[command(flatten)]
    pub streamer: StreamerConfig,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct ImportArgs {
    /// Path to a legacy streamer config in TOML
    pub path: PathBuf,
    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Strip the 'properties.' prefix from passthrough keys
    #[arg(long)]
    pub flat: bool,
    /// Only print entries that differ from their option's default
    #[arg(long)]
    pub changed_only: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Properties)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Properties,
    Json,
    Toml,
}
