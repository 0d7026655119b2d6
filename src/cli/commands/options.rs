use super::resolve::OutputFormat;
use clap::{ArgGroup, Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args)]
#[command(group(ArgGroup::new("requirement").args(["required", "optional"])))]
pub struct ListArgs {
    /// Only list options of this group (base, read, write, compaction, clean, hive_sync)
    #[arg(short, long)]
    pub group: Option<String>,
    /// Only list options the user must supply
    #[arg(long)]
    pub required: bool,
    /// Only list options the user may leave unset
    #[arg(long)]
    pub optional: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = ListFormat::Text)]
    pub format: ListFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}

#[derive(Args)]
pub struct DescribeArgs {
    /// Option key (e.g., 'write.tasks')
    pub key: String,
}

#[derive(Args)]
pub struct PropsArgs {
    /// Path to a .properties file
    pub path: PathBuf,
    /// Prefix to select and strip
    #[arg(short, long, default_value = "properties.")]
    pub prefix: String,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Properties)]
    pub format: OutputFormat,
}
