use super::commands::{DescribeArgs, ImportArgs, ListArgs, PropsArgs, ResolveArgs};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "hoodie-options")]
#[command(about = "Inspect table read/write options and build job configurations")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List declared options
    List(ListArgs),
    /// Show everything known about one option
    Describe(DescribeArgs),
    /// Build a configuration from legacy streamer command-line flags
    Resolve(ResolveArgs),
    /// Build a configuration from a legacy streamer TOML file
    Import(ImportArgs),
    /// Print the passthrough properties of a properties file
    Props(PropsArgs),
}
