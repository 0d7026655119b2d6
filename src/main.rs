use anyhow::Result;
use clap::Parser;
use log::debug;

use hoodie_options::cli::{Cli, Commands};
use hoodie_options::commands::{
    describe_command, import_command, list_command, props_command, resolve_command,
};
use hoodie_options::config::OptionsRegistry;

fn main() -> Result<()> {
    // Log to stderr so command output on stdout stays machine-readable
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let registry = OptionsRegistry::hoodie()?;
    debug!("Loaded {} options", registry.len());

    match cli.command {
        Commands::List(args) => list_command(&registry, &args),
        Commands::Describe(args) => describe_command(&registry, &args.key),
        Commands::Resolve(args) => resolve_command(&registry, &args.streamer, &args.output),
        Commands::Import(args) => import_command(&registry, &args.path, &args.output),
        Commands::Props(args) => props_command(&args),
    }
}
