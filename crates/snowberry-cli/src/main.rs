//! CLI entry point - the composition root.
//!
//! Logging and `.env` overrides are set up here; everything else is
//! delegated to bootstrap and the command handlers.

use clap::CommandFactory;
use tracing_subscriber::EnvFilter;

use snowberry_cli::{Cli, CliConfig, Commands, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse_args(std::env::args_os());

    // Initialize logging
    init_tracing(cli.verbose);

    let Some(command) = &cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = CliConfig::from_cli(&cli)?;
    let resolver = bootstrap(config)?;

    match command {
        Commands::Paths => handlers::paths::execute(&resolver, cli.json)?,
        Commands::Files { category } => handlers::files::execute(&resolver, *category, cli.json)?,
        Commands::FindImage { name } => handlers::find_image::execute(&resolver, name, cli.json)?,
    }

    Ok(())
}
