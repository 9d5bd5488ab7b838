//! CLI entry point for the recolor choreography

use boxes::io::cli::Cli;
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> boxes::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.is_quiet() { "warn" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    cli.execute()
}
