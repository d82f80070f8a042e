//! Graphfold CLI - resolve collapsed graphs from the command line.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use graphfold::cli::{batch, log_level, resolve, Cli, Commands};
use graphfold::GraphfoldConfig;

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level(cli.verbose))),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = GraphfoldConfig::load(&cli.config)?;

    match cli.command {
        Commands::Resolve {
            graph,
            collapse,
            hidden,
        } => resolve::resolve(&config, &graph, &collapse, hidden),

        Commands::Batch { graph, scenarios } => batch::execute(&config, &graph, &scenarios),

        Commands::Stats { graph } => resolve::stats(&graph),
    }
}
