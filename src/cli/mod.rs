//! CLI module for Graphfold.
//!
//! Commands:
//! - resolve: collapse nodes and print the visible subgraph
//! - batch: resolve many collapse scenarios against one graph
//! - stats: graph shape and anomaly counts

pub mod batch;
pub mod resolve;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "graphfold")]
#[command(about = "Graphfold - collapse-aware visibility for node-link graphs", long_about = None)]
pub struct Cli {
    /// Path to the config file (missing file means defaults)
    #[arg(long, default_value = "graphfold.toml", global = true)]
    pub config: PathBuf,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collapse nodes and print the visible graph as JSON
    Resolve {
        /// Graph document (.json, .yaml, .yml)
        graph: PathBuf,

        /// Node id to collapse (repeatable, processed in order)
        #[arg(short, long = "collapse")]
        collapse: Vec<String>,

        /// Print the hidden node and edge ids instead of the visible graph
        #[arg(long)]
        hidden: bool,
    },

    /// Resolve every scenario in a scenario file (name -> collapsed ids)
    Batch {
        /// Graph document (.json, .yaml, .yml)
        graph: PathBuf,

        /// Scenario document (.json, .yaml, .yml)
        scenarios: PathBuf,
    },

    /// Show graph statistics
    Stats {
        /// Graph document (.json, .yaml, .yml)
        graph: PathBuf,
    },
}

/// Default log filter for a `-v` count, used when `RUST_LOG` is unset.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    }
}
