//! CLI command definitions and implementations.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod org;
pub mod random;
pub mod repos;
pub mod runtime;
pub mod utils;

/// orgscope - inspect GitHub organizations and collect async number streams.
#[derive(Parser)]
#[command(name = "orgscope", version, about, long_about = None)]
pub struct Cli {
    /// Path to a TOML config file (default: ./orgscope.toml).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Serve API requests from a JSON file mapping URLs to payloads.
    #[arg(long, global = true, value_name = "FILE")]
    pub replay: Option<PathBuf>,

    /// Suppress informational output.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log fetches and cache activity to stderr.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show an organization's metadata.
    Org {
        /// Organization login (e.g. `google`).
        name: String,

        /// Print the raw payload as JSON.
        #[arg(long)]
        json: bool,
    },

    /// List an organization's public repositories.
    Repos {
        /// Organization login (e.g. `google`).
        name: String,

        /// Only list repositories under this license key (e.g. `apache-2.0`).
        #[arg(short, long, value_name = "KEY")]
        license: Option<String>,

        /// Print name and license of each repository as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Collect random numbers from the async generator.
    Random {
        /// Number of values to collect.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Delay before each value, in milliseconds.
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,

        /// Print the numbers as a JSON array.
        #[arg(long)]
        json: bool,
    },

    /// Time several collections running concurrently.
    Runtime {
        /// Number of concurrent collections.
        #[arg(short, long)]
        parallel: Option<usize>,

        /// Number of values per collection.
        #[arg(short = 'n', long)]
        count: Option<usize>,

        /// Delay before each value, in milliseconds.
        #[arg(long, value_name = "MS")]
        delay_ms: Option<u64>,
    },
}
