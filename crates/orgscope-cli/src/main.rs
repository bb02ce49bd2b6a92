//! orgscope CLI - inspect GitHub organizations and collect async number streams.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod output;

use commands::{Cli, Commands};
use config::{Config, DEFAULT_CONFIG_FILE};

fn main() {
    let cli = Cli::parse();

    output::set_quiet(cli.quiet);
    init_logging(cli.verbose);

    let result = run(cli);

    if let Err(e) = result {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_path = cli
        .config
        .as_deref()
        .unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
    let config = Config::load(config_path)?;
    let replay = cli.replay.as_deref();

    match cli.command {
        Commands::Org { name, json } => commands::org::run(&name, json, &config, replay),
        Commands::Repos {
            name,
            license,
            json,
        } => commands::repos::run(&name, license.as_deref(), json, &config, replay),
        Commands::Random {
            count,
            delay_ms,
            json,
        } => commands::random::run(count, delay_ms, json, &config),
        Commands::Runtime {
            parallel,
            count,
            delay_ms,
        } => commands::runtime::run(parallel, count, delay_ms, &config),
    }
}

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `--verbose` enables debug logs for
/// the orgscope crates and the default shows warnings only.
fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = if verbose { "debug" } else { "warn" };
        EnvFilter::new(format!(
            "orgscope_cli={level},orgscope_github={level},orgscope_collect={level}"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
