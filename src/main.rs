// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{commands, Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = cli.config();

    match cli.command {
        None | Some(Commands::Serve) => commands::serve(&config),
        Some(Commands::Build { force }) => commands::build(&config, force),
        Some(Commands::Search { query, limit, json }) => {
            commands::search_once(&config, &query.join(" "), limit, json)
        }
        Some(Commands::Inspect { file }) => {
            commands::inspect(file.as_deref().unwrap_or(&config.store_path))
        }
    }
}

/// Logs go to stderr so `search --json` output stays clean.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
