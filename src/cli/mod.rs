// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the edaoogle command-line interface.
//!
//! With no subcommand the binary behaves like the classic server: build the
//! corpus store if it is missing, then serve `HOME_PATH` on `PORT`. `-h` is
//! taken by the home directory, so help is `--help` only.

pub mod commands;
pub mod display;

use std::net::IpAddr;
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use edaoogle::config::{corpus_dir_for, Config, DEFAULT_HOME, DEFAULT_PORT, DEFAULT_STORE};

#[derive(Parser, Debug)]
#[command(
    name = "edaoogle",
    about = "Keyword search over a local corpus of HTML documents",
    version,
    disable_help_flag = true
)]
pub struct Cli {
    /// Port to listen on
    #[arg(short = 'p', long, value_name = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory served over HTTP; documents are read from HOME_PATH/wiki
    #[arg(short = 'h', long = "home", value_name = "HOME_PATH", default_value = DEFAULT_HOME)]
    pub home: PathBuf,

    /// Address to bind
    #[arg(long, value_name = "ADDR", default_value = "0.0.0.0")]
    pub bind: IpAddr,

    /// Persisted corpus file
    #[arg(long, value_name = "FILE", default_value = DEFAULT_STORE)]
    pub store: PathBuf,

    /// Also score heading text, weighted by W
    #[arg(long, value_name = "W", value_parser = parse_boost)]
    pub heading_boost: Option<f64>,

    /// Reject queries with more than N terms (no limit by default)
    #[arg(long, value_name = "N")]
    pub max_terms: Option<usize>,

    /// Reject queries containing a term longer than N bytes (no limit by default)
    #[arg(long, value_name = "N")]
    pub max_term_bytes: Option<usize>,

    /// Write the corpus store without brotli compression
    #[arg(long)]
    pub no_compress: bool,

    /// Log progress at info level (RUST_LOG overrides)
    #[arg(short, long)]
    pub verbose: bool,

    /// Print help
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Resolve flags into a runtime configuration.
    pub fn config(&self) -> Config {
        Config {
            bind: self.bind,
            port: self.port,
            corpus_dir: corpus_dir_for(&self.home),
            home: self.home.clone(),
            store_path: self.store.clone(),
            heading_boost: self.heading_boost,
            compress: !self.no_compress,
            max_terms: self.max_terms,
            max_term_bytes: self.max_term_bytes,
        }
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Build the corpus store if needed and serve queries over HTTP (default)
    Serve,

    /// Build the corpus store from HOME_PATH/wiki
    Build {
        /// Rebuild even if the store already exists
        #[arg(long)]
        force: bool,
    },

    /// Run one query against the corpus store and print the ranking
    Search {
        /// Query terms
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,

        /// Maximum number of results to print
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// Print the JSON response instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Inspect a corpus store file
    Inspect {
        /// Store file (defaults to --store)
        file: Option<PathBuf>,
    },
}

fn parse_boost(s: &str) -> Result<f64, String> {
    let value: f64 = s.parse().map_err(|e| format!("{}", e))?;
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(format!("heading boost must be a non-negative number, got {}", s))
    }
}
