// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration and its defaults.
//!
//! Everything here is resolved once at startup, from command-line flags
//! layered over the defaults below, and then passed down by reference.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use crate::search::SearchOptions;

// =============================================================================
// DEFAULTS
// =============================================================================

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default served home directory, relative to the working directory.
pub const DEFAULT_HOME: &str = "www";

/// Corpus source directory inside the home directory.
pub const CORPUS_SUBDIR: &str = "wiki";

/// Default persisted corpus file, relative to the working directory.
pub const DEFAULT_STORE: &str = "edaoogle.corpus";

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Address the HTTP server binds to
    pub bind: IpAddr,
    pub port: u16,
    /// Directory served as static files; the corpus lives below it
    pub home: PathBuf,
    /// Directory scanned for source documents
    pub corpus_dir: PathBuf,
    /// Persisted corpus file
    pub store_path: PathBuf,
    /// Weight of heading-text density; `None` scores body text only
    pub heading_boost: Option<f64>,
    /// Brotli-compress the document section when writing the store
    pub compress: bool,
    /// Optional cap on terms per query
    pub max_terms: Option<usize>,
    /// Optional cap on bytes per query term
    pub max_term_bytes: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self::with_home(DEFAULT_HOME)
    }
}

impl Config {
    /// Defaults rooted at a different home directory.
    pub fn with_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            corpus_dir: corpus_dir_for(&home),
            home,
            store_path: PathBuf::from(DEFAULT_STORE),
            heading_boost: None,
            compress: true,
            max_terms: None,
            max_term_bytes: None,
        }
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions {
            heading_boost: self.heading_boost,
            limit: None,
            max_terms: self.max_terms,
            max_term_bytes: self.max_term_bytes,
        }
    }
}

/// Corpus source directory for a given home directory.
pub fn corpus_dir_for(home: &Path) -> PathBuf {
    home.join(CORPUS_SUBDIR)
}
