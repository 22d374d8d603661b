// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus ingestion: from a directory of HTML files to documents.
//!
//! Three steps, each in its own module: discover the source files, load and
//! extract them (in parallel when the `parallel` feature is on), and hand the
//! resulting documents to the store. Individual files that cannot be read are
//! skipped with a warning; only an unreadable corpus directory aborts.

pub mod discovery;
pub mod document;
pub mod parallel;

use std::path::Path;
use std::time::{Duration, Instant};

#[cfg(feature = "parallel")]
use indicatif::{ProgressBar, ProgressStyle};

use crate::error::StoreError;
use crate::types::Document;

pub use discovery::*;
pub use document::*;
pub use parallel::*;

/// Documents collected from a corpus directory.
#[derive(Debug)]
pub struct Ingested {
    pub docs: Vec<Document>,
    /// Files seen but not ingested
    pub skipped: usize,
    pub elapsed: Duration,
}

/// Create a progress style for the main progress bars
#[cfg(feature = "parallel")]
fn create_progress_style() -> ProgressStyle {
    ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸")
}

/// Scan `corpus_dir` and load every document in it.
///
/// `show_progress` draws a progress bar on stderr (when stderr is a
/// terminal); library callers and tests normally pass `false`.
pub fn ingest_directory(
    home: &Path,
    corpus_dir: &Path,
    show_progress: bool,
) -> Result<Ingested, StoreError> {
    let start = Instant::now();

    let discovered = discover_sources(home, corpus_dir)?;
    for skipped in &discovered.skipped {
        tracing::warn!("Skipping {}", skipped);
    }

    #[cfg(feature = "parallel")]
    let loaded = {
        let progress = if show_progress {
            let pb = ProgressBar::new(discovered.sources.len() as u64);
            pb.set_style(create_progress_style());
            pb.set_prefix("Loading");
            pb.set_message("documents...");
            pb
        } else {
            ProgressBar::hidden()
        };
        let loaded = load_documents_with_progress(&discovered.sources, &progress);
        progress.finish_with_message(format!("loaded {} documents", loaded.docs.len()));
        loaded
    };

    #[cfg(not(feature = "parallel"))]
    let loaded = {
        let _ = show_progress;
        load_documents_with_progress(&discovered.sources)
    };

    for failed in &loaded.failed {
        tracing::warn!("Skipping {}", failed);
    }

    let skipped = discovered.skipped.len() + loaded.failed.len();
    tracing::info!(
        documents = loaded.docs.len(),
        skipped,
        "Ingested {}",
        corpus_dir.display()
    );

    Ok(Ingested {
        docs: loaded.docs,
        skipped,
        elapsed: start.elapsed(),
    })
}

/// Human-readable byte count.
pub fn format_bytes(bytes: usize) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / 1024.0 / 1024.0)
    } else if bytes >= 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{} B", bytes)
    }
}
