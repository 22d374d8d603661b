// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! What each subcommand does.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};

use edaoogle::binary::{CorpusFooter, CorpusHeader, CorpusLayer, FORMAT_NAME};
use edaoogle::build::format_bytes;
use edaoogle::config::Config;
use edaoogle::corpus::{BuildReport, BuildStatus, CorpusStore};
use edaoogle::scoring::{rank, ScoringTerm};
use edaoogle::search::{search, tokenize, SearchOptions};
use edaoogle::server;

use super::display::{
    field, row, savings, score_value, section_bot, section_top, status, themed, timing_ms, title,
    truncate_path, BOLD, CYAN, GRAY,
};

fn store_for(config: &Config, show_progress: bool) -> CorpusStore {
    CorpusStore::new(&config.store_path)
        .with_compression(config.compress)
        .with_progress(show_progress)
}

/// Build if needed, open the store, and serve until Ctrl-C.
pub fn serve(config: &Config) -> Result<()> {
    let corpus = store_for(config, true)
        .open_or_build(&config.home, &config.corpus_dir)
        .context("Corpus store is unavailable; refusing to serve")?;
    let corpus = Arc::new(corpus);

    eprintln!(
        "Serving {} documents from {} on http://{}",
        corpus.len(),
        config.home.display(),
        config.socket_addr()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(server::serve(config, corpus))?;
    Ok(())
}

/// Build the store, or report that it already exists.
pub fn build(config: &Config, force: bool) -> Result<()> {
    let store = store_for(config, true);
    let report = if force {
        store.rebuild(&config.home, &config.corpus_dir)?
    } else {
        match store.build(&config.home, &config.corpus_dir)? {
            BuildStatus::Built(report) => report,
            BuildStatus::AlreadyPresent => {
                eprintln!(
                    "Corpus store {} already exists; use --force to rebuild",
                    config.store_path.display()
                );
                return Ok(());
            }
        }
    };
    print_build_report(&config.store_path, &report);
    Ok(())
}

fn print_build_report(path: &Path, report: &BuildReport) {
    section_top("BUILD");
    field("store", &path.display().to_string());
    field("documents", &report.documents.to_string());
    field("skipped", &report.skipped.to_string());
    field("size", &format_bytes(report.bytes));
    field("elapsed", &timing_ms(duration_ms(report.elapsed)));
    section_bot();
}

/// Run one query and print the ranking.
pub fn search_once(config: &Config, query: &str, limit: usize, json: bool) -> Result<()> {
    let corpus = store_for(config, false)
        .open_or_build(&config.home, &config.corpus_dir)
        .context("Corpus store is unavailable")?;

    let options = SearchOptions {
        limit: Some(limit),
        ..config.search_options()
    };
    let response = search(&corpus, query, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    // Scores stay inside the engine's response; recompute them for display
    let terms: Vec<ScoringTerm> = tokenize(query)
        .into_iter()
        .filter_map(ScoringTerm::new)
        .collect();
    let ranked = rank(&corpus, &terms, options.heading_boost);

    section_top(&format!("SEARCH \"{}\"", truncate_path(query, 40)));
    row(&format!(
        "  {} results ({:.6} seconds)",
        response.count, response.elapsed_seconds
    ));
    row("");
    for (i, (hit, scored)) in response.results.iter().zip(&ranked).enumerate() {
        row(&format!(
            "  {:>3}. {}  {}  {}",
            i + 1,
            score_value(scored.score),
            themed(CYAN, &[BOLD], &truncate_path(&hit.label, 30)),
            themed(GRAY, &[], &truncate_path(&hit.path, 30))
        ));
    }
    if response.count > response.results.len() {
        row(&themed(
            GRAY,
            &[],
            &format!("  ... {} more", response.count - response.results.len()),
        ));
    }
    section_bot();
    Ok(())
}

/// Print a store's header, footer and document statistics.
pub fn inspect(path: &Path) -> Result<()> {
    let bytes =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;

    let footer = CorpusFooter::read(&bytes)
        .with_context(|| format!("{} is not a corpus store", path.display()))?;
    let computed = CorpusFooter::compute_crc32(&bytes[..bytes.len() - CorpusFooter::SIZE]);
    if footer.crc32 != computed {
        section_top("INTEGRITY");
        field("stored crc32", &format!("{:#010x}", footer.crc32));
        field("computed", &format!("{:#010x} {}", computed, status(false)));
        section_bot();
        anyhow::bail!("{} is corrupt", path.display());
    }

    let layer = CorpusLayer::from_bytes(&bytes)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    let header = &layer.header;
    let docs = layer.documents()?;
    let words: u64 = docs.iter().map(|d| u64::from(d.word_count)).sum();
    let empty = docs.iter().filter(|d| d.word_count == 0).count();

    title(&format!("{} v{}", FORMAT_NAME, header.version));
    println!();

    section_top("LAYOUT");
    field("file", &path.display().to_string());
    field("total", &format_bytes(bytes.len()));
    field("header", &format_bytes(CorpusHeader::SIZE));
    field("documents", &format_bytes(header.docs_len as usize));
    field("footer", &format_bytes(CorpusFooter::SIZE));
    section_bot();

    section_top("DOCUMENTS");
    field("count", &header.doc_count.to_string());
    field("words", &words.to_string());
    field("empty bodies", &empty.to_string());
    field("raw size", &format_bytes(header.raw_len as usize));
    if header.flags.is_compressed() {
        field(
            "brotli",
            &format!(
                "{} saved",
                savings(header.raw_len as usize, header.docs_len as usize)
            ),
        );
    } else {
        field("brotli", "off");
    }
    section_bot();

    section_top("INTEGRITY");
    field("crc32", &format!("{:#010x} {}", footer.crc32, status(true)));
    section_bot();
    Ok(())
}

fn duration_ms(d: Duration) -> f64 {
    d.as_secs_f64() * 1000.0
}
