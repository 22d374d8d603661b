// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query evaluation: from a raw query string to an ordered list of links.
//!
//! The pipeline is tokenizer → scorer → ranker → labels. It only reads the
//! corpus, so any number of queries can run against one shared `Corpus`
//! at once.
//!
//! ```text
//! "cat dog"  →  ["cat", "dog"]  →  score every doc  →  sort  →  [(path, label)]
//! ```

mod label;
mod tokenizer;

pub use label::{display_label, link_href};
pub use tokenizer::tokenize;

use std::time::Instant;

use crate::corpus::Corpus;
use crate::error::QueryError;
use crate::scoring::{rank, ScoringTerm};
use crate::types::{SearchHit, SearchResponse};

/// Knobs for query evaluation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Weight of heading-text density; `None` scores body text only
    pub heading_boost: Option<f64>,
    /// Truncate the returned results; `count` still reports every match
    pub limit: Option<usize>,
    /// Reject queries with more terms than this; unlimited when `None`
    pub max_terms: Option<usize>,
    /// Reject queries with a term longer than this many bytes
    pub max_term_bytes: Option<usize>,
}

/// Evaluate `query` against `corpus`.
///
/// An empty query returns zero results without scoring anything. Term
/// limits in `options` are off by default, so any query is evaluated.
pub fn search(
    corpus: &Corpus,
    query: &str,
    options: &SearchOptions,
) -> Result<SearchResponse, QueryError> {
    let start = Instant::now();
    let terms = tokenize(query);

    if let Some(max) = options.max_terms {
        if terms.len() > max {
            return Err(QueryError::TooManyTerms {
                count: terms.len(),
                max,
            });
        }
    }
    if let Some(max) = options.max_term_bytes {
        if let Some(long) = terms.iter().find(|t| t.len() > max) {
            return Err(QueryError::TermTooLong {
                len: long.len(),
                max,
            });
        }
    }

    let scoring_terms: Vec<ScoringTerm> =
        terms.iter().filter_map(|t| ScoringTerm::new(t)).collect();
    let ranked = rank(corpus, &scoring_terms, options.heading_boost);
    let count = ranked.len();

    let results: Vec<SearchHit> = ranked
        .iter()
        .take(options.limit.unwrap_or(usize::MAX))
        .filter_map(|r| corpus.get(r.doc_id))
        .map(|doc| SearchHit {
            path: doc.path.clone(),
            href: link_href(&doc.path),
            label: display_label(&doc.path),
        })
        .collect();

    let elapsed = start.elapsed();
    tracing::debug!(
        query,
        terms = terms.len(),
        count,
        elapsed_us = elapsed.as_micros() as u64,
        "Evaluated query"
    );

    Ok(SearchResponse {
        query: query.to_string(),
        count,
        elapsed_seconds: elapsed.as_secs_f64(),
        results,
        error: None,
    })
}

/// Like [`search`], but a failed evaluation becomes an empty response that
/// carries the error message. Used at the serving boundary, where a bad
/// query must never take the server down.
pub fn search_or_failed(corpus: &Corpus, query: &str, options: &SearchOptions) -> SearchResponse {
    search(corpus, query, options).unwrap_or_else(|e| {
        tracing::warn!("Query rejected: {}", e);
        SearchResponse::failed(query, e.to_string())
    })
}
