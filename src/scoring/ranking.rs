// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: summing term scores and ordering documents.
//!
//! A document's total is the plain sum of its per-term scores. Only totals
//! strictly above zero are returned. Order is by total descending, with
//! corpus insertion order breaking ties, so the same query against the same
//! corpus always ranks identically.

use std::cmp::Ordering;

use crate::corpus::Corpus;
use crate::types::ScoredResult;

use super::core::{score_entry, ScoringTerm};

/// Compare two scored results for ranking.
///
/// Sort order:
/// 1. **Score** - descending (higher wins)
/// 2. **Doc ID** - ascending, i.e. corpus insertion order
pub fn compare_results(a: &ScoredResult, b: &ScoredResult) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.doc_id.cmp(&b.doc_id),
    }
}

/// Score every document against `terms` and rank the matches.
pub fn rank(
    corpus: &Corpus,
    terms: &[ScoringTerm],
    heading_boost: Option<f64>,
) -> Vec<ScoredResult> {
    if terms.is_empty() {
        return Vec::new();
    }

    let mut results: Vec<ScoredResult> = corpus
        .entries()
        .iter()
        .enumerate()
        .filter_map(|(doc_id, entry)| {
            let score: f64 = terms
                .iter()
                .map(|term| score_entry(term, entry, heading_boost))
                .sum();
            (score > 0.0).then_some(ScoredResult { doc_id, score })
        })
        .collect();

    results.sort_by(compare_results);
    results
}
