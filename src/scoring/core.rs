// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a term score.
//!
//! A term's score against a document is a frequency density:
//!
//! ```text
//! score = occurrences / term_length / word_count
//! ```
//!
//! `occurrences` counts non-overlapping, case-insensitive substring matches,
//! so "cat" also matches inside "concatenate". That is intended: this is a
//! crude density, not token matching. Dividing by the term length discounts
//! short terms that match often by chance; dividing by the word count
//! normalizes for document length. A document with no words scores zero.
//!
//! # Heading boost
//!
//! With a boost weight `w`, heading text contributes too:
//!
//! ```text
//! score = density(body) + w * density(title)
//! ```
//!
//! where `density(title)` is normalized by the title's own word count. With
//! no boost (the default) only body text counts.

use crate::corpus::CorpusEntry;
use crate::types::Document;

/// A query term, case-folded once for matching against every document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringTerm {
    folded: String,
    char_len: usize,
}

impl ScoringTerm {
    /// `None` for the empty term, which is never scored.
    pub fn new(term: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        Some(Self {
            folded: term.to_lowercase(),
            char_len: term.chars().count(),
        })
    }

    pub fn folded(&self) -> &str {
        &self.folded
    }

    /// Length in characters, the density divisor.
    pub fn char_len(&self) -> usize {
        self.char_len
    }
}

/// Non-overlapping occurrences of `needle` in `haystack`.
///
/// Both sides must already be case-folded.
#[inline]
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// `occurrences / term_len / word_count`, or zero when either divisor is.
#[inline]
pub fn density(occurrences: usize, term_len: usize, word_count: u32) -> f64 {
    if occurrences == 0 || term_len == 0 || word_count == 0 {
        return 0.0;
    }
    occurrences as f64 / term_len as f64 / f64::from(word_count)
}

/// Score one prepared term against one corpus entry.
pub fn score_entry(term: &ScoringTerm, entry: &CorpusEntry, heading_boost: Option<f64>) -> f64 {
    let body = density(
        count_occurrences(entry.folded_body(), term.folded()),
        term.char_len(),
        entry.word_count(),
    );

    match heading_boost {
        Some(weight) if weight > 0.0 => {
            let title = density(
                count_occurrences(entry.folded_title(), term.folded()),
                term.char_len(),
                entry.title_word_count(),
            );
            body + weight * title
        }
        _ => body,
    }
}

/// Score a raw term against a document's body.
///
/// Convenience form of [`score_entry`] for one-off use; folds both sides on
/// every call.
pub fn term_score(term: &str, doc: &Document) -> f64 {
    let Some(term) = ScoringTerm::new(term) else {
        return 0.0;
    };
    density(
        count_occurrences(&doc.body.to_lowercase(), term.folded()),
        term.char_len(),
        doc.word_count,
    )
}
