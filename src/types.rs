// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the corpus and of a query answer.
//!
//! A `Document` is created once per source file during ingestion and never
//! changes afterwards. Everything produced at query time (`ScoredResult`,
//! `SearchHit`, `SearchResponse`) is transient and dropped once the response
//! has been rendered.
//!
//! # Invariants
//!
//! - **Document**: `word_count == body.split_whitespace().count()`. A document
//!   with an empty body has `word_count == 0` and never scores above zero.
//! - **Corpus**: `path` is unique across all documents.
//! - **ScoredResult**: `score > 0.0` for every result the ranker returns.

use serde::{Deserialize, Serialize};

// =============================================================================
// DOCUMENT TYPES
// =============================================================================

/// One ingested source file.
///
/// `title` carries the heading text (levels 1-3 and `<title>`), `body` every
/// other content region. `path` is the URL path of the source file relative
/// to the served home directory, and doubles as the document's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub title: String,
    pub body: String,
    pub path: String,
    pub word_count: u32,
}

impl Document {
    /// Build a document, deriving `word_count` from `body`.
    pub fn new(title: String, body: String, path: String) -> Self {
        let word_count = count_words(&body);
        Self {
            title,
            body,
            path,
            word_count,
        }
    }
}

/// Number of whitespace-delimited tokens in `text`.
///
/// This is the length normalizer used by the term scorer. Saturates at
/// `u32::MAX`, far beyond anything the store limits allow.
pub fn count_words(text: &str) -> u32 {
    u32::try_from(text.split_whitespace().count()).unwrap_or(u32::MAX)
}

/// Heading and body text pulled out of one markup document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extracted {
    pub heading: String,
    pub body: String,
}

impl Extracted {
    /// Single flattened text: heading text followed by body text.
    pub fn flatten(&self) -> String {
        let mut text = String::with_capacity(self.heading.len() + self.body.len());
        text.push_str(&self.heading);
        text.push_str(&self.body);
        text
    }
}

// =============================================================================
// QUERY RESULT TYPES
// =============================================================================

/// A document reference with its accumulated score for one query.
///
/// `doc_id` is the document's position in corpus insertion order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredResult {
    pub doc_id: usize,
    pub score: f64,
}

/// What leaves the core for each matching document: where it lives and how
/// to label the link. Title, body and score stay behind this boundary.
///
/// `path` is the document's identity as ingested; `href` is the same path
/// percent-encoded per segment, safe to put in a link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub path: String,
    pub href: String,
    pub label: String,
}

/// The answer to one query, as handed to the rendering layer.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub query: String,
    pub count: usize,
    pub elapsed_seconds: f64,
    pub results: Vec<SearchHit>,
    /// Set when the query could not be evaluated; `results` is then empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// A response carrying an evaluation failure and no results.
    pub fn failed(query: &str, error: String) -> Self {
        Self {
            query: query.to_string(),
            count: 0,
            elapsed_seconds: 0.0,
            results: Vec::new(),
            error: Some(error),
        }
    }
}
