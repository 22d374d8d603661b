// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Keyword search over a local corpus of HTML documents.
//!
//! Source pages are reduced to plain text once, persisted to a single store
//! file, and then scanned linearly for every query. A document's score for a
//! term is the term's density in the body; a multi-term query sums those
//! densities and ranks by the total.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ extract.rs  │────▶│  build/      │────▶│  corpus.rs   │
//! │ (markup →   │     │ (discover,   │     │ (Corpus,     │
//! │  text)      │     │  load)       │     │  CorpusStore)│
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                            ┌────────────────────┘
//!                            ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  server/    │◀────│  search/     │◀────│  scoring/    │
//! │ (HTTP,      │     │ (tokenize,   │     │ (density,    │
//! │  render)    │     │  respond)    │     │  rank)       │
//! └─────────────┘     └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use edaoogle::{search, Corpus, Document, SearchOptions};
//!
//! let corpus = Corpus::from_documents(vec![
//!     Document::new(String::new(), "cat cat dog".into(), "/wiki/A.html".into()),
//!     Document::new(String::new(), "dog dog dog".into(), "/wiki/B.html".into()),
//! ])
//! .unwrap();
//!
//! let response = search(&corpus, "cat", &SearchOptions::default()).unwrap();
//! assert_eq!(response.count, 1);
//! assert_eq!(response.results[0].path, "/wiki/A.html");
//! ```

pub mod binary;
pub mod build;
pub mod config;
pub mod corpus;
pub mod error;
pub mod extract;
pub mod scoring;
pub mod search;
pub mod server;
pub mod types;

#[doc(hidden)]
pub mod testing;

pub use config::Config;
pub use corpus::{BuildReport, BuildStatus, Corpus, CorpusEntry, CorpusStore};
pub use error::{DuplicatePath, IngestError, QueryError, ServerError, StoreError};
pub use extract::{extract, extract_text};
pub use scoring::{rank, term_score, ScoringTerm};
pub use search::{display_label, link_href, search, search_or_failed, tokenize, SearchOptions};
pub use types::{Document, Extracted, ScoredResult, SearchHit, SearchResponse};
