// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query evaluation.
//!
//! Arbitrary queries and options against a fixed corpus must never panic,
//! and every answer must satisfy the ranking invariants.

#![no_main]

use std::sync::OnceLock;

use arbitrary::Arbitrary;
use edaoogle::{rank, search_or_failed, tokenize, Corpus, Document, ScoringTerm, SearchOptions};
use libfuzzer_sys::fuzz_target;

/// One query with the knobs a caller can turn.
#[derive(Debug, Arbitrary)]
struct QueryInput {
    query: String,
    limit: Option<u8>,
    heading_boost: Option<u8>,
    max_terms: Option<u8>,
    max_term_bytes: Option<u8>,
}

impl QueryInput {
    fn options(&self) -> SearchOptions {
        SearchOptions {
            heading_boost: self.heading_boost.map(f64::from),
            limit: self.limit.map(usize::from),
            max_terms: self.max_terms.map(usize::from),
            max_term_bytes: self.max_term_bytes.map(usize::from),
        }
    }
}

fn corpus() -> &'static Corpus {
    static CORPUS: OnceLock<Corpus> = OnceLock::new();
    CORPUS.get_or_init(|| {
        let bodies = [
            "cat cat dog",
            "dog dog dog",
            "Straße café naïve ÉCOLE",
            "日本語 テキスト 검색",
            "",
            "a aa aaa aaaa",
        ];
        let docs = bodies
            .iter()
            .enumerate()
            .map(|(i, b)| {
                Document::new(format!("{} ", b), b.to_string(), format!("/wiki/{}.html", i))
            })
            .collect();
        Corpus::from_documents(docs).expect("fixed corpus has unique paths")
    })
}

fuzz_target!(|input: QueryInput| {
    let corpus = corpus();
    let options = input.options();

    let response = search_or_failed(corpus, &input.query, &options);
    assert!(response.results.len() <= corpus.len());
    assert!(response.results.len() <= response.count);
    if let Some(limit) = options.limit {
        assert!(response.results.len() <= limit);
    }
    if response.error.is_some() {
        assert!(response.results.is_empty());
        assert!(options.max_terms.is_some() || options.max_term_bytes.is_some());
        return;
    }

    let terms: Vec<ScoringTerm> = tokenize(&input.query)
        .into_iter()
        .filter_map(ScoringTerm::new)
        .collect();
    let ranked = rank(corpus, &terms, options.heading_boost);
    assert_eq!(ranked.len(), response.count);
    for r in &ranked {
        assert!(r.score > 0.0 && r.score.is_finite());
    }
    for w in ranked.windows(2) {
        assert!(w[0].score > w[1].score || (w[0].score == w[1].score && w[0].doc_id < w[1].doc_id));
    }
});
