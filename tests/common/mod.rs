//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::path::Path;

use edaoogle::{Corpus, Document, SearchOptions, SearchResponse};

// Re-export canonical test utilities from edaoogle::testing
pub use edaoogle::testing::{html_page, make_corpus, make_doc, make_titled_doc, write_wiki};

// ============================================================================
// FIXTURES
// ============================================================================

/// The two-document corpus used throughout: A mentions cat twice and dog
/// once, B is all dog.
pub fn cat_dog_corpus() -> Corpus {
    make_corpus(&[
        ("/wiki/A.html", "cat cat dog"),
        ("/wiki/B.html", "dog dog dog"),
    ])
}

/// A small wiki with headings, for build and server tests.
pub fn sample_wiki(home: &Path) {
    write_wiki(
        home,
        &[
            (
                "Cat.html",
                &html_page("Cat", "The cat is a small domesticated carnivorous mammal."),
            ),
            (
                "Dog.html",
                &html_page("Dog", "The dog is a domesticated descendant of the wolf."),
            ),
            (
                "Hello_World.html",
                &html_page("Hello", "A hello world program prints hello world."),
            ),
        ],
    )
    .expect("Failed to write sample wiki");
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Run `query` with default options.
pub fn run(corpus: &Corpus, query: &str) -> SearchResponse {
    edaoogle::search(corpus, query, &SearchOptions::default()).expect("query rejected")
}

/// Paths of the hits, in rank order.
pub fn result_paths(response: &SearchResponse) -> Vec<&str> {
    response.results.iter().map(|h| h.path.as_str()).collect()
}

/// Paths of documents in corpus order.
pub fn corpus_paths(corpus: &Corpus) -> Vec<String> {
    corpus.all_documents().map(|d| d.path.clone()).collect()
}

/// A document as the builder would produce it for `markup` at `path`.
pub fn built(markup: &str, path: &str) -> Document {
    edaoogle::build::document_from_markup(markup, path)
}
