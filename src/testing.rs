// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use std::fs;
use std::io;
use std::path::Path;

use crate::corpus::Corpus;
use crate::types::Document;

/// Create a document whose title is empty, with `body` as given.
///
/// Bodies are taken verbatim, so word counts are exactly the whitespace
/// token count of `body`.
pub fn make_doc(path: &str, body: &str) -> Document {
    Document::new(String::new(), body.to_string(), path.to_string())
}

/// Create a document with heading text.
pub fn make_titled_doc(path: &str, title: &str, body: &str) -> Document {
    Document::new(title.to_string(), body.to_string(), path.to_string())
}

/// Build a corpus from `(path, body)` pairs, in order.
///
/// Panics on duplicate paths.
pub fn make_corpus(docs: &[(&str, &str)]) -> Corpus {
    Corpus::from_documents(docs.iter().map(|(p, b)| make_doc(p, b)).collect())
        .unwrap_or_else(|e| panic!("test corpus has {}", e))
}

/// Minimal HTML page with a `<title>` and a body paragraph.
pub fn html_page(title: &str, body: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body><p>{}</p></body></html>",
        title, body
    )
}

/// Write `pages` as `<home>/wiki/<name>` files.
pub fn write_wiki(home: &Path, pages: &[(&str, &str)]) -> io::Result<()> {
    let wiki = home.join(crate::config::CORPUS_SUBDIR);
    fs::create_dir_all(&wiki)?;
    for (name, markup) in pages {
        fs::write(wiki.join(name), markup)?;
    }
    Ok(())
}
