// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Parallel document loading.
//!
//! Reading and extracting one HTML file is independent of every other, so
//! the whole corpus loads with a single `par_iter()`. Rayon's indexed collect
//! keeps results in source order, which is what fixes corpus insertion
//! order; no sort is needed afterwards.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;

use crate::error::IngestError;
use crate::types::Document;

use super::{load_document, SourceFile};

/// Documents loaded from a set of sources, plus the ones that failed.
#[derive(Debug, Default)]
pub struct LoadedDocuments {
    pub docs: Vec<Document>,
    pub failed: Vec<IngestError>,
}

impl FromIterator<Result<Document, IngestError>> for LoadedDocuments {
    fn from_iter<I: IntoIterator<Item = Result<Document, IngestError>>>(iter: I) -> Self {
        let mut loaded = LoadedDocuments::default();
        for result in iter {
            match result {
                Ok(doc) => loaded.docs.push(doc),
                Err(e) => loaded.failed.push(e),
            }
        }
        loaded
    }
}

/// Load and extract every source, in order.
#[cfg(feature = "parallel")]
pub fn load_documents(sources: &[SourceFile]) -> LoadedDocuments {
    let results: Vec<Result<Document, IngestError>> =
        sources.par_iter().map(load_document).collect();
    results.into_iter().collect()
}

/// Load and extract every source, in order.
/// Sequential fallback.
#[cfg(not(feature = "parallel"))]
pub fn load_documents(sources: &[SourceFile]) -> LoadedDocuments {
    sources.iter().map(load_document).collect()
}

/// Load all sources in parallel with progress reporting.
#[cfg(feature = "parallel")]
pub fn load_documents_with_progress(
    sources: &[SourceFile],
    progress: &ProgressBar,
) -> LoadedDocuments {
    let counter = AtomicUsize::new(0);
    let total = sources.len();

    let results: Vec<Result<Document, IngestError>> = sources
        .par_iter()
        .map(|source| {
            let result = load_document(source);

            // Update progress
            let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
            progress.set_position(count as u64);
            if count.is_multiple_of(100) || count == total {
                progress.set_message(format!("{}/{}", count, total));
            }

            result
        })
        .collect();

    results.into_iter().collect()
}

/// Load all sources with progress reporting.
/// Non-parallel fallback (no-op progress).
#[cfg(not(feature = "parallel"))]
pub fn load_documents_with_progress(sources: &[SourceFile]) -> LoadedDocuments {
    load_documents(sources)
}
