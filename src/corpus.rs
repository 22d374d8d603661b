// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The corpus: an ordered, read-only set of documents, and the file that
//! persists it.
//!
//! `CorpusStore` owns the on-disk side. Building is idempotent: if the store
//! file already exists, `build` leaves it alone. Opening reads the whole file
//! once and yields a `Corpus`, which is immutable from then on and can be
//! shared across any number of concurrent queries behind an `Arc`.
//!
//! Each entry keeps case-folded copies of its title and body next to the
//! document, so query evaluation never lowercases corpus text.

use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::binary::{encode_corpus, CorpusLayer};
use crate::build::ingest_directory;
use crate::error::{DuplicatePath, StoreError};
use crate::types::{count_words, Document};

// =============================================================================
// IN-MEMORY CORPUS
// =============================================================================

/// One document plus the case-folded text the scorer matches against.
#[derive(Debug, Clone)]
pub struct CorpusEntry {
    doc: Document,
    folded_title: String,
    folded_body: String,
    title_word_count: u32,
}

impl CorpusEntry {
    fn new(doc: Document) -> Self {
        Self {
            folded_title: doc.title.to_lowercase(),
            folded_body: doc.body.to_lowercase(),
            title_word_count: count_words(&doc.title),
            doc,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    pub fn folded_title(&self) -> &str {
        &self.folded_title
    }

    pub fn folded_body(&self) -> &str {
        &self.folded_body
    }

    pub fn word_count(&self) -> u32 {
        self.doc.word_count
    }

    pub fn title_word_count(&self) -> u32 {
        self.title_word_count
    }
}

/// The full set of ingested documents, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
}

impl Corpus {
    /// Build a corpus, rejecting duplicate paths.
    pub fn from_documents(docs: Vec<Document>) -> Result<Self, DuplicatePath> {
        let mut seen = HashSet::with_capacity(docs.len());
        for doc in &docs {
            if !seen.insert(doc.path.as_str()) {
                return Err(DuplicatePath(doc.path.clone()));
            }
        }
        Ok(Self {
            entries: docs.into_iter().map(CorpusEntry::new).collect(),
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, doc_id: usize) -> Option<&Document> {
        self.entries.get(doc_id).map(CorpusEntry::document)
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    /// Every document in insertion order.
    ///
    /// The iterator is `Clone`, so a caller can restart the scan from any
    /// point without touching the store again.
    pub fn all_documents(&self) -> impl Iterator<Item = &Document> + Clone + '_ {
        self.entries.iter().map(CorpusEntry::document)
    }

    /// Copy the documents out, e.g. for persisting.
    pub fn to_documents(&self) -> Vec<Document> {
        self.all_documents().cloned().collect()
    }
}

// =============================================================================
// PERSISTED STORE
// =============================================================================

/// What a completed build did.
#[derive(Debug, Clone, PartialEq)]
pub struct BuildReport {
    pub documents: usize,
    pub skipped: usize,
    pub bytes: usize,
    pub elapsed: Duration,
}

/// Result of an idempotent build.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildStatus {
    /// A store already existed; nothing was touched.
    AlreadyPresent,
    Built(BuildReport),
}

/// The persisted corpus file.
#[derive(Debug, Clone)]
pub struct CorpusStore {
    path: PathBuf,
    compress: bool,
    show_progress: bool,
}

impl CorpusStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            compress: true,
            show_progress: false,
        }
    }

    /// Brotli-compress the document section (default on).
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Draw a progress bar while loading source files.
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a store file is present. This is the build-skip signal.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Ingest `corpus_dir` into the store unless a store already exists.
    pub fn build(&self, home: &Path, corpus_dir: &Path) -> Result<BuildStatus, StoreError> {
        if self.exists() {
            tracing::info!("Corpus store {} exists; skipping build", self.path.display());
            return Ok(BuildStatus::AlreadyPresent);
        }
        self.rebuild(home, corpus_dir).map(BuildStatus::Built)
    }

    /// Ingest `corpus_dir` and replace any existing store.
    pub fn rebuild(&self, home: &Path, corpus_dir: &Path) -> Result<BuildReport, StoreError> {
        let ingested = ingest_directory(home, corpus_dir, self.show_progress)?;
        let documents = ingested.docs.len();
        let bytes = self.write(&ingested.docs)?;

        tracing::info!(
            documents,
            skipped = ingested.skipped,
            bytes,
            "Wrote corpus store {}",
            self.path.display()
        );

        Ok(BuildReport {
            documents,
            skipped: ingested.skipped,
            bytes,
            elapsed: ingested.elapsed,
        })
    }

    /// Persist `docs`, returning the file size.
    ///
    /// The file is written under a temporary name and renamed into place, so
    /// a crash mid-write never leaves a truncated store that would be
    /// mistaken for a finished one.
    pub fn write(&self, docs: &[Document]) -> Result<usize, StoreError> {
        let bytes = encode_corpus(docs, self.compress).map_err(|e| StoreError::Write {
            path: self.path.clone(),
            source: e,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::Create {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let tmp_path = self.tmp_path();
        let mut file = fs::File::create(&tmp_path).map_err(|e| StoreError::Create {
            path: tmp_path.clone(),
            source: e,
        })?;
        let written = file.write_all(&bytes).and_then(|()| file.sync_all());
        drop(file);
        let written = written.and_then(|()| fs::rename(&tmp_path, &self.path));
        if let Err(e) = written {
            let _ = fs::remove_file(&tmp_path);
            return Err(StoreError::Write {
                path: self.path.clone(),
                source: e,
            });
        }

        Ok(bytes.len())
    }

    /// Read the store and validate it.
    pub fn open(&self) -> Result<Corpus, StoreError> {
        let bytes = fs::read(&self.path).map_err(|e| StoreError::Open {
            path: self.path.clone(),
            source: e,
        })?;
        let docs = CorpusLayer::from_bytes(&bytes)
            .and_then(|layer| layer.documents())
            .map_err(|e| self.corrupt(e.to_string()))?;
        let corpus = Corpus::from_documents(docs).map_err(|e| self.corrupt(e.to_string()))?;

        tracing::info!(
            documents = corpus.len(),
            bytes = bytes.len(),
            "Opened corpus store {}",
            self.path.display()
        );
        Ok(corpus)
    }

    /// Build if needed, then open. The startup path.
    pub fn open_or_build(&self, home: &Path, corpus_dir: &Path) -> Result<Corpus, StoreError> {
        self.build(home, corpus_dir)?;
        self.open()
    }

    fn corrupt(&self, reason: String) -> StoreError {
        StoreError::Corrupt {
            path: self.path.clone(),
            reason,
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
