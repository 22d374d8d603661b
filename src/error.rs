// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the library surface.
//!
//! Low-level codecs speak `io::Error`; everything a caller can act on is
//! lifted into one of the enums below. The binary wraps them in `anyhow`.

use std::io;
use std::net::SocketAddr;
use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while turning one source file into a document.
///
/// These never abort a build: the file is skipped with a warning.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file could not be read
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The entry is not a regular file (or a link to one)
    #[error("Not a regular file: {path}")]
    NotAFile { path: PathBuf },
    /// Another file already maps to the same URL path
    #[error("{path} maps to {url_path}, already taken by another file")]
    UrlCollision { path: PathBuf, url_path: String },
}

/// Errors raised by the corpus store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file exists but could not be read
    #[error("Failed to open corpus store {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The store file could not be created
    #[error("Failed to create corpus store {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Encoding or writing the store failed part-way
    #[error("Failed to write corpus store {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The store file is damaged or not a corpus store at all
    #[error("Corpus store {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
    /// The corpus source directory is missing or unreadable
    #[error("Cannot scan corpus directory {path}: {source}")]
    SourceDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Two documents claim the same path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Duplicate document path: {0}")]
pub struct DuplicatePath(pub String);

/// Errors raised while evaluating a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query splits into more terms than one evaluation allows
    #[error("Query has {count} terms (max {max})")]
    TooManyTerms { count: usize, max: usize },
    /// A single term is longer than allowed
    #[error("Query term is {len} bytes long (max {max})")]
    TermTooLong { len: usize, max: usize },
}

/// Errors raised by the HTTP front end.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound
    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Io(#[from] io::Error),
}
