// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Finding the source files that make up a corpus.
//!
//! The corpus directory is scanned along with its immediate subdirectories.
//! Symbolic links count when they resolve to a regular file; linked
//! directories are not followed. The result is sorted by URL path so that
//! corpus insertion order does not depend on the filesystem's listing order.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{IngestError, StoreError};

/// One file to ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Where to read it from
    pub fs_path: PathBuf,
    /// How the HTTP server addresses it, e.g. `/wiki/Rust.html`
    pub url_path: String,
}

/// Everything a directory scan turned up.
#[derive(Debug, Default)]
pub struct Discovered {
    pub sources: Vec<SourceFile>,
    /// Entries that were seen but cannot be ingested
    pub skipped: Vec<IngestError>,
}

/// Scan `corpus_dir`, computing URL paths relative to `home`.
///
/// Fails only if `corpus_dir` itself cannot be listed.
pub fn discover_sources(home: &Path, corpus_dir: &Path) -> Result<Discovered, StoreError> {
    let mut discovered = Discovered::default();
    let mut subdirs = Vec::new();

    scan_dir(corpus_dir, &mut discovered, Some(&mut subdirs)).map_err(|e| {
        StoreError::SourceDir {
            path: corpus_dir.to_path_buf(),
            source: e,
        }
    })?;

    for dir in subdirs {
        if let Err(e) = scan_dir(&dir, &mut discovered, None) {
            discovered.skipped.push(IngestError::Read {
                path: dir,
                source: e,
            });
        }
    }

    for source in &mut discovered.sources {
        source.url_path = url_path_for(home, corpus_dir, &source.fs_path);
    }
    discovered.sources.sort_by(|a, b| {
        a.url_path
            .cmp(&b.url_path)
            .then_with(|| a.fs_path.cmp(&b.fs_path))
    });
    drop_url_collisions(&mut discovered);

    Ok(discovered)
}

/// Keep the first file for each URL path; later ones become skipped entries.
///
/// Collisions only arise from lossy conversion of non-UTF-8 file names.
fn drop_url_collisions(discovered: &mut Discovered) {
    let mut kept: Vec<SourceFile> = Vec::with_capacity(discovered.sources.len());
    for source in discovered.sources.drain(..) {
        match kept.last() {
            Some(previous) if previous.url_path == source.url_path => {
                discovered.skipped.push(IngestError::UrlCollision {
                    path: source.fs_path,
                    url_path: source.url_path,
                });
            }
            _ => kept.push(source),
        }
    }
    discovered.sources = kept;
}

fn scan_dir(
    dir: &Path,
    discovered: &mut Discovered,
    mut subdirs: Option<&mut Vec<PathBuf>>,
) -> std::io::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();

        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(e) => {
                discovered.skipped.push(IngestError::Read { path, source: e });
                continue;
            }
        };

        if file_type.is_dir() {
            if let Some(subdirs) = subdirs.as_deref_mut() {
                subdirs.push(path);
            }
            continue;
        }

        // Follows symlinks; a dangling link surfaces as a read error
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => discovered.sources.push(SourceFile {
                fs_path: path,
                url_path: String::new(),
            }),
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => discovered.skipped.push(IngestError::NotAFile { path }),
            Err(e) => discovered.skipped.push(IngestError::Read { path, source: e }),
        }
    }
    Ok(())
}

/// URL path of `file` as served from `home`.
///
/// Falls back to the path below `corpus_dir`'s parent when the corpus lives
/// outside the home directory.
pub fn url_path_for(home: &Path, corpus_dir: &Path, file: &Path) -> String {
    let relative = file
        .strip_prefix(home)
        .ok()
        .or_else(|| corpus_dir.parent().and_then(|p| file.strip_prefix(p).ok()))
        .unwrap_or(file);

    let mut url = String::new();
    for component in relative.components() {
        if let Component::Normal(part) = component {
            url.push('/');
            url.push_str(&part.to_string_lossy());
        }
    }
    if url.is_empty() {
        url.push('/');
    }
    url
}
