// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;

use crate::error::IngestError;
use crate::extract::extract;
use crate::types::Document;

use super::SourceFile;

/// Turn markup into a document stored under `url_path`.
pub fn document_from_markup(markup: &str, url_path: &str) -> Document {
    let extracted = extract(markup);
    Document::new(extracted.heading, extracted.body, url_path.to_string())
}

/// Read one source file and extract it.
///
/// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
/// stray Latin-1 page still contributes its ASCII text.
pub fn load_document(source: &SourceFile) -> Result<Document, IngestError> {
    let bytes = fs::read(&source.fs_path).map_err(|e| IngestError::Read {
        path: source.fs_path.clone(),
        source: e,
    })?;
    let markup = String::from_utf8_lossy(&bytes);
    Ok(document_from_markup(&markup, &source.url_path))
}
