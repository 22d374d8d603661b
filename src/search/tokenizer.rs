// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query tokenization.
//!
//! A term is any maximal run of non-whitespace characters. Nothing else
//! happens here: no stemming, no stop words, no case folding (that belongs
//! to the scorer), no deduplication. A repeated term is scored twice.

/// Split a raw query into terms, in order. Never yields an empty term.
pub fn tokenize(query: &str) -> Vec<&str> {
    query.split_whitespace().collect()
}
