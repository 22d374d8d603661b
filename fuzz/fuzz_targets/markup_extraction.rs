// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for markup extraction.
//!
//! Source pages come from wherever the corpus was scraped. Unterminated tags,
//! stray angle brackets and broken entities must never crash a build.

#![no_main]

use edaoogle::build::document_from_markup;
use edaoogle::extract;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let markup = String::from_utf8_lossy(data);
    let extracted = extract(&markup);

    for text in [&extracted.heading, &extracted.body] {
        assert!(text.is_empty() || text.ends_with(' '));
    }

    let doc = document_from_markup(&markup, "/wiki/Fuzz.html");
    assert_eq!(doc.body, extracted.body);
    assert_eq!(doc.word_count as usize, doc.body.split_whitespace().count());
});
