// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for corpus store parsing.
//!
//! A store file is read back on every start. Truncated, corrupted or hostile
//! files must be rejected with an error, never a panic or an oversized
//! allocation.

#![no_main]

use edaoogle::binary::{decode_corpus, encode_corpus, CorpusLayer};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(layer) = CorpusLayer::from_bytes(data) else {
        return;
    };
    let Ok(docs) = layer.documents() else {
        return;
    };

    assert_eq!(docs.len(), layer.header.doc_count as usize);
    for doc in &docs {
        assert_eq!(doc.word_count as usize, doc.body.split_whitespace().count());
    }

    // Whatever decoded must survive a rewrite unchanged
    let compress = layer.header.flags.is_compressed();
    let bytes = encode_corpus(&docs, compress).expect("re-encoding decoded documents");
    assert_eq!(decode_corpus(&bytes).expect("decoding re-encoded store"), docs);
});
