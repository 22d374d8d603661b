// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for varint (LEB128) encoding/decoding.
//!
//! Every length and word count in the store is a varint. If decode panics on
//! malformed input, opening a damaged store crashes instead of failing.

#![no_main]

use edaoogle::binary::{decode_varint, encode_varint, MAX_VARINT_BYTES};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // decode_varint returns Ok or Err, never panics
    if let Ok((value, consumed)) = decode_varint(data) {
        let mut reencoded = Vec::new();
        encode_varint(value, &mut reencoded);

        let (redecoded, reconsumed) = decode_varint(&reencoded)
            .expect("Re-encoding of valid value should always decode");
        assert_eq!(value, redecoded, "Roundtrip failed: {} != {}", value, redecoded);
        assert_eq!(reconsumed, reencoded.len());

        assert!(
            consumed <= MAX_VARINT_BYTES,
            "Varint consumed {} bytes, max is {}",
            consumed,
            MAX_VARINT_BYTES
        );
        assert!(consumed <= data.len());
    }
});
