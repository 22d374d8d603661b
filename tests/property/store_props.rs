//! Persisted corpus round-trips and corruption detection.

use proptest::prelude::*;

use edaoogle::binary::{decode_corpus, encode_corpus};
use edaoogle::Document;

fn docs_strategy() -> impl Strategy<Value = Vec<Document>> {
    prop::collection::vec(("\\PC{0,20}", "\\PC{0,60}"), 0..8).prop_map(|pairs| {
        pairs
            .into_iter()
            .enumerate()
            .map(|(i, (title, body))| Document::new(title, body, format!("/wiki/{}.html", i)))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// What is written is what is read, in the same order.
    #[test]
    fn prop_store_preserves_documents(docs in docs_strategy(), compress in any::<bool>()) {
        let bytes = encode_corpus(&docs, compress).unwrap();
        prop_assert_eq!(decode_corpus(&bytes).unwrap(), docs);
    }

    /// Flipping any byte is detected.
    #[test]
    fn prop_bit_flip_detected(docs in docs_strategy(), index in any::<prop::sample::Index>()) {
        let mut bytes = encode_corpus(&docs, true).unwrap();
        let i = index.index(bytes.len());
        bytes[i] ^= 0x01;
        prop_assert!(decode_corpus(&bytes).is_err());
    }
}
