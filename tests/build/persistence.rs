//! Store file format as written by a real build.

use std::fs;

use edaoogle::binary::{decode_corpus, CorpusLayer, MAGIC};
use edaoogle::{search, CorpusStore, SearchOptions};

use crate::common::{result_paths, sample_wiki};

#[test]
fn test_store_layout() {
    let home = tempfile::tempdir().unwrap();
    sample_wiki(home.path());
    let store = CorpusStore::new(home.path().join("edaoogle.corpus"));
    store.rebuild(home.path(), &home.path().join("wiki")).unwrap();

    let bytes = fs::read(store.path()).unwrap();
    assert_eq!(&bytes[..4], &MAGIC);

    let layer = CorpusLayer::from_bytes(&bytes).unwrap();
    assert_eq!(layer.header.doc_count, 3);
    assert!(layer.header.flags.is_compressed());
    assert_eq!(decode_corpus(&bytes).unwrap(), layer.documents().unwrap());
}

#[test]
fn test_reopened_store_ranks_identically() {
    let home = tempfile::tempdir().unwrap();
    sample_wiki(home.path());
    let store = CorpusStore::new(home.path().join("edaoogle.corpus"));
    store.rebuild(home.path(), &home.path().join("wiki")).unwrap();

    let options = SearchOptions::default();
    let first = store.open().unwrap();
    let second = store.open().unwrap();
    for query in ["cat", "the", "hello world", "domesticated wolf"] {
        let a = search(&first, query, &options).unwrap();
        let b = search(&second, query, &options).unwrap();
        assert_eq!(result_paths(&a), result_paths(&b), "query {:?}", query);
        assert_eq!(a.count, b.count);
    }
}
