//! Idempotent build and open behavior of `CorpusStore`.

use std::fs;

use edaoogle::{BuildStatus, CorpusStore, StoreError};

use crate::common::{corpus_paths, html_page, sample_wiki, write_wiki};

fn setup() -> (tempfile::TempDir, CorpusStore) {
    let home = tempfile::tempdir().expect("tempdir");
    sample_wiki(home.path());
    let store = CorpusStore::new(home.path().join("edaoogle.corpus"));
    (home, store)
}

#[test]
fn test_build_then_open() {
    let (home, store) = setup();
    let wiki = home.path().join("wiki");

    let status = store.build(home.path(), &wiki).unwrap();
    let BuildStatus::Built(report) = status else {
        panic!("expected a fresh build, got {:?}", status);
    };
    assert_eq!(report.documents, 3);
    assert_eq!(report.skipped, 0);
    assert_eq!(report.bytes as u64, fs::metadata(store.path()).unwrap().len());

    let corpus = store.open().unwrap();
    assert_eq!(
        corpus_paths(&corpus),
        vec!["/wiki/Cat.html", "/wiki/Dog.html", "/wiki/Hello_World.html"]
    );
}

#[test]
fn test_build_skips_existing_store() {
    let (home, store) = setup();
    let wiki = home.path().join("wiki");
    store.build(home.path(), &wiki).unwrap();
    let before = fs::read(store.path()).unwrap();

    // New sources are ignored until the store is removed or rebuilt
    write_wiki(home.path(), &[("Fish.html", &html_page("Fish", "fish swim"))]).unwrap();
    assert_eq!(
        store.build(home.path(), &wiki).unwrap(),
        BuildStatus::AlreadyPresent
    );
    assert_eq!(fs::read(store.path()).unwrap(), before);
    assert_eq!(store.open().unwrap().len(), 3);

    let report = store.rebuild(home.path(), &wiki).unwrap();
    assert_eq!(report.documents, 4);
    assert_eq!(store.open().unwrap().len(), 4);
}

#[test]
fn test_build_twice_is_byte_identical() {
    let (home, store) = setup();
    let wiki = home.path().join("wiki");
    store.rebuild(home.path(), &wiki).unwrap();
    let first = fs::read(store.path()).unwrap();
    store.rebuild(home.path(), &wiki).unwrap();
    assert_eq!(fs::read(store.path()).unwrap(), first);
}

#[test]
fn test_corrupt_store_is_fatal_and_not_rebuilt() {
    let (home, store) = setup();
    fs::write(store.path(), b"EDAO but not really a store").unwrap();

    let err = store
        .open_or_build(home.path(), &home.path().join("wiki"))
        .unwrap_err();
    assert!(matches!(err, StoreError::Corrupt { .. }), "{:?}", err);
    assert_eq!(fs::read(store.path()).unwrap(), b"EDAO but not really a store");
}

#[test]
fn test_truncated_store_is_corrupt() {
    let (home, store) = setup();
    store.rebuild(home.path(), &home.path().join("wiki")).unwrap();
    let bytes = fs::read(store.path()).unwrap();
    fs::write(store.path(), &bytes[..bytes.len() / 2]).unwrap();

    assert!(matches!(store.open(), Err(StoreError::Corrupt { .. })));
}

#[test]
fn test_missing_corpus_dir() {
    let home = tempfile::tempdir().unwrap();
    let store = CorpusStore::new(home.path().join("edaoogle.corpus"));
    let err = store
        .build(home.path(), &home.path().join("wiki"))
        .unwrap_err();
    assert!(matches!(err, StoreError::SourceDir { .. }));
    assert!(!store.exists());
}

#[test]
fn test_empty_corpus_dir_builds_empty_store() {
    let home = tempfile::tempdir().unwrap();
    fs::create_dir_all(home.path().join("wiki")).unwrap();
    let store = CorpusStore::new(home.path().join("edaoogle.corpus"));

    let corpus = store
        .open_or_build(home.path(), &home.path().join("wiki"))
        .unwrap();
    assert!(corpus.is_empty());
}

#[test]
fn test_uncompressed_store_opens_identically() {
    let (home, store) = setup();
    let wiki = home.path().join("wiki");
    let plain = CorpusStore::new(home.path().join("plain.corpus")).with_compression(false);

    store.rebuild(home.path(), &wiki).unwrap();
    plain.rebuild(home.path(), &wiki).unwrap();

    assert_eq!(
        store.open().unwrap().to_documents(),
        plain.open().unwrap().to_documents()
    );
}
