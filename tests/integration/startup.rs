//! Startup path: build-if-missing, then serve.

use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use edaoogle::error::ServerError;
use edaoogle::{search, BuildStatus, Config, CorpusStore, SearchOptions};

use crate::common::{result_paths, sample_wiki};

#[test]
fn test_first_start_builds_second_start_reuses() {
    let home = tempfile::tempdir().unwrap();
    sample_wiki(home.path());
    let config = Config {
        store_path: home.path().join("edaoogle.corpus"),
        ..Config::with_home(home.path())
    };
    let store = CorpusStore::new(&config.store_path);

    assert!(!store.exists());
    let corpus = store
        .open_or_build(&config.home, &config.corpus_dir)
        .unwrap();
    assert!(store.exists());
    assert_eq!(corpus.len(), 3);

    // Sources disappearing after the build does not matter
    std::fs::remove_dir_all(&config.corpus_dir).unwrap();
    assert_eq!(
        store.build(&config.home, &config.corpus_dir).unwrap(),
        BuildStatus::AlreadyPresent
    );
    let reopened = store
        .open_or_build(&config.home, &config.corpus_dir)
        .unwrap();

    let response = search(&reopened, "wolf", &SearchOptions::default()).unwrap();
    assert_eq!(result_paths(&response), vec!["/wiki/Dog.html"]);
}

#[tokio::test]
async fn test_bind_failure_is_reported() {
    let taken = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let config = Config {
        bind: IpAddr::V4(Ipv4Addr::LOCALHOST),
        port: taken.local_addr().unwrap().port(),
        ..Config::default()
    };

    let err = edaoogle::server::serve(&config, Arc::new(edaoogle::Corpus::default()))
        .await
        .unwrap_err();
    assert!(matches!(err, ServerError::Bind { .. }), "{:?}", err);
}
