//! Source discovery and extraction as seen through a full ingest.

use std::fs;

use edaoogle::build::ingest_directory;

use crate::common::{built, html_page, write_wiki};

#[test]
fn test_documents_match_extraction() {
    let home = tempfile::tempdir().unwrap();
    let markup = "<title>Sample</title><h2>Intro</h2><p>Hello &amp; welcome</p>";
    write_wiki(home.path(), &[("Sample.html", markup)]).unwrap();

    let ingested = ingest_directory(home.path(), &home.path().join("wiki"), false).unwrap();
    assert_eq!(ingested.docs.len(), 1);

    let doc = &ingested.docs[0];
    assert_eq!(doc, &built(markup, "/wiki/Sample.html"));
    assert_eq!(doc.title, "Sample Intro ");
    assert_eq!(doc.body, "Hello & welcome ");
    assert_eq!(doc.word_count, 3);
}

#[test]
fn test_subdirectories_one_level_deep() {
    let home = tempfile::tempdir().unwrap();
    let wiki = home.path().join("wiki");
    fs::create_dir_all(wiki.join("a").join("b")).unwrap();
    fs::write(wiki.join("Top.html"), html_page("Top", "top")).unwrap();
    fs::write(wiki.join("a").join("Mid.html"), html_page("Mid", "mid")).unwrap();
    fs::write(wiki.join("a").join("b").join("Low.html"), html_page("Low", "low")).unwrap();

    let ingested = ingest_directory(home.path(), &wiki, false).unwrap();
    let paths: Vec<&str> = ingested.docs.iter().map(|d| d.path.as_str()).collect();
    assert_eq!(paths, vec!["/wiki/Top.html", "/wiki/a/Mid.html"]);
}

#[test]
fn test_order_is_stable_across_runs() {
    let home = tempfile::tempdir().unwrap();
    let pages: Vec<(String, String)> = (0..40)
        .map(|i| (format!("Page_{:02}.html", 39 - i), html_page("P", "word")))
        .collect();
    let refs: Vec<(&str, &str)> = pages
        .iter()
        .map(|(n, m)| (n.as_str(), m.as_str()))
        .collect();
    write_wiki(home.path(), &refs).unwrap();

    let wiki = home.path().join("wiki");
    let first = ingest_directory(home.path(), &wiki, false).unwrap().docs;
    let second = ingest_directory(home.path(), &wiki, false).unwrap().docs;
    assert_eq!(first, second);
    assert!(first.windows(2).all(|w| w[0].path < w[1].path));
}

#[test]
fn test_malformed_markup_is_ingested() {
    let home = tempfile::tempdir().unwrap();
    write_wiki(
        home.path(),
        &[
            ("Broken.html", "<p>kept text</p><div unterminated"),
            ("Plain.txt", "no tags at all"),
        ],
    )
    .unwrap();

    let ingested = ingest_directory(home.path(), &home.path().join("wiki"), false).unwrap();
    assert_eq!(ingested.docs.len(), 2);
    assert_eq!(ingested.docs[0].body, "kept text ");
    // Text before the first tag is not a content region
    assert_eq!(ingested.docs[1].word_count, 0);
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_is_skipped() {
    use std::os::unix::fs::PermissionsExt;

    let home = tempfile::tempdir().unwrap();
    write_wiki(
        home.path(),
        &[("Good.html", "<p>good</p>"), ("Locked.html", "<p>locked</p>")],
    )
    .unwrap();
    let locked = home.path().join("wiki").join("Locked.html");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    // Root can read anything; nothing to assert in that case
    if fs::read(&locked).is_ok() {
        return;
    }

    let ingested = ingest_directory(home.path(), &home.path().join("wiki"), false).unwrap();
    assert_eq!(ingested.docs.len(), 1);
    assert_eq!(ingested.skipped, 1);
}
