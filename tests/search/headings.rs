//! Heading text: kept out of the body, optionally scored with a weight.

use edaoogle::{search, Corpus, SearchOptions};

use crate::common::{built, make_titled_doc, result_paths};

fn boosted(weight: f64) -> SearchOptions {
    SearchOptions {
        heading_boost: Some(weight),
        ..SearchOptions::default()
    }
}

fn corpus() -> Corpus {
    Corpus::from_documents(vec![
        make_titled_doc("/wiki/Rust.html", "Rust ", "a systems language "),
        make_titled_doc("/wiki/Other.html", "Other ", "mentions rust once among words "),
    ])
    .unwrap()
}

#[test]
fn test_heading_text_ignored_by_default() {
    let response = search(&corpus(), "rust", &SearchOptions::default()).unwrap();
    assert_eq!(result_paths(&response), vec!["/wiki/Other.html"]);
}

#[test]
fn test_heading_boost_scores_titles() {
    let response = search(&corpus(), "rust", &boosted(1.0)).unwrap();
    assert_eq!(
        result_paths(&response),
        vec!["/wiki/Rust.html", "/wiki/Other.html"]
    );
}

#[test]
fn test_zero_boost_is_body_only() {
    let plain = search(&corpus(), "rust", &SearchOptions::default()).unwrap();
    let zero = search(&corpus(), "rust", &boosted(0.0)).unwrap();
    assert_eq!(result_paths(&plain), result_paths(&zero));
}

#[test]
fn test_extracted_headings_feed_the_boost() {
    let doc = built(
        "<title>Ferris</title><h1>Ferris the crab</h1><p>A mascot.</p>",
        "/wiki/Ferris.html",
    );
    assert_eq!(doc.title, "Ferris Ferris the crab ");
    assert_eq!(doc.word_count, 2);

    let corpus = Corpus::from_documents(vec![doc]).unwrap();
    assert_eq!(search(&corpus, "crab", &SearchOptions::default()).unwrap().count, 0);
    assert_eq!(search(&corpus, "crab", &boosted(2.0)).unwrap().count, 1);
}
