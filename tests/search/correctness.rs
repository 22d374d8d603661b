//! Which documents match, and with what score.

use edaoogle::{term_score, Corpus};

use crate::common::{cat_dog_corpus, make_corpus, make_doc, result_paths, run};

#[test]
fn test_single_term() {
    let response = run(&cat_dog_corpus(), "cat");
    assert_eq!(result_paths(&response), vec!["/wiki/A.html"]);
    assert_eq!(response.count, 1);
}

#[test]
fn test_density_values() {
    let a = make_doc("/wiki/A.html", "cat cat dog");
    let b = make_doc("/wiki/B.html", "dog dog dog");
    assert!((term_score("cat", &a) - 2.0 / 9.0).abs() < 1e-12);
    assert!((term_score("dog", &a) - 1.0 / 9.0).abs() < 1e-12);
    assert!((term_score("dog", &b) - 1.0 / 3.0).abs() < 1e-12);
    assert_eq!(term_score("cat", &b), 0.0);
}

#[test]
fn test_no_match() {
    let response = run(&cat_dog_corpus(), "zebra");
    assert_eq!(response.count, 0);
    assert!(response.results.is_empty());
    assert!(response.error.is_none());
}

#[test]
fn test_case_insensitive() {
    let corpus = make_corpus(&[
        ("/wiki/Hello.html", "Hello World"),
        ("/wiki/Other.html", "nothing"),
    ]);
    for query in ["world", "WORLD", "WoRlD"] {
        assert_eq!(result_paths(&run(&corpus, query)), vec!["/wiki/Hello.html"]);
    }
}

#[test]
fn test_substring_matches() {
    let corpus = make_corpus(&[
        ("/wiki/Concat.html", "concatenate strings"),
        ("/wiki/Plain.html", "plain words"),
    ]);
    assert_eq!(result_paths(&run(&corpus, "cat")), vec!["/wiki/Concat.html"]);
}

#[test]
fn test_occurrences_do_not_overlap() {
    let doc = make_doc("/a", "aaaa");
    // "aa" fits twice without overlap, not three times
    assert!((term_score("aa", &doc) - 2.0 / 2.0 / 1.0).abs() < 1e-12);
}

#[test]
fn test_term_length_counts_characters() {
    let doc = make_doc("/a", "café");
    assert!((term_score("é", &doc) - 1.0).abs() < 1e-12);
    assert!((term_score("café", &doc) - 0.25).abs() < 1e-12);
}

#[test]
fn test_empty_body_never_matches() {
    let corpus = make_corpus(&[("/wiki/Empty.html", ""), ("/wiki/Full.html", "cat")]);
    assert_eq!(result_paths(&run(&corpus, "cat")), vec!["/wiki/Full.html"]);
}

#[test]
fn test_empty_corpus() {
    let response = run(&Corpus::default(), "anything");
    assert_eq!(response.count, 0);
}

#[test]
fn test_labels() {
    let corpus = make_corpus(&[("/wiki/Rust_(programming_language).html", "rust is fast")]);
    let response = run(&corpus, "rust");
    assert_eq!(response.results[0].label, "Rust (programming language)");
}
