//! Result order for multi-document, multi-term queries.

use edaoogle::{rank, ScoredResult, ScoringTerm};

use crate::common::{cat_dog_corpus, make_corpus, result_paths, run};

fn terms(query: &str) -> Vec<ScoringTerm> {
    edaoogle::tokenize(query)
        .into_iter()
        .filter_map(ScoringTerm::new)
        .collect()
}

#[test]
fn test_dog_ranks_denser_document_first() {
    let response = run(&cat_dog_corpus(), "dog");
    assert_eq!(result_paths(&response), vec!["/wiki/B.html", "/wiki/A.html"]);
}

#[test]
fn test_shorter_document_wins_at_equal_occurrences() {
    let corpus = make_corpus(&[
        ("/wiki/Long.html", "rust and many other filler words here"),
        ("/wiki/Short.html", "rust rocks"),
    ]);
    assert_eq!(
        result_paths(&run(&corpus, "rust")),
        vec!["/wiki/Short.html", "/wiki/Long.html"]
    );
}

#[test]
fn test_multi_term_scores_are_additive() {
    let corpus = make_corpus(&[
        ("/wiki/A.html", "apple banana"),
        ("/wiki/B.html", "apple apple cherry cherry"),
        ("/wiki/C.html", "banana"),
    ]);

    let combined = rank(&corpus, &terms("apple banana"), None);
    let apple = rank(&corpus, &terms("apple"), None);
    let banana = rank(&corpus, &terms("banana"), None);

    let part = |rs: &[ScoredResult], doc_id: usize| {
        rs.iter()
            .find(|r| r.doc_id == doc_id)
            .map_or(0.0, |r| r.score)
    };
    for result in &combined {
        let expected = part(&apple[..], result.doc_id) + part(&banana[..], result.doc_id);
        assert!((result.score - expected).abs() < 1e-12);
    }
    assert_eq!(combined.len(), 3);
}

#[test]
fn test_document_matching_any_term_is_returned() {
    let response = run(&cat_dog_corpus(), "zebra cat");
    assert_eq!(result_paths(&response), vec!["/wiki/A.html"]);
}

#[test]
fn test_scores_descend() {
    let corpus = make_corpus(&[
        ("/1", "x y z w"),
        ("/2", "x x y z"),
        ("/3", "x x x y"),
        ("/4", "x"),
        ("/5", "y y y y"),
    ]);
    let ranked = rank(&corpus, &terms("x"), None);
    assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
    assert_eq!(ranked.len(), 4);
    assert_eq!(ranked[0].doc_id, 3);
}

#[test]
fn test_equal_scores_keep_corpus_order() {
    let corpus = make_corpus(&[
        ("/wiki/Zeta.html", "fox a"),
        ("/wiki/Alpha.html", "b fox"),
        ("/wiki/Mid.html", "fox c"),
    ]);
    assert_eq!(
        result_paths(&run(&corpus, "fox")),
        vec!["/wiki/Zeta.html", "/wiki/Alpha.html", "/wiki/Mid.html"]
    );
}
