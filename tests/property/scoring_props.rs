//! Term scorer properties.

use proptest::prelude::*;

use edaoogle::{term_score, Document};

use crate::common::make_doc;

/// Oracle: density computed the long way round.
fn oracle_score(term: &str, body: &str) -> f64 {
    let term = term.to_lowercase();
    let body = body.to_lowercase();
    let words = body.split_whitespace().count();
    if term.is_empty() || words == 0 {
        return 0.0;
    }
    let mut occurrences = 0;
    let mut rest = body.as_str();
    while let Some(i) = rest.find(&term) {
        occurrences += 1;
        rest = &rest[i + term.len()..];
    }
    occurrences as f64 / term.chars().count() as f64 / words as f64
}

fn body_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-cA-C]{1,4}", 0..12).prop_map(|words| words.join(" "))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Word count is the whitespace token count of the body.
    #[test]
    fn prop_word_count_is_token_count(body in "[a-z \t\n]{0,60}") {
        let doc = Document::new(String::new(), body.clone(), "/p".into());
        prop_assert_eq!(doc.word_count as usize, body.split_whitespace().count());
    }

    /// Scores agree with a direct computation.
    #[test]
    fn prop_score_matches_oracle(term in "[a-cA-C]{1,3}", body in body_strategy()) {
        let doc = make_doc("/p", &body);
        let got = term_score(&term, &doc);
        let want = oracle_score(&term, &body);
        prop_assert!((got - want).abs() < 1e-12, "got {} want {}", got, want);
    }

    /// Scores are never negative, and zero exactly when the term is absent.
    #[test]
    fn prop_score_zero_iff_absent(term in "[a-c]{1,3}", body in body_strategy()) {
        let doc = make_doc("/p", &body);
        let score = term_score(&term, &doc);
        prop_assert!(score >= 0.0);
        prop_assert_eq!(score > 0.0, body.to_lowercase().contains(&term));
    }

    /// Case never changes a score.
    #[test]
    fn prop_case_insensitive(term in "[a-c]{1,3}", body in body_strategy()) {
        let doc = make_doc("/p", &body);
        prop_assert_eq!(term_score(&term, &doc), term_score(&term.to_uppercase(), &doc));
    }
}
