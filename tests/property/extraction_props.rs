//! Extractor properties over arbitrary input.

use proptest::prelude::*;

use edaoogle::types::count_words;
use edaoogle::{extract, extract_text};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    /// Extraction never panics, whatever the input.
    #[test]
    fn prop_never_panics(markup in "\\PC{0,200}") {
        let _ = extract(&markup);
    }

    /// Markup-heavy input never panics either.
    #[test]
    fn prop_tag_soup_never_panics(markup in "[<>/a-z1-3 &;]{0,120}") {
        let extracted = extract(&markup);
        prop_assert_eq!(extract_text(&markup), extracted.flatten());
    }

    /// Output is space-terminated regions: never empty-but-nonzero.
    #[test]
    fn prop_regions_space_terminated(markup in "[<>a-z1-3 ]{0,120}") {
        let extracted = extract(&markup);
        for text in [&extracted.heading, &extracted.body] {
            prop_assert!(text.is_empty() || text.ends_with(' '));
        }
    }

    /// Text without any tag contributes nothing.
    #[test]
    fn prop_tagless_text_is_dropped(text in "[a-zA-Z0-9 .,]{0,80}") {
        let extracted = extract(&text);
        prop_assert!(extracted.heading.is_empty());
        prop_assert!(extracted.body.is_empty());
    }

    /// Wrapped body text survives with its words intact.
    #[test]
    fn prop_paragraph_words_survive(words in prop::collection::vec("[a-z]{1,8}", 1..10)) {
        let text = words.join(" ");
        let extracted = extract(&format!("<p>{}</p>", text));
        prop_assert_eq!(extracted.body, format!("{} ", text));
        prop_assert!(extracted.heading.is_empty());
    }

    /// A non-empty body always has at least one word, including when
    /// regions are made of whitespace character references.
    #[test]
    fn prop_nonempty_body_has_words(
        parts in prop::collection::vec(
            prop_oneof![
                Just("&nbsp;"),
                Just("&#32;"),
                Just("&#x20;"),
                Just("&#9;"),
                Just(" "),
                Just("x"),
                Just("&amp;"),
            ],
            0..8,
        ),
        regions in 1usize..4,
    ) {
        let content = parts.concat();
        let paragraphs = format!("<p>{}</p>", content).repeat(regions);
        let markup = format!("<title>t</title>{}", paragraphs);
        let body = extract(&markup).body;
        prop_assert!(body.is_empty() || count_words(&body) > 0, "body {:?}", body);
    }
}
