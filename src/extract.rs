// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Markup to searchable text, split into heading text and body text.
//!
//! This is deliberately not an HTML parser. A tag is anything from `<` to the
//! next `>`; the text between the end of one tag and the start of the next is
//! a content region. Each region is credited to the heading accumulator when
//! the tag that opens it is a heading tag (`h1`-`h3`, `title`), and to the
//! body accumulator otherwise.
//!
//! Runs of back-to-back tags are looked through: `<div><h2>Intro</h2>` credits
//! "Intro" to the heading side even though the tag directly before the
//! previous content boundary was a `<div>`.
//!
//! Malformed markup never fails. An unterminated tag stops extraction and
//! whatever was accumulated so far is returned.

use html_escape::decode_html_entities;

use crate::types::Extracted;

/// Tag-name prefixes that introduce heading text. Matched ASCII
/// case-insensitively against the raw tag, including its `<`.
pub const HEADING_TAG_PREFIXES: [&str; 4] = ["<h1", "<h2", "<h3", "<title"];

/// Which accumulator a content region feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Heading,
    Body,
}

/// Split `markup` into heading text and body text.
///
/// Every appended region is followed by a single space, so
/// `<title>Sample</title><p>Hello world</p>` yields `"Sample "` and
/// `"Hello world "`. Empty and whitespace-only regions are dropped; character
/// references such as `&amp;` are decoded.
pub fn extract(markup: &str) -> Extracted {
    let bytes = markup.as_bytes();
    let mut extracted = Extracted::default();
    let mut pos = 0;

    while pos < bytes.len() {
        let Some(open) = find_byte(bytes, b'<', pos) else {
            break;
        };
        let Some(close) = find_byte(bytes, b'>', open) else {
            break;
        };

        let mut region = classify(&markup[open..=close]);
        let mut cursor = close + 1;

        // Look through consecutive tags for nested heading markup
        while bytes.get(cursor) == Some(&b'<') {
            let Some(close) = find_byte(bytes, b'>', cursor) else {
                return extracted;
            };
            if classify(&markup[cursor..=close]) == Region::Heading {
                region = Region::Heading;
            }
            cursor = close + 1;
        }

        let end = find_byte(bytes, b'<', cursor).unwrap_or(bytes.len());
        append(&mut extracted, region, &markup[cursor..end]);
        pos = end;
    }

    extracted
}

/// Flattened variant: heading text followed by body text.
pub fn extract_text(markup: &str) -> String {
    extract(markup).flatten()
}

/// Is this raw tag (e.g. `<h2 class="x">`) heading-introducing?
pub fn is_heading_tag(tag: &str) -> bool {
    HEADING_TAG_PREFIXES.iter().any(|prefix| {
        tag.len() >= prefix.len()
            && tag.as_bytes()[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
    })
}

fn classify(tag: &str) -> Region {
    if is_heading_tag(tag) {
        Region::Heading
    } else {
        Region::Body
    }
}

fn append(extracted: &mut Extracted, region: Region, content: &str) {
    let text = decode_html_entities(content);
    // `&nbsp;` and friends only become whitespace once decoded
    if text.trim().is_empty() {
        return;
    }
    let target = match region {
        Region::Heading => &mut extracted.heading,
        Region::Body => &mut extracted.body,
    };
    target.push_str(&text);
    target.push(' ');
}

#[inline]
fn find_byte(bytes: &[u8], needle: u8, from: usize) -> Option<usize> {
    bytes
        .get(from..)?
        .iter()
        .position(|&b| b == needle)
        .map(|i| from + i)
}
