// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

/// Human-readable link text for a document path.
///
/// `/wiki/Rust_(programming_language).html` becomes
/// `Rust (programming language)`: the last path segment without its
/// extension, percent-decoded, with underscores read as spaces.
pub fn display_label(path: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or(path);
    let stem = match segment.rfind('.') {
        Some(dot) if dot > 0 => &segment[..dot],
        _ => segment,
    };
    if stem.is_empty() {
        return path.to_string();
    }

    let decoded = urlencoding::decode(stem)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| stem.to_string());
    decoded.replace('_', " ")
}

/// Link target for a document path: every segment percent-encoded, so names
/// containing `%`, `?`, `#` or spaces survive the trip through a browser and
/// back through the static file handler.
pub fn link_href(path: &str) -> String {
    path.split('/')
        .map(urlencoding::encode)
        .collect::<Vec<_>>()
        .join("/")
}
