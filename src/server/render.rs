// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a `SearchResponse` into something a client can read.

use std::fmt::Write as _;
use std::path::Path;

use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::types::SearchResponse;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html>

<head>
    <meta charset="utf-8" />
    <title>EDAoogle</title>
    <link rel="stylesheet" href="/css/style.css" />
</head>

<body>
    <article class="edaoogle">
        <div class="title"><a href="/">EDAoogle</a></div>
        <div class="search">
            <form action="/search" method="get">
"#;

const PAGE_TAIL: &str = r#"    </article>
</body>

</html>
"#;

/// The results page: search form pre-filled with the query, a match count
/// with elapsed seconds, then one link per hit in rank order.
pub fn results_page(response: &SearchResponse) -> String {
    let mut page =
        String::with_capacity(PAGE_HEAD.len() + PAGE_TAIL.len() + 96 * response.results.len());
    page.push_str(PAGE_HEAD);
    let _ = writeln!(
        page,
        "                <input type=\"text\" name=\"q\" value=\"{}\" autofocus>",
        encode_double_quoted_attribute(&response.query)
    );
    page.push_str("            </form>\n        </div>\n");

    if let Some(error) = &response.error {
        let _ = writeln!(
            page,
            "        <div class=\"error\">{}</div>",
            encode_text(error)
        );
    }

    let _ = writeln!(
        page,
        "        <div class=\"results\">{} results ({:.6} seconds):</div>",
        response.count, response.elapsed_seconds
    );
    for hit in &response.results {
        let _ = writeln!(
            page,
            "        <div class=\"result\"><a href=\"{}\">{}</a></div>",
            encode_double_quoted_attribute(&hit.href),
            encode_text(&hit.label)
        );
    }

    page.push_str(PAGE_TAIL);
    page
}

/// The JSON form of a response.
pub fn results_json(response: &SearchResponse) -> serde_json::Result<String> {
    serde_json::to_string(response)
}

/// A minimal page for error statuses.
pub fn error_page(status: u16, reason: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\" /><title>{status} {reason}</title></head>\n\
         <body><h1>{status} {reason}</h1></body>\n</html>\n",
        status = status,
        reason = encode_text(reason)
    )
}

/// Content type for a static file, from its extension.
pub fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match ext.as_deref() {
        Some("html" | "htm") => "text/html; charset=utf-8",
        Some("css") => "text/css; charset=utf-8",
        Some("js" | "mjs") => "text/javascript; charset=utf-8",
        Some("json") => "application/json",
        Some("txt") => "text/plain; charset=utf-8",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        Some("ico") => "image/x-icon",
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        _ => "application/octet-stream",
    }
}
