// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Split text into highlighted and plain spans for rendering.
//!
//! All query terms go into one case-insensitive alternation and the text is
//! split on it in a single left-to-right pass, so spans alternate
//! plain/match in source order. At any position the leftmost alternative
//! wins; overlapping terms ("but" and "button") are not merged or extended,
//! and adjacent matches stay separate spans.

use regex::RegexBuilder;
use serde::Serialize;

/// A piece of the source text and whether it matched a query term.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightSpan {
    pub text: String,
    pub is_match: bool,
}

impl HighlightSpan {
    fn plain(text: &str) -> Self {
        HighlightSpan {
            text: text.to_string(),
            is_match: false,
        }
    }

    fn matched(text: &str) -> Self {
        HighlightSpan {
            text: text.to_string(),
            is_match: true,
        }
    }
}

/// Highlight every occurrence of any query term in `text`.
///
/// Concatenating the returned span texts always yields `text`. A blank query
/// (or empty text) gives a single plain span.
///
/// # Example
///
/// ```ignore
/// let spans = highlight_match("Primary Button", "prim");
/// assert_eq!(spans[0], HighlightSpan { text: "Prim".into(), is_match: true });
/// assert_eq!(spans[1], HighlightSpan { text: "ary Button".into(), is_match: false });
/// ```
pub fn highlight_match(text: &str, query: &str) -> Vec<HighlightSpan> {
    let terms: Vec<String> = query.split_whitespace().map(regex::escape).collect();
    if terms.is_empty() || text.is_empty() {
        return vec![HighlightSpan::plain(text)];
    }

    let pattern = format!("({})", terms.join("|"));
    // Escaped literals always compile; the size limit is the only way this fails.
    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(_) => return vec![HighlightSpan::plain(text)],
    };

    let mut spans = Vec::new();
    let mut last = 0;
    for m in re.find_iter(text) {
        if m.start() > last {
            spans.push(HighlightSpan::plain(&text[last..m.start()]));
        }
        if !m.as_str().is_empty() {
            spans.push(HighlightSpan::matched(m.as_str()));
        }
        last = m.end();
    }
    if last < text.len() {
        spans.push(HighlightSpan::plain(&text[last..]));
    }
    spans
}
