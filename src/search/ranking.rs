// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Ranking is bucketed by how the title relates to the query, not by a
//! numeric score. Within a bucket, titles sort alphabetically.
//!
//! Bucket hierarchy: Exact > Prefix > Contains > Other
//!
//! `Other` items matched through description, subcategory or tags (or matched
//! term-by-term without the whole query appearing in the title).

use std::cmp::Ordering;

/// How a title relates to the whole lowercased query.
///
/// Smaller enum value = better rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TitleMatch {
    Exact,
    Prefix,
    Contains,
    Other,
}

impl TitleMatch {
    /// Classify `title` against `query`. `query` must already be lowercase.
    pub fn classify(title: &str, query: &str) -> Self {
        let title = title.to_lowercase();
        if title == query {
            TitleMatch::Exact
        } else if title.starts_with(query) {
            TitleMatch::Prefix
        } else if title.contains(query) {
            TitleMatch::Contains
        } else {
            TitleMatch::Other
        }
    }
}

/// Alphabetical order used as the final tiebreaker and for browsing mode.
///
/// Case-insensitive first, then raw title, then id so the order is total.
pub fn compare_alphabetical(a_title: &str, a_id: &str, b_title: &str, b_id: &str) -> Ordering {
    a_title
        .to_lowercase()
        .cmp(&b_title.to_lowercase())
        .then_with(|| a_title.cmp(b_title))
        .then_with(|| a_id.cmp(b_id))
}

/// Compare two titles for ranking against a lowercase query.
///
/// Sort order:
/// 1. **Title match** - Exact, then Prefix, then Contains, then Other
/// 2. **Title** - alphabetical within a bucket
/// 3. **Id** - final tiebreaker for determinism
pub fn compare_ranked(
    a_title: &str,
    a_id: &str,
    b_title: &str,
    b_id: &str,
    query: &str,
) -> Ordering {
    TitleMatch::classify(a_title, query)
        .cmp(&TitleMatch::classify(b_title, query))
        .then_with(|| compare_alphabetical(a_title, a_id, b_title, b_id))
}
