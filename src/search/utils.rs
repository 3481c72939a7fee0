// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared utilities for search modules.
//!
//! Query parsing and the substring test used by both the catalog engine and
//! the generic filter. Kept together so the two paths can't drift apart on
//! what "matches" means.

/// Parse a query string into lowercase, whitespace-separated terms.
///
/// # Example
///
/// ```ignore
/// let terms = parse_query("  Primary   BUTTON ");
/// assert_eq!(terms, vec!["primary", "button"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    query.split_whitespace().map(str::to_lowercase).collect()
}

/// The whole query as used for ranking: lowercased, whitespace kept as typed.
pub fn ranking_query(query: &str) -> String {
    query.to_lowercase()
}

/// True if the query imposes no text restriction.
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Every term must appear (as a substring) in at least one of the fields.
///
/// Terms are expected to be lowercase already; fields are lowercased here.
pub fn all_terms_match<'a, I>(terms: &[String], fields: I) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    let haystacks: Vec<String> = fields.into_iter().map(str::to_lowercase).collect();
    terms
        .iter()
        .all(|term| haystacks.iter().any(|field| field.contains(term.as_str())))
}
