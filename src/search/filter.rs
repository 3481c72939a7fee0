// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Generic filter-then-rank pipeline for any titled record.
//!
//! The catalog engine is one user of this; anything else that can name a
//! title, some searchable text and a few facet fields can reuse it.
//!
//! A facet map entry `key -> values` reads field `key` from each item:
//! scalar fields pass by membership, list fields by non-empty intersection,
//! and items without the field fail. Entries with an empty value list are
//! ignored.

use super::ranking::{compare_alphabetical, compare_ranked};
use super::utils::{all_terms_match, is_blank, parse_query, ranking_query};
use std::collections::BTreeMap;

/// Facet restrictions keyed by field name.
pub type FacetMap = BTreeMap<String, Vec<String>>;

/// A field value as seen by facet filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetValue<'a> {
    Scalar(&'a str),
    List(&'a [String]),
}

impl FacetValue<'_> {
    fn matches(&self, wanted: &[String]) -> bool {
        match self {
            FacetValue::Scalar(value) => wanted.iter().any(|w| w == value),
            FacetValue::List(values) => values.iter().any(|v| wanted.contains(v)),
        }
    }
}

/// Something the pipeline can filter and rank.
pub trait Searchable {
    /// Stable identifier, used as the last tiebreaker.
    fn id(&self) -> &str;

    /// Primary match and ranking field.
    fn title(&self) -> &str;

    /// Every field free text is matched against, title included.
    fn search_fields(&self) -> Vec<&str>;

    /// Value of a named facet field, or `None` if the record has no such field.
    fn facet_value(&self, key: &str) -> Option<FacetValue<'_>>;
}

/// Does `item` survive every non-empty entry of `facets`?
pub fn passes_facets<T: Searchable + ?Sized>(item: &T, facets: &FacetMap) -> bool {
    facets
        .iter()
        .filter(|(_, wanted)| !wanted.is_empty())
        .all(|(key, wanted)| {
            item.facet_value(key)
                .is_some_and(|value| value.matches(wanted))
        })
}

/// Facet filter, then text filter, then rank.
///
/// A blank query skips text filtering and sorts alphabetically. Otherwise
/// every whitespace-separated term must appear in some search field, and
/// survivors are ranked by how the title relates to the whole query.
pub fn filter_and_sort<'a, T: Searchable>(
    items: &'a [T],
    query: &str,
    facets: &FacetMap,
) -> Vec<&'a T> {
    let mut results: Vec<&T> = items
        .iter()
        .filter(|item| passes_facets(*item, facets))
        .collect();

    if is_blank(query) {
        results.sort_by(|a, b| compare_alphabetical(a.title(), a.id(), b.title(), b.id()));
        return results;
    }

    let terms = parse_query(query);
    results.retain(|item| all_terms_match(&terms, item.search_fields()));

    let whole = ranking_query(query);
    results.sort_by(|a, b| compare_ranked(a.title(), a.id(), b.title(), b.id(), &whole));
    results
}
