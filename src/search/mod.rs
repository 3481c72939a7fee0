// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search algorithms: where the rubber meets the road.
//!
//! The catalog is small and fixed, so search is a linear scan: facet filter,
//! text filter, rank. No index structures, no scores. The interesting part is
//! the ranking cascade in [`ranking`] and the fact that nothing here can fail:
//! empty catalogs, blank queries and unknown facet values all just narrow (or
//! don't narrow) the result list.

pub mod filter;
pub mod group;
pub mod ranking;
pub mod utils;

use crate::types::{ActiveFilters, Facet, SearchableItem};
use filter::{filter_and_sort, FacetMap, FacetValue, Searchable};

impl Searchable for SearchableItem {
    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(3 + self.tags.len());
        fields.push(self.title.as_str());
        if let Some(description) = &self.description {
            fields.push(description.as_str());
        }
        if let Some(subcategory) = &self.subcategory {
            fields.push(subcategory.as_str());
        }
        fields.extend(self.tags.iter().map(String::as_str));
        fields
    }

    fn facet_value(&self, key: &str) -> Option<FacetValue<'_>> {
        match key {
            "id" => Some(FacetValue::Scalar(&self.id)),
            "category" => Some(FacetValue::Scalar(&self.category)),
            "subcategory" => self.subcategory.as_deref().map(FacetValue::Scalar),
            "type" => Some(FacetValue::Scalar(self.item_type.as_str())),
            "tags" | "properties" => Some(FacetValue::List(&self.tags)),
            _ => None,
        }
    }
}

/// Translate the three fixed facets into the generic field map.
pub fn facet_map(filters: &ActiveFilters) -> FacetMap {
    Facet::ALL
        .iter()
        .map(|facet| {
            (
                facet.field().to_string(),
                filters.get(*facet).iter().cloned().collect(),
            )
        })
        .collect()
}

/// Filter and rank catalog items.
///
/// See the module docs for the pipeline. Pure: the same inputs always give
/// the same output, in the same order.
///
/// # Example
///
/// ```ignore
/// let catalog = Catalog::builtin();
/// let results = search(catalog.items(), "button", &ActiveFilters::default());
/// assert!(results[0].title.to_lowercase().starts_with("button"));
/// ```
pub fn search<'a>(
    items: &'a [SearchableItem],
    query: &str,
    filters: &ActiveFilters,
) -> Vec<&'a SearchableItem> {
    filter_and_sort(items, query, &facet_map(filters))
}
