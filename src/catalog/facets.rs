// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use crate::types::{Facet, ItemType, SearchableItem};
use serde::Serialize;
use std::collections::BTreeSet;

/// Distinct facet values present in a set of items, each sorted.
///
/// Drives the filter menus: only values that can actually match are offered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetSummary {
    pub categories: BTreeSet<String>,
    pub types: BTreeSet<ItemType>,
    pub tags: BTreeSet<String>,
}

impl FacetSummary {
    pub fn from_items(items: &[SearchableItem]) -> Self {
        let mut summary = FacetSummary::default();
        for item in items {
            summary.categories.insert(item.category.clone());
            summary.types.insert(item.item_type);
            summary.tags.extend(item.tags.iter().cloned());
        }
        summary
    }

    /// Values for one facet, as the strings a filter set would hold.
    pub fn values(&self, facet: Facet) -> Vec<String> {
        match facet {
            Facet::Categories => self.categories.iter().cloned().collect(),
            Facet::Types => self.types.iter().map(|t| t.as_str().to_string()).collect(),
            Facet::Properties => self.tags.iter().cloned().collect(),
        }
    }
}
