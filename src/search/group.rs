// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Grouping ranked results for display.
//!
//! The result list shows sections headed by subcategory (or category when an
//! item has none) plus per-type tab counts. Grouping never reorders items
//! within a group and never drops or duplicates one.

use crate::types::{ItemType, SearchableItem};
use serde::Serialize;
use std::collections::BTreeMap;

/// A run of results sharing a group key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultGroup<'a> {
    pub name: &'a str,
    pub items: Vec<&'a SearchableItem>,
}

/// Group ranked results by [`SearchableItem::group_key`].
///
/// Groups appear in the order of their first (best-ranked) member.
pub fn group_results<'a>(results: &[&'a SearchableItem]) -> Vec<ResultGroup<'a>> {
    let mut groups: Vec<ResultGroup<'a>> = Vec::new();
    let mut positions: BTreeMap<&'a str, usize> = BTreeMap::new();

    for &item in results {
        let key = item.group_key();
        match positions.get(key) {
            Some(&pos) => groups[pos].items.push(item),
            None => {
                positions.insert(key, groups.len());
                groups.push(ResultGroup {
                    name: key,
                    items: vec![item],
                });
            }
        }
    }

    groups
}

/// Result counts per item type, for the tab strip.
///
/// Every type is present, with zero where nothing matched.
pub fn count_by_type(results: &[&SearchableItem]) -> BTreeMap<ItemType, usize> {
    let mut counts: BTreeMap<ItemType, usize> = ItemType::ALL.iter().map(|t| (*t, 0)).collect();
    for item in results {
        *counts.entry(item.item_type).or_insert(0) += 1;
    }
    counts
}

/// Keep only results of one type, preserving rank order.
pub fn filter_by_type<'a>(results: &[&'a SearchableItem], item_type: ItemType) -> Vec<&'a SearchableItem> {
    results
        .iter()
        .copied()
        .filter(|item| item.item_type == item_type)
        .collect()
}
