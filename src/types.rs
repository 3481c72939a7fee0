// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the catalog search.
//!
//! These types describe what lives in the catalog and what the user has
//! narrowed it down to. Items are immutable once the catalog is built; filter
//! state is a trio of plain string sets so that toggling and bulk replacement
//! stay trivial.
//!
//! # Invariants
//!
//! - **SearchableItem**: `id` is unique across a catalog. Enforced by
//!   [`Catalog::new`](crate::Catalog::new), not by the type itself.
//!
//! - **ActiveFilters**: an empty set means "no restriction" for that facet.
//!   There is no distinction between "never touched" and "emptied by toggling".

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// =============================================================================
// ITEM TYPES
// =============================================================================

/// The fixed kinds of catalog entry.
///
/// Ordering follows declaration order, which is also the tab order in the
/// grouped result view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Component,
    Token,
    Pattern,
    Foundation,
}

impl ItemType {
    pub const ALL: [ItemType; 4] = [
        ItemType::Component,
        ItemType::Token,
        ItemType::Pattern,
        ItemType::Foundation,
    ];

    /// Lowercase name, identical to the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::Component => "component",
            ItemType::Token => "token",
            ItemType::Pattern => "pattern",
            ItemType::Foundation => "foundation",
        }
    }
}

impl fmt::Display for ItemType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown item type '{0}' (expected component, token, pattern or foundation)")]
pub struct ParseItemTypeError(pub String);

impl FromStr for ItemType {
    type Err = ParseItemTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "component" => Ok(ItemType::Component),
            "token" => Ok(ItemType::Token),
            "pattern" => Ok(ItemType::Pattern),
            "foundation" => Ok(ItemType::Foundation),
            _ => Err(ParseItemTypeError(s.to_string())),
        }
    }
}

/// One entry in the catalog: a component, token, pattern or foundation page.
///
/// `href` is carried through untouched; the engine never looks at it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchableItem {
    pub id: String,
    pub title: String,
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subcategory: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub href: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

impl SearchableItem {
    /// Key used when grouping results: subcategory if present, else category.
    pub fn group_key(&self) -> &str {
        self.subcategory.as_deref().unwrap_or(&self.category)
    }
}

// =============================================================================
// FILTER STATE
// =============================================================================

/// A named filtering dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet {
    Categories,
    Types,
    /// Tags, called "properties" in the filter UI.
    Properties,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Categories, Facet::Types, Facet::Properties];

    /// Name of the item field this facet reads.
    pub fn field(self) -> &'static str {
        match self {
            Facet::Categories => "category",
            Facet::Types => "type",
            Facet::Properties => "tags",
        }
    }
}

impl fmt::Display for Facet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Facet::Categories => "categories",
            Facet::Types => "types",
            Facet::Properties => "properties",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown facet '{0}' (expected categories, types or properties)")]
pub struct ParseFacetError(pub String);

impl FromStr for Facet {
    type Err = ParseFacetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "categories" | "category" => Ok(Facet::Categories),
            "types" | "type" => Ok(Facet::Types),
            "properties" | "property" | "tags" | "tag" => Ok(Facet::Properties),
            _ => Err(ParseFacetError(s.to_string())),
        }
    }
}

/// Currently active facet values. Order inside a set carries no meaning.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveFilters {
    #[serde(default)]
    pub categories: BTreeSet<String>,
    #[serde(default)]
    pub types: BTreeSet<String>,
    #[serde(default)]
    pub properties: BTreeSet<String>,
}

impl ActiveFilters {
    pub fn get(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Categories => &self.categories,
            Facet::Types => &self.types,
            Facet::Properties => &self.properties,
        }
    }

    pub fn get_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Categories => &mut self.categories,
            Facet::Types => &mut self.types,
            Facet::Properties => &mut self.properties,
        }
    }

    /// Add `value` if absent, remove it if present.
    ///
    /// Returns `true` if the value is active after the call.
    pub fn toggle(&mut self, facet: Facet, value: &str) -> bool {
        let set = self.get_mut(facet);
        if set.remove(value) {
            false
        } else {
            set.insert(value.to_string());
            true
        }
    }

    /// Replace every facet set that `update` provides; leave the rest alone.
    pub fn apply(&mut self, update: FilterUpdate) {
        if let Some(categories) = update.categories {
            self.categories = categories;
        }
        if let Some(types) = update.types {
            self.types = types;
        }
        if let Some(properties) = update.properties {
            self.properties = properties;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty() && self.types.is_empty() && self.properties.is_empty()
    }

    pub fn clear(&mut self) {
        self.categories.clear();
        self.types.clear();
        self.properties.clear();
    }

    /// Total number of active values across all facets.
    pub fn active_count(&self) -> usize {
        self.categories.len() + self.types.len() + self.properties.len()
    }
}

/// Partial replacement for [`ActiveFilters`]. `None` leaves a facet unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterUpdate {
    #[serde(default)]
    pub categories: Option<BTreeSet<String>>,
    #[serde(default)]
    pub types: Option<BTreeSet<String>>,
    #[serde(default)]
    pub properties: Option<BTreeSet<String>>,
}
