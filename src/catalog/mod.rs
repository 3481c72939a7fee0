// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The catalog: every searchable entry, validated once and then frozen.
//!
//! The default catalog ships inside the binary (`data/catalog.json`). Any
//! other catalog goes through the same JSON parser and the same checks, so a
//! `Catalog` value always has unique, non-empty ids and non-empty titles.

mod facets;

pub use facets::FacetSummary;

use crate::types::SearchableItem;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

const BUILTIN_CATALOG: &str = include_str!("../../data/catalog.json");

/// Why a catalog could not be built.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate item id '{id}'")]
    DuplicateId { id: String },

    #[error("item '{id}' has an empty {field}")]
    EmptyField { id: String, field: &'static str },

    #[error("failed to read catalog '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// An immutable, validated list of searchable items.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<SearchableItem>,
}

impl Catalog {
    /// Validate and wrap `items`. Order is preserved.
    pub fn new(items: Vec<SearchableItem>) -> Result<Self, CatalogError> {
        let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());
        for item in &items {
            if item.id.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: item.id.clone(),
                    field: "id",
                });
            }
            if item.title.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    id: item.id.clone(),
                    field: "title",
                });
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId {
                    id: item.id.clone(),
                });
            }
        }
        debug!(items = items.len(), "catalog validated");
        Ok(Catalog { items })
    }

    /// The catalog compiled into this crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Parse a JSON array of items.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<SearchableItem> = serde_json::from_str(json)?;
        Self::new(items)
    }

    /// Read and parse a catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), bytes = content.len(), "loading catalog");
        Self::from_json(&content)
    }

    pub fn items(&self) -> &[SearchableItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&SearchableItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Distinct facet values present in this catalog.
    pub fn facets(&self) -> FacetSummary {
        FacetSummary::from_items(&self.items)
    }
}
