//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{ItemType, SearchableItem};

/// Default category for an item type, matching the built-in catalog.
pub fn default_category(item_type: ItemType) -> &'static str {
    match item_type {
        ItemType::Component => "Components",
        ItemType::Token => "Design Tokens",
        ItemType::Pattern => "Patterns",
        ItemType::Foundation => "Foundations",
    }
}

/// Create a simple test item with no tags, description or subcategory.
///
/// This is the canonical implementation used across all tests.
pub fn make_item(id: &str, title: &str, item_type: ItemType) -> SearchableItem {
    SearchableItem {
        id: id.to_string(),
        title: title.to_string(),
        category: default_category(item_type).to_string(),
        subcategory: None,
        description: None,
        href: format!("/{}", id),
        tags: vec![],
        item_type,
    }
}

/// Create a test item with tags.
pub fn make_item_with_tags(
    id: &str,
    title: &str,
    item_type: ItemType,
    tags: &[&str],
) -> SearchableItem {
    SearchableItem {
        tags: tags.iter().map(|t| t.to_string()).collect(),
        ..make_item(id, title, item_type)
    }
}

/// Create a test item with an explicit category and optional subcategory.
pub fn make_item_in(
    id: &str,
    title: &str,
    item_type: ItemType,
    category: &str,
    subcategory: Option<&str>,
) -> SearchableItem {
    SearchableItem {
        category: category.to_string(),
        subcategory: subcategory.map(str::to_string),
        ..make_item(id, title, item_type)
    }
}

/// Create a test item with a description.
pub fn make_item_described(
    id: &str,
    title: &str,
    item_type: ItemType,
    description: &str,
) -> SearchableItem {
    SearchableItem {
        description: Some(description.to_string()),
        ..make_item(id, title, item_type)
    }
}
