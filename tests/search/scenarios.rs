//! End-to-end scenarios from the search surface's point of view.

use super::common::{make_item_with_tags, manual_session, titles, BUILTIN, WINDOW};
use swatch::{highlight_match, search, ActiveFilters, Catalog, Facet, HighlightSpan, ItemType};

#[test]
fn test_button_prefix_before_mid_title() {
    let catalog = Catalog::new(vec![
        make_item_with_tags("primary-button", "Primary Button", ItemType::Component, &["interactive", "input"]),
        make_item_with_tags("button-secondary", "Button Secondary", ItemType::Component, &["interactive"]),
    ])
    .unwrap();
    let results = search(catalog.items(), "button", &ActiveFilters::default());
    assert_eq!(titles(&results), vec!["Button Secondary", "Primary Button"]);
}

#[test]
fn test_nonexistent_query_settles_empty() {
    let (mut session, clock) = manual_session(&BUILTIN);
    session.set_search_query("xyz-nonexistent");
    assert!(session.is_searching());

    clock.advance(WINDOW);
    session.poll();
    assert!(session.results().is_empty());
    assert!(!session.is_searching());
}

#[test]
fn test_toggle_component_type_with_empty_query() {
    let (mut session, _) = manual_session(&BUILTIN);
    session.toggle_filter(Facet::Types, "component");
    let results = session.results();
    assert!(!results.is_empty());
    assert!(results.iter().all(|i| i.item_type == ItemType::Component));
    assert_eq!(results[0].title, "Accordion");
    assert_eq!(results.last().map(|i| i.title.as_str()), Some("Tooltip"));
}

#[test]
fn test_highlight_primary_button() {
    let spans = highlight_match("Primary Button", "prim");
    let rebuilt: String = spans.iter().map(|s| s.text.as_str()).collect();
    assert_eq!(rebuilt, "Primary Button");
    assert_eq!(
        spans[0],
        HighlightSpan {
            text: "Prim".to_string(),
            is_match: true
        }
    );
}

#[test]
fn test_empty_catalog_never_fails() {
    let catalog = Catalog::new(Vec::new()).unwrap();
    let (mut session, clock) = manual_session(&catalog);
    session.set_search_query("anything");
    session.toggle_filter(Facet::Categories, "Components");
    clock.advance(WINDOW);
    session.poll();
    assert!(session.results().is_empty());
}

#[test]
fn test_empty_query_no_filters_returns_whole_catalog() {
    let results = search(BUILTIN.items(), "", &ActiveFilters::default());
    assert_eq!(results.len(), BUILTIN.len());
    let t = titles(&results);
    let mut sorted = t.clone();
    sorted.sort_by_key(|s| s.to_lowercase());
    assert_eq!(t, sorted);
}
