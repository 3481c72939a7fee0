//! Facet filtering: categories, types and properties (tags).

use super::common::{titles, BUILTIN};
use std::collections::BTreeSet;
use swatch::{search, ActiveFilters, Facet, FilterUpdate, ItemType};

fn filters(facet: Facet, values: &[&str]) -> ActiveFilters {
    let mut filters = ActiveFilters::default();
    for value in values {
        filters.toggle(facet, value);
    }
    filters
}

#[test]
fn test_type_filter_browsing_is_alphabetical() {
    let results = search(BUILTIN.items(), "", &filters(Facet::Types, &["component"]));
    assert!(!results.is_empty());
    assert!(results.iter().all(|i| i.item_type == ItemType::Component));
    let t = titles(&results);
    let mut sorted = t.clone();
    sorted.sort_by_key(|s| s.to_lowercase());
    assert_eq!(t, sorted);
}

#[test]
fn test_multiple_values_in_one_facet_are_or() {
    let tokens = search(BUILTIN.items(), "", &filters(Facet::Types, &["token"])).len();
    let patterns = search(BUILTIN.items(), "", &filters(Facet::Types, &["pattern"])).len();
    let both = search(BUILTIN.items(), "", &filters(Facet::Types, &["token", "pattern"])).len();
    assert_eq!(both, tokens + patterns);
}

#[test]
fn test_facets_combine_with_and() {
    let mut f = filters(Facet::Types, &["component"]);
    f.toggle(Facet::Properties, "accessibility");
    let results = search(BUILTIN.items(), "", &f);
    assert_eq!(titles(&results), vec!["Alert", "Dialog", "Icon Button", "Tooltip"]);
}

#[test]
fn test_properties_and_text_together() {
    let results = search(BUILTIN.items(), "form", &filters(Facet::Properties, &["input"]));
    assert_eq!(
        titles(&results),
        vec![
            "Button", "Checkbox", "Input", "Radio Group", "Search", "Select", "Slider", "Switch",
            "Textarea"
        ]
    );
}

#[test]
fn test_category_filter() {
    let results = search(BUILTIN.items(), "", &filters(Facet::Categories, &["Patterns"]));
    assert_eq!(results.len(), 8);
    assert!(results.iter().all(|i| i.category == "Patterns"));
}

#[test]
fn test_unknown_value_matches_nothing() {
    assert!(search(BUILTIN.items(), "", &filters(Facet::Categories, &["Widgets"])).is_empty());
    assert!(search(BUILTIN.items(), "", &filters(Facet::Types, &["widget"])).is_empty());
}

#[test]
fn test_filter_values_are_case_sensitive() {
    assert!(search(BUILTIN.items(), "", &filters(Facet::Types, &["Component"])).is_empty());
}

#[test]
fn test_bulk_update_then_search() {
    let mut f = filters(Facet::Properties, &["form"]);
    f.apply(FilterUpdate {
        categories: Some(BTreeSet::from(["Patterns".to_string()])),
        ..Default::default()
    });
    let results = search(BUILTIN.items(), "", &f);
    assert_eq!(titles(&results), vec!["Form Layout", "Form Validation", "Search"]);
}

#[test]
fn test_facet_summary_values_all_match_something() {
    let summary = BUILTIN.facets();
    for facet in Facet::ALL {
        for value in summary.values(facet) {
            let results = search(BUILTIN.items(), "", &filters(facet, &[value.as_str()]));
            assert!(!results.is_empty(), "{} {} matched nothing", facet, value);
        }
    }
}
