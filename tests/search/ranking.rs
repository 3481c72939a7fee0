//! Relevance ranking against the built-in catalog.
//!
//! Exact title > title prefix > title substring > everything else, with
//! alphabetical order inside each bucket.

use super::common::{make_item, titles, BUILTIN};
use swatch::{search, ActiveFilters, ItemType, TitleMatch};

fn query(q: &str) -> Vec<String> {
    titles(&search(BUILTIN.items(), q, &ActiveFilters::default()))
}

#[test]
fn test_exact_then_prefix_then_substring() {
    assert_eq!(query("button"), vec!["Button", "Button Group", "Icon Button"]);
}

#[test]
fn test_query_case_ignored() {
    assert_eq!(query("BUTTON"), query("button"));
}

#[test]
fn test_trailing_space_counts_for_ranking() {
    let items = vec![
        make_item("button", "Button", ItemType::Component),
        make_item("button-group", "Button Group", ItemType::Component),
    ];
    // "button " is a prefix of "button group" but not of "button".
    let results = search(&items, "button ", &ActiveFilters::default());
    assert_eq!(titles(&results), vec!["Button Group", "Button"]);
}

#[test]
fn test_title_buckets_before_description_matches() {
    let results = query("color");
    assert_eq!(
        results,
        vec!["Color Contrast", "Color Palette", "Semantic Colors", "Dark Mode"]
    );
}

#[test]
fn test_substring_not_word_boundary() {
    // "information" in Alert's description contains "form".
    let results = query("form");
    assert_eq!(&results[..2], &["Form Layout", "Form Validation"]);
    assert!(results.contains(&"Alert".to_string()));
    // Non-title matches stay alphabetical.
    let rest = &results[2..];
    let mut sorted = rest.to_vec();
    sorted.sort_by_key(|t| t.to_lowercase());
    assert_eq!(rest, sorted.as_slice());
}

#[test]
fn test_prefix_ranks_above_alphabetically_earlier_substring() {
    assert_eq!(query("tab"), vec!["Table", "Tabs", "Data Tables"]);
}

#[test]
fn test_exact_match_ranks_first_among_title_matches() {
    for item in BUILTIN.items() {
        let results = search(BUILTIN.items(), &item.title, &ActiveFilters::default());
        let lowered = item.title.to_lowercase();
        let first_title_match = results
            .iter()
            .find(|r| r.title.to_lowercase().contains(&lowered))
            .expect("item must find itself");
        assert_eq!(
            TitleMatch::classify(&first_title_match.title, &lowered),
            TitleMatch::Exact,
            "query {:?}",
            item.title
        );
    }
}

#[test]
fn test_multi_term_uses_whole_query_for_ranking() {
    let items = vec![
        make_item("a", "Grid Layout", ItemType::Foundation),
        make_item("b", "Layout Grid", ItemType::Foundation),
        make_item("c", "Grid", ItemType::Foundation),
    ];
    let results = search(&items, "layout grid", &ActiveFilters::default());
    // "c" lacks "layout"; "b" is an exact match for the whole query.
    assert_eq!(titles(&results), vec!["Layout Grid", "Grid Layout"]);
}

#[test]
fn test_ties_broken_by_id() {
    let items = vec![
        make_item("z", "Same", ItemType::Token),
        make_item("a", "Same", ItemType::Token),
    ];
    let results = search(&items, "same", &ActiveFilters::default());
    assert_eq!(results[0].id, "a");
    assert_eq!(results[1].id, "z");
}
