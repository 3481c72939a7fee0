//! Session lifecycle: debounce, open/close, clear.

use super::common::{ids, manual_session, titles, BUILTIN, WINDOW};
use std::collections::BTreeSet;
use std::time::Duration;
use swatch::{Facet, FilterUpdate, Key, KeyPress};

#[test]
fn test_burst_of_keystrokes_searches_latest_only() {
    let (mut session, clock) = manual_session(&BUILTIN);
    for prefix in ["d", "di", "dia", "dial"] {
        session.set_search_query(prefix);
        clock.advance(Duration::from_millis(100));
        assert!(!session.poll(), "searched mid-burst at {:?}", prefix);
    }
    clock.advance(Duration::from_millis(200));
    assert!(session.poll());
    assert_eq!(titles(session.results()), vec!["Dialog", "Button"]);
}

#[test]
fn test_query_ahead_of_results_until_debounce() {
    let (mut session, _) = manual_session(&BUILTIN);
    session.set_search_query("tabs");
    assert_eq!(session.query(), "tabs");
    assert_eq!(session.results().len(), BUILTIN.len());
}

#[test]
fn test_filter_change_after_settling_reuses_query() {
    let (mut session, clock) = manual_session(&BUILTIN);
    session.set_search_query("overlay");
    clock.advance(WINDOW);
    session.poll();
    assert_eq!(titles(session.results()), vec!["Dialog", "Select", "Tooltip"]);

    session.toggle_filter(Facet::Properties, "accessibility");
    assert_eq!(titles(session.results()), vec!["Dialog", "Tooltip"]);
}

#[test]
fn test_filter_change_mid_debounce_waits_for_query() {
    let (mut session, clock) = manual_session(&BUILTIN);
    session.set_search_query("overlay");
    clock.advance(Duration::from_millis(100));

    session.toggle_filter(Facet::Properties, "accessibility");
    assert!(session.is_searching());
    assert_eq!(
        titles(session.results()),
        vec![
            "Alert",
            "Color Contrast",
            "Dialog",
            "Form Validation",
            "Icon Button",
            "Keyboard Navigation",
            "Motion",
            "Screen Reader Support",
            "Tooltip",
        ]
    );

    clock.advance(Duration::from_millis(200));
    assert!(session.poll());
    assert!(!session.is_searching());
    assert_eq!(titles(session.results()), vec!["Dialog", "Tooltip"]);
}

#[test]
fn test_set_active_filters_leaves_absent_sets() {
    let (mut session, _) = manual_session(&BUILTIN);
    session.toggle_filter(Facet::Properties, "form");
    session.set_active_filters(FilterUpdate {
        types: Some(BTreeSet::from(["pattern".to_string()])),
        ..Default::default()
    });
    assert!(session.filters().properties.contains("form"));
    assert_eq!(
        ids(session.results()),
        vec!["form-layout", "form-validation", "search-pattern"]
    );
}

#[test]
fn test_toggle_twice_restores_results() {
    let (mut session, _) = manual_session(&BUILTIN);
    let before = ids(session.results());
    session.toggle_filter(Facet::Categories, "Foundations");
    assert_ne!(ids(session.results()), before);
    session.toggle_filter(Facet::Categories, "Foundations");
    assert_eq!(ids(session.results()), before);
    assert!(session.filters().is_empty());
}

#[test]
fn test_clear_then_query_matches_fresh_session() {
    let (mut used, used_clock) = manual_session(&BUILTIN);
    used.set_search_open(true);
    used.toggle_filter(Facet::Types, "token");
    used.toggle_filter(Facet::Properties, "color");
    used.set_search_query("palette");
    used.clear_search();
    used.set_search_query("card");
    used_clock.advance(WINDOW);
    used.poll();

    let (mut fresh, fresh_clock) = manual_session(&BUILTIN);
    fresh.set_search_query("card");
    fresh_clock.advance(WINDOW);
    fresh.poll();

    assert_eq!(used.query(), fresh.query());
    assert_eq!(used.filters(), fresh.filters());
    assert_eq!(ids(used.results()), ids(fresh.results()));
    assert_eq!(used.is_search_open(), fresh.is_search_open());
    assert_eq!(used.is_searching(), fresh.is_searching());
}

#[test]
fn test_keyboard_shortcuts() {
    let (mut session, _) = manual_session(&BUILTIN);
    assert!(session.handle_key(KeyPress::ctrl(Key::Char('k'))));
    assert!(session.is_search_open());
    assert!(session.handle_key(KeyPress::meta(Key::Char('K'))));
    assert!(!session.is_search_open());
    assert!(session.handle_key(KeyPress::meta(Key::Char('k'))));
    assert!(session.handle_key(KeyPress::new(Key::Escape)));
    assert!(!session.is_search_open());
}

#[test]
fn test_close_grace_keeps_state_then_clears() {
    let (mut session, clock) = manual_session(&BUILTIN);
    session.set_search_open(true);
    session.set_search_query("toast");
    session.toggle_filter(Facet::Types, "component");
    session.flush();
    assert_eq!(titles(session.results()), vec!["Toast"]);

    session.set_search_open(false);
    clock.advance(Duration::from_millis(299));
    session.poll();
    assert_eq!(session.query(), "toast");
    assert_eq!(titles(session.results()), vec!["Toast"]);

    clock.advance(Duration::from_millis(1));
    assert!(session.poll());
    assert_eq!(session.query(), "");
    assert!(session.filters().is_empty());
    assert_eq!(session.results().len(), BUILTIN.len());
}

#[test]
fn test_close_cancels_pending_search() {
    let (mut session, clock) = manual_session(&BUILTIN);
    session.set_search_open(true);
    session.set_search_query("badge");
    session.set_search_open(false);
    clock.advance(WINDOW);
    session.poll();
    assert!(!session.is_searching());
    assert_eq!(session.query(), "");
}

#[test]
fn test_next_deadline_tracks_earliest_timer() {
    let (mut session, clock) = manual_session(&BUILTIN);
    assert_eq!(session.next_deadline(), None);
    session.set_search_open(true);
    session.set_search_query("a");
    let search_deadline = session.next_deadline().unwrap();
    clock.advance(Duration::from_millis(100));
    session.set_search_open(false);
    assert_eq!(session.next_deadline(), Some(search_deadline));
}
