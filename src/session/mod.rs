// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A search session: query, filters, timers and the open/closed flag.
//!
//! One `SearchSession` per search surface. It borrows the catalog and owns
//! everything else, so there is no shared or global state. The host calls the
//! setters from its input handlers and [`SearchSession::poll`] from its event
//! loop; the session never blocks or spawns anything.
//!
//! # Timing
//!
//! ```text
//! set_search_query("b")   set_search_query("bu")          poll()
//!        │                       │                           │
//!        ├──── debounce ────X    ├──────── debounce ────────▶│ search("bu")
//!        │ is_searching = true                               │ is_searching = false
//! ```
//!
//! Facet changes don't wait: they re-run the last debounced query right away.
//! Closing the surface schedules a state clear after the close grace period;
//! reopening first cancels it.

pub mod debounce;

pub use debounce::{Clock, Debouncer, ManualClock, SystemClock};

use crate::catalog::Catalog;
use crate::config::EngineConfig;
use crate::search::search;
use crate::types::{ActiveFilters, Facet, FilterUpdate, SearchableItem};
use std::time::Instant;
use tracing::{debug, trace};

/// A key as reported by the host, with the modifiers we care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    /// Cmd on macOS.
    pub meta: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Char(char),
    Escape,
}

impl KeyPress {
    pub fn new(key: Key) -> Self {
        KeyPress {
            key,
            ctrl: false,
            meta: false,
        }
    }

    pub fn ctrl(key: Key) -> Self {
        KeyPress {
            ctrl: true,
            ..Self::new(key)
        }
    }

    pub fn meta(key: Key) -> Self {
        KeyPress {
            meta: true,
            ..Self::new(key)
        }
    }

    fn is_toggle_shortcut(&self) -> bool {
        (self.ctrl || self.meta) && matches!(self.key, Key::Char('k') | Key::Char('K'))
    }
}

pub struct SearchSession<'a, C: Clock = SystemClock> {
    catalog: &'a Catalog,
    clock: C,
    /// What the user has typed.
    query: String,
    /// The last query that made it through the debounce.
    searched_query: String,
    filters: ActiveFilters,
    results: Vec<&'a SearchableItem>,
    search_timer: Debouncer,
    close_timer: Debouncer,
    is_open: bool,
}

impl<'a> SearchSession<'a, SystemClock> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self::with_clock(catalog, EngineConfig::default(), SystemClock)
    }
}

impl<'a, C: Clock> SearchSession<'a, C> {
    pub fn with_clock(catalog: &'a Catalog, config: EngineConfig, clock: C) -> Self {
        let filters = ActiveFilters::default();
        let results = search(catalog.items(), "", &filters);
        SearchSession {
            catalog,
            clock,
            query: String::new(),
            searched_query: String::new(),
            filters,
            results,
            search_timer: Debouncer::new(config.debounce()),
            close_timer: Debouncer::new(config.close_grace()),
            is_open: false,
        }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The query as typed, which may be ahead of [`results`](Self::results).
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &ActiveFilters {
        &self.filters
    }

    /// Current ordered matches.
    pub fn results(&self) -> &[&'a SearchableItem] {
        &self.results
    }

    /// True while a query change is waiting out the debounce window.
    pub fn is_searching(&self) -> bool {
        self.search_timer.is_pending()
    }

    pub fn is_search_open(&self) -> bool {
        self.is_open
    }

    /// Earliest pending deadline, for hosts that sleep between events.
    pub fn next_deadline(&self) -> Option<Instant> {
        match (self.search_timer.deadline(), self.close_timer.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn set_search_query(&mut self, text: impl Into<String>) {
        self.query = text.into();
        self.search_timer.schedule(self.clock.now());
        trace!(query = %self.query, "query changed, search scheduled");
    }

    /// Toggle one facet value and re-run the last debounced query immediately.
    ///
    /// A query still waiting out the debounce stays pending.
    /// Returns `true` if the value is active afterwards.
    pub fn toggle_filter(&mut self, facet: Facet, value: &str) -> bool {
        let active = self.filters.toggle(facet, value);
        debug!(%facet, value, active, "filter toggled");
        self.run_search();
        active
    }

    /// Replace the facet sets present in `update` and re-run the last
    /// debounced query.
    pub fn set_active_filters(&mut self, update: FilterUpdate) {
        self.filters.apply(update);
        debug!(active = self.filters.active_count(), "filters replaced");
        self.run_search();
    }

    /// Reset query and filters and close the surface. Idempotent.
    pub fn clear_search(&mut self) {
        self.query.clear();
        self.searched_query.clear();
        self.filters.clear();
        self.search_timer.cancel();
        self.close_timer.cancel();
        self.is_open = false;
        self.run_search();
        debug!("search cleared");
    }

    pub fn set_search_open(&mut self, open: bool) {
        if open {
            self.close_timer.cancel();
            self.is_open = true;
        } else if self.is_open {
            self.is_open = false;
            self.close_timer.schedule(self.clock.now());
        }
        debug!(open, "search surface visibility changed");
    }

    pub fn toggle_search_open(&mut self) {
        let open = !self.is_open;
        self.set_search_open(open);
    }

    /// Apply the global bindings: Cmd/Ctrl+K toggles, Escape closes.
    ///
    /// Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: KeyPress) -> bool {
        if key.is_toggle_shortcut() {
            self.toggle_search_open();
            true
        } else if key.key == Key::Escape && self.is_open {
            self.set_search_open(false);
            true
        } else {
            false
        }
    }

    /// Run whatever timers have expired. Returns `true` if results were recomputed.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        let mut changed = false;

        if self.close_timer.fire(now) {
            trace!("close grace elapsed, clearing state");
            self.query.clear();
            self.searched_query.clear();
            self.filters.clear();
            self.search_timer.cancel();
            self.run_search();
            changed = true;
        }

        if self.search_timer.fire(now) {
            self.searched_query.clone_from(&self.query);
            self.run_search();
            changed = true;
        }

        changed
    }

    /// Search now if a debounced search is pending.
    pub fn flush(&mut self) -> bool {
        if self.search_timer.is_pending() {
            self.search_timer.cancel();
            self.searched_query.clone_from(&self.query);
            self.run_search();
            true
        } else {
            false
        }
    }

    fn run_search(&mut self) {
        self.results = search(self.catalog.items(), &self.searched_query, &self.filters);
        debug!(
            query = %self.searched_query,
            filters = self.filters.active_count(),
            results = self.results.len(),
            "search completed"
        );
    }
}
