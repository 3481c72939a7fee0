// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory catalog search for design-system documentation.
//!
//! A fixed catalog of components, tokens, patterns and foundations, queried
//! with free text plus three facet filters, debounced, and ranked by how the
//! title relates to the query.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  types.rs   │────▶│  catalog/    │────▶│  search/     │
//! │ (Searchable │     │ (Catalog,    │     │ (search,     │
//! │  Item, ...) │     │  facets)     │     │  filter,     │
//! └─────────────┘     └──────────────┘     │  ranking)    │
//!                                          └──────────────┘
//!                                                 │
//!        ┌──────────────┐                         ▼
//!        │ highlight.rs │              ┌──────────────────┐
//!        │ (spans)      │              │  session/        │
//!        └──────────────┘              │ (SearchSession,  │
//!                                      │  Debouncer)      │
//!                                      └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use swatch::{Catalog, SearchSession, Facet};
//!
//! let catalog = Catalog::builtin()?;
//! let mut session = SearchSession::new(&catalog);
//! session.set_search_query("button");
//! session.toggle_filter(Facet::Types, "component");
//! // ...later, from the event loop
//! session.poll();
//! for item in session.results() {
//!     println!("{}", item.title);
//! }
//! ```

pub mod catalog;
pub mod config;
pub mod highlight;
pub mod search;
pub mod session;
pub mod testing;
mod types;

pub use catalog::{Catalog, CatalogError, FacetSummary};
pub use config::EngineConfig;
pub use highlight::{highlight_match, HighlightSpan};
pub use search::filter::{filter_and_sort, FacetMap, FacetValue, Searchable};
pub use search::group::{count_by_type, filter_by_type, group_results, ResultGroup};
pub use search::ranking::TitleMatch;
pub use search::{facet_map, search};
pub use session::{Clock, Debouncer, Key, KeyPress, ManualClock, SearchSession, SystemClock};
pub use types::{
    ActiveFilters, Facet, FilterUpdate, ItemType, ParseFacetError, ParseItemTypeError,
    SearchableItem,
};
