// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the swatch command-line interface.
//!
//! `search` runs one query, `facets` lists filter values, `highlight` shows
//! how a query marks up a string, `inspect` summarizes a catalog, and
//! `interactive` drives a full debounced session from stdin.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use swatch::config::{DEFAULT_CLOSE_GRACE_MS, DEFAULT_DEBOUNCE_MS};

#[derive(Parser)]
#[command(
    name = "swatch",
    about = "Search a design-system catalog of components, tokens and patterns",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read the catalog from.
#[derive(Args, Clone, Debug, Default)]
pub struct CatalogArgs {
    /// Catalog JSON file (defaults to the built-in catalog)
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the catalog and display ranked results
    Search {
        /// Search query (may be empty to browse by filters)
        #[arg(default_value = "")]
        query: String,

        /// Only items in this category (repeatable)
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<String>,

        /// Only items of this type: component, token, pattern, foundation (repeatable)
        #[arg(long = "type", value_name = "TYPE")]
        types: Vec<String>,

        /// Only items carrying this tag (repeatable)
        #[arg(long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "20")]
        limit: usize,

        /// Group results by subcategory
        #[arg(long)]
        group: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: CatalogArgs,
    },

    /// List the distinct categories, types and tags in the catalog
    Facets {
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        source: CatalogArgs,
    },

    /// Show which parts of TEXT a query would highlight
    Highlight {
        text: String,
        query: String,

        #[arg(long)]
        json: bool,
    },

    /// Validate a catalog and print statistics
    Inspect {
        #[command(flatten)]
        source: CatalogArgs,
    },

    /// Read queries and commands from stdin and run them through a live session
    ///
    /// Each line is either free text (the new query) or a command:
    /// `:k` toggle open, `:esc` close, `:clear`, `:toggle <facet> <value>`,
    /// `:flush`, `:quit`.
    Interactive {
        /// Debounce window in milliseconds
        #[arg(long, default_value_t = DEFAULT_DEBOUNCE_MS)]
        debounce_ms: u64,

        /// Delay before clearing state after closing, in milliseconds
        #[arg(long, default_value_t = DEFAULT_CLOSE_GRACE_MS)]
        close_grace_ms: u64,

        #[command(flatten)]
        source: CatalogArgs,
    },
}
