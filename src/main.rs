// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use crossbeam_channel::{unbounded, Receiver, RecvTimeoutError};
use std::collections::BTreeSet;
use std::io::BufRead;
use std::time::{Duration, Instant};
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;

use swatch::{
    count_by_type, group_results, highlight_match, ActiveFilters, Catalog, EngineConfig, Facet,
    ItemType, Key, KeyPress, SearchSession, SearchableItem, SystemClock,
};

mod cli;
use cli::display::{self, section_bot, section_top, themed, GRAY};
use cli::{CatalogArgs, Cli, Commands};

fn main() {
    init_logging();
    let cli = Cli::parse();

    let outcome = match cli.command {
        Commands::Search {
            query,
            categories,
            types,
            tags,
            limit,
            group,
            json,
            source,
        } => {
            let filters = ActiveFilters {
                categories: categories.into_iter().collect(),
                types: types.into_iter().collect(),
                properties: tags.into_iter().collect(),
            };
            run_search(&source, &query, &filters, limit, group, json)
        }
        Commands::Facets { json, source } => run_facets(&source, json),
        Commands::Highlight { text, query, json } => run_highlight(&text, &query, json),
        Commands::Inspect { source } => run_inspect(&source),
        Commands::Interactive {
            debounce_ms,
            close_grace_ms,
            source,
        } => {
            let config = EngineConfig::default()
                .with_debounce_ms(debounce_ms)
                .with_close_grace_ms(close_grace_ms);
            run_interactive(&source, config)
        }
    };

    if let Err(e) = outcome {
        display::error(&e);
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr, filtered by `SWATCH_LOG` (default: warn).
fn init_logging() {
    let filter = EnvFilter::try_from_env("SWATCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_catalog(source: &CatalogArgs) -> Result<Catalog, String> {
    let catalog = match &source.catalog {
        Some(path) => Catalog::load(path),
        None => Catalog::builtin(),
    };
    catalog.map_err(|e| e.to_string())
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Failed to serialize output: {}", e))
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH
// ═══════════════════════════════════════════════════════════════════════════

fn run_search(
    source: &CatalogArgs,
    query: &str,
    filters: &ActiveFilters,
    limit: usize,
    group: bool,
    json: bool,
) -> Result<(), String> {
    let catalog = load_catalog(source)?;
    for ty in &filters.types {
        if ty.parse::<ItemType>().is_err() {
            warn!(value = %ty, "type filter matches no item type");
        }
    }

    let results = swatch::search(catalog.items(), query, filters);
    debug!(query, results = results.len(), "search finished");

    if json {
        let output = if group {
            to_json(&group_results(&results))?
        } else {
            to_json(&results)?
        };
        println!("{}", output);
        return Ok(());
    }

    print_results(&results, query, limit, group);
    Ok(())
}

fn print_results(results: &[&SearchableItem], query: &str, limit: usize, group: bool) {
    if results.is_empty() {
        println!("No results found. Try different terms or fewer filters.");
        return;
    }

    let tabs: Vec<String> = count_by_type(results)
        .iter()
        .map(|(ty, n)| format!("{} {}", ty, n))
        .collect();
    println!(
        "{} {}",
        themed(GRAY, &[], &format!("{} results", results.len())),
        themed(GRAY, &[], &format!("({})", tabs.join(" · ")))
    );

    let shown = &results[..results.len().min(limit)];
    if group {
        for group in group_results(shown) {
            section_top(group.name);
            for item in group.items {
                print_item(item, query);
            }
            section_bot();
        }
    } else {
        section_top("Results");
        for item in shown {
            print_item(item, query);
        }
        section_bot();
    }

    if shown.len() < results.len() {
        println!(
            "{}",
            themed(GRAY, &[], &format!("… {} more (raise --limit)", results.len() - shown.len()))
        );
    }
}

fn print_item(item: &SearchableItem, query: &str) {
    let title = display::highlighted(&highlight_match(&item.title, query));
    display::row(&format!(
        " {} {}  {}",
        display::type_badge(item.item_type),
        title,
        themed(GRAY, &[], &item.href)
    ));
    if let Some(description) = &item.description {
        let short = display::truncate(description, display::BOX_WIDTH - 4);
        display::row(&format!("   {}", display::highlighted(&highlight_match(&short, query))));
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// FACETS / HIGHLIGHT / INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_facets(source: &CatalogArgs, json: bool) -> Result<(), String> {
    let catalog = load_catalog(source)?;
    let summary = catalog.facets();

    if json {
        println!("{}", to_json(&summary)?);
        return Ok(());
    }

    for facet in Facet::ALL {
        section_top(&facet.to_string());
        for value in summary.values(facet) {
            display::row(&format!(" {}", value));
        }
        section_bot();
    }
    Ok(())
}

fn run_highlight(text: &str, query: &str, json: bool) -> Result<(), String> {
    let spans = highlight_match(text, query);
    if json {
        println!("{}", to_json(&spans)?);
    } else {
        println!("{}", display::highlighted(&spans));
    }
    Ok(())
}

fn run_inspect(source: &CatalogArgs) -> Result<(), String> {
    let catalog = load_catalog(source)?;
    let all: Vec<&SearchableItem> = catalog.items().iter().collect();
    let summary = catalog.facets();

    section_top("Catalog");
    display::row(&format!(" {} {}", display::pad_right("items", 16), catalog.len()));
    display::row(&format!(" {} {}", display::pad_right("categories", 16), summary.categories.len()));
    display::row(&format!(" {} {}", display::pad_right("tags", 16), summary.tags.len()));
    let undocumented = all.iter().filter(|i| i.description.is_none()).count();
    display::row(&format!(" {} {}", display::pad_right("no description", 16), undocumented));
    section_bot();

    section_top("Types");
    for (ty, n) in count_by_type(&all) {
        display::row(&format!(" {} {}", display::pad_right(&display::type_badge(ty), 16), n));
    }
    section_bot();

    section_top("Groups");
    for group in group_results(&search_all(&catalog)) {
        display::row(&format!(" {} {}", display::pad_right(group.name, 24), group.items.len()));
    }
    section_bot();
    Ok(())
}

fn search_all(catalog: &Catalog) -> Vec<&SearchableItem> {
    swatch::search(catalog.items(), "", &ActiveFilters::default())
}

// ═══════════════════════════════════════════════════════════════════════════
// INTERACTIVE SESSION
// ═══════════════════════════════════════════════════════════════════════════

/// A line from stdin, turned into a session action.
enum Command {
    Query(String),
    ToggleOpen,
    Escape,
    Clear,
    Toggle(Facet, String),
    Flush,
    Quit,
}

fn parse_command(line: &str) -> Result<Command, String> {
    let Some(rest) = line.strip_prefix(':') else {
        return Ok(Command::Query(line.to_string()));
    };
    let mut parts = rest.split_whitespace();
    match parts.next() {
        Some("k") => Ok(Command::ToggleOpen),
        Some("esc") => Ok(Command::Escape),
        Some("clear") => Ok(Command::Clear),
        Some("flush") => Ok(Command::Flush),
        Some("quit") | Some("q") => Ok(Command::Quit),
        Some("toggle") => {
            let facet = parts
                .next()
                .ok_or("usage: :toggle <facet> <value>")?
                .parse::<Facet>()
                .map_err(|e| e.to_string())?;
            let value: Vec<&str> = parts.collect();
            if value.is_empty() {
                return Err("usage: :toggle <facet> <value>".to_string());
            }
            Ok(Command::Toggle(facet, value.join(" ")))
        }
        Some(other) => Err(format!("unknown command ':{}'", other)),
        None => Err("empty command".to_string()),
    }
}

fn spawn_stdin_reader() -> Receiver<String> {
    let (tx, rx) = unbounded();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

fn run_interactive(source: &CatalogArgs, config: EngineConfig) -> Result<(), String> {
    let catalog = load_catalog(source)?;
    let mut session: SearchSession<'_, SystemClock> =
        SearchSession::with_clock(&catalog, config, SystemClock);
    let lines = spawn_stdin_reader();

    loop {
        let timeout = session
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_secs(3600));

        match lines.recv_timeout(timeout) {
            Ok(line) => match parse_command(line.trim_end()) {
                Ok(Command::Quit) => break,
                Ok(command) => apply_command(&mut session, command),
                Err(e) => display::error(&e),
            },
            Err(RecvTimeoutError::Timeout) => {
                let searching = session.is_searching();
                if session.poll() && searching {
                    print_session(&session);
                }
            }
            Err(RecvTimeoutError::Disconnected) => {
                if session.flush() {
                    print_session(&session);
                }
                break;
            }
        }
    }
    Ok(())
}

fn apply_command(session: &mut SearchSession<'_, SystemClock>, command: Command) {
    match command {
        Command::Query(text) => session.set_search_query(text),
        Command::ToggleOpen => {
            session.handle_key(KeyPress::ctrl(Key::Char('k')));
            println!("search {}", if session.is_search_open() { "opened" } else { "closed" });
        }
        Command::Escape => {
            if session.handle_key(KeyPress::new(Key::Escape)) {
                println!("search closed");
            }
        }
        Command::Clear => {
            session.clear_search();
            println!("search cleared");
        }
        Command::Toggle(facet, value) => {
            let active = session.toggle_filter(facet, &value);
            println!("{} {} {}", facet, if active { "+" } else { "-" }, value);
            print_session(session);
        }
        Command::Flush => {
            if session.flush() {
                print_session(session);
            }
        }
        Command::Quit => {}
    }
}

fn print_session(session: &SearchSession<'_, SystemClock>) {
    let filters = session.filters();
    let active: BTreeSet<String> = Facet::ALL
        .iter()
        .flat_map(|f| filters.get(*f).iter().map(move |v| format!("{}={}", f, v)))
        .collect();
    if !active.is_empty() {
        let joined: Vec<String> = active.into_iter().collect();
        println!("{}", themed(GRAY, &[], &format!("filters: {}", joined.join(", "))));
    }
    print_results(session.results(), session.query(), 10, false);
}
