use std::fs::File;
use std::io::{self, Stdout, Write};
use std::sync::Arc;
use std::time::Instant;

use crossterm::event::{Event, EventStream, KeyCode, KeyModifiers};
use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute};
use futures::StreamExt;
use log::info;
use serde_json::{Value, json};
use simplelog::{Config, LevelFilter, WriteLogger};
use typeahead::input::convert_key_event;
use typeahead::prelude::*;

fn cities() -> Vec<Arc<Value>> {
    [
        ("Amsterdam", "Netherlands"),
        ("Antwerp", "Belgium"),
        ("Berlin", "Germany"),
        ("Bern", "Switzerland"),
        ("Brussels", "Belgium"),
        ("Copenhagen", "Denmark"),
        ("Dublin", "Ireland"),
        ("Ghent", "Belgium"),
        ("Lisbon", "Portugal"),
        ("Madrid", "Spain"),
        ("Paris", "France"),
        ("Rotterdam", "Netherlands"),
        ("Vienna", "Austria"),
    ]
    .into_iter()
    .map(|(name, country)| Arc::new(json!({ "name": name, "country": country })))
    .collect()
}

#[tokio::main]
async fn main() -> io::Result<()> {
    // Set up file logging
    let log_file = File::create("lookup.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = LookupConfig::new()
        .multiple(true)
        .searchable_properties(["name", "country"])
        .results_limit(6);
    let mut lookup = Lookup::new(config, cities()).with_id(LookupId::new("city"));
    lookup.on_focus();

    terminal::enable_raw_mode()?;
    let result = run(&mut lookup).await;
    terminal::disable_raw_mode()?;
    result
}

async fn run(lookup: &mut Lookup<Value>) -> io::Result<()> {
    let mut stdout = io::stdout();
    let mut events = EventStream::new();
    render(&mut stdout, lookup)?;

    loop {
        let deadline = lookup.next_deadline();
        tokio::select! {
            _ = sleep_until_optional(deadline) => {
                if let Some(deadline) = deadline {
                    lookup.tick(Instant::now().max(deadline));
                }
            }
            event = events.next() => {
                let Some(event) = event else {
                    return Ok(());
                };
                if let Event::Key(key) = event? {
                    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                        return Ok(());
                    }
                    // Tab moves focus in and out of the lookup
                    if key.code == KeyCode::Tab {
                        if lookup.is_focused() {
                            lookup.on_blur();
                        } else {
                            lookup.on_focus();
                        }
                    } else if lookup.is_focused()
                        && let Some(combo) = convert_key_event(key)
                    {
                        lookup.on_key(&combo, Instant::now());
                    }
                }
            }
        }

        for change in lookup.take_changes() {
            info!(
                "Selection changed: +{} -{} = {}",
                change.added.len(),
                change.removed.len(),
                change.result.len()
            );
        }
        render(&mut stdout, lookup)?;
    }
}

async fn sleep_until_optional(deadline: Option<Instant>) {
    match deadline {
        Some(d) => tokio::time::sleep_until(tokio::time::Instant::from_std(d)).await,
        None => std::future::pending().await,
    }
}

fn render(stdout: &mut Stdout, lookup: &Lookup<Value>) -> io::Result<()> {
    execute!(stdout, cursor::MoveTo(0, 0), terminal::Clear(ClearType::All))?;
    write!(stdout, "Cities (Tab toggles focus, Ctrl-C quits)\r\n\r\n")?;

    let tokens: Vec<String> = lookup
        .selected()
        .iter()
        .map(|item| format!("[{}]", item.property_text("name")))
        .collect();
    let text = if lookup.search_text().is_empty() {
        format!("({})", lookup.placeholder_text())
    } else {
        lookup.search_text().to_string()
    };
    let marker = if lookup.is_focused() { ">" } else { " " };
    write!(stdout, "{} {} {}\r\n", marker, tokens.join(" "), text)?;

    if lookup.is_open() {
        if lookup.results().is_empty() {
            write!(stdout, "    no matches\r\n")?;
        }
        for item in lookup.results() {
            let active = lookup
                .active_item()
                .is_some_and(|active| Arc::ptr_eq(active, item));
            write!(
                stdout,
                "  {} {} ({})\r\n",
                if active { "*" } else { " " },
                item.property_text("name"),
                item.property_text("country")
            )?;
        }
    }
    write!(stdout, "\r\nstate: {:?}\r\n", lookup.interaction_state())?;
    stdout.flush()
}
