mod config;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roomme_core::calendar::{
    build_month_view, filter_events, generate_seed_events, Event, ListEventsQuery,
};

use crate::config::Config;

const DEMO_CALENDAR_ID: i64 = 1;

/// RoomMe - a shared calendar for your household
#[derive(Parser, Debug)]
#[command(name = "roomme")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Year to render (defaults to the current year)
    #[arg(long, short = 'y')]
    year: Option<i32>,

    /// Month to render, 1-12 (defaults to the current month)
    #[arg(long, short = 'm')]
    month: Option<u32>,

    /// Path to a JSON file holding the events to render
    #[arg(long, short = 'e')]
    events: Option<PathBuf>,

    /// Render seeded demo events instead of reading a file
    #[arg(long)]
    demo: bool,

    /// Only show events from this calendar
    #[arg(long)]
    calendar_id: Option<i64>,

    /// Only show events owned by this user
    #[arg(long)]
    user_id: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roomme=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();

    // "Go to live": without explicit arguments, render the month containing
    // today. This is the only clock read; the core never consults it.
    let today = chrono::Local::now().date_naive();
    let year = cli.year.unwrap_or_else(|| today.year());
    let month = cli.month.unwrap_or_else(|| today.month());

    let query = ListEventsQuery {
        calendar_id: cli.calendar_id,
        user_id: cli.user_id.clone(),
        year: Some(year),
        month: Some(month),
    };
    let filter = query.into_filter()?;
    // The filter conversion validated the 1-based month.
    let month0 = month - 1;

    let events = load_events(&cli, &config, year, month0)?;
    let visible: Vec<Event> = filter_events(&events, &filter)?
        .into_iter()
        .cloned()
        .collect();

    tracing::debug!(
        total = events.len(),
        visible = visible.len(),
        year,
        month,
        "Filtered events"
    );

    let outcome = build_month_view(year, month0, &visible)?;

    for rejected in &outcome.rejected {
        tracing::warn!(
            event_id = rejected.event_id,
            reason = %rejected.reason,
            "Skipping event with invalid date"
        );
    }

    print!("{}", render::render_month(&outcome.view, config.cell_width));
    Ok(())
}

/// Loads the event list the calendar will render.
///
/// A missing or malformed events file is an error surfaced to the user; the
/// core is never handed partial data. With neither a file nor `--demo`, the
/// calendar renders empty.
fn load_events(cli: &Cli, config: &Config, year: i32, month0: u32) -> Result<Vec<Event>> {
    if cli.demo {
        return Ok(generate_seed_events(year, month0, DEMO_CALENDAR_ID));
    }

    let path = cli.events.clone().or_else(|| config.events_path.clone());
    match path {
        Some(path) => {
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read events file {}", path.display()))?;
            let events: Vec<Event> = serde_json::from_str(&raw).with_context(|| {
                format!("Events file {} is not a valid event list", path.display())
            })?;
            tracing::info!(count = events.len(), file = %path.display(), "Loaded events");
            Ok(events)
        }
        None => Ok(Vec::new()),
    }
}
