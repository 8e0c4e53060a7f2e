//! Month view assembly.
//!
//! Ties the grid generator and the event binner together: generate the day
//! sequence for a month, bin the events, then pair each day with its bucket.

use serde::{Deserialize, Serialize};

use super::binning::{bin_events_by_date, RejectedEvent};
use super::error::GridError;
use super::grid::{generate_calendar_dates, month_name};
use super::types::{DayCell, Event};

/// A fully assembled month: the grid paired with each day's events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthView {
    pub year: i32,
    /// Zero-based month.
    pub month: u32,
    /// Header title, e.g. "June 2024".
    pub title: String,
    /// One row per week, each exactly seven cells.
    pub weeks: Vec<Vec<DayCell>>,
}

/// A month view plus the events the binner refused.
///
/// Rejections are surfaced rather than swallowed so the caller can log them
/// and still render a complete grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthViewOutcome {
    pub view: MonthView,
    pub rejected: Vec<RejectedEvent>,
}

/// Builds the render-ready view for a month.
pub fn build_month_view(
    year: i32,
    month: u32,
    events: &[Event],
) -> Result<MonthViewOutcome, GridError> {
    let grid = generate_calendar_dates(year, month)?;
    let outcome = bin_events_by_date(events);

    let weeks = grid
        .weeks()
        .map(|week| {
            week.iter()
                .map(|day| DayCell::new(*day, outcome.by_date.events_for(day).to_vec()))
                .collect()
        })
        .collect();

    // Grid generation already validated the month; the name lookup cannot miss.
    let title = format!("{} {}", month_name(month).unwrap_or(""), year);

    Ok(MonthViewOutcome {
        view: MonthView {
            year,
            month,
            title,
            weeks,
        },
        rejected: outcome.rejected,
    })
}
