use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::error::GridError;
use super::grid::{first_of_month, next_month};
use super::types::Event;

/// A month identified by year and zero-based month index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearMonth {
    pub year: i32,
    pub month: u32,
}

impl YearMonth {
    /// Creates a validated (year, zero-based month) pair.
    pub fn new(year: i32, month: u32) -> Result<Self, GridError> {
        if month > 11 {
            return Err(GridError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The half-open date range `[first of month, first of next month)`
    /// covered by this month.
    pub fn date_range(&self) -> Result<(NaiveDate, NaiveDate), GridError> {
        let start = first_of_month(self.year, self.month)?;
        let (next_year, next_month0) = next_month(self.year, self.month)?;
        let end = first_of_month(next_year, next_month0)?;
        Ok((start, end))
    }
}

/// Filter conditions for an event query. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub calendar_id: Option<i64>,
    pub user_id: Option<String>,
    pub month: Option<YearMonth>,
}

/// Filters events by the conjunction of the provided conditions.
///
/// Month filtering covers the half-open range from the first of the month to
/// the first of the next month, computed with explicit year carry. Events
/// whose date field does not parse never match a month condition; they are
/// reported separately by the binner.
pub fn filter_events<'a>(
    events: &'a [Event],
    filter: &EventFilter,
) -> Result<Vec<&'a Event>, GridError> {
    let range = match filter.month {
        Some(month) => Some(month.date_range()?),
        None => None,
    };

    Ok(events
        .iter()
        .filter(|event| {
            filter
                .calendar_id
                .is_none_or(|id| event.calendar_id == id)
                && filter
                    .user_id
                    .as_deref()
                    .is_none_or(|user_id| event.user_id == user_id)
                && range.is_none_or(|(start, end)| {
                    event
                        .date_key()
                        .map(|date| date >= start && date < end)
                        .unwrap_or(false)
                })
        })
        .collect())
}

/// Filters events by calendar ID.
pub fn filter_events_by_calendar(events: &[Event], calendar_id: i64) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| event.calendar_id == calendar_id)
        .collect()
}

/// Filters events by owning user ID.
pub fn filter_events_by_user<'a>(events: &'a [Event], user_id: &str) -> Vec<&'a Event> {
    events
        .iter()
        .filter(|event| event.user_id == user_id)
        .collect()
}
