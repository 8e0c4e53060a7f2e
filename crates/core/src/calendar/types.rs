use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::date_key::{format_date_key, parse_date_key};
use super::error::EventError;

/// Category assigned to an event when it is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Personal,
    Work,
    Family,
    Vacation,
}

impl EventCategory {
    /// All categories, in the order the event form offers them.
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Personal,
        EventCategory::Work,
        EventCategory::Family,
        EventCategory::Vacation,
    ];

    /// Human-readable label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            EventCategory::Personal => "Personal",
            EventCategory::Work => "Work",
            EventCategory::Family => "Family",
            EventCategory::Vacation => "Vacation",
        }
    }
}

/// A calendar event as stored and served by the events collaborator.
///
/// `date` keeps its wire shape (an ISO date string, possibly carrying a time
/// suffix); [`Event::date_key`] derives the calendar day it bins under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub category: EventCategory,
    pub date: String,
    pub time_from: String,
    pub time_until: String,
    pub calendar_id: i64,
    pub user_id: String,
    /// Email of the owning user, when the collaborator joined it in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
}

impl Event {
    /// Creates a new event.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        calendar_id: i64,
        user_id: impl Into<String>,
        name: impl Into<String>,
        category: EventCategory,
        date: impl Into<String>,
        time_from: impl Into<String>,
        time_until: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            category,
            date: date.into(),
            time_from: time_from.into(),
            time_until: time_until.into(),
            calendar_id,
            user_id: user_id.into(),
            user_email: None,
        }
    }

    /// Sets the owning user's email.
    pub fn with_user_email(mut self, email: impl Into<String>) -> Self {
        self.user_email = Some(email.into());
        self
    }

    /// The calendar day this event bins under.
    pub fn date_key(&self) -> Result<NaiveDate, EventError> {
        parse_date_key(&self.date)
    }
}

/// A single cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDay {
    /// Day of the month, 1-31.
    pub day_of_month: u32,
    /// Zero-based month (0 = January) the day actually falls in, which is
    /// the adjacent month for padding days.
    pub month: u32,
    pub year: i32,
    /// True when `month` equals the month the grid was requested for.
    pub is_current_month: bool,
    pub full_date: NaiveDate,
}

impl CalendarDay {
    pub(crate) fn from_date(date: NaiveDate, requested_month: u32) -> Self {
        let month = date.month0();
        Self {
            day_of_month: date.day(),
            month,
            year: date.year(),
            is_current_month: month == requested_month,
            full_date: date,
        }
    }

    /// The binning key for this day.
    pub fn date_key(&self) -> String {
        format_date_key(self.full_date)
    }
}

/// A grid day paired with its same-day events, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub day: CalendarDay,
    pub events: Vec<Event>,
}

impl DayCell {
    /// Creates a new DayCell with the given day and events.
    pub fn new(day: CalendarDay, events: Vec<Event>) -> Self {
        Self { day, events }
    }

    /// Returns true if this day has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the number of events for this day.
    pub fn event_count(&self) -> usize {
        self.events.len()
    }
}
