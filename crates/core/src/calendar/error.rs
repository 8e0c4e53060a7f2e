use thiserror::Error;

/// Errors that can occur when generating or addressing a month grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The month index is outside 0-11. Out-of-range months are rejected,
    /// never silently wrapped into an adjacent year.
    #[error("Invalid month index: {month}")]
    InvalidMonth { month: u32 },
    #[error("Year {year} is outside the representable calendar range")]
    YearOutOfRange { year: i32 },
}

/// Errors that can occur when validating a single event.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EventError {
    #[error("Event date is not a yyyy-MM-dd date: {0}")]
    MalformedDate(String),
    #[error("Event time is not an HH:MM time: {0}")]
    MalformedTime(String),
    #[error("End time must be after start time")]
    InvalidTimeRange,
    #[error("Event name cannot be empty")]
    EmptyName,
    #[error("Event name too long (max 100 characters)")]
    NameTooLong,
    #[error("Calendar ID must be a positive number")]
    InvalidCalendarId,
    #[error("User ID cannot be empty")]
    EmptyUserId,
}
