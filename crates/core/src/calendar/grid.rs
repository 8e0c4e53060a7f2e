//! Month grid generation.
//!
//! A month grid is the Sunday-to-Saturday padded set of weeks fully covering
//! a requested month. Generation is pure: the requested year and month are
//! explicit arguments and the wall clock is never consulted, so the same
//! inputs always produce the same grid.

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::GridError;
use super::types::CalendarDay;

/// Weekday labels for the grid header, Sunday first.
pub const DAYS_OF_WEEK: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// English name of a zero-based month, if the index is in range.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTH_NAMES.get(month as usize).copied()
}

fn check_month(month: u32) -> Result<(), GridError> {
    if month > 11 {
        return Err(GridError::InvalidMonth { month });
    }
    Ok(())
}

/// The (year, month) pair one month before the given one, with explicit
/// year carry at the January boundary.
pub fn previous_month(year: i32, month: u32) -> Result<(i32, u32), GridError> {
    check_month(month)?;
    Ok(if month == 0 {
        (year - 1, 11)
    } else {
        (year, month - 1)
    })
}

/// The (year, month) pair one month after the given one, with explicit
/// year carry at the December boundary.
pub fn next_month(year: i32, month: u32) -> Result<(i32, u32), GridError> {
    check_month(month)?;
    Ok(if month == 11 {
        (year + 1, 0)
    } else {
        (year, month + 1)
    })
}

/// The first day of a zero-based (year, month) pair.
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, GridError> {
    check_month(month)?;
    NaiveDate::from_ymd_opt(year, month + 1, 1).ok_or(GridError::YearOutOfRange { year })
}

/// A Sunday-first month grid padded to whole weeks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub year: i32,
    /// Zero-based month the grid was generated for.
    pub month: u32,
    /// Consecutive days from the leading Sunday to the trailing Saturday.
    /// The length is always `weeks_needed * 7`.
    pub days: Vec<CalendarDay>,
    pub weeks_needed: usize,
}

impl MonthGrid {
    /// The grid split into rows of exactly seven days, in order.
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarDay]> {
        self.days.chunks(7)
    }
}

/// Generates the ordered day sequence covering (year, month).
///
/// The sequence starts on the Sunday on or before the 1st, ends on the
/// Saturday on or after the last day of the month, and marks each day with
/// whether it falls in the requested month. Months outside 0-11 are
/// rejected with [`GridError::InvalidMonth`].
pub fn generate_calendar_dates(year: i32, month: u32) -> Result<MonthGrid, GridError> {
    let first_day = first_of_month(year, month)?;
    let (next_year, next_month0) = next_month(year, month)?;
    let last_day = first_of_month(next_year, next_month0)? - Duration::days(1);

    // Pad back to the Sunday of the first week and forward to the Saturday
    // of the last week. Padding can run off the calendar at its extremes,
    // so both shifts are checked.
    let start_date = first_day
        .checked_sub_signed(Duration::days(i64::from(
            first_day.weekday().num_days_from_sunday(),
        )))
        .ok_or(GridError::YearOutOfRange { year })?;
    let end_date = last_day
        .checked_add_signed(Duration::days(i64::from(
            6 - last_day.weekday().num_days_from_sunday(),
        )))
        .ok_or(GridError::YearOutOfRange { year })?;

    let total_days = (end_date - start_date).num_days() + 1;
    let weeks_needed = (total_days as usize).div_ceil(7);

    let days = start_date
        .iter_days()
        .take(weeks_needed * 7)
        .map(|date| CalendarDay::from_date(date, month))
        .collect();

    Ok(MonthGrid {
        year,
        month,
        days,
        weeks_needed,
    })
}
