//! Mock data generation for testing and seeding.
//!
//! Pure functions with no side effects, usable from unit tests and from the
//! CLI's demo mode alike.

use chrono::Datelike;

use super::grid::first_of_month;
use super::types::{Event, EventCategory};

/// Generates a small deterministic batch of events inside (year, month).
///
/// The batch covers every category and deliberately places two events on the
/// same day so bucket ordering is exercised. Months outside 0-11 yield an
/// empty batch rather than an error, since seed data is best-effort.
pub fn generate_seed_events(year: i32, month: u32, calendar_id: i64) -> Vec<Event> {
    let Ok(first) = first_of_month(year, month) else {
        return Vec::new();
    };

    let date = |day: u32| {
        format!(
            "{:04}-{:02}-{:02}",
            first.year(),
            first.month(),
            day.min(28)
        )
    };

    vec![
        Event::new(
            1,
            calendar_id,
            "user-1",
            "Rent due",
            EventCategory::Family,
            date(1),
            "09:00",
            "09:30",
        ),
        Event::new(
            2,
            calendar_id,
            "user-1",
            "Team standup",
            EventCategory::Work,
            date(3),
            "09:00",
            "09:15",
        ),
        Event::new(
            3,
            calendar_id,
            "user-2",
            "Gym session",
            EventCategory::Personal,
            date(3),
            "18:00",
            "19:00",
        )
        .with_user_email("bo@example.com"),
        Event::new(
            4,
            calendar_id,
            "user-2",
            "House cleaning",
            EventCategory::Family,
            date(14),
            "10:00",
            "12:00",
        ),
        Event::new(
            5,
            calendar_id,
            "user-1",
            "Weekend trip",
            EventCategory::Vacation,
            date(21),
            "08:00",
            "20:00",
        ),
    ]
}
