//! Event binning.
//!
//! Bins a flat event list into per-day buckets keyed by the `yyyy-MM-dd`
//! date key, so the grid can attach a day's events in constant time.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::date_key::format_date_key;
use super::error::EventError;
use super::types::{CalendarDay, Event};

/// Events bucketed by their date key.
///
/// Buckets keep input order and are never sorted or deduplicated here;
/// lookups for days with no events yield an empty slice, never absence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventsByDate {
    buckets: HashMap<String, Vec<Event>>,
}

impl EventsByDate {
    /// Events falling on the given grid day, in the order they were supplied.
    pub fn events_for(&self, day: &CalendarDay) -> &[Event] {
        self.get(&day.date_key())
    }

    /// Events under a raw date key.
    pub fn get(&self, key: &str) -> &[Event] {
        self.buckets.get(key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Number of days that have at least one event.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Iterates over (date key, bucket) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Event])> {
        self.buckets
            .iter()
            .map(|(key, bucket)| (key.as_str(), bucket.as_slice()))
    }

    fn push(&mut self, key: String, event: Event) {
        self.buckets.entry(key).or_default().push(event);
    }
}

/// An event the binner refused, with the reason it was refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedEvent {
    pub event_id: i64,
    pub reason: EventError,
}

/// The binner's output: usable buckets plus everything it turned away.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinOutcome {
    pub by_date: EventsByDate,
    pub rejected: Vec<RejectedEvent>,
}

/// Bins events by calendar day.
///
/// Validation is eager: an event whose date does not parse is reported under
/// `rejected` and skipped, and binning continues with the rest, so one bad
/// record never blanks the whole calendar. Keys are normalized through the
/// shared date-key formatter, which also truncates any time suffix.
pub fn bin_events_by_date(events: &[Event]) -> BinOutcome {
    let mut outcome = BinOutcome::default();

    for event in events {
        match event.date_key() {
            Ok(date) => outcome.by_date.push(format_date_key(date), event.clone()),
            Err(reason) => outcome.rejected.push(RejectedEvent {
                event_id: event.id,
                reason,
            }),
        }
    }

    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::types::EventCategory;
    use chrono::NaiveDate;

    fn make_event(id: i64, name: &str, date: &str) -> Event {
        Event::new(
            id,
            1,
            "user-1",
            name,
            EventCategory::Personal,
            date,
            "12:00",
            "14:00",
        )
    }

    #[test]
    fn test_bin_events_by_date() {
        let events = vec![
            make_event(1, "First", "2024-06-05"),
            make_event(2, "Second", "2024-06-05"),
            make_event(3, "Third", "2024-06-06"),
        ];

        let outcome = bin_events_by_date(&events);

        assert!(outcome.rejected.is_empty());
        assert_eq!(outcome.by_date.len(), 2);

        let june_5 = outcome.by_date.get("2024-06-05");
        assert_eq!(june_5.len(), 2);
        // Input order, not time order.
        assert_eq!(june_5[0].name, "First");
        assert_eq!(june_5[1].name, "Second");

        assert_eq!(outcome.by_date.get("2024-06-06").len(), 1);
        assert_eq!(outcome.by_date.get("2024-06-07").len(), 0);
    }

    #[test]
    fn test_time_suffix_normalizes_to_same_bucket() {
        let events = vec![
            make_event(1, "Bare", "2024-06-05"),
            make_event(2, "Suffixed", "2024-06-05T18:00:00"),
        ];

        let outcome = bin_events_by_date(&events);

        assert_eq!(outcome.by_date.len(), 1);
        assert_eq!(outcome.by_date.get("2024-06-05").len(), 2);
    }

    #[test]
    fn test_malformed_date_rejects_only_that_event() {
        let events = vec![
            make_event(1, "Good", "2024-06-05"),
            make_event(2, "Bad", "06/05/2024"),
            make_event(3, "Also good", "2024-06-06"),
        ];

        let outcome = bin_events_by_date(&events);

        assert_eq!(outcome.by_date.len(), 2);
        assert_eq!(outcome.rejected.len(), 1);
        assert_eq!(outcome.rejected[0].event_id, 2);
        assert_eq!(
            outcome.rejected[0].reason,
            EventError::MalformedDate("06/05/2024".to_string())
        );
    }

    #[test]
    fn test_empty_input_bins_to_nothing() {
        let outcome = bin_events_by_date(&[]);
        assert!(outcome.by_date.is_empty());
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn test_events_for_grid_day_uses_shared_key_format() {
        let events = vec![make_event(1, "Dinner", "2024-06-05")];
        let outcome = bin_events_by_date(&events);

        let date = NaiveDate::from_ymd_opt(2024, 6, 5).unwrap();
        let day = crate::calendar::CalendarDay::from_date(date, 5);

        assert_eq!(outcome.by_date.events_for(&day).len(), 1);
    }
}
