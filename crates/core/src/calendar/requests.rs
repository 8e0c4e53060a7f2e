//! API request types for event operations.
//!
//! These types mirror the payloads the events collaborator accepts. They are
//! pure data with validation; the validation here is the layer the binner
//! relies on for time ordering, which it deliberately does not re-check.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use super::date_key::{format_date_key, parse_date_key_strict};
use super::error::{EventError, GridError};
use super::operations::{EventFilter, YearMonth};
use super::types::{Event, EventCategory};

/// Request payload for creating a new event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub name: String,
    pub category: EventCategory,
    /// Bare `yyyy-MM-dd` date, no time suffix.
    pub date: String,
    pub time_from: String,
    pub time_until: String,
    pub calendar_id: i64,
    pub user_id: String,
}

impl CreateEventRequest {
    /// Creates a new event request.
    pub fn new(
        calendar_id: i64,
        user_id: impl Into<String>,
        name: impl Into<String>,
        category: EventCategory,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            date: date.into(),
            time_from: "12:00".to_string(),
            time_until: "14:00".to_string(),
            calendar_id,
            user_id: user_id.into(),
        }
    }

    /// Sets the start and end times.
    pub fn with_times(mut self, from: impl Into<String>, until: impl Into<String>) -> Self {
        self.time_from = from.into();
        self.time_until = until.into();
        self
    }

    /// Validates the payload against the event form rules.
    pub fn validate(&self) -> Result<(), EventError> {
        validate_name(&self.name)?;
        parse_date_key_strict(&self.date)?;

        let from = parse_time(&self.time_from)?;
        let until = parse_time(&self.time_until)?;
        if until <= from {
            return Err(EventError::InvalidTimeRange);
        }

        if self.calendar_id <= 0 {
            return Err(EventError::InvalidCalendarId);
        }
        if self.user_id.trim().is_empty() {
            return Err(EventError::EmptyUserId);
        }
        Ok(())
    }

    /// Validates and converts into a stored event with the given ID,
    /// normalizing the date to its key form.
    pub fn into_event(self, id: i64) -> Result<Event, EventError> {
        self.validate()?;
        let date = format_date_key(parse_date_key_strict(&self.date)?);

        Ok(Event {
            id,
            name: self.name,
            category: self.category,
            date,
            time_from: self.time_from,
            time_until: self.time_until,
            calendar_id: self.calendar_id,
            user_id: self.user_id,
            user_email: None,
        })
    }
}

/// Request payload for updating an event. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EventCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_until: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

impl UpdateEventRequest {
    /// Creates an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the event name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the event date.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// Sets the start and end times.
    pub fn with_times(mut self, from: impl Into<String>, until: impl Into<String>) -> Self {
        self.time_from = Some(from.into());
        self.time_until = Some(until.into());
        self
    }

    /// Validates the provided fields and applies them to an existing event.
    ///
    /// The time ordering check runs against the pair that would result from
    /// the update, mixing provided and existing values as needed.
    pub fn apply_to(&self, event: &mut Event) -> Result<(), EventError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(date) = &self.date {
            parse_date_key_strict(date)?;
        }
        if let Some(calendar_id) = self.calendar_id {
            if calendar_id <= 0 {
                return Err(EventError::InvalidCalendarId);
            }
        }
        if let Some(user_id) = &self.user_id {
            if user_id.trim().is_empty() {
                return Err(EventError::EmptyUserId);
            }
        }

        let from = parse_time(self.time_from.as_deref().unwrap_or(&event.time_from))?;
        let until = parse_time(self.time_until.as_deref().unwrap_or(&event.time_until))?;
        if until <= from {
            return Err(EventError::InvalidTimeRange);
        }

        if let Some(name) = &self.name {
            event.name = name.clone();
        }
        if let Some(category) = self.category {
            event.category = category;
        }
        if let Some(date) = &self.date {
            event.date = format_date_key(parse_date_key_strict(date)?);
        }
        if let Some(time_from) = &self.time_from {
            event.time_from = time_from.clone();
        }
        if let Some(time_until) = &self.time_until {
            event.time_until = time_until.clone();
        }
        if let Some(calendar_id) = self.calendar_id {
            event.calendar_id = calendar_id;
        }
        if let Some(user_id) = &self.user_id {
            event.user_id = user_id.clone();
        }
        Ok(())
    }
}

/// Query parameters for listing events, as they appear on the query string.
///
/// `month` is 1-based here (January = 1) because that is what the events API
/// exposes; conversion to the core's zero-based convention happens in
/// [`ListEventsQuery::into_filter`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub month: Option<u32>,
}

impl ListEventsQuery {
    /// Converts to the core's filter.
    ///
    /// The month condition applies only when both `year` and `month` are
    /// present, matching the original API's behavior; a month outside 1-12
    /// is rejected.
    pub fn into_filter(self) -> Result<EventFilter, GridError> {
        let month = match (self.year, self.month) {
            (Some(year), Some(month)) => {
                let month0 = month
                    .checked_sub(1)
                    .ok_or(GridError::InvalidMonth { month })?;
                Some(YearMonth::new(year, month0)?)
            }
            _ => None,
        };

        Ok(EventFilter {
            calendar_id: self.calendar_id,
            user_id: self.user_id,
            month,
        })
    }
}

fn validate_name(name: &str) -> Result<(), EventError> {
    if name.trim().is_empty() {
        return Err(EventError::EmptyName);
    }
    if name.chars().count() > 100 {
        return Err(EventError::NameTooLong);
    }
    Ok(())
}

/// Parses an `HH:MM` (or `HH:MM:SS`) clock time.
fn parse_time(raw: &str) -> Result<NaiveTime, EventError> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| EventError::MalformedTime(raw.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> CreateEventRequest {
        CreateEventRequest::new(1, "user-1", "Dinner", EventCategory::Family, "2024-06-05")
            .with_times("18:00", "20:00")
    }

    #[test]
    fn test_create_request_validates() {
        assert!(valid_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_empty_name() {
        let mut request = valid_request();
        request.name = "   ".to_string();
        assert_eq!(request.validate(), Err(EventError::EmptyName));
    }

    #[test]
    fn test_create_request_rejects_long_name() {
        let mut request = valid_request();
        request.name = "x".repeat(101);
        assert_eq!(request.validate(), Err(EventError::NameTooLong));
    }

    #[test]
    fn test_create_request_rejects_bad_date() {
        let mut request = valid_request();
        request.date = "05.06.2024".to_string();
        assert!(matches!(
            request.validate(),
            Err(EventError::MalformedDate(_))
        ));

        // Creation payloads must be bare dates.
        request.date = "2024-06-05T18:00:00".to_string();
        assert!(matches!(
            request.validate(),
            Err(EventError::MalformedDate(_))
        ));
    }

    #[test]
    fn test_create_request_rejects_inverted_times() {
        let request = valid_request().with_times("20:00", "18:00");
        assert_eq!(request.validate(), Err(EventError::InvalidTimeRange));

        let request = valid_request().with_times("18:00", "18:00");
        assert_eq!(request.validate(), Err(EventError::InvalidTimeRange));
    }

    #[test]
    fn test_create_request_rejects_bad_ids() {
        let mut request = valid_request();
        request.calendar_id = 0;
        assert_eq!(request.validate(), Err(EventError::InvalidCalendarId));

        let mut request = valid_request();
        request.user_id = String::new();
        assert_eq!(request.validate(), Err(EventError::EmptyUserId));
    }

    #[test]
    fn test_into_event() {
        let event = valid_request().into_event(42).unwrap();

        assert_eq!(event.id, 42);
        assert_eq!(event.name, "Dinner");
        assert_eq!(event.date, "2024-06-05");
        assert_eq!(event.time_from, "18:00");
        assert_eq!(event.user_email, None);
    }

    #[test]
    fn test_update_applies_only_provided_fields() {
        let mut event = valid_request().into_event(1).unwrap();

        UpdateEventRequest::new()
            .with_name("Late dinner")
            .with_times("19:00", "21:00")
            .apply_to(&mut event)
            .unwrap();

        assert_eq!(event.name, "Late dinner");
        assert_eq!(event.time_from, "19:00");
        assert_eq!(event.time_until, "21:00");
        assert_eq!(event.date, "2024-06-05"); // untouched
    }

    #[test]
    fn test_update_checks_time_ordering_across_old_and_new() {
        let mut event = valid_request().into_event(1).unwrap(); // 18:00-20:00

        // Moving only the start past the existing end must fail.
        let mut request = UpdateEventRequest::new();
        request.time_from = Some("21:00".to_string());
        assert_eq!(request.apply_to(&mut event), Err(EventError::InvalidTimeRange));
        assert_eq!(event.time_from, "18:00"); // unchanged on failure
    }

    #[test]
    fn test_update_reassigns_owner() {
        let mut event = valid_request().into_event(1).unwrap();

        let mut request = UpdateEventRequest::new();
        request.user_id = Some("user-2".to_string());
        request.apply_to(&mut event).unwrap();
        assert_eq!(event.user_id, "user-2");

        let mut request = UpdateEventRequest::new();
        request.user_id = Some("   ".to_string());
        assert_eq!(request.apply_to(&mut event), Err(EventError::EmptyUserId));
        assert_eq!(event.user_id, "user-2"); // unchanged on failure
    }

    #[test]
    fn test_update_rejects_bad_date_without_mutating() {
        let mut event = valid_request().into_event(1).unwrap();

        let result = UpdateEventRequest::new()
            .with_date("June 5th")
            .apply_to(&mut event);

        assert!(matches!(result, Err(EventError::MalformedDate(_))));
        assert_eq!(event.date, "2024-06-05");
    }

    #[test]
    fn test_list_query_converts_month_to_zero_based() {
        let query = ListEventsQuery {
            calendar_id: Some(3),
            user_id: None,
            year: Some(2024),
            month: Some(12),
        };

        let filter = query.into_filter().unwrap();
        assert_eq!(filter.calendar_id, Some(3));
        let month = filter.month.unwrap();
        assert_eq!((month.year, month.month), (2024, 11));
    }

    #[test]
    fn test_list_query_rejects_out_of_range_months() {
        let query = ListEventsQuery {
            year: Some(2024),
            month: Some(0),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());

        let query = ListEventsQuery {
            year: Some(2024),
            month: Some(13),
            ..Default::default()
        };
        assert!(query.into_filter().is_err());
    }

    #[test]
    fn test_list_query_without_year_has_no_month_condition() {
        let query = ListEventsQuery {
            month: Some(6),
            ..Default::default()
        };
        assert_eq!(query.into_filter().unwrap().month, None);
    }
}
