mod binning;
mod date_key;
mod error;
mod grid;
mod mock_data;
mod operations;
mod requests;
mod types;
mod view;

pub use binning::{bin_events_by_date, BinOutcome, EventsByDate, RejectedEvent};
pub use date_key::{format_date_key, parse_date_key, parse_date_key_strict, DATE_KEY_FORMAT};
pub use error::{EventError, GridError};
pub use grid::{
    first_of_month, generate_calendar_dates, month_name, next_month, previous_month, MonthGrid,
    DAYS_OF_WEEK,
};
pub use mock_data::generate_seed_events;
pub use operations::{
    filter_events, filter_events_by_calendar, filter_events_by_user, EventFilter, YearMonth,
};
pub use requests::{CreateEventRequest, ListEventsQuery, UpdateEventRequest};
pub use types::{CalendarDay, DayCell, Event, EventCategory};
pub use view::{build_month_view, MonthView, MonthViewOutcome};
