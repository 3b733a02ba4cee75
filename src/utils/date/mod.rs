// Date/time normalization utilities
// Single home for splitting and rejoining the combined event timestamp

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// Fallback time used when an input carries no usable time of day.
pub const DEFAULT_EVENT_TIME: &str = "09:00";

/// A date-like value as it arrives from persisted data, a grid selection
/// or user-typed text.
///
/// Stored event dates are combined `YYYY-MM-DDTHH:MM` strings, grid clicks
/// hand over bare calendar dates, and older persisted data may carry odd
/// shapes. Everything funnels through this one type so the normalization
/// policy is applied in exactly one place.
#[derive(Debug, Clone, PartialEq)]
pub enum DateLike {
    Text(String),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl From<&str> for DateLike {
    fn from(value: &str) -> Self {
        DateLike::Text(value.to_string())
    }
}

impl From<String> for DateLike {
    fn from(value: String) -> Self {
        DateLike::Text(value)
    }
}

impl From<NaiveDate> for DateLike {
    fn from(value: NaiveDate) -> Self {
        DateLike::Date(value)
    }
}

impl From<NaiveDateTime> for DateLike {
    fn from(value: NaiveDateTime) -> Self {
        DateLike::DateTime(value)
    }
}

impl From<DateTime<Local>> for DateLike {
    fn from(value: DateTime<Local>) -> Self {
        DateLike::DateTime(value.naive_local())
    }
}

/// Today's calendar date in local time.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Normalize any date-like input to a canonical `YYYY-MM-DD` string.
///
/// Total: malformed persisted or user data falls back to today's date
/// instead of erroring, so a bad value can never take the UI down.
pub fn normalize_date(input: Option<&DateLike>) -> String {
    normalize_date_with(input, today())
}

/// Deterministic variant of [`normalize_date`] with an explicit fallback day.
pub fn normalize_date_with(input: Option<&DateLike>, today: NaiveDate) -> String {
    let date = match input {
        None => today,
        Some(DateLike::Date(date)) => *date,
        Some(DateLike::DateTime(datetime)) => datetime.date(),
        Some(DateLike::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                today
            } else {
                // Combined timestamps keep only the part before the separator.
                let date_part = text.split('T').next().unwrap_or(text);
                parse_date(date_part).unwrap_or(today)
            }
        }
    };
    date.format("%Y-%m-%d").to_string()
}

/// Normalize any date-like input to a canonical `HH:MM` string.
///
/// Seconds are discarded; inputs with no usable time of day fall back to
/// `default_time`. Total, like [`normalize_date`].
pub fn normalize_time(input: Option<&DateLike>, default_time: &str) -> String {
    let time = match input {
        None => None,
        Some(DateLike::Date(_)) => NaiveTime::from_hms_opt(0, 0, 0),
        Some(DateLike::DateTime(datetime)) => Some(datetime.time()),
        Some(DateLike::Text(text)) => normalize_time_text(text.trim()),
    };
    match time {
        Some(time) => time.format("%H:%M").to_string(),
        None => default_time.to_string(),
    }
}

/// Join canonical date and time fields back into the combined form the
/// store persists.
pub fn join_date_time(date: &str, time: &str) -> String {
    format!("{date}T{time}")
}

fn normalize_time_text(text: &str) -> Option<NaiveTime> {
    if text.is_empty() {
        return None;
    }

    if let Some((_, time_part)) = text.split_once('T') {
        return parse_time(time_part);
    }

    if let Some(time) = parse_time(text) {
        return Some(time);
    }

    // A bare parseable date has a time of day of midnight.
    if parse_date(text).is_some() {
        return NaiveTime::from_hms_opt(0, 0, 0);
    }

    None
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(text, "%Y/%m/%d"))
        .ok()
}

fn parse_time(text: &str) -> Option<NaiveTime> {
    match text.len() {
        5 if text.as_bytes()[2] == b':' => NaiveTime::parse_from_str(text, "%H:%M").ok(),
        8 if text.as_bytes()[2] == b':' && text.as_bytes()[5] == b':' => {
            NaiveTime::parse_from_str(text, "%H:%M:%S").ok()
        }
        _ => None,
    }
}
