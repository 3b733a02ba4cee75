// UI models module
// Grid-facing records: urgency buckets and colored calendar entries

use chrono::NaiveDate;

use crate::models::event::Event;
use crate::utils::date::{normalize_date_with, DateLike};

/// Coarse urgency of an event relative to the current date.
///
/// Derived on every render pass and never persisted, so the color always
/// reflects the current moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrgencyBucket {
    Past,
    Today,
    Soon,
    Future,
}

impl UrgencyBucket {
    /// Classify a stored (combined or bare) event date against `today`.
    ///
    /// The whole-day difference is taken between calendar dates, so an
    /// event a few hours into tomorrow counts as one day out, never zero.
    pub fn classify(event_date: &str, today: NaiveDate) -> Self {
        let normalized = normalize_date_with(Some(&DateLike::from(event_date)), today);
        let date = NaiveDate::parse_from_str(&normalized, "%Y-%m-%d").unwrap_or(today);

        let diff_days = (date - today).num_days();
        if diff_days < 0 {
            UrgencyBucket::Past
        } else if diff_days == 0 {
            UrgencyBucket::Today
        } else if diff_days <= 3 {
            UrgencyBucket::Soon
        } else {
            UrgencyBucket::Future
        }
    }

    /// Display color for the calendar grid.
    pub fn hex_color(&self) -> &'static str {
        match self {
            UrgencyBucket::Past => "#6b7280",
            UrgencyBucket::Today => "#ef4444",
            UrgencyBucket::Soon => "#f59e0b",
            UrgencyBucket::Future => "#14b8a6",
        }
    }

    /// Legend label for the bucket.
    pub fn label(&self) -> &'static str {
        match self {
            UrgencyBucket::Past => "past",
            UrgencyBucket::Today => "today",
            UrgencyBucket::Soon => "soon",
            UrgencyBucket::Future => "future",
        }
    }
}

/// One colored entry as the calendar grid component consumes it.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEntry {
    pub id: String,
    pub title: String,
    /// Combined start timestamp, as stored.
    pub start: String,
    pub bucket: UrgencyBucket,
}

impl CalendarEntry {
    pub fn from_event(event: &Event, today: NaiveDate) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            start: event.date.clone(),
            bucket: UrgencyBucket::classify(&event.date, today),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn fixed_today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test_case("2024-05-30", UrgencyBucket::Past ; "two days gone is past")]
    #[test_case("2024-05-31", UrgencyBucket::Past ; "yesterday is past")]
    #[test_case("2024-06-01", UrgencyBucket::Today ; "same calendar day is today")]
    #[test_case("2024-06-02", UrgencyBucket::Soon ; "tomorrow is soon")]
    #[test_case("2024-06-03", UrgencyBucket::Soon ; "two days out is soon")]
    #[test_case("2024-06-04", UrgencyBucket::Soon ; "three days out is soon")]
    #[test_case("2024-06-05", UrgencyBucket::Future ; "four days out is future")]
    #[test_case("2024-06-10", UrgencyBucket::Future ; "next week is future")]
    fn classify_bare_dates(date: &str, expected: UrgencyBucket) {
        assert_eq!(UrgencyBucket::classify(date, fixed_today()), expected);
    }

    #[test]
    fn classify_ignores_the_time_of_day() {
        // Late tonight is still today; early tomorrow is already one day out.
        assert_eq!(
            UrgencyBucket::classify("2024-06-01T23:59", fixed_today()),
            UrgencyBucket::Today
        );
        assert_eq!(
            UrgencyBucket::classify("2024-06-02T00:30", fixed_today()),
            UrgencyBucket::Soon
        );
    }

    #[test]
    fn classify_falls_back_to_today_for_garbage() {
        assert_eq!(
            UrgencyBucket::classify("not-a-date", fixed_today()),
            UrgencyBucket::Today
        );
    }

    #[test]
    fn bucket_colors_match_the_grid_palette() {
        assert_eq!(UrgencyBucket::Past.hex_color(), "#6b7280");
        assert_eq!(UrgencyBucket::Today.hex_color(), "#ef4444");
        assert_eq!(UrgencyBucket::Soon.hex_color(), "#f59e0b");
        assert_eq!(UrgencyBucket::Future.hex_color(), "#14b8a6");
    }

    #[test]
    fn calendar_entry_carries_event_fields_and_bucket() {
        let event = Event::new("ev-1", "Dentist", "Checkup", "2024-06-03T14:30").unwrap();
        let entry = CalendarEntry::from_event(&event, fixed_today());

        assert_eq!(entry.id, "ev-1");
        assert_eq!(entry.title, "Dentist");
        assert_eq!(entry.start, "2024-06-03T14:30");
        assert_eq!(entry.bucket, UrgencyBucket::Soon);
    }
}
