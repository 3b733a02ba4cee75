// Form draft module
// Decomposed, editable representation of an event while the form is open

use chrono::NaiveDateTime;

use crate::models::event::{Event, EventSubmission};
use crate::utils::date::{join_date_time, normalize_date, normalize_time, DateLike};

/// Field-level validation messages, keyed the way the form renders them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldErrors {
    pub title: Option<String>,
    pub date: Option<String>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.date.is_none()
    }
}

/// In-progress event edit with date and time as separate, directly
/// bindable fields.
///
/// Owned by the active edit session only; it is turned into an
/// [`EventSubmission`] on submit and discarded on close. All seeding goes
/// through the normalizer so re-editing a stored record and opening a
/// fresh form follow the same date policy.
#[derive(Debug, Clone, PartialEq)]
pub struct EventDraft {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    /// Canonical `YYYY-MM-DD`.
    pub date: String,
    /// Canonical `HH:MM`.
    pub time: String,
}

impl EventDraft {
    /// Fresh draft for a selected date (or today when nothing is selected).
    pub fn for_date(selected: Option<&DateLike>, default_time: &str) -> Self {
        Self {
            id: None,
            title: String::new(),
            description: String::new(),
            date: normalize_date(selected),
            time: normalize_time(selected, default_time),
        }
    }

    /// Draft seeded from a stored record for re-editing.
    pub fn from_event(event: &Event, default_time: &str) -> Self {
        let stored = DateLike::from(event.date.as_str());
        Self {
            id: Some(event.id.clone()),
            title: event.title.clone(),
            description: event.description.clone(),
            date: normalize_date(Some(&stored)),
            time: normalize_time(Some(&stored), default_time),
        }
    }

    /// Validate the draft and convert it into a submission payload.
    ///
    /// Rejection returns the field messages without touching the store:
    /// the title and date are required, and the combined date-time must
    /// not lie in the past relative to `now`.
    pub fn submit(self, now: NaiveDateTime) -> Result<EventSubmission, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.title.trim().is_empty() {
            errors.title = Some("Title is required".to_string());
        }

        if self.date.trim().is_empty() {
            errors.date = Some("Date is required".to_string());
        } else {
            let combined = join_date_time(&self.date, &self.time);
            match NaiveDateTime::parse_from_str(&combined, "%Y-%m-%dT%H:%M") {
                Ok(selected) if selected < now => {
                    errors.date = Some("Events cannot be scheduled in the past".to_string());
                }
                Ok(_) => {}
                Err(_) => {
                    errors.date = Some("Date or time is not valid".to_string());
                }
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(EventSubmission {
            id: self.id,
            title: self.title,
            description: self.description,
            date: join_date_time(&self.date, &self.time),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn fixed_now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn stored_event() -> Event {
        Event::new("ev-1", "Dentist", "Checkup", "2024-06-03T14:30").unwrap()
    }

    #[test]
    fn for_date_seeds_from_selected_date() {
        let selected = DateLike::from("2024-06-10");
        let draft = EventDraft::for_date(Some(&selected), "09:00");

        assert_eq!(draft.id, None);
        assert_eq!(draft.date, "2024-06-10");
        // A bare selected date carries midnight as its time of day.
        assert_eq!(draft.time, "00:00");
        assert_eq!(draft.title, "");
    }

    #[test]
    fn for_date_without_selection_uses_defaults() {
        let draft = EventDraft::for_date(None, "09:00");
        assert_eq!(draft.time, "09:00");
        assert!(!draft.date.is_empty());
    }

    #[test]
    fn from_event_splits_the_combined_timestamp() {
        let draft = EventDraft::from_event(&stored_event(), "09:00");

        assert_eq!(draft.id.as_deref(), Some("ev-1"));
        assert_eq!(draft.title, "Dentist");
        assert_eq!(draft.date, "2024-06-03");
        assert_eq!(draft.time, "14:30");
    }

    #[test]
    fn submit_joins_date_and_time() {
        let draft = EventDraft {
            id: None,
            title: "Dentist".to_string(),
            description: String::new(),
            date: "2024-06-03".to_string(),
            time: "14:30".to_string(),
        };

        let submission = draft.submit(fixed_now()).unwrap();
        assert_eq!(submission.date, "2024-06-03T14:30");
        assert_eq!(submission.id, None);
    }

    #[test]
    fn submit_rejects_empty_title() {
        let draft = EventDraft {
            id: None,
            title: "   ".to_string(),
            description: String::new(),
            date: "2024-06-03".to_string(),
            time: "14:30".to_string(),
        };

        let errors = draft.submit(fixed_now()).unwrap_err();
        assert_eq!(errors.title.as_deref(), Some("Title is required"));
        assert_eq!(errors.date, None);
    }

    #[test]
    fn submit_rejects_empty_date() {
        let draft = EventDraft {
            id: None,
            title: "Dentist".to_string(),
            description: String::new(),
            date: String::new(),
            time: "14:30".to_string(),
        };

        let errors = draft.submit(fixed_now()).unwrap_err();
        assert_eq!(errors.date.as_deref(), Some("Date is required"));
    }

    #[test]
    fn submit_rejects_past_date_time() {
        let draft = EventDraft {
            id: None,
            title: "Dentist".to_string(),
            description: String::new(),
            date: "2024-05-30".to_string(),
            time: "14:30".to_string(),
        };

        let errors = draft.submit(fixed_now()).unwrap_err();
        assert_eq!(
            errors.date.as_deref(),
            Some("Events cannot be scheduled in the past")
        );
    }

    #[test]
    fn submit_collects_all_field_errors_at_once() {
        let draft = EventDraft {
            id: None,
            title: String::new(),
            description: String::new(),
            date: String::new(),
            time: "14:30".to_string(),
        };

        let errors = draft.submit(fixed_now()).unwrap_err();
        assert!(errors.title.is_some());
        assert!(errors.date.is_some());
    }

    #[test]
    fn submit_keeps_the_id_of_an_edited_event() {
        let mut draft = EventDraft::from_event(&stored_event(), "09:00");
        draft.title = "Dentist (moved)".to_string();
        draft.date = "2024-06-05".to_string();

        let submission = draft.submit(fixed_now()).unwrap();
        assert_eq!(submission.id.as_deref(), Some("ev-1"));
        assert_eq!(submission.date, "2024-06-05T14:30");
    }
}
