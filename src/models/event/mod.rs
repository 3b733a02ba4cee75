// Event module
// Agenda event record, the unit of the persisted collection

use serde::{Deserialize, Serialize};

/// A scheduled agenda event.
///
/// `date` is always the combined `YYYY-MM-DDTHH:MM` form once persisted;
/// the edit form works on date and time separately and rejoins them at
/// submit time. The serialized field names match the durable blob layout,
/// an array of `{id, title, description, date}` objects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Arguments
    /// * `id` - Unique identifier, immutable once assigned
    /// * `title` - Event title (required, non-empty)
    /// * `date` - Combined `YYYY-MM-DDTHH:MM` timestamp
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        date: impl Into<String>,
    ) -> Result<Self, String> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            date: date.into(),
        };
        event.validate()?;
        Ok(event)
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), String> {
        if self.id.trim().is_empty() {
            return Err("Event id cannot be empty".to_string());
        }

        if self.title.trim().is_empty() {
            return Err("Event title cannot be empty".to_string());
        }

        if self.date.trim().is_empty() {
            return Err("Event date cannot be empty".to_string());
        }

        Ok(())
    }
}

/// The validated payload a submitted form hands to the store.
///
/// `id` is `None` for a brand-new event; the store assigns one on `add`.
/// An `id` carried over from an edit session routes the payload to
/// `update` instead.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSubmission {
    pub id: Option<String>,
    pub title: String,
    pub description: String,
    pub date: String,
}

impl EventSubmission {
    /// Finalize the submission into a stored record under the given id.
    pub fn into_event(self, id: String) -> Event {
        Event {
            id,
            title: self.title,
            description: self.description,
            date: self.date,
        }
    }
}
