//! Event store: insertion-ordered in-memory collection with a durable
//! mirror that is rewritten in full after every mutation.
//!
//! The in-memory collection is authoritative. Mutations apply to it first
//! and mirror to storage as a separate step; a failed mirror write is
//! logged and the operation still counts (the caller can surface it later
//! through [`AgendaStore::persist`]).

use anyhow::{Context, Result};
use chrono::NaiveDate;

use crate::models::event::{Event, EventSubmission};
use crate::models::ui::CalendarEntry;
use crate::services::storage::SlotStorage;

pub mod ids;

pub use ids::{CounterIds, IdGenerator, UuidIds};

/// Slot name of the durable event collection.
pub const EVENTS_SLOT: &str = "agenda_events";

pub struct AgendaStore {
    events: Vec<Event>,
    storage: Box<dyn SlotStorage>,
    ids: Box<dyn IdGenerator>,
    slot: String,
}

impl AgendaStore {
    /// Open the store over the default slot.
    pub fn open(storage: Box<dyn SlotStorage>, ids: Box<dyn IdGenerator>) -> Self {
        Self::open_slot(storage, ids, EVENTS_SLOT)
    }

    /// Open the store over a named slot.
    ///
    /// A missing slot or a blob that no longer deserializes into the
    /// expected shape starts the store empty; neither is an error to the
    /// caller.
    pub fn open_slot(
        storage: Box<dyn SlotStorage>,
        ids: Box<dyn IdGenerator>,
        slot: &str,
    ) -> Self {
        let events = match storage.read(slot) {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Event>>(&payload) {
                Ok(events) => {
                    log::info!("loaded {} events from slot '{slot}'", events.len());
                    events
                }
                Err(err) => {
                    log::warn!("slot '{slot}' holds an incompatible blob, starting empty: {err}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(err) => {
                log::warn!("could not read slot '{slot}', starting empty: {err}");
                Vec::new()
            }
        };

        Self {
            events,
            storage,
            ids,
            slot: slot.to_string(),
        }
    }

    /// Append a submitted event, assigning an id when the submission
    /// carries none, and mirror the collection.
    pub fn add(&mut self, submission: EventSubmission) -> Event {
        let id = match submission.id.clone() {
            Some(id) => id,
            None => self.ids.next_id(),
        };
        let event = submission.into_event(id);
        self.events.push(event.clone());
        self.mirror();
        event
    }

    /// Replace the entry matching `record.id` in place, keeping its
    /// position. Returns `false` (collection untouched) for an unknown id.
    pub fn update(&mut self, record: Event) -> bool {
        let Some(existing) = self.events.iter_mut().find(|event| event.id == record.id) else {
            return false;
        };
        *existing = record;
        self.mirror();
        true
    }

    /// Remove the entry with the matching id. Returns `false` when the id
    /// was absent.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        if self.events.len() == before {
            return false;
        }
        self.mirror();
        true
    }

    /// The current collection, in insertion order.
    pub fn list(&self) -> &[Event] {
        &self.events
    }

    /// Look up a single event by id.
    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    /// The colored render list the calendar grid consumes.
    pub fn entries(&self, today: NaiveDate) -> Vec<CalendarEntry> {
        self.events
            .iter()
            .map(|event| CalendarEntry::from_event(event, today))
            .collect()
    }

    /// Mirror the collection to durable storage, surfacing failures.
    pub fn persist(&mut self) -> Result<()> {
        let payload = serde_json::to_string_pretty(&self.events)
            .context("failed to serialize the event collection")?;
        self.storage
            .write(&self.slot, &payload)
            .with_context(|| format!("failed to mirror the event collection to slot '{}'", self.slot))
    }

    fn mirror(&mut self) {
        if let Err(err) = self.persist() {
            log::warn!("durable mirror is lagging behind in-memory state: {err:#}");
        }
    }
}
