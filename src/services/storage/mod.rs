//! Slot storage backing the durable mirror of the event collection.
//!
//! The durable layout is one named slot holding the whole serialized
//! collection as text; the store rewrites it in full after every mutation.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use directories::ProjectDirs;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to read slot '{slot}' from {path}: {source}")]
    Read {
        slot: String,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write slot '{slot}' to {path}: {source}")]
    Write {
        slot: String,
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to create storage directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A local key-value store with named text slots.
pub trait SlotStorage {
    /// Read a slot's payload; `None` when the slot has never been written.
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError>;

    /// Replace a slot's payload in full.
    fn write(&mut self, slot: &str, payload: &str) -> Result<(), StorageError>;
}

/// File-backed slot storage: one `<slot>.json` file per slot under a
/// data directory.
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted in the platform data directory, when one exists.
    pub fn in_data_dir() -> Option<Self> {
        ProjectDirs::from("com", "KenBoyle", "RustAgenda")
            .map(|dirs| Self::new(dirs.data_dir().to_path_buf()))
    }

    fn slot_path(&self, slot: &str) -> PathBuf {
        self.dir.join(format!("{slot}.json"))
    }
}

impl SlotStorage for JsonFileStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }

        fs::read_to_string(&path)
            .map(Some)
            .map_err(|source| StorageError::Read {
                slot: slot.to_string(),
                path,
                source,
            })
    }

    fn write(&mut self, slot: &str, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.dir).map_err(|source| StorageError::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let path = self.slot_path(slot);
        fs::write(&path, payload).map_err(|source| StorageError::Write {
            slot: slot.to_string(),
            path,
            source,
        })
    }
}

/// In-memory slot storage for tests and ephemeral use.
///
/// Clones share the underlying slots, so a test can keep a handle while
/// the store owns another and inspect what was mirrored.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: Arc<Mutex<HashMap<String, String>>>,
}

impl SlotStorage for MemoryStorage {
    fn read(&self, slot: &str) -> Result<Option<String>, StorageError> {
        let slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        Ok(slots.get(slot).cloned())
    }

    fn write(&mut self, slot: &str, payload: &str) -> Result<(), StorageError> {
        let mut slots = self.slots.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        slots.insert(slot.to_string(), payload.to_string());
        Ok(())
    }
}
