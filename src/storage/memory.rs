//! In-memory record store.
//!
//! Records are held as JSON values so loads and saves go through the same
//! serde path as the file store.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Serialize, de::DeserializeOwned};

use super::traits::{Collection, RecordStore};
use crate::error::{Result, StampcardError};

/// Record store kept entirely in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: Mutex<HashMap<Collection, Vec<serde_json::Value>>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail (or succeed again) with `StorageUnavailable`.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(StampcardError::StorageUnavailable(
                "memory store marked unavailable".to_string(),
            ));
        }
        Ok(())
    }
}

impl RecordStore for MemoryStore {
    fn load<T: DeserializeOwned>(&self, collection: Collection) -> Result<Vec<T>> {
        self.check_available()?;
        let collections = self
            .collections
            .lock()
            .map_err(|e| StampcardError::StorageUnavailable(e.to_string()))?;

        let Some(values) = collections.get(&collection) else {
            return Ok(Vec::new());
        };

        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                serde_json::from_value(value.clone()).map_err(|e| StampcardError::Corrupt {
                    collection: collection.key().to_string(),
                    line: index + 1,
                    message: e.to_string(),
                })
            })
            .collect()
    }

    fn save<T: Serialize>(&self, collection: Collection, records: &[T]) -> Result<()> {
        self.check_available()?;
        // Serialize before taking the lock so a failure leaves the old data intact
        let values = records
            .iter()
            .map(serde_json::to_value)
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut collections = self
            .collections
            .lock()
            .map_err(|e| StampcardError::StorageUnavailable(e.to_string()))?;
        collections.insert(collection, values);
        Ok(())
    }
}
