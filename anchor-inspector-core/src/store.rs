//! Address book persisted through a key-value port.
//!
//! The book owns its entries and writes the whole list back to the port
//! after every mutation. Derivation never touches it; callers hand derived
//! addresses over as plain [`Pubkey`] values.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{InspectorError, InspectorResult};
use crate::pubkey::Pubkey;

/// Key under which the entry list is stored.
pub const ADDRESSES_KEY: &str = "@AnchorInspector:Addresses";

/// Persistence port: a string-keyed, string-valued store.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> InspectorResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> InspectorResult<()>;
}

/// In-memory [`KeyValueStore`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> InspectorResult<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> InspectorResult<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A named address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressEntry {
    pub id: String,
    #[serde(alias = "k")]
    pub key: Pubkey,
}

/// Ordered, id-unique list of addresses backed by a [`KeyValueStore`].
#[derive(Debug)]
pub struct AddressBook<S: KeyValueStore> {
    store: S,
    entries: Vec<AddressEntry>,
}

impl<S: KeyValueStore> AddressBook<S> {
    /// Read the stored list; a missing key is an empty book.
    pub fn load(store: S) -> InspectorResult<Self> {
        let entries = match store.get(ADDRESSES_KEY)? {
            Some(json) => serde_json::from_str(&json).map_err(|e| {
                InspectorError::storage(format!("corrupt entry list under {}: {}", ADDRESSES_KEY, e))
            })?,
            None => vec![],
        };
        Ok(Self { store, entries })
    }

    pub fn list(&self) -> &[AddressEntry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&AddressEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Add `key` under `id`, defaulting the id to the key's base58 form.
    ///
    /// An existing id keeps its position and gets the new key; a new id is
    /// appended.
    pub fn add(&mut self, key: Pubkey, id: Option<&str>) -> InspectorResult<&AddressEntry> {
        let id = id.map(str::to_string).unwrap_or_else(|| key.to_base58());
        let exists = self.entries.iter().any(|e| e.id == id);
        let entries = if exists {
            self.entries
                .iter()
                .map(|e| {
                    if e.id == id {
                        AddressEntry { id: e.id.clone(), key }
                    } else {
                        e.clone()
                    }
                })
                .collect()
        } else {
            let mut entries = self.entries.clone();
            entries.push(AddressEntry { id: id.clone(), key });
            entries
        };
        self.commit(entries)?;
        self.get(&id)
            .ok_or_else(|| InspectorError::storage(format!("entry '{}' missing after write", id)))
    }

    /// Remove the entry with `id`. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> InspectorResult<bool> {
        let entries: Vec<AddressEntry> = self.entries.iter().filter(|e| e.id != id).cloned().collect();
        let removed = entries.len() != self.entries.len();
        if removed {
            self.commit(entries)?;
        }
        Ok(removed)
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Persist first so a failed write leaves the in-memory list untouched.
    fn commit(&mut self, entries: Vec<AddressEntry>) -> InspectorResult<()> {
        let json = serde_json::to_string(&entries)
            .map_err(|e| InspectorError::storage(format!("failed to encode entries: {}", e)))?;
        self.store.set(ADDRESSES_KEY, &json)?;
        self.entries = entries;
        Ok(())
    }
}
