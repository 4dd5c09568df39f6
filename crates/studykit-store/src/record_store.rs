//! RecordStore - keyed collection of records
//!
//! A hash map from string keys to [`Record`]s with create/read/update/
//! delete/clear operations. Absence is an expected outcome, reported as
//! `false` or `None` rather than an error.

use crate::StoreConfig;
use std::collections::HashMap;
use studykit_core::Record;
use tracing::{debug, trace};

/// In-memory record store
///
/// Every record handed in is cloned before it is stored, and every record
/// handed out is a clone of the stored one. Clones are deep, so nested
/// lists and maps are isolated as well.
#[derive(Debug, Clone)]
pub struct RecordStore {
    /// Stored records by key
    records: HashMap<String, Record>,
    /// Count of successful mutations
    sequence: u64,
    /// Configuration
    config: StoreConfig,
}

impl RecordStore {
    /// Creates an empty store with the default configuration
    pub fn new() -> Self {
        Self::with_config(StoreConfig::default())
    }

    /// Creates an empty store with custom configuration
    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            records: HashMap::with_capacity(config.initial_capacity),
            sequence: 0,
            config,
        }
    }

    /// Inserts or replaces the record at `key` with a copy of `value`.
    pub fn create_item(&mut self, key: &str, value: &Record) {
        let replaced = self
            .records
            .insert(key.to_string(), value.clone())
            .is_some();
        self.sequence += 1;
        debug!(store = %self.config.name, key, replaced, "created item");
    }

    /// Returns a copy of the record at `key`, or `None` if it is missing.
    pub fn read_item(&self, key: &str) -> Option<Record> {
        self.records.get(key).cloned()
    }

    /// Merges `patch` into the record at `key`.
    ///
    /// Patch fields overwrite fields of the same name; other fields are
    /// kept. Returns `false` without touching the store if `key` is missing.
    pub fn update_item(&mut self, key: &str, patch: &Record) -> bool {
        match self.records.get_mut(key) {
            Some(record) => {
                record.merge(patch);
                self.sequence += 1;
                debug!(store = %self.config.name, key, fields = patch.len(), "updated item");
                true
            }
            None => {
                trace!(store = %self.config.name, key, "update on missing item");
                false
            }
        }
    }

    /// Removes the record at `key`. Returns `true` if it existed.
    pub fn delete_item(&mut self, key: &str) -> bool {
        if self.records.remove(key).is_some() {
            self.sequence += 1;
            debug!(store = %self.config.name, key, "deleted item");
            true
        } else {
            trace!(store = %self.config.name, key, "delete on missing item");
            false
        }
    }

    /// Removes every record.
    pub fn clear_db(&mut self) {
        let removed = self.records.len();
        self.records.clear();
        self.sequence += 1;
        debug!(store = %self.config.name, removed, "cleared store");
    }

    /// Returns true if a record is stored at `key`
    pub fn contains_key(&self, key: &str) -> bool {
        self.records.contains_key(key)
    }

    /// Returns the number of stored records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns all keys in sorted order
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.records.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Returns the number of successful mutations so far
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Returns the store configuration
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }
}

impl Default for RecordStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studykit_core::Value;

    #[test]
    fn test_store_new() {
        let store = RecordStore::new();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
        assert_eq!(store.sequence(), 0);
        assert_eq!(store.config().name, "default");
    }

    #[test]
    fn test_create_read() {
        let mut store = RecordStore::new();

        store.create_item("k1", &Record::from([("a", 1)]));
        store.create_item("k2", &Record::from([("b", 2)]));

        assert_eq!(store.len(), 2);
        assert_eq!(store.read_item("k1"), Some(Record::from([("a", 1)])));
        assert_eq!(store.read_item("k2"), Some(Record::from([("b", 2)])));
        assert_eq!(store.read_item("k3"), None);
    }

    #[test]
    fn test_create_replaces() {
        let mut store = RecordStore::new();

        store.create_item("k", &Record::from([("a", 1), ("b", 2)]));
        store.create_item("k", &Record::from([("c", 3)]));

        assert_eq!(store.read_item("k"), Some(Record::from([("c", 3)])));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_caller_copy_is_detached() {
        let mut store = RecordStore::new();
        let mut value = Record::from([("a", 1)]);

        store.create_item("k", &value);
        value.insert("a", 99);
        value.insert("extra", true);

        assert_eq!(store.read_item("k"), Some(Record::from([("a", 1)])));
    }

    #[test]
    fn test_update_merges() {
        let mut store = RecordStore::new();
        store.create_item("k", &Record::from([("a", 1), ("b", 2)]));

        assert!(store.update_item("k", &Record::from([("b", 20), ("c", 30)])));

        let record = store.read_item("k").unwrap();
        assert_eq!(record.get("a"), Some(&Value::Integer(1)));
        assert_eq!(record.get("b"), Some(&Value::Integer(20)));
        assert_eq!(record.get("c"), Some(&Value::Integer(30)));
    }

    #[test]
    fn test_update_missing() {
        let mut store = RecordStore::new();
        store.create_item("present", &Record::from([("a", 1)]));
        let sequence = store.sequence();

        assert!(!store.update_item("missing", &Record::from([("a", 1)])));
        assert!(!store.contains_key("missing"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.sequence(), sequence);
    }

    #[test]
    fn test_delete() {
        let mut store = RecordStore::new();
        store.create_item("k", &Record::new());

        assert!(store.delete_item("k"));
        assert!(!store.delete_item("k"));
        assert_eq!(store.read_item("k"), None);
    }

    #[test]
    fn test_keys_sorted() {
        let mut store = RecordStore::new();

        // Insert in random order
        store.create_item("c", &Record::new());
        store.create_item("a", &Record::new());
        store.create_item("b", &Record::new());

        assert_eq!(store.keys(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_sequence() {
        let mut store = RecordStore::new();

        store.create_item("k", &Record::new());
        assert_eq!(store.sequence(), 1);

        store.update_item("k", &Record::from([("a", 1)]));
        assert_eq!(store.sequence(), 2);

        store.delete_item("k");
        assert_eq!(store.sequence(), 3);

        store.delete_item("k");
        assert_eq!(store.sequence(), 3);
    }

    #[test]
    fn test_clear() {
        let mut store = RecordStore::with_config(StoreConfig::default().with_capacity(8));

        store.create_item("k1", &Record::from([("a", 1)]));
        store.create_item("k2", &Record::from([("b", 2)]));
        assert_eq!(store.len(), 2);

        store.clear_db();

        assert!(store.is_empty());
        assert_eq!(store.read_item("k1"), None);
        assert_eq!(store.read_item("k2"), None);
    }
}
