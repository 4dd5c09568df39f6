//! # Studykit Record Store
//!
//! In-memory record store for studykit.
//!
//! ## ⚠️ Internal Implementation Detail
//!
//! **This crate is an internal implementation detail of studykit.**
//!
//! Users should depend on the main `studykit` crate instead, which
//! re-exports the store types.
//!
//! ---
//!
//! The store maps string keys to [`Record`](studykit_core::Record)s and
//! copies data on the way in and on the way out:
//!
//! ```text
//! caller Record ──clone──▶ RecordStore ──clone──▶ caller Record
//! ```
//!
//! Nothing the caller does to its own copies can reach the stored state.

pub mod record_store;

pub use record_store::RecordStore;

/// Record store configuration
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Name attached to every log event emitted by the store
    pub name: String,
    /// Number of keys to reserve space for up front
    pub initial_capacity: usize,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            initial_capacity: 0,
        }
    }
}

impl StoreConfig {
    /// Set the store name
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Set the initial key capacity
    pub fn with_capacity(mut self, initial_capacity: usize) -> Self {
        self.initial_capacity = initial_capacity;
        self
    }
}
