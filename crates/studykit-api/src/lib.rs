//! # Studykit
//!
//! Small arithmetic helpers and an in-memory record store, meant to be
//! implemented and tested while learning.
//!
//! ## Quick Start
//!
//! ```rust
//! use studykit::{fib, Record, RecordStore};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! assert_eq!(fib(10)?, 55);
//!
//! let mut store = RecordStore::new();
//! store.create_item("user:1", &Record::from([("name", "Alice")]));
//! store.update_item("user:1", &Record::from([("age", 30)]));
//!
//! let user = store.read_item("user:1").unwrap();
//! assert_eq!(user.len(), 2);
//! # Ok(())
//! # }
//! ```
//!
//! ## Copy semantics
//!
//! The store clones records on the way in and on the way out. Editing a
//! record after `create_item`, or editing one returned by `read_item`,
//! never changes what the store holds.

pub mod logging;

// Re-export core types
pub use studykit_core::{Error, Record, Result, Value};

// Arithmetic helpers
pub use studykit_arith::{add, fib, MAX_FIB_INDEX};

// Record store
pub use studykit_store::{RecordStore, StoreConfig};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(VERSION, "0.1.0");
    }

    #[test]
    fn test_reexports() {
        assert_eq!(add(1, 1), 2);
        assert_eq!(fib(7).unwrap(), 13);

        let mut store = RecordStore::with_config(StoreConfig::default().with_name("facade"));
        store.create_item("k", &Record::from([("v", Value::Null)]));
        assert!(store.contains_key("k"));
    }
}
