//! # Studykit Core
//!
//! Core types shared by the studykit crates: the error type and the
//! dynamically shaped [`Record`] values held by the record store.
//!
//! ## ⚠️ Internal Implementation Detail
//!
//! Users should depend on the main `studykit` crate instead, which
//! re-exports everything needed from here.

#![warn(clippy::all)]

pub mod error;
pub mod value;

pub use error::{Error, Result};
pub use value::{Record, Value};
