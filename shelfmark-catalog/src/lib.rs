//! Book catalog data model types and JSON I/O.
//!
//! This crate defines the persistent data model for the book catalog and the
//! file-level load/save routines. Consumers can use these types directly for
//! serialization or display, or go through `shelfmark-store` for the
//! catalog operations.

pub mod json;
pub mod types;

pub use json::{JsonError, load_or_create, save};
pub use types::*;
