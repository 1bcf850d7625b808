//! File-backed catalog store.
//!
//! Provides add/remove/change-status operations and search/list/stats
//! queries over the JSON catalog file. Every operation reloads the catalog
//! from disk, mutates it in memory, and persists it before returning, so
//! each call is independently durable.

pub mod operations;
pub mod queries;
mod store;

pub use queries::CatalogStats;
pub use store::{CatalogStore, StoreError};
