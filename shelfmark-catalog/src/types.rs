//! Data model types for the book catalog.
//!
//! The persisted file is a single JSON object with one key, `catalog`,
//! mapping decimal-integer-string IDs to book records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Status assigned to every newly added book.
pub const STATUS_IN_STOCK: &str = "in stock";

/// Conventional status for a book that has been lent out. The status field
/// is free-form; this constant exists for display hints, not validation.
pub const STATUS_CHECKED_OUT: &str = "checked out";

/// The full collection of book records, keyed by string-encoded positive
/// integer ID. `BTreeMap` keeps iteration deterministic.
pub type Catalog = BTreeMap<String, Book>;

/// One book record.
///
/// Every field defaults when absent from the file so that hand-edited
/// catalogs with missing fields coerce (year to 0, strings to empty)
/// instead of failing to load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub year: i64,
    #[serde(default)]
    pub status: String,
}

impl Book {
    /// Create a book with the default "in stock" status.
    pub fn new(title: impl Into<String>, author: impl Into<String>, year: i64) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            year,
            status: STATUS_IN_STOCK.to_string(),
        }
    }
}

/// Top-level structure of the persisted catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub catalog: Catalog,
}

/// Compute the next book ID: max existing numeric ID + 1, or 1 for an
/// empty catalog. Keys that don't parse as integers are skipped by the
/// max scan. IDs are never reused beyond this rule, so deleting the
/// highest ID and adding again reassigns that same ID.
pub fn next_id(catalog: &Catalog) -> String {
    let max = catalog
        .keys()
        .filter_map(|key| key.parse::<u64>().ok())
        .max()
        .unwrap_or(0);
    (max + 1).to_string()
}
