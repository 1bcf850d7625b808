//! Read-only catalog queries: search, listing, stats.
//!
//! Queries still trigger a full load (the load-per-call model applies to
//! reads too) but never write the catalog back.

use std::collections::BTreeMap;

use shelfmark_catalog::Book;

use crate::store::{CatalogStore, StoreError};

/// Aggregate counts over the catalog, for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub total: usize,
    /// Book counts per status string. Statuses are free-form, so this is
    /// keyed by whatever values the catalog actually contains.
    pub by_status: BTreeMap<String, usize>,
}

impl CatalogStore {
    /// Search the catalog with a free-text key.
    ///
    /// A key made entirely of ASCII digits matches books by publication
    /// year; anything else is compared case-insensitively against the
    /// author and title. Matching is exact in both cases — "Jane Doe"
    /// does not match a book titled "The Jane Doe Story". Results come
    /// back in catalog iteration order; no match yields an empty vec.
    pub fn search(&self, key: &str) -> Result<Vec<(String, Book)>, StoreError> {
        let file = self.load()?;

        let by_year = !key.is_empty() && key.chars().all(|c| c.is_ascii_digit());
        let matches = if by_year {
            match key.parse::<i64>() {
                Ok(year) => file
                    .catalog
                    .into_iter()
                    .filter(|(_, book)| book.year == year)
                    .collect(),
                // More digits than fit in an i64 can't match any stored year.
                Err(_) => Vec::new(),
            }
        } else {
            let needle = key.to_lowercase();
            file.catalog
                .into_iter()
                .filter(|(_, book)| {
                    book.author.to_lowercase() == needle || book.title.to_lowercase() == needle
                })
                .collect()
        };

        Ok(matches)
    }

    /// List every book, sorted numerically by ID.
    ///
    /// Non-numeric IDs (possible only via hand-edited files) sort last.
    pub fn list_books(&self) -> Result<Vec<(String, Book)>, StoreError> {
        let file = self.load()?;
        let mut books: Vec<(String, Book)> = file.catalog.into_iter().collect();
        books.sort_by_key(|(id, _)| id.parse::<u64>().unwrap_or(u64::MAX));
        Ok(books)
    }

    /// Count books in total and per status.
    pub fn catalog_stats(&self) -> Result<CatalogStats, StoreError> {
        let file = self.load()?;
        let mut stats = CatalogStats {
            total: file.catalog.len(),
            ..Default::default()
        };
        for book in file.catalog.values() {
            *stats.by_status.entry(book.status.clone()).or_insert(0) += 1;
        }
        Ok(stats)
    }
}
