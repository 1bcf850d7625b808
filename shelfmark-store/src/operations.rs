//! Mutating catalog operations: add, remove, change status.

use shelfmark_catalog::{Book, next_id};

use crate::store::{CatalogStore, StoreError};

impl CatalogStore {
    /// Add a book and return its assigned ID.
    ///
    /// The ID is max existing numeric ID + 1 (or "1" for an empty catalog)
    /// and the status is fixed to "in stock". Titles and authors aren't
    /// validated; empty strings are accepted as-is.
    pub fn add_book(&self, title: &str, author: &str, year: i64) -> Result<String, StoreError> {
        let mut file = self.load()?;
        let id = next_id(&file.catalog);
        file.catalog.insert(id.clone(), Book::new(title, author, year));
        self.persist(&file)?;
        Ok(id)
    }

    /// Remove the book with the given ID.
    ///
    /// Returns true and persists when the ID exists; returns false without
    /// touching the file otherwise.
    pub fn remove_book(&self, id: &str) -> Result<bool, StoreError> {
        let mut file = self.load()?;
        if file.catalog.remove(id).is_none() {
            return Ok(false);
        }
        self.persist(&file)?;
        Ok(true)
    }

    /// Set the status of the book with the given ID.
    ///
    /// The whole catalog is consulted, wherever the entry sits. Returns
    /// true and persists on a hit; returns false without writing when the
    /// ID is absent. `new_status` is free-form and stored verbatim.
    pub fn change_status(&self, id: &str, new_status: &str) -> Result<bool, StoreError> {
        let mut file = self.load()?;
        match file.catalog.get_mut(id) {
            Some(book) => {
                book.status = new_status.to_string();
                self.persist(&file)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
