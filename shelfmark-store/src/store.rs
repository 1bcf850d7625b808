//! The store handle and its error type.

use std::path::{Path, PathBuf};

use shelfmark_catalog::{CatalogFile, JsonError, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Catalog file error: {0}")]
    Json(#[from] JsonError),
}

/// Handle to a catalog file.
///
/// The storage path is injected at construction rather than fixed
/// module-wide, so tests can point each store at its own temporary file.
/// The handle holds no in-memory catalog state.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    path: PathBuf,
}

impl CatalogStore {
    /// Create a store for the catalog file at `path`. The file itself is
    /// created lazily on the first operation.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path to the backing catalog file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn load(&self) -> Result<CatalogFile, StoreError> {
        Ok(json::load_or_create(&self.path)?)
    }

    pub(crate) fn persist(&self, file: &CatalogFile) -> Result<(), StoreError> {
        Ok(json::save(&self.path, file)?)
    }
}
