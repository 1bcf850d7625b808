//! JSON load/save for the catalog file.
//!
//! The whole catalog is serialized to a single pretty-printed JSON file on
//! every save. There is no atomic-write guarantee; a partial write shows up
//! as a corrupt file on the next load and is reset to the empty default.

use std::fs;
use std::io;
use std::path::Path;

use thiserror::Error;

use crate::types::CatalogFile;

#[derive(Debug, Error)]
pub enum JsonError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl JsonError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }
}

/// Load the catalog file, creating it when necessary.
///
/// A missing file is treated as a first run: the default empty catalog is
/// written to disk and returned. A file that exists but fails to parse is
/// overwritten with the default and the default is returned (destructive
/// recovery — the corrupt content is not preserved). Both paths may write
/// to disk even though this is nominally a load.
pub fn load_or_create(path: &Path) -> Result<CatalogFile, JsonError> {
    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(file) => Ok(file),
            Err(e) => {
                log::warn!(
                    "{} is corrupt ({e}); resetting to an empty catalog",
                    path.display()
                );
                let default = CatalogFile::default();
                save(path, &default)?;
                Ok(default)
            }
        },
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::info!("{} not found; creating it", path.display());
            let default = CatalogFile::default();
            save(path, &default)?;
            Ok(default)
        }
        Err(e) => Err(JsonError::io(path, e)),
    }
}

/// Serialize the full catalog to `path`, overwriting any existing content.
pub fn save(path: &Path, file: &CatalogFile) -> Result<(), JsonError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| JsonError::io(path, e))?;
        }
    }
    let contents = serde_json::to_string_pretty(file)?;
    fs::write(path, contents).map_err(|e| JsonError::io(path, e))?;
    Ok(())
}
