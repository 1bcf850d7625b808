use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error (stdin/stdout plumbing)
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Store operation failed
    #[error("Catalog error: {0}")]
    Store(#[from] shelfmark_store::StoreError),
}
