//! Error taxonomy for seeding operations.

use std::path::PathBuf;

use thiserror::Error;

/// Errors returned by the store and the seeder.
///
/// All variants are terminal: nothing is retried and no rows are committed
/// when one is returned.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The request was rejected before touching the store.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The backing database file is missing or could not be opened.
    #[error("database not found at {}: {reason}", .path.display())]
    StoreUnavailable { path: PathBuf, reason: String },

    /// SQLite rejected a statement (constraint violation, missing table, ...).
    #[error("database write failed: {0}")]
    StoreWriteFailed(#[from] rusqlite::Error),
}

/// Convenience result alias for seeding operations.
pub type SeedResult<T> = Result<T, SeedError>;
