//! Error types for the library API.

use thiserror::Error;

/// Reasons a line of operator input is rejected.
///
/// These are recoverable: the interactive loop prints them and asks again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The input was empty (including a closed input stream).
    #[error("Input Error: Unexpected Input.")]
    EmptyInput,

    /// The input decoded as UTF-8 but contained a multi-byte character.
    #[error("Input Error: Not use ASCII.")]
    NonAsciiInput,
}

/// Errors related to the phonebook database.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The database could not be opened or created.
    #[error("Failed to open database: {0}")]
    Init(String),

    /// An error reported by SQLite (I/O, locking, constraint failure...).
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// An underlying file I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that end an interactive session.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Writing prompts or listings failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured retry limit for a field was exhausted.
    #[error("Too many invalid attempts for '{field}'")]
    TooManyAttempts { field: String },
}
