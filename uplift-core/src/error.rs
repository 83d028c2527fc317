//! Error types for the uplift crates.

use thiserror::Error;

/// Errors that can occur in uplift operations.
///
/// Only `Validation` and `InvalidTimeFormat` are meant to reach the user as
/// rejected input; the storage and source variants are absorbed into safe
/// defaults by their callers.
#[derive(Error, Debug)]
pub enum UpliftError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Invalid time format: {0}")]
    InvalidTimeFormat(String),

    #[error("Stored data unreadable: {0}")]
    StorageCorrupt(String),

    #[error("Quote source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("Inbox provider error: {0}")]
    Inbox(String),

    #[error("Inbox provider '{0}' not found in PATH")]
    InboxNotInstalled(String),

    #[error("Inbox provider request timed out after {0}s")]
    InboxTimeout(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for uplift operations.
pub type UpliftResult<T> = Result<T, UpliftError>;
