//! Error types for the Fortuna wheel engine

use thiserror::Error;

/// Core error type
#[derive(Error, Debug)]
pub enum FwError {
    /// The draw pool cannot be used: empty, non-positive total weight, or
    /// an entry invariant is broken. Unrecoverable for that call.
    #[error("Invalid wheel configuration: {0}")]
    InvalidConfig(String),

    /// An entry id was not where it was expected. Recoverable; callers
    /// degrade to a best-effort fallback.
    #[error("Entry not found: {0}")]
    EntryNotFound(String),

    /// A spin was requested while another spin is in flight.
    #[error("A spin is already in progress")]
    AlreadySpinning,

    /// No render surface is attached to the animation controller.
    #[error("No spin surface attached")]
    NoTarget,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias
pub type FwResult<T> = Result<T, FwError>;
