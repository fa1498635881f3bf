//! Unified error type for the cache, the repositories and configuration loading.

use thiserror::Error;

/// Every failure the crate reports, whether returned from an async operation or
/// handed to an `on_error` callback.
#[derive(Debug, Error)]
pub enum Error {
    /// A read or write against the store failed (unreachable, constraint, decoding).
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// A delete or lookup targeted a key that has no row.
    #[error("{entity} with id {id} not found")]
    NotFound {
        /// Table the key was looked up in
        entity: String,
        /// Debug rendering of the missing key
        id: String,
    },

    /// A background query task panicked or was aborted before producing a value.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    /// The configuration file or environment held something unusable.
    #[error("Configuration error: {message}")]
    Config {
        /// What was wrong
        message: String,
    },

    /// I/O error while reading configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required environment variable was missing or not unicode.
    #[error("Environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),

    /// The delivery queue was dropped, so no callback can run anymore.
    #[error("Delivery context closed")]
    DeliveryClosed,
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
