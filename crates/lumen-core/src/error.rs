//! Error types for Lumen core operations.

use thiserror::Error;

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in Lumen operations.
///
/// Observing and cancelling a reveal never fail; these cover the fallible
/// edges around them (watcher construction, mounting, configuration).
#[derive(Debug, Error)]
pub enum Error {
    /// Visibility ratio outside `0.0..=1.0`.
    #[error("Invalid visibility threshold: {0} (expected a ratio between 0.0 and 1.0)")]
    InvalidThreshold(f64),

    /// The host could not provide a visibility watcher.
    #[error("Visibility observer unavailable: {0}")]
    ObserverUnavailable(String),

    /// The element the application mounts into does not exist.
    #[error("Mount target not found: #{0}")]
    MountTargetMissing(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
