//! Error types for the book cache.

use thiserror::Error;

/// Errors that can occur when reading from a [`BookCache`](super::BookCache).
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CacheError {
    /// No prototype is registered under the requested identifier.
    #[error("Book not found: {0}")]
    NotFound(String),

    /// The cache was read before `load_cache` ran and nothing was registered.
    #[error("Book cache has not been loaded")]
    NotLoaded,
}
