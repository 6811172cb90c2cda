//! # Lifecycle
//!
//! Wiring for the showcase binary: logging setup and the driver that composes the cache,
//! the editions and the collection.
//!
//! - [`showcase`] - the fixed prototype → decorator → iterator sequence
//! - [`tracing`] - `tracing-subscriber` setup

pub mod showcase;
pub mod tracing;

use crate::cache::CacheError;
use thiserror::Error;

/// Errors that can stop the showcase.
#[derive(Debug, Error)]
pub enum ShowcaseError {
    #[error("Cache error: {0}")]
    Cache(#[from] CacheError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}
