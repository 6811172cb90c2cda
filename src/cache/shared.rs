//! # Shared Book Cache
//!
//! [`SharedBookCache`] is a cloneable handle to one [`BookCache`] guarded by a Tokio
//! `RwLock`. Loading takes the write lock, so it completes before any reader gets in.
//! Lookups take the read lock and run concurrently with each other, which is safe because
//! `get_book` only reads the registry and duplicates a prototype.

use super::{BookCache, CacheError};
use crate::model::Book;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

#[derive(Debug, Clone, Default)]
pub struct SharedBookCache {
    inner: Arc<RwLock<BookCache>>,
}

impl SharedBookCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: BookCache) -> Self {
        Self {
            inner: Arc::new(RwLock::new(cache)),
        }
    }

    #[instrument(skip(self))]
    pub async fn load_cache(&self) {
        self.inner.write().await.load_cache();
    }

    #[instrument(skip(self, book))]
    pub async fn register(&self, id: String, book: Book) {
        self.inner.write().await.register(id, book);
    }

    /// Returns a duplicate of the prototype under `id`. Same contract as
    /// [`BookCache::get_book`].
    #[instrument(skip(self))]
    pub async fn get_book(&self, id: &str) -> Result<Book, CacheError> {
        self.inner.read().await.get_book(id)
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }
}
