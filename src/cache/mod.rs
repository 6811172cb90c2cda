//! # Book Cache
//!
//! This module implements the prototype registry for books.
//!
//! ## Overview
//!
//! [`BookCache`] maps string identifiers to canonical [`Book`] values. Reading from the cache
//! never hands out the stored value itself: [`BookCache::get_book`] returns a duplicate that
//! the caller owns outright. Mutating it cannot affect the prototype or any other duplicate.
//!
//! ## Structure
//!
//! - [`error`] - [`CacheError`] type for lookups that cannot be served
//! - [`shared`] - [`SharedBookCache`], a lock-guarded handle for multiple callers
//!
//! ## Usage
//!
//! ```rust
//! use book_patterns::cache::{BookCache, CacheError};
//! use book_patterns::entity::BookEntity;
//!
//! let mut cache = BookCache::new();
//! cache.load_cache();
//!
//! let mut novel = cache.get_book("1").unwrap();
//! novel.title = "Go Set a Watchman".to_string();
//!
//! // The prototype is untouched
//! assert_eq!(cache.get_book("1").unwrap().title(), "To Kill a Mockingbird");
//! assert_eq!(cache.get_book("42"), Err(CacheError::NotFound("42".to_string())));
//! ```

pub mod error;
pub mod shared;

pub use error::*;
pub use shared::SharedBookCache;

use crate::model::{Book, BookKind};
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Registry of prototype books keyed by identifier.
#[derive(Debug, Clone, Default)]
pub struct BookCache {
    store: HashMap<String, Book>,
    loaded: bool,
}

impl BookCache {
    /// Creates an empty, unloaded cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Populates the cache with the stock prototypes.
    ///
    /// # Prototypes
    /// - `"1"`: novel "To Kill a Mockingbird" by Harper Lee, 281 pages
    /// - `"2"`: comic "Batman: Year One" by Frank Miller, 144 pages
    ///
    /// Calling this again overwrites the same two entries.
    pub fn load_cache(&mut self) {
        let mut novel = Book::new(BookKind::Novel);
        novel.title = "To Kill a Mockingbird".to_string();
        novel.author = "Harper Lee".to_string();
        novel.pages = 281;
        self.register("1", novel);

        let mut comic = Book::new(BookKind::Comic);
        comic.title = "Batman: Year One".to_string();
        comic.author = "Frank Miller".to_string();
        comic.pages = 144;
        self.register("2", comic);

        self.loaded = true;
        info!(size = self.store.len(), "Cache loaded");
    }

    /// Registers (or replaces) the prototype stored under `id`.
    pub fn register(&mut self, id: impl Into<String>, book: Book) {
        let id = id.into();
        debug!(%id, kind = %book.kind, "Register prototype");
        self.store.insert(id, book);
    }

    /// Returns an independent duplicate of the prototype registered under `id`.
    ///
    /// # Errors
    /// - [`CacheError::NotLoaded`] if nothing was ever loaded or registered
    /// - [`CacheError::NotFound`] if `id` has no prototype
    pub fn get_book(&self, id: &str) -> Result<Book, CacheError> {
        if !self.loaded && self.store.is_empty() {
            warn!(%id, "Cache read before load");
            return Err(CacheError::NotLoaded);
        }
        match self.store.get(id) {
            Some(prototype) => {
                debug!(%id, kind = %prototype.kind, "Duplicate");
                Ok(prototype.duplicate())
            }
            None => {
                warn!(%id, "Book not found");
                Err(CacheError::NotFound(id.to_string()))
            }
        }
    }

    /// Borrows the stored prototype without duplicating it.
    pub fn prototype(&self, id: &str) -> Option<&Book> {
        self.store.get(id)
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Registered identifiers in sorted order.
    pub fn ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.store.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}
