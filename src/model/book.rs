//! The book value held by the cache and handed out to callers.
//!
//! # Prototype Pattern
//! A `Book` is a plain value. The [`BookCache`](crate::cache::BookCache) keeps one
//! canonical copy per identifier and hands out [`Book::duplicate`]s, so a caller can
//! mutate its copy freely without touching the prototype.
//!
//! See [`impl BookEntity for Book`](crate::entity::BookEntity) for the read behavior of
//! each [`BookKind`].

use serde::{Deserialize, Serialize};

use std::fmt::Display;

/// The variant tag of a [`Book`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookKind {
    Novel,
    Comic,
}

impl BookKind {
    /// Lowercase noun used in the `read` line (e.g. "Reading a novel: ...").
    pub fn noun(self) -> &'static str {
        match self {
            BookKind::Novel => "novel",
            BookKind::Comic => "comic",
        }
    }
}

impl Display for BookKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.noun())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub kind: BookKind,
    pub title: String,
    pub author: String,
    pub pages: u32,
}

impl Book {
    /// Creates a placeholder book of the given kind.
    ///
    /// # Notes
    /// The fields hold "Unknown ..." values and are meant to be assigned afterwards,
    /// which is how [`BookCache::load_cache`](crate::cache::BookCache::load_cache) fills
    /// its prototypes.
    pub fn new(kind: BookKind) -> Self {
        let title = match kind {
            BookKind::Novel => "Unknown Novel",
            BookKind::Comic => "Unknown Comic",
        };
        Self {
            kind,
            title: title.to_string(),
            author: "Unknown Author".to_string(),
            pages: 0,
        }
    }

    /// Creates a populated novel.
    pub fn novel(title: impl Into<String>, author: impl Into<String>, pages: u32) -> Self {
        Self {
            kind: BookKind::Novel,
            title: title.into(),
            author: author.into(),
            pages,
        }
    }

    /// Creates a populated comic.
    pub fn comic(title: impl Into<String>, author: impl Into<String>, pages: u32) -> Self {
        Self {
            kind: BookKind::Comic,
            title: title.into(),
            author: author.into(),
            pages,
        }
    }

    /// Returns an independent copy of this book.
    ///
    /// Copying a value cannot fail, so there is no error path here.
    pub fn duplicate(&self) -> Self {
        self.clone()
    }

    /// Applies a partial update in place.
    ///
    /// # Fields Updated
    /// - `title`, `author`, `pages`: only when set in the update
    pub fn apply(&mut self, update: BookUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(author) = update.author {
            self.author = author;
        }
        if let Some(pages) = update.pages {
            self.pages = pages;
        }
    }
}

// DTOs for Book updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub pages: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_values_follow_kind() {
        let novel = Book::new(BookKind::Novel);
        assert_eq!(novel.title, "Unknown Novel");
        assert_eq!(novel.author, "Unknown Author");
        assert_eq!(novel.pages, 0);

        let comic = Book::new(BookKind::Comic);
        assert_eq!(comic.title, "Unknown Comic");
        assert_eq!(comic.kind, BookKind::Comic);
    }

    #[test]
    fn duplicate_is_detached_from_source() {
        let original = Book::novel("Dune", "Frank Herbert", 412);
        let mut copy = original.duplicate();
        copy.title.push_str(" Messiah");
        copy.pages = 256;

        assert_eq!(original.title, "Dune");
        assert_eq!(original.pages, 412);
        assert_eq!(copy.title, "Dune Messiah");
    }

    #[test]
    fn apply_only_touches_set_fields() {
        let mut book = Book::comic("Watchmen", "Alan Moore", 416);
        book.apply(BookUpdate {
            pages: Some(448),
            ..Default::default()
        });
        assert_eq!(book.title, "Watchmen");
        assert_eq!(book.author, "Alan Moore");
        assert_eq!(book.pages, 448);
    }
}
