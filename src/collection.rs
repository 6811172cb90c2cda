//! # Book Collection
//!
//! An ordered sequence of books walked with standard Rust iterators. Books come out in the
//! order they were added; each call to [`BookCollection::iter`] starts a fresh pass.
//!
//! The default element type is `Box<dyn BookEntity>`, so plain books and editions can
//! share one collection.

use crate::entity::BookEntity;
use tracing::debug;

pub struct BookCollection<B = Box<dyn BookEntity>> {
    books: Vec<B>,
}

impl<B> BookCollection<B> {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    /// Appends a book at the end of the collection.
    pub fn add_book(&mut self, book: B) {
        self.books.push(book);
        debug!(size = self.books.len(), "Book added");
    }

    pub fn iter(&self) -> std::slice::Iter<'_, B> {
        self.books.iter()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl<B> Default for BookCollection<B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, B> IntoIterator for &'a BookCollection<B> {
    type Item = &'a B;
    type IntoIter = std::slice::Iter<'a, B>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.iter()
    }
}

impl<B> IntoIterator for BookCollection<B> {
    type Item = B;
    type IntoIter = std::vec::IntoIter<B>;

    fn into_iter(self) -> Self::IntoIter {
        self.books.into_iter()
    }
}

impl<B> FromIterator<B> for BookCollection<B> {
    fn from_iter<I: IntoIterator<Item = B>>(iter: I) -> Self {
        Self {
            books: iter.into_iter().collect(),
        }
    }
}

impl<B> Extend<B> for BookCollection<B> {
    fn extend<I: IntoIterator<Item = B>>(&mut self, iter: I) {
        self.books.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edition::{Hardcover, SignedEdition};
    use crate::model::Book;

    #[test]
    fn preserves_insertion_order() {
        let mut collection = BookCollection::new();
        for pages in [3, 1, 2, 1] {
            collection.add_book(Book::novel("Same", "Author", pages));
        }
        let pages: Vec<u32> = collection.iter().map(|b| b.pages).collect();
        assert_eq!(pages, vec![3, 1, 2, 1]);
        assert_eq!(collection.len(), 4);
    }

    #[test]
    fn iteration_restarts_on_each_call() {
        let collection: BookCollection<Book> = [
            Book::novel("A", "X", 1),
            Book::comic("B", "Y", 2),
        ]
        .into_iter()
        .collect();

        assert_eq!(collection.iter().count(), 2);
        let titles: Vec<&str> = (&collection).into_iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn holds_mixed_editions() {
        let mut collection: BookCollection = BookCollection::new();
        collection.add_book(Box::new(Hardcover::new(Book::novel("A", "X", 1))));
        collection.add_book(Box::new(SignedEdition::new(Book::comic("B", "Y", 2))));
        collection.add_book(Box::new(Book::novel("C", "Z", 3)));

        let titles: Vec<&str> = collection.iter().map(|b| b.title()).collect();
        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[test]
    fn empty_collection_yields_nothing() {
        let collection: BookCollection<Book> = BookCollection::default();
        assert!(collection.is_empty());
        assert_eq!(collection.iter().next(), None);
    }
}
