//! # BookEntity Trait
//!
//! The `BookEntity` trait is the capability set shared by every readable book: the plain
//! [`Book`] value, each edition wrapper in [`crate::edition`], and boxed trait objects.
//! Code that only needs to read a book or inspect its fields takes `impl BookEntity`
//! (or `&dyn BookEntity`) and never cares which concrete type it got.
//!
//! # Architecture Note
//! Adding a new kind of book or a new edition means implementing this trait. The
//! [`BookCollection`](crate::collection::BookCollection) and the showcase driver stay
//! unchanged.

use crate::model::Book;
use std::io::{self, Write};

/// Capability set of anything that behaves like a book.
pub trait BookEntity {
    /// Performs the read side effect, writing its lines to `out`.
    fn read(&self, out: &mut dyn Write) -> io::Result<()>;

    fn title(&self) -> &str;

    fn author(&self) -> &str;

    fn pages(&self) -> u32;
}

impl BookEntity for Book {
    fn read(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Reading a {}: {} by {}", self.kind, self.title, self.author)
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn author(&self) -> &str {
        &self.author
    }

    fn pages(&self) -> u32 {
        self.pages
    }
}

impl<T: BookEntity + ?Sized> BookEntity for Box<T> {
    fn read(&self, out: &mut dyn Write) -> io::Result<()> {
        (**self).read(out)
    }

    fn title(&self) -> &str {
        (**self).title()
    }

    fn author(&self) -> &str {
        (**self).author()
    }

    fn pages(&self) -> u32 {
        (**self).pages()
    }
}

/// Runs `read` against an in-memory buffer and returns the produced text.
///
/// Handy for callers that want the read output as a value (tests, logging).
pub fn read_to_string<B: BookEntity + ?Sized>(book: &B) -> io::Result<String> {
    let mut buf = Vec::new();
    book.read(&mut buf)?;
    String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Book;

    #[test]
    fn novel_read_line() {
        let book = Book::novel("To Kill a Mockingbird", "Harper Lee", 281);
        assert_eq!(
            read_to_string(&book).unwrap(),
            "Reading a novel: To Kill a Mockingbird by Harper Lee\n"
        );
    }

    #[test]
    fn comic_read_line() {
        let book = Book::comic("Batman: Year One", "Frank Miller", 144);
        assert_eq!(
            read_to_string(&book).unwrap(),
            "Reading a comic: Batman: Year One by Frank Miller\n"
        );
    }

    #[test]
    fn boxed_entity_forwards() {
        let boxed: Box<dyn BookEntity> = Box::new(Book::comic("Maus", "Art Spiegelman", 296));
        assert_eq!(boxed.title(), "Maus");
        assert_eq!(boxed.author(), "Art Spiegelman");
        assert_eq!(boxed.pages(), 296);
        assert_eq!(
            read_to_string(&boxed).unwrap(),
            "Reading a comic: Maus by Art Spiegelman\n"
        );
    }
}
