use crate::entity::BookEntity;
use std::io::{self, Write};

/// Hardcover edition of the wrapped book.
#[derive(Debug, Clone)]
pub struct Hardcover<B> {
    inner: B,
}

impl<B: BookEntity> Hardcover<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    /// Removes the edition and returns the wrapped book.
    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: BookEntity> BookEntity for Hardcover<B> {
    fn read(&self, out: &mut dyn Write) -> io::Result<()> {
        self.inner.read(out)?;
        writeln!(out, "This is a hardcover edition.")
    }

    fn title(&self) -> &str {
        self.inner.title()
    }

    fn author(&self) -> &str {
        self.inner.author()
    }

    fn pages(&self) -> u32 {
        self.inner.pages()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::read_to_string;
    use crate::model::Book;

    #[test]
    fn accessors_pass_through() {
        let book = Book::novel("Beloved", "Toni Morrison", 324);
        let hardcover = Hardcover::new(book.clone());
        assert_eq!(hardcover.title(), book.title());
        assert_eq!(hardcover.author(), book.author());
        assert_eq!(hardcover.pages(), book.pages());
    }

    #[test]
    fn appends_after_inner_read() {
        let hardcover = Hardcover::new(Book::novel("Beloved", "Toni Morrison", 324));
        assert_eq!(
            read_to_string(&hardcover).unwrap(),
            "Reading a novel: Beloved by Toni Morrison\nThis is a hardcover edition.\n"
        );
    }

    #[test]
    fn into_inner_returns_wrapped_book() {
        let book = Book::comic("Saga", "Brian K. Vaughan", 160);
        assert_eq!(Hardcover::new(book.clone()).into_inner(), book);
    }
}
