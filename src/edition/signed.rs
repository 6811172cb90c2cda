use crate::entity::BookEntity;
use std::io::{self, Write};

/// Edition signed by the author of the wrapped book.
#[derive(Debug, Clone)]
pub struct SignedEdition<B> {
    inner: B,
}

impl<B: BookEntity> SignedEdition<B> {
    pub fn new(inner: B) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &B {
        &self.inner
    }

    pub fn into_inner(self) -> B {
        self.inner
    }
}

impl<B: BookEntity> BookEntity for SignedEdition<B> {
    fn read(&self, out: &mut dyn Write) -> io::Result<()> {
        self.inner.read(out)?;
        writeln!(out, "This book is signed by the author.")
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
    use crate::edition::Hardcover;
    use crate::entity::read_to_string;
    use crate::model::Book;

    #[test]
    fn accessors_pass_through() {
        let book = Book::comic("Batman: Year One", "Frank Miller", 144);
        let signed = SignedEdition::new(book.clone());
        assert_eq!(signed.title(), "Batman: Year One");
        assert_eq!(signed.author(), "Frank Miller");
        assert_eq!(signed.pages(), 144);
        assert_eq!(signed.inner(), &book);
    }

    #[test]
    fn nested_editions_read_inside_out() {
        let book = Hardcover::new(SignedEdition::new(Book::comic("Bone", "Jeff Smith", 1332)));
        assert_eq!(
            read_to_string(&book).unwrap(),
            "Reading a comic: Bone by Jeff Smith\n\
             This book is signed by the author.\n\
             This is a hardcover edition.\n"
        );
    }
}
