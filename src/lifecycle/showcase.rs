use super::ShowcaseError;
use crate::cache::SharedBookCache;
use crate::collection::BookCollection;
use crate::edition::{Hardcover, SignedEdition};
use crate::entity::BookEntity;
use std::io::Write;
use tracing::{info, info_span, Instrument};

/// Runs the fixed showcase: prototype duplication, edition wrapping, then iteration.
///
/// # Steps
/// 1. Load the cache.
/// 2. Duplicate books `"1"` and `"2"`.
/// 3. Wrap the novel in [`Hardcover`] and the comic in [`SignedEdition`].
/// 4. Collect both, in that order.
/// 5. For each book: `read`, then its title, author and pages, then a blank line.
///
/// # Example
///
/// ```rust
/// use book_patterns::cache::SharedBookCache;
/// use book_patterns::lifecycle::showcase;
///
/// #[tokio::main]
/// async fn main() {
///     let mut out = Vec::new();
///     showcase::run(&SharedBookCache::new(), &mut out).await.unwrap();
///     assert!(String::from_utf8(out).unwrap().starts_with("Reading a novel"));
/// }
/// ```
pub async fn run(cache: &SharedBookCache, out: &mut dyn Write) -> Result<(), ShowcaseError> {
    let span = info_span!("load");
    async { cache.load_cache().await }.instrument(span).await;

    let cloned_novel = cache.get_book("1").await?;
    let cloned_comic = cache.get_book("2").await?;

    let hardcover_novel = Hardcover::new(cloned_novel);
    let signed_comic = SignedEdition::new(cloned_comic);

    let mut collection: BookCollection = BookCollection::new();
    collection.add_book(Box::new(hardcover_novel));
    collection.add_book(Box::new(signed_comic));

    info!(books = collection.len(), "Listing collection");
    for book in &collection {
        display(&**book, out)?;
    }
    out.flush()?;
    Ok(())
}

/// Writes one book's listing block.
pub fn display(book: &dyn BookEntity, out: &mut dyn Write) -> Result<(), ShowcaseError> {
    book.read(out)?;
    writeln!(out, "Title: {}", book.title())?;
    writeln!(out, "Author: {}", book.author())?;
    writeln!(out, "Pages: {}", book.pages())?;
    writeln!(out)?;
    Ok(())
}
