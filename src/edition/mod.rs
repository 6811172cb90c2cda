//! # Editions
//!
//! Decorators that wrap a [`BookEntity`](crate::entity::BookEntity) and add a line to its
//! `read` output. Each edition owns exactly one inner value and is itself a
//! `BookEntity`, so editions can wrap other editions:
//!
//! ```rust
//! use book_patterns::edition::{Hardcover, SignedEdition};
//! use book_patterns::entity::{read_to_string, BookEntity};
//! use book_patterns::model::Book;
//!
//! let book = SignedEdition::new(Hardcover::new(Book::novel("Emma", "Jane Austen", 474)));
//! assert_eq!(book.pages(), 474);
//! assert_eq!(
//!     read_to_string(&book).unwrap(),
//!     "Reading a novel: Emma by Jane Austen\n\
//!      This is a hardcover edition.\n\
//!      This book is signed by the author.\n"
//! );
//! ```
//!
//! Accessors are pure pass-throughs. Only `read` changes: the inner value reads first,
//! then the edition appends its own line.

pub mod hardcover;
pub mod signed;

pub use hardcover::Hardcover;
pub use signed::SignedEdition;
