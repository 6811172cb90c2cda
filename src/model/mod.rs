//! Pure data structures for the book domain.

pub mod book;

pub use book::*;
