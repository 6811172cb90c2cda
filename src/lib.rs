//! # Book Patterns
//!
//! > **Prototype, Decorator and Iterator on a small book domain.**
//!
//! This crate shows three classic design patterns the way they come out in Rust:
//! values instead of class hierarchies, traits instead of base classes, and standard
//! iterators instead of hand-written cursor objects.
//!
//! ## 🚀 Core Concepts
//!
//! ### Prototype: duplicates, not shared references
//! The [`BookCache`](cache::BookCache) stores one canonical [`Book`](model::Book) per
//! identifier. [`get_book`](cache::BookCache::get_book) hands out a duplicate the caller
//! owns. Since `Book` is a plain value, duplication is a `Clone` and cannot fail.
//!
//! ### Decorator: composition over inheritance
//! [`Hardcover`](edition::Hardcover) and [`SignedEdition`](edition::SignedEdition) own the
//! book they wrap and implement [`BookEntity`](entity::BookEntity) by forwarding. Only
//! `read` changes: the inner book reads first, then the edition adds its line.
//!
//! ### Iterator: the standard library way
//! [`BookCollection`](collection::BookCollection) keeps insertion order and exposes
//! `iter()` plus `IntoIterator`, so `for book in &collection` just works.
//!
//! ## 👩‍💻 Architecture Notes
//!
//! ### 1. Type-Safe Error Handling
//! A missing identifier is a [`CacheError::NotFound`](cache::CacheError::NotFound), never a
//! default book and never a panic. Reading before loading is
//! [`CacheError::NotLoaded`](cache::CacheError::NotLoaded).
//!
//! ### 2. Shared Access
//! [`SharedBookCache`](cache::SharedBookCache) puts the registry behind a Tokio `RwLock`:
//! one writer loads, then any number of readers duplicate concurrently.
//!
//! ### 3. Observability
//! `tracing` events cover cache loads, duplicates, misses and inserts.
//! See the [`lifecycle::tracing`] module for details.
//!
//! ## 🗺️ Module Tour
//!
//! - [`model`] - the [`Book`](model::Book) value and its [`BookKind`](model::BookKind) tag
//! - [`entity`] - the [`BookEntity`](entity::BookEntity) capability trait
//! - [`cache`] - prototype registry
//! - [`edition`] - decorators
//! - [`collection`] - ordered collection
//! - [`lifecycle`] - the showcase driver and tracing setup
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! cargo run
//! RUST_LOG=debug cargo run
//! cargo test
//! ```

pub mod cache;
pub mod collection;
pub mod edition;
pub mod entity;
pub mod lifecycle;
pub mod model;
