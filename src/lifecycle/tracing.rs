//! # Observability & Tracing
//!
//! This module provides the tracing setup for the showcase binary.
//!
//! ## Overview
//!
//! The [`setup_tracing`] function initializes structured logging with the `tracing` crate.
//! Logs go to stderr so they never interleave with the book listing on stdout.
//!
//! ## Configuration
//!
//! - **Configurable log levels** via the `RUST_LOG` environment variable
//! - **Compact format** without the module prefix (`with_target(false)`)
//!
//! ## What Gets Traced
//!
//! - **Cache**: loading (with registry size), prototype registration, every duplicate
//! - **Misses**: reads before load and unknown identifiers, at `warn`
//! - **Collection**: each insert, at `debug`
//!
//! ## Usage Examples
//!
//! ```bash
//! # Only the book listing
//! cargo run
//!
//! # Cache load events
//! RUST_LOG=info cargo run
//!
//! # Every duplicate and insert
//! RUST_LOG=debug cargo run
//! ```
//!
//! With `RUST_LOG=debug` stderr shows something like:
//!
//! ```text
//! DEBUG load_cache: Register prototype id=1 kind=novel
//! DEBUG load_cache: Register prototype id=2 kind=comic
//!  INFO load_cache: Cache loaded size=2
//! DEBUG get_book{id="1"}: Duplicate id=1 kind=novel
//! DEBUG get_book{id="2"}: Duplicate id=2 kind=comic
//! DEBUG Book added size=1
//! DEBUG Book added size=2
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}
