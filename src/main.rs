//! # Book Patterns
//!
//! Entry point for the showcase. See [`book_patterns::lifecycle::showcase::run`] for the
//! sequence it prints.

use book_patterns::cache::SharedBookCache;
use book_patterns::lifecycle::showcase;
use book_patterns::lifecycle::tracing::setup_tracing;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    info!("Starting book showcase");

    let cache = SharedBookCache::new();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = showcase::run(&cache, &mut out).await {
        error!(error = %e, "Showcase failed");
        return Err(e.to_string());
    }

    info!("Showcase completed successfully");
    Ok(())
}
