//! Network data retrieval for the catalog feed.

mod feed;

/// Shared result type for feed fetching.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

pub use feed::{fetch_feed, load_catalog, record_from_value};
