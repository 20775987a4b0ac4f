//! Built-in text providers and the refresh-source seam.
//!
//! Providers own their content, caching, and refresh cadence. The render
//! path only ever performs non-blocking reads of previously fetched values;
//! anything slow (network, disk) happens in the refresh loop, which stages a
//! complete snapshot that is adopted atomically.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ProviderError {
    #[error("Fetch failed: {0}")]
    Fetch(String),
}

pub mod clock;
pub mod feed;
mod refresh;

pub use clock::ClockProvider;
pub use feed::{FeedFetcher, FeedItem, FeedProvider};
pub use refresh::RefreshSource;
