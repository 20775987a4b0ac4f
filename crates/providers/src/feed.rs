//! Cycling feed provider.
//!
//! Holds a cached list of feed items and a cursor. The substituting
//! operation (`headline`) formats the current item with inline markup; the
//! triggering operation (`advance`) steps the cursor, which makes it the
//! natural binding for a scrolling region's `onScrollEnd`.
//!
//! Refresh never mutates the published list in place: a fetch stages a
//! complete replacement snapshot, and the cursor-advance at the next cycle
//! boundary adopts it with a single `Arc` swap. The render loop can read at
//! any instant during a concurrent refresh and will only ever see a complete
//! list.

use crate::refresh::RefreshSource;
use crate::ProviderError;
use log::{debug, info, warn};
use marquee_template::ProviderRegistry;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, RwLock};
use std::time::{Duration, Instant};

/// Shown while the item list is still empty.
const LOADING_FALLBACK: &str =
    "[bg:#FFFF00][fg:#000000]Loading feed...[bg:none][fg:none] Please wait for initial sync.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedItem {
    pub publisher: String,
    pub title: String,
}

/// Blocking fetch of a complete item list. Network or disk I/O lives behind
/// this seam and only ever runs on the refresh path.
pub type FeedFetcher = Box<dyn Fn() -> Result<Vec<FeedItem>, ProviderError> + Send + Sync>;

struct Staging {
    pending: Option<Arc<Vec<FeedItem>>>,
    last_refresh: Option<Instant>,
}

pub struct FeedProvider {
    name: &'static str,
    fetcher: FeedFetcher,
    refresh_interval: Duration,
    /// Published snapshot; replaced whole, never edited.
    items: RwLock<Arc<Vec<FeedItem>>>,
    cursor: AtomicUsize,
    staging: Mutex<Staging>,
}

impl std::fmt::Debug for FeedProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedProvider")
            .field("name", &self.name)
            .field("refresh_interval", &self.refresh_interval)
            .finish()
    }
}

impl FeedProvider {
    pub fn new(name: &'static str, refresh_interval: Duration, fetcher: FeedFetcher) -> Self {
        Self {
            name,
            fetcher,
            refresh_interval,
            items: RwLock::new(Arc::new(Vec::new())),
            cursor: AtomicUsize::new(0),
            staging: Mutex::new(Staging {
                pending: None,
                last_refresh: None,
            }),
        }
    }

    fn snapshot(&self) -> Arc<Vec<FeedItem>> {
        match self.items.read() {
            Ok(items) => Arc::clone(&items),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    fn publish(&self, snapshot: Arc<Vec<FeedItem>>) {
        match self.items.write() {
            Ok(mut items) => *items = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
        self.cursor.store(0, Ordering::SeqCst);
    }

    fn take_pending(&self) -> Option<Arc<Vec<FeedItem>>> {
        self.staging
            .lock()
            .map(|mut staging| staging.pending.take())
            .unwrap_or(None)
    }

    /// Format the item currently selected by the cursor.
    pub fn headline(&self) -> String {
        let mut items = self.snapshot();
        if items.is_empty() {
            // Nothing published yet: adopt a staged first fetch immediately
            // instead of waiting for a cycle boundary that may never come.
            if let Some(staged) = self.take_pending() {
                self.publish(Arc::clone(&staged));
                items = staged;
            }
        }
        let Some(item) = items.get(self.cursor.load(Ordering::SeqCst) % items.len().max(1)) else {
            return LOADING_FALLBACK.to_string();
        };
        format!(
            "[bg:#FFFF00][fg:#000000]{}:[fg:#ffffff][bg:#000000] {}",
            item.publisher.to_uppercase(),
            item.title
        )
    }

    /// Step to the next item, wrapping at the end of the list. A staged
    /// snapshot is adopted here, at the cycle boundary, cursor reset to the
    /// top of the fresh list.
    pub fn advance(&self) {
        if let Some(staged) = self.take_pending() {
            debug!("[{}] Adopting staged snapshot ({} items).", self.name, staged.len());
            self.publish(staged);
            return;
        }
        let items = self.snapshot();
        if items.is_empty() {
            return;
        }
        let next = (self.cursor.load(Ordering::SeqCst) + 1) % items.len();
        self.cursor.store(next, Ordering::SeqCst);
    }

    pub fn register(self: Arc<Self>, registry: &mut ProviderRegistry) {
        let name = self.name;
        let reader = Arc::clone(&self);
        registry.register(name, "headline", move |_| reader.headline());
        registry.register(name, "advance", move |_| {
            self.advance();
            String::new()
        });
    }
}

impl RefreshSource for FeedProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    fn refresh(&self) -> Result<(), ProviderError> {
        {
            let Ok(staging) = self.staging.lock() else {
                return Ok(());
            };
            if let Some(last) = staging.last_refresh {
                if last.elapsed() < self.refresh_interval {
                    return Ok(());
                }
            }
        }

        info!("[{}] Refreshing feed.", self.name);
        let fetched = (self.fetcher)();

        let Ok(mut staging) = self.staging.lock() else {
            return Ok(());
        };
        staging.last_refresh = Some(Instant::now());
        match fetched {
            Ok(items) => {
                debug!("[{}] Staged {} items.", self.name, items.len());
                staging.pending = Some(Arc::new(items));
                Ok(())
            }
            Err(e) => {
                warn!("[{}] Refresh failed, keeping last snapshot: {}", self.name, e);
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::AtomicUsize as Counter;

    fn items(names: &[&str]) -> Vec<FeedItem> {
        names
            .iter()
            .map(|n| FeedItem {
                publisher: "wire".to_string(),
                title: n.to_string(),
            })
            .collect()
    }

    fn provider_with(list: Vec<FeedItem>) -> FeedProvider {
        let provider = FeedProvider::new(
            "news",
            Duration::ZERO,
            Box::new(move || Ok(list.clone())),
        );
        provider.refresh().unwrap();
        provider
    }

    #[test]
    fn empty_feed_serves_the_loading_fallback() {
        let provider = FeedProvider::new("news", Duration::ZERO, Box::new(|| Ok(vec![])));
        assert_eq!(provider.headline(), LOADING_FALLBACK);
    }

    #[test]
    fn headline_formats_the_current_item_with_markup() {
        let provider = provider_with(items(&["first", "second"]));
        assert_eq!(
            provider.headline(),
            "[bg:#FFFF00][fg:#000000]WIRE:[fg:#ffffff][bg:#000000] first"
        );
    }

    #[test]
    fn advance_cycles_and_wraps() {
        let provider = provider_with(items(&["a", "b"]));
        assert!(provider.headline().ends_with(" a"));
        provider.advance();
        assert!(provider.headline().ends_with(" b"));
        provider.advance();
        assert!(provider.headline().ends_with(" a"));
    }

    #[test]
    fn staged_snapshot_is_adopted_at_the_cycle_boundary() {
        let round = Arc::new(Counter::new(0));
        let seen = Arc::clone(&round);
        let provider = FeedProvider::new(
            "news",
            Duration::ZERO,
            Box::new(move || {
                if seen.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(vec![
                        FeedItem {
                            publisher: "old".to_string(),
                            title: "old".to_string(),
                        },
                    ])
                } else {
                    Ok(vec![
                        FeedItem {
                            publisher: "new".to_string(),
                            title: "new".to_string(),
                        },
                    ])
                }
            }),
        );
        provider.refresh().unwrap();
        assert!(provider.headline().starts_with("[bg:#FFFF00][fg:#000000]OLD"));

        // Second fetch stages; the published list stays intact until advance.
        provider.refresh().unwrap();
        assert!(provider.headline().starts_with("[bg:#FFFF00][fg:#000000]OLD"));
        provider.advance();
        assert!(provider.headline().starts_with("[bg:#FFFF00][fg:#000000]NEW"));
    }

    #[test]
    fn refresh_is_gated_by_its_interval() {
        let calls = Arc::new(Counter::new(0));
        let seen = Arc::clone(&calls);
        let provider = FeedProvider::new(
            "news",
            Duration::from_secs(600),
            Box::new(move || {
                seen.fetch_add(1, Ordering::SeqCst);
                Ok(vec![])
            }),
        );
        provider.refresh().unwrap();
        provider.refresh().unwrap();
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn failed_refresh_keeps_the_published_snapshot() {
        let round = Arc::new(Counter::new(0));
        let seen = Arc::clone(&round);
        let provider = FeedProvider::new(
            "news",
            Duration::ZERO,
            Box::new(move || {
                if seen.fetch_add(1, Ordering::SeqCst) == 0 {
                    Ok(items(&["good"]))
                } else {
                    Err(ProviderError::Fetch("connection reset".to_string()))
                }
            }),
        );
        provider.refresh().unwrap();
        assert!(provider.headline().ends_with(" good"));
        assert!(provider.refresh().is_err());
        assert!(provider.headline().ends_with(" good"));
    }

    #[test]
    fn registered_operations_drive_the_same_state() {
        let provider = Arc::new(provider_with(items(&["a", "b"])));
        let mut registry = ProviderRegistry::new();
        Arc::clone(&provider).register(&mut registry);
        let first = registry.call("news", "headline", None).unwrap();
        registry.call("news", "advance", None).unwrap();
        let second = registry.call("news", "headline", None).unwrap();
        assert_ne!(first, second);
    }
}
