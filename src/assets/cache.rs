//! Short-lived read-through cache for catalog image lists.
//!
//! Users editing a configuration flip between style options repeatedly, which
//! would otherwise re-fetch the same product lists over and over. Entries are
//! keyed by `(product_id, sash prefix)` and expire after a few minutes; there
//! is no background eviction, expiry is checked on read.

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use crate::{catalog::ImageAsset, config::SashPrefix};

const DEFAULT_TTL: Duration = Duration::from_secs(5 * 60);

#[derive(Clone, Debug)]
struct Entry {
    images: Vec<ImageAsset>,
    stored_at: Instant,
}

/// Per-instance TTL cache over product image lists.
#[derive(Debug)]
pub struct ProductImageCache {
    ttl: Duration,
    entries: HashMap<(u64, Option<SashPrefix>), Entry>,
}

impl Default for ProductImageCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductImageCache {
    /// Cache with the default five-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Cache with an explicit TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Fresh cached list for `(product_id, prefix)`, if present.
    pub fn get(&self, product_id: u64, prefix: Option<SashPrefix>) -> Option<&[ImageAsset]> {
        self.entries
            .get(&(product_id, prefix))
            .filter(|e| e.stored_at.elapsed() < self.ttl)
            .map(|e| e.images.as_slice())
    }

    /// Store a fetched list, replacing any prior entry for the key.
    pub fn put(&mut self, product_id: u64, prefix: Option<SashPrefix>, images: Vec<ImageAsset>) {
        self.entries.insert(
            (product_id, prefix),
            Entry {
                images,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every entry, e.g. when the catalog is known to have changed.
    pub fn invalidate_all(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/cache.rs"]
mod tests;
