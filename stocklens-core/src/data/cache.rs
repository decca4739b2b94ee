//! Caller-owned loader cache.
//!
//! Wraps any [`PriceLoader`] and memoizes successful loads by symbol.
//! The cache is an optimization only: analysis output is identical whether a
//! series came from here or from the inner loader.
//!
//! Lifetime policy:
//! - bounded by `max_entries`; inserting past the bound evicts the oldest entry
//! - `invalidate(symbol)` drops one entry, `clear()` drops all
//! - errors are never cached

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::loader::{LoadError, PriceLoader};
use crate::domain::PriceSeries;

pub const DEFAULT_MAX_ENTRIES: usize = 64;

/// Hit/miss counters and current size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Default)]
struct Entries {
    by_symbol: HashMap<String, Arc<PriceSeries>>,
    order: VecDeque<String>,
}

pub struct CachedLoader<L> {
    inner: L,
    max_entries: usize,
    entries: Mutex<Entries>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<L: PriceLoader> CachedLoader<L> {
    pub fn new(inner: L) -> Self {
        Self::with_capacity(inner, DEFAULT_MAX_ENTRIES)
    }

    /// `max_entries` of 0 disables caching (every load goes to the inner loader).
    pub fn with_capacity(inner: L, max_entries: usize) -> Self {
        Self {
            inner,
            max_entries,
            entries: Mutex::new(Entries::default()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }

    /// Drop the cached series for `symbol`. Returns whether it was cached.
    pub fn invalidate(&self, symbol: &str) -> bool {
        let mut entries = self.entries.lock();
        entries.order.retain(|s| s != symbol);
        entries.by_symbol.remove(symbol).is_some()
    }

    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        entries.by_symbol.clear();
        entries.order.clear();
    }

    pub fn contains(&self, symbol: &str) -> bool {
        self.entries.lock().by_symbol.contains_key(symbol)
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.entries.lock().by_symbol.len(),
        }
    }

    fn insert(&self, symbol: &str, series: Arc<PriceSeries>) {
        if self.max_entries == 0 {
            return;
        }
        let mut entries = self.entries.lock();
        if entries
            .by_symbol
            .insert(symbol.to_string(), series)
            .is_none()
        {
            entries.order.push_back(symbol.to_string());
        }
        while entries.order.len() > self.max_entries {
            if let Some(oldest) = entries.order.pop_front() {
                debug!(symbol = %oldest, "evicting cached series");
                entries.by_symbol.remove(&oldest);
            }
        }
    }
}

impl<L: PriceLoader> PriceLoader for CachedLoader<L> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    fn load(&self, symbol: &str) -> Result<PriceSeries, LoadError> {
        let cached = self.entries.lock().by_symbol.get(symbol).cloned();
        if let Some(series) = cached {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(symbol, "price cache hit");
            return Ok(series.as_ref().clone());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(symbol, loader = self.inner.name(), "price cache miss");
        let series = self.inner.load(symbol)?;
        self.insert(symbol, Arc::new(series.clone()));
        Ok(series)
    }
}
