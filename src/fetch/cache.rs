// src/fetch/cache.rs
// =============================================================================
// A small time-bounded, size-bounded cache for fetched pages.
//
// What it guarantees:
// - A body is served for at most one TTL after it was stored
// - Expired entries are swept out on every insert, so pages that are never
//   read again do not linger
// - The map never holds more than `max_entries` pages; when it is full the
//   least recently used page is evicted
//
// Detail pages and search URLs are keyed by whatever the user asked for, so
// without the size bound a long-lived catalog would keep every body forever.
//
// Concurrency: the map sits behind a Mutex. Concurrent callers may both miss
// and both fetch the same page; the later insert simply replaces the earlier
// one. Serving a body up to one window old is expected.
//
// Rust concepts:
// - Trait objects (Arc<dyn Clock>): tests swap in a clock they move by hand
// - Interior mutability (Mutex): get/insert take &self, so the cache can be
//   shared by a fetcher that is itself shared across tasks
// =============================================================================

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

/// Source of "now" for expiry checks
pub trait Clock: Send + Sync {
    fn now(&self) -> Instant;
}

/// The real monotonic clock
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to
///
/// Clones share the same offset, so a test can keep one handle and give
/// another to the cache.
#[derive(Debug, Clone)]
pub struct ManualClock {
    start: Instant,
    offset: Arc<Mutex<Duration>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            offset: Arc::new(Mutex::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        let mut offset = self.offset.lock().unwrap_or_else(|e| e.into_inner());
        *offset += by;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        let offset = *self.offset.lock().unwrap_or_else(|e| e.into_inner());
        self.start + offset
    }
}

#[derive(Debug, Clone)]
struct CacheEntry {
    body: String,
    /// When the body was fetched (drives expiry)
    stored_at: Instant,
    /// When the body was last served or stored (drives eviction)
    last_used: Instant,
}

/// URL -> body cache with a fixed time-to-live and a size cap
pub struct PageCache {
    ttl: Duration,
    max_entries: usize,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl PageCache {
    pub fn new(ttl: Duration, max_entries: usize) -> Self {
        Self::with_clock(ttl, max_entries, Arc::new(SystemClock))
    }

    // Creates a cache whose notion of time comes from `clock`
    //
    // Parameters:
    //   ttl: how long a stored body stays servable
    //   max_entries: size cap; 0 is treated as 1 so an insert always sticks
    //   clock: SystemClock in production, ManualClock in tests
    pub fn with_clock(ttl: Duration, max_entries: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            ttl,
            max_entries: max_entries.max(1),
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    // Returns the cached body if it was stored less than `ttl` ago
    //
    // A hit refreshes the entry's "last used" time, which protects it from
    // eviction. An expired entry is dropped on the way out.
    pub fn get(&self, url: &str) -> Option<String> {
        let now = self.clock.now();
        let mut entries = self.lock();

        let entry = entries.get_mut(url)?;
        if self.is_expired(entry, now) {
            entries.remove(url);
            return None;
        }

        entry.last_used = now;
        Some(entry.body.clone())
    }

    // Stores a freshly fetched body
    //
    // Steps:
    // 1. Sweep every expired entry (not just this URL's)
    // 2. If the map is still full and this URL is new, evict the least
    //    recently used entry
    // 3. Insert (or replace) the entry for this URL
    pub fn insert(&self, url: &str, body: String) {
        let now = self.clock.now();
        let mut entries = self.lock();

        // 1. Sweep
        entries.retain(|_, entry| !self.is_expired(entry, now));

        // 2. Make room; replacing an existing key never grows the map
        if !entries.contains_key(url) && entries.len() >= self.max_entries {
            let oldest = entries
                .iter()
                .min_by_key(|(_, entry)| entry.last_used)
                .map(|(key, _)| key.clone());
            if let Some(key) = oldest {
                entries.remove(&key);
            }
        }

        // 3. Store
        entries.insert(
            url.to_string(),
            CacheEntry {
                body,
                stored_at: now,
                last_used: now,
            },
        );
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // An entry is stale once its age reaches the TTL
    fn is_expired(&self, entry: &CacheEntry, now: Instant) -> bool {
        now.saturating_duration_since(entry.stored_at) >= self.ttl
    }

    // A panic while holding the lock cannot leave an entry half-written
    // (every mutation is a single HashMap call), so a poisoned map is still
    // usable.
    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for PageCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PageCache")
            .field("ttl", &self.ttl)
            .field("max_entries", &self.max_entries)
            .field("entries", &self.len())
            .finish()
    }
}
