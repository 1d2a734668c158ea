// src/fetch/mod.rs
// =============================================================================
// The fetch layer: the only part of the pipeline that does I/O.
//
// Submodules:
// - cache: URL-keyed cache with a time-to-live, a size cap and an
//   injectable clock
// - http: reqwest-backed PageSource with the opt-in gate
//
// PageSource is the seam between I/O and extraction. The catalog only ever
// asks "give me the markup for this URL, or nothing", so tests can swap in
// StaticPages and run the whole pipeline offline.
// =============================================================================

mod cache;
mod http;

use std::collections::HashMap;

use async_trait::async_trait;

pub use cache::{Clock, ManualClock, PageCache, SystemClock};
pub use http::HttpFetcher;

/// Something that can produce raw markup for a URL
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Returns the page body, or None on any failure or when fetching is off
    async fn fetch(&self, url: &str) -> Option<String>;

    /// Whether this source can reach the remote site at all
    fn remote_enabled(&self) -> bool {
        true
    }
}

/// In-memory pages keyed by URL
///
/// Useful for tests and for replaying saved pages.
#[derive(Debug, Default, Clone)]
pub struct StaticPages {
    pages: HashMap<String, String>,
}

impl StaticPages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds (or replaces) the body served for `url`
    pub fn with_page(mut self, url: impl Into<String>, body: impl Into<String>) -> Self {
        self.pages.insert(url.into(), body.into());
        self
    }
}

#[async_trait]
impl PageSource for StaticPages {
    async fn fetch(&self, url: &str) -> Option<String> {
        self.pages.get(url).cloned()
    }
}
