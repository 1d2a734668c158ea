// src/fetch/http.rs
// =============================================================================
// Fetches catalog pages over HTTP.
//
// Three things happen around every request:
// 1. The gate: if remote access is not allowed, return None right away
// 2. The cache: a body fetched less than one TTL ago is returned as-is
// 3. Failure collapsing: transport errors, timeouts and non-2xx responses
//    are logged and become None
//
// Callers never see an error from here. An absent page and an empty page
// lead to the same result: an empty item list.
// =============================================================================

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::cache::{Clock, PageCache, SystemClock};
use super::PageSource;
use crate::config::Settings;
use crate::error::{CatalogError, Result};

/// Gated, cached HTTP page source
#[derive(Debug)]
pub struct HttpFetcher {
    client: Client,
    cache: PageCache,
    remote_allowed: bool,
}

impl HttpFetcher {
    /// Creates a fetcher using the real clock
    pub fn new(settings: &Settings) -> Result<Self> {
        Self::with_clock(settings, Arc::new(SystemClock))
    }

    /// Creates a fetcher whose cache expiry is driven by `clock`
    pub fn with_clock(settings: &Settings, clock: Arc<dyn Clock>) -> Result<Self> {
        let client = Client::builder()
            .timeout(settings.timeout)
            .user_agent(settings.user_agent.clone())
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| CatalogError::HttpClient(e.to_string()))?;

        Ok(Self {
            client,
            cache: PageCache::with_clock(settings.cache_ttl, settings.cache_max_entries, clock),
            remote_allowed: settings.remote_allowed(),
        })
    }

    pub fn cache(&self) -> &PageCache {
        &self.cache
    }

    // One GET, no retries. Non-2xx is an error here and gets collapsed by
    // the caller.
    async fn fetch_page(&self, url: &str) -> Result<String> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CatalogError::Fetch {
                url: url.to_string(),
                message: describe_error(&e),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.text().await.map_err(|e| CatalogError::Fetch {
            url: url.to_string(),
            message: describe_error(&e),
        })
    }
}

#[async_trait]
impl PageSource for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        if !self.remote_allowed {
            debug!(url, "remote fetching disabled, skipping");
            return None;
        }

        if let Some(body) = self.cache.get(url) {
            debug!(url, bytes = body.len(), "cache hit");
            return Some(body);
        }

        match self.fetch_page(url).await {
            Ok(body) => {
                debug!(url, bytes = body.len(), "fetched page");
                self.cache.insert(url, body.clone());
                Some(body)
            }
            Err(e) => {
                warn!(url, error = %e, "fetch failed, treating page as empty");
                None
            }
        }
    }

    fn remote_enabled(&self) -> bool {
        self.remote_allowed
    }
}

// Short labels for the common reqwest failure kinds
fn describe_error(error: &reqwest::Error) -> String {
    if error.is_timeout() {
        "request timed out".to_string()
    } else if error.is_redirect() {
        "too many redirects".to_string()
    } else if error.is_connect() {
        format!("connection failed: {}", error)
    } else {
        error.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_gate_closed_returns_none() {
        let fetcher = HttpFetcher::new(&Settings::default()).unwrap();
        assert!(!fetcher.remote_enabled());
        // Would fail loudly if it tried the network on a bogus host
        assert_eq!(fetcher.fetch("https://skills.invalid/trending").await, None);
        assert!(fetcher.cache().is_empty());
    }

    #[tokio::test]
    async fn test_cached_body_served_without_request() {
        let settings = Settings {
            allow_remote: true,
            ..Settings::default()
        };
        let fetcher = HttpFetcher::new(&settings).unwrap();
        fetcher
            .cache()
            .insert("https://skills.invalid/hot", "<main>cached</main>".to_string());

        let body = fetcher.fetch("https://skills.invalid/hot").await;
        assert_eq!(body.as_deref(), Some("<main>cached</main>"));
    }
}
