// src/config.rs
// =============================================================================
// Runtime settings for the catalog client.
//
// Where the values come from:
// - Defaults (public skills.sh origin, 1 hour cache of up to 256 pages,
//   10 second timeout)
// - Environment variables (SKILLS_ALLOW_REMOTE, SKILLS_ENV, ...)
// - CLI flags, applied on top in main.rs
//
// The gate: outbound requests only happen when SKILLS_ALLOW_REMOTE=1 or the
// process runs in production mode (SKILLS_ENV=production). Local runs and
// tests therefore get deterministic empty results without any network.
// =============================================================================

use std::time::Duration;
use url::Url;

use crate::error::{CatalogError, Result};

/// The public marketplace origin
pub const DEFAULT_BASE_URL: &str = "https://skills.sh";

/// How long a fetched page stays cached
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(3600);

/// How many pages the cache holds before evicting the least recently used
pub const DEFAULT_CACHE_MAX_ENTRIES: usize = 256;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_ALLOW_REMOTE: &str = "SKILLS_ALLOW_REMOTE";
pub const ENV_MODE: &str = "SKILLS_ENV";
pub const ENV_BASE_URL: &str = "SKILLS_BASE_URL";
pub const ENV_CACHE_TTL: &str = "SKILLS_CACHE_TTL_SECS";
pub const ENV_CACHE_MAX_ENTRIES: &str = "SKILLS_CACHE_MAX_ENTRIES";
pub const ENV_TIMEOUT: &str = "SKILLS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Origin without a trailing slash, e.g. "https://skills.sh"
    pub base_url: String,
    /// Explicit opt-in to outbound fetching
    pub allow_remote: bool,
    /// Running as a production deployment (also opens the gate)
    pub production: bool,
    pub cache_ttl: Duration,
    /// Upper bound on cached pages (detail and search URLs are open-ended)
    pub cache_max_entries: usize,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            allow_remote: false,
            production: false,
            cache_ttl: DEFAULT_CACHE_TTL,
            cache_max_entries: DEFAULT_CACHE_MAX_ENTRIES,
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("skills-catalog/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds settings from any key/value lookup
    ///
    /// Unparseable durations and sizes (and a zero cache size) are ignored
    /// and keep their default. An invalid
    /// base URL is an error since every other URL is derived from it.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();

        settings.allow_remote = lookup(ENV_ALLOW_REMOTE).as_deref() == Some("1");
        settings.production = lookup(ENV_MODE).as_deref() == Some("production");

        if let Some(base) = lookup(ENV_BASE_URL) {
            settings = settings.with_base_url(&base)?;
        }
        if let Some(secs) = lookup(ENV_CACHE_TTL).and_then(|v| v.trim().parse::<u64>().ok()) {
            settings.cache_ttl = Duration::from_secs(secs);
        }
        if let Some(max) = lookup(ENV_CACHE_MAX_ENTRIES)
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|max| *max > 0)
        {
            settings.cache_max_entries = max;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT).and_then(|v| v.trim().parse::<u64>().ok()) {
            settings.timeout = Duration::from_secs(secs);
        }

        Ok(settings)
    }

    /// Replaces the base origin after validating it
    pub fn with_base_url(mut self, base: &str) -> Result<Self> {
        self.base_url = validate_base_url(base)?;
        Ok(self)
    }

    /// Whether outbound fetches are permitted
    pub fn remote_allowed(&self) -> bool {
        self.allow_remote || self.production
    }

    /// Host part of the base origin, for user-facing messages
    pub fn host(&self) -> String {
        Url::parse(&self.base_url)
            .ok()
            .and_then(|u| u.host_str().map(|h| h.to_string()))
            .unwrap_or_else(|| self.base_url.clone())
    }
}

// Accepts "https://host" or "https://host/" and returns the form without the
// trailing slash; rejects anything that is not an http(s) origin.
fn validate_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');

    let parsed = Url::parse(trimmed).map_err(|e| CatalogError::InvalidBaseUrl {
        url: raw.to_string(),
        message: e.to_string(),
    })?;

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(CatalogError::InvalidBaseUrl {
            url: raw.to_string(),
            message: format!("unsupported scheme '{}'", parsed.scheme()),
        });
    }
    if parsed.host_str().is_none() {
        return Err(CatalogError::InvalidBaseUrl {
            url: raw.to_string(),
            message: "missing host".to_string(),
        });
    }

    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_keep_gate_closed() {
        let settings = Settings::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.cache_ttl, Duration::from_secs(3600));
        assert!(!settings.remote_allowed());
    }

    #[test]
    fn test_gate_opens_with_flag_or_production() {
        let flagged = Settings::from_lookup(lookup_from(&[("SKILLS_ALLOW_REMOTE", "1")])).unwrap();
        assert!(flagged.remote_allowed());

        let prod = Settings::from_lookup(lookup_from(&[("SKILLS_ENV", "production")])).unwrap();
        assert!(prod.remote_allowed());

        let other = Settings::from_lookup(lookup_from(&[("SKILLS_ALLOW_REMOTE", "true")])).unwrap();
        assert!(!other.remote_allowed());
    }

    #[test]
    fn test_base_url_trailing_slash_removed() {
        let settings =
            Settings::from_lookup(lookup_from(&[("SKILLS_BASE_URL", "http://127.0.0.1:8080/")]))
                .unwrap();
        assert_eq!(settings.base_url, "http://127.0.0.1:8080");
        assert_eq!(settings.host(), "127.0.0.1");
    }

    #[test]
    fn test_cache_size_from_env() {
        let settings =
            Settings::from_lookup(lookup_from(&[("SKILLS_CACHE_MAX_ENTRIES", " 32 ")])).unwrap();
        assert_eq!(settings.cache_max_entries, 32);
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        assert!(Settings::default().with_base_url("not a url").is_err());
        assert!(Settings::default().with_base_url("ftp://skills.sh").is_err());
    }

    #[test]
    fn test_bad_durations_ignored() {
        let settings = Settings::from_lookup(lookup_from(&[
            ("SKILLS_CACHE_TTL_SECS", "soon"),
            ("SKILLS_TIMEOUT_SECS", "3"),
            ("SKILLS_CACHE_MAX_ENTRIES", "0"),
        ]))
        .unwrap();
        assert_eq!(settings.cache_ttl, DEFAULT_CACHE_TTL);
        assert_eq!(settings.cache_max_entries, DEFAULT_CACHE_MAX_ENTRIES);
        assert_eq!(settings.timeout, Duration::from_secs(3));
    }
}
