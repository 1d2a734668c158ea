// src/error.rs
// =============================================================================
// Library error type.
//
// Page operations never return these: fetch failures are logged and turned
// into `None` inside the fetch layer. CatalogError only escapes from
// constructors (bad configuration) and from the search proxy.
// =============================================================================

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("invalid base URL '{url}': {message}")]
    InvalidBaseUrl { url: String, message: String },

    #[error("failed to build HTTP client: {0}")]
    HttpClient(String),

    #[error("request to {url} failed: {message}")]
    Fetch { url: String, message: String },

    #[error("request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("search is unavailable")]
    SearchUnavailable,

    #[error("could not decode response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
