// src/catalog.rs
// =============================================================================
// The query functions the presentation layer calls.
//
// Each query fetches the page(s) it needs through a PageSource, then runs
// the synchronous extraction pipeline over the markup. A page that could not
// be fetched is treated as an empty page, so every query always returns a
// valid (possibly empty) value.
//
// Pages:
//   <base>            all items, plus the "All Time (N)" counter
//   <base>/trending   trending items
//   <base>/hot        hot items
//   <base>/o/c/n      detail page of one item
//
// Rust concepts:
// - Generics (Catalog<S: PageSource>): the same queries run over the real
//   HttpFetcher or over StaticPages in tests
// - futures::join!: waits on several futures at once without spawning tasks
// - scraper::Html is not Send, so markup is only parsed after every await
//   in a query has finished
// =============================================================================

use serde_json::{json, Value};
use tracing::debug;
use url::Url;

use crate::aggregate::{
    classify_categories, extract_keywords, owner_distribution, top_by_popularity, CategoryShare,
    KeywordCount, OwnerShare, PopularityEntry,
};
use crate::config::Settings;
use crate::error::{CatalogError, Result};
use crate::extract::{collect_from_markup, extract_description, parse_markup, scan_metrics};
use crate::fetch::{HttpFetcher, PageSource};
use crate::model::{CatalogItem, ItemDetail, MetricsSummary};

pub const DEFAULT_TOP_LIMIT: usize = 8;
pub const DEFAULT_OWNER_LIMIT: usize = 6;
pub const DEFAULT_SEARCH_LIMIT: usize = 10;

/// The listing pages of the marketplace
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    All,
    Trending,
    Hot,
}

impl Listing {
    fn path(self) -> &'static str {
        match self {
            Listing::All => "",
            Listing::Trending => "/trending",
            Listing::Hot => "/hot",
        }
    }
}

/// Query facade over one page source
pub struct Catalog<S> {
    source: S,
    base_url: String,
    host: String,
}

impl Catalog<HttpFetcher> {
    /// A catalog backed by the real, gated HTTP fetcher
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        Ok(Self::new(HttpFetcher::new(settings)?, settings))
    }
}

impl<S: PageSource> Catalog<S> {
    pub fn new(source: S, settings: &Settings) -> Self {
        Self {
            source,
            base_url: settings.base_url.clone(),
            host: settings.host(),
        }
    }

    pub fn listing_url(&self, listing: Listing) -> String {
        format!("{}{}", self.base_url, listing.path())
    }

    pub fn item_url(&self, owner: &str, collection: &str, name: &str) -> String {
        format!("{}/{}/{}/{}", self.base_url, owner, collection, name)
    }

    /// Items of one listing page, ascending by rank
    pub async fn items(&self, listing: Listing) -> Vec<CatalogItem> {
        let url = self.listing_url(listing);

        // Gate closed, network error and 404 all look the same from here
        let Some(markup) = self.source.fetch(&url).await else {
            return Vec::new();
        };

        let items = collect_from_markup(Some(&markup), &self.base_url);
        debug!(url = %url, items = items.len(), "collected listing");
        items
    }

    pub async fn all_items(&self) -> Vec<CatalogItem> {
        self.items(Listing::All).await
    }

    pub async fn trending_items(&self) -> Vec<CatalogItem> {
        self.items(Listing::Trending).await
    }

    pub async fn hot_items(&self) -> Vec<CatalogItem> {
        self.items(Listing::Hot).await
    }

    // Looks up one item's detail page
    //
    // When the page can't be fetched (gate closed, network error, 404) the
    // result is a placeholder: same identity and URL, a static description,
    // and available = false.
    pub async fn item_detail(&self, owner: &str, collection: &str, name: &str) -> ItemDetail {
        let url = self.item_url(owner, collection, name);
        let install_command = format!("npx skills add {}/{}/{}", owner, collection, name);

        let (description, available) = match self.source.fetch(&url).await {
            Some(markup) => (extract_description(&parse_markup(Some(&markup))), true),
            None => (
                format!(
                    "Skill details are only available when connected to {}.",
                    self.host
                ),
                false,
            ),
        };

        ItemDetail {
            name: name.to_string(),
            owner: owner.to_string(),
            collection: collection.to_string(),
            canonical_url: url,
            description,
            install_command,
            available,
        }
    }

    /// Headline numbers from the home, trending and hot pages
    ///
    /// The three pages are fetched concurrently.
    pub async fn metrics_summary(&self) -> MetricsSummary {
        let home_url = self.listing_url(Listing::All);
        let trending_url = self.listing_url(Listing::Trending);
        let hot_url = self.listing_url(Listing::Hot);

        // All three requests are in flight together
        let (home, trending, hot) = futures::join!(
            self.source.fetch(&home_url),
            self.source.fetch(&trending_url),
            self.source.fetch(&hot_url),
        );

        scan_metrics(
            &parse_markup(home.as_deref()),
            &parse_markup(trending.as_deref()),
            &parse_markup(hot.as_deref()),
            &self.base_url,
        )
    }

    pub async fn top_by_popularity(&self, limit: usize) -> Vec<PopularityEntry> {
        top_by_popularity(&self.all_items().await, limit)
    }

    pub async fn owner_distribution(&self, limit: usize) -> Vec<OwnerShare> {
        owner_distribution(&self.all_items().await, limit)
    }

    /// Category breakdown over "owner/name" of every listed item
    pub async fn category_breakdown(&self) -> Vec<CategoryShare> {
        let names: Vec<String> = self
            .all_items()
            .await
            .iter()
            .map(CatalogItem::short_name)
            .collect();
        classify_categories(&names)
    }

    pub async fn keywords(&self, limit: usize) -> Vec<KeywordCount> {
        let names: Vec<String> = self
            .all_items()
            .await
            .iter()
            .map(CatalogItem::short_name)
            .collect();
        extract_keywords(&names, limit)
    }

    // Proxies the marketplace's JSON search endpoint
    //
    // Returns {"skills": []} for an empty query or when remote access is off.
    // Unlike the page queries, a failed request is reported, since an empty
    // result would read as "no matches".
    pub async fn search(&self, query: &str, limit: usize) -> Result<Value> {
        let query = query.trim();
        if query.is_empty() || !self.source.remote_enabled() {
            return Ok(json!({ "skills": [] }));
        }

        let url = Url::parse_with_params(
            &format!("{}/api/search", self.base_url),
            &[("q", query.to_string()), ("limit", limit.to_string())],
        )
        .map_err(|e| CatalogError::InvalidBaseUrl {
            url: self.base_url.clone(),
            message: e.to_string(),
        })?;

        let body = self
            .source
            .fetch(url.as_str())
            .await
            .ok_or(CatalogError::SearchUnavailable)?;

        serde_json::from_str(&body).map_err(|e| CatalogError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::StaticPages;

    fn catalog(pages: StaticPages) -> Catalog<StaticPages> {
        Catalog::new(pages, &Settings::default())
    }

    #[test]
    fn test_urls() {
        let catalog = catalog(StaticPages::new());
        assert_eq!(catalog.listing_url(Listing::All), "https://skills.sh");
        assert_eq!(catalog.listing_url(Listing::Trending), "https://skills.sh/trending");
        assert_eq!(catalog.listing_url(Listing::Hot), "https://skills.sh/hot");
        assert_eq!(catalog.item_url("o", "r", "n"), "https://skills.sh/o/r/n");
    }

    #[tokio::test]
    async fn test_missing_page_is_empty() {
        let catalog = catalog(StaticPages::new());
        assert!(catalog.all_items().await.is_empty());
        assert!(catalog.hot_items().await.is_empty());
        assert!(catalog.owner_distribution(6).await.is_empty());
        assert!(catalog.category_breakdown().await.is_empty());
    }

    #[tokio::test]
    async fn test_detail_placeholder() {
        let catalog = catalog(StaticPages::new());
        let detail = catalog.item_detail("acme", "kit", "lint").await;
        assert!(!detail.available);
        assert_eq!(
            detail.description,
            "Skill details are only available when connected to skills.sh."
        );
        assert_eq!(detail.install_command, "npx skills add acme/kit/lint");
        assert_eq!(detail.canonical_url, "https://skills.sh/acme/kit/lint");
    }

    #[tokio::test]
    async fn test_search_empty_query() {
        let catalog = catalog(StaticPages::new());
        let result = catalog.search("   ", 10).await.unwrap();
        assert_eq!(result, json!({ "skills": [] }));
    }

    #[tokio::test]
    async fn test_search_failure_reported() {
        let catalog = catalog(StaticPages::new());
        let result = catalog.search("react", 10).await;
        assert!(matches!(result, Err(CatalogError::SearchUnavailable)));
    }
}
