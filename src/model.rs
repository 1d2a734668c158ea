// src/model.rs
// =============================================================================
// The data types produced by the extraction pipeline.
//
// CatalogItem is the central entity: one row of a catalog page, identified
// by owner/collection/name. Everything else here is either a piece of a
// CatalogItem (identity, row fields) or a page-level summary.
//
// All of these derive Serialize so the CLI can print them with --json.
// =============================================================================

use serde::{Deserialize, Serialize};

/// The three-part identity of a catalog item: `owner/collection/name`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemIdentity {
    pub owner: String,
    pub collection: String,
    pub name: String,
}

impl ItemIdentity {
    /// The dedup key, e.g. "vercel-labs/agent-skills/react-best-practices"
    pub fn key(&self) -> String {
        format!("{}/{}/{}", self.owner, self.collection, self.name)
    }
}

/// Rank and popularity pulled out of one anchor row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFields {
    pub rank: u64,
    pub popularity: String,
}

/// One entry of a catalog listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Position asserted by the source page (may have gaps)
    pub rank: u64,
    pub name: String,
    pub owner: String,
    pub collection: String,
    /// Display string straight from the page, e.g. "106.9K" or "?"
    pub popularity: String,
    /// Always under the base origin
    pub canonical_url: String,
    /// Only set on detail lookups; None means "not fetched"
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CatalogItem {
    /// "owner/name", the form the category and keyword views consume
    pub fn short_name(&self) -> String {
        format!("{}/{}", self.owner, self.name)
    }
}

/// Result of a detail lookup
///
/// When the detail page could not be fetched, `available` is false and the
/// description is a static placeholder. The install command is always set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub name: String,
    pub owner: String,
    pub collection: String,
    pub canonical_url: String,
    pub description: String,
    pub install_command: String,
    pub available: bool,
}

/// Headline numbers for the dashboard
///
/// Every field is a display string; the source page formats them and we
/// keep that formatting (e.g. "47,117").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricsSummary {
    pub total_count: String,
    pub trending_count: String,
    pub trending_top_name: String,
    pub hottest_top_name: String,
    pub hottest_top_popularity: String,
}

impl Default for MetricsSummary {
    fn default() -> Self {
        Self {
            total_count: "0".to_string(),
            trending_count: "0".to_string(),
            trending_top_name: "Unknown".to_string(),
            hottest_top_name: "Unknown".to_string(),
            hottest_top_popularity: "0%".to_string(),
        }
    }
}
