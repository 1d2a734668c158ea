// src/lib.rs
// =============================================================================
// skills-catalog: turns the skills.sh marketplace pages into structured data.
//
// Data flows one way:
//   fetch (I/O, gated + cached)
//     -> extract (parse, select anchors, classify, parse identity,
//                 read row fields, dedup, sort)
//       -> aggregate (top-N, owner shares, categories, keywords)
//
// The Catalog type wires the three together; main.rs is a small CLI on top.
// =============================================================================

pub mod aggregate;
pub mod catalog;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod logging;
pub mod model;

pub use catalog::{Catalog, Listing};
pub use config::Settings;
pub use error::{CatalogError, Result};
pub use fetch::{HttpFetcher, PageSource, StaticPages};
pub use model::{CatalogItem, ItemDetail, ItemIdentity, MetricsSummary};
