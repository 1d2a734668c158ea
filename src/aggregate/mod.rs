// src/aggregate/mod.rs
// =============================================================================
// Read-only views derived from a collected item list.
//
// Submodules:
// - popularity: popularity string -> number, top-N by popularity
// - owners: item count and share per owner
// - categories: keyword-based topic breakdown of names
// - keywords: word frequencies for a keyword cloud
//
// All of these are pure functions over slices. They are recomputed on every
// call and accept empty input (empty list in, empty list out).
// =============================================================================

mod categories;
mod keywords;
mod owners;
mod popularity;

pub use categories::{categorize, classify_categories, Category, CategoryShare, CATEGORIES, OTHER_KEY, OTHER_LABEL};
pub use keywords::{extract_keywords, KeywordCount, DEFAULT_KEYWORD_LIMIT};
pub use owners::{owner_distribution, rounded_percentage, OwnerShare};
pub use popularity::{parse_popularity, top_by_popularity, PopularityEntry};
