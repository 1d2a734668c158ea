// src/aggregate/popularity.rs
// =============================================================================
// Popularity strings to numbers, and the top-N view built on them.
//
// The page shows popularity as formatted text ("106.9K", "1,200", "100K+").
// We keep that text for display and derive a number only for ordering.
//
// Suffixes: K = thousand, M = million, B = billion. Anything we cannot read
// counts as 0.
//
// Rust concepts:
// - f64::total_cmp: a total order on floats, so sort_by never has to decide
//   what to do with NaN
// - char_indices: byte offsets that are always on a char boundary, safe to
//   slice with
// =============================================================================

use serde::{Deserialize, Serialize};

use crate::model::CatalogItem;

// One entry of the top-by-popularity chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopularityEntry {
    pub name: String,
    /// Parsed magnitude, used for ordering
    pub popularity: f64,
    /// The text exactly as the page showed it
    pub popularity_formatted: String,
    pub url: String,
}

// Converts a display string to a magnitude
//
// Steps:
// 1. "" and "?" are the "no value" markers -> 0
// 2. Trim, upper-case, drop '+' and ','
// 3. "<digits and dots><K|M|B>?" -> float prefix times the suffix
// 4. Anything else -> the leading integer, or 0 if there is none
//
// Examples:
//   "106.9K" -> 106900
//   "1,200"  -> 1200
//   "1.2M"   -> 1200000
//   "100K+"  -> 100000
//   "+412%"  -> 412
//   "?"      -> 0
pub fn parse_popularity(text: &str) -> f64 {
    // 1. Placeholders
    if text.is_empty() || text == "?" {
        return 0.0;
    }

    // 2. Normalize
    let cleaned: String = text
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| *c != '+' && *c != ',')
        .collect();

    // 3. Split off a magnitude suffix, if there is one
    let (number, multiplier) = match cleaned.char_indices().last() {
        Some((idx, 'K')) => (&cleaned[..idx], 1_000.0),
        Some((idx, 'M')) => (&cleaned[..idx], 1_000_000.0),
        Some((idx, 'B')) => (&cleaned[..idx], 1_000_000_000.0),
        _ => (cleaned.as_str(), 1.0),
    };

    if !number.is_empty() && number.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return float_prefix(number) * multiplier;
    }

    // 4. Not "<number><suffix>": fall back to the leading integer, if any
    leading_integer(&cleaned)
}

// Reads digits-and-dots text as a float; a second dot ends the number
//
// Example: "1.2.3" -> 1.2, "." -> 0
fn float_prefix(text: &str) -> f64 {
    let end = text
        .char_indices()
        .filter(|(_, c)| *c == '.')
        .nth(1)
        .map_or(text.len(), |(idx, _)| idx);
    text[..end].parse().unwrap_or(0.0)
}

// Example: "412%" -> 412, "N/A" -> 0
fn leading_integer(text: &str) -> f64 {
    let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0.0)
}

// Top `limit` items by numeric popularity
//
// Parameters:
//   items: a collected listing, in rank order
//   limit: how many entries to keep
//
// Returns: entries by popularity descending. Sorting is stable, so items
// with equal popularity keep the order they had in the input list (which is
// rank order).
pub fn top_by_popularity(items: &[CatalogItem], limit: usize) -> Vec<PopularityEntry> {
    let mut entries: Vec<PopularityEntry> = items
        .iter()
        .map(|item| PopularityEntry {
            name: item.name.clone(),
            popularity: parse_popularity(&item.popularity),
            popularity_formatted: item.popularity.clone(),
            url: item.canonical_url.clone(),
        })
        .collect();

    // b before a: descending
    entries.sort_by(|a, b| b.popularity.total_cmp(&a.popularity));
    entries.truncate(limit);
    entries
}
