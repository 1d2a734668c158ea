// src/extract/collect.rs
// =============================================================================
// Turns a list of candidate anchors into a deduplicated, ranked item list.
//
// Per anchor:
//   href -> normalize -> is item url? -> parse identity -> extract fields
// Any step that comes back empty drops the anchor. Pages are full of links
// that are not rows (nav, footer, ads), so dropped anchors are not reported.
//
// Dedup is keyed on owner/collection/name. The first anchor in document
// order wins; later ones with the same key are skipped before their fields
// are even read. The result is then stably sorted by rank.
//
// Rust concepts:
// - Lifetimes ('a): the returned ElementRefs borrow from the parsed document,
//   so the document has to outlive them
// - HashSet::insert returns false for a key it already holds, which doubles
//   as the "seen before?" check
// =============================================================================

use std::collections::HashSet;

use scraper::ElementRef;

use super::classify::{is_item_url, normalize_item_url, parse_identity};
use super::fields::extract_row_fields;
use super::html::{parse_markup, select_candidate_anchors};
use crate::model::CatalogItem;

// Anchors whose href classifies as an item URL, paired with that URL
//
// No identity check and no dedup: this is the raw "how many rows does the
// page link to" view. The trending counter uses it directly.
//
// Parameters:
//   anchors: candidate anchors in document order
//   base_url: origin used for normalization
//
// Returns: (anchor, normalized url) pairs, document order preserved
pub fn item_anchors<'a>(
    anchors: &[ElementRef<'a>],
    base_url: &str,
) -> Vec<(ElementRef<'a>, String)> {
    anchors
        .iter()
        .filter_map(|anchor| {
            // No href at all: a button styled as a link, skip it
            let href = anchor.value().attr("href")?;
            let url = normalize_item_url(href, base_url)?;
            is_item_url(&url, base_url).then_some((*anchor, url))
        })
        .collect()
}

// Builds the item list for one page
//
// Parameters:
//   anchors: candidate anchors in document order
//   base_url: origin used for normalization
//
// Returns: items sorted ascending by rank, ties in document order
//
// A row without a readable rank badge gets "one more than the items
// collected so far" as its rank.
pub fn collect_items(anchors: &[ElementRef<'_>], base_url: &str) -> Vec<CatalogItem> {
    let mut items: Vec<CatalogItem> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();

    for (anchor, url) in item_anchors(anchors, base_url) {
        // Item-looking URL with fewer than three segments (e.g. /owner/repo)
        let Some(identity) = parse_identity(&url, base_url) else {
            continue;
        };

        // Duplicate row: the first occurrence already won
        if !seen.insert(identity.key()) {
            continue;
        }

        let fallback_rank = u64::try_from(items.len()).map_or(u64::MAX, |n| n.saturating_add(1));
        let fields = extract_row_fields(anchor, fallback_rank);

        items.push(CatalogItem {
            rank: fields.rank,
            name: identity.name,
            owner: identity.owner,
            collection: identity.collection,
            popularity: fields.popularity,
            canonical_url: url,
            description: None,
        });
    }

    // sort_by_key is stable, so equal ranks keep their insertion order
    items.sort_by_key(|item| item.rank);
    items
}

// Parse + select + collect in one go
//
// Absent markup (the page could not be fetched) gives an empty list.
pub fn collect_from_markup(markup: Option<&str>, base_url: &str) -> Vec<CatalogItem> {
    let document = parse_markup(markup);
    let anchors = select_candidate_anchors(&document);
    collect_items(&anchors, base_url)
}
