// src/extract/mod.rs
// =============================================================================
// The extraction pipeline: raw markup in, structured items out.
//
// Submodules:
// - html: parse markup, select candidate row anchors
// - classify: normalize hrefs, classify item URLs, parse owner/collection/name
// - fields: positional rank and popularity extraction
// - collect: dedup + rank ordering for one page
// - metrics: headline-number scans for the dashboard
// - detail: description lookup on an item page
//
// Nothing in here performs I/O; every function works on markup that the
// fetch layer already produced (or on an empty document if it produced none).
// =============================================================================

mod classify;
mod collect;
mod detail;
mod fields;
mod html;
mod metrics;

pub use classify::{is_item_url, normalize_item_url, parse_identity, EXCLUDED_MARKERS};
pub use collect::{collect_from_markup, collect_items, item_anchors};
pub use detail::{extract_description, NO_DESCRIPTION};
pub use fields::{extract_row_fields, UNKNOWN_POPULARITY};
pub use html::{css, element_text, parse_markup, select_all, select_candidate_anchors, select_within};
pub use metrics::{scan_hottest, scan_metrics, scan_total_count, scan_trending};
