// src/extract/detail.rs
// =============================================================================
// Description lookup for a single item's detail page.
// =============================================================================

use scraper::Html;

use super::html::{element_text, select_all};

pub const NO_DESCRIPTION: &str = "No description available.";

/// Picks the item description from a detail page
///
/// Order of preference:
/// 1. `<meta name="description" content="...">` when non-empty
/// 2. the first `<p>` inside `<main>`, trimmed
/// 3. a fixed "No description available." text
pub fn extract_description(document: &Html) -> String {
    let meta = select_all(document, r#"meta[name="description"]"#)
        .into_iter()
        .next()
        .and_then(|el| el.value().attr("content"))
        .unwrap_or("");
    if !meta.is_empty() {
        return meta.to_string();
    }

    select_all(document, "main p")
        .into_iter()
        .next()
        .map(element_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NO_DESCRIPTION.to_string())
}
