// src/extract/html.rs
// =============================================================================
// Loads markup into a document and picks the anchors that may be item rows.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM, never failing on malformed input
// - Supports CSS selectors for finding elements
//
// Selection policy:
// - Prefer <a> elements inside <main>, the page's primary content region
// - If <main> holds no anchors (or is missing), fall back to every <a>
// This keeps nav and footer links out when the page is shaped as expected,
// while still finding rows if the wrapper ever disappears.
// =============================================================================

use scraper::{ElementRef, Html, Selector};

/// Anchors inside the primary content region
const SCOPED_ANCHORS: &str = "main a";

/// Every anchor in the document
const ALL_ANCHORS: &str = "a";

/// Parses markup into a document; `None` or "" gives an empty document
pub fn parse_markup(markup: Option<&str>) -> Html {
    Html::parse_document(markup.unwrap_or(""))
}

/// Builds a selector from a CSS string
///
/// All selectors in this crate are constants, so a parse failure is a bug.
/// It is logged and treated as "matches nothing" rather than panicking.
pub fn css(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::error!(selector, error = ?e, "invalid CSS selector");
            None
        }
    }
}

/// Every element in the document matching `selector`, in document order
pub fn select_all<'a>(document: &'a Html, selector: &str) -> Vec<ElementRef<'a>> {
    match css(selector) {
        Some(sel) => document.select(&sel).collect(),
        None => Vec::new(),
    }
}

/// Descendants of `element` matching `selector`, in document order
pub fn select_within<'a>(element: ElementRef<'a>, selector: &str) -> Vec<ElementRef<'a>> {
    match css(selector) {
        Some(sel) => element.select(&sel).collect(),
        None => Vec::new(),
    }
}

/// All text under an element, trimmed
pub fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Narrows a document to the anchors that may be catalog rows
///
/// Returns: anchors under <main> if there are any, otherwise all anchors
///
/// Example:
///   `<main><a id="in">A</a></main><a id="out">B</a>` -> [a#in]
pub fn select_candidate_anchors(document: &Html) -> Vec<ElementRef<'_>> {
    let scoped = select_all(document, SCOPED_ANCHORS);
    if !scoped.is_empty() {
        return scoped;
    }
    select_all(document, ALL_ANCHORS)
}
