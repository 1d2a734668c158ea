// src/extract/classify.rs
// =============================================================================
// URL classification and identity parsing for catalog rows.
//
// Every row on a catalog page links to its item as /<owner>/<collection>/<name>.
// Other anchors on the page (home link, docs, agents list, external sites)
// have to be filtered out before we treat an anchor as a row.
//
// What happens to one href:
// 1. normalize_item_url: make it absolute under the base origin (or drop it)
// 2. is_item_url: keep it only if it points below the origin and outside the
//    excluded sections
// 3. parse_identity: cut the path into owner / collection / name
//
// These are plain string operations on purpose. The source site hands us
// either root-relative paths or absolute URLs under its own origin, and the
// output has to match the href text exactly (no percent-decoding, no
// trailing-slash cleanup).
//
// Rust concepts:
// - Option + `?`: each step bails out with None as soon as a piece is missing
// - strip_prefix: returns the rest of the string only when the prefix matches
// =============================================================================

use crate::model::ItemIdentity;

// Sections of the site that are never items
//
// Matched as substrings of the whole URL, so an item literally named
// "docs-helper" is excluded too.
pub const EXCLUDED_MARKERS: [&str; 2] = ["/docs", "/agents"];

// Resolves a raw href against the base origin
//
// Parameters:
//   raw_href: the href attribute as written in the page
//   base_url: origin without trailing slash, e.g. "https://skills.sh"
//
// Returns: Some(absolute_url) or None for foreign origins
//
// Examples:
//   "/owner/repo/skill"                  -> Some("https://skills.sh/owner/repo/skill")
//   "https://skills.sh/owner/repo/skill" -> unchanged
//   "https://example.com/owner/repo"     -> None
pub fn normalize_item_url(raw_href: &str, base_url: &str) -> Option<String> {
    // Root-relative path: glue the origin in front
    if raw_href.starts_with('/') {
        return Some(format!("{}{}", base_url, raw_href));
    }

    // Already absolute under our origin: keep the text as written
    if raw_href.starts_with(base_url) {
        return Some(raw_href.to_string());
    }

    // Anything else (other sites, mailto:, fragments) is not a row
    None
}

// Decides whether a normalized URL points at a catalog item
//
// Parameters:
//   url: output of normalize_item_url
//   base_url: the same origin used for normalization
//
// Returns: false for anything outside `base_url/`, for the root page itself
// and for URLs containing one of the excluded section markers
//
// Example:
//   "https://skills.sh/a/b/c" -> true
//   "https://skills.sh/"      -> false
//   "https://skills.sh/docs"  -> false
pub fn is_item_url(url: &str, base_url: &str) -> bool {
    let Some(path) = url.strip_prefix(base_url) else {
        return false;
    };

    // "https://skills.shop/..." shares the prefix but not the origin
    if !path.starts_with('/') || path == "/" {
        return false;
    }

    !EXCLUDED_MARKERS.iter().any(|marker| url.contains(marker))
}

// Splits an item URL into owner / collection / name
//
// Only the first three path segments are used; anything after them is
// ignored. Segments are taken verbatim, so "/a/b/" yields an empty name and
// a query string stays attached to the last segment it touches.
//
// Returns: None when the path has fewer than three segments or the URL is not
// under base_url
//
// Example:
//   "https://skills.sh/vercel-labs/agent-skills/react" ->
//     owner "vercel-labs", collection "agent-skills", name "react"
pub fn parse_identity(url: &str, base_url: &str) -> Option<ItemIdentity> {
    let path = url.strip_prefix(base_url)?.strip_prefix('/')?;

    // split() is lazy; next()? stops at the first missing segment
    let mut segments = path.split('/');
    let owner = segments.next()?;
    let collection = segments.next()?;
    let name = segments.next()?;

    Some(ItemIdentity {
        owner: owner.to_string(),
        collection: collection.to_string(),
        name: name.to_string(),
    })
}
