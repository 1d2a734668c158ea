// src/extract/fields.rs
// =============================================================================
// Pulls the rank and popularity out of one catalog row.
//
// A row currently renders as:
//
//   <a href="/owner/repo/skill">
//     <div>1</div>            <- rank badge (first block)
//     <div>skill ...</div>
//     <div>106.9K</div>       <- popularity (last block)
//   </a>
//
// The extractor is purely positional: first <div> is the rank, last <div> is
// the popularity. Nothing in the markup says so; it is how the page looks
// today. When the row is thinner than that (fewer than two blocks) we fall
// back instead of guessing.
//
// Positional heuristics worth knowing:
// - <div>s are taken in document order, nested ones included, so a wrapper
//   <div> around the badge counts as the first block
// - The rank keeps every ASCII digit of the first block ("#1 of 2" -> 12)
// - A digit run beyond u64::MAX saturates to u64::MAX instead of falling
//   back, so an absurd badge still sorts last rather than jumping to the top
//
// Rust concepts:
// - Slice patterns: [first, .., last] matches "at least two elements" and
//   binds both ends in one step
// =============================================================================

use scraper::ElementRef;

use super::html::{element_text, select_within};
use crate::model::RowFields;

// Shown when a row carries no popularity value
pub const UNKNOWN_POPULARITY: &str = "?";

// Every layout block inside a row is a <div>
const BLOCK_SELECTOR: &str = "div";

// Extracts rank and popularity from an anchor row
//
// Parameters:
//   anchor: the row element
//   fallback_rank: used when the rank badge is missing or has no digits
//
// Rules:
//   >= 2 blocks: rank = digits of the first block, popularity = last block
//   <  2 blocks: rank = fallback_rank, popularity = "?"
//
// Example:
//   <a><div>#3</div><div>name</div><div>1.2K</div></a>  ->  (3, "1.2K")
pub fn extract_row_fields(anchor: ElementRef<'_>, fallback_rank: u64) -> RowFields {
    let blocks = select_within(anchor, BLOCK_SELECTOR);

    match blocks.as_slice() {
        // Two or more blocks: read both ends
        [first, .., last] => {
            let rank = parse_rank(&element_text(*first)).unwrap_or(fallback_rank);

            // An empty last block means the page had nothing to show
            let popularity = element_text(*last);
            let popularity = if popularity.is_empty() {
                UNKNOWN_POPULARITY.to_string()
            } else {
                popularity
            };

            RowFields { rank, popularity }
        }
        // Zero or one block: not enough structure to trust either position
        _ => RowFields {
            rank: fallback_rank,
            popularity: UNKNOWN_POPULARITY.to_string(),
        },
    }
}

// Keeps the ASCII digits of a badge and reads them as a number
//
// Returns:
//   Some(n) when there is at least one digit (saturating at u64::MAX)
//   None when the badge has no digits at all
//
// Example: "#12" -> Some(12), "1st" -> Some(1), "new" -> None
fn parse_rank(text: &str) -> Option<u64> {
    let digits: String = text.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }

    // Digits only, so the one way parse() can fail here is overflow
    Some(digits.parse().unwrap_or(u64::MAX))
}
