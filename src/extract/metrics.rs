// src/extract/metrics.rs
// =============================================================================
// Page-specific scans behind the dashboard's headline numbers.
//
// Each field has its own rule and its own source page:
// - total count:     home page, "All Time (47,117)" anchor text
// - trending count:  trending page, number of anchors linking to items
// - trending top:    trending page, heading of the first item anchor
// - hottest top:     hot page, first <h3> in <main> and its row's metric
//
// Every rule has a display default so a missing page still yields a
// complete summary.
// =============================================================================

use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html};

use super::collect::item_anchors;
use super::html::{element_text, select_all, select_candidate_anchors, select_within};
use crate::model::MetricsSummary;

// "All Time (47,117)" -> "47,117"
//
// Built once on first use. The pattern is a literal, and
// test_total_pattern_compiles keeps the expect() honest.
static TOTAL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"All Time \(([\d,]+)\)").expect("hardcoded total-count pattern is valid")
});

pub const UNKNOWN_NAME: &str = "Unknown";
pub const UNKNOWN_METRIC: &str = "0%";

/// Reads the "All Time (N)" counter from the home page
///
/// Every anchor is checked and the last match wins. The number is kept as
/// displayed, thousands separators included.
pub fn scan_total_count(home: &Html) -> String {
    select_all(home, "a")
        .into_iter()
        .filter_map(|anchor| {
            let text: String = anchor.text().collect();
            TOTAL_PATTERN
                .captures(&text)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
        .last()
        .unwrap_or_else(|| "0".to_string())
}

/// Count of item-linking anchors on the trending page, plus the name of the
/// first one
///
/// The name is the first <h3> inside that anchor, else the anchor's own
/// text, else "Unknown".
pub fn scan_trending(trending: &Html, base_url: &str) -> (String, String) {
    let anchors = select_candidate_anchors(trending);
    let rows = item_anchors(&anchors, base_url);

    let top_name = match rows.first() {
        Some((anchor, _)) => heading_or_text(*anchor),
        None => UNKNOWN_NAME.to_string(),
    };

    (rows.len().to_string(), top_name)
}

/// Name and metric of the first row on the hot page
pub fn scan_hottest(hot: &Html) -> (String, String) {
    let Some(header) = select_all(hot, "main h3").into_iter().next() else {
        return (UNKNOWN_NAME.to_string(), UNKNOWN_METRIC.to_string());
    };

    let name = element_text(header);

    // Row layout is div(rank) ... div(name) ... div(metric)
    let metric = enclosing_anchor(header)
        .and_then(|row| select_within(row, "div").last().copied())
        .map(element_text)
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| UNKNOWN_METRIC.to_string());

    (name, metric)
}

/// Runs all scans; pages that could not be fetched are passed as empty docs
pub fn scan_metrics(home: &Html, trending: &Html, hot: &Html, base_url: &str) -> MetricsSummary {
    let (trending_count, trending_top_name) = scan_trending(trending, base_url);
    let (hottest_top_name, hottest_top_popularity) = scan_hottest(hot);

    MetricsSummary {
        total_count: scan_total_count(home),
        trending_count,
        trending_top_name,
        hottest_top_name,
        hottest_top_popularity,
    }
}

// A present <h3> is used even when its text is empty
fn heading_or_text(anchor: ElementRef<'_>) -> String {
    if let Some(header) = select_within(anchor, "h3").first() {
        return element_text(*header);
    }
    let text = element_text(anchor);
    if text.is_empty() {
        UNKNOWN_NAME.to_string()
    } else {
        text
    }
}

fn enclosing_anchor(element: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element
        .ancestors()
        .filter_map(ElementRef::wrap)
        .find(|ancestor| ancestor.value().name() == "a")
}
