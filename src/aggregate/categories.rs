// src/aggregate/categories.rs
// =============================================================================
// Rough topic breakdown of item names.
//
// Each name is lower-cased and tested against the categories below, in
// order. The first category with a keyword that appears anywhere in the name
// wins; a name never counts twice. Names matching nothing land in "Other".
//
// Matching is plain substring containment, so "sam" also hits "samples" and
// "ci" hits "special". The table order decides every overlap.
// =============================================================================

use serde::{Deserialize, Serialize};

use super::owners::rounded_percentage;

/// A named category and the keywords that select it
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

impl Category {
    fn matches(&self, lowered_name: &str) -> bool {
        self.keywords.iter().any(|kw| lowered_name.contains(kw))
    }
}

pub const OTHER_KEY: &str = "other";
pub const OTHER_LABEL: &str = "Other";

/// Evaluated top to bottom; earlier entries win ties
pub const CATEGORIES: [Category; 6] = [
    Category {
        key: "ai",
        label: "AI / ML",
        keywords: &[
            "ai", "agent", "llm", "gpt", "openai", "anthropic", "claude", "gemini", "model", "ml",
            "machine", "learning", "whisper", "sam", "vision", "copilot", "chat",
        ],
    },
    Category {
        key: "web",
        label: "Web",
        keywords: &[
            "react", "vue", "next", "nuxt", "svelte", "angular", "css", "html", "frontend",
            "front-end", "tailwind", "web", "dom", "browser", "vite",
        ],
    },
    Category {
        key: "design",
        label: "Design",
        keywords: &[
            "design", "ui", "ux", "figma", "style", "layout", "animation", "motion",
            "typography", "color", "theme",
        ],
    },
    Category {
        key: "dev",
        label: "DevTools",
        keywords: &[
            "cli", "terminal", "git", "docker", "dev", "build", "test", "debug", "lint",
            "format", "tool", "script", "deploy", "ci", "cd",
        ],
    },
    Category {
        key: "data",
        label: "Data",
        keywords: &[
            "data", "database", "sql", "api", "rest", "graphql", "json", "csv", "scrape",
            "fetch", "analytics",
        ],
    },
    Category {
        key: "docs",
        label: "Docs",
        keywords: &[
            "doc", "readme", "markdown", "write", "content", "blog", "seo", "text", "guide",
            "tutorial", "best-practice", "guidelines", "practices",
        ],
    },
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryShare {
    pub key: String,
    pub label: String,
    pub count: usize,
    /// Unrounded share of all names, 0..=100
    pub percentage: f64,
    /// `percentage` rounded for display
    pub display_percentage: u32,
}

/// Index into CATEGORIES of the first matching category, if any
pub fn categorize(name: &str) -> Option<usize> {
    let lowered = name.to_lowercase();
    CATEGORIES.iter().position(|cat| cat.matches(&lowered))
}

// Classifies names into categories
//
// Returns: named categories with at least one hit, by count descending
// (ties keep table order), then "Other" if anything went unmatched
pub fn classify_categories<S: AsRef<str>>(names: &[S]) -> Vec<CategoryShare> {
    let mut counts = [0usize; CATEGORIES.len()];
    let mut other = 0usize;

    for name in names {
        match categorize(name.as_ref()) {
            Some(idx) => {
                if let Some(count) = counts.get_mut(idx) {
                    *count += 1;
                }
            }
            None => other += 1,
        }
    }

    let total = names.len().max(1);

    let mut shares: Vec<CategoryShare> = CATEGORIES
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(cat, count)| share(cat.key, cat.label, count, total))
        .collect();
    shares.sort_by(|a, b| b.count.cmp(&a.count));

    if other > 0 {
        shares.push(share(OTHER_KEY, OTHER_LABEL, other, total));
    }

    shares
}

fn share(key: &str, label: &str, count: usize, total: usize) -> CategoryShare {
    CategoryShare {
        key: key.to_string(),
        label: label.to_string(),
        count,
        percentage: count as f64 / total as f64 * 100.0,
        display_percentage: rounded_percentage(count, total),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_category_wins() {
        // "react-agent" hits both AI ("agent") and Web ("react")
        assert_eq!(categorize("react-agent"), Some(0));
        let shares = classify_categories(&["react-agent"]);
        assert_eq!(shares.len(), 1);
        assert_eq!(shares[0].label, "AI / ML");
    }

    #[test]
    fn test_case_insensitive_substring() {
        assert_eq!(categorize("Svelte-Kit"), Some(1));
        // "tailwind" contains "ai", so it never reaches Web
        assert_eq!(categorize("tailwind"), Some(0));
        assert_eq!(categorize("FIGMA"), Some(2));
        assert_eq!(categorize("samples"), Some(0));
        assert_eq!(categorize("zzz"), None);
    }

    #[test]
    fn test_sorted_by_count_with_other_last() {
        let names = [
            "acme/react-hooks",
            "acme/vue-router",
            "acme/postgres-sql",
            "zed/xyz",
            "zed/qqq",
            "zed/www",
        ];
        let shares = classify_categories(&names);
        let keys: Vec<&str> = shares.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["web", "data", "other"]);

        assert_eq!(shares[0].count, 2);
        assert_eq!(shares[2].count, 3);
        assert_eq!(shares[2].label, "Other");
        assert!((shares[2].percentage - 50.0).abs() < 1e-9);
        assert_eq!(shares[0].display_percentage, 33);
        assert_eq!(shares[1].display_percentage, 17);
    }

    #[test]
    fn test_ties_keep_table_order() {
        let shares = classify_categories(&["docker-helper", "figma-sync"]);
        let keys: Vec<&str> = shares.iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["design", "dev"]);
    }

    #[test]
    fn test_no_other_when_everything_matches() {
        let shares = classify_categories(&["llm-router"]);
        assert!(shares.iter().all(|s| s.key != OTHER_KEY));
        assert_eq!(shares[0].display_percentage, 100);
    }

    #[test]
    fn test_empty_names() {
        let empty: [&str; 0] = [];
        assert!(classify_categories(&empty).is_empty());
    }
}
