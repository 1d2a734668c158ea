// src/aggregate/keywords.rs
// =============================================================================
// Word frequencies across item names, for a keyword cloud.
// =============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_KEYWORD_LIMIT: usize = 30;

const STOP_WORDS: [&str; 27] = [
    "the", "a", "an", "and", "or", "for", "to", "in", "of", "with", "on", "at", "by", "is", "it",
    "as", "do", "no", "my", "up", "if", "so", "be", "we", "he", "me", "us",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub word: String,
    pub count: usize,
}

/// Most frequent words in `names`
///
/// Names are lower-cased and split on runs of `-`, `_`, `.`, `/` and
/// whitespace. Words of 1-2 characters, stop words and pure numbers are
/// skipped. Equal counts keep first-seen order.
pub fn extract_keywords<S: AsRef<str>>(names: &[S], limit: usize) -> Vec<KeywordCount> {
    let mut counts: Vec<KeywordCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for name in names {
        let lowered = name.as_ref().to_lowercase();
        for word in lowered.split(is_separator).filter(|w| keep_word(w)) {
            match index.get(word) {
                Some(&slot) => {
                    if let Some(entry) = counts.get_mut(slot) {
                        entry.count += 1;
                    }
                }
                None => {
                    index.insert(word.to_string(), counts.len());
                    counts.push(KeywordCount {
                        word: word.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts.truncate(limit);
    counts
}

fn is_separator(c: char) -> bool {
    matches!(c, '-' | '_' | '.' | '/') || c.is_whitespace()
}

fn keep_word(word: &str) -> bool {
    word.chars().count() > 2
        && !STOP_WORDS.contains(&word)
        && !word.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_words_across_names() {
        let names = [
            "vercel-labs/react-best-practices",
            "anthropics/frontend-design",
            "acme/react_native.tools",
        ];
        let keywords = extract_keywords(&names, 30);

        assert_eq!(keywords[0], KeywordCount { word: "react".into(), count: 2 });
        let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert!(words.contains(&"native"));
        assert!(words.contains(&"tools"));
        // "labs" is 4 chars so it stays; "best" too
        assert!(words.contains(&"labs"));
    }

    #[test]
    fn test_skips_short_stop_and_numeric_words() {
        let names = ["the-ai/for-web 2024", "and/use-it"];
        let words: Vec<String> = extract_keywords(&names, 30)
            .into_iter()
            .map(|k| k.word)
            .collect();
        assert_eq!(words, vec!["web", "use"]);
    }

    #[test]
    fn test_limit_and_tie_order() {
        let names = ["alpha-beta-gamma", "gamma"];
        let keywords = extract_keywords(&names, 2);
        let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, vec!["gamma", "alpha"]);
    }
}
