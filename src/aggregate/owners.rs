// src/aggregate/owners.rs
// =============================================================================
// How many catalog items each owner contributes.
// =============================================================================

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::CatalogItem;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerShare {
    pub owner: String,
    pub count: usize,
    /// round(100 * count / total), total being all items (not just the top N)
    pub percentage: u32,
}

/// Owners ranked by item count, top `limit` only
///
/// Owners with equal counts stay in the order they first appeared. An empty
/// item list gives an empty distribution; the divisor never drops below 1.
pub fn owner_distribution(items: &[CatalogItem], limit: usize) -> Vec<OwnerShare> {
    // Vec + index map keeps first-seen order for the stable sort below
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for item in items {
        match index.get(item.owner.as_str()) {
            Some(&slot) => {
                if let Some(entry) = counts.get_mut(slot) {
                    entry.1 += 1;
                }
            }
            None => {
                index.insert(item.owner.as_str(), counts.len());
                counts.push((item.owner.as_str(), 1));
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(limit);

    let total = items.len().max(1);
    counts
        .into_iter()
        .map(|(owner, count)| OwnerShare {
            owner: owner.to_string(),
            count,
            percentage: rounded_percentage(count, total),
        })
        .collect()
}

/// round(100 * part / total), halves rounded up
pub fn rounded_percentage(part: usize, total: usize) -> u32 {
    let total = total.max(1) as f64;
    (100.0 * part as f64 / total).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned_by(owners: &[&str]) -> Vec<CatalogItem> {
        owners
            .iter()
            .enumerate()
            .map(|(i, owner)| CatalogItem {
                rank: i as u64 + 1,
                name: format!("skill-{}", i),
                owner: owner.to_string(),
                collection: "skills".to_string(),
                popularity: "?".to_string(),
                canonical_url: format!("https://skills.sh/{}/skills/skill-{}", owner, i),
                description: None,
            })
            .collect()
    }

    #[test]
    fn test_counts_and_percentages() {
        let items = owned_by(&["vercel", "anthropics", "vercel", "expo", "anthropics", "vercel"]);
        let dist = owner_distribution(&items, 6);

        assert_eq!(
            dist,
            vec![
                OwnerShare { owner: "vercel".into(), count: 3, percentage: 50 },
                OwnerShare { owner: "anthropics".into(), count: 2, percentage: 33 },
                OwnerShare { owner: "expo".into(), count: 1, percentage: 17 },
            ]
        );
    }

    #[test]
    fn test_truncated_to_limit_against_full_total() {
        let items = owned_by(&["a", "b", "b", "c", "d", "d", "d", "e"]);
        let dist = owner_distribution(&items, 2);
        assert_eq!(dist.len(), 2);
        assert_eq!(dist[0].owner, "d");
        assert_eq!(dist[0].percentage, 38); // 37.5 rounds up
        assert_eq!(dist[1].owner, "b");
        assert_eq!(dist[1].percentage, 25);
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let items = owned_by(&["zeta", "alpha", "mid"]);
        let owners: Vec<String> = owner_distribution(&items, 10)
            .into_iter()
            .map(|s| s.owner)
            .collect();
        assert_eq!(owners, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_percentages_do_not_exceed_hundred() {
        let items = owned_by(&["a", "b", "c", "a", "b", "a", "d"]);
        let sum: u32 = owner_distribution(&items, 10)
            .iter()
            .map(|s| s.percentage)
            .sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn test_empty_input() {
        assert!(owner_distribution(&[], 6).is_empty());
        assert_eq!(rounded_percentage(0, 0), 0);
    }
}
