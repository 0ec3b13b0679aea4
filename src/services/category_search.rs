//! Fuzzy category suggestion
//!
//! Ranks the distinct category list against the free-text query with an
//! in-process fuzzy matcher. Typo-tolerant approximate matching, not exact
//! substring search; no external service involved.

use nucleo_matcher::pattern::{AtomKind, CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config, Matcher, Utf32Str};

/// Rank `categories` against `query`, best match first, at most `limit`
/// results. An empty query yields no suggestions.
pub fn rank_categories(categories: &[String], query: &str, limit: usize) -> Vec<String> {
    if query.is_empty() {
        return Vec::new();
    }

    let pattern = Pattern::new(
        query,
        CaseMatching::Ignore,
        Normalization::Smart,
        AtomKind::Fuzzy,
    );
    let mut matcher = Matcher::new(Config::DEFAULT);

    let mut utf32buf = Vec::new();
    let mut scored: Vec<(u32, &String)> = Vec::new();
    for category in categories {
        let haystack: Utf32Str<'_> = Utf32Str::new(category, &mut utf32buf);
        if let Some(score) = pattern.score(haystack, &mut matcher) {
            scored.push((score, category));
        }
    }

    // Stable sort: ties keep list order, so repeated calls over the same
    // category list agree.
    scored.sort_by(|a, b| b.0.cmp(&a.0));
    scored.truncate(limit);
    scored.into_iter().map(|(_, c)| c.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_query_returns_nothing() {
        let cats = categories(&["Dairy", "Bakery"]);
        assert!(rank_categories(&cats, "", 10).is_empty());
    }

    #[test]
    fn test_exact_name_ranks_first() {
        let cats = categories(&["Bakery", "Dairy", "Dairy Alternatives"]);
        let ranked = rank_categories(&cats, "dairy", 10);
        assert_eq!(ranked.first().map(String::as_str), Some("Dairy"));
        assert!(ranked.contains(&"Dairy Alternatives".to_string()));
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let cats = categories(&["dairy"]);
        let ranked = rank_categories(&cats, "DAIRY", 10);
        assert_eq!(ranked, vec!["dairy".to_string()]);
    }

    #[test]
    fn test_partial_query_matches() {
        let cats = categories(&["Frozen Food", "Fresh Produce"]);
        let ranked = rank_categories(&cats, "froz", 10);
        assert_eq!(ranked.first().map(String::as_str), Some("Frozen Food"));
    }

    #[test]
    fn test_unrelated_categories_are_dropped() {
        let cats = categories(&["Dairy", "Electronics"]);
        let ranked = rank_categories(&cats, "dairy", 10);
        assert!(!ranked.contains(&"Electronics".to_string()));
    }

    #[test]
    fn test_limit_caps_results() {
        let cats: Vec<String> = (0..25).map(|i| format!("Snacks {i}")).collect();
        let ranked = rank_categories(&cats, "snacks", 10);
        assert_eq!(ranked.len(), 10);
    }

    #[test]
    fn test_ranking_is_idempotent() {
        let cats = categories(&["Dairy", "Deli", "Drinks", "Dried Fruit"]);
        let first = rank_categories(&cats, "d", 10);
        let second = rank_categories(&cats, "d", 10);
        assert_eq!(first, second);
    }
}
