//! Client-side ranking and category filtering of search results.

use std::collections::HashMap;

use crate::models::{Category, Paper};

/// Bigram overlap (Sørensen–Dice) similarity between two strings.
///
/// Whitespace is ignored and case folded. Returns 1.0 for identical strings
/// and 0.0 when no character pair is shared.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect();
    let b: Vec<char> = b.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_lowercase).collect();

    if a == b {
        return 1.0;
    }
    if a.len() < 2 || b.len() < 2 {
        return 0.0;
    }

    let mut bigrams: HashMap<(char, char), usize> = HashMap::new();
    for pair in a.windows(2) {
        *bigrams.entry((pair[0], pair[1])).or_default() += 1;
    }

    let mut shared = 0usize;
    for pair in b.windows(2) {
        if let Some(count) = bigrams.get_mut(&(pair[0], pair[1])) {
            if *count > 0 {
                *count -= 1;
                shared += 1;
            }
        }
    }

    (2 * shared) as f64 / (a.len() + b.len() - 2) as f64
}

/// Order papers by title similarity to `query`, best first.
///
/// The sort is stable: equally similar titles keep their feed order.
#[must_use]
pub fn rank(papers: Vec<Paper>, query: &str) -> Vec<Paper> {
    let mut scored: Vec<(f64, Paper)> = papers
        .into_iter()
        .map(|p| (similarity(p.title.as_deref().unwrap_or_default(), query), p))
        .collect();
    scored.sort_by(|(a, _), (b, _)| b.total_cmp(a));
    scored.into_iter().map(|(_, p)| p).collect()
}

/// Keep the papers admitted by `category`.
#[must_use]
pub fn filter_by_category(papers: Vec<Paper>, category: Category) -> Vec<Paper> {
    let rule = category.rule();
    papers.into_iter().filter(|p| rule.admits(p.category.as_deref())).collect()
}

/// Rank then filter, as shown to the user.
#[must_use]
pub fn rank_and_filter(papers: Vec<Paper>, query: &str, category: Category) -> Vec<Paper> {
    filter_by_category(rank(papers, query), category)
}
