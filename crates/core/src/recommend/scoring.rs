//! Scoring Engine: preference/tag intersection counting.

use crate::domain::product::Product;
use crate::domain::recommendation::MatchResult;
use crate::domain::tag::{PreferenceSet, TagSet};

/// Number of distinct preference tags the product's tag set satisfies,
/// counted by `(category, value)` equality. Duplicate preference entries
/// never inflate the count.
pub fn match_count(tags: &TagSet, preferences: &PreferenceSet) -> usize {
    preferences.unique().into_iter().filter(|tag| tags.contains(tag)).count()
}

/// Score a whole catalog snapshot. Results are derived per request and never
/// stored.
pub fn score_catalog(catalog: &[Product], preferences: &PreferenceSet) -> Vec<MatchResult> {
    catalog
        .iter()
        .map(|product| MatchResult {
            match_count: match_count(&product.tags, preferences),
            product: product.clone(),
        })
        .collect()
}
