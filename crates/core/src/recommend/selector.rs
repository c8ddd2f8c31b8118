//! Candidate Selector: filter, tier, rank and pick one product per tier.

use crate::config::CategoryConfig;
use crate::domain::product::Product;
use crate::domain::recommendation::{Recommendation, RecommendationSet, Tier};
use crate::domain::tag::PreferenceSet;
use crate::recommend::scoring::match_count;
use crate::recommend::tiering::classify;

/// Pick at most one product per tier from a catalog snapshot.
///
/// Candidates must reach the category's inclusive minimum match count and be
/// classifiable into a tier. Within a tier a higher match count wins, then a
/// lower price, then the earlier catalog position, which makes the result a
/// deterministic function of the inputs.
pub fn select(
    catalog: &[Product],
    category: &str,
    preferences: &PreferenceSet,
    config: &CategoryConfig,
) -> RecommendationSet {
    let mut best: [Option<(usize, &Product)>; 3] = [None, None, None];

    for product in catalog.iter().filter(|product| product.category == category) {
        let count = match_count(&product.tags, preferences);
        if count < config.min_match {
            continue;
        }
        let Some(tier) = classify(product, &config.tier) else {
            continue;
        };

        let slot = &mut best[tier as usize];
        let better = match slot {
            None => true,
            Some((held_count, held)) => {
                count > *held_count || (count == *held_count && product.price < held.price)
            }
        };
        if better {
            *slot = Some((count, product));
        }
    }

    let recommendations = Tier::ORDER
        .iter()
        .filter_map(|tier| {
            best[*tier as usize].map(|(count, product)| Recommendation {
                tier: *tier,
                product: product.clone(),
                match_count: count,
            })
        })
        .collect();

    RecommendationSet { recommendations }
}
