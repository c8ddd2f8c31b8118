//! Tier Classifier: explicit tier or configured price bands.

use crate::config::TierConfig;
use crate::domain::product::Product;
use crate::domain::recommendation::Tier;

/// Assign a tier to one product. An explicit tier on the record always wins.
/// Otherwise the category's bands are checked budget, mid, premium, first
/// containing band wins. A price outside every band makes the product
/// unclassifiable: it returns `None` and is excluded from that run, which is
/// an observable outcome, not an error.
pub fn classify(product: &Product, config: &TierConfig) -> Option<Tier> {
    if let Some(tier) = product.tier {
        return Some(tier);
    }

    match config {
        TierConfig::Explicit => {
            tracing::debug!(
                product = %product.id.0,
                "record carries no explicit tier in an explicit-tier category, unclassifiable"
            );
            None
        }
        TierConfig::Bands { .. } => {
            for tier in Tier::ORDER {
                if config.band(tier).is_some_and(|band| band.contains(product.price)) {
                    return Some(tier);
                }
            }
            tracing::debug!(
                product = %product.id.0,
                price = product.price,
                "price falls outside every configured band, unclassifiable"
            );
            None
        }
    }
}
