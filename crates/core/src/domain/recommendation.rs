use serde::{Deserialize, Serialize};

use crate::domain::product::Product;

/// Coarse price/quality bucket with exactly one recommendation slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Budget,
    Mid,
    Premium,
}

impl Tier {
    /// Fixed evaluation and display order.
    pub const ORDER: [Tier; 3] = [Tier::Budget, Tier::Mid, Tier::Premium];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Budget => "budget",
            Tier::Mid => "mid",
            Tier::Premium => "premium",
        }
    }
}

/// Scoring outcome for one product. Derived per request, never stored.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub product: Product,
    pub match_count: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub tier: Tier,
    pub product: Product,
    pub match_count: usize,
}

/// Final ranked picks: at most one per tier, at most three total, in fixed
/// tier order. An empty set is a valid "no recommendations" outcome, distinct
/// from any error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationSet {
    pub fn len(&self) -> usize {
        self.recommendations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recommendations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Recommendation> {
        self.recommendations.iter()
    }

    pub fn for_tier(&self, tier: Tier) -> Option<&Recommendation> {
        self.recommendations.iter().find(|rec| rec.tier == tier)
    }
}
