//! Recommendation engine facade.
//!
//! Composes the scoring, tiering and selection passes over a catalog snapshot
//! fetched from the store collaborator. One preference submission triggers one
//! synchronous pass and one result.

pub mod scoring;
pub mod selector;
pub mod tiering;

use crate::config::EngineConfig;
use crate::domain::recommendation::RecommendationSet;
use crate::domain::tag::PreferenceSet;
use crate::errors::ApplicationError;
use crate::store::CatalogStore;

#[derive(Clone, Debug)]
pub struct RecommendRequest<'a> {
    pub category: &'a str,
    pub preferences: &'a PreferenceSet,
}

pub trait RecommendEngine: Send + Sync {
    /// `Ok` with an empty set means "no recommendations, try different
    /// criteria". Errors are reserved for misconfiguration and store failures.
    fn recommend(&self, request: RecommendRequest<'_>)
        -> Result<RecommendationSet, ApplicationError>;
}

/// Deterministic engine over a catalog store and static configuration.
pub struct DeterministicRecommendEngine<C> {
    catalog: C,
    config: EngineConfig,
}

impl<C> DeterministicRecommendEngine<C> {
    pub fn new(catalog: C, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}

impl<C: CatalogStore> RecommendEngine for DeterministicRecommendEngine<C> {
    fn recommend(
        &self,
        request: RecommendRequest<'_>,
    ) -> Result<RecommendationSet, ApplicationError> {
        let category_config = self.config.category(request.category)?;
        let snapshot = self.catalog.fetch_category(request.category)?;
        Ok(selector::select(&snapshot, request.category, request.preferences, category_config))
    }
}

#[cfg(test)]
mod tests {
    use super::{DeterministicRecommendEngine, RecommendEngine, RecommendRequest};
    use crate::config::{ConfigError, EngineConfig};
    use crate::domain::recommendation::Tier;
    use crate::errors::ApplicationError;
    use crate::fixtures;
    use crate::store::{CatalogStore, StoreError};

    #[test]
    fn dishwasher_scenario_end_to_end() {
        let engine = DeterministicRecommendEngine::new(
            fixtures::seeded_store().expect("seed store"),
            fixtures::engine_config(),
        );
        let preferences = fixtures::family_preferences();

        let result = engine
            .recommend(RecommendRequest { category: "dishwasher", preferences: &preferences })
            .expect("recommendation succeeds");

        assert_eq!(result.len(), 3);
        let picks: Vec<(Tier, &str, usize)> = result
            .iter()
            .map(|rec| (rec.tier, rec.product.id.0.as_str(), rec.match_count))
            .collect();
        assert_eq!(
            picks,
            vec![
                (Tier::Budget, "dw-budget-310", 4),
                (Tier::Mid, "dw-mid-520", 3),
                (Tier::Premium, "dw-premium-900", 3),
            ]
        );
    }

    #[test]
    fn unknown_category_is_a_configuration_error() {
        let engine = DeterministicRecommendEngine::new(
            fixtures::seeded_store().expect("seed store"),
            fixtures::engine_config(),
        );
        let preferences = fixtures::family_preferences();

        let result =
            engine.recommend(RecommendRequest { category: "fridge", preferences: &preferences });
        assert_eq!(
            result,
            Err(ApplicationError::Configuration(ConfigError::UnknownCategory(
                "fridge".to_owned()
            )))
        );
    }

    #[test]
    fn store_failures_propagate_without_partial_results() {
        struct FailingCatalog;
        impl CatalogStore for FailingCatalog {
            fn fetch_category(
                &self,
                _category: &str,
            ) -> Result<Vec<crate::domain::product::Product>, StoreError> {
                Err(StoreError::Unavailable("connection reset".to_owned()))
            }
            fn fetch_raw(
                &self,
                _category: &str,
            ) -> Result<Vec<crate::domain::product::RawProduct>, StoreError> {
                Err(StoreError::Unavailable("connection reset".to_owned()))
            }
            fn store_tags(
                &self,
                _id: &crate::domain::product::ProductId,
                _tags: &crate::domain::tag::TagSet,
            ) -> Result<(), StoreError> {
                Err(StoreError::Unavailable("connection reset".to_owned()))
            }
        }

        let engine = DeterministicRecommendEngine::new(FailingCatalog, fixtures::engine_config());
        let preferences = fixtures::family_preferences();

        let result = engine
            .recommend(RecommendRequest { category: "dishwasher", preferences: &preferences });
        assert_eq!(
            result,
            Err(ApplicationError::Store(StoreError::Unavailable("connection reset".to_owned())))
        );
    }

    #[test]
    fn no_surviving_candidate_yields_an_empty_ok_result() {
        let engine = DeterministicRecommendEngine::new(
            fixtures::seeded_store().expect("seed store"),
            fixtures::engine_config(),
        );
        // A single preference can match at most once, below the threshold of 3.
        let preferences = fixtures::single_preference();

        let result = engine
            .recommend(RecommendRequest { category: "dishwasher", preferences: &preferences })
            .expect("empty result is not an error");
        assert!(result.is_empty());
    }
}
