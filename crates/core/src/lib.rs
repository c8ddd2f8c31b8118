pub mod compose;
pub mod config;
pub mod domain;
pub mod errors;
pub mod fixtures;
pub mod inference;
pub mod recommend;
pub mod session;
pub mod store;
pub mod taxonomy;

pub use compose::{compose, ProductDescription};
pub use config::{CategoryConfig, ConfigError, EngineConfig, PriceBand, TierConfig};
pub use domain::product::{Product, ProductId, RawProduct, SpecField};
pub use domain::recommendation::{MatchResult, Recommendation, RecommendationSet, Tier};
pub use domain::tag::{PreferenceSet, Tag, TagSet};
pub use errors::{ApplicationError, DomainError};
pub use inference::rules::{InferenceRule, Needle, Threshold};
pub use inference::{
    infer_tags, retag_category, tag_catalog, tag_product, HeuristicTagInference,
    TagInferenceEngine,
};
pub use recommend::scoring::{match_count, score_catalog};
pub use recommend::selector::select;
pub use recommend::tiering::classify;
pub use recommend::{DeterministicRecommendEngine, RecommendEngine, RecommendRequest};
pub use session::{SessionGate, SubmissionTicket};
pub use store::{CatalogStore, MemoryStore, StoreError, TaxonomyStore};
pub use taxonomy::TagTaxonomy;
