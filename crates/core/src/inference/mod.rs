//! Tag Inference Engine.
//!
//! Derives exactly one tag per taxonomy category for a raw catalog record, by
//! evaluating the category's ordered rule chain (spec-field heuristics, free
//! text scan, price bucketing, explicit default) until one rule produces a
//! value. Pure and deterministic: the same record, taxonomy and rules always
//! yield the same tag set.

pub mod rules;

use crate::config::{CategoryConfig, ConfigError, EngineConfig};
use crate::domain::product::{Product, RawProduct};
use crate::domain::tag::{Tag, TagSet};
use crate::errors::{ApplicationError, DomainError};
use crate::recommend::tiering;
use crate::store::{CatalogStore, TaxonomyStore};
use crate::taxonomy::TagTaxonomy;

pub trait TagInferenceEngine: Send + Sync {
    fn infer_tags(
        &self,
        raw: &RawProduct,
        taxonomy: &TagTaxonomy,
        config: &CategoryConfig,
    ) -> Result<TagSet, DomainError>;
}

#[derive(Debug, Default)]
pub struct HeuristicTagInference;

impl TagInferenceEngine for HeuristicTagInference {
    fn infer_tags(
        &self,
        raw: &RawProduct,
        taxonomy: &TagTaxonomy,
        config: &CategoryConfig,
    ) -> Result<TagSet, DomainError> {
        infer_tags(raw, taxonomy, config)
    }
}

pub fn infer_tags(
    raw: &RawProduct,
    taxonomy: &TagTaxonomy,
    config: &CategoryConfig,
) -> Result<TagSet, DomainError> {
    let mut tags = TagSet::new();
    for (tag_category, legal_values) in taxonomy.categories() {
        let chain = config.rules.get(tag_category).map(Vec::as_slice).unwrap_or(&[]);

        let mut selected = None;
        for rule in chain {
            if let Some(value) = rule.apply(raw, legal_values) {
                if rule.is_default() {
                    tracing::trace!(
                        product = %raw.id.0,
                        tag_category,
                        "no heuristic matched, using configured default"
                    );
                }
                selected = Some(value);
                break;
            }
        }

        let value = selected.ok_or_else(|| DomainError::MissingDefaultRule {
            category: raw.category.clone(),
            tag_category: tag_category.to_owned(),
        })?;
        if !legal_values.iter().any(|legal| legal == &value) {
            return Err(DomainError::IllegalTagValue {
                tag_category: tag_category.to_owned(),
                value,
            });
        }
        tags.insert(Tag::new(tag_category, value));
    }
    Ok(tags)
}

/// Tag one raw record and assign its tier, producing a catalog-ready product.
pub fn tag_product(
    engine: &dyn TagInferenceEngine,
    raw: &RawProduct,
    taxonomy: &TagTaxonomy,
    config: &CategoryConfig,
) -> Result<Product, DomainError> {
    let tags = engine.infer_tags(raw, taxonomy, config)?;
    let mut product = Product {
        id: raw.id.clone(),
        name: raw.name.clone(),
        price: raw.price,
        category: raw.category.clone(),
        tier: raw.tier,
        tags,
        spec_fields: raw.spec_fields.clone(),
    };
    product.tier = tiering::classify(&product, &config.tier);
    Ok(product)
}

/// Ingest a batch of raw records. Each record is independent, so a caller may
/// split the batch across workers; this is the sequential reference path.
pub fn tag_catalog(
    engine: &dyn TagInferenceEngine,
    raws: &[RawProduct],
    taxonomy: &TagTaxonomy,
    config: &CategoryConfig,
) -> Result<Vec<Product>, DomainError> {
    raws.iter().map(|raw| tag_product(engine, raw, taxonomy, config)).collect()
}

/// Bulk re-tagging run over one category of the catalog store, for when the
/// taxonomy or the rule tables changed. Tag writes replace the previous set,
/// so re-running the job never accumulates duplicates.
pub fn retag_category(
    catalog: &dyn CatalogStore,
    taxonomies: &dyn TaxonomyStore,
    engine: &dyn TagInferenceEngine,
    config: &EngineConfig,
    category: &str,
) -> Result<usize, ApplicationError> {
    let category_config = config.category(category)?;
    let taxonomy = taxonomies
        .taxonomy(category)?
        .ok_or_else(|| ConfigError::MissingTaxonomy(category.to_owned()))?;
    let raws = catalog.fetch_raw(category)?;

    for raw in &raws {
        let tags = engine.infer_tags(raw, &taxonomy, category_config)?;
        catalog.store_tags(&raw.id, &tags)?;
    }
    tracing::debug!(category, retagged = raws.len(), "bulk re-tagging finished");
    Ok(raws.len())
}
