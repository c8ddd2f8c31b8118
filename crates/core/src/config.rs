//! Static per-category engine configuration.
//!
//! Category differences (match thresholds, tier bands, inference rule chains,
//! description fragments) are data loaded from a TOML document, not code.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::recommendation::Tier;
use crate::inference::rules::InferenceRule;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {reason}")]
    Read { path: String, reason: String },
    #[error("failed to parse config: {0}")]
    Parse(String),
    #[error("no configuration for product category {0:?}")]
    UnknownCategory(String),
    #[error("no taxonomy for product category {0:?}")]
    MissingTaxonomy(String),
    #[error("price bands {first:?} and {second:?} overlap for category {category}")]
    OverlappingBands { category: String, first: Tier, second: Tier },
    #[error("price band {tier:?} for category {category} is empty")]
    EmptyBand { category: String, tier: Tier },
    #[error("rule chain for {category}/{tag_category} does not end in a default rule")]
    UnterminatedRuleChain { category: String, tag_category: String },
    #[error("rule chain for {category}/{tag_category} has rules after the default")]
    MisplacedDefaultRule { category: String, tag_category: String },
}

/// Half-open price interval `[min, max)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: u32,
    pub max: u32,
}

impl PriceBand {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, price: u32) -> bool {
        price >= self.min && price < self.max
    }

    pub fn overlaps(&self, other: &PriceBand) -> bool {
        self.min < other.max && other.min < self.max
    }
}

/// How a category assigns tiers: read off the record, or derived from price.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TierConfig {
    /// Tier is an explicit field on the catalog record.
    Explicit,
    /// Tier is derived from price. Bands need not be contiguous or
    /// exhaustive (gaps produce unclassifiable products) but must not overlap.
    Bands { budget: PriceBand, mid: PriceBand, premium: PriceBand },
}

impl TierConfig {
    pub fn band(&self, tier: Tier) -> Option<&PriceBand> {
        match self {
            Self::Explicit => None,
            Self::Bands { budget, mid, premium } => Some(match tier {
                Tier::Budget => budget,
                Tier::Mid => mid,
                Tier::Premium => premium,
            }),
        }
    }

    fn validate(&self, category: &str) -> Result<(), ConfigError> {
        let Self::Bands { .. } = self else {
            return Ok(());
        };

        let bands: Vec<(Tier, &PriceBand)> = Tier::ORDER
            .iter()
            .filter_map(|tier| self.band(*tier).map(|band| (*tier, band)))
            .collect();

        for (tier, band) in &bands {
            if band.min >= band.max {
                return Err(ConfigError::EmptyBand { category: category.to_owned(), tier: *tier });
            }
        }
        for (index, (first, band)) in bands.iter().enumerate() {
            for (second, other) in &bands[index + 1..] {
                if band.overlaps(other) {
                    return Err(ConfigError::OverlappingBands {
                        category: category.to_owned(),
                        first: *first,
                        second: *second,
                    });
                }
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CategoryConfig {
    /// Inclusive minimum match count a product must reach to stay a candidate.
    pub min_match: usize,
    pub tier: TierConfig,
    /// Ordered inference rule chain per tag category.
    #[serde(default)]
    pub rules: BTreeMap<String, Vec<InferenceRule>>,
    /// Description fragments: tag category -> tag value -> fragment.
    #[serde(default)]
    pub fragments: BTreeMap<String, BTreeMap<String, String>>,
    /// Spec field names surfaced as supplementary facts by the composer.
    #[serde(default)]
    pub fact_fields: Vec<String>,
}

impl CategoryConfig {
    pub fn new(min_match: usize, tier: TierConfig) -> Self {
        Self {
            min_match,
            tier,
            rules: BTreeMap::new(),
            fragments: BTreeMap::new(),
            fact_fields: Vec::new(),
        }
    }

    pub fn with_rules(
        mut self,
        tag_category: impl Into<String>,
        chain: Vec<InferenceRule>,
    ) -> Self {
        self.rules.insert(tag_category.into(), chain);
        self
    }

    pub fn with_fragment(
        mut self,
        tag_category: impl Into<String>,
        value: impl Into<String>,
        fragment: impl Into<String>,
    ) -> Self {
        self.fragments
            .entry(tag_category.into())
            .or_default()
            .insert(value.into(), fragment.into());
        self
    }

    pub fn with_fact_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fact_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    fn validate(&self, category: &str) -> Result<(), ConfigError> {
        self.tier.validate(category)?;
        for (tag_category, chain) in &self.rules {
            let default_position = chain.iter().position(InferenceRule::is_default);
            match default_position {
                None => {
                    return Err(ConfigError::UnterminatedRuleChain {
                        category: category.to_owned(),
                        tag_category: tag_category.clone(),
                    })
                }
                Some(position) if position + 1 != chain.len() => {
                    return Err(ConfigError::MisplacedDefaultRule {
                        category: category.to_owned(),
                        tag_category: tag_category.clone(),
                    })
                }
                Some(_) => {}
            }
        }
        Ok(())
    }
}

/// Registry of category configurations, the engine's only configuration input.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    categories: BTreeMap<String, CategoryConfig>,
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, name: impl Into<String>, config: CategoryConfig) -> Self {
        self.categories.insert(name.into(), config);
        self
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(raw).map_err(|error| ConfigError::Parse(error.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|error| ConfigError::Read {
            path: path.display().to_string(),
            reason: error.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Lookup a category's configuration. Missing configuration is fatal for
    /// that category's computation, never silently defaulted.
    pub fn category(&self, name: &str) -> Result<&CategoryConfig, ConfigError> {
        self.categories.get(name).ok_or_else(|| ConfigError::UnknownCategory(name.to_owned()))
    }

    pub fn categories(&self) -> impl Iterator<Item = (&str, &CategoryConfig)> {
        self.categories.iter().map(|(name, config)| (name.as_str(), config))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, category) in &self.categories {
            category.validate(name)?;
        }
        Ok(())
    }
}
