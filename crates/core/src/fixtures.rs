//! Seed data for tests and in-process demos.
//!
//! The dishwasher seeds reproduce the canonical selection scenario: a clear
//! budget winner, one survivor each in mid and premium, a product below the
//! match threshold and a product priced inside the band gap.

use crate::config::{CategoryConfig, EngineConfig, PriceBand, TierConfig};
use crate::domain::product::{Product, ProductId, SpecField};
use crate::domain::recommendation::Tier;
use crate::domain::tag::{PreferenceSet, Tag, TagSet};
use crate::inference::rules::{InferenceRule, Needle, Threshold};
use crate::store::{MemoryStore, StoreError};
use crate::taxonomy::TagTaxonomy;

struct ProductSeed {
    id: &'static str,
    name: &'static str,
    price: u32,
    category: &'static str,
    tier: Option<Tier>,
    tags: &'static [(&'static str, &'static str)],
    specs: &'static [(&'static str, &'static str)],
}

const DISHWASHER_SEEDS: &[ProductSeed] = &[
    ProductSeed {
        id: "dw-budget-310",
        name: "AquaLine 310",
        price: 3200,
        category: "dishwasher",
        tier: None,
        tags: &[
            ("household", "family"),
            ("glass", "PerfectGlassCare"),
            ("usage", "all"),
            ("noise", "kitchen-living"),
        ],
        specs: &[("Energy class", "B"), ("Noise level", "42 dB")],
    },
    ProductSeed {
        id: "dw-budget-210",
        name: "AquaLine 210",
        price: 3000,
        category: "dishwasher",
        tier: None,
        tags: &[
            ("household", "couple"),
            ("glass", "standard"),
            ("usage", "all"),
            ("noise", "kitchen-living"),
        ],
        specs: &[("Energy class", "D"), ("Noise level", "44 dB")],
    },
    ProductSeed {
        id: "dw-mid-520",
        name: "AquaLine 520",
        price: 5000,
        category: "dishwasher",
        tier: None,
        tags: &[
            ("household", "family"),
            ("glass", "PerfectGlassCare"),
            ("usage", "all"),
            ("noise", "closed-kitchen"),
        ],
        specs: &[("Energy class", "B"), ("Noise level", "46 dB")],
    },
    ProductSeed {
        id: "dw-gap-700",
        name: "AquaLine 700",
        price: 6800,
        category: "dishwasher",
        tier: None,
        tags: &[
            ("household", "family"),
            ("glass", "PerfectGlassCare"),
            ("usage", "all"),
            ("noise", "kitchen-living"),
        ],
        specs: &[("Energy class", "A"), ("Noise level", "41 dB")],
    },
    ProductSeed {
        id: "dw-premium-900",
        name: "AquaLine 900",
        price: 7500,
        category: "dishwasher",
        tier: None,
        tags: &[
            ("household", "family"),
            ("glass", "standard"),
            ("usage", "all"),
            ("noise", "kitchen-living"),
        ],
        specs: &[("Energy class", "A"), ("Noise level", "39 dB")],
    },
];

const OVEN_SEEDS: &[ProductSeed] = &[
    ProductSeed {
        id: "oven-basic-100",
        name: "BakeMaster 100",
        price: 2999,
        category: "oven",
        tier: Some(Tier::Budget),
        tags: &[("cooking_skill", "low"), ("steam", "no")],
        specs: &[("Energy class", "A")],
    },
    ProductSeed {
        id: "oven-steam-400",
        name: "BakeMaster 400 Steam",
        price: 5999,
        category: "oven",
        tier: Some(Tier::Mid),
        tags: &[("cooking_skill", "medium"), ("steam", "yes")],
        specs: &[("Energy class", "A+")],
    },
    ProductSeed {
        id: "oven-pro-800",
        name: "BakeMaster 800 Pro",
        price: 9999,
        category: "oven",
        tier: Some(Tier::Premium),
        tags: &[("cooking_skill", "high"), ("steam", "yes")],
        specs: &[("Energy class", "A++")],
    },
];

fn build(seed: &ProductSeed) -> Product {
    Product {
        id: ProductId(seed.id.to_owned()),
        name: seed.name.to_owned(),
        price: seed.price,
        category: seed.category.to_owned(),
        tier: seed.tier,
        tags: seed
            .tags
            .iter()
            .map(|(category, value)| Tag::new(*category, *value))
            .collect::<TagSet>(),
        spec_fields: seed
            .specs
            .iter()
            .map(|(name, value)| SpecField::new(*name, *value))
            .collect(),
    }
}

pub fn dishwasher_catalog() -> Vec<Product> {
    DISHWASHER_SEEDS.iter().map(build).collect()
}

pub fn oven_catalog() -> Vec<Product> {
    OVEN_SEEDS.iter().map(build).collect()
}

pub fn dishwasher_taxonomy() -> TagTaxonomy {
    TagTaxonomy::new("dishwasher")
        .with_category("household", ["single", "couple", "family"])
        .with_category("glass", ["standard", "PerfectGlassCare"])
        .with_category("usage", ["daily", "all"])
        .with_category("noise", ["kitchen-living", "closed-kitchen"])
}

pub fn oven_taxonomy() -> TagTaxonomy {
    TagTaxonomy::new("oven")
        .with_category("cooking_skill", ["low", "medium", "high"])
        .with_category("steam", ["yes", "no"])
}

pub fn dishwasher_config() -> CategoryConfig {
    CategoryConfig::new(
        3,
        TierConfig::Bands {
            budget: PriceBand::new(0, 3500),
            mid: PriceBand::new(3500, 6500),
            premium: PriceBand::new(7000, 40001),
        },
    )
    .with_rules(
        "noise",
        vec![
            InferenceRule::SpecNumeric {
                field_keywords: vec!["noise".to_owned()],
                thresholds: vec![Threshold { limit: 42.0, value: "kitchen-living".to_owned() }],
                fallback: "closed-kitchen".to_owned(),
            },
            InferenceRule::Default { value: "closed-kitchen".to_owned() },
        ],
    )
    .with_rules(
        "glass",
        vec![InferenceRule::TextScan, InferenceRule::Default { value: "standard".to_owned() }],
    )
    .with_rules(
        "household",
        vec![InferenceRule::TextScan, InferenceRule::Default { value: "couple".to_owned() }],
    )
    .with_rules(
        "usage",
        vec![
            InferenceRule::SpecText {
                field_keywords: vec!["programme".to_owned()],
                needles: vec![Needle { contains: "auto".to_owned(), value: "all".to_owned() }],
            },
            InferenceRule::Default { value: "daily".to_owned() },
        ],
    )
    .with_fragment("household", "family", "has room for a full family load")
    .with_fragment("glass", "PerfectGlassCare", "treats delicate glassware gently")
    .with_fragment("usage", "all", "handles everything from pots to fine china")
    .with_fragment("noise", "kitchen-living", "quiet enough for an open kitchen-living space")
    .with_fact_fields(["Energy class", "Noise level"])
}

pub fn oven_config() -> CategoryConfig {
    CategoryConfig::new(1, TierConfig::Explicit)
        .with_rules(
            "cooking_skill",
            vec![
                InferenceRule::PriceBucket {
                    low_below: 3500,
                    high_from: 7000,
                    low: "low".to_owned(),
                    mid: "medium".to_owned(),
                    high: "high".to_owned(),
                },
                InferenceRule::Default { value: "medium".to_owned() },
            ],
        )
        .with_rules(
            "steam",
            vec![InferenceRule::TextScan, InferenceRule::Default { value: "no".to_owned() }],
        )
        .with_fragment("steam", "yes", "comes with a steam cooking function")
        .with_fact_fields(["Energy class"])
}

pub fn engine_config() -> EngineConfig {
    EngineConfig::new()
        .with_category("dishwasher", dishwasher_config())
        .with_category("oven", oven_config())
}

/// The canonical questionnaire outcome: family household, glass care,
/// mixed usage, open kitchen-living room.
pub fn family_preferences() -> PreferenceSet {
    [
        Tag::new("household", "family"),
        Tag::new("glass", "PerfectGlassCare"),
        Tag::new("usage", "all"),
        Tag::new("noise", "kitchen-living"),
    ]
    .into_iter()
    .collect()
}

pub fn single_preference() -> PreferenceSet {
    [Tag::new("usage", "all")].into_iter().collect()
}

/// Memory store pre-seeded with both categories' products and taxonomies.
pub fn seeded_store() -> Result<MemoryStore, StoreError> {
    let store = MemoryStore::new();
    for product in dishwasher_catalog().into_iter().chain(oven_catalog()) {
        store.insert_product(product)?;
    }
    store.insert_taxonomy(dishwasher_taxonomy())?;
    store.insert_taxonomy(oven_taxonomy())?;
    Ok(store)
}
