//! Registrable tag-inference rules.
//!
//! Each tag category of a product category carries an ordered rule chain,
//! evaluated top to bottom until one rule produces a value. The chains are
//! plain data (loadable from the engine's TOML config), so category
//! differences live in configuration rather than branching code, and every
//! rule is unit-testable on its own.

use serde::{Deserialize, Serialize};

use crate::domain::product::{RawProduct, SpecField};

/// One step of a numeric threshold ladder: the first entry whose `limit` is
/// greater than or equal to the parsed number wins.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Threshold {
    pub limit: f64,
    pub value: String,
}

/// Case-insensitive needle mapped to a tag value.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Needle {
    pub contains: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InferenceRule {
    /// Parse a keyword-matched spec field numerically and map it through an
    /// ordered threshold ladder (e.g. noise <= 42 dB => "quiet"). `fallback`
    /// covers numbers above every limit.
    SpecNumeric { field_keywords: Vec<String>, thresholds: Vec<Threshold>, fallback: String },
    /// Scan keyword-matched spec fields for configured needles.
    SpecText { field_keywords: Vec<String>, needles: Vec<Needle> },
    /// Scan name, short description and bullet points for any of the
    /// category's legal values, in legal-value order.
    TextScan,
    /// Price-correlated default: below `low_below` => `low`, from `high_from`
    /// upwards => `high`, `mid` in between. Always produces a value.
    PriceBucket { low_below: u32, high_from: u32, low: String, mid: String, high: String },
    /// Explicit per-category last resort. Every chain must end with one.
    Default { value: String },
}

impl InferenceRule {
    pub fn is_default(&self) -> bool {
        matches!(self, Self::Default { .. })
    }

    /// Evaluate this rule against one raw record. `None` means the rule did
    /// not match and evaluation falls through to the next rule in the chain.
    pub fn apply(&self, raw: &RawProduct, legal_values: &[String]) -> Option<String> {
        match self {
            Self::SpecNumeric { field_keywords, thresholds, fallback } => {
                let number =
                    matching_fields(raw, field_keywords).find_map(|field| field.numeric())?;
                let value = thresholds
                    .iter()
                    .find(|threshold| number <= threshold.limit)
                    .map(|threshold| threshold.value.clone())
                    .unwrap_or_else(|| fallback.clone());
                Some(value)
            }
            Self::SpecText { field_keywords, needles } => needles.iter().find_map(|needle| {
                let wanted = needle.contains.to_lowercase();
                matching_fields(raw, field_keywords)
                    .any(|field| field.text().to_lowercase().contains(&wanted))
                    .then(|| needle.value.clone())
            }),
            Self::TextScan => {
                let haystack = free_text(raw);
                legal_values
                    .iter()
                    .find(|value| haystack.contains(&value.to_lowercase()))
                    .cloned()
            }
            Self::PriceBucket { low_below, high_from, low, mid, high } => {
                let value = if raw.price < *low_below {
                    low
                } else if raw.price >= *high_from {
                    high
                } else {
                    mid
                };
                Some(value.clone())
            }
            Self::Default { value } => Some(value.clone()),
        }
    }
}

/// Spec fields whose name contains any of the keywords, case-insensitively.
fn matching_fields<'a>(
    raw: &'a RawProduct,
    keywords: &'a [String],
) -> impl Iterator<Item = &'a SpecField> {
    raw.spec_fields.iter().filter(move |field| {
        let name = field.name.to_lowercase();
        keywords.iter().any(|keyword| name.contains(&keyword.to_lowercase()))
    })
}

fn free_text(raw: &RawProduct) -> String {
    let mut haystack = String::new();
    haystack.push_str(&raw.name);
    haystack.push('\n');
    haystack.push_str(&raw.short_description);
    for bullet in &raw.bullet_points {
        haystack.push('\n');
        haystack.push_str(bullet);
    }
    haystack.to_lowercase()
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{InferenceRule, Needle, Threshold};
    use crate::domain::product::{ProductId, RawProduct, SpecField};

    fn raw(price: u32, spec_fields: Vec<SpecField>) -> RawProduct {
        RawProduct {
            id: ProductId("dw-test".to_owned()),
            name: "SilentWash 700".to_owned(),
            price,
            category: "dishwasher".to_owned(),
            tier: None,
            short_description: "Quiet full-size dishwasher with PerfectGlassCare rack".to_owned(),
            bullet_points: vec!["Suited for family use".to_owned()],
            spec_fields,
        }
    }

    #[test]
    fn spec_numeric_maps_through_the_threshold_ladder() {
        let rule = InferenceRule::SpecNumeric {
            field_keywords: vec!["noise".to_owned()],
            thresholds: vec![
                Threshold { limit: 42.0, value: "kitchen-living".to_owned() },
                Threshold { limit: 46.0, value: "closed-kitchen".to_owned() },
            ],
            fallback: "utility-room".to_owned(),
        };

        let quiet = raw(4000, vec![SpecField::new("Noise level", json!("41 dB"))]);
        assert_eq!(rule.apply(&quiet, &[]), Some("kitchen-living".to_owned()));

        let boundary = raw(4000, vec![SpecField::new("Noise level", json!(42))]);
        assert_eq!(rule.apply(&boundary, &[]), Some("kitchen-living".to_owned()));

        let loud = raw(4000, vec![SpecField::new("Noise level", json!("49 dB"))]);
        assert_eq!(rule.apply(&loud, &[]), Some("utility-room".to_owned()));
    }

    #[test]
    fn spec_numeric_falls_through_without_a_matching_numeric_field() {
        let rule = InferenceRule::SpecNumeric {
            field_keywords: vec!["noise".to_owned()],
            thresholds: vec![Threshold { limit: 42.0, value: "kitchen-living".to_owned() }],
            fallback: "utility-room".to_owned(),
        };

        let no_field = raw(4000, vec![SpecField::new("Energy class", json!("B"))]);
        assert_eq!(rule.apply(&no_field, &[]), None);

        let non_numeric = raw(4000, vec![SpecField::new("Noise level", json!("very low"))]);
        assert_eq!(rule.apply(&non_numeric, &[]), None);
    }

    #[test]
    fn spec_text_respects_needle_priority_order() {
        let rule = InferenceRule::SpecText {
            field_keywords: vec!["programme".to_owned()],
            needles: vec![
                Needle { contains: "auto".to_owned(), value: "all".to_owned() },
                Needle { contains: "eco".to_owned(), value: "daily".to_owned() },
            ],
        };

        let record = raw(
            4000,
            vec![SpecField::new("Programmes", json!("Eco 50, Auto 45-65, Intensive"))],
        );
        assert_eq!(rule.apply(&record, &[]), Some("all".to_owned()));
    }

    #[test]
    fn text_scan_finds_legal_values_case_insensitively() {
        let legal = vec!["WaterShield".to_owned(), "PerfectGlassCare".to_owned()];
        let record = raw(4000, Vec::new());
        assert_eq!(
            InferenceRule::TextScan.apply(&record, &legal),
            Some("PerfectGlassCare".to_owned())
        );
        assert_eq!(InferenceRule::TextScan.apply(&record, &[]), None);
    }

    #[test]
    fn price_bucket_always_produces_a_value() {
        let rule = InferenceRule::PriceBucket {
            low_below: 3500,
            high_from: 7000,
            low: "short".to_owned(),
            mid: "medium".to_owned(),
            high: "long".to_owned(),
        };

        assert_eq!(rule.apply(&raw(3499, Vec::new()), &[]), Some("short".to_owned()));
        assert_eq!(rule.apply(&raw(3500, Vec::new()), &[]), Some("medium".to_owned()));
        assert_eq!(rule.apply(&raw(7000, Vec::new()), &[]), Some("long".to_owned()));
    }
}
