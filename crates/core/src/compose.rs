//! Description Composer.
//!
//! Turns a selected recommendation into display-ready sentence fragments via
//! the category's static lookup table. Only the contract is fixed here; the
//! wording lives in configuration. Preference tags without a fragment entry
//! are omitted, never an error.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::config::CategoryConfig;
use crate::domain::recommendation::Recommendation;
use crate::domain::tag::{PreferenceSet, Tag};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDescription {
    /// Fragments for preference tags the product satisfies.
    pub matched: Vec<String>,
    /// Fragments for preference tags the product lacks.
    pub missing: Vec<String>,
    /// Category-specific supplementary facts (e.g. energy class).
    pub facts: Vec<String>,
}

/// Compose fragments for one recommendation. Fragments follow the submission
/// order of the preference set, which is the only place that order matters.
pub fn compose(
    recommendation: &Recommendation,
    preferences: &PreferenceSet,
    config: &CategoryConfig,
) -> ProductDescription {
    let mut description = ProductDescription::default();
    let mut seen: BTreeSet<&Tag> = BTreeSet::new();

    for tag in preferences.iter() {
        if !seen.insert(tag) {
            continue;
        }
        let fragment =
            config.fragments.get(&tag.category).and_then(|values| values.get(&tag.value));
        let Some(fragment) = fragment else {
            continue;
        };
        if recommendation.product.tags.contains(tag) {
            description.matched.push(fragment.clone());
        } else {
            description.missing.push(fragment.clone());
        }
    }

    for field_name in &config.fact_fields {
        let field = recommendation
            .product
            .spec_fields
            .iter()
            .find(|field| field.name.eq_ignore_ascii_case(field_name));
        if let Some(field) = field {
            description.facts.push(format!("{}: {}", field.name, field.text()));
        }
    }

    description
}

#[cfg(test)]
mod tests {
    use super::compose;
    use crate::domain::recommendation::{Recommendation, Tier};
    use crate::domain::tag::Tag;
    use crate::fixtures;

    #[test]
    fn splits_fragments_into_matched_and_missing() {
        let catalog = fixtures::dishwasher_catalog();
        let mid = catalog.iter().find(|p| p.id.0 == "dw-mid-520").expect("mid seed").clone();
        let recommendation = Recommendation { tier: Tier::Mid, product: mid, match_count: 3 };
        let config = fixtures::dishwasher_config();

        let description = compose(&recommendation, &fixtures::family_preferences(), &config);

        // The mid seed matches household, glass and usage but not the wanted
        // noise value. Its noise value has no fragment entry at all, and the
        // wanted noise value shows up under missing.
        assert_eq!(description.matched.len(), 3);
        assert_eq!(description.missing.len(), 1);
        assert!(description.missing[0].contains("open kitchen"));
    }

    #[test]
    fn missing_fragment_entries_are_omitted() {
        let catalog = fixtures::dishwasher_catalog();
        let budget =
            catalog.iter().find(|p| p.id.0 == "dw-budget-310").expect("budget seed").clone();
        let recommendation = Recommendation { tier: Tier::Budget, product: budget, match_count: 4 };
        let mut config = fixtures::dishwasher_config();
        config.fragments.clear();

        let description = compose(&recommendation, &fixtures::family_preferences(), &config);
        assert!(description.matched.is_empty());
        assert!(description.missing.is_empty());
    }

    #[test]
    fn facts_come_from_configured_spec_fields() {
        let catalog = fixtures::dishwasher_catalog();
        let budget =
            catalog.iter().find(|p| p.id.0 == "dw-budget-310").expect("budget seed").clone();
        let recommendation = Recommendation { tier: Tier::Budget, product: budget, match_count: 4 };

        let description = compose(
            &recommendation,
            &fixtures::family_preferences(),
            &fixtures::dishwasher_config(),
        );
        assert_eq!(
            description.facts,
            vec!["Energy class: B".to_owned(), "Noise level: 42 dB".to_owned()]
        );
    }

    #[test]
    fn duplicate_preferences_emit_one_fragment() {
        let catalog = fixtures::dishwasher_catalog();
        let budget =
            catalog.iter().find(|p| p.id.0 == "dw-budget-310").expect("budget seed").clone();
        let recommendation = Recommendation { tier: Tier::Budget, product: budget, match_count: 4 };

        let mut preferences = fixtures::family_preferences();
        preferences.push(Tag::new("household", "family"));

        let description =
            compose(&recommendation, &preferences, &fixtures::dishwasher_config());
        assert_eq!(description.matched.len(), 4);
    }
}
