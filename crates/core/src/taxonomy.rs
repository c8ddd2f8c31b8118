//! Registry of legal tag values for one product category.
//!
//! Supplied by the external taxonomy store and read-only to this core. Tag
//! categories iterate in name order so every pass over a taxonomy is
//! deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::tag::Tag;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagTaxonomy {
    product_category: String,
    categories: BTreeMap<String, Vec<String>>,
}

impl TagTaxonomy {
    pub fn new(product_category: impl Into<String>) -> Self {
        Self { product_category: product_category.into(), categories: BTreeMap::new() }
    }

    pub fn with_category<I, S>(mut self, tag_category: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories
            .insert(tag_category.into(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn product_category(&self) -> &str {
        &self.product_category
    }

    /// Tag categories and their legal values, in name order.
    pub fn categories(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.categories.iter().map(|(name, values)| (name.as_str(), values.as_slice()))
    }

    pub fn legal_values(&self, tag_category: &str) -> Option<&[String]> {
        self.categories.get(tag_category).map(Vec::as_slice)
    }

    pub fn is_legal(&self, tag: &Tag) -> bool {
        self.legal_values(&tag.category)
            .is_some_and(|values| values.iter().any(|value| value == &tag.value))
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}
