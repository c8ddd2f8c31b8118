use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::recommendation::Tier;
use crate::domain::tag::TagSet;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub String);

/// One row of a product's structured specification table. Scraped values are a
/// mix of numbers and annotated strings ("42 dB"), so the value stays loose.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpecField {
    pub name: String,
    pub value: Value,
}

impl SpecField {
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { name: name.into(), value: value.into() }
    }

    /// Numeric reading of the field, accepting plain numbers and strings with
    /// a leading number and trailing unit text.
    pub fn numeric(&self) -> Option<f64> {
        match &self.value {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => parse_leading_number(text),
            _ => None,
        }
    }

    /// Text reading of the field, for substring scans.
    pub fn text(&self) -> String {
        match &self.value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }
}

fn parse_leading_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_start();
    let end = trimmed
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || *c == '.' || *c == ',')
        .last()
        .map(|(index, c)| index + c.len_utf8())?;
    trimmed[..end].replace(',', ".").parse().ok()
}

/// An untagged catalog record as it arrives from the external store, before
/// tag inference runs over it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RawProduct {
    pub id: ProductId,
    pub name: String,
    pub price: u32,
    pub category: String,
    pub tier: Option<Tier>,
    pub short_description: String,
    pub bullet_points: Vec<String>,
    pub spec_fields: Vec<SpecField>,
}

/// A tagged catalog record. After ingestion the tag set is non-empty and the
/// tier, when absent, is derivable from price via the category's bands.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: u32,
    pub category: String,
    pub tier: Option<Tier>,
    pub tags: TagSet,
    pub spec_fields: Vec<SpecField>,
}
