use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::taxonomy::TagTaxonomy;

/// One attribute a product satisfies, scoped to a tag category from the taxonomy.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub category: String,
    pub value: String,
}

impl Tag {
    pub fn new(category: impl Into<String>, value: impl Into<String>) -> Self {
        Self { category: category.into(), value: value.into() }
    }
}

/// Set of tags with `(category, value)` uniqueness and deterministic iteration order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, tag: Tag) -> bool {
        self.0.insert(tag)
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    /// The value this set holds for a tag category, if any.
    pub fn value_for(&self, category: &str) -> Option<&str> {
        self.0.iter().find(|tag| tag.category == category).map(|tag| tag.value.as_str())
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Ordered questionnaire answers for one session.
///
/// Duplicates are tolerated and the submission order is preserved for display
/// consumers; scoring always goes through [`PreferenceSet::unique`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceSet {
    entries: Vec<Tag>,
}

impl PreferenceSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, tag: Tag) {
        self.entries.push(tag);
    }

    /// Resolve bare answer values from the form collaborator against a
    /// taxonomy. Values no taxonomy category claims (stale form options) are
    /// skipped and logged, not errors.
    pub fn from_answers<S: AsRef<str>>(answers: &[S], taxonomy: &TagTaxonomy) -> Self {
        let mut set = Self::new();
        for answer in answers {
            let answer = answer.as_ref();
            let tag = taxonomy.categories().find_map(|(category, values)| {
                values.iter().any(|v| v.as_str() == answer).then(|| Tag::new(category, answer))
            });
            match tag {
                Some(tag) => set.push(tag),
                None => {
                    tracing::debug!(value = answer, "answer value not in taxonomy, skipping");
                }
            }
        }
        set
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in submission order, duplicates included.
    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.entries.iter()
    }

    /// Deduplicated view used for scoring.
    pub fn unique(&self) -> BTreeSet<&Tag> {
        self.entries.iter().collect()
    }
}

impl FromIterator<Tag> for PreferenceSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self { entries: iter.into_iter().collect() }
    }
}
