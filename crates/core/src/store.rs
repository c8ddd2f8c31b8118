//! Collaborator seams to the external catalog and taxonomy stores.
//!
//! The core never owns persistence. It consumes snapshots through these
//! traits and propagates fetch failures unchanged instead of computing on
//! partial data. [`MemoryStore`] is the in-process implementation used by
//! fixtures and tests.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use thiserror::Error;

use crate::domain::product::{Product, ProductId, RawProduct};
use crate::domain::tag::TagSet;
use crate::taxonomy::TagTaxonomy;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store returned malformed data: {0}")]
    Malformed(String),
}

pub trait CatalogStore: Send + Sync {
    /// Tagged products of one category. Treated as an immutable snapshot for
    /// the duration of one computation.
    fn fetch_category(&self, category: &str) -> Result<Vec<Product>, StoreError>;

    /// Raw catalog records of one category, input to (re-)tagging runs.
    fn fetch_raw(&self, category: &str) -> Result<Vec<RawProduct>, StoreError>;

    /// Replace a product's tag set wholesale. Replacement, never append,
    /// keeps bulk re-tagging idempotent.
    fn store_tags(&self, id: &ProductId, tags: &TagSet) -> Result<(), StoreError>;
}

pub trait TaxonomyStore: Send + Sync {
    /// `Ok(None)` means the category has no taxonomy entry; callers surface
    /// that as a configuration error, distinct from a fetch failure.
    fn taxonomy(&self, category: &str) -> Result<Option<TagTaxonomy>, StoreError>;
}

/// In-memory store for tests, fixtures and single-process embedding.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    products: Vec<Product>,
    raws: Vec<RawProduct>,
    taxonomies: BTreeMap<String, TagTaxonomy>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_product(&self, product: Product) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.products.retain(|existing| existing.id != product.id);
        inner.products.push(product);
        Ok(())
    }

    pub fn insert_raw(&self, raw: RawProduct) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.raws.retain(|existing| existing.id != raw.id);
        inner.raws.push(raw);
        Ok(())
    }

    pub fn insert_taxonomy(&self, taxonomy: TagTaxonomy) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        inner.taxonomies.insert(taxonomy.product_category().to_owned(), taxonomy);
        Ok(())
    }

    pub fn product(&self, id: &ProductId) -> Result<Option<Product>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.products.iter().find(|product| &product.id == id).cloned())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>, StoreError> {
        self.inner.lock().map_err(|_| StoreError::Unavailable("memory store poisoned".to_owned()))
    }
}

impl CatalogStore for MemoryStore {
    fn fetch_category(&self, category: &str) -> Result<Vec<Product>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.products.iter().filter(|product| product.category == category).cloned().collect())
    }

    fn fetch_raw(&self, category: &str) -> Result<Vec<RawProduct>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.raws.iter().filter(|raw| raw.category == category).cloned().collect())
    }

    fn store_tags(&self, id: &ProductId, tags: &TagSet) -> Result<(), StoreError> {
        let mut inner = self.lock()?;
        if let Some(product) = inner.products.iter_mut().find(|product| &product.id == id) {
            product.tags = tags.clone();
            return Ok(());
        }

        // First tagging run: materialize the product from its raw record.
        let Some(raw) = inner.raws.iter().find(|raw| &raw.id == id).cloned() else {
            return Err(StoreError::Malformed(format!("unknown product id {}", id.0)));
        };
        inner.products.push(Product {
            id: raw.id,
            name: raw.name,
            price: raw.price,
            category: raw.category,
            tier: raw.tier,
            tags: tags.clone(),
            spec_fields: raw.spec_fields,
        });
        Ok(())
    }
}

impl TaxonomyStore for MemoryStore {
    fn taxonomy(&self, category: &str) -> Result<Option<TagTaxonomy>, StoreError> {
        let inner = self.lock()?;
        Ok(inner.taxonomies.get(category).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::{CatalogStore, MemoryStore, StoreError, TaxonomyStore};
    use crate::domain::product::{ProductId, RawProduct};
    use crate::domain::tag::{Tag, TagSet};
    use crate::taxonomy::TagTaxonomy;

    fn raw(id: &str, category: &str) -> RawProduct {
        RawProduct {
            id: ProductId(id.to_owned()),
            name: id.to_owned(),
            price: 4000,
            category: category.to_owned(),
            tier: None,
            short_description: String::new(),
            bullet_points: Vec::new(),
            spec_fields: Vec::new(),
        }
    }

    #[test]
    fn storing_tags_twice_is_idempotent() {
        let store = MemoryStore::new();
        store.insert_raw(raw("dw-1", "dishwasher")).expect("insert raw");

        let tags: TagSet = [Tag::new("noise", "kitchen-living")].into_iter().collect();
        store.store_tags(&ProductId("dw-1".to_owned()), &tags).expect("first write");
        store.store_tags(&ProductId("dw-1".to_owned()), &tags).expect("second write");

        let products = store.fetch_category("dishwasher").expect("fetch");
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].tags, tags);
    }

    #[test]
    fn storing_tags_replaces_rather_than_appends() {
        let store = MemoryStore::new();
        store.insert_raw(raw("dw-1", "dishwasher")).expect("insert raw");

        let first: TagSet = [Tag::new("noise", "closed-kitchen")].into_iter().collect();
        let second: TagSet = [Tag::new("noise", "kitchen-living")].into_iter().collect();
        store.store_tags(&ProductId("dw-1".to_owned()), &first).expect("first write");
        store.store_tags(&ProductId("dw-1".to_owned()), &second).expect("second write");

        let product = store.product(&ProductId("dw-1".to_owned())).expect("read").expect("exists");
        assert_eq!(product.tags, second);
        assert_eq!(product.tags.len(), 1);
    }

    #[test]
    fn unknown_product_ids_are_rejected() {
        let store = MemoryStore::new();
        let tags = TagSet::new();
        let result = store.store_tags(&ProductId("missing".to_owned()), &tags);
        assert!(matches!(result, Err(StoreError::Malformed(_))));
    }

    #[test]
    fn absent_taxonomy_is_none_not_an_error() {
        let store = MemoryStore::new();
        store
            .insert_taxonomy(TagTaxonomy::new("dishwasher").with_category("noise", ["quiet"]))
            .expect("insert taxonomy");

        assert!(store.taxonomy("dishwasher").expect("read").is_some());
        assert!(store.taxonomy("fridge").expect("read").is_none());
    }
}
