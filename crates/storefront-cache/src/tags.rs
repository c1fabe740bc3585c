//! CDN cache tags.
//!
//! A cache tag labels a cached response so the CDN can purge every response
//! that shares it. Tags have the grammar `pid_<id>`, `cid_<id>` or the literal
//! `collections_metadata`, and are sent comma-separated without whitespace.

use serde::{Deserialize, Serialize};

use crate::ids::{CollectionId, ProductId};

/// Separator used when joining tags into a single header value.
pub const TAG_SEPARATOR: &str = ",";

/// Tag emitted when collection metadata changed.
pub const COLLECTIONS_METADATA_TAG: &str = "collections_metadata";

/// Tag for a single product.
pub fn for_product(product_id: impl AsRef<str>) -> String {
    format!("pid_{}", product_id.as_ref())
}

/// Tag for a single collection.
pub fn for_collection(collection_id: impl AsRef<str>) -> String {
    format!("cid_{}", collection_id.as_ref())
}

/// Tag covering metadata of all collections.
pub fn for_collections_metadata() -> String {
    COLLECTIONS_METADATA_TAG.to_string()
}

/// The content a response depends on, used to derive its cache tags.
///
/// Identifier lists are passed through as given: no deduplication, no sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CacheTagOptions {
    /// Products rendered in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_ids: Option<Vec<ProductId>>,
    /// Collections rendered in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_ids: Option<Vec<CollectionId>>,
    /// Whether the response depends on collection metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections_metadata_was_modified: Option<bool>,
}

impl CacheTagOptions {
    /// Create empty tag options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product.
    pub fn with_product(mut self, id: impl Into<ProductId>) -> Self {
        self.product_ids.get_or_insert_with(Vec::new).push(id.into());
        self
    }

    /// Add several products.
    pub fn with_products<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<ProductId>,
    {
        self.product_ids
            .get_or_insert_with(Vec::new)
            .extend(ids.into_iter().map(Into::into));
        self
    }

    /// Add a collection.
    pub fn with_collection(mut self, id: impl Into<CollectionId>) -> Self {
        self.collection_ids.get_or_insert_with(Vec::new).push(id.into());
        self
    }

    /// Add several collections.
    pub fn with_collections<I, T>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<CollectionId>,
    {
        self.collection_ids
            .get_or_insert_with(Vec::new)
            .extend(ids.into_iter().map(Into::into));
        self
    }

    /// Mark collection metadata as modified.
    pub fn collections_metadata_modified(mut self) -> Self {
        self.collections_metadata_was_modified = Some(true);
        self
    }

    /// Tag strings in order: products, then collections, then the metadata tag.
    pub fn to_values(&self) -> Vec<String> {
        let mut values = Vec::new();

        if let Some(ids) = self.product_ids.as_deref().filter(|ids| !ids.is_empty()) {
            values.extend(ids.iter().map(for_product));
        }

        if let Some(ids) = self.collection_ids.as_deref().filter(|ids| !ids.is_empty()) {
            values.extend(ids.iter().map(for_collection));
        }

        if self.collections_metadata_was_modified.unwrap_or(false) {
            values.push(for_collections_metadata());
        }

        values
    }

    /// Joined `cache-tag` header value, or `None` when there are no tags.
    pub fn to_header_value(&self) -> Option<String> {
        let values = self.to_values();
        if values.is_empty() {
            None
        } else {
            Some(values.join(TAG_SEPARATOR))
        }
    }
}
