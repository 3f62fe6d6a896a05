use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use async_trait::async_trait;
use ongkir_common::ShippingRate;

use crate::r#trait::RateStore;

type Collections = HashMap<String, HashMap<String, ShippingRate>>;

/// In-memory override store
///
/// Records are kept in a `collection -> key -> rate` map behind an `RwLock`.
/// Clones share the same underlying map, so a handle kept by a test can
/// modify the overrides a resolver sees.
///
/// # Performance
/// - Get: O(1) - two `HashMap` lookups + record clone
/// - Insert/Remove: O(1)
/// - Len: O(c) in the number of collections
#[derive(Debug, Clone, Default)]
pub struct MemoryRateStore {
    pub(crate) collections: Arc<RwLock<Collections>>,
}

impl MemoryRateStore {
    /// Create a new empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with records for a single collection
    ///
    /// # Examples
    /// ```ignore
    /// let store = MemoryRateStore::with_records(
    ///     "shipping_rates",
    ///     [("東京都".to_string(), ShippingRate::new("東京都", 500, "1 hari"))],
    /// );
    /// ```
    #[must_use]
    pub fn with_records(
        collection: impl Into<String>,
        records: impl IntoIterator<Item = (String, ShippingRate)>,
    ) -> Self {
        let mut collections = Collections::new();
        collections.insert(collection.into(), records.into_iter().collect());

        Self {
            collections: Arc::new(RwLock::new(collections)),
        }
    }

    /// Store `rate` under `key`, returning the record it replaced
    ///
    /// # Errors
    /// If the lock guarding the records has been poisoned
    pub fn insert(
        &self,
        collection: &str,
        key: impl Into<String>,
        rate: ShippingRate,
    ) -> crate::Result<Option<ShippingRate>> {
        Ok(self
            .collections
            .write()?
            .entry(collection.to_string())
            .or_default()
            .insert(key.into(), rate))
    }

    /// Remove the record stored under `key`
    ///
    /// # Errors
    /// If the lock guarding the records has been poisoned
    pub fn remove(&self, collection: &str, key: &str) -> crate::Result<Option<ShippingRate>> {
        Ok(self
            .collections
            .write()?
            .get_mut(collection)
            .and_then(|records| records.remove(key)))
    }

    /// Drop every record in every collection
    pub fn clear(&self) {
        self.collections
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clear();
    }

    /// Get the total number of records across all collections
    ///
    /// Recovers gracefully if the lock is poisoned by accessing the underlying data.
    #[must_use]
    pub fn len(&self) -> usize {
        self.collections
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .values()
            .map(HashMap::len)
            .sum()
    }

    /// Check if the store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl RateStore for MemoryRateStore {
    async fn get(&self, collection: &str, key: &str) -> crate::Result<Option<ShippingRate>> {
        Ok(self
            .collections
            .read()?
            .get(collection)
            .and_then(|records| records.get(key))
            .cloned())
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SHIPPING_RATES_COLLECTION;

    #[tokio::test]
    async fn test_memory_store_basic_operations() {
        let store = MemoryRateStore::new();
        assert!(store.is_empty());

        let rate = ShippingRate::new("東京都", 500, "1 hari");
        let previous = store
            .insert(SHIPPING_RATES_COLLECTION, "東京都", rate.clone())
            .expect("Failed to insert");
        assert!(previous.is_none());
        assert_eq!(store.len(), 1);

        let fetched = store
            .get(SHIPPING_RATES_COLLECTION, "東京都")
            .await
            .expect("Failed to get");
        assert_eq!(fetched, Some(rate.clone()));

        let removed = store
            .remove(SHIPPING_RATES_COLLECTION, "東京都")
            .expect("Failed to remove");
        assert_eq!(removed, Some(rate));
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_missing_record_is_not_an_error() {
        let store = MemoryRateStore::new();

        let missing_collection = store
            .get("nonexistent", "東京都")
            .await
            .expect("Missing collection should not fail");
        assert!(missing_collection.is_none());

        store
            .insert(SHIPPING_RATES_COLLECTION, "東京都", ShippingRate::new("東京都", 500, "1 hari"))
            .expect("Failed to insert");
        let missing_key = store
            .get(SHIPPING_RATES_COLLECTION, "大阪府")
            .await
            .expect("Missing key should not fail");
        assert!(missing_key.is_none());
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = MemoryRateStore::new();
        store
            .insert("staging_rates", "東京都", ShippingRate::new("東京都", 1, "1 hari"))
            .expect("Failed to insert");

        let fetched = store
            .get(SHIPPING_RATES_COLLECTION, "東京都")
            .await
            .expect("Failed to get");
        assert!(fetched.is_none());
    }

    #[tokio::test]
    async fn test_insert_replaces_and_clones_share_state() {
        let store = MemoryRateStore::new();
        let handle = store.clone();

        handle
            .insert(SHIPPING_RATES_COLLECTION, "北海道", ShippingRate::new("北海道", 1000, "3 hari"))
            .expect("Failed to insert");
        let replaced = handle
            .insert(SHIPPING_RATES_COLLECTION, "北海道", ShippingRate::new("北海道", 900, "3 hari"))
            .expect("Failed to insert");
        assert_eq!(replaced.map(|rate| rate.cost), Some(1000));

        let fetched = store
            .get(SHIPPING_RATES_COLLECTION, "北海道")
            .await
            .expect("Failed to get")
            .expect("Record should exist");
        assert_eq!(fetched.cost, 900);
        assert_eq!(store.len(), 1);

        handle.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_with_records() {
        let store = MemoryRateStore::with_records(
            SHIPPING_RATES_COLLECTION,
            [
                ("東京都".to_string(), ShippingRate::new("東京都", 500, "1 hari")),
                ("大阪府".to_string(), ShippingRate::new("大阪府", 600, "2 hari")),
            ],
        );
        assert_eq!(store.len(), 2);
    }
}
