use std::{collections::HashMap, sync::Arc};

use ongkir_common::ShippingRate;
use serde::{Deserialize, Serialize};

use crate::{backends::MemoryRateStore, r#trait::RateStore};

/// Configuration for the override store
///
/// This enum allows runtime selection of the override store through
/// configuration files.
///
/// # Examples
///
/// No override store, only the compiled-in table is consulted:
/// ```ron
/// (
///     store: Disabled,
/// )
/// ```
///
/// Memory-backed overrides seeded from configuration:
/// ```ron
/// (
///     store: Memory(
///         overrides: {
///             "東京都": (region: "東京都", cost: 500, estimated_days: "1 hari"),
///         },
///     ),
/// )
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub enum StoreConfig {
    /// No override store
    #[default]
    Disabled,
    /// Memory-based override store
    Memory(MemoryConfig),
}

/// Configuration for a memory-backed override store
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MemoryConfig {
    /// Records to seed the store with, keyed by region
    #[serde(default)]
    pub overrides: HashMap<String, ShippingRate>,
}

impl StoreConfig {
    /// Check whether an override store will be consulted at all
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Convert the configuration into a concrete override store
    ///
    /// Seeded overrides are placed into `collection`. Returns `None` for
    /// [`StoreConfig::Disabled`].
    #[must_use]
    pub fn into_rate_store(self, collection: &str) -> Option<Arc<dyn RateStore>> {
        match self {
            Self::Disabled => None,
            Self::Memory(config) => Some(Arc::new(MemoryRateStore::with_records(
                collection,
                config.overrides,
            ))),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used, clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::SHIPPING_RATES_COLLECTION;

    fn parse(config: &str) -> StoreConfig {
        ron::Options::default()
            .with_default_extension(ron::extensions::Extensions::UNWRAP_VARIANT_NEWTYPES)
            .from_str(config)
            .expect("Failed to parse store config")
    }

    #[test]
    fn test_default_is_disabled() {
        let config = StoreConfig::default();
        assert!(!config.is_enabled());
        assert!(config.into_rate_store(SHIPPING_RATES_COLLECTION).is_none());
    }

    #[test]
    fn test_deserialize_disabled() {
        assert!(!parse("Disabled").is_enabled());
    }

    #[tokio::test]
    async fn test_deserialize_memory_with_overrides() {
        let config = parse(
            r#"Memory(
                overrides: {
                    "東京都": (region: "東京都", cost: 500, estimated_days: "1 hari"),
                    "沖縄県": (prefecture: "沖縄県", cost: 1200, estimatedDays: "4-6 hari"),
                },
            )"#,
        );
        assert!(config.is_enabled());

        let store = config
            .into_rate_store(SHIPPING_RATES_COLLECTION)
            .expect("Memory config should build a store");

        let tokyo = store
            .get(SHIPPING_RATES_COLLECTION, "東京都")
            .await
            .unwrap()
            .expect("Override should exist");
        assert_eq!(tokyo, ShippingRate::new("東京都", 500, "1 hari"));

        let okinawa = store
            .get(SHIPPING_RATES_COLLECTION, "沖縄県")
            .await
            .unwrap()
            .expect("Override should exist");
        assert_eq!(okinawa.cost, 1200);
    }

    #[tokio::test]
    async fn test_memory_without_overrides() {
        let store = parse("Memory(overrides: {})")
            .into_rate_store(SHIPPING_RATES_COLLECTION)
            .expect("Memory config should build a store");

        let result = store.get(SHIPPING_RATES_COLLECTION, "東京都").await.unwrap();
        assert!(result.is_none());
    }
}
