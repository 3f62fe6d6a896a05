//! Resolver configuration.
//!
//! Every field is optional; an empty configuration `()` yields the
//! compiled-in behaviour with no override store.
//!
//! ```ron
//! (
//!     store: Memory(
//!         overrides: {
//!             "東京都": (region: "東京都", cost: 500, estimated_days: "1 hari"),
//!         },
//!     ),
//!     resolver: (
//!         collection: "shipping_rates",
//!         default_cost: 800,
//!         default_estimated_days: "3-5 hari",
//!     ),
//!     free_shipping: (
//!         nationwide_threshold: 15000,
//!     ),
//! )
//! ```

use std::str::FromStr;

use ongkir_common::ShippingRate;
use ongkir_store::{SHIPPING_RATES_COLLECTION, StoreConfig};
use serde::{Deserialize, Serialize};

use crate::{
    error::ConfigError,
    policy::FreeShippingPolicy,
    resolver::RateResolver,
    table::{DEFAULT_ESTIMATED_DAYS, DEFAULT_SHIPPING_COST},
};

/// Settings for the resolution chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// Collection of the override store holding rates keyed by region.
    ///
    /// Default: `"shipping_rates"`
    #[serde(default = "defaults::collection")]
    pub collection: String,

    /// Cost used when no source knows a region.
    ///
    /// Default: 800 yen
    #[serde(default = "defaults::default_cost")]
    pub default_cost: u32,

    /// Estimate used when no source knows a region.
    ///
    /// Default: `"3-5 hari"`
    #[serde(default = "defaults::default_estimated_days")]
    pub default_estimated_days: String,
}

impl ResolverConfig {
    /// The record returned when no source knows `region`.
    ///
    /// The region is echoed back so callers can still display what they asked for.
    #[must_use]
    pub fn default_rate(&self, region: &str) -> ShippingRate {
        ShippingRate::new(region, self.default_cost, self.default_estimated_days.as_str())
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            collection: defaults::collection(),
            default_cost: defaults::default_cost(),
            default_estimated_days: defaults::default_estimated_days(),
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShippingConfig {
    #[serde(default)]
    pub store: StoreConfig,

    #[serde(default)]
    pub resolver: ResolverConfig,

    #[serde(default)]
    pub free_shipping: FreeShippingPolicy,
}

impl ShippingConfig {
    /// Parse and validate a RON configuration.
    ///
    /// # Errors
    /// If the input is not valid RON for this structure, or fails [`Self::validate`]
    pub fn from_ron(config: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::Options::default()
            .with_default_extension(
                ron::extensions::Extensions::IMPLICIT_SOME
                    | ron::extensions::Extensions::UNWRAP_VARIANT_NEWTYPES,
            )
            .from_str(config)?;

        config.validate()?;
        Ok(config)
    }

    /// Check the values a resolver depends on.
    ///
    /// # Errors
    /// If the collection name or the default estimate is empty
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.collection.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "resolver.collection must not be empty".to_string(),
            ));
        }

        if self.resolver.default_estimated_days.trim().is_empty() {
            return Err(ConfigError::Invalid(
                "resolver.default_estimated_days must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    /// Build a resolver from this configuration.
    #[must_use]
    pub fn into_resolver(self) -> RateResolver {
        let resolver = self
            .store
            .into_rate_store(&self.resolver.collection)
            .map_or_else(RateResolver::without_store, RateResolver::new);

        resolver
            .with_config(self.resolver)
            .with_free_shipping(self.free_shipping)
    }
}

impl FromStr for ShippingConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_ron(s)
    }
}

mod defaults {
    pub fn collection() -> String {
        super::SHIPPING_RATES_COLLECTION.to_string()
    }

    pub const fn default_cost() -> u32 {
        super::DEFAULT_SHIPPING_COST
    }

    pub fn default_estimated_days() -> String {
        super::DEFAULT_ESTIMATED_DAYS.to_string()
    }
}
