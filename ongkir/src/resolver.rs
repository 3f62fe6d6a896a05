//! Shipping rate resolution.
//!
//! A region is resolved by trying, in order:
//! 1. the override store (skipped for an empty region, or when none is configured),
//! 2. the compiled-in [`SHIPPING_RATES`](crate::table::SHIPPING_RATES) table,
//! 3. the default rate, echoing the requested region.
//!
//! Failures of the override store are logged and treated as a miss. Nothing
//! is cached: every resolution issues at most one store read.

use std::sync::Arc;

use ongkir_common::{ShippingRate, internal, remote};
use ongkir_store::RateStore;

use crate::{
    config::ResolverConfig, error::ResolveError, policy::FreeShippingPolicy,
    table::find_static_rate,
};

/// Where a resolved rate came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateSource {
    /// The override store.
    Override,
    /// The compiled-in table.
    Static,
    /// The default rate.
    Default,
}

/// Why the override store was not used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FallbackReason {
    /// The region was empty; the store was not consulted.
    InvalidInput,
    /// The store failed, the rate may be stale.
    RemoteUnavailable,
    /// Neither the store nor the table knows the region.
    NotFound,
}

/// A resolved rate together with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub rate: ShippingRate,
    pub source: RateSource,
    /// Set whenever something went wrong on the way to `rate`.
    ///
    /// A plain override miss followed by a table hit is not a fallback.
    pub fallback: Option<FallbackReason>,
}

impl Resolution {
    /// Check whether the override store failed during resolution.
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        self.fallback == Some(FallbackReason::RemoteUnavailable)
    }
}

/// The shipping charge for an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingQuote {
    pub rate: ShippingRate,
    /// Whether the free-shipping promotion applies.
    pub free: bool,
    /// Amount to charge, in yen.
    pub charged: u32,
}

/// Resolves shipping rates from an optional override store, the
/// compiled-in table and a default.
///
/// Cheap to clone; clones share the store.
#[derive(Debug, Clone, Default)]
pub struct RateResolver {
    store: Option<Arc<dyn RateStore>>,
    config: ResolverConfig,
    free_shipping: FreeShippingPolicy,
}

impl RateResolver {
    /// Create a resolver that consults `store` before the table.
    #[must_use]
    pub fn new(store: Arc<dyn RateStore>) -> Self {
        Self {
            store: Some(store),
            ..Self::default()
        }
    }

    /// Create a resolver that only uses the compiled-in table.
    #[must_use]
    pub fn without_store() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn with_free_shipping(mut self, policy: FreeShippingPolicy) -> Self {
        self.free_shipping = policy;
        self
    }

    #[must_use]
    pub const fn config(&self) -> &ResolverConfig {
        &self.config
    }

    #[must_use]
    pub const fn free_shipping(&self) -> &FreeShippingPolicy {
        &self.free_shipping
    }

    /// Check whether an override store is configured.
    #[must_use]
    pub const fn has_store(&self) -> bool {
        self.store.is_some()
    }

    /// Resolve the shipping rate for `region`.
    ///
    /// Never fails: an empty or unknown region, or an unreachable override
    /// store, all end in the table or the default rate.
    pub async fn resolve(&self, region: &str) -> ShippingRate {
        self.resolve_with_source(region).await.rate
    }

    /// Resolve the shipping rate for `region`, reporting where it came from.
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn resolve_with_source(&self, region: &str) -> Resolution {
        let mut fallback = None;

        match self.lookup_override(region).await {
            Ok(Some(rate)) => {
                remote!(level = DEBUG, "Using override for {region}: {rate}");
                return Resolution {
                    rate,
                    source: RateSource::Override,
                    fallback: None,
                };
            }
            Ok(None) => remote!("No override for {region}"),
            Err(err @ ResolveError::InvalidInput) => {
                internal!(level = WARN, "Skipping override lookup: {err}");
                fallback = Some(err.reason());
            }
            Err(err) => {
                remote!(
                    level = ERROR,
                    "Failed to look up override for {region}, falling back: {err}"
                );
                fallback = Some(err.reason());
            }
        }

        if let Some(rate) = find_static_rate(region) {
            internal!("Using static rate for {region}");
            return Resolution {
                rate: rate.clone(),
                source: RateSource::Static,
                fallback,
            };
        }

        let not_found = ResolveError::NotFound(region.to_string());
        internal!(level = DEBUG, "{not_found}, using default rate");

        Resolution {
            rate: self.config.default_rate(region),
            source: RateSource::Default,
            fallback: Some(fallback.unwrap_or_else(|| not_found.reason())),
        }
    }

    /// Resolve the rate for `region` and apply the free-shipping promotion
    /// for an order of `subtotal` yen.
    pub async fn quote(&self, region: &str, subtotal: u64) -> ShippingQuote {
        let rate = self.resolve(region).await;
        let free = self.free_shipping.qualifies(subtotal, region);
        let charged = if free { 0 } else { rate.cost };

        ShippingQuote {
            rate,
            free,
            charged,
        }
    }

    /// Look `region` up in the override store.
    ///
    /// This is the only fallible step of resolution; its error is the one
    /// the resolver absorbs.
    async fn lookup_override(&self, region: &str) -> Result<Option<ShippingRate>, ResolveError> {
        if region.is_empty() {
            return Err(ResolveError::InvalidInput);
        }

        let Some(store) = &self.store else {
            return Ok(None);
        };

        remote!("Looking up {}/{region}", self.config.collection);
        Ok(store.get(&self.config.collection, region).await?)
    }
}
