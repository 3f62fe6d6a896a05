//! Shipping cost and delivery estimates per prefecture.
//!
//! Rates are resolved from an optional override store first, then from the
//! compiled-in table, and finally from a default rate, so resolution never
//! fails:
//!
//! ```ignore
//! let resolver = RateResolver::new(Arc::new(MemoryRateStore::new()));
//! let rate = resolver.resolve("北海道").await;
//! assert_eq!(format_shipping_cost(rate.cost), "¥1,200");
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod policy;
pub mod resolver;
pub mod table;

pub use config::{ResolverConfig, ShippingConfig};
pub use error::{ConfigError, ResolveError};
pub use format::format_shipping_cost;
pub use ongkir_common::ShippingRate;
pub use ongkir_store::{MemoryRateStore, RateStore, StoreConfig, StoreError};
pub use policy::{FreeShippingPolicy, is_free_shipping};
pub use resolver::{FallbackReason, RateResolver, RateSource, Resolution, ShippingQuote};
pub use table::{
    DEFAULT_ESTIMATED_DAYS, DEFAULT_SHIPPING_COST, SHIPPING_RATES, find_static_rate,
    get_shipping_estimate,
};
