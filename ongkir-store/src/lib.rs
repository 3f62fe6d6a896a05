pub mod backends;
pub mod config;
pub mod error;
pub mod r#trait;

pub use backends::{MemoryRateStore, TestRateStore};
pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use r#trait::RateStore;

/// Collection holding shipping rate overrides, keyed by region.
pub const SHIPPING_RATES_COLLECTION: &str = "shipping_rates";
