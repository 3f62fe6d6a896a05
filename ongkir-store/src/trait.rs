use std::fmt::Debug;

use async_trait::async_trait;
use ongkir_common::ShippingRate;

/// A key-value document store holding shipping rate overrides.
///
/// Implementations only need to support a point lookup: fetch the record
/// stored under `key` in `collection`, if any. A missing record is
/// `Ok(None)`; `Err` is reserved for the store itself being unreachable or
/// broken.
///
/// Timeouts and cancellation are the implementation's concern, callers
/// issue exactly one `get` per resolution and never retry.
#[async_trait]
pub trait RateStore: Send + Sync + Debug {
    /// Fetch the override stored under `key`.
    ///
    /// # Errors
    /// Returns an error if the store cannot be reached or fails internally
    async fn get(&self, collection: &str, key: &str) -> crate::Result<Option<ShippingRate>>;
}
