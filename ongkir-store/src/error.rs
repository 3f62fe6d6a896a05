//! Error types for the ongkir-store crate.

use thiserror::Error;

/// Failure to read from an override store.
///
/// A record being absent is not an error, see [`crate::RateStore::get`].
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store could not be reached (network, outage, injected failure).
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Internal error (lock poisoning, etc.).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Specialized `Result` type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

impl<T> From<std::sync::PoisonError<T>> for StoreError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        Self::Internal(format!("Lock poisoned: {e}"))
    }
}
