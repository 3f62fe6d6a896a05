//! Error types for the ongkir crate.

use ongkir_store::StoreError;
use thiserror::Error;

use crate::resolver::FallbackReason;

/// Why the resolver could not use an override.
///
/// These never escape [`crate::RateResolver::resolve`]; they are logged and
/// reported through [`crate::Resolution::fallback`].
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The region identifier was empty.
    #[error("Region is required")]
    InvalidInput,

    /// The override store failed while looking the region up.
    #[error("Override store unavailable: {0}")]
    RemoteUnavailable(#[from] StoreError),

    /// No source has a rate for the region.
    #[error("No shipping rate for region {0:?}")]
    NotFound(String),
}

impl ResolveError {
    /// The tag reported to callers for this failure.
    #[must_use]
    pub const fn reason(&self) -> FallbackReason {
        match self {
            Self::InvalidInput => FallbackReason::InvalidInput,
            Self::RemoteUnavailable(_) => FallbackReason::RemoteUnavailable,
            Self::NotFound(_) => FallbackReason::NotFound,
        }
    }
}

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration is not valid RON for [`crate::ShippingConfig`].
    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] ron::error::SpannedError),

    /// The configuration parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
