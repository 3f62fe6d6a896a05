//! Free-shipping promotion rule.
//!
//! An order ships free when either holds:
//! - the subtotal reaches [`CAPITAL_AREA_THRESHOLD`] and the destination is
//!   one of the [`CAPITAL_AREA_REGIONS`], or
//! - the subtotal reaches [`NATIONWIDE_THRESHOLD`], wherever it ships.
//!
//! Both thresholds are inclusive.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Regions around the capital that qualify for the lower threshold.
pub const CAPITAL_AREA_REGIONS: [&str; 4] = ["東京都", "神奈川県", "埼玉県", "千葉県"];

/// Subtotal (yen) from which capital-area orders ship free.
pub const CAPITAL_AREA_THRESHOLD: u64 = 10_000;

/// Subtotal (yen) from which every order ships free.
pub const NATIONWIDE_THRESHOLD: u64 = 15_000;

static DEFAULT_POLICY: LazyLock<FreeShippingPolicy> = LazyLock::new(FreeShippingPolicy::default);

/// Free-shipping promotion configuration.
///
/// ```ron
/// free_shipping: (
///     capital_area_regions: ["東京都", "神奈川県", "埼玉県", "千葉県"],
///     capital_area_threshold: 10000,
///     nationwide_threshold: 15000,
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FreeShippingPolicy {
    /// Regions that qualify for `capital_area_threshold`.
    ///
    /// Default: [`CAPITAL_AREA_REGIONS`]
    #[serde(default = "defaults::capital_area_regions")]
    pub capital_area_regions: Vec<String>,

    /// Minimum subtotal for free shipping within `capital_area_regions`.
    ///
    /// Default: 10000 yen
    #[serde(default = "defaults::capital_area_threshold")]
    pub capital_area_threshold: u64,

    /// Minimum subtotal for free shipping to any region.
    ///
    /// Default: 15000 yen
    #[serde(default = "defaults::nationwide_threshold")]
    pub nationwide_threshold: u64,
}

impl Default for FreeShippingPolicy {
    fn default() -> Self {
        Self {
            capital_area_regions: defaults::capital_area_regions(),
            capital_area_threshold: defaults::capital_area_threshold(),
            nationwide_threshold: defaults::nationwide_threshold(),
        }
    }
}

impl FreeShippingPolicy {
    /// Create a policy with the default promotion values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether `region` is in the capital area.
    #[must_use]
    pub fn is_capital_area(&self, region: &str) -> bool {
        self.capital_area_regions.iter().any(|r| r == region)
    }

    /// Check whether an order of `subtotal` yen to `region` ships free.
    #[must_use]
    pub fn qualifies(&self, subtotal: u64, region: &str) -> bool {
        (subtotal >= self.capital_area_threshold && self.is_capital_area(region))
            || subtotal >= self.nationwide_threshold
    }
}

/// Check whether an order ships free under the default promotion.
#[must_use]
pub fn is_free_shipping(subtotal: u64, region: &str) -> bool {
    DEFAULT_POLICY.qualifies(subtotal, region)
}

mod defaults {
    pub fn capital_area_regions() -> Vec<String> {
        super::CAPITAL_AREA_REGIONS
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    pub const fn capital_area_threshold() -> u64 {
        super::CAPITAL_AREA_THRESHOLD
    }

    pub const fn nationwide_threshold() -> u64 {
        super::NATIONWIDE_THRESHOLD
    }
}
