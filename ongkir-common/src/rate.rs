//! The shipping rate record shared by the static table, the override store
//! and the resolver.

use std::{borrow::Cow, fmt};

use serde::{Deserialize, Serialize};

/// Shipping cost and delivery estimate for a single region.
///
/// The string fields are `Cow<'static, str>` so that the compiled-in table
/// can be built from literals, while records coming from an override store
/// (or echoing caller input) own their data.
///
/// Documents written by the storefront use `prefecture` and `estimatedDays`
/// as field names, both are accepted when deserializing:
/// ```ron
/// (
///     prefecture: "東京都",
///     cost: 500,
///     estimatedDays: "1 hari",
/// )
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShippingRate {
    /// Region identifier (a prefecture name)
    #[serde(alias = "prefecture")]
    pub region: Cow<'static, str>,

    /// Cost in yen
    pub cost: u32,

    /// Free-text delivery range, e.g. `"1-2 hari"`
    #[serde(alias = "estimatedDays")]
    pub estimated_days: Cow<'static, str>,
}

impl ShippingRate {
    /// Create a rate that owns its strings.
    #[must_use]
    pub fn new(region: impl Into<String>, cost: u32, estimated_days: impl Into<String>) -> Self {
        Self {
            region: Cow::Owned(region.into()),
            cost,
            estimated_days: Cow::Owned(estimated_days.into()),
        }
    }

    /// Create a rate from static strings, usable in `static` items.
    #[must_use]
    pub const fn from_static(
        region: &'static str,
        cost: u32,
        estimated_days: &'static str,
    ) -> Self {
        Self {
            region: Cow::Borrowed(region),
            cost,
            estimated_days: Cow::Borrowed(estimated_days),
        }
    }

    #[must_use]
    pub fn region(&self) -> &str {
        &self.region
    }

    #[must_use]
    pub fn estimated_days(&self) -> &str {
        &self.estimated_days
    }
}

impl fmt::Display for ShippingRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} yen ({})",
            self.region, self.cost, self.estimated_days
        )
    }
}
