//! Property-based tests for the free-shipping rule and rate fallbacks.

#![allow(clippy::expect_used)]

use ongkir::{
    DEFAULT_ESTIMATED_DAYS, DEFAULT_SHIPPING_COST, FreeShippingPolicy, RateResolver,
    find_static_rate, get_shipping_estimate, is_free_shipping,
    policy::{CAPITAL_AREA_REGIONS, CAPITAL_AREA_THRESHOLD, NATIONWIDE_THRESHOLD},
    table::regions,
};
use proptest::prelude::*;

/// Strategy to pick any region from the compiled-in table
fn static_region_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(regions().collect::<Vec<_>>())
}

/// Strategy to generate non-empty regions that are not in the table
fn unknown_region_strategy() -> impl Strategy<Value = String> {
    let regex = prop::string::string_regex("[a-zA-Z0-9 -]{1,20}")
        .expect("region regex should be valid");
    regex.prop_filter("must not be a known region", |region| {
        find_static_rate(region).is_none()
    })
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime")
        .block_on(future)
}

proptest! {
    #[test]
    fn nationwide_threshold_always_ships_free(
        subtotal in NATIONWIDE_THRESHOLD..u64::MAX,
        region in ".*",
    ) {
        prop_assert!(is_free_shipping(subtotal, &region));
    }

    #[test]
    fn below_capital_threshold_never_ships_free(
        subtotal in 0..CAPITAL_AREA_THRESHOLD,
        region in static_region_strategy(),
    ) {
        prop_assert!(!is_free_shipping(subtotal, region));
    }

    #[test]
    fn between_thresholds_only_capital_area_ships_free(
        subtotal in CAPITAL_AREA_THRESHOLD..NATIONWIDE_THRESHOLD,
        region in static_region_strategy(),
    ) {
        prop_assert_eq!(
            is_free_shipping(subtotal, region),
            CAPITAL_AREA_REGIONS.contains(&region)
        );
    }

    #[test]
    fn default_policy_matches_free_function(
        subtotal in 0u64..50_000,
        region in static_region_strategy(),
    ) {
        prop_assert_eq!(
            FreeShippingPolicy::default().qualifies(subtotal, region),
            is_free_shipping(subtotal, region)
        );
    }

    #[test]
    fn unknown_regions_resolve_to_default(region in unknown_region_strategy()) {
        let rate = block_on(RateResolver::without_store().resolve(&region));

        prop_assert_eq!(rate.region(), region.as_str());
        prop_assert_eq!(rate.cost, DEFAULT_SHIPPING_COST);
        prop_assert_eq!(rate.estimated_days(), DEFAULT_ESTIMATED_DAYS);
        prop_assert_eq!(get_shipping_estimate(&region), DEFAULT_ESTIMATED_DAYS);
    }

    #[test]
    fn static_regions_resolve_to_table(region in static_region_strategy()) {
        let rate = block_on(RateResolver::without_store().resolve(region));

        prop_assert_eq!(Some(&rate), find_static_rate(region));
        prop_assert_eq!(get_shipping_estimate(region), rate.estimated_days());
    }
}
