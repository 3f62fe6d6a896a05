//! Compiled-in shipping rates per prefecture.
//!
//! The table is the fallback whenever the override store has nothing for a
//! region (or cannot be reached). Costs are in yen.

use ongkir_common::ShippingRate;

/// Cost charged when a region is not known to any source.
pub const DEFAULT_SHIPPING_COST: u32 = 800;

/// Delivery estimate used when a region is not known to any source.
pub const DEFAULT_ESTIMATED_DAYS: &str = "3-5 hari";

const fn rate(region: &'static str, cost: u32, estimated_days: &'static str) -> ShippingRate {
    ShippingRate::from_static(region, cost, estimated_days)
}

/// Shipping rates for all 47 prefectures, grouped by area.
pub static SHIPPING_RATES: &[ShippingRate] = &[
    // Kanto
    rate("東京都", 600, "1-2 hari"),
    rate("神奈川県", 600, "1-2 hari"),
    rate("埼玉県", 650, "1-2 hari"),
    rate("千葉県", 650, "1-2 hari"),
    rate("茨城県", 700, "2-3 hari"),
    rate("栃木県", 700, "2-3 hari"),
    rate("群馬県", 700, "2-3 hari"),
    // Kansai
    rate("大阪府", 700, "2-3 hari"),
    rate("京都府", 700, "2-3 hari"),
    rate("兵庫県", 750, "2-3 hari"),
    rate("奈良県", 750, "2-3 hari"),
    rate("和歌山県", 800, "3-4 hari"),
    rate("滋賀県", 750, "2-3 hari"),
    rate("三重県", 800, "3-4 hari"),
    // Chubu
    rate("愛知県", 750, "2-3 hari"),
    rate("静岡県", 700, "2-3 hari"),
    rate("岐阜県", 800, "3-4 hari"),
    rate("山梨県", 750, "2-3 hari"),
    rate("長野県", 800, "3-4 hari"),
    rate("新潟県", 850, "3-4 hari"),
    rate("富山県", 850, "3-4 hari"),
    rate("石川県", 850, "3-4 hari"),
    rate("福井県", 850, "3-4 hari"),
    // Tohoku
    rate("宮城県", 900, "3-5 hari"),
    rate("福島県", 850, "3-4 hari"),
    rate("山形県", 900, "3-5 hari"),
    rate("岩手県", 950, "4-5 hari"),
    rate("秋田県", 950, "4-5 hari"),
    rate("青森県", 1000, "4-6 hari"),
    // Hokkaido
    rate("北海道", 1200, "4-6 hari"),
    // Chugoku
    rate("広島県", 850, "3-4 hari"),
    rate("岡山県", 800, "3-4 hari"),
    rate("山口県", 900, "3-5 hari"),
    rate("鳥取県", 900, "3-5 hari"),
    rate("島根県", 950, "4-5 hari"),
    // Shikoku
    rate("香川県", 900, "3-5 hari"),
    rate("徳島県", 900, "3-5 hari"),
    rate("愛媛県", 950, "4-5 hari"),
    rate("高知県", 1000, "4-6 hari"),
    // Kyushu
    rate("福岡県", 950, "4-5 hari"),
    rate("佐賀県", 950, "4-5 hari"),
    rate("長崎県", 1000, "4-6 hari"),
    rate("熊本県", 1000, "4-6 hari"),
    rate("大分県", 1000, "4-6 hari"),
    rate("宮崎県", 1050, "5-6 hari"),
    rate("鹿児島県", 1100, "5-7 hari"),
    // Okinawa
    rate("沖縄県", 1500, "5-8 hari"),
];

/// Find the compiled-in rate for `region`.
///
/// Matching is exact; `"東京"` does not match `"東京都"`.
#[must_use]
pub fn find_static_rate(region: &str) -> Option<&'static ShippingRate> {
    SHIPPING_RATES.iter().find(|rate| rate.region == region)
}

/// Region names covered by the table, in table order.
pub fn regions() -> impl Iterator<Item = &'static str> {
    SHIPPING_RATES.iter().map(ShippingRate::region)
}

/// Delivery estimate for `region` from the compiled-in table.
///
/// Never consults the override store.
#[must_use]
pub fn get_shipping_estimate(region: &str) -> &'static str {
    find_static_rate(region).map_or(DEFAULT_ESTIMATED_DAYS, ShippingRate::estimated_days)
}
