use rusty_money::{Money, iso};

/// Render a shipping cost as a yen amount, e.g. `¥1,200`.
///
/// Yen has no minor unit, so there are never fractional digits.
#[must_use]
pub fn format_shipping_cost(cost: u32) -> String {
    Money::from_minor(i64::from(cost), iso::JPY).to_string()
}
