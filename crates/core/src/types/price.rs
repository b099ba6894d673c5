//! Money display and discount arithmetic.
//!
//! Prices are plain floating-point amounts in the store's single currency.
//! The currency itself is only a display symbol taken from the store
//! settings.

/// Format an amount with a currency symbol and two decimal places.
///
/// Non-finite amounts are shown as zero.
///
/// # Examples
///
/// ```
/// use time_rush_core::format_money;
///
/// assert_eq!(format_money(129.5, "$"), "$129.50");
/// assert_eq!(format_money(0.0, "€"), "€0.00");
/// ```
#[must_use]
pub fn format_money(amount: f64, symbol: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    format!("{symbol}{amount:.2}")
}

/// Whole-number discount percentage of `price` against `compare_at_price`.
///
/// Returns `0` unless both amounts are finite and positive and the
/// compare-at price exceeds the price. Rounds to the nearest percent.
///
/// # Examples
///
/// ```
/// use time_rush_core::discount_percent;
///
/// assert_eq!(discount_percent(80.0, 100.0), 20);
/// assert_eq!(discount_percent(100.0, 100.0), 0);
/// assert_eq!(discount_percent(50.0, 0.0), 0);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn discount_percent(price: f64, compare_at_price: f64) -> u32 {
    if !price.is_finite() || !compare_at_price.is_finite() {
        return 0;
    }
    if price <= 0.0 || compare_at_price <= 0.0 || compare_at_price <= price {
        return 0;
    }

    // 0 < price < compare, so the ratio is in (0, 100)
    ((1.0 - price / compare_at_price) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_money_rounds_to_cents() {
        assert_eq!(format_money(19.999, "$"), "$20.00");
        assert_eq!(format_money(1234.5, "£"), "£1234.50");
    }

    #[test]
    fn test_format_money_non_finite() {
        assert_eq!(format_money(f64::NAN, "$"), "$0.00");
        assert_eq!(format_money(f64::INFINITY, "$"), "$0.00");
    }

    #[test]
    fn test_discount_percent_examples() {
        assert_eq!(discount_percent(80.0, 100.0), 20);
        assert_eq!(discount_percent(100.0, 100.0), 0);
        assert_eq!(discount_percent(50.0, 0.0), 0);
    }

    #[test]
    fn test_discount_percent_rounds_to_nearest() {
        // 1 - 199/299 = 33.44%
        assert_eq!(discount_percent(199.0, 299.0), 33);
        // 1 - 2/3 = 33.33%, 1 - 1/3 = 66.67%
        assert_eq!(discount_percent(1.0, 3.0), 67);
    }

    #[test]
    fn test_discount_percent_rejects_bad_amounts() {
        assert_eq!(discount_percent(0.0, 100.0), 0);
        assert_eq!(discount_percent(-10.0, 100.0), 0);
        assert_eq!(discount_percent(120.0, 100.0), 0);
        assert_eq!(discount_percent(f64::NAN, 100.0), 0);
        assert_eq!(discount_percent(80.0, f64::INFINITY), 0);
    }
}
