//! Currency symbols and amount formatting.
//!
//! The currency code is display-only: unknown codes are not rejected, they
//! simply fall back to `$`. PDF, DOCX and any on-screen preview format money
//! through [`format_money`] so the three never disagree.

use rust_decimal::Decimal;

use super::totals::round_money;

/// Symbol used when the code is not in the table.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Sorted by code for binary search.
static CURRENCY_SYMBOLS: &[(&str, &str)] = &[
    ("CAD", "C$"), // Canadian Dollar
    ("EUR", "€"),  // Euro
    ("GBP", "£"),  // Pound Sterling
    ("USD", "$"),  // US Dollar
];

/// Display symbol for a currency code.
pub fn currency_symbol(code: &str) -> &'static str {
    CURRENCY_SYMBOLS
        .binary_search_by_key(&code, |&(c, _)| c)
        .map(|idx| CURRENCY_SYMBOLS[idx].1)
        .unwrap_or(DEFAULT_CURRENCY_SYMBOL)
}

/// Format an amount as `{symbol}{amount}` with exactly two decimals.
///
/// The sign belongs to the amount, so negatives read `$-5.00`. Amounts that
/// round to zero never carry a sign.
pub fn format_money(amount: Decimal, currency: &str) -> String {
    let mut rounded = round_money(amount);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    format!("{}{:.2}", currency_symbol(currency), rounded)
}

/// Quantities print without trailing zeros (`1.5`, `2`).
pub fn format_quantity(quantity: Decimal) -> String {
    quantity.normalize().to_string()
}

/// Tax rates print without trailing zeros (`7.875`, `0`).
pub fn format_rate(rate: Decimal) -> String {
    rate.normalize().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn known_symbols() {
        assert_eq!(currency_symbol("USD"), "$");
        assert_eq!(currency_symbol("EUR"), "€");
        assert_eq!(currency_symbol("GBP"), "£");
        assert_eq!(currency_symbol("CAD"), "C$");
    }

    #[test]
    fn unknown_codes_fall_back_to_dollar() {
        assert_eq!(currency_symbol("JPY"), "$");
        assert_eq!(currency_symbol(""), "$");
        assert_eq!(currency_symbol("eur"), "$");
    }

    #[test]
    fn money_has_two_decimals() {
        assert_eq!(format_money(dec!(0), "USD"), "$0.00");
        assert_eq!(format_money(dec!(299.985), "USD"), "$299.99");
        assert_eq!(format_money(dec!(1234.5), "EUR"), "€1234.50");
        assert_eq!(format_money(dec!(10), "CAD"), "C$10.00");
        assert_eq!(format_money(dec!(-5), "GBP"), "£-5.00");
        assert_eq!(format_money(dec!(-0.001), "USD"), "$0.00");
    }

    #[test]
    fn quantities_and_rates_are_normalized() {
        assert_eq!(format_quantity(dec!(1.50)), "1.5");
        assert_eq!(format_quantity(dec!(2.000)), "2");
        assert_eq!(format_rate(dec!(7.875)), "7.875");
        assert_eq!(format_rate(dec!(0)), "0");
    }

    #[test]
    fn list_is_sorted() {
        for window in CURRENCY_SYMBOLS.windows(2) {
            assert!(
                window[0].0 < window[1].0,
                "currency codes not sorted: {} >= {}",
                window[0].0,
                window[1].0
            );
        }
    }
}
