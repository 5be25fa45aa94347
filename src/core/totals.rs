use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use super::error::DocumentError;
use super::types::DocumentData;

/// Derived document totals. Never stored; recompute with [`calculate_totals`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    /// Sum of every line's effective total.
    pub subtotal: Decimal,
    /// `subtotal * tax_rate / 100`.
    pub tax_amount: Decimal,
    /// `subtotal + tax_amount`.
    pub grand_total: Decimal,
}

impl Totals {
    pub const ZERO: Self = Self {
        subtotal: Decimal::ZERO,
        tax_amount: Decimal::ZERO,
        grand_total: Decimal::ZERO,
    };
}

/// Compute subtotal, tax and grand total for a document.
///
/// No rounding happens here; amounts are rounded to two places only when
/// formatted. Every exporter goes through [`try_calculate_totals`] so they
/// never disagree.
///
/// Amounts whose sum or product leaves the `Decimal` range yield all-zero
/// totals, the same way [`amount_from_f64`] treats non-finite input. Use
/// [`try_calculate_totals`] to see the overflow instead.
pub fn calculate_totals(data: &DocumentData) -> Totals {
    try_calculate_totals(data).unwrap_or_else(|err| {
        tracing::warn!(po_number = %data.po_number, %err, "totals reported as zero");
        Totals::ZERO
    })
}

/// Checked variant of [`calculate_totals`].
///
/// Returns [`DocumentError::AmountOutOfRange`] when a line product, the
/// subtotal, the tax or the grand total overflows.
pub fn try_calculate_totals(data: &DocumentData) -> Result<Totals, DocumentError> {
    let mut subtotal = Decimal::ZERO;
    for item in &data.line_items {
        let line = item.checked_effective_total().ok_or_else(|| {
            DocumentError::AmountOutOfRange(format!("line item '{}' total", item.id))
        })?;
        subtotal = subtotal
            .checked_add(line)
            .ok_or_else(|| out_of_range("subtotal"))?;
    }
    let tax_amount = data
        .tax_rate
        .checked_div(dec!(100))
        .and_then(|rate| subtotal.checked_mul(rate))
        .ok_or_else(|| out_of_range("tax amount"))?;
    let grand_total = subtotal
        .checked_add(tax_amount)
        .ok_or_else(|| out_of_range("grand total"))?;
    Ok(Totals {
        subtotal,
        tax_amount,
        grand_total,
    })
}

fn out_of_range(what: &str) -> DocumentError {
    DocumentError::AmountOutOfRange(what.to_string())
}

/// Convert untyped numeric input into a [`Decimal`].
///
/// NaN, infinities and magnitudes Decimal cannot hold become zero.
pub fn amount_from_f64(value: f64) -> Decimal {
    if !value.is_finite() {
        return Decimal::ZERO;
    }
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}

/// Round to two decimal places, midpoints away from zero.
pub fn round_money(value: Decimal) -> Decimal {
    round_half_up(value, 2)
}

pub(crate) fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero)
}
