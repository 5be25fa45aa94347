use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::DocumentError;
use super::totals::{amount_from_f64, round_money, try_calculate_totals};

/// The purchase order as captured by the form; the single value every
/// exporter consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentData {
    /// Issuing party.
    #[serde(default)]
    pub buyer: Party,
    /// Supplying party.
    #[serde(default)]
    pub vendor: Party,
    /// Ordered line items.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Display currency code (e.g. "USD"). Only used for formatting.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Tax rate in percent. Not clamped.
    #[serde(default)]
    pub tax_rate: Decimal,
    /// Free multi-line notes.
    #[serde(default)]
    pub notes: String,
    /// Free-text PO identifier; also the base of derived file names.
    #[serde(default)]
    pub po_number: String,
}

/// Buyer or vendor contact block. Every field may be blank.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Party {
    pub name: String,
    /// Multi-line postal address, lines separated by `\n`.
    pub address: String,
    pub email: String,
    pub phone: String,
    pub vat_number: String,
}

/// A single ordered line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Unique within its document.
    pub id: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub quantity: Decimal,
    #[serde(default)]
    pub unit_price: Decimal,
    /// Stored line total. Exporters trust this value when present and only
    /// fall back to `quantity * unit_price` when it is absent.
    #[serde(default)]
    pub total: Option<Decimal>,
}

fn default_currency() -> String {
    "USD".to_string()
}

impl Default for DocumentData {
    fn default() -> Self {
        Self {
            buyer: Party::default(),
            vendor: Party::default(),
            line_items: Vec::new(),
            currency: default_currency(),
            tax_rate: Decimal::ZERO,
            notes: String::new(),
            po_number: String::new(),
        }
    }
}

impl DocumentData {
    /// Parse a form payload (camelCase JSON).
    ///
    /// `null` or structurally invalid payloads are rejected; missing fields
    /// fall back to blanks. Amounts may be JSON numbers or strings. A payload
    /// whose totals leave the `Decimal` range is rejected with
    /// [`DocumentError::AmountOutOfRange`].
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: Option<Self> =
            serde_json::from_str(json).map_err(|e| DocumentError::Parse(e.to_string()))?;
        let doc = value.ok_or_else(|| DocumentError::Parse("document must not be null".into()))?;
        try_calculate_totals(&doc)?;
        Ok(doc)
    }

    /// Serialize back to the form's JSON shape.
    ///
    /// Amounts are written as decimal strings (`"total":"300"`), which
    /// [`from_json`](Self::from_json) reads back without loss.
    pub fn to_json(&self) -> Result<String, DocumentError> {
        serde_json::to_string(self).map_err(|e| DocumentError::Parse(e.to_string()))
    }

    /// Look up a line item by its in-document id.
    pub fn line_item_mut(&mut self, id: &str) -> Option<&mut LineItem> {
        self.line_items.iter_mut().find(|item| item.id == id)
    }

    /// Remove a line item by id, returning it if it existed.
    pub fn remove_line_item(&mut self, id: &str) -> Option<LineItem> {
        let pos = self.line_items.iter().position(|item| item.id == id)?;
        Some(self.line_items.remove(pos))
    }
}

impl LineItem {
    /// Create a line whose total is synced to `round(quantity * unit_price, 2)`.
    ///
    /// When the product overflows the total is left unset.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            quantity,
            unit_price,
            total: rounded_product(quantity, unit_price),
        }
    }

    /// Create a line from untyped floating point input. Non-finite values
    /// become zero before the total is computed.
    pub fn from_f64(
        id: impl Into<String>,
        description: impl Into<String>,
        quantity: f64,
        unit_price: f64,
    ) -> Self {
        Self::new(
            id,
            description,
            amount_from_f64(quantity),
            amount_from_f64(unit_price),
        )
    }

    /// Update the quantity and resync the stored total.
    pub fn set_quantity(&mut self, quantity: Decimal) {
        self.quantity = quantity;
        self.sync_total();
    }

    /// Update the unit price and resync the stored total.
    pub fn set_unit_price(&mut self, unit_price: Decimal) {
        self.unit_price = unit_price;
        self.sync_total();
    }

    /// Store an explicit total, independent of quantity and price.
    pub fn set_total(&mut self, total: Option<Decimal>) {
        self.total = total;
    }

    /// The amount this line contributes: the stored total when present,
    /// otherwise `quantity * unit_price`. Zero if that product overflows.
    pub fn effective_total(&self) -> Decimal {
        self.checked_effective_total().unwrap_or(Decimal::ZERO)
    }

    /// Like [`effective_total`](Self::effective_total), but `None` when the
    /// fallback product overflows.
    pub fn checked_effective_total(&self) -> Option<Decimal> {
        match self.total {
            Some(total) => Some(total),
            None => self.quantity.checked_mul(self.unit_price),
        }
    }

    /// Whether the stored total disagrees with `round(quantity * unit_price, 2)`.
    pub fn is_total_out_of_sync(&self) -> bool {
        self.total
            .is_some_and(|total| Some(total) != rounded_product(self.quantity, self.unit_price))
    }

    fn sync_total(&mut self) {
        self.total = rounded_product(self.quantity, self.unit_price);
    }
}

fn rounded_product(quantity: Decimal, unit_price: Decimal) -> Option<Decimal> {
    quantity.checked_mul(unit_price).map(round_money)
}
