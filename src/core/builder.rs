use rust_decimal::Decimal;

use super::error::DocumentError;
use super::totals::try_calculate_totals;
use super::types::*;

/// Upper bound on line items accepted by [`DocumentBuilder::build`].
pub const MAX_LINE_ITEMS: usize = 10_000;

/// Builder for purchase-order documents.
///
/// ```
/// use pokit::core::*;
/// use rust_decimal_macros::dec;
///
/// let doc = DocumentBuilder::new("PO-2024-001")
///     .currency("EUR")
///     .tax_rate(dec!(19))
///     .buyer(PartyBuilder::new("Kunde AG").email("einkauf@kunde.example").build())
///     .vendor(PartyBuilder::new("ACME GmbH").address("Hauptstr. 1\n10115 Berlin").build())
///     .add_line(LineItemBuilder::new("1", "Beratung", dec!(10), dec!(150)).build())
///     .build()
///     .unwrap();
///
/// assert_eq!(calculate_totals(&doc).grand_total, dec!(1785));
/// ```
pub struct DocumentBuilder {
    po_number: String,
    buyer: Party,
    vendor: Party,
    line_items: Vec<LineItem>,
    currency: String,
    tax_rate: Decimal,
    notes: String,
}

impl DocumentBuilder {
    pub fn new(po_number: impl Into<String>) -> Self {
        Self {
            po_number: po_number.into(),
            buyer: Party::default(),
            vendor: Party::default(),
            line_items: Vec::new(),
            currency: "USD".to_string(),
            tax_rate: Decimal::ZERO,
            notes: String::new(),
        }
    }

    pub fn buyer(mut self, party: Party) -> Self {
        self.buyer = party;
        self
    }

    pub fn vendor(mut self, party: Party) -> Self {
        self.vendor = party;
        self
    }

    pub fn add_line(mut self, line: LineItem) -> Self {
        self.line_items.push(line);
        self
    }

    pub fn currency(mut self, code: impl Into<String>) -> Self {
        self.currency = code.into();
        self
    }

    pub fn tax_rate(mut self, rate: Decimal) -> Self {
        self.tax_rate = rate;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Build the document. Line ids must be unique within the document and
    /// the totals must fit in a `Decimal`.
    pub fn build(self) -> Result<DocumentData, DocumentError> {
        if self.line_items.len() > MAX_LINE_ITEMS {
            return Err(DocumentError::Builder(format!(
                "document cannot have more than {MAX_LINE_ITEMS} line items"
            )));
        }
        for (idx, line) in self.line_items.iter().enumerate() {
            if self.line_items[..idx].iter().any(|prev| prev.id == line.id) {
                return Err(DocumentError::Builder(format!(
                    "duplicate line item id '{}'",
                    line.id
                )));
            }
        }
        let doc = self.build_unchecked();
        try_calculate_totals(&doc)?;
        Ok(doc)
    }

    /// Build without checks, e.g. when importing external data.
    pub fn build_unchecked(self) -> DocumentData {
        DocumentData {
            buyer: self.buyer,
            vendor: self.vendor,
            line_items: self.line_items,
            currency: self.currency,
            tax_rate: self.tax_rate,
            notes: self.notes,
            po_number: self.po_number,
        }
    }
}

/// Builder for Party (buyer/vendor).
pub struct PartyBuilder {
    name: String,
    address: String,
    email: String,
    phone: String,
    vat_number: String,
}

impl PartyBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: String::new(),
            email: String::new(),
            phone: String::new(),
            vat_number: String::new(),
        }
    }

    /// Multi-line address; separate lines with `\n`.
    pub fn address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    pub fn vat_number(mut self, vat_number: impl Into<String>) -> Self {
        self.vat_number = vat_number.into();
        self
    }

    pub fn build(self) -> Party {
        Party {
            name: self.name,
            address: self.address,
            email: self.email,
            phone: self.phone,
            vat_number: self.vat_number,
        }
    }
}

/// Builder for LineItem.
pub struct LineItemBuilder {
    id: String,
    description: String,
    quantity: Decimal,
    unit_price: Decimal,
    total: Option<Option<Decimal>>,
}

impl LineItemBuilder {
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
            total: None,
        }
    }

    /// Override the stored total instead of syncing it from quantity × price.
    pub fn total(mut self, total: Decimal) -> Self {
        self.total = Some(Some(total));
        self
    }

    /// Leave the stored total absent so exporters compute `quantity * unit_price`.
    pub fn without_total(mut self) -> Self {
        self.total = Some(None);
        self
    }

    pub fn build(self) -> LineItem {
        let mut item = LineItem::new(self.id, self.description, self.quantity, self.unit_price);
        if let Some(total) = self.total {
            item.set_total(total);
        }
        item
    }
}
