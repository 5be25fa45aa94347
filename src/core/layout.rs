//! Display text shared by every exporter.
//!
//! The PDF and DOCX renderers arrange these pieces differently (indentation,
//! bold headings) but the wording and number formatting come from here.

use super::currencies::{format_money, format_quantity, format_rate};
use super::totals::Totals;
use super::types::{DocumentData, LineItem, Party};

/// Shown instead of a party name when it is blank.
pub const NAME_PLACEHOLDER: &str = "—";
/// Shown instead of a line description when it is blank.
pub const ITEM_PLACEHOLDER: &str = "Item";
/// Shown instead of the PO number when it is blank.
pub const PO_NUMBER_PLACEHOLDER: &str = "N/A";
/// The single row printed for an order without items.
pub const NO_ITEMS_TEXT: &str = "No line items added";

pub(crate) fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// Split multi-line input on `\n`, dropping a trailing `\r` per line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// PO number or its placeholder.
pub fn po_number_text(data: &DocumentData) -> &str {
    if is_blank(&data.po_number) {
        PO_NUMBER_PLACEHOLDER
    } else {
        data.po_number.as_str()
    }
}

/// Contact block lines: name (or placeholder), each address line, then
/// `Email:`, `Phone:` and `VAT:` lines for the fields that are not blank.
pub fn party_lines(party: &Party) -> Vec<String> {
    let mut lines = Vec::new();
    if is_blank(&party.name) {
        lines.push(NAME_PLACEHOLDER.to_string());
    } else {
        lines.push(party.name.trim_end().to_string());
    }
    if !is_blank(&party.address) {
        lines.extend(split_lines(&party.address).map(str::to_string));
    }
    if !is_blank(&party.email) {
        lines.push(format!("Email: {}", party.email));
    }
    if !is_blank(&party.phone) {
        lines.push(format!("Phone: {}", party.phone));
    }
    if !is_blank(&party.vat_number) {
        lines.push(format!("VAT: {}", party.vat_number));
    }
    lines
}

/// `"{n}. {description} — {qty} × {unit price} = {total}"`, `n` starting at 1.
pub fn item_line(index: usize, item: &LineItem, currency: &str) -> String {
    let description = if is_blank(&item.description) {
        ITEM_PLACEHOLDER
    } else {
        item.description.as_str()
    };
    format!(
        "{}. {} — {} × {} = {}",
        index + 1,
        description,
        format_quantity(item.quantity),
        format_money(item.unit_price, currency),
        format_money(item.effective_total(), currency),
    )
}

/// One line per item, or the single placeholder row.
pub fn item_lines(data: &DocumentData) -> Vec<String> {
    if data.line_items.is_empty() {
        return vec![NO_ITEMS_TEXT.to_string()];
    }
    data.line_items
        .iter()
        .enumerate()
        .map(|(idx, item)| {
            if item.is_total_out_of_sync() {
                tracing::debug!(
                    id = %item.id,
                    quantity = %item.quantity,
                    unit_price = %item.unit_price,
                    total = ?item.total,
                    "stored line total differs from quantity × unit price; exporting stored value"
                );
            }
            item_line(idx, item, &data.currency)
        })
        .collect()
}

/// Subtotal, tax and total lines, in that order.
pub fn summary_lines(data: &DocumentData, totals: &Totals) -> [String; 3] {
    [
        format!("Subtotal: {}", format_money(totals.subtotal, &data.currency)),
        format!(
            "Tax ({}%): {}",
            format_rate(data.tax_rate),
            format_money(totals.tax_amount, &data.currency)
        ),
        format!("Total: {}", format_money(totals.grand_total, &data.currency)),
    ]
}

/// Note lines, or nothing when the notes are blank.
pub fn note_lines(data: &DocumentData) -> Vec<String> {
    if is_blank(&data.notes) {
        return Vec::new();
    }
    split_lines(&data.notes).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::calculate_totals;
    use rust_decimal_macros::dec;

    #[test]
    fn blank_party_has_only_placeholder() {
        assert_eq!(party_lines(&Party::default()), vec!["—"]);
    }

    #[test]
    fn full_party_block() {
        let party = Party {
            name: "Skyline Builders LLC".into(),
            address: "1020 Market Street\r\nSuite 500".into(),
            email: "procurement@skyline.example".into(),
            phone: "  ".into(),
            vat_number: "US45-9876543".into(),
        };
        assert_eq!(
            party_lines(&party),
            vec![
                "Skyline Builders LLC",
                "1020 Market Street",
                "Suite 500",
                "Email: procurement@skyline.example",
                "VAT: US45-9876543",
            ]
        );
    }

    #[test]
    fn item_line_format() {
        let item = LineItem::new("1", "Ready-Mix Concrete", dec!(1.5), dec!(199.99));
        assert_eq!(
            item_line(0, &item, "EUR"),
            "1. Ready-Mix Concrete — 1.5 × €199.99 = €299.99"
        );
        let unnamed = LineItem::new("2", "", dec!(2), dec!(3));
        assert_eq!(item_line(1, &unnamed, "USD"), "2. Item — 2 × $3.00 = $6.00");
    }

    #[test]
    fn empty_items_give_placeholder() {
        assert_eq!(item_lines(&DocumentData::default()), vec![NO_ITEMS_TEXT]);
    }

    #[test]
    fn summary_formats_rate_and_amounts() {
        let data = DocumentData {
            line_items: vec![LineItem::new("1", "Lube", dec!(3), dec!(895))],
            tax_rate: dec!(6.75),
            ..Default::default()
        };
        let totals = calculate_totals(&data);
        assert_eq!(
            summary_lines(&data, &totals),
            [
                "Subtotal: $2685.00".to_string(),
                "Tax (6.75%): $181.24".to_string(),
                "Total: $2866.24".to_string(),
            ]
        );
    }

    #[test]
    fn notes_split_and_blank_notes_vanish() {
        let mut data = DocumentData {
            notes: "Deliver by 7 AM\nDock B".into(),
            ..Default::default()
        };
        assert_eq!(note_lines(&data), vec!["Deliver by 7 AM", "Dock B"]);
        data.notes = " \n ".into();
        assert!(note_lines(&data).is_empty());
    }

    #[test]
    fn whitespace_only_notes_print_nothing() {
        let data = DocumentData {
            notes: "   ".into(),
            ..Default::default()
        };
        assert!(note_lines(&data).is_empty());
    }
}
