use chrono::NaiveDate;
use pokit::core::layout::{item_lines, party_lines, summary_lines};
use pokit::core::*;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn buyer() -> Party {
    PartyBuilder::new("ACME Corp")
        .address("100 Main St\nSpringfield, IL 62701")
        .email("purchasing@acme.test")
        .phone("+1 555 0100")
        .build()
}

fn vendor() -> Party {
    PartyBuilder::new("Bolt Supply Ltd")
        .address("Unit 4\r\nIndustrial Estate")
        .vat_number("GB123456789")
        .build()
}

// --- Totals ---

#[test]
fn office_supplies_order() {
    let po = DocumentBuilder::new("PO-2024-0042")
        .buyer(buyer())
        .vendor(vendor())
        .add_line(LineItemBuilder::new("1", "Copy paper (case)", dec!(12), dec!(38.50)).build())
        .add_line(LineItemBuilder::new("2", "Toner", dec!(3), dec!(89.99)).build())
        .tax_rate(dec!(7.25))
        .build()
        .unwrap();

    let totals = calculate_totals(&po);
    assert_eq!(totals.subtotal, dec!(731.97));
    assert_eq!(totals.tax_amount, dec!(53.067825));
    assert_eq!(totals.grand_total, dec!(785.037825));
    assert_eq!(format_money(totals.grand_total, &po.currency), "$785.04");
}

#[test]
fn stored_total_wins_over_quantity_times_price() {
    let po = DocumentBuilder::new("PO-1")
        .add_line(
            LineItemBuilder::new("1", "Negotiated bundle", dec!(10), dec!(5))
                .total(dec!(45))
                .build(),
        )
        .build()
        .unwrap();
    assert_eq!(calculate_totals(&po).subtotal, dec!(45));
}

#[test]
fn missing_total_falls_back_to_product() {
    let po = DocumentBuilder::new("PO-1")
        .add_line(
            LineItemBuilder::new("1", "Unpriced", dec!(3), dec!(1.333))
                .without_total()
                .build(),
        )
        .build()
        .unwrap();
    assert_eq!(calculate_totals(&po).subtotal, dec!(3.999));
}

#[test]
fn negative_tax_rate_is_not_clamped() {
    let po = DocumentBuilder::new("PO-1")
        .add_line(LineItemBuilder::new("1", "Credit", dec!(1), dec!(100)).build())
        .tax_rate(dec!(-10))
        .build()
        .unwrap();
    let totals = calculate_totals(&po);
    assert_eq!(totals.tax_amount, dec!(-10));
    assert_eq!(totals.grand_total, dec!(90));
}

// --- Builder ---

#[test]
fn duplicate_line_ids_rejected() {
    let result = DocumentBuilder::new("PO-1")
        .add_line(LineItemBuilder::new("1", "A", dec!(1), dec!(1)).build())
        .add_line(LineItemBuilder::new("1", "B", dec!(1), dec!(1)).build())
        .build();
    assert!(matches!(result, Err(DocumentError::Builder(_))));
}

#[test]
fn line_item_setters_keep_total_in_sync() {
    let mut po = DocumentBuilder::new("PO-1")
        .add_line(LineItemBuilder::new("a", "Widget", dec!(2), dec!(10)).build())
        .build()
        .unwrap();

    let line = po.line_item_mut("a").unwrap();
    line.set_quantity(dec!(3));
    assert_eq!(line.total, Some(dec!(30)));
    line.set_unit_price(dec!(0.333));
    assert_eq!(line.total, Some(dec!(1.00)));

    assert!(po.line_item_mut("missing").is_none());
    assert_eq!(po.remove_line_item("a").unwrap().id, "a");
    assert!(po.line_items.is_empty());
}

// --- JSON ingestion ---

#[test]
fn form_payload_round_trip() {
    let json = r#"{
        "buyer": {"name": "ACME Corp", "address": "1 Main St", "email": "", "phone": "", "vatNumber": ""},
        "vendor": {"name": "Bolt Supply"},
        "lineItems": [
            {"id": "li-1", "description": "Bolts", "quantity": "100", "unitPrice": "0.25", "total": "25.00"},
            {"id": "li-2", "description": "Nuts", "quantity": "100", "unitPrice": "0.10"}
        ],
        "currency": "EUR",
        "taxRate": "19",
        "notes": "Net 30",
        "poNumber": "PO-2024-0001"
    }"#;
    let po = DocumentData::from_json(json).unwrap();
    assert_eq!(po.line_items.len(), 2);
    assert_eq!(po.line_items[1].total, None);
    assert_eq!(po.tax_rate, dec!(19));

    let totals = calculate_totals(&po);
    assert_eq!(totals.subtotal, dec!(35));
    assert_eq!(format_money(totals.grand_total, &po.currency), "€41.65");

    let back = DocumentData::from_json(&po.to_json().unwrap()).unwrap();
    assert_eq!(back, po);
}

#[test]
fn null_and_malformed_payloads_rejected() {
    assert!(matches!(
        DocumentData::from_json("null"),
        Err(DocumentError::Parse(_))
    ));
    assert!(matches!(
        DocumentData::from_json("{\"lineItems\": 5}"),
        Err(DocumentError::Parse(_))
    ));
}

#[test]
fn empty_object_uses_defaults() {
    let po = DocumentData::from_json("{}").unwrap();
    assert_eq!(po, DocumentData::default());
    assert_eq!(po.currency, "USD");
}

// --- Display lines ---

#[test]
fn party_blocks() {
    assert_eq!(
        party_lines(&buyer()),
        vec![
            "ACME Corp",
            "100 Main St",
            "Springfield, IL 62701",
            "Email: purchasing@acme.test",
            "Phone: +1 555 0100",
        ]
    );
    assert_eq!(
        party_lines(&vendor()),
        vec!["Bolt Supply Ltd", "Unit 4", "Industrial Estate", "VAT: GB123456789"]
    );
}

#[test]
fn item_and_summary_lines_share_currency() {
    let po = DocumentBuilder::new("PO-1")
        .currency("GBP")
        .tax_rate(dec!(20))
        .add_line(LineItemBuilder::new("1", "", dec!(1.5), dec!(10)).build())
        .build()
        .unwrap();
    assert_eq!(item_lines(&po), vec!["1. Item — 1.5 × £10.00 = £15.00"]);
    assert_eq!(
        summary_lines(&po, &calculate_totals(&po)),
        ["Subtotal: £15.00", "Tax (20%): £3.00", "Total: £18.00"]
    );
}

// --- File naming ---

#[test]
fn file_names_from_po_numbers() {
    assert_eq!(file_name("PO-2024-0001", ExportFormat::Pdf), "PO-2024-0001.pdf");
    assert_eq!(file_name("PO #12 / ACME", ExportFormat::Docx), "PO-12-ACME.docx");
    assert_eq!(file_name("", ExportFormat::Pdf), "purchase-order.pdf");
    assert_eq!(ExportFormat::from_extension(".DOCX"), Some(ExportFormat::Docx));
}

// --- Numbering ---

#[test]
fn yearly_sequence_resets() {
    let mut seq = PoNumberSequence::new("PO-").with_year(2024);
    assert_eq!(seq.next_number(), "PO-2024-0001");
    assert_eq!(seq.next_number(), "PO-2024-0002");

    assert!(!seq.auto_advance(date(2024, 12, 31)));
    assert!(seq.auto_advance(date(2025, 1, 2)));
    assert_eq!(seq.next_number(), "PO-2025-0001");
    assert!(seq.advance_year(2025).is_err());
}

#[test]
fn config_controls_dates() {
    let config = ExportConfig::default().with_issue_date(date(2024, 1, 5));
    assert_eq!(config.display_date(), "1/5/2024");
    assert_eq!(config.resolved_issue_date(), date(2024, 1, 5));
}
