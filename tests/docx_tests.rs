#![cfg(feature = "docx")]

use std::io::{Cursor, Read};

use chrono::{NaiveDate, TimeZone, Utc};
use pokit::core::*;
use pokit::docx::generate_docx_with;
use rust_decimal_macros::dec;
use zip::{CompressionMethod, ZipArchive};

fn config() -> ExportConfig {
    ExportConfig::default()
        .with_issue_date(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
        .with_generated_at(Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap())
}

fn read_part(bytes: &[u8], name: &str) -> String {
    let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
    let mut file = archive.by_name(name).unwrap();
    let mut out = String::new();
    file.read_to_string(&mut out).unwrap();
    out
}

#[test]
fn package_opens_with_independent_reader() {
    let bytes = generate_docx_with(&DocumentData::default(), &config()).unwrap();
    let mut archive = ZipArchive::new(Cursor::new(&bytes[..])).unwrap();
    let names: Vec<String> = (0..archive.len())
        .map(|i| archive.by_index(i).unwrap().name().to_string())
        .collect();
    assert_eq!(
        names,
        [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/app.xml",
            "docProps/core.xml",
            "word/_rels/document.xml.rels",
            "word/document.xml",
        ]
    );
    for i in 0..archive.len() {
        let file = archive.by_index(i).unwrap();
        assert_eq!(file.compression(), CompressionMethod::Stored);
        assert_eq!(file.size(), file.compressed_size());
    }
}

#[test]
fn buyer_name_is_xml_escaped() {
    let po = DocumentBuilder::new("PO-1")
        .buyer(PartyBuilder::new("O'Brien & Sons <Ltd>").build())
        .build()
        .unwrap();
    let xml = read_part(&generate_docx_with(&po, &config()).unwrap(), "word/document.xml");
    assert!(xml.contains("O&apos;Brien &amp; Sons &lt;Ltd&gt;"));
    assert!(!xml.contains("O'Brien"));
    assert!(!xml.contains("& Sons"));
    assert!(!xml.contains("<Ltd>"));
}

#[test]
fn every_user_field_is_escaped() {
    let po = DocumentBuilder::new("PO <1>")
        .buyer(
            PartyBuilder::new("A&B")
                .address("1 \"Quoted\" Rd")
                .email("x<y@z.test")
                .phone("1 & 2")
                .vat_number("<VAT>")
                .build(),
        )
        .vendor(PartyBuilder::new("C<D").build())
        .add_line(LineItemBuilder::new("1", "Nuts & bolts", dec!(1), dec!(1)).build())
        .notes("Don't <stack>")
        .build()
        .unwrap();
    let xml = read_part(&generate_docx_with(&po, &config()).unwrap(), "word/document.xml");
    for escaped in [
        "Purchase Order #: PO &lt;1&gt;",
        "A&amp;B",
        "1 &quot;Quoted&quot; Rd",
        "Email: x&lt;y@z.test",
        "Phone: 1 &amp; 2",
        "VAT: &lt;VAT&gt;",
        "C&lt;D",
        "1. Nuts &amp; bolts",
        "Don&apos;t &lt;stack&gt;",
    ] {
        assert!(xml.contains(escaped), "missing {escaped:?}");
    }
}

#[test]
fn document_body_matches_pdf_wording() {
    let po = DocumentBuilder::new("PO-2024-0001")
        .add_line(LineItemBuilder::new("1", "Chairs", dec!(4), dec!(125)).build())
        .tax_rate(dec!(10))
        .notes("Assemble on site")
        .build()
        .unwrap();
    let xml = read_part(&generate_docx_with(&po, &config()).unwrap(), "word/document.xml");
    for text in [
        ">Purchase Order<",
        ">Purchase Order #: PO-2024-0001<",
        ">Date: 6/15/2024<",
        ">1. Chairs — 4 × $125.00 = $500.00<",
        ">Subtotal: $500.00<",
        ">Tax (10%): $50.00<",
        ">Total: $550.00<",
        ">Notes<",
        ">Assemble on site<",
        ">Generated with Docu Builder Kit · Free Plan<",
    ] {
        assert!(xml.contains(text), "missing {text:?}");
    }
}

#[test]
fn core_properties_use_configured_timestamp() {
    let bytes = generate_docx_with(&DocumentData::default(), &config()).unwrap();
    let core = read_part(&bytes, "docProps/core.xml");
    assert!(core.contains("2024-06-15T12:00:00Z</dcterms:created>"));
    assert!(core.contains("2024-06-15T12:00:00Z</dcterms:modified>"));
    let app = read_part(&bytes, "docProps/app.xml");
    assert!(app.contains("<Application>Docu Builder Kit</Application>"));
}

#[test]
fn fixed_config_is_reproducible() {
    let po = DocumentBuilder::new("PO-9").build().unwrap();
    assert_eq!(
        generate_docx_with(&po, &config()).unwrap(),
        generate_docx_with(&po, &config()).unwrap()
    );
}
