//! Build a purchase order and write it as PDF and DOCX.
//!
//! ```sh
//! RUST_LOG=pokit=debug cargo run --example export_purchase_order -- out/
//! ```

use std::path::PathBuf;

use pokit::core::*;
use rust_decimal_macros::dec;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("pokit=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let out_dir = PathBuf::from(std::env::args().nth(1).unwrap_or_else(|| ".".into()));
    std::fs::create_dir_all(&out_dir)?;

    let mut numbers = PoNumberSequence::new("PO-").with_year(2024);
    let po = DocumentBuilder::new(numbers.next_number())
        .buyer(
            PartyBuilder::new("ACME Corp")
                .address("100 Main St\nSpringfield, IL 62701")
                .email("purchasing@acme.test")
                .phone("+1 555 0100")
                .build(),
        )
        .vendor(
            PartyBuilder::new("O'Brien & Sons <Ltd>")
                .address("4 Harbour Rd\nCork")
                .vat_number("IE1234567T")
                .build(),
        )
        .add_line(LineItemBuilder::new("1", "Steel brackets (pack of 10)", dec!(12), dec!(14.5)).build())
        .add_line(LineItemBuilder::new("2", "Monitor arm", dec!(1.5), dec!(199.99)).build())
        .currency("EUR")
        .tax_rate(dec!(23))
        .notes("Deliver to loading bay 2\nInvoice quoting the PO number")
        .build()?;

    let totals = calculate_totals(&po);
    println!(
        "{}: subtotal {}, tax {}, total {}",
        po.po_number,
        format_money(totals.subtotal, &po.currency),
        format_money(totals.tax_amount, &po.currency),
        format_money(totals.grand_total, &po.currency),
    );

    let config = ExportConfig::default();
    for format in [ExportFormat::Pdf, ExportFormat::Docx] {
        let doc = pokit::export(&po, format, &config)?;
        let path = out_dir.join(&doc.file_name);
        std::fs::write(&path, &doc.bytes)?;
        println!("wrote {} ({} bytes, {})", path.display(), doc.bytes.len(), doc.mime_type);
    }
    Ok(())
}
