//! `word/document.xml`: the paragraph sequence for one purchase order.

use super::paragraph::{ParagraphStyle, write_paragraph};
use super::xml_utils::{XmlResult, XmlWriter};
use crate::core::layout::{item_lines, note_lines, party_lines, po_number_text, summary_lines};
use crate::core::{DocumentData, DocumentError, ExportConfig, Party, try_calculate_totals};

pub const WORDML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// Title size in half-points (24pt).
const TITLE_SIZE: u32 = 48;
const WATERMARK_COLOR: &str = "999999";

/// Build the main document part.
pub fn document_xml(data: &DocumentData, config: &ExportConfig) -> XmlResult {
    let mut w = XmlWriter::new()?;
    w.start_element_with_attrs(
        "w:document",
        &[("xmlns:w", WORDML_NS), ("xmlns:r", RELATIONSHIPS_NS)],
    )?
    .start_element("w:body")?;

    write_body(&mut w, data, config)?;
    write_section_properties(&mut w)?;

    w.end_element("w:body")?.end_element("w:document")?;
    w.into_string()
}

fn write_body(
    w: &mut XmlWriter,
    data: &DocumentData,
    config: &ExportConfig,
) -> Result<(), DocumentError> {
    let plain = ParagraphStyle::plain();
    let bold = ParagraphStyle::bold();

    write_paragraph(
        w,
        &config.title,
        &ParagraphStyle::bold().with_centered().with_size(TITLE_SIZE),
    )?;
    write_paragraph(
        w,
        &format!("Purchase Order #: {}", po_number_text(data)),
        &plain,
    )?;
    write_paragraph(w, &format!("Date: {}", config.display_date()), &plain)?;
    write_paragraph(w, "", &plain)?;

    write_party(w, "Buyer", &data.buyer)?;
    write_paragraph(w, "", &plain)?;
    write_party(w, "Vendor", &data.vendor)?;
    write_paragraph(w, "", &plain)?;

    write_paragraph(w, "Line Items", &bold)?;
    for line in item_lines(data) {
        write_paragraph(w, &line, &plain)?;
    }
    write_paragraph(w, "", &plain)?;

    let totals = try_calculate_totals(data)?;
    let [subtotal, tax, total] = summary_lines(data, &totals);
    write_paragraph(w, &subtotal, &plain)?;
    write_paragraph(w, &tax, &plain)?;
    write_paragraph(w, &total, &bold)?;

    let notes = note_lines(data);
    if !notes.is_empty() {
        write_paragraph(w, "", &plain)?;
        write_paragraph(w, "Notes", &bold)?;
        for line in &notes {
            write_paragraph(w, line, &plain)?;
        }
    }

    write_paragraph(w, "", &plain)?;
    write_paragraph(
        w,
        &config.watermark,
        &ParagraphStyle::plain()
            .with_italic()
            .with_centered()
            .with_color(WATERMARK_COLOR),
    )
}

fn write_party(w: &mut XmlWriter, heading: &str, party: &Party) -> Result<(), DocumentError> {
    write_paragraph(w, heading, &ParagraphStyle::bold())?;
    let plain = ParagraphStyle::plain();
    for line in party_lines(party) {
        write_paragraph(w, &line, &plain)?;
    }
    Ok(())
}

/// US Letter, one-inch margins (twips).
fn write_section_properties(w: &mut XmlWriter) -> Result<(), DocumentError> {
    w.start_element("w:sectPr")?
        .empty_element_with_attrs("w:pgSz", &[("w:w", "12240"), ("w:h", "15840")])?
        .empty_element_with_attrs(
            "w:pgMar",
            &[
                ("w:top", "1440"),
                ("w:right", "1440"),
                ("w:bottom", "1440"),
                ("w:left", "1440"),
                ("w:header", "708"),
                ("w:footer", "708"),
                ("w:gutter", "0"),
            ],
        )?
        .empty_element_with_attrs("w:cols", &[("w:space", "708")])?
        .empty_element_with_attrs("w:docGrid", &[("w:linePitch", "360")])?
        .end_element("w:sectPr")?;
    Ok(())
}
