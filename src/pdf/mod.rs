//! Single-page PDF export, written byte by byte.
//!
//! The file holds five objects (Font, content stream, Page, Pages and
//! Catalog) followed by a cross-reference table whose
//! offsets are taken from the output buffer as it grows.
//!
//! # Example
//!
//! ```
//! use pokit::core::*;
//!
//! let doc = DocumentData::default();
//! let bytes = pokit::pdf::generate_pdf(&doc).unwrap();
//! assert!(bytes.starts_with(b"%PDF-1.4"));
//! ```

mod content;
mod encoding;
mod escape;
mod writer;

pub use content::ContentStream;
pub use encoding::encode_win_ansi;
pub use escape::escape_pdf_string;
pub use writer::{ObjectId, PDF_HEADER, PdfBytes, PdfWriter, stream_object};

use crate::core::layout::{item_lines, note_lines, party_lines, po_number_text, summary_lines};
use crate::core::{
    DocumentData, DocumentError, ExportConfig, Totals, calculate_totals, try_calculate_totals,
};

/// US Letter in points.
pub const MEDIA_BOX: [u32; 4] = [0, 0, 612, 792];
/// Resource name of the single font.
pub const FONT_RESOURCE: &str = "F1";

const TITLE_SIZE: f32 = 20.0;
const BODY_SIZE: f32 = 12.0;
const LEADING: f32 = 16.0;
const WATERMARK_SIZE: f32 = 42.0;
const WATERMARK_GRAY: f32 = 0.85;
/// 45° rotation, translated into the middle of the page.
const WATERMARK_MATRIX: [f32; 6] = [0.7071, 0.7071, -0.7071, 0.7071, 220.0, 220.0];

/// Generate the PDF with [`ExportConfig::default`].
pub fn generate_pdf(data: &DocumentData) -> Result<Vec<u8>, DocumentError> {
    generate_pdf_with(data, &ExportConfig::default())
}

/// Generate the PDF.
///
/// Fails with [`DocumentError::AmountOutOfRange`] when the totals overflow.
pub fn generate_pdf_with(
    data: &DocumentData,
    config: &ExportConfig,
) -> Result<Vec<u8>, DocumentError> {
    let totals = try_calculate_totals(data)?;
    let lines = lines_with_totals(data, config, &totals);
    let content = content_stream(&lines, config);

    let mut writer = PdfWriter::new();
    let font = writer.add(
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>",
    );
    let contents = writer.add(stream_object(&content));
    let page = writer.reserve();
    let pages = writer.reserve();
    let [x0, y0, x1, y1] = MEDIA_BOX;
    writer.set(
        page,
        format!(
            "<< /Type /Page /Parent {} /MediaBox [{x0} {y0} {x1} {y1}] /Contents {} /Resources << /Font << /{FONT_RESOURCE} {} >> >> >>",
            pages.reference(),
            contents.reference(),
            font.reference(),
        ),
    )?;
    writer.set(
        pages,
        format!("<< /Type /Pages /Kids [{}] /Count 1 >>", page.reference()),
    )?;
    let catalog = writer.add(format!("<< /Type /Catalog /Pages {} >>", pages.reference()));

    let objects = writer.object_count();
    let pdf = writer.finish(catalog)?;
    tracing::debug!(
        objects,
        lines = lines.len(),
        content_bytes = content.len(),
        bytes = pdf.bytes.len(),
        "generated purchase order PDF"
    );
    Ok(pdf.bytes)
}

/// Lines printed below the title, in order.
pub fn display_lines(data: &DocumentData, config: &ExportConfig) -> Vec<String> {
    lines_with_totals(data, config, &calculate_totals(data))
}

fn lines_with_totals(data: &DocumentData, config: &ExportConfig, totals: &Totals) -> Vec<String> {
    let indent = |line: String| format!("  {line}");
    let mut lines = vec![
        format!("PO Number: {}", po_number_text(data)),
        format!("Date: {}", config.display_date()),
        String::new(),
        "Buyer".to_string(),
    ];
    lines.extend(party_lines(&data.buyer).into_iter().map(indent));
    lines.push(String::new());
    lines.push("Vendor".to_string());
    lines.extend(party_lines(&data.vendor).into_iter().map(indent));
    lines.push(String::new());
    lines.push("Line Items".to_string());
    lines.extend(item_lines(data).into_iter().map(indent));

    lines.push(String::new());
    lines.extend(summary_lines(data, totals));

    let notes = note_lines(data);
    if !notes.is_empty() {
        lines.push(String::new());
        lines.push("Notes:".to_string());
        lines.extend(notes.into_iter().map(indent));
    }
    lines
}

/// Text block (title, then one line per `T*`) followed by the watermark block.
fn content_stream(lines: &[String], config: &ExportConfig) -> Vec<u8> {
    let mut cs = ContentStream::new();
    cs.begin_text()
        .set_font(FONT_RESOURCE, TITLE_SIZE)
        .move_text(50.0, 780.0)
        .show_text(&config.title)
        .set_font(FONT_RESOURCE, BODY_SIZE)
        .move_text(0.0, -24.0)
        .set_leading(LEADING);
    for (idx, line) in lines.iter().enumerate() {
        if idx > 0 {
            cs.next_line();
        }
        cs.show_text(line);
    }
    cs.end_text();

    cs.save_state()
        .transform(WATERMARK_MATRIX)
        .set_fill_gray(WATERMARK_GRAY)
        .begin_text()
        .set_font(FONT_RESOURCE, WATERMARK_SIZE)
        .move_text(0.0, 0.0)
        .show_text(&config.watermark)
        .end_text()
        .restore_state();
    cs.into_bytes()
}
