use crate::core::{DocumentData, DocumentError, ExportConfig, ExportFormat, file_name};

/// A finished export, ready to download or attach.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub bytes: Vec<u8>,
    pub format: ExportFormat,
    pub mime_type: &'static str,
    /// Derived from the PO number, e.g. `PO-2024-0001.pdf`.
    pub file_name: String,
}

/// Render `data` in `format`.
///
/// Returns [`DocumentError::UnsupportedFormat`] when the format's cargo
/// feature is disabled and [`DocumentError::AmountOutOfRange`] when the
/// totals overflow.
pub fn export(
    data: &DocumentData,
    format: ExportFormat,
    config: &ExportConfig,
) -> Result<ExportedDocument, DocumentError> {
    let bytes = match format {
        #[cfg(feature = "pdf")]
        ExportFormat::Pdf => crate::pdf::generate_pdf_with(data, config)?,
        #[cfg(feature = "docx")]
        ExportFormat::Docx => crate::docx::generate_docx_with(data, config)?,
        #[allow(unreachable_patterns)]
        other => return Err(DocumentError::UnsupportedFormat(other.extension())),
    };
    Ok(ExportedDocument {
        bytes,
        format,
        mime_type: format.mime_type(),
        file_name: file_name(&data.po_number, format),
    })
}
