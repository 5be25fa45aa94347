use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Base name used when the PO number is blank.
pub const DEFAULT_FILE_STEM: &str = "purchase-order";

static UNSAFE_FILE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9\-_.]+").expect("static pattern compiles"));

/// Output document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
        }
    }

    /// MIME type of the produced bytes.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::Docx => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Parse from a file extension (case-insensitive, leading dot allowed).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Derive a download file name from a PO number.
///
/// Every run of characters outside `[A-Za-z0-9-_.]` becomes a single `-`;
/// a blank PO number falls back to [`DEFAULT_FILE_STEM`].
pub fn file_name(po_number: &str, format: ExportFormat) -> String {
    let base = po_number.trim();
    let base = if base.is_empty() { DEFAULT_FILE_STEM } else { base };
    let safe = UNSAFE_FILE_CHARS.replace_all(base, "-");
    format!("{safe}.{}", format.extension())
}
