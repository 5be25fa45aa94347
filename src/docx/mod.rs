//! DOCX export: OOXML parts packaged into a stored ZIP archive.
//!
//! # Example
//!
//! ```
//! use pokit::core::*;
//!
//! let doc = DocumentData::default();
//! let bytes = pokit::docx::generate_docx(&doc).unwrap();
//! assert!(bytes.starts_with(b"PK\x03\x04"));
//! ```

mod crc32;
mod document;
mod paragraph;
mod parts;
mod xml_utils;
mod zip;

pub use crc32::crc32;
pub use document::{RELATIONSHIPS_NS, WORDML_NS, document_xml};
pub use paragraph::{ParagraphStyle, paragraph, write_paragraph};
pub use parts::*;
pub use xml_utils::{XmlResult, XmlWriter, xml_escape};
pub use zip::{
    ArchiveEntry, CENTRAL_HEADER_LEN, CENTRAL_HEADER_SIGNATURE,
    END_OF_CENTRAL_DIRECTORY_SIGNATURE, END_RECORD_LEN, LOCAL_HEADER_LEN, LOCAL_HEADER_SIGNATURE,
    ZipWriter, create_zip_archive,
};

use crate::core::{DocumentData, DocumentError, ExportConfig};

/// Generate the DOCX with [`ExportConfig::default`].
pub fn generate_docx(data: &DocumentData) -> Result<Vec<u8>, DocumentError> {
    generate_docx_with(data, &ExportConfig::default())
}

/// Generate the DOCX.
pub fn generate_docx_with(
    data: &DocumentData,
    config: &ExportConfig,
) -> Result<Vec<u8>, DocumentError> {
    let parts = package_parts(data, config)?;
    let bytes = create_zip_archive(&parts)?;
    tracing::debug!(
        entries = parts.len(),
        bytes = bytes.len(),
        "generated purchase order DOCX"
    );
    Ok(bytes)
}
