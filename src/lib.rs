//! # pokit
//!
//! Purchase-order export core: a totals calculator plus two document writers
//! that build their output byte by byte, with no PDF or Office library.
//!
//! - [`pdf`]: a single-page PDF 1.4 (Helvetica, WinAnsi text) with a hand-built
//!   object graph and cross-reference table.
//! - [`docx`]: an OOXML word-processing package in a stored (uncompressed) ZIP
//!   archive with its own CRC-32.
//!
//! All monetary values use [`rust_decimal::Decimal`], never floating point.
//!
//! ## Quick Start
//!
//! ```rust
//! use pokit::core::*;
//! use rust_decimal_macros::dec;
//!
//! let po = DocumentBuilder::new("PO-2024-0001")
//!     .buyer(PartyBuilder::new("ACME Corp").email("buying@acme.test").build())
//!     .vendor(PartyBuilder::new("Bolt Supply").build())
//!     .add_line(LineItemBuilder::new("1", "Hex bolts", dec!(100), dec!(0.25)).build())
//!     .tax_rate(dec!(8))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(calculate_totals(&po).grand_total, dec!(27.00));
//!
//! let pdf = pokit::export(&po, ExportFormat::Pdf, &ExportConfig::default()).unwrap();
//! assert_eq!(pdf.file_name, "PO-2024-0001.pdf");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Document types, totals, currency formatting, PO numbering |
//! | `pdf` (default) | PDF generation |
//! | `docx` (default) | DOCX generation (XML via `quick-xml`, ZIP via `byteorder`) |
//! | `all` | Everything |

#[cfg(feature = "core")]
pub mod core;

#[cfg(feature = "pdf")]
pub mod pdf;

#[cfg(feature = "docx")]
pub mod docx;

#[cfg(any(feature = "pdf", feature = "docx"))]
mod export;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;

#[cfg(any(feature = "pdf", feature = "docx"))]
pub use export::{ExportedDocument, export};
