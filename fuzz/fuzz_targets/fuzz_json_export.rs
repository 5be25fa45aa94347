#![no_main]

use libfuzzer_sys::fuzz_target;
use pokit::core::{DocumentData, ExportConfig};

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Parse errors are fine; any document that parses must export.
        if let Ok(doc) = DocumentData::from_json(s) {
            let config = ExportConfig::default();
            pokit::pdf::generate_pdf_with(&doc, &config).unwrap();
            pokit::docx::generate_docx_with(&doc, &config).unwrap();
        }
    }
});
