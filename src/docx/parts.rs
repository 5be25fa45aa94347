//! Fixed-shape package parts around `word/document.xml`.

use super::document::document_xml;
use super::xml_utils::xml_escape;
use super::zip::ArchiveEntry;
use crate::core::{DocumentData, DocumentError, ExportConfig};

pub const CONTENT_TYPES_PATH: &str = "[Content_Types].xml";
pub const PACKAGE_RELS_PATH: &str = "_rels/.rels";
pub const APP_PROPS_PATH: &str = "docProps/app.xml";
pub const CORE_PROPS_PATH: &str = "docProps/core.xml";
pub const DOCUMENT_RELS_PATH: &str = "word/_rels/document.xml.rels";
pub const DOCUMENT_PATH: &str = "word/document.xml";

const CORE_SUBJECT: &str = "Generated Purchase Order";

pub fn content_types_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
</Types>"#
        .to_string()
}

pub fn package_rels_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties" Target="docProps/app.xml"/>
</Relationships>"#
        .to_string()
}

pub fn app_xml(config: &ExportConfig) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <Application>{application}</Application>
</Properties>"#,
        application = xml_escape(&config.application),
    )
}

/// Core properties; `created` and `modified` both carry the export timestamp.
pub fn core_xml(config: &ExportConfig) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{title}</dc:title>
  <dc:subject>{CORE_SUBJECT}</dc:subject>
  <dc:creator>{creator}</dc:creator>
  <cp:lastModifiedBy>{creator}</cp:lastModifiedBy>
  <dcterms:created xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{timestamp}</dcterms:modified>
</cp:coreProperties>"#,
        title = xml_escape(&config.title),
        creator = xml_escape(&config.application),
        timestamp = config.timestamp(),
    )
}

/// The main part has no outgoing relationships (no images, styles or numbering).
pub fn document_rels_xml() -> String {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"></Relationships>"#
        .to_string()
}

/// All six parts in archive order.
pub fn package_parts(
    data: &DocumentData,
    config: &ExportConfig,
) -> Result<Vec<ArchiveEntry>, DocumentError> {
    Ok(vec![
        ArchiveEntry::new(CONTENT_TYPES_PATH, content_types_xml()),
        ArchiveEntry::new(PACKAGE_RELS_PATH, package_rels_xml()),
        ArchiveEntry::new(APP_PROPS_PATH, app_xml(config)),
        ArchiveEntry::new(CORE_PROPS_PATH, core_xml(config)),
        ArchiveEntry::new(DOCUMENT_RELS_PATH, document_rels_xml()),
        ArchiveEntry::new(DOCUMENT_PATH, document_xml(data, config)?),
    ])
}
