use std::borrow::Cow;
use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::escape::escape;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::core::DocumentError;

pub type XmlResult = Result<String, DocumentError>;

fn xml_io(e: std::io::Error) -> DocumentError {
    DocumentError::Xml(format!("XML write error: {e}"))
}

/// Escape user text for XML content: `& < > " '` become entities.
///
/// Characters XML 1.0 forbids outright (C0 controls other than tab, newline
/// and carriage return) are dropped first, since no entity can carry them.
pub fn xml_escape(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_forbidden_xml_char) {
        let cleaned: String = text.chars().filter(|c| !is_forbidden_xml_char(*c)).collect();
        Cow::Owned(escape(cleaned.as_str()).into_owned())
    } else {
        escape(text)
    }
}

fn is_forbidden_xml_char(c: char) -> bool {
    matches!(c, '\u{0}'..='\u{8}' | '\u{b}' | '\u{c}' | '\u{e}'..='\u{1f}' | '\u{fffe}' | '\u{ffff}')
}

/// Thin wrapper over `quick_xml::Writer` writing compact (unindented) XML.
pub struct XmlWriter {
    writer: Writer<Cursor<Vec<u8>>>,
}

impl XmlWriter {
    /// Start a standalone document with an XML declaration.
    pub fn new() -> Result<Self, DocumentError> {
        let mut writer = Self::fragment();
        writer
            .writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))
            .map_err(xml_io)?;
        Ok(writer)
    }

    /// Start an XML fragment without declaration.
    pub fn fragment() -> Self {
        Self {
            writer: Writer::new(Cursor::new(Vec::new())),
        }
    }

    pub fn into_string(self) -> XmlResult {
        let buf = self.writer.into_inner().into_inner();
        String::from_utf8(buf).map_err(|e| DocumentError::Xml(format!("XML UTF-8 error: {e}")))
    }

    pub fn start_element(&mut self, name: &str) -> Result<&mut Self, DocumentError> {
        self.writer
            .write_event(Event::Start(BytesStart::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn start_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, DocumentError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Start(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn end_element(&mut self, name: &str) -> Result<&mut Self, DocumentError> {
        self.writer
            .write_event(Event::End(BytesEnd::new(name)))
            .map_err(xml_io)?;
        Ok(self)
    }

    /// Self-closing element, e.g. `<w:b/>`.
    pub fn empty_element(&mut self, name: &str) -> Result<&mut Self, DocumentError> {
        self.empty_element_with_attrs(name, &[])
    }

    /// Self-closing element with attributes, e.g. `<w:jc w:val="center"/>`.
    pub fn empty_element_with_attrs(
        &mut self,
        name: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, DocumentError> {
        let mut elem = BytesStart::new(name);
        for (k, v) in attrs {
            elem.push_attribute((*k, *v));
        }
        self.writer
            .write_event(Event::Empty(elem))
            .map_err(xml_io)?;
        Ok(self)
    }

    /// Escaped character data.
    pub fn text(&mut self, text: &str) -> Result<&mut Self, DocumentError> {
        self.writer
            .write_event(Event::Text(BytesText::from_escaped(xml_escape(text))))
            .map_err(xml_io)?;
        Ok(self)
    }

    pub fn text_element_with_attrs(
        &mut self,
        name: &str,
        text: &str,
        attrs: &[(&str, &str)],
    ) -> Result<&mut Self, DocumentError> {
        self.start_element_with_attrs(name, attrs)?;
        self.text(text)?;
        self.end_element(name)
    }
}
