use super::xml_utils::{XmlResult, XmlWriter};
use crate::core::DocumentError;

/// Run and paragraph formatting for a single paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParagraphStyle {
    pub bold: bool,
    pub italic: bool,
    pub centered: bool,
    /// Font size in half-points (`48` = 24pt).
    pub size: Option<u32>,
    /// Hex RGB without `#`, e.g. `"999999"`.
    pub color: Option<String>,
}

impl ParagraphStyle {
    pub fn plain() -> Self {
        Self::default()
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Self::default()
        }
    }

    pub fn with_italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn with_centered(mut self) -> Self {
        self.centered = true;
        self
    }

    pub fn with_size(mut self, half_points: u32) -> Self {
        self.size = Some(half_points);
        self
    }

    pub fn with_color(mut self, hex: impl Into<String>) -> Self {
        self.color = Some(hex.into());
        self
    }

    fn has_run_properties(&self) -> bool {
        self.bold || self.italic || self.size.is_some() || self.color.is_some()
    }
}

/// `<w:p>` with at most one run. Empty text still emits a run (`<w:t/>`)
/// so blank spacer paragraphs keep their height.
pub fn write_paragraph(
    w: &mut XmlWriter,
    text: &str,
    style: &ParagraphStyle,
) -> Result<(), DocumentError> {
    w.start_element("w:p")?;
    if style.centered {
        w.start_element("w:pPr")?
            .empty_element_with_attrs("w:jc", &[("w:val", "center")])?
            .end_element("w:pPr")?;
    }

    w.start_element("w:r")?;
    if style.has_run_properties() {
        w.start_element("w:rPr")?;
        if style.bold {
            w.empty_element("w:b")?;
        }
        if style.italic {
            w.empty_element("w:i")?;
        }
        if let Some(size) = style.size {
            let size = size.to_string();
            w.empty_element_with_attrs("w:sz", &[("w:val", &size)])?
                .empty_element_with_attrs("w:szCs", &[("w:val", &size)])?;
        }
        if let Some(color) = &style.color {
            w.empty_element_with_attrs("w:color", &[("w:val", color)])?;
        }
        w.end_element("w:rPr")?;
    }

    if text.is_empty() {
        w.empty_element("w:t")?;
    } else {
        w.text_element_with_attrs("w:t", text, &[("xml:space", "preserve")])?;
    }
    w.end_element("w:r")?.end_element("w:p")?;
    Ok(())
}

/// The paragraph as a standalone XML fragment.
pub fn paragraph(text: &str, style: &ParagraphStyle) -> XmlResult {
    let mut w = XmlWriter::fragment();
    write_paragraph(&mut w, text, style)?;
    w.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_paragraph() {
        insta::assert_snapshot!(
            paragraph("Subtotal: $10.00", &ParagraphStyle::plain()).unwrap(),
            @r#"<w:p><w:r><w:t xml:space="preserve">Subtotal: $10.00</w:t></w:r></w:p>"#
        );
    }

    #[test]
    fn empty_paragraph_keeps_run() {
        insta::assert_snapshot!(
            paragraph("", &ParagraphStyle::plain()).unwrap(),
            @"<w:p><w:r><w:t/></w:r></w:p>"
        );
    }

    #[test]
    fn fully_styled_paragraph() {
        let style = ParagraphStyle::bold()
            .with_italic()
            .with_centered()
            .with_size(48)
            .with_color("999999");
        insta::assert_snapshot!(
            paragraph("Purchase Order", &style).unwrap(),
            @r#"<w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:rPr><w:b/><w:i/><w:sz w:val="48"/><w:szCs w:val="48"/><w:color w:val="999999"/></w:rPr><w:t xml:space="preserve">Purchase Order</w:t></w:r></w:p>"#
        );
    }

    #[test]
    fn text_is_escaped() {
        let xml = paragraph("O'Brien & Sons <Ltd>", &ParagraphStyle::bold()).unwrap();
        assert!(xml.contains(">O&apos;Brien &amp; Sons &lt;Ltd&gt;</w:t>"));
    }
}
