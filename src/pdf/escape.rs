/// Escape text for use inside a PDF literal string `( … )`.
///
/// Backslash, both parentheses and the control characters that have named
/// escapes (`\b \t \n \r \f`) are escaped in a single pass, so an existing
/// backslash never turns into part of a parenthesis escape. The function is
/// total: every input has an escaped form.
pub fn escape_pdf_string(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '(' => out.push_str("\\("),
            ')' => out.push_str("\\)"),
            '\u{8}' => out.push_str("\\b"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{c}' => out.push_str("\\f"),
            _ => out.push(c),
        }
    }
    out
}
