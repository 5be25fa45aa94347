use std::fmt::Display;

use super::encoding::encode_win_ansi;
use super::escape::escape_pdf_string;

/// Builder for a page content stream.
///
/// Each operator is written on its own line, so the finished stream is the
/// operators joined by `\n` plus a trailing `\n`. Text passed to
/// [`show_text`](Self::show_text) is escaped and WinAnsi-encoded.
#[derive(Debug, Default, Clone)]
pub struct ContentStream {
    buf: Vec<u8>,
    ops: usize,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    fn op(&mut self, line: impl Display) -> &mut Self {
        self.buf.extend_from_slice(line.to_string().as_bytes());
        self.buf.push(b'\n');
        self.ops += 1;
        self
    }

    /// `BT`
    pub fn begin_text(&mut self) -> &mut Self {
        self.op("BT")
    }

    /// `ET`
    pub fn end_text(&mut self) -> &mut Self {
        self.op("ET")
    }

    /// `/{font} {size} Tf`
    pub fn set_font(&mut self, font: &str, size: f32) -> &mut Self {
        self.op(format_args!("/{font} {size} Tf"))
    }

    /// `{x} {y} Td`
    pub fn move_text(&mut self, x: f32, y: f32) -> &mut Self {
        self.op(format_args!("{x} {y} Td"))
    }

    /// `{leading} TL`
    pub fn set_leading(&mut self, leading: f32) -> &mut Self {
        self.op(format_args!("{leading} TL"))
    }

    /// `T*`
    pub fn next_line(&mut self) -> &mut Self {
        self.op("T*")
    }

    /// `({text}) Tj`
    pub fn show_text(&mut self, text: &str) -> &mut Self {
        self.buf.push(b'(');
        self.buf
            .extend_from_slice(&encode_win_ansi(&escape_pdf_string(text)));
        self.op(") Tj")
    }

    /// `q`
    pub fn save_state(&mut self) -> &mut Self {
        self.op("q")
    }

    /// `Q`
    pub fn restore_state(&mut self) -> &mut Self {
        self.op("Q")
    }

    /// `{a} {b} {c} {d} {e} {f} cm`
    pub fn transform(&mut self, [a, b, c, d, e, f]: [f32; 6]) -> &mut Self {
        self.op(format_args!("{a} {b} {c} {d} {e} {f} cm"))
    }

    /// `{gray} g`
    pub fn set_fill_gray(&mut self, gray: f32) -> &mut Self {
        self.op(format_args!("{gray} g"))
    }

    /// Number of operators written so far.
    pub fn op_count(&self) -> usize {
        self.ops
    }

    /// Finished stream bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}
