//! WinAnsiEncoding for the standard Helvetica font.
//!
//! ASCII and the Latin-1 range map to themselves; the 0x80–0x9F block holds
//! the typographic extras (`€`, `—`, curly quotes, …). Anything else is
//! written as `?`.

/// Byte written for characters WinAnsi cannot represent.
pub const REPLACEMENT_BYTE: u8 = b'?';

/// Encode text into WinAnsi bytes.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars().map(win_ansi_byte).collect()
}

fn win_ansi_byte(c: char) -> u8 {
    let code = c as u32;
    match code {
        0x00..=0x7F | 0xA0..=0xFF => code as u8,
        _ => match c {
            '€' => 0x80,
            '‚' => 0x82,
            'ƒ' => 0x83,
            '„' => 0x84,
            '…' => 0x85,
            '†' => 0x86,
            '‡' => 0x87,
            'ˆ' => 0x88,
            '‰' => 0x89,
            'Š' => 0x8A,
            '‹' => 0x8B,
            'Œ' => 0x8C,
            'Ž' => 0x8E,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            '˜' => 0x98,
            '™' => 0x99,
            'š' => 0x9A,
            '›' => 0x9B,
            'œ' => 0x9C,
            'ž' => 0x9E,
            'Ÿ' => 0x9F,
            _ => REPLACEMENT_BYTE,
        },
    }
}
