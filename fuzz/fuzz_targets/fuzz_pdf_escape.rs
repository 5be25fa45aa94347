#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let escaped = pokit::pdf::escape_pdf_string(s);
        // Every parenthesis in the escaped form must be preceded by a backslash.
        let bytes = escaped.as_bytes();
        let mut i = 0;
        while i < bytes.len() {
            match bytes[i] {
                b'\\' => i += 2,
                b'(' | b')' => panic!("unescaped parenthesis in {escaped:?}"),
                _ => i += 1,
            }
        }
        let _ = pokit::pdf::encode_win_ansi(&escaped);
    }
});
