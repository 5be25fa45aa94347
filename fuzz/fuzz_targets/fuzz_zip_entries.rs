#![no_main]

use libfuzzer_sys::fuzz_target;
use pokit::docx::{ArchiveEntry, create_zip_archive};

fuzz_target!(|data: &[u8]| {
    // Split the input into (name, content) pairs at 0xFF bytes.
    let entries: Vec<ArchiveEntry> = data
        .split(|&b| b == 0xFF)
        .collect::<Vec<_>>()
        .chunks(2)
        .map(|pair| {
            let name = String::from_utf8_lossy(pair[0]).into_owned();
            let content = pair.get(1).copied().unwrap_or_default();
            ArchiveEntry::new(name, content)
        })
        .collect();
    let zip = create_zip_archive(&entries).unwrap();
    let local: usize = entries
        .iter()
        .map(|e| 30 + e.path.len() + e.content.len())
        .sum();
    let eocd = &zip[zip.len() - 22..];
    let cd_offset = u32::from_le_bytes([eocd[16], eocd[17], eocd[18], eocd[19]]) as usize;
    assert_eq!(cd_offset, local);
});
