//! Stored (uncompressed) ZIP archive writer.
//!
//! Layout per entry: local file header (30 bytes + name) followed by the raw
//! data. After the last entry come one central directory record per entry
//! (46 bytes + name) in the same order and the end-of-central-directory
//! record (22 bytes). All numeric fields are little-endian. ZIP64 is not
//! supported: more than 65 535 entries or any size or offset beyond
//! `u32::MAX` is rejected.

use byteorder::{LittleEndian, WriteBytesExt};

use super::crc32::crc32;
use crate::core::DocumentError;

pub const LOCAL_HEADER_SIGNATURE: u32 = 0x0403_4b50;
pub const CENTRAL_HEADER_SIGNATURE: u32 = 0x0201_4b50;
pub const END_OF_CENTRAL_DIRECTORY_SIGNATURE: u32 = 0x0605_4b50;

pub const LOCAL_HEADER_LEN: usize = 30;
pub const CENTRAL_HEADER_LEN: usize = 46;
pub const END_RECORD_LEN: usize = 22;

/// "Version needed to extract" / "version made by": 2.0.
const VERSION: u16 = 20;
const METHOD_STORE: u16 = 0;

/// One file in the archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub content: Vec<u8>,
}

impl ArchiveEntry {
    pub fn new(path: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug)]
struct CentralRecord {
    name: Vec<u8>,
    crc: u32,
    size: u32,
    offset: u32,
}

/// Appends entries to an in-memory archive; [`finish`](Self::finish) writes
/// the central directory.
#[derive(Debug, Default)]
pub struct ZipWriter {
    buf: Vec<u8>,
    records: Vec<CentralRecord>,
}

impl ZipWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write the local header and data for one file.
    pub fn add_file(&mut self, path: &str, data: &[u8]) -> Result<(), DocumentError> {
        if self.records.len() >= u16::MAX as usize {
            return Err(DocumentError::Archive(format!(
                "more than {} entries",
                u16::MAX
            )));
        }
        let name = path.as_bytes().to_vec();
        let name_len = to_u16(name.len(), "file name length")?;
        let size = to_u32(data.len(), "file size")?;
        let offset = to_u32(self.buf.len(), "local header offset")?;
        let crc = crc32(data);

        let buf = &mut self.buf;
        buf.write_u32::<LittleEndian>(LOCAL_HEADER_SIGNATURE)?;
        buf.write_u16::<LittleEndian>(VERSION)?;
        buf.write_u16::<LittleEndian>(0)?; // flags
        buf.write_u16::<LittleEndian>(METHOD_STORE)?;
        buf.write_u16::<LittleEndian>(0)?; // mod time
        buf.write_u16::<LittleEndian>(0)?; // mod date
        buf.write_u32::<LittleEndian>(crc)?;
        buf.write_u32::<LittleEndian>(size)?; // compressed
        buf.write_u32::<LittleEndian>(size)?; // uncompressed
        buf.write_u16::<LittleEndian>(name_len)?;
        buf.write_u16::<LittleEndian>(0)?; // extra field length
        buf.extend_from_slice(&name);
        buf.extend_from_slice(data);

        tracing::trace!(path, size, crc, offset, "zip entry");
        self.records.push(CentralRecord {
            name,
            crc,
            size,
            offset,
        });
        Ok(())
    }

    pub fn entry_count(&self) -> usize {
        self.records.len()
    }

    /// Write the central directory and end record, returning the archive.
    pub fn finish(mut self) -> Result<Vec<u8>, DocumentError> {
        let cd_offset = to_u32(self.buf.len(), "central directory offset")?;
        let entries = to_u16(self.records.len(), "entry count")?;

        for record in &self.records {
            let buf = &mut self.buf;
            buf.write_u32::<LittleEndian>(CENTRAL_HEADER_SIGNATURE)?;
            buf.write_u16::<LittleEndian>(VERSION)?; // made by
            buf.write_u16::<LittleEndian>(VERSION)?; // needed
            buf.write_u16::<LittleEndian>(0)?; // flags
            buf.write_u16::<LittleEndian>(METHOD_STORE)?;
            buf.write_u16::<LittleEndian>(0)?; // mod time
            buf.write_u16::<LittleEndian>(0)?; // mod date
            buf.write_u32::<LittleEndian>(record.crc)?;
            buf.write_u32::<LittleEndian>(record.size)?;
            buf.write_u32::<LittleEndian>(record.size)?;
            buf.write_u16::<LittleEndian>(record.name.len() as u16)?;
            buf.write_u16::<LittleEndian>(0)?; // extra field length
            buf.write_u16::<LittleEndian>(0)?; // comment length
            buf.write_u16::<LittleEndian>(0)?; // disk number start
            buf.write_u16::<LittleEndian>(0)?; // internal attributes
            buf.write_u32::<LittleEndian>(0)?; // external attributes
            buf.write_u32::<LittleEndian>(record.offset)?;
            buf.extend_from_slice(&record.name);
        }

        let cd_size = to_u32(self.buf.len() - cd_offset as usize, "central directory size")?;
        let buf = &mut self.buf;
        buf.write_u32::<LittleEndian>(END_OF_CENTRAL_DIRECTORY_SIGNATURE)?;
        buf.write_u16::<LittleEndian>(0)?; // this disk
        buf.write_u16::<LittleEndian>(0)?; // disk with central directory
        buf.write_u16::<LittleEndian>(entries)?; // entries on this disk
        buf.write_u16::<LittleEndian>(entries)?; // total entries
        buf.write_u32::<LittleEndian>(cd_size)?;
        buf.write_u32::<LittleEndian>(cd_offset)?;
        buf.write_u16::<LittleEndian>(0)?; // comment length

        Ok(self.buf)
    }
}

/// Package `entries` in order.
pub fn create_zip_archive(entries: &[ArchiveEntry]) -> Result<Vec<u8>, DocumentError> {
    let mut zip = ZipWriter::new();
    for entry in entries {
        zip.add_file(&entry.path, &entry.content)?;
    }
    zip.finish()
}

fn to_u16(value: usize, what: &str) -> Result<u16, DocumentError> {
    u16::try_from(value).map_err(|_| DocumentError::Archive(format!("{what} {value} exceeds u16")))
}

fn to_u32(value: usize, what: &str) -> Result<u32, DocumentError> {
    u32::try_from(value).map_err(|_| DocumentError::Archive(format!("{what} {value} exceeds u32")))
}
