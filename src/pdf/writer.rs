//! Indirect-object graph and file serialization: header, objects,
//! cross-reference table and trailer.

use std::io::Write;

use crate::core::DocumentError;

/// PDF header line (without the newline).
pub const PDF_HEADER: &str = "%PDF-1.4";

/// Object number of an indirect object (generation is always 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ObjectId(u32);

impl ObjectId {
    pub fn number(&self) -> u32 {
        self.0
    }

    /// `N 0 R`
    pub fn reference(&self) -> String {
        format!("{} 0 R", self.0)
    }
}

/// Collects object bodies in object-number order and serializes them.
///
/// Numbers are assigned in creation order starting at 1. [`reserve`] hands
/// out a number before its body is known, so objects can reference objects
/// created after them (a Page naming its Parent).
///
/// [`reserve`]: PdfWriter::reserve
#[derive(Debug, Default)]
pub struct PdfWriter {
    objects: Vec<Option<Vec<u8>>>,
}

/// Serialized file plus the positions used to build it.
#[derive(Debug, Clone)]
pub struct PdfBytes {
    pub bytes: Vec<u8>,
    /// Byte offset of each object, index 0 = object 1.
    pub offsets: Vec<usize>,
    /// Byte offset of the `xref` keyword.
    pub xref_offset: usize,
}

impl PdfWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next object number without a body.
    pub fn reserve(&mut self) -> ObjectId {
        self.objects.push(None);
        ObjectId(self.objects.len() as u32)
    }

    /// Fill in the body of a reserved object.
    pub fn set(&mut self, id: ObjectId, body: impl Into<Vec<u8>>) -> Result<(), DocumentError> {
        let slot = (id.0 as usize)
            .checked_sub(1)
            .and_then(|idx| self.objects.get_mut(idx))
            .ok_or_else(|| DocumentError::Pdf(format!("object {} was never reserved", id.0)))?;
        *slot = Some(body.into());
        Ok(())
    }

    /// Allocate a number and set its body in one step.
    pub fn add(&mut self, body: impl Into<Vec<u8>>) -> ObjectId {
        self.objects.push(Some(body.into()));
        ObjectId(self.objects.len() as u32)
    }

    pub fn object_count(&self) -> usize {
        self.objects.len()
    }

    /// Serialize the file with `root` as the trailer's `/Root`.
    pub fn finish(self, root: ObjectId) -> Result<PdfBytes, DocumentError> {
        let mut out = Vec::new();
        writeln!(out, "{PDF_HEADER}")?;

        let mut offsets = Vec::with_capacity(self.objects.len());
        for (idx, body) in self.objects.iter().enumerate() {
            let number = idx + 1;
            let body = body
                .as_ref()
                .ok_or_else(|| DocumentError::Pdf(format!("object {number} has no body")))?;
            offsets.push(out.len());
            writeln!(out, "{number} 0 obj")?;
            out.extend_from_slice(body);
            write!(out, "\nendobj\n")?;
        }

        let size = self.objects.len() + 1;
        let xref_offset = out.len();
        writeln!(out, "xref")?;
        writeln!(out, "0 {size}")?;
        // Object 0 heads the free list
        writeln!(out, "0000000000 65535 f ")?;
        for offset in &offsets {
            writeln!(out, "{offset:010} 00000 n ")?;
        }

        writeln!(out, "trailer")?;
        writeln!(out, "<< /Size {size} /Root {} >>", root.reference())?;
        writeln!(out, "startxref")?;
        writeln!(out, "{xref_offset}")?;
        writeln!(out, "%%EOF")?;

        Ok(PdfBytes {
            bytes: out,
            offsets,
            xref_offset,
        })
    }
}

/// Body of a stream object: dictionary with the exact `/Length`, then the data.
///
/// `data` is expected to end with a newline so `endstream` starts its own line.
pub fn stream_object(data: &[u8]) -> Vec<u8> {
    let mut body = format!("<< /Length {} >>\nstream\n", data.len()).into_bytes();
    body.extend_from_slice(data);
    body.extend_from_slice(b"endstream");
    body
}
