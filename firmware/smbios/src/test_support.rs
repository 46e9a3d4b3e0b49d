//! Synthetic table construction for tests

use crate::walker::{structure_type, Structure, StructureWalker};
use alloc::vec;
use alloc::vec::Vec;

/// Fixed-part field writer
///
/// Offsets are structure-relative, header included, so they match the
/// offsets used by the decoders.
#[derive(Debug, Clone)]
pub struct Fields {
    bytes: Vec<u8>,
}

impl Fields {
    /// Fixed part of `length` bytes (header included), zero filled
    pub fn new(length: usize) -> Self {
        Self { bytes: vec![0; length - 4] }
    }

    pub fn u8(mut self, offset: usize, value: u8) -> Self {
        self.bytes[offset - 4] = value;
        self
    }

    pub fn u16(self, offset: usize, value: u16) -> Self {
        self.raw(offset, &value.to_le_bytes())
    }

    pub fn u32(self, offset: usize, value: u32) -> Self {
        self.raw(offset, &value.to_le_bytes())
    }

    pub fn u64(self, offset: usize, value: u64) -> Self {
        self.raw(offset, &value.to_le_bytes())
    }

    pub fn raw(mut self, offset: usize, value: &[u8]) -> Self {
        self.bytes[offset - 4..offset - 4 + value.len()].copy_from_slice(value);
        self
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }
}

/// Structure table builder
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    data: Vec<u8>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a structure: header, `fields` after the header, string area
    pub fn structure(mut self, kind: u8, handle: u16, fields: &[u8], strings: &[&str]) -> Self {
        let length = u8::try_from(4 + fields.len()).expect("fixed part fits in u8");
        self.data.push(kind);
        self.data.push(length);
        self.data.extend_from_slice(&handle.to_le_bytes());
        self.data.extend_from_slice(fields);

        if strings.is_empty() {
            self.data.extend_from_slice(&[0, 0]);
        } else {
            for s in strings {
                self.data.extend_from_slice(s.as_bytes());
                self.data.push(0);
            }
            self.data.push(0);
        }
        self
    }

    /// Append a structure from a [`Fields`] writer
    pub fn fields(self, kind: u8, handle: u16, fields: &Fields, strings: &[&str]) -> Self {
        self.structure(kind, handle, fields.as_slice(), strings)
    }

    /// Append the end-of-table structure
    pub fn end_of_table(self) -> Self {
        self.structure(structure_type::END_OF_TABLE, 0xFEFF, &[], &[])
    }

    /// Structure table bytes
    pub fn build(self) -> Vec<u8> {
        self.data
    }

    /// Firmware blob: 8-byte prologue followed by the table
    pub fn blob(self, major: u8, minor: u8) -> Vec<u8> {
        let table = self.data;
        let mut blob = vec![0x00, major, minor, 0x00];
        blob.extend_from_slice(&(table.len() as u32).to_le_bytes());
        blob.extend_from_slice(&table);
        blob
    }
}

/// Build a one-structure table and hand its view to `f`
pub fn with_structure<R>(
    kind: u8,
    fields: &Fields,
    strings: &[&str],
    f: impl FnOnce(&Structure<'_>) -> R,
) -> R {
    let table = TableBuilder::new()
        .fields(kind, 0x0100, fields, strings)
        .end_of_table()
        .build();
    let structure = StructureWalker::new(&table)
        .next()
        .expect("table holds one structure");
    f(&structure)
}
