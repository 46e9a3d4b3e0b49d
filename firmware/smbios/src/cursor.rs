//! Bounds-checked read view over an immutable byte buffer
//!
//! Every field read in the crate goes through [`ByteCursor`]. Offsets come
//! straight from firmware data, so all arithmetic is checked and a bad offset
//! turns into [`Error::OutOfBounds`] instead of a panic.

use crate::error::{Error, Result};

/// Little-endian reader over a byte slice
#[derive(Debug, Clone, Copy)]
pub struct ByteCursor<'a> {
    data: &'a [u8],
}

impl<'a> ByteCursor<'a> {
    /// Create a cursor over `data`
    pub const fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Buffer length
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// Is the buffer empty
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Underlying bytes
    pub const fn as_bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Borrow `len` bytes starting at `offset`
    pub fn slice(&self, offset: usize, len: usize) -> Result<&'a [u8]> {
        let end = offset.checked_add(len).ok_or(Error::OutOfBounds {
            offset,
            width: len,
            len: self.data.len(),
        })?;

        self.data.get(offset..end).ok_or(Error::OutOfBounds {
            offset,
            width: len,
            len: self.data.len(),
        })
    }

    /// Everything from `offset` to the end of the buffer
    pub fn tail(&self, offset: usize) -> Result<&'a [u8]> {
        self.data.get(offset..).ok_or(Error::OutOfBounds {
            offset,
            width: 0,
            len: self.data.len(),
        })
    }

    fn array<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        let bytes = self.slice(offset, N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    /// Read a byte
    pub fn read_u8(&self, offset: usize) -> Result<u8> {
        self.array::<1>(offset).map(|b| b[0])
    }

    /// Read a little-endian u16
    pub fn read_u16(&self, offset: usize) -> Result<u16> {
        self.array(offset).map(u16::from_le_bytes)
    }

    /// Read a little-endian u32
    pub fn read_u32(&self, offset: usize) -> Result<u32> {
        self.array(offset).map(u32::from_le_bytes)
    }

    /// Read a little-endian u64
    pub fn read_u64(&self, offset: usize) -> Result<u64> {
        self.array(offset).map(u64::from_le_bytes)
    }

    /// Read a fixed-size byte array
    pub fn read_bytes<const N: usize>(&self, offset: usize) -> Result<[u8; N]> {
        self.array(offset)
    }
}
