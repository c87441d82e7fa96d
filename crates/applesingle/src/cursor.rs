//! Bounds-checked reads over an in-memory archive buffer
//!
//! The directory is consumed sequentially while payloads are fetched by
//! absolute offset, so the cursor supports both styles. Every read returns a
//! slice borrowed from the buffer; callers copy what they keep.

use crate::error::{AppleSingleError, Result};

/// One physical read performed while decoding
#[derive(Debug, Clone, Copy)]
pub struct ByteRead<'a> {
    /// Absolute offset of the first byte
    pub start: usize,
    /// Bytes read
    pub data: &'a [u8],
    /// What the bytes are ("Magic number", "Entry header", entry type name, ...)
    pub description: &'a str,
}

impl ByteRead<'_> {
    /// Number of bytes read
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the read was empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Exclusive end offset
    pub fn end(&self) -> usize {
        self.start + self.data.len()
    }
}

/// Sequential and random-access reader over a byte slice
#[derive(Debug, Clone)]
pub struct ByteCursor<'data> {
    data: &'data [u8],
    pos: usize,
}

impl<'data> ByteCursor<'data> {
    /// Create a cursor positioned at the start of `data`
    pub fn new(data: &'data [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Current sequential read position
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Total length of the underlying buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the underlying buffer is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read `len` bytes at an absolute offset without moving the cursor
    pub fn read_at(&self, start: usize, len: usize) -> Result<&'data [u8]> {
        start
            .checked_add(len)
            .and_then(|end| self.data.get(start..end))
            .ok_or(AppleSingleError::TruncatedData {
                offset: start,
                length: len,
                available: self.data.len(),
            })
    }

    /// Read `len` bytes at the cursor and advance past them
    pub fn read(&mut self, len: usize) -> Result<&'data [u8]> {
        let bytes = self.read_at(self.pos, len)?;
        self.pos += len;
        Ok(bytes)
    }
}
