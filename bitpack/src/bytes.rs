//! Fixed-capacity little-endian byte buffers.
//!
//! [`ByteWriter`] appends whole-width values at a sequential cursor over a
//! fixed backing store; [`ByteReader`] mirrors it over a borrowed slice.
//! Both are consumed by the bit-level layer and reused across serialization
//! passes via [`ByteWriter::clear`]/[`ByteWriter::set_array`] rather than
//! reallocated.

use crate::error::{PackError, PackResult};

/// A fixed-capacity byte buffer with a sequential write cursor.
///
/// All multi-byte writes are little-endian. Writing past the capacity fails
/// with [`PackError::CapacityExceeded`]; callers must size buffers correctly
/// or split the message.
#[derive(Debug)]
pub struct ByteWriter {
    data: Vec<u8>,
    start: usize,
    count: usize,
}

impl ByteWriter {
    /// Creates a writer over a zeroed backing store of `capacity` bytes.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0; capacity],
            start: 0,
            count: 0,
        }
    }

    /// Wraps an existing backing store, writing from its first byte.
    #[must_use]
    pub fn with_storage(data: Vec<u8>) -> Self {
        Self {
            data,
            start: 0,
            count: 0,
        }
    }

    /// Bytes written since the last reset.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Usable capacity in bytes, measured from the rebind offset.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.len() - self.start
    }

    /// Rebinds the writer to a new backing store at `offset`, resetting the
    /// cursor.
    pub fn set_array(&mut self, data: Vec<u8>, offset: usize) {
        debug_assert!(offset <= data.len(), "offset beyond backing store");
        self.data = data;
        self.start = offset;
        self.count = 0;
    }

    /// Resets the cursor to the rebind offset without touching the backing
    /// store.
    pub fn clear(&mut self) {
        self.count = 0;
    }

    /// The written region.
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.data[self.start..self.start + self.count]
    }

    /// The whole backing store, including the region before the rebind
    /// offset and any unwritten tail.
    #[must_use]
    pub fn storage(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the writer, returning the backing store.
    #[must_use]
    pub fn into_storage(self) -> Vec<u8> {
        self.data
    }

    /// Writes a `u8`.
    pub fn write_u8(&mut self, value: u8) -> PackResult<()> {
        self.write_le(value.to_le_bytes())
    }

    /// Writes a little-endian `u16`.
    pub fn write_u16(&mut self, value: u16) -> PackResult<()> {
        self.write_le(value.to_le_bytes())
    }

    /// Writes a little-endian `u32`.
    pub fn write_u32(&mut self, value: u32) -> PackResult<()> {
        self.write_le(value.to_le_bytes())
    }

    /// Writes a little-endian `u64`.
    pub fn write_u64(&mut self, value: u64) -> PackResult<()> {
        self.write_le(value.to_le_bytes())
    }

    fn write_le<const N: usize>(&mut self, bytes: [u8; N]) -> PackResult<()> {
        let needed = self.count + N;
        if needed > self.capacity() {
            return Err(PackError::CapacityExceeded {
                needed,
                capacity: self.capacity(),
            });
        }
        let at = self.start + self.count;
        self.data[at..at + N].copy_from_slice(&bytes);
        self.count = needed;
        Ok(())
    }

    /// Mutable access to a written byte, for bit-level backpatching.
    ///
    /// `index` is relative to the rebind offset and must lie inside the
    /// backing store.
    pub(crate) fn byte_mut(&mut self, index: usize) -> &mut u8 {
        &mut self.data[self.start + index]
    }
}

/// A sequential little-endian reader over a borrowed byte buffer.
///
/// Readers are constructed per incoming pass; construction over a borrowed
/// slice is free, so reuse across passes is expressed by constructing anew.
#[derive(Debug)]
pub struct ByteReader<'a> {
    data: &'a [u8],
    start: usize,
    pos: usize,
}

impl<'a> ByteReader<'a> {
    /// Creates a reader over `data`, starting at its first byte.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            start: 0,
            pos: 0,
        }
    }

    /// Creates a reader that starts consuming at `offset`.
    #[must_use]
    pub const fn new_at(data: &'a [u8], offset: usize) -> Self {
        Self {
            data,
            start: offset,
            pos: 0,
        }
    }

    /// Bytes consumed since the start offset.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.pos
    }

    /// Bytes left to read.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.data.len().saturating_sub(self.start + self.pos)
    }

    /// Rewinds the cursor to the start offset.
    pub fn reset(&mut self) {
        self.pos = 0;
    }

    /// Reads a `u8`.
    pub fn read_u8(&mut self) -> PackResult<u8> {
        Ok(u8::from_le_bytes(self.read_le()?))
    }

    /// Reads a little-endian `u16`.
    pub fn read_u16(&mut self) -> PackResult<u16> {
        Ok(u16::from_le_bytes(self.read_le()?))
    }

    /// Reads a little-endian `u32`.
    pub fn read_u32(&mut self) -> PackResult<u32> {
        Ok(u32::from_le_bytes(self.read_le()?))
    }

    /// Reads a little-endian `u64`.
    pub fn read_u64(&mut self) -> PackResult<u64> {
        Ok(u64::from_le_bytes(self.read_le()?))
    }

    fn read_le<const N: usize>(&mut self) -> PackResult<[u8; N]> {
        if N > self.remaining() {
            return Err(PackError::EndOfBuffer {
                requested: N,
                available: self.remaining(),
            });
        }
        let at = self.start + self.pos;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[at..at + N]);
        self.pos += N;
        Ok(out)
    }
}
