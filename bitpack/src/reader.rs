//! Bit-level reader mirroring the writer's packing order.

use crate::bytes::ByteReader;
use crate::error::{PackError, PackResult};
use crate::mask::MASKS;

/// A bit-level reader unpacking values in the exact bit order produced by
/// [`BitWriter`](crate::BitWriter).
///
/// Bits are pulled into a 64-bit refill register, a whole little-endian word
/// at a time while four bytes remain and single bytes near the tail. The
/// stream is a plain little-endian bit sequence, so the refill granularity
/// does not affect the decoded values. Whole-width reads take an aligned
/// fast path straight from the byte buffer while the register is empty,
/// mirroring the writer.
#[derive(Debug)]
pub struct BitReader<'a> {
    bytes: ByteReader<'a>,
    pending: u64,
    pending_bits: u32,
}

impl<'a> BitReader<'a> {
    /// Creates a reader over `data`, starting at its first byte.
    #[must_use]
    pub const fn new(data: &'a [u8]) -> Self {
        Self::with_reader(ByteReader::new(data))
    }

    /// Wraps an existing byte reader.
    #[must_use]
    pub const fn with_reader(bytes: ByteReader<'a>) -> Self {
        Self {
            bytes,
            pending: 0,
            pending_bits: 0,
        }
    }

    /// Total bits consumed from the stream so far.
    #[must_use]
    pub const fn bits_read(&self) -> usize {
        self.bytes.count() * 8 - self.pending_bits as usize
    }

    /// Bytes not yet pulled into the refill register.
    #[must_use]
    pub const fn remaining_bytes(&self) -> usize {
        self.bytes.remaining()
    }

    /// Reads the next `bits` bits, mirroring
    /// [`BitWriter::write_bits`](crate::BitWriter::write_bits).
    ///
    /// # Errors
    ///
    /// Returns [`PackError::InvalidBitCount`] if `bits > 32`, or
    /// [`PackError::EndOfBuffer`] if the buffer runs out mid-refill.
    pub fn read_bits(&mut self, bits: u8) -> PackResult<u32> {
        if bits > 32 {
            return Err(PackError::InvalidBitCount { bits, max_bits: 32 });
        }
        while self.pending_bits < u32::from(bits) {
            self.refill()?;
        }

        let value = (self.pending as u32) & MASKS[bits as usize];
        self.pending >>= u32::from(bits);
        self.pending_bits -= u32::from(bits);
        Ok(value)
    }

    /// Reads a single bit.
    pub fn read_bool(&mut self) -> PackResult<bool> {
        Ok(self.read_bits(1)? != 0)
    }

    /// Reads a whole byte, straight from the byte buffer when aligned.
    pub fn read_u8(&mut self) -> PackResult<u8> {
        if self.pending_bits == 0 {
            self.bytes.read_u8()
        } else {
            Ok(self.read_bits(8)? as u8)
        }
    }

    /// Reads a 16-bit value, straight from the byte buffer when aligned.
    pub fn read_u16(&mut self) -> PackResult<u16> {
        if self.pending_bits == 0 {
            self.bytes.read_u16()
        } else {
            Ok(self.read_bits(16)? as u16)
        }
    }

    /// Reads a 32-bit value, straight from the byte buffer when aligned.
    pub fn read_u32(&mut self) -> PackResult<u32> {
        if self.pending_bits == 0 {
            self.bytes.read_u32()
        } else {
            self.read_bits(32)
        }
    }

    /// Reads a signed byte from its unsigned bit pattern.
    pub fn read_i8(&mut self) -> PackResult<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a signed 16-bit value from its unsigned bit pattern.
    pub fn read_i16(&mut self) -> PackResult<i16> {
        Ok(self.read_u16()? as i16)
    }

    /// Reads a signed 32-bit value from its unsigned bit pattern.
    pub fn read_i32(&mut self) -> PackResult<i32> {
        Ok(self.read_u32()? as i32)
    }

    // Only ever called with fewer than 32 bits pending, so the register
    // always has room for a whole word.
    fn refill(&mut self) -> PackResult<()> {
        if self.bytes.remaining() >= 4 {
            self.pending |= u64::from(self.bytes.read_u32()?) << self.pending_bits;
            self.pending_bits += 32;
        } else {
            self.pending |= u64::from(self.bytes.read_u8()?) << self.pending_bits;
            self.pending_bits += 8;
        }
        Ok(())
    }
}
