//! Error types for bit packing operations.

use std::fmt;

/// Result type for bit packing operations.
pub type PackResult<T> = Result<T, PackError>;

/// Errors that can occur during bit-level encoding/decoding.
///
/// All failures are local, synchronous, and fatal to the serialization pass
/// in progress; there are no partial-success or retry semantics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// A write would exceed the buffer's fixed capacity.
    CapacityExceeded {
        /// Bytes the buffer would need to hold after the write.
        needed: usize,
        /// Fixed capacity of the buffer in bytes.
        capacity: usize,
    },

    /// Attempted to read past the end of the buffer.
    EndOfBuffer {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// Bit count outside the supported range for a primitive operation.
    InvalidBitCount {
        /// The invalid bit count provided.
        bits: u8,
        /// Maximum allowed bits for this operation.
        max_bits: u8,
    },

    /// Byte-level access while bits are still pending in the accumulator.
    UnflushedBits {
        /// Number of bits awaiting a flush.
        pending_bits: u32,
    },

    /// Backpatch target beyond the bits written so far.
    BitNotWritten {
        /// The requested bit position.
        bit_position: usize,
        /// Total bits committed to the stream.
        bits_written: usize,
    },
}

impl fmt::Display for PackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityExceeded { needed, capacity } => {
                write!(
                    f,
                    "write needs {needed} bytes but buffer capacity is {capacity} bytes"
                )
            }
            Self::EndOfBuffer {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::InvalidBitCount { bits, max_bits } => {
                write!(f, "invalid bit count {bits}, maximum allowed is {max_bits}")
            }
            Self::UnflushedBits { pending_bits } => {
                write!(
                    f,
                    "byte region accessed with {pending_bits} bits pending; flush the writer first"
                )
            }
            Self::BitNotWritten {
                bit_position,
                bits_written,
            } => {
                write!(
                    f,
                    "bit position {bit_position} has not been written yet ({bits_written} bits written)"
                )
            }
        }
    }
}

impl std::error::Error for PackError {}
