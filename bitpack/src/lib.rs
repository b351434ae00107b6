//! Fixed-capacity bit packing primitives for the netbit codec.
//!
//! This crate provides [`BitWriter`] and [`BitReader`] for bit-level encoding
//! and decoding over fixed-capacity byte buffers, plus the little-endian
//! [`ByteWriter`] and [`ByteReader`] they build on.
//!
//! # Design Principles
//!
//! - **No unsafe code** - Safety is paramount.
//! - **Fixed capacity** - Buffers are sized once and reused across passes;
//!   the hot path never allocates.
//! - **Bounded operations** - All reads/writes are bounds-checked.
//! - **Explicit errors** - All failures return structured errors, never panic.
//!
//! # Example
//!
//! ```
//! use bitpack::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new(64);
//! writer.write_bool(true).unwrap();
//! writer.write_bits(42, 7).unwrap();
//! writer.flush().unwrap();
//!
//! let mut reader = BitReader::new(writer.as_bytes().unwrap());
//! assert!(reader.read_bool().unwrap());
//! assert_eq!(reader.read_bits(7).unwrap(), 42);
//! ```

mod bytes;
mod error;
mod mask;
mod reader;
mod writer;

pub use bytes::{ByteReader, ByteWriter};
pub use error::{PackError, PackResult};
pub use mask::MASKS;
pub use reader::BitReader;
pub use writer::BitWriter;
