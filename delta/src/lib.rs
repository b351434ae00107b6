//! Limit-driven delta encoding over the bitpack layer.
//!
//! A [`Limit`] describes the closed value range of a field together with the
//! minimum bit width needed to encode any value in it. The [`WriteDelta`]
//! and [`ReadDelta`] extension traits use limits to transmit a value
//! relative to a previously known baseline, choosing between an unchanged
//! flag, a small baseline-relative diff, and a full range-limited value.
//!
//! Writer and reader policies are mirrored bit-for-bit; the decoder makes
//! the same three-way decision from the flags the encoder emitted.
//!
//! # Example
//!
//! ```
//! use bitpack::{BitReader, BitWriter};
//! use delta::{Limit, ReadDelta, WriteDelta};
//!
//! const POSITION: Limit<i16> = Limit::<i16>::new(-1024, 1023);
//! const STEP: Limit<i16> = Limit::<i16>::new(-16, 16);
//!
//! let mut writer = BitWriter::new(64);
//! writer.write_diff_if_changed(100i16, 103, &POSITION, &STEP).unwrap();
//! writer.flush().unwrap();
//!
//! let mut reader = BitReader::new(writer.as_bytes().unwrap());
//! assert_eq!(reader.read_diff_if_changed(100i16, &POSITION, &STEP).unwrap(), 103);
//! ```

mod limit;
mod read;
mod write;

pub use limit::{ByteLimit, IntLimit, Limit, ShortLimit};
pub use read::ReadDelta;
pub use write::WriteDelta;
