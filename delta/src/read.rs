//! Reader-side delta decoding policies.

use bitpack::{BitReader, PackResult};

use crate::limit::Limit;

/// Delta-encoding read policies for one value width, mirroring
/// [`WriteDelta`](crate::WriteDelta) bit-for-bit.
///
/// Each call must be paired with the write policy of the same name, using
/// the same limits and the same baseline the encoder used.
pub trait ReadDelta<T: Copy> {
    /// Decodes a value written by `write_limited` under the same limit.
    fn read_limited(&mut self, limit: &Limit<T>) -> PackResult<T>;

    /// Decodes a value written by `write_value_if_changed`; returns
    /// `baseline` when the change flag is clear.
    fn read_value_if_changed(&mut self, baseline: T) -> PackResult<T>;

    /// Decodes a value written by `write_limited_if_changed`; returns
    /// `baseline` when the change flag is clear.
    fn read_limited_if_changed(&mut self, baseline: T, limit: &Limit<T>) -> PackResult<T>;

    /// Decodes a value written by `write_diff_if_changed`, reconstructing
    /// from `baseline` plus the transmitted diff when the diff flag is set.
    fn read_diff_if_changed(
        &mut self,
        baseline: T,
        limit: &Limit<T>,
        diff_limit: &Limit<T>,
    ) -> PackResult<T>;
}

macro_rules! impl_read_delta {
    ($ty:ty, $wide:ty, $read_full:ident) => {
        impl ReadDelta<$ty> for BitReader<'_> {
            fn read_limited(&mut self, limit: &Limit<$ty>) -> PackResult<$ty> {
                let offset = self.read_bits(limit.bit_count())?;
                Ok((limit.min() as $wide + offset as $wide) as $ty)
            }

            fn read_value_if_changed(&mut self, baseline: $ty) -> PackResult<$ty> {
                if self.read_bool()? {
                    self.$read_full()
                } else {
                    Ok(baseline)
                }
            }

            fn read_limited_if_changed(
                &mut self,
                baseline: $ty,
                limit: &Limit<$ty>,
            ) -> PackResult<$ty> {
                if self.read_bool()? {
                    self.read_limited(limit)
                } else {
                    Ok(baseline)
                }
            }

            fn read_diff_if_changed(
                &mut self,
                baseline: $ty,
                limit: &Limit<$ty>,
                diff_limit: &Limit<$ty>,
            ) -> PackResult<$ty> {
                if !self.read_bool()? {
                    return Ok(baseline);
                }
                if self.read_bool()? {
                    let diff = self.read_limited(diff_limit)?;
                    Ok(baseline.wrapping_add(diff))
                } else {
                    self.read_limited(limit)
                }
            }
        }
    };
}

impl_read_delta!(i8, i16, read_i8);
impl_read_delta!(i16, i32, read_i16);
impl_read_delta!(i32, i64, read_i32);
