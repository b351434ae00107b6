//! Writer-side delta encoding policies.

use bitpack::{BitWriter, PackResult};

use crate::limit::Limit;

/// Delta-encoding write policies for one value width.
///
/// Every policy here has an exact mirror on [`ReadDelta`](crate::ReadDelta);
/// the flag bits the writer emits are the only information the reader has to
/// reproduce the encoding decision.
pub trait WriteDelta<T: Copy + PartialEq> {
    /// Encodes `value` as an offset from `limit.min()` in `limit.bit_count()`
    /// bits, with no change flag.
    ///
    /// Debug builds assert that `value` lies inside the limit. Release builds
    /// skip the check and the mask silently truncates an out-of-range value,
    /// so range correctness is the caller's contract.
    fn write_limited(&mut self, value: T, limit: &Limit<T>) -> PackResult<()>;

    /// Emits one flag bit; when `updated` differs from `baseline`, the flag
    /// is set and `updated` follows at its natural width.
    fn write_value_if_changed(&mut self, baseline: T, updated: T) -> PackResult<()>;

    /// Emits one flag bit; when `updated` differs from `baseline`, the flag
    /// is set and `updated` follows under `limit`.
    fn write_limited_if_changed(
        &mut self,
        baseline: T,
        updated: T,
        limit: &Limit<T>,
    ) -> PackResult<()>;

    /// Emits one flag bit; when changed, a second flag selects between the
    /// baseline-relative diff under `diff_limit` and the full value under
    /// `limit`.
    ///
    /// The diff is taken only when it lies strictly inside `diff_limit`'s
    /// bounds; a diff exactly on a bound falls through to the full-range
    /// encoding. Two flag bits buy large width savings when small per-update
    /// deltas dominate, while a value jump outside the expected window still
    /// encodes safely.
    fn write_diff_if_changed(
        &mut self,
        baseline: T,
        updated: T,
        limit: &Limit<T>,
        diff_limit: &Limit<T>,
    ) -> PackResult<()>;
}

macro_rules! impl_write_delta {
    ($ty:ty, $wide:ty, $write_full:ident) => {
        impl WriteDelta<$ty> for BitWriter {
            fn write_limited(&mut self, value: $ty, limit: &Limit<$ty>) -> PackResult<()> {
                debug_assert!(
                    limit.min() <= value && value <= limit.max(),
                    "value {value} outside limit [{}, {}]",
                    limit.min(),
                    limit.max(),
                );
                let offset = (value as $wide - limit.min() as $wide) as u32;
                self.write_bits(offset, limit.bit_count())
            }

            fn write_value_if_changed(&mut self, baseline: $ty, updated: $ty) -> PackResult<()> {
                if baseline == updated {
                    self.write_bool(false)
                } else {
                    self.write_bool(true)?;
                    self.$write_full(updated)
                }
            }

            fn write_limited_if_changed(
                &mut self,
                baseline: $ty,
                updated: $ty,
                limit: &Limit<$ty>,
            ) -> PackResult<()> {
                if baseline == updated {
                    self.write_bool(false)
                } else {
                    self.write_bool(true)?;
                    self.write_limited(updated, limit)
                }
            }

            fn write_diff_if_changed(
                &mut self,
                baseline: $ty,
                updated: $ty,
                limit: &Limit<$ty>,
                diff_limit: &Limit<$ty>,
            ) -> PackResult<()> {
                if baseline == updated {
                    return self.write_bool(false);
                }
                self.write_bool(true)?;

                let diff = updated.wrapping_sub(baseline);
                if diff_limit.min() < diff && diff < diff_limit.max() {
                    self.write_bool(true)?;
                    self.write_limited(diff, diff_limit)
                } else {
                    self.write_bool(false)?;
                    self.write_limited(updated, limit)
                }
            }
        }
    };
}

impl_write_delta!(i8, i16, write_i8);
impl_write_delta!(i16, i32, write_i16);
impl_write_delta!(i32, i64, write_i32);
