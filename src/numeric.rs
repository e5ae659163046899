//! Numeric conversion and range helpers.

use std::ops::RangeInclusive;

use crate::error::{ExtensionError, ExtensionResult};

/// Byte-order conversions on unsigned integers.
pub trait NumericExtensions {
    /// Little-endian byte representation.
    fn to_le_vec(&self) -> Vec<u8>;

    /// Big-endian byte representation.
    fn to_be_vec(&self) -> Vec<u8>;
}

macro_rules! impl_numeric_extensions {
    ($($ty:ty),*) => {
        $(
            impl NumericExtensions for $ty {
                fn to_le_vec(&self) -> Vec<u8> {
                    self.to_le_bytes().to_vec()
                }

                fn to_be_vec(&self) -> Vec<u8> {
                    self.to_be_bytes().to_vec()
                }
            }
        )*
    };
}

impl_numeric_extensions!(u8, u16, u32, u64);

/// Reconstructs a `u64` from up to 8 little-endian bytes; shorter input is
/// zero-extended. Longer input is out of range.
pub fn u64_from_le_bytes(bytes: &[u8]) -> ExtensionResult<u64> {
    if bytes.len() > 8 {
        return Err(ExtensionError::out_of_range(
            "more than 8 bytes cannot fit a u64",
        ));
    }
    let mut array = [0u8; 8];
    array[..bytes.len()].copy_from_slice(bytes);
    Ok(u64::from_le_bytes(array))
}

/// Reconstructs a `u64` from up to 8 big-endian bytes; shorter input is
/// zero-extended. Longer input is out of range.
pub fn u64_from_be_bytes(bytes: &[u8]) -> ExtensionResult<u64> {
    if bytes.len() > 8 {
        return Err(ExtensionError::out_of_range(
            "more than 8 bytes cannot fit a u64",
        ));
    }
    let mut array = [0u8; 8];
    array[8 - bytes.len()..].copy_from_slice(bytes);
    Ok(u64::from_be_bytes(array))
}

/// Builds the inclusive range of `count` consecutive integers starting at
/// `start`, i.e. `start..=start + count - 1`.
///
/// Fails with an out-of-range error when `count` is negative or when the
/// last element would not fit in an `i32`. A zero `count` yields an empty
/// range.
pub fn range_of_count(start: i32, count: i32) -> ExtensionResult<RangeInclusive<i32>> {
    if count < 0 {
        return Err(ExtensionError::out_of_range("count must be non-negative"));
    }
    if count == 0 {
        // `start..=start - 1` underflows for i32::MIN; this is always empty.
        return Ok(1..=0);
    }
    let last = start
        .checked_add(count - 1)
        .ok_or_else(|| ExtensionError::out_of_range("range end exceeds i32::MAX"))?;
    Ok(start..=last)
}
