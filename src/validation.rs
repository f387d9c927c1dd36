//! Array and sub-range validation shared by the transform entry points.

use crate::error::{FftError, FftResult};

/// Validate an array and an optional inclusive `(start, end)` sub-range of it.
///
/// Returns the selected sub-slice, or the whole array when no range is given.
///
/// # Errors
///
/// - [`FftError::NullInput`] if `array` is `None`.
/// - [`FftError::InvalidRange`] if `start > end` or `end` is not a valid index.
pub fn validate_array<T>(array: Option<&[T]>, range: Option<(usize, usize)>) -> FftResult<&[T]> {
    let array = array.ok_or(FftError::NullInput)?;

    match range {
        None => Ok(array),
        Some((start, end)) if start <= end && end < array.len() => Ok(&array[start..=end]),
        Some((start, end)) => Err(FftError::InvalidRange {
            start,
            end,
            len: array.len(),
        }),
    }
}
