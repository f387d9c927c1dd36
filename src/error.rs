//! Error types for FFT operations.

use thiserror::Error;

use crate::options::Algorithm;

/// Errors returned by the transform entry points.
///
/// Every error is raised before any computation starts, so a failed call never
/// leaves a partially transformed buffer behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FftError {
    /// The signal was absent.
    #[error("input signal is missing")]
    NullInput,

    /// Signal length is not a power of 2.
    #[error("signal length must be a power of 2, got {0}")]
    UnsupportedLength(usize),

    /// The selected algorithm has no implementation yet.
    #[error("{0:?} is not implemented")]
    NotImplemented(Algorithm),

    /// Requested sub-range lies outside the signal.
    #[error("range [{start}, {end}] is out of bounds for a signal of length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },
}

/// Result type for FFT operations.
pub type FftResult<T> = Result<T, FftError>;
