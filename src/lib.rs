//! A configurable radix-2 Cooley-Tukey Fast Fourier Transform.
//!
//! [`Fft`] validates its input, lifts real samples to complex ones and runs a recursive
//! decimation-in-time kernel. Large inputs are split across threads; small blocks are finished
//! by an iterative bit-reversal kernel. See [`options::Options`] for the tunables.
//!
//! ```
//! use radixft::{Fft, FftError};
//!
//! let fft = Fft::new();
//! let spectrum = fft.transform(&[1.0_f64, 2.0, 3.0, 4.0])?;
//! assert_eq!(spectrum[0].re, 10.0);
//!
//! assert_eq!(fft.transform(&[1.0_f64, 2.0, 3.0]), Err(FftError::UnsupportedLength(3)));
//! # Ok::<(), FftError>(())
//! ```

pub use num_complex::Complex64;

use crate::algorithms::recursive::fft_recursive;
pub use crate::error::{FftError, FftResult};
use crate::options::{Algorithm, Options};
pub use crate::signal::Signal;
use crate::signal::{is_power_of_two, prepare, prepare_segment};

pub mod algorithms;
pub mod error;
mod kernels;
pub mod options;
mod parallel;
pub mod signal;
mod twiddles;
pub mod utils;
pub mod validation;

/// Forward runs the regular FFT, Inverse runs the IFFT
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    /// Twiddle factors `exp(-2πi·k/N)`, no scaling
    Forward,
    /// Twiddle factors `exp(+2πi·k/N)`, result scaled by `1/N`
    Inverse,
}

/// FFT engine.
///
/// The [`Options`] are fixed at construction. The engine holds no mutable state, so one
/// instance can serve any number of threads at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fft {
    options: Options,
}

impl Fft {
    /// Create an engine with the default [`Options`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with the given options.
    pub fn with_options(options: Options) -> Self {
        Self { options }
    }

    /// Create an engine whose options start from the defaults and are adjusted by `configure`.
    ///
    /// ```
    /// let fft = radixft::Fft::configure(|opts| opts.parallel_threshold = 1 << 16);
    /// assert_eq!(fft.options().parallel_threshold, 1 << 16);
    /// ```
    pub fn configure<F>(configure: F) -> Self
    where
        F: FnOnce(&mut Options),
    {
        Self::with_options(Options::configure(configure))
    }

    /// The options this engine was built with.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Forward FFT of a real or complex signal.
    ///
    /// The caller's samples are copied; the returned vector holds frequency bin `j` at
    /// index `j`.
    ///
    /// # Errors
    ///
    /// - [`FftError::NullInput`] if the signal is [`Signal::Absent`].
    /// - [`FftError::UnsupportedLength`] if its length is not a power of 2.
    /// - [`FftError::NotImplemented`] if the configured algorithm is unavailable.
    pub fn transform<'a>(&self, signal: impl Into<Signal<'a>>) -> FftResult<Vec<Complex64>> {
        let mut buf = prepare(signal).inspect_err(log_rejection)?;
        self.process(&mut buf, Direction::Forward)?;
        Ok(buf)
    }

    /// Inverse FFT, normalised so that `inverse_transform(transform(x)) ≈ x`.
    ///
    /// # Errors
    ///
    /// Same as [`Fft::transform`].
    pub fn inverse_transform<'a>(
        &self,
        signal: impl Into<Signal<'a>>,
    ) -> FftResult<Vec<Complex64>> {
        let mut buf = prepare(signal).inspect_err(log_rejection)?;
        self.process(&mut buf, Direction::Inverse)?;
        Ok(buf)
    }

    /// Forward FFT of the inclusive sub-range `[start, end]` of a signal.
    ///
    /// # Errors
    ///
    /// Same as [`Fft::transform`], plus [`FftError::InvalidRange`] if the range does not fit
    /// the signal. The segment length `end - start + 1` must be a power of 2.
    pub fn transform_segment<'a>(
        &self,
        signal: impl Into<Signal<'a>>,
        start: usize,
        end: usize,
    ) -> FftResult<Vec<Complex64>> {
        let mut buf = prepare_segment(signal, start, end).inspect_err(log_rejection)?;
        self.process(&mut buf, Direction::Forward)?;
        Ok(buf)
    }

    /// Forward FFT of `buf`, overwriting it with its spectrum.
    ///
    /// # Errors
    ///
    /// [`FftError::UnsupportedLength`] or [`FftError::NotImplemented`]; `buf` is left
    /// untouched in either case.
    pub fn transform_in_place(&self, buf: &mut [Complex64]) -> FftResult<()> {
        if !is_power_of_two(buf.len()) {
            let err = FftError::UnsupportedLength(buf.len());
            log_rejection(&err);
            return Err(err);
        }
        self.process(buf, Direction::Forward)
    }

    fn process(&self, buf: &mut [Complex64], direction: Direction) -> FftResult<()> {
        let kernel = match self.options.algorithm {
            Algorithm::CooleyTukey => fft_recursive,
            algorithm => {
                let err = FftError::NotImplemented(algorithm);
                log_rejection(&err);
                return Err(err);
            }
        };

        let n = buf.len();
        tracing::debug!(
            len = n,
            ?direction,
            parallel = self.options.runs_in_parallel(n),
            "running FFT"
        );

        // The inverse is the conjugate of the forward transform of the conjugate, scaled by 1/N
        if let Direction::Inverse = direction {
            buf.iter_mut().for_each(|z| *z = z.conj());
        }

        kernel(buf, &self.options);

        if let Direction::Inverse = direction {
            let scaling_factor = 1.0 / n as f64;
            buf.iter_mut().for_each(|z| *z = z.conj() * scaling_factor);
        }
        Ok(())
    }
}

/// Forward FFT with default [`Options`].
///
/// # Errors
///
/// Same as [`Fft::transform`].
pub fn fft<'a>(signal: impl Into<Signal<'a>>) -> FftResult<Vec<Complex64>> {
    Fft::new().transform(signal)
}

/// Inverse FFT with default [`Options`].
///
/// # Errors
///
/// Same as [`Fft::inverse_transform`].
pub fn ifft<'a>(signal: impl Into<Signal<'a>>) -> FftResult<Vec<Complex64>> {
    Fft::new().inverse_transform(signal)
}

fn log_rejection(err: &FftError) {
    tracing::debug!(%err, "rejected FFT input");
}
