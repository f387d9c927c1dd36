//! Signal preparation: turns caller input into a validated complex working buffer.

use num_complex::Complex64;

use crate::error::{FftError, FftResult};
use crate::validation::validate_array;

/// A borrowed view of the caller's samples.
///
/// Build one with `From` from slices, vectors or arrays of `f64` or [`Complex64`].
/// `Option`s of those convert too, with `None` becoming [`Signal::Absent`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Signal<'a> {
    /// No signal was supplied.
    Absent,
    /// Real samples; each one becomes `(s, 0.0)`.
    Real(&'a [f64]),
    /// Complex samples, copied as they are.
    Complex(&'a [Complex64]),
}

impl Signal<'_> {
    /// Number of samples, or `None` when absent.
    pub fn len(&self) -> Option<usize> {
        match self {
            Signal::Absent => None,
            Signal::Real(samples) => Some(samples.len()),
            Signal::Complex(samples) => Some(samples.len()),
        }
    }

    /// `true` when the signal is absent or has no samples.
    pub fn is_empty(&self) -> bool {
        self.len().map_or(true, |len| len == 0)
    }
}

impl<'a> From<&'a [f64]> for Signal<'a> {
    fn from(samples: &'a [f64]) -> Self {
        Signal::Real(samples)
    }
}

impl<'a> From<&'a Vec<f64>> for Signal<'a> {
    fn from(samples: &'a Vec<f64>) -> Self {
        Signal::Real(samples)
    }
}

impl<'a, const N: usize> From<&'a [f64; N]> for Signal<'a> {
    fn from(samples: &'a [f64; N]) -> Self {
        Signal::Real(samples)
    }
}

impl<'a> From<&'a [Complex64]> for Signal<'a> {
    fn from(samples: &'a [Complex64]) -> Self {
        Signal::Complex(samples)
    }
}

impl<'a> From<&'a Vec<Complex64>> for Signal<'a> {
    fn from(samples: &'a Vec<Complex64>) -> Self {
        Signal::Complex(samples)
    }
}

impl<'a, const N: usize> From<&'a [Complex64; N]> for Signal<'a> {
    fn from(samples: &'a [Complex64; N]) -> Self {
        Signal::Complex(samples)
    }
}

impl<'a, S> From<Option<S>> for Signal<'a>
where
    S: Into<Signal<'a>>,
{
    fn from(signal: Option<S>) -> Self {
        signal.map_or(Signal::Absent, Into::into)
    }
}

/// `n != 0 && (n & (n - 1)) == 0`
#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

/// Validate `signal` and copy it into a fresh complex buffer.
///
/// # Errors
///
/// - [`FftError::NullInput`] if the signal is absent.
/// - [`FftError::UnsupportedLength`] if its length is not a power of 2. No zero-padding is
///   applied.
pub fn prepare<'a>(signal: impl Into<Signal<'a>>) -> FftResult<Vec<Complex64>> {
    prepare_range(signal.into(), None)
}

/// Like [`prepare`], but only the inclusive sub-range `[start, end]` of the signal.
///
/// # Errors
///
/// Additionally returns [`FftError::InvalidRange`] if the range does not fit the signal.
pub fn prepare_segment<'a>(
    signal: impl Into<Signal<'a>>,
    start: usize,
    end: usize,
) -> FftResult<Vec<Complex64>> {
    prepare_range(signal.into(), Some((start, end)))
}

fn prepare_range(signal: Signal<'_>, range: Option<(usize, usize)>) -> FftResult<Vec<Complex64>> {
    let buf: Vec<Complex64> = match signal {
        Signal::Absent => return Err(FftError::NullInput),
        Signal::Real(samples) => {
            let samples = checked_len(validate_array(Some(samples), range)?)?;
            samples.iter().map(|&s| Complex64::new(s, 0.0)).collect()
        }
        Signal::Complex(samples) => checked_len(validate_array(Some(samples), range)?)?.to_vec(),
    };
    Ok(buf)
}

fn checked_len<T>(samples: &[T]) -> FftResult<&[T]> {
    if is_power_of_two(samples.len()) {
        Ok(samples)
    } else {
        Err(FftError::UnsupportedLength(samples.len()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn power_of_two_check() {
        for n in [1, 2, 4, 8, 1024, 1 << 40] {
            assert!(is_power_of_two(n), "{n}");
        }
        for n in [0, 3, 5, 6, 7, 9, 12, 1000, usize::MAX] {
            assert!(!is_power_of_two(n), "{n}");
        }
    }

    #[test]
    fn absent_signal() {
        assert_eq!(prepare(Signal::Absent), Err(FftError::NullInput));
        assert_eq!(prepare(None::<&[f64]>), Err(FftError::NullInput));
        assert_eq!(prepare(None::<&Vec<Complex64>>), Err(FftError::NullInput));
        assert_eq!(prepare_segment(Signal::Absent, 0, 0), Err(FftError::NullInput));
    }

    #[test]
    fn unsupported_lengths() {
        for n in [0, 3, 5, 6, 7, 100] {
            let real = vec![1.0_f64; n];
            assert_eq!(prepare(&real), Err(FftError::UnsupportedLength(n)));

            let complex = vec![Complex64::new(1.0, 1.0); n];
            assert_eq!(prepare(&complex), Err(FftError::UnsupportedLength(n)));
        }
    }

    #[test]
    fn real_samples_are_lifted() {
        let buf = prepare(&[1.5_f64, -2.0]).unwrap();
        assert_eq!(buf, vec![Complex64::new(1.5, 0.0), Complex64::new(-2.0, 0.0)]);
    }

    #[test]
    fn complex_samples_are_copied() {
        let samples = vec![Complex64::new(1.0, 2.0); 4];
        let buf = prepare(&samples).unwrap();
        assert_eq!(buf, samples);
        assert_ne!(buf.as_ptr(), samples.as_ptr());
    }

    #[test]
    fn some_signal_is_not_absent() {
        let samples = [3.0_f64];
        assert_eq!(Signal::from(Some(&samples)), Signal::Real(&samples));
        assert_eq!(prepare(Some(&samples[..])).unwrap(), vec![Complex64::new(3.0, 0.0)]);
    }

    #[test]
    fn segments() {
        let samples: Vec<f64> = (0..10).map(f64::from).collect();
        let buf = prepare_segment(&samples, 2, 5).unwrap();
        assert_eq!(
            buf,
            [2.0, 3.0, 4.0, 5.0]
                .into_iter()
                .map(|x| Complex64::new(x, 0.0))
                .collect::<Vec<_>>()
        );

        assert_eq!(
            prepare_segment(&samples, 2, 4),
            Err(FftError::UnsupportedLength(3))
        );
        assert_eq!(
            prepare_segment(&samples, 8, 11),
            Err(FftError::InvalidRange {
                start: 8,
                end: 11,
                len: 10
            })
        );
    }

    #[test]
    fn signal_len() {
        assert_eq!(Signal::Absent.len(), None);
        assert!(Signal::Absent.is_empty());
        assert_eq!(Signal::from(&[1.0_f64, 2.0]).len(), Some(2));
        assert!(Signal::from(&Vec::<Complex64>::new()).is_empty());
    }
}
