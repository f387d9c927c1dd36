//! Iterative Decimation-in-Time (DIT) FFT
//!
//! 1. Apply bit reversal to the input
//! 2. Start with butterflies of size 2
//! 3. Double the butterfly size each stage until it spans the whole buffer
//!
//! Fine-grained memory access comes first and each stage works on progressively
//! larger contiguous chunks, which keeps small blocks cache resident. This is why the
//! recursive kernel hands its base case blocks to this one.
use num_complex::Complex64;

use crate::algorithms::bit_reverse::bit_reverse_permutation;
use crate::kernels::{fft_chunk_2, fft_chunk_n};
use crate::twiddles::generate_twiddles;

/// Forward FFT of `buf` in place, without recursion.
///
/// # Panics
///
/// Panics in debug builds if `buf.len()` is not a power of 2.
pub fn fft_iterative(buf: &mut [Complex64]) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    if n < 2 {
        return;
    }

    bit_reverse_permutation(buf);
    fft_chunk_2(buf);

    let mut chunk_size = 4;
    while chunk_size <= n {
        let twiddles = generate_twiddles(chunk_size);
        fft_chunk_n(buf, &twiddles, chunk_size >> 1);
        chunk_size <<= 1;
    }
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use utilities::{assert_complex_closeness, naive_dft, rustfft::FftPlanner};

    use super::*;

    #[test]
    fn known_vector() {
        let mut buf: Vec<_> = [1.0, 2.0, 3.0, 4.0]
            .into_iter()
            .map(|x| Complex64::new(x, 0.0))
            .collect();
        fft_iterative(&mut buf);

        let expected = [
            Complex64::new(10.0, 0.0),
            Complex64::new(-2.0, 2.0),
            Complex64::new(-2.0, 0.0),
            Complex64::new(-2.0, -2.0),
        ];
        for (z, e) in buf.iter().zip(expected) {
            assert_complex_closeness(*z, e, 1e-8);
        }
    }

    #[test]
    fn single_sample_is_untouched() {
        let mut buf = vec![Complex64::new(7.5, -1.0)];
        fft_iterative(&mut buf);
        assert_eq!(buf, vec![Complex64::new(7.5, -1.0)]);
    }

    #[test]
    fn impulse_has_flat_spectrum() {
        let mut buf = vec![Complex64::default(); 32];
        buf[0] = Complex64::new(1.0, 0.0);
        fft_iterative(&mut buf);
        for z in buf {
            assert_complex_closeness(z, Complex64::new(1.0, 0.0), 1e-12);
        }
    }

    #[test]
    fn matches_naive_dft() {
        for k in 1..9 {
            let n = 1 << k;
            let signal: Vec<_> = (0..n)
                .map(|i| Complex64::new((i as f64).sin(), (i as f64 * 0.3).cos()))
                .collect();

            let expected = naive_dft(&signal);
            let mut actual = signal;
            fft_iterative(&mut actual);

            for (z, e) in actual.iter().zip(expected) {
                assert_complex_closeness(*z, e, 1e-8);
            }
        }
    }

    #[test]
    fn matches_rustfft() {
        for k in 4..14 {
            let n = 1 << k;
            let mut buffer: Vec<Complex64> = (1..=n)
                .map(|i| Complex64::new(f64::from(i), f64::from(i)))
                .collect();
            let mut actual = buffer.clone();

            let mut planner = FftPlanner::new();
            let fft = planner.plan_fft_forward(buffer.len());
            fft.process(&mut buffer);

            fft_iterative(&mut actual);

            for (z, e) in actual.iter().zip(buffer) {
                assert_complex_closeness(*z, e, 1e-6 * n as f64);
            }
        }
    }
}
