//! Recursive Decimation-in-Time (DIT) FFT
//!
//! The signal is de-interleaved into its even- and odd-indexed samples, both halves are
//! transformed recursively, then a single butterfly pass combines them. Blocks at or below
//! [`Options::base_case_threshold`] go to the iterative kernel instead.
//!
//! The recursion ping-pongs between the caller's buffer and one scratch buffer of the same
//! length: the halves are de-interleaved into the scratch buffer, transformed there (using the
//! matching half of the caller's buffer as their own scratch), and combined back. Each
//! recursive call owns a disjoint `&mut` half of both buffers, which is what lets the two
//! calls run concurrently above [`Options::parallel_threshold`] without any locking.
use num_complex::Complex64;

use crate::algorithms::iterative::fft_iterative;
use crate::kernels::combine;
use crate::options::Options;
use crate::parallel::run_maybe_in_parallel;

/// Forward FFT of `buf` in place, splitting recursively according to `opts`.
///
/// # Panics
///
/// Panics in debug builds if `buf.len()` is not a power of 2.
pub fn fft_recursive(buf: &mut [Complex64], opts: &Options) {
    let n = buf.len();
    debug_assert!(n.is_power_of_two());
    if opts.is_base_case(n) {
        fft_iterative(buf);
        return;
    }

    let mut scratch = vec![Complex64::default(); n];
    recurse(buf, &mut scratch, opts);
}

fn recurse(buf: &mut [Complex64], scratch: &mut [Complex64], opts: &Options) {
    let n = buf.len();
    if opts.is_base_case(n) {
        fft_iterative(buf);
        return;
    }

    let half = n >> 1;
    let (even, odd) = scratch.split_at_mut(half);
    buf.chunks_exact(2)
        .zip(even.iter_mut().zip(odd.iter_mut()))
        .for_each(|(pair, (e, o))| {
            *e = pair[0];
            *o = pair[1];
        });

    {
        let (buf_lo, buf_hi) = buf.split_at_mut(half);
        let parallel = opts.runs_in_parallel(n);
        if parallel {
            tracing::trace!(len = n, "splitting recursive FFT across threads");
        }
        run_maybe_in_parallel(
            parallel,
            || recurse(even, buf_lo, opts),
            || recurse(odd, buf_hi, opts),
        );
    }

    combine(buf, even, odd);
}

#[cfg(test)]
mod tests {
    use num_complex::Complex64;
    use utilities::{assert_complex_closeness, gen_random_signal, naive_dft};

    use super::*;

    fn random_complex(n: usize) -> Vec<Complex64> {
        let mut reals = vec![0.0; n];
        let mut imags = vec![0.0; n];
        gen_random_signal(&mut reals, &mut imags);
        reals
            .into_iter()
            .zip(imags)
            .map(|(re, im)| Complex64::new(re, im))
            .collect()
    }

    fn fully_recursive() -> Options {
        Options::configure(|opts| {
            opts.base_case_threshold = 1;
            opts.parallel_threshold = usize::MAX;
        })
    }

    #[test]
    fn known_vectors() {
        let opts = fully_recursive();

        let mut buf: Vec<_> = [-1.0, -2.0, -3.0, -4.0]
            .into_iter()
            .map(|x| Complex64::new(x, 0.0))
            .collect();
        fft_recursive(&mut buf, &opts);

        let expected = [
            Complex64::new(-10.0, 0.0),
            Complex64::new(2.0, -2.0),
            Complex64::new(2.0, 0.0),
            Complex64::new(2.0, 2.0),
        ];
        for (z, e) in buf.iter().zip(expected) {
            assert_complex_closeness(*z, e, 1e-8);
        }
    }

    #[test]
    fn matches_iterative_kernel() {
        let opts = fully_recursive();
        for k in 1..=12 {
            let signal = random_complex(1 << k);

            let mut recursive = signal.clone();
            fft_recursive(&mut recursive, &opts);

            let mut iterative = signal;
            fft_iterative(&mut iterative);

            for (r, i) in recursive.iter().zip(iterative) {
                assert_complex_closeness(*r, i, 1e-9);
            }
        }
    }

    #[test]
    fn matches_naive_dft_across_base_cases() {
        let signal = random_complex(256);
        let expected = naive_dft(&signal);

        for base_case_threshold in [0, 1, 2, 8, 64, 256, 1024] {
            let opts = Options::configure(|opts| opts.base_case_threshold = base_case_threshold);
            let mut actual = signal.clone();
            fft_recursive(&mut actual, &opts);

            for (z, e) in actual.iter().zip(expected.iter()) {
                assert_complex_closeness(*z, *e, 1e-9);
            }
        }
    }

    #[test]
    fn parallel_split_matches_sequential() {
        let signal = random_complex(1 << 12);

        let parallel = Options::configure(|opts| {
            opts.parallel_threshold = 4;
            opts.base_case_threshold = 2;
        });
        let sequential = Options::configure(|opts| {
            opts.parallel_threshold = usize::MAX;
            opts.base_case_threshold = 2;
        });

        let mut a = signal.clone();
        fft_recursive(&mut a, &parallel);
        let mut b = signal;
        fft_recursive(&mut b, &sequential);

        // The split does not change the order of floating-point operations
        assert_eq!(a, b);
    }
}
