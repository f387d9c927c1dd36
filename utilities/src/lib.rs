pub extern crate rustfft;

// export rustfft to radixft
use rand::{distributions::Uniform, prelude::*};
use rustfft::num_complex::Complex64;
use rustfft::num_traits::Float;

/// Asserts that two fp numbers are approximately equal.
///
/// # Panics
///
/// Panics if `actual` and `expected` are too far from each other
#[allow(dead_code)]
#[track_caller]
pub fn assert_float_closeness<T: Float + std::fmt::Display>(actual: T, expected: T, epsilon: T) {
    if (actual - expected).abs() > epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Asserts that both components of two complex numbers are approximately equal.
///
/// # Panics
///
/// Panics if either component of `actual` is too far from the one in `expected`
#[track_caller]
pub fn assert_complex_closeness(actual: Complex64, expected: Complex64, epsilon: f64) {
    if (actual.re - expected.re).abs() > epsilon || (actual.im - expected.im).abs() > epsilon {
        panic!(
            "Assertion failed: {actual} too far from expected value {expected} (with epsilon {epsilon})",
        );
    }
}

/// Generate a random, complex, signal in the provided buffers
///
/// # Panics
///
/// Panics if `reals.len() != imags.len()`
pub fn gen_random_signal<T>(reals: &mut [T], imags: &mut [T])
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    assert_eq!(
        reals.len(),
        imags.len(),
        "Real and imaginary slices must be of equal length"
    );

    let mut rng = thread_rng();

    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    for (real, imag) in reals.iter_mut().zip(imags.iter_mut()) {
        *real = uniform_dist.sample(&mut rng);
        *imag = uniform_dist.sample(&mut rng);
    }
}

/// Generate `len` random real samples in `[-1, 1)`
pub fn gen_random_real_signal<T>(len: usize) -> Vec<T>
where
    T: Float + rand::distributions::uniform::SampleUniform,
{
    let uniform_dist = Uniform::new(T::from(-1.0).unwrap(), T::from(1.0).unwrap());
    thread_rng().sample_iter(uniform_dist).take(len).collect()
}

/// Direct O(N^2) evaluation of the forward DFT, the reference every FFT is checked against.
pub fn naive_dft(signal: &[Complex64]) -> Vec<Complex64> {
    let n = signal.len();
    (0..n)
        .map(|k| {
            signal
                .iter()
                .enumerate()
                .map(|(j, x)| {
                    // Reduce the exponent modulo n first to keep the angle small
                    let angle = -std::f64::consts::TAU * ((j * k) % n) as f64 / n as f64;
                    x * Complex64::from_polar(1.0, angle)
                })
                .sum()
        })
        .collect()
}
