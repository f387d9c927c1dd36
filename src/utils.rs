//! Approximate comparison of complex values

use num_complex::Complex;
use num_traits::Float;

/// `true` if both the real and the imaginary parts of `a` and `b` differ by at most `epsilon`.
#[inline]
pub fn approx_eq<T: Float>(a: Complex<T>, b: Complex<T>, epsilon: T) -> bool {
    (a.re - b.re).abs() <= epsilon && (a.im - b.im).abs() <= epsilon
}

/// Element-wise [`approx_eq`]. Slices of different lengths are never equal.
pub fn all_approx_eq<T: Float>(a: &[Complex<T>], b: &[Complex<T>], epsilon: T) -> bool {
    a.len() == b.len()
        && a
            .iter()
            .zip(b.iter())
            .all(|(x, y)| approx_eq(*x, *y, epsilon))
}
