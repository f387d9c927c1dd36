//! FFT Butterfly Kernels
//!
//! Decimation-in-time butterflies shared by the iterative and recursive kernels.
//! The kernels are scalar; `multiversion` compiles them for several target feature
//! levels and picks the best one at runtime.

use num_complex::Complex64;

/// Butterfly for chunk_size == 2, where the only twiddle factor is `1`
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub(crate) fn fft_chunk_2(buf: &mut [Complex64]) {
    buf.chunks_exact_mut(2).for_each(|chunk| {
        let z0 = chunk[0];
        let z1 = chunk[1];
        chunk[0] = z0 + z1;
        chunk[1] = z0 - z1;
    });
}

/// DIT butterflies over every chunk of `dist << 1` elements.
///
/// `twiddles` must hold `exp(-2πi·k/chunk_size)` for `k` in `0..dist`.
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
#[inline]
pub(crate) fn fft_chunk_n(buf: &mut [Complex64], twiddles: &[Complex64], dist: usize) {
    let chunk_size = dist << 1;
    debug_assert_eq!(twiddles.len(), dist);

    buf.chunks_exact_mut(chunk_size).for_each(|chunk| {
        let (s0, s1) = chunk.split_at_mut(dist);

        s0.iter_mut()
            .zip(s1.iter_mut())
            .zip(twiddles.iter())
            .for_each(|((z0, z1), w)| {
                let u = *z0;
                let t = *w * *z1;
                *z0 = u + t;
                *z1 = u - t;
            });
    });
}

/// Combine two half-length transforms into the transform of their interleaving.
///
/// `out[j] = even[j] + w·odd[j]` and `out[j + n/2] = even[j] - w·odd[j]`
/// with `w = exp(-2πi·j/n)`, `n = out.len()`.
#[multiversion::multiversion(targets(
    "x86_64+avx2+fma",
    "x86_64+sse4.2",
    "x86+avx2+fma",
    "x86+sse4.2",
    "x86+sse2",
    "aarch64+neon",
))]
pub(crate) fn combine(out: &mut [Complex64], even: &[Complex64], odd: &[Complex64]) {
    let n = out.len();
    let half = n >> 1;
    debug_assert!(even.len() == half && odd.len() == half);

    let (out_lo, out_hi) = out.split_at_mut(half);
    out_lo
        .iter_mut()
        .zip(out_hi.iter_mut())
        .zip(even.iter().zip(odd.iter()))
        .enumerate()
        .for_each(|(j, ((lo, hi), (e, o)))| {
            let t = crate::twiddles::twiddle(j, n) * *o;
            *lo = *e + t;
            *hi = *e - t;
        });
}
