use num_complex::Complex64;

/// `-2π`, the exponent scale of the forward DFT.
pub(crate) const MINUS_TWO_PI: f64 = -std::f64::consts::TAU;

/// The forward twiddle factor `exp(-2πi·k/n)`.
#[inline]
pub(crate) fn twiddle(k: usize, n: usize) -> Complex64 {
    let angle = MINUS_TWO_PI * k as f64 / n as f64;
    let (sin, cos) = angle.sin_cos();
    Complex64::new(cos, sin)
}

/// Twiddle factors `exp(-2πi·k/chunk_size)` for `k` in `0..chunk_size / 2`.
///
/// Each factor is computed from its own angle rather than by repeated rotation,
/// so the phase error does not accumulate along the table.
pub(crate) fn generate_twiddles(chunk_size: usize) -> Vec<Complex64> {
    (0..chunk_size >> 1).map(|k| twiddle(k, chunk_size)).collect()
}
