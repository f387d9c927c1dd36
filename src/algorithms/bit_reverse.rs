//! Bit reversal permutation, the reordering the iterative kernel needs before its butterfly
//! sweep.

/// Reverse the low `log_n` bits of `index`.
#[inline]
pub fn reverse_bits(index: usize, log_n: u32) -> usize {
    if log_n == 0 {
        return 0;
    }
    index.reverse_bits() >> (usize::BITS - log_n)
}

/// Reorder `buf` so that element `i` moves to position `rev(i)`.
///
/// Each pair is swapped exactly once, when visited from its smaller index.
///
/// # Panics
///
/// Panics in debug builds if `buf.len()` is not a power of 2.
pub fn bit_reverse_permutation<T>(buf: &mut [T]) {
    let n = buf.len();
    if n <= 2 {
        return;
    }
    debug_assert!(n.is_power_of_two());
    let log_n = n.ilog2();

    for i in 1..n {
        let j = reverse_bits(i, log_n);
        if j > i {
            buf.swap(i, j);
        }
    }
}
