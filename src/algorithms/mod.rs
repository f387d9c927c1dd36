//! FFT Algorithm Implementations
//!
//! Both kernels compute the forward radix-2 decimation-in-time transform in place.
//! Neither validates its input: the buffer length must already be a power of 2.
//!
//! ## Available Algorithms
//!
//! - **Recursive**: splits the signal into even- and odd-indexed halves, transforms each
//!   (concurrently above the parallel threshold), then combines them with one butterfly pass.
//!   Blocks at or below the base case threshold are handed to the iterative kernel.
//!
//! - **Iterative**: applies the bit reversal permutation once, then sweeps butterflies from
//!   size 2 up to the full length. Input is bit-reversed, output is in natural order.

pub mod bit_reverse;
pub mod iterative;
pub mod recursive;
