/// The transform variant an [`Fft`](crate::Fft) dispatches to.
///
/// The variant is fixed when the engine is built.
#[non_exhaustive]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Algorithm {
    #[default]
    /// Radix-2 decimation-in-time Cooley-Tukey.
    ///
    /// Recursive even/odd splitting down to the base case threshold, then the
    /// iterative bit-reversal kernel for the remaining block.
    CooleyTukey,
    /// Chirp-z transform for arbitrary lengths.
    ///
    /// Reserved; selecting it makes every transform fail with
    /// [`FftError::NotImplemented`](crate::FftError::NotImplemented).
    Bluestein,
}

/// Default length at which the recursive kernel runs both halves in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 11;

/// Default length at or below which the recursive kernel hands off to the iterative one.
pub const DEFAULT_BASE_CASE_THRESHOLD: usize = 1 << 7;

/// Options to tune the transform depending on the hardware and input size.
///
/// Calling FFT routines without specifying options selects reasonable defaults.
/// None of these tunables change the result beyond floating-point rounding.
///
/// ```
/// use radixft::options::Options;
///
/// let opts = Options::configure(|opts| {
///     opts.parallel_threshold = 1 << 14;
///     opts.base_case_threshold = 64;
/// });
/// assert_eq!(opts.base_case_threshold, 64);
/// ```
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub algorithm: Algorithm,
    /// Lengths at or above this run the two recursive halves concurrently.
    pub parallel_threshold: usize,
    /// Lengths at or below this skip recursion and use the iterative kernel.
    ///
    /// `0` and `1` both mean "recurse all the way down to single samples".
    pub base_case_threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            base_case_threshold: DEFAULT_BASE_CASE_THRESHOLD,
        }
    }
}

impl Options {
    /// Start from the defaults and let `configure` adjust them.
    pub fn configure<F>(configure: F) -> Self
    where
        F: FnOnce(&mut Options),
    {
        let mut options = Self::default();
        configure(&mut options);
        options
    }

    /// Defaults, but never split work across threads.
    pub fn sequential() -> Self {
        Self::configure(|opts| opts.parallel_threshold = usize::MAX)
    }

    pub(crate) fn runs_in_parallel(&self, len: usize) -> bool {
        len > 1 && len >= self.parallel_threshold
    }

    pub(crate) fn is_base_case(&self, len: usize) -> bool {
        len <= self.base_case_threshold.max(1)
    }
}
