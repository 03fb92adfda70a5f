//! Factorials and the entropy of a uniform distribution over permutations

/// `n!`, or `None` if it overflows a `u64` (any `n > 20`)
pub fn factorial(n: usize) -> Option<u64> {
    (2..=n as u64).try_fold(1_u64, u64::checked_mul)
}

/// `log2(n!)`, the entropy in bits of a uniform choice among all permutations of `n` elements
///
/// Summed term by term so it stays finite for any `n`.
pub fn log2_factorial(n: usize) -> f64 {
    (2..=n).map(|k| (k as f64).log2()).sum()
}
