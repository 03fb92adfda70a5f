//! Shannon entropy of an empirical outcome distribution
//!
//! Entropy is measured in bits. A uniform distribution over `K` outcomes
//! scores `log2(K)`; all mass on a single outcome scores exactly zero.

use crate::algorithm::experiment::Tally;
use crate::io::error::{Result, arithmetic_degeneracy};
use crate::math::combinatorics::{factorial, log2_factorial};
use std::hash::Hash;

/// Shannon entropy in bits of the distribution described by `counts`
///
/// Zero counts contribute nothing, following `0 * log2(0) = 0`.
///
/// # Errors
///
/// Returns `ArithmeticDegeneracy` if the counts sum to zero
pub fn shannon_entropy(counts: impl IntoIterator<Item = u64> + Clone) -> Result<f64> {
    let total: u64 = counts.clone().into_iter().sum();
    if total == 0 {
        return Err(arithmetic_degeneracy(
            "shannon entropy",
            &"distribution has no observations",
        ));
    }
    let total = total as f64;

    // p * log2(1 / p) keeps a single certain outcome at +0.0 rather than -0.0
    Ok(counts
        .into_iter()
        .filter(|&count| count > 0)
        .map(|count| {
            let p = count as f64 / total;
            p * (total / count as f64).log2()
        })
        .sum())
}

/// Entropy measurement of one experiment run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntropyReport {
    /// Measured entropy in bits
    pub entropy: f64,
    /// Number of distinct outcomes observed
    pub distinct: usize,
    /// Number of trials in the tally
    pub total: u64,
    /// `log2(N!)`, the entropy of a perfectly uniform shuffle
    pub ideal: f64,
    /// `N!`, if representable
    pub possible: Option<u64>,
}

impl EntropyReport {
    /// Measure `tally` against the ideal for sequences of length `size`
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticDegeneracy` if the tally is empty
    pub fn analyze<T: Eq + Hash>(tally: &Tally<T>, size: usize) -> Result<Self> {
        if tally.is_empty() {
            return Err(arithmetic_degeneracy(
                "entropy analysis",
                &"tally is empty; at least one trial must be recorded",
            ));
        }
        let entropy = shannon_entropy(tally.counts().collect::<Vec<_>>())?;
        Ok(Self {
            entropy,
            distinct: tally.distinct(),
            total: tally.total(),
            ideal: log2_factorial(size),
            possible: factorial(size),
        })
    }

    /// Fraction of the ideal entropy achieved, 1.0 when the ideal is zero
    pub fn efficiency(&self) -> f64 {
        if self.ideal > 0.0 {
            self.entropy / self.ideal
        } else {
            1.0
        }
    }

    /// Bits of entropy missing relative to a uniform shuffle
    pub fn deficit(&self) -> f64 {
        self.ideal - self.entropy
    }

    /// Upper bound `log2(distinct)` on the measured entropy
    pub fn distinct_bound(&self) -> f64 {
        (self.distinct as f64).log2()
    }
}
