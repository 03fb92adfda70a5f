//! Empirical comparison of shuffle fairness using Shannon entropy
//!
//! A fixed base sequence is shuffled many times by each algorithm, the
//! resulting outcomes are tallied, and the entropy of the tally is compared
//! against `log2(N!)`, the entropy of a perfectly uniform shuffle.

#![forbid(unsafe_code)]

/// Shuffle algorithms, random sources and the sampling loop
pub mod algorithm;
/// Entropy analysis of outcome tallies
pub mod analysis;
/// Configuration, CLI, reporting and error handling
pub mod io;
/// Combinatorial helpers
pub mod math;

pub use io::error::{ExperimentError, Result};
