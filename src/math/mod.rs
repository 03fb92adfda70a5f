//! Mathematical utilities for the experiment

/// Factorials and ideal permutation entropy
pub mod combinatorics;
