//! Statistical analysis of shuffle outcome distributions

/// Shannon entropy of a frequency tally
pub mod entropy;
