//! Shuffle algorithms and the Monte Carlo experiment that samples them

/// Trial loop and outcome tally
pub mod experiment;
/// Uniform index sources
pub mod random;
/// Fisher-Yates and biased shuffles
pub mod shuffle;
