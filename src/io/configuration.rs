//! Experiment constants and runtime configuration defaults

use crate::io::error::{Result, invalid_configuration};

// Default values for configurable parameters
/// Number of elements in the base sequence (7! = 5040 permutations)
pub const DEFAULT_ARRAY_SIZE: usize = 7;

/// Number of shuffles performed per algorithm
pub const DEFAULT_TRIALS: u64 = 1_000_000;

/// Fixed seed for reproducible experiments
pub const DEFAULT_SEED: u64 = 42;

// 20! is the largest factorial that fits in a u64
/// Maximum allowed base sequence length
pub const MAX_ARRAY_SIZE: usize = 20;

// Progress bar display settings
/// Number of trials between progress bar refreshes
pub const PROGRESS_REFRESH_INTERVAL: u64 = 10_000;
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

// Output settings
/// Decimal digits used when printing entropy values
pub const ENTROPY_PRECISION: usize = 4;

/// Parameters of a single comparative experiment
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperimentConfig {
    /// Length of the base sequence `0..size`
    pub size: usize,
    /// Number of independent shuffles per algorithm
    pub trials: u64,
    /// Seed for the random stream of each run
    pub seed: u64,
}

impl Default for ExperimentConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_ARRAY_SIZE,
            trials: DEFAULT_TRIALS,
            seed: DEFAULT_SEED,
        }
    }
}

impl ExperimentConfig {
    /// Reject configurations that cannot produce a meaningful experiment
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` if:
    /// - `size` is zero or exceeds [`MAX_ARRAY_SIZE`]
    /// - `trials` is zero
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(invalid_configuration(
                "size",
                &self.size,
                &"base sequence must contain at least one element",
            ));
        }
        if self.size > MAX_ARRAY_SIZE {
            return Err(invalid_configuration(
                "size",
                &self.size,
                &format!("must not exceed {MAX_ARRAY_SIZE}"),
            ));
        }
        if self.trials == 0 {
            return Err(invalid_configuration(
                "trials",
                &self.trials,
                &"at least one trial is required",
            ));
        }
        Ok(())
    }

    /// Base sequence `0, 1, ..., size - 1` shared by every trial
    pub fn base_sequence(&self) -> Vec<usize> {
        (0..self.size).collect()
    }
}
