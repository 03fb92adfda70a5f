//! Human-readable rendering of experiment results

use crate::algorithm::experiment::Tally;
use crate::algorithm::shuffle::ShuffleAlgorithm;
use crate::analysis::entropy::EntropyReport;
use crate::io::configuration::{ENTROPY_PRECISION, ExperimentConfig};
use crate::io::error::Result;
use crate::math::combinatorics::log2_factorial;
use std::io::Write;

/// Everything reported about one algorithm's run
#[derive(Clone, Debug, PartialEq)]
pub struct AlgorithmSummary {
    /// Algorithm that produced the tally
    pub algorithm: ShuffleAlgorithm,
    /// Entropy measurement of the tally
    pub entropy: EntropyReport,
    /// Trials whose outcome was not a rearrangement of the base sequence
    pub invalid_outcomes: u64,
    /// Most frequent outcome and its count
    pub most_frequent: Option<(Vec<usize>, u64)>,
}

impl AlgorithmSummary {
    /// Summarise `tally` as produced by `algorithm` from `base`
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticDegeneracy` if the tally is empty
    pub fn from_tally(
        algorithm: ShuffleAlgorithm,
        tally: &Tally<usize>,
        base: &[usize],
    ) -> Result<Self> {
        let entropy = EntropyReport::analyze(tally, base.len())?;
        Ok(Self {
            algorithm,
            entropy,
            invalid_outcomes: tally.invalid_outcomes(base),
            most_frequent: tally
                .most_frequent()
                .map(|(outcome, count)| (outcome.as_slice().to_vec(), count)),
        })
    }
}

/// Heading line printed once before any algorithm runs
///
/// # Errors
///
/// Returns `Output` if writing fails
pub fn write_header(out: &mut impl Write, config: &ExperimentConfig) -> Result<()> {
    let ideal = log2_factorial(config.size);
    writeln!(
        out,
        "Running {} trials with array of size {} (ideal entropy = {ideal:.ENTROPY_PRECISION$} bits)",
        config.trials, config.size
    )?;
    writeln!(out)?;
    Ok(())
}

/// Heading line printed before an algorithm's trials start
///
/// # Errors
///
/// Returns `Output` if writing fails
pub fn write_algorithm_start(out: &mut impl Write, algorithm: ShuffleAlgorithm) -> Result<()> {
    let title = match algorithm {
        ShuffleAlgorithm::FisherYates => "Fisher-Yates Shuffle",
        ShuffleAlgorithm::Biased => "Biased Shuffle",
    };
    writeln!(out, "Testing {title}...")?;
    Ok(())
}

/// Measured metrics of one algorithm
///
/// # Errors
///
/// Returns `Output` if writing fails
pub fn write_summary(out: &mut impl Write, summary: &AlgorithmSummary) -> Result<()> {
    let report = &summary.entropy;
    writeln!(
        out,
        "{} Entropy: {:.ENTROPY_PRECISION$} bits",
        summary.algorithm.label(),
        report.entropy
    )?;

    match report.possible {
        Some(possible) => writeln!(out, "Unique permutations: {} / {possible}", report.distinct)?,
        None => writeln!(out, "Unique permutations: {}", report.distinct)?,
    }

    writeln!(
        out,
        "Efficiency: {:.2}% of ideal (deficit {:.ENTROPY_PRECISION$} bits)",
        report.efficiency() * 100.0,
        report.deficit()
    )?;

    if summary.invalid_outcomes > 0 {
        writeln!(
            out,
            "Non-permutation outcomes: {} of {} trials",
            summary.invalid_outcomes, report.total
        )?;
    }

    if let Some((outcome, count)) = &summary.most_frequent {
        let share = *count as f64 / report.total as f64 * 100.0;
        writeln!(
            out,
            "Most frequent outcome: {outcome:?} ({count} times, {share:.2}%)"
        )?;
    }

    writeln!(out)?;
    Ok(())
}
