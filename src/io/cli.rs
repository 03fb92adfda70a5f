//! Command-line interface and orchestration of the comparative experiment

use crate::algorithm::experiment::ExperimentRunner;
use crate::algorithm::random::SeededSource;
use crate::algorithm::shuffle::ShuffleAlgorithm;
use crate::io::configuration::{DEFAULT_ARRAY_SIZE, DEFAULT_SEED, DEFAULT_TRIALS, ExperimentConfig};
use crate::io::error::Result;
use crate::io::progress::TrialProgress;
use crate::io::report::{AlgorithmSummary, write_algorithm_start, write_header, write_summary};
use clap::{Parser, ValueEnum};
use std::io::Write;
use std::time::Instant;

/// Which shuffle algorithms to measure
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmChoice {
    /// Only the unbiased Fisher-Yates shuffle
    FisherYates,
    /// Only the biased shuffle
    Biased,
    /// Both, Fisher-Yates first
    Both,
}

impl AlgorithmChoice {
    /// Algorithms selected, in report order
    pub fn algorithms(self) -> Vec<ShuffleAlgorithm> {
        match self {
            Self::FisherYates => vec![ShuffleAlgorithm::FisherYates],
            Self::Biased => vec![ShuffleAlgorithm::Biased],
            Self::Both => ShuffleAlgorithm::ALL.to_vec(),
        }
    }
}

#[derive(Parser)]
#[command(name = "shuffle-entropy")]
#[command(
    author,
    version,
    about = "Compare shuffle fairness through the entropy of permutation distributions"
)]
/// Command-line arguments for the shuffle entropy experiment
pub struct Cli {
    /// Number of elements in the shuffled sequence
    #[arg(short = 'n', long, default_value_t = DEFAULT_ARRAY_SIZE)]
    pub size: usize,

    /// Number of shuffles per algorithm
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: u64,

    /// Random seed for reproducible experiments
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Algorithms to measure
    #[arg(short, long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Emit debug-level log events
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Experiment parameters selected on the command line
    pub const fn config(&self) -> ExperimentConfig {
        ExperimentConfig {
            size: self.size,
            trials: self.trials,
            seed: self.seed,
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Default log filter directive when `RUST_LOG` is unset
    pub const fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}

/// Runs each selected algorithm through the experiment and prints the comparison
pub struct ReportDriver {
    config: ExperimentConfig,
    algorithms: Vec<ShuffleAlgorithm>,
    show_progress: bool,
}

impl ReportDriver {
    /// Create a driver for the given CLI arguments
    pub fn new(cli: &Cli) -> Self {
        Self {
            config: cli.config(),
            algorithms: cli.algorithm.algorithms(),
            show_progress: cli.should_show_progress(),
        }
    }

    /// Create a driver with explicit parameters and no progress display
    pub const fn with_config(config: ExperimentConfig, algorithms: Vec<ShuffleAlgorithm>) -> Self {
        Self {
            config,
            algorithms,
            show_progress: false,
        }
    }

    /// Run all selected algorithms, writing the report to `out`
    ///
    /// Each algorithm gets its own random stream seeded from the configured seed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The configuration is invalid (nothing is written in that case)
    /// - A shuffle or entropy computation fails
    /// - Writing to `out` fails
    pub fn run(&self, out: &mut impl Write) -> Result<Vec<AlgorithmSummary>> {
        self.config.validate()?;

        let base = self.config.base_sequence();
        let runner = ExperimentRunner::new(base, self.config.trials)?;

        tracing::info!(
            size = self.config.size,
            trials = self.config.trials,
            seed = self.config.seed,
            "starting shuffle entropy experiment"
        );
        write_header(out, &self.config)?;

        let mut summaries = Vec::with_capacity(self.algorithms.len());
        for &algorithm in &self.algorithms {
            write_algorithm_start(out, algorithm)?;
            out.flush()?;

            let progress = if self.show_progress {
                TrialProgress::new(algorithm.label(), self.config.trials)
            } else {
                TrialProgress::hidden(self.config.trials)
            };

            let start_time = Instant::now();
            let mut source = SeededSource::new(self.config.seed);
            let tally =
                runner.run_observed(algorithm, &mut source, |completed| progress.update(completed))?;
            progress.finish();

            let summary = AlgorithmSummary::from_tally(algorithm, &tally, runner.base())?;
            tracing::info!(
                algorithm = algorithm.label(),
                entropy = summary.entropy.entropy,
                distinct = summary.entropy.distinct,
                elapsed_ms = start_time.elapsed().as_millis() as u64,
                "algorithm measured"
            );
            write_summary(out, &summary)?;
            summaries.push(summary);
        }

        Ok(summaries)
    }
}
