//! Input/output operations, configuration and error handling

/// Command-line interface and experiment orchestration
pub mod cli;
/// Default parameters and validated experiment configuration
pub mod configuration;
/// Error types for all experiment operations
pub mod error;
/// Progress display while trials run
pub mod progress;
/// Human-readable rendering of experiment results
pub mod report;
