//! Error types for experiment configuration, computation and report output

use std::fmt;

/// Main error type for all experiment operations
#[derive(Debug)]
pub enum ExperimentError {
    /// Experiment parameter validation failed before any trial was run
    InvalidConfiguration {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A numerical computation was asked to work on degenerate input
    ///
    /// Occurs when:
    /// - Entropy is requested for an empty tally
    /// - An index cannot be represented in the element type being shuffled
    ArithmeticDegeneracy {
        /// Name of the computation that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Writing the report failed
    Output {
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ExperimentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(
                    f,
                    "Invalid configuration '{parameter}' = '{value}': {reason}"
                )
            }
            Self::ArithmeticDegeneracy { operation, reason } => {
                write!(f, "Arithmetic degeneracy in {operation}: {reason}")
            }
            Self::Output { source } => write!(f, "Failed to write report: {source}"),
        }
    }
}

impl std::error::Error for ExperimentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Output { source } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ExperimentError {
    fn from(err: std::io::Error) -> Self {
        Self::Output { source: err }
    }
}

/// Convenience type alias for experiment results
pub type Result<T> = std::result::Result<T, ExperimentError>;

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ExperimentError {
    ExperimentError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an arithmetic degeneracy error
pub fn arithmetic_degeneracy(operation: &'static str, reason: &impl ToString) -> ExperimentError {
    ExperimentError::ArithmeticDegeneracy {
        operation,
        reason: reason.to_string(),
    }
}
