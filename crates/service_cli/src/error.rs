//! Error types for the variate CLI.

use thiserror::Error;
use variate_core::{DistributionError, SampleError};

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Distribution rejected its parameters
    #[error("Invalid distribution: {0}")]
    Distribution(#[from] DistributionError),

    /// Sampling failed at draw time
    #[error("Sampling failed: {0}")]
    Sample(#[from] SampleError),

    /// Malformed command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create an invalid-argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_core_errors_convert() {
        let err: CliError = DistributionError::ZeroWeight.into();
        assert_eq!(
            err.to_string(),
            "Invalid distribution: Weights must be positive"
        );

        let err: CliError = SampleError::PoolExhausted { population: 3 }.into();
        assert!(err.to_string().starts_with("Sampling failed: "));
    }

    #[test]
    fn test_invalid_argument_message() {
        let err = CliError::invalid_argument("bad entry 'x'");
        assert_eq!(err.to_string(), "Invalid argument: bad entry 'x'");
    }
}
