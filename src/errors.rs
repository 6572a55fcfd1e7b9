use thiserror::Error;

use crate::config::ConfigError;

/// Custom error types for the classroom demos
#[derive(Debug, Error)]
pub enum ClassroomError {
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unknown demo: {0}")]
    UnknownDemo(String),

    #[error("Demo '{0}' is disabled; enable it with --enable-square or enable_square: true")]
    FeatureDisabled(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Failed to encode output: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Result type specific to classroom operations
pub type ClassroomResult<T> = Result<T, ClassroomError>;
