/// Error types for the dashboard core
use thiserror::Error;

/// Main error type for dashboard operations
#[derive(Error, Debug)]
pub enum DashError {
    /// Network request could not be completed
    #[error("{0}")]
    Transport(String),

    /// Response body was not valid JSON for the expected shape
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Server answered but reported `success: false`
    #[error("{0}")]
    Reported(String),

    /// Configuration could not be parsed
    #[error("Invalid dashboard configuration: {0}")]
    Config(String),
}

/// Type alias for Results using DashError
pub type Result<T> = std::result::Result<T, DashError>;
