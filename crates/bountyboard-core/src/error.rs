//! Error types for bountyboard operations
//!
//! Faults (I/O, configuration) live in [`BountyError`]. Validation
//! outcomes are not faults; they are typed results on the staging and
//! workflow modules and never reach the program store.

use thiserror::Error;

/// Fault type for bountyboard operations
#[derive(Error, Debug)]
pub enum BountyError {
    /// B001: Configuration error
    #[error("B001: configuration error: {0}")]
    Config(String),

    /// B002: IO error
    #[error("B002: IO error: {0}")]
    Io(#[from] std::io::Error),

    /// B003: Parse error (config file structure)
    #[error("B003: parse error: {message}")]
    Parse { message: String },
}

impl BountyError {
    /// Get the error code (e.g., "B001")
    pub fn code(&self) -> &'static str {
        match self {
            BountyError::Config(_) => "B001",
            BountyError::Io(_) => "B002",
            BountyError::Parse { .. } => "B003",
        }
    }

    /// Get the exit code for this error type
    pub fn exit_code(&self) -> i32 {
        match self {
            BountyError::Config(_) => 4,
            BountyError::Io(_) => 2,
            BountyError::Parse { .. } => 1,
        }
    }
}
