//! # Payday Error Types
//!
//! Only genuine faults are errors. Expected absences (no record yet, no
//! character bound, collaborator capability missing) are modeled as `Option`
//! branches by the callers, never as error variants.

use thiserror::Error;

/// Errors that can occur in the payday domain layer.
#[derive(Error, Debug)]
pub enum PaydayError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration was syntactically or semantically invalid.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type for payday domain operations.
pub type PaydayResult<T> = Result<T, PaydayError>;
