//! Error types for PQBench operations

use crate::types::AlgorithmId;
use thiserror::Error;

/// Result type alias for PQBench operations
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while recording and ranking benchmarks
#[derive(Error, Debug, Clone)]
pub enum BenchError {
    // === Validation ===
    /// Submission payload failed validation; nothing was persisted
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // === Lookup ===
    /// Referenced algorithm does not exist
    #[error("Algorithm not found: {0}")]
    AlgorithmNotFound(AlgorithmId),

    /// An algorithm with this name and version was already submitted
    #[error("Algorithm already exists: {name} {version}")]
    AlgorithmExists { name: String, version: String },

    /// A researcher with this email already exists
    #[error("Researcher email already registered: {0}")]
    EmailTaken(String),

    // === Storage ===
    /// Record store failure
    #[error("Storage error: {0}")]
    Storage(String),

    // === General ===
    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error codes exposed in API responses
impl BenchError {
    /// Get the error code for API responses
    pub fn code(&self) -> u32 {
        match self {
            Self::InvalidInput(_) => 2001,
            Self::AlgorithmNotFound(_) => 2002,
            Self::AlgorithmExists { .. } => 2003,
            Self::EmailTaken(_) => 2004,
            Self::Storage(_) => 2005,
            Self::Internal(_) => 9999,
        }
    }

    /// Check if the error is the caller's fault
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidInput(_)
                | Self::AlgorithmNotFound(_)
                | Self::AlgorithmExists { .. }
                | Self::EmailTaken(_)
        )
    }
}
