//! Error taxonomy for the scheduling core
//!
//! Three validation errors are caller-visible and non-retryable; anything
//! raised by an injected collaborator passes through unchanged so the
//! caller keeps ownership of retry policy.

use thiserror::Error;

/// Errors surfaced by the scheduling core
#[derive(Debug, Error)]
pub enum SchedulerError {
    /// Raw response could not be normalized to a grade
    #[error("Invalid grade: {0}")]
    InvalidGrade(String),
    /// Malformed session configuration
    #[error("Invalid session config: {0}")]
    InvalidConfig(String),
    /// Item referenced by an outcome is absent from the known pool
    #[error("Item not found in pool: {0}")]
    ItemNotFound(String),
    /// Failure inside an injected collaborator, propagated unchanged
    #[error("Collaborator error: {0}")]
    Collaborator(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Scheduler result type
pub type Result<T> = std::result::Result<T, SchedulerError>;
