//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The period unit is not one of `day`, `week`, `month`, or `year`.
    #[error("unknown period unit: {0}")]
    InvalidPeriod(String),

    /// The period amount is zero or produces an unrepresentable window.
    #[error("invalid period amount: {0}")]
    InvalidPeriodAmount(u32),
}
