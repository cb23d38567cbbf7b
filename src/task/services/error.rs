//! Closed error taxonomy for task tracking operations.
//!
//! One enumeration is shared by the lifecycle manager, the aggregator, and
//! the HTTP boundary so that every failure a caller can observe is a typed
//! variant rather than an ad hoc sentinel value.

use crate::task::domain::TaskDomainError;
use crate::task::ports::TaskRepositoryError;
use crate::user::domain::UserId;
use thiserror::Error;

/// Errors surfaced by task lifecycle and aggregation services.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// The user does not exist (checked before mutation).
    #[error("no user found: {0}")]
    UserNotFound(UserId),

    /// Starting a task referenced a user the store does not know.
    #[error("cannot start task for unknown user: {0}")]
    UnknownUser(UserId),

    /// The user already has an active task.
    #[error("user {0} already has an active task")]
    ActiveTaskExists(UserId),

    /// The user has no active task to stop.
    #[error("no active task for user: {0}")]
    NoActiveTask(UserId),

    /// No archived task fell inside the requested period window.
    #[error("no completed tasks in period for user: {0}")]
    NoCompletedTasks(UserId),

    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] TaskDomainError),

    /// Unclassified persistence failure.
    #[error(transparent)]
    Repository(TaskRepositoryError),
}

/// Result type for task service operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// Folds repository failures into the shared taxonomy.
pub(super) fn classify_repository_error(err: TaskRepositoryError) -> TaskServiceError {
    match err {
        TaskRepositoryError::ActiveTaskExists(user_id) => {
            TaskServiceError::ActiveTaskExists(user_id)
        }
        TaskRepositoryError::UnknownUser(user_id) => TaskServiceError::UnknownUser(user_id),
        TaskRepositoryError::NoActiveTask(user_id) => TaskServiceError::NoActiveTask(user_id),
        other @ TaskRepositoryError::Persistence(_) => TaskServiceError::Repository(other),
    }
}
