//! Repository port for live task persistence, archival, and aggregation.

use crate::task::domain::{ActiveTask, TaskHistory, TasksResult};
use crate::user::domain::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new live task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::ActiveTaskExists`] when the owner
    /// already has a live task and [`TaskRepositoryError::UnknownUser`] when
    /// the owner does not exist in the user directory.
    async fn start(&self, task: &ActiveTask) -> TaskRepositoryResult<()>;

    /// Finds the owner's live task.
    ///
    /// Returns `None` when the owner has no live task.
    async fn find_active(&self, user_id: UserId) -> TaskRepositoryResult<Option<ActiveTask>>;

    /// Finishes the owner's live task: sets the end timestamp, writes the
    /// immutable archive record, and deletes the live row. The three steps
    /// execute atomically; partial completion must not be observable.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NoActiveTask`] when the owner has no
    /// live task. The archive is unchanged in that case.
    async fn finish_active(
        &self,
        user_id: UserId,
        ended_at: DateTime<Utc>,
    ) -> TaskRepositoryResult<TaskHistory>;

    /// Aggregates the owner's archived tasks whose end time falls inside the
    /// trailing window starting at `since`, grouped by name with per-name and
    /// grand-total duration text.
    ///
    /// Returns `None` when no archived task matches. Result order follows
    /// the store's aggregation order.
    async fn period_summary(
        &self,
        user_id: UserId,
        since: DateTime<Utc>,
    ) -> TaskRepositoryResult<Option<TasksResult>>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The owner already has a live task.
    #[error("user {0} already has an active task")]
    ActiveTaskExists(UserId),

    /// The owner does not exist in the user directory.
    #[error("task references unknown user: {0}")]
    UnknownUser(UserId),

    /// The owner has no live task.
    #[error("no active task for user: {0}")]
    NoActiveTask(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
