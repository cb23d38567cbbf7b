//! Service layer for starting and stopping a user's active task.

use super::error::{classify_repository_error, TaskServiceError, TaskServiceResult};
use crate::task::{
    domain::{ActiveTask, CompletedTask, TaskName},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::{domain::UserId, ports::UserRepository};
use mockable::Clock;
use std::sync::Arc;

/// Request payload for starting a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StartTaskRequest {
    name: String,
}

impl StartTaskRequest {
    /// Creates a request with the task name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Task lifecycle orchestration service.
///
/// Holds the user directory port only for the fail-fast existence check on
/// stop; starting a task leans on the store's foreign-key constraint instead
/// of a pre-check, so the window between check and insert cannot admit a
/// task for a deleted user.
#[derive(Clone)]
pub struct TaskLifecycleService {
    users: Arc<dyn UserRepository>,
    tasks: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TaskLifecycleService {
    /// Creates a new task lifecycle service.
    #[must_use]
    pub fn new(
        users: Arc<dyn UserRepository>,
        tasks: Arc<dyn TaskRepository>,
        clock: Arc<dyn Clock + Send + Sync>,
    ) -> Self {
        Self {
            users,
            tasks,
            clock,
        }
    }

    /// Starts a new task for the user at the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for a blank name,
    /// [`TaskServiceError::UnknownUser`] when the user does not exist, and
    /// [`TaskServiceError::ActiveTaskExists`] when a task is already
    /// running.
    pub async fn start_task(
        &self,
        user_id: UserId,
        request: StartTaskRequest,
    ) -> TaskServiceResult<ActiveTask> {
        let name = TaskName::new(request.name)?;
        let task = ActiveTask::start(user_id, name, &*self.clock);
        self.tasks
            .start(&task)
            .await
            .map_err(classify_repository_error)?;
        Ok(task)
    }

    /// Stops the user's active task, archiving it atomically.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::UserNotFound`] when the user does not
    /// exist and [`TaskServiceError::NoActiveTask`] when no task is running.
    /// The archive is unchanged on failure.
    pub async fn stop_task(&self, user_id: UserId) -> TaskServiceResult<CompletedTask> {
        self.ensure_user_exists(user_id).await?;

        let history = self
            .tasks
            .finish_active(user_id, self.clock.utc())
            .await
            .map_err(classify_repository_error)?;
        Ok(CompletedTask {
            name: history.name,
            duration: history.duration,
        })
    }

    async fn ensure_user_exists(&self, user_id: UserId) -> TaskServiceResult<()> {
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(|err| classify_repository_error(TaskRepositoryError::persistence(err)))?;
        if user.is_none() {
            return Err(TaskServiceError::UserNotFound(user_id));
        }
        Ok(())
    }
}
