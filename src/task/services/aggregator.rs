//! Service layer for period-bounded aggregation of archived tasks.

use super::error::{classify_repository_error, TaskServiceError, TaskServiceResult};
use crate::task::{
    domain::{Period, TaskDomainError, TasksResult},
    ports::{TaskRepository, TaskRepositoryError},
};
use crate::user::{domain::UserId, ports::UserRepository};
use chrono::TimeDelta;
use mockable::Clock;
use std::sync::Arc;

/// Task aggregation service.
#[derive(Clone)]
pub struct TaskAggregatorService {
    users: Arc<dyn UserRepository>,
    tasks: Arc<dyn TaskRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl TaskAggregatorService {
    /// Creates a new task aggregation service.
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

    /// Computes per-name and total durations for the user's archived tasks
    /// whose end time falls inside the trailing window.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Validation`] for an invalid amount,
    /// [`TaskServiceError::UserNotFound`] when the user does not exist, and
    /// [`TaskServiceError::NoCompletedTasks`] when the window is empty.
    pub async fn tasks_result(
        &self,
        user_id: UserId,
        period: Period,
        amount: u32,
    ) -> TaskServiceResult<TasksResult> {
        let days = period.window_days(amount)?;
        let window = TimeDelta::try_days(days)
            .ok_or(TaskDomainError::InvalidPeriodAmount(amount))?;

        self.ensure_user_exists(user_id).await?;

        let since = self.clock.utc() - window;
        self.tasks
            .period_summary(user_id, since)
            .await
            .map_err(classify_repository_error)?
            .ok_or(TaskServiceError::NoCompletedTasks(user_id))
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
