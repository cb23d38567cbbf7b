//! Live task aggregate and validated task name.

use super::{format_interval, TaskDomainError, TaskHistory, TaskId};
use crate::user::domain::UserId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::fmt;

/// Validated task name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskName(String);

impl TaskName {
    /// Creates a validated task name.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] when the value is blank
    /// after trimming.
    pub fn new(value: impl Into<String>) -> Result<Self, TaskDomainError> {
        let raw = value.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the task name as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TaskName {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for TaskName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A currently running task.
///
/// At most one live task exists per user; the persistent store enforces the
/// invariant with a uniqueness constraint on the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveTask {
    id: TaskId,
    user_id: UserId,
    name: TaskName,
    started_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted live task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedActiveTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted owner identifier.
    pub user_id: UserId,
    /// Persisted task name.
    pub name: TaskName,
    /// Persisted start timestamp.
    pub started_at: DateTime<Utc>,
}

impl ActiveTask {
    /// Starts a new task for a user at the current clock time.
    #[must_use]
    pub fn start(user_id: UserId, name: TaskName, clock: &dyn Clock) -> Self {
        Self {
            id: TaskId::new(),
            user_id,
            name,
            started_at: clock.utc(),
        }
    }

    /// Reconstructs a live task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedActiveTaskData) -> Self {
        Self {
            id: data.id,
            user_id: data.user_id,
            name: data.name,
            started_at: data.started_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owner identifier.
    #[must_use]
    pub const fn user_id(&self) -> UserId {
        self.user_id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the start timestamp.
    #[must_use]
    pub const fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Converts this live task into an immutable archive record, deriving
    /// the elapsed duration from the given end timestamp.
    #[must_use]
    pub fn archive(self, ended_at: DateTime<Utc>) -> TaskHistory {
        let duration = format_interval(ended_at - self.started_at);
        TaskHistory {
            id: TaskId::new(),
            task_id: self.id,
            user_id: self.user_id,
            name: self.name.0,
            started_at: self.started_at,
            ended_at,
            duration,
        }
    }
}
