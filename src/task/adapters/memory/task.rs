//! In-memory task repository.

use crate::task::domain::{format_interval, ActiveTask, CompletedTask, TaskHistory, TasksResult};
use crate::task::ports::{TaskRepository, TaskRepositoryError};
use crate::user::domain::UserId;
use crate::user::ports::UserRepository;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

#[derive(Default)]
struct TaskStore {
    active: HashMap<UserId, ActiveTask>,
    history: Vec<TaskHistory>,
}

/// Thread-safe in-memory implementation of [`TaskRepository`].
///
/// Mirrors the relational constraints in process: at most one active task per
/// user, and starting a task for a user absent from the directory fails the
/// same way a foreign-key violation would.
#[derive(Clone)]
pub struct InMemoryTaskRepository {
    users: Arc<dyn UserRepository>,
    store: Arc<RwLock<TaskStore>>,
}

impl InMemoryTaskRepository {
    /// Creates an empty repository backed by the given user directory.
    #[must_use]
    pub fn new(users: Arc<dyn UserRepository>) -> Self {
        Self {
            users,
            store: Arc::new(RwLock::new(TaskStore::default())),
        }
    }

    /// Returns the number of archived tasks.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when the store lock is
    /// poisoned.
    pub fn history_len(&self) -> Result<usize, TaskRepositoryError> {
        let store = self.store.read().map_err(|_| lock_error())?;
        Ok(store.history.len())
    }
}

fn lock_error() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("task store lock poisoned"))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn start(&self, task: &ActiveTask) -> Result<(), TaskRepositoryError> {
        let user_id = task.user_id();
        // Look up the user before taking the lock; the guard must not be
        // held across an await point.
        let user = self
            .users
            .find_by_id(user_id)
            .await
            .map_err(TaskRepositoryError::persistence)?;
        if user.is_none() {
            return Err(TaskRepositoryError::UnknownUser(user_id));
        }

        let mut store = self.store.write().map_err(|_| lock_error())?;
        if store.active.contains_key(&user_id) {
            return Err(TaskRepositoryError::ActiveTaskExists(user_id));
        }
        store.active.insert(user_id, task.clone());
        Ok(())
    }

    async fn find_active(&self, user_id: UserId) -> Result<Option<ActiveTask>, TaskRepositoryError> {
        let store = self.store.read().map_err(|_| lock_error())?;
        Ok(store.active.get(&user_id).cloned())
    }

    async fn finish_active(
        &self,
        user_id: UserId,
        ended_at: DateTime<Utc>,
    ) -> Result<TaskHistory, TaskRepositoryError> {
        let mut store = self.store.write().map_err(|_| lock_error())?;
        let task = store
            .active
            .remove(&user_id)
            .ok_or(TaskRepositoryError::NoActiveTask(user_id))?;
        let history = task.archive(ended_at);
        store.history.push(history.clone());
        Ok(history)
    }

    async fn period_summary(
        &self,
        user_id: UserId,
        since: DateTime<Utc>,
    ) -> Result<Option<TasksResult>, TaskRepositoryError> {
        let store = self.store.read().map_err(|_| lock_error())?;
        let mut order: Vec<String> = Vec::new();
        let mut sums: HashMap<String, TimeDelta> = HashMap::new();
        let mut total = TimeDelta::zero();
        for record in store
            .history
            .iter()
            .filter(|record| record.user_id == user_id && record.ended_at >= since)
        {
            let elapsed = record.ended_at - record.started_at;
            total += elapsed;
            match sums.entry(record.name.clone()) {
                Entry::Occupied(mut slot) => *slot.get_mut() += elapsed,
                Entry::Vacant(slot) => {
                    order.push(slot.key().clone());
                    slot.insert(elapsed);
                }
            }
        }
        if order.is_empty() {
            return Ok(None);
        }
        let completed = order
            .into_iter()
            .map(|name| {
                let duration = sums
                    .get(&name)
                    .copied()
                    .map_or_else(String::new, format_interval);
                CompletedTask { name, duration }
            })
            .collect();
        Ok(Some(TasksResult {
            total_duration: format_interval(total),
            completed,
        }))
    }
}
