//! In-memory repository for user directory tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{PassportNumber, User, UserId},
    ports::{Page, UserFilter, UserRepository, UserRepositoryError, UserRepositoryResult},
};

/// Thread-safe in-memory user repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    state: Arc<RwLock<InMemoryUserState>>,
}

#[derive(Debug, Default)]
struct InMemoryUserState {
    users: HashMap<UserId, User>,
    passport_index: HashMap<String, UserId>,
}

impl InMemoryUserRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl std::fmt::Display) -> UserRepositoryError {
    UserRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

fn matches_filter(user: &User, filter: &UserFilter) -> bool {
    let passport_ok = filter
        .passport_number
        .as_deref()
        .is_none_or(|value| user.passport_number().as_str() == value);
    let surname_ok = filter
        .surname
        .as_deref()
        .is_none_or(|value| user.profile().surname() == value);
    let name_ok = filter
        .name
        .as_deref()
        .is_none_or(|value| user.profile().name() == value);
    let patronymic_ok = filter
        .patronymic
        .as_deref()
        .is_none_or(|value| user.profile().patronymic() == Some(value));
    let address_ok = filter
        .address
        .as_deref()
        .is_none_or(|value| user.profile().address() == value);

    passport_ok && surname_ok && name_ok && patronymic_ok && address_ok
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let passport_key = user.passport_number().as_str().to_owned();
        if state.passport_index.contains_key(&passport_key) {
            return Err(UserRepositoryError::DuplicatePassport(
                user.passport_number().clone(),
            ));
        }

        state.passport_index.insert(passport_key, user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let previous = state
            .users
            .get(&user.id())
            .ok_or(UserRepositoryError::NotFound(user.id()))?
            .clone();

        let passport_key = user.passport_number().as_str().to_owned();
        let collides = state
            .passport_index
            .get(&passport_key)
            .is_some_and(|holder| *holder != user.id());
        if collides {
            return Err(UserRepositoryError::DuplicatePassport(
                user.passport_number().clone(),
            ));
        }

        state
            .passport_index
            .remove(previous.passport_number().as_str());
        state.passport_index.insert(passport_key, user.id());
        state.users.insert(user.id(), user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_passport(
        &self,
        passport_number: &PassportNumber,
    ) -> UserRepositoryResult<Option<User>> {
        let state = self.state.read().map_err(lock_error)?;
        let user = state
            .passport_index
            .get(passport_number.as_str())
            .and_then(|id| state.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn list(&self, filter: &UserFilter, page: Page) -> UserRepositoryResult<Vec<User>> {
        let state = self.state.read().map_err(lock_error)?;
        let mut matching: Vec<User> = state
            .users
            .values()
            .filter(|user| matches_filter(user, filter))
            .cloned()
            .collect();
        matching.sort_by_key(User::created_at);

        let offset = usize::try_from(page.offset.max(0)).map_err(lock_error)?;
        let limit = usize::try_from(page.limit.max(0)).map_err(lock_error)?;
        Ok(matching.into_iter().skip(offset).take(limit).collect())
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        let removed = state
            .users
            .remove(&id)
            .ok_or(UserRepositoryError::NotFound(id))?;
        state.passport_index.remove(removed.passport_number().as_str());
        Ok(())
    }
}
