//! Repository port for user persistence and lookup.

use crate::user::domain::{PassportNumber, User, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for user repository operations.
pub type UserRepositoryResult<T> = Result<T, UserRepositoryError>;

/// Equality filters applied when listing users.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    /// Canonical passport number to match.
    pub passport_number: Option<String>,
    /// Surname to match.
    pub surname: Option<String>,
    /// Given name to match.
    pub name: Option<String>,
    /// Patronymic to match.
    pub patronymic: Option<String>,
    /// Address to match.
    pub address: Option<String>,
}

/// Pagination window for list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Maximum number of records to return.
    pub limit: i64,
    /// Number of records to skip.
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 10,
            offset: 0,
        }
    }
}

/// User persistence contract.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Stores a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::DuplicatePassport`] when another user
    /// already holds the passport number.
    async fn insert(&self, user: &User) -> UserRepositoryResult<()>;

    /// Persists changes to an existing user.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not exist
    /// and [`UserRepositoryError::DuplicatePassport`] when the update would
    /// collide with another user's passport number.
    async fn update(&self, user: &User) -> UserRepositoryResult<()>;

    /// Finds a user by identifier.
    ///
    /// Returns `None` when the user does not exist.
    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>>;

    /// Finds a user by canonical passport number.
    ///
    /// Returns `None` when no user holds the passport number.
    async fn find_by_passport(
        &self,
        passport_number: &PassportNumber,
    ) -> UserRepositoryResult<Option<User>>;

    /// Lists users matching the filter inside the pagination window, ordered
    /// by creation time.
    async fn list(&self, filter: &UserFilter, page: Page) -> UserRepositoryResult<Vec<User>>;

    /// Deletes a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserRepositoryError::NotFound`] when the user does not exist.
    async fn delete(&self, id: UserId) -> UserRepositoryResult<()>;
}

/// Errors returned by user repository implementations.
#[derive(Debug, Clone, Error)]
pub enum UserRepositoryError {
    /// Another user already holds the passport number.
    #[error("duplicate passport number: {0}")]
    DuplicatePassport(PassportNumber),

    /// The user was not found.
    #[error("user not found: {0}")]
    NotFound(UserId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl UserRepositoryError {
    /// Wraps a persistence error.
    #[must_use]
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
