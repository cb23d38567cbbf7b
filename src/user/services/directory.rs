//! Service layer for passport-keyed user registration and lookup.

use crate::user::{
    domain::{PassportNumber, User, UserDomainError, UserId, UserProfile, UserUpdate},
    ports::{Page, UserFilter, UserRepository, UserRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Request payload for registering a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateUserRequest {
    passport_number: String,
    surname: String,
    name: String,
    patronymic: Option<String>,
    address: String,
}

impl CreateUserRequest {
    /// Creates a request with required fields.
    #[must_use]
    pub fn new(
        passport_number: impl Into<String>,
        surname: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            passport_number: passport_number.into(),
            surname: surname.into(),
            name: name.into(),
            patronymic: None,
            address: address.into(),
        }
    }

    /// Sets the optional patronymic.
    #[must_use]
    pub fn with_patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.patronymic = Some(patronymic.into());
        self
    }
}

/// Request payload for partially updating a user.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserRequest {
    /// Replacement passport number, if any.
    pub passport_number: Option<String>,
    /// Replacement surname, if any.
    pub surname: Option<String>,
    /// Replacement given name, if any.
    pub name: Option<String>,
    /// Replacement patronymic, if any.
    pub patronymic: Option<String>,
    /// Replacement address, if any.
    pub address: Option<String>,
}

impl UpdateUserRequest {
    /// Returns `true` when no field is populated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.passport_number.is_none()
            && self.surname.is_none()
            && self.name.is_none()
            && self.patronymic.is_none()
            && self.address.is_none()
    }
}

/// Closed error taxonomy for user directory operations.
#[derive(Debug, Error)]
pub enum UserServiceError {
    /// No user exists for the identifier.
    #[error("no user found: {0}")]
    NotFound(UserId),

    /// No user holds the passport number.
    #[error("no user found for passport number: {0}")]
    PassportNotFound(PassportNumber),

    /// Another user already holds the passport number.
    #[error("user with passport number {0} already exists")]
    PassportTaken(PassportNumber),

    /// Input validation failed.
    #[error(transparent)]
    Validation(#[from] UserDomainError),

    /// Unclassified persistence failure.
    #[error(transparent)]
    Repository(UserRepositoryError),
}

/// Result type for user directory service operations.
pub type UserServiceResult<T> = Result<T, UserServiceError>;

/// User directory orchestration service.
#[derive(Clone)]
pub struct UserDirectoryService {
    repository: Arc<dyn UserRepository>,
    clock: Arc<dyn Clock + Send + Sync>,
}

impl UserDirectoryService {
    /// Creates a new user directory service.
    #[must_use]
    pub fn new(repository: Arc<dyn UserRepository>, clock: Arc<dyn Clock + Send + Sync>) -> Self {
        Self { repository, clock }
    }

    /// Registers a new user.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Validation`] for malformed input and
    /// [`UserServiceError::PassportTaken`] when the passport number is
    /// already registered.
    pub async fn create_user(&self, request: CreateUserRequest) -> UserServiceResult<User> {
        let passport_number = PassportNumber::new(request.passport_number)?;
        let mut profile = UserProfile::new(request.surname, request.name, request.address)?;
        if let Some(patronymic) = request.patronymic {
            profile = profile.with_patronymic(patronymic);
        }

        let user = User::register(passport_number, profile, &*self.clock);
        self.repository
            .insert(&user)
            .await
            .map_err(classify_repository_error)?;
        Ok(user)
    }

    /// Lists users matching the filter inside the pagination window.
    ///
    /// An empty result is not an error; callers receive an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::Repository`] when the lookup fails.
    pub async fn users(&self, filter: &UserFilter, page: Page) -> UserServiceResult<Vec<User>> {
        self.repository
            .list(filter, page)
            .await
            .map_err(classify_repository_error)
    }

    /// Retrieves a user by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::NotFound`] when the user does not exist.
    pub async fn user_by_id(&self, id: UserId) -> UserServiceResult<User> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(classify_repository_error)?
            .ok_or(UserServiceError::NotFound(id))
    }

    /// Retrieves a user by canonical passport number.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::PassportNotFound`] when no user holds the
    /// passport number.
    pub async fn user_by_passport(
        &self,
        passport_number: &PassportNumber,
    ) -> UserServiceResult<User> {
        self.repository
            .find_by_passport(passport_number)
            .await
            .map_err(classify_repository_error)?
            .ok_or_else(|| UserServiceError::PassportNotFound(passport_number.clone()))
    }

    /// Applies a partial update to a user.
    ///
    /// An empty update returns the stored record untouched.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::NotFound`] when the user does not exist,
    /// [`UserServiceError::Validation`] for a malformed replacement passport
    /// number, and [`UserServiceError::PassportTaken`] when the replacement
    /// passport number collides with another user.
    pub async fn update_user(
        &self,
        id: UserId,
        request: UpdateUserRequest,
    ) -> UserServiceResult<User> {
        let mut user = self.user_by_id(id).await?;
        if request.is_empty() {
            return Ok(user);
        }

        let update = build_update(request)?;
        user.apply_update(update, &*self.clock);
        self.repository
            .update(&user)
            .await
            .map_err(classify_repository_error)?;
        Ok(user)
    }

    /// Deletes a user after confirming it exists.
    ///
    /// # Errors
    ///
    /// Returns [`UserServiceError::NotFound`] when the user does not exist.
    pub async fn delete_user(&self, id: UserId) -> UserServiceResult<()> {
        self.user_by_id(id).await?;
        self.repository
            .delete(id)
            .await
            .map_err(classify_repository_error)
    }
}

fn build_update(request: UpdateUserRequest) -> Result<UserUpdate, UserDomainError> {
    let UpdateUserRequest {
        passport_number,
        surname,
        name,
        patronymic,
        address,
    } = request;

    let mut update = UserUpdate::new();
    if let Some(passport_number) = passport_number {
        update = update.with_passport_number(PassportNumber::new(passport_number)?);
    }
    if let Some(surname) = surname {
        update = update.with_surname(surname);
    }
    if let Some(name) = name {
        update = update.with_name(name);
    }
    if let Some(patronymic) = patronymic {
        update = update.with_patronymic(patronymic);
    }
    if let Some(address) = address {
        update = update.with_address(address);
    }
    Ok(update)
}

fn classify_repository_error(err: UserRepositoryError) -> UserServiceError {
    match err {
        UserRepositoryError::DuplicatePassport(passport_number) => {
            UserServiceError::PassportTaken(passport_number)
        }
        UserRepositoryError::NotFound(id) => UserServiceError::NotFound(id),
        other @ UserRepositoryError::Persistence(_) => UserServiceError::Repository(other),
    }
}
