//! User aggregate root and profile value types.

use super::{PassportNumber, UserDomainError, UserId};
use chrono::{DateTime, Utc};
use mockable::Clock;

/// Validated profile fields carried by a user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    surname: String,
    name: String,
    patronymic: Option<String>,
    address: String,
}

impl UserProfile {
    /// Creates a validated profile.
    ///
    /// # Errors
    ///
    /// Returns [`UserDomainError::EmptyProfileField`] when surname, name, or
    /// address is blank after trimming.
    pub fn new(
        surname: impl Into<String>,
        name: impl Into<String>,
        address: impl Into<String>,
    ) -> Result<Self, UserDomainError> {
        Ok(Self {
            surname: required_field("surname", surname.into())?,
            name: required_field("name", name.into())?,
            patronymic: None,
            address: required_field("address", address.into())?,
        })
    }

    /// Sets the optional patronymic.
    #[must_use]
    pub fn with_patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.patronymic = Some(patronymic.into());
        self
    }

    /// Returns the surname.
    #[must_use]
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns the given name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the patronymic, if any.
    #[must_use]
    pub fn patronymic(&self) -> Option<&str> {
        self.patronymic.as_deref()
    }

    /// Returns the address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }
}

/// Partial update applied to an existing user record.
///
/// Only populated fields overwrite the stored values; everything else is
/// left untouched. An update with no populated fields is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    passport_number: Option<PassportNumber>,
    surname: Option<String>,
    name: Option<String>,
    patronymic: Option<String>,
    address: Option<String>,
}

impl UserUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a replacement passport number.
    #[must_use]
    pub fn with_passport_number(mut self, passport_number: PassportNumber) -> Self {
        self.passport_number = Some(passport_number);
        self
    }

    /// Sets a replacement surname.
    #[must_use]
    pub fn with_surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = Some(surname.into());
        self
    }

    /// Sets a replacement given name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets a replacement patronymic.
    #[must_use]
    pub fn with_patronymic(mut self, patronymic: impl Into<String>) -> Self {
        self.patronymic = Some(patronymic.into());
        self
    }

    /// Sets a replacement address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

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

/// User aggregate root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    passport_number: PassportNumber,
    profile: UserProfile,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted user record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedUserData {
    /// Persisted user identifier.
    pub id: UserId,
    /// Persisted passport number.
    pub passport_number: PassportNumber,
    /// Persisted profile fields.
    pub profile: UserProfile,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Registers a new user with a fresh identifier and clock timestamps.
    #[must_use]
    pub fn register(
        passport_number: PassportNumber,
        profile: UserProfile,
        clock: &dyn Clock,
    ) -> Self {
        let timestamp = clock.utc();
        Self {
            id: UserId::new(),
            passport_number,
            profile,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs a user from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedUserData) -> Self {
        Self {
            id: data.id,
            passport_number: data.passport_number,
            profile: data.profile,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the passport number.
    #[must_use]
    pub const fn passport_number(&self) -> &PassportNumber {
        &self.passport_number
    }

    /// Returns the profile fields.
    #[must_use]
    pub const fn profile(&self) -> &UserProfile {
        &self.profile
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Merges populated update fields into this record and refreshes the
    /// update timestamp.
    pub fn apply_update(&mut self, update: UserUpdate, clock: &dyn Clock) {
        let UserUpdate {
            passport_number,
            surname,
            name,
            patronymic,
            address,
        } = update;

        if let Some(passport_number) = passport_number {
            self.passport_number = passport_number;
        }
        if let Some(surname) = surname {
            self.profile.surname = surname;
        }
        if let Some(name) = name {
            self.profile.name = name;
        }
        if let Some(patronymic) = patronymic {
            self.profile.patronymic = Some(patronymic);
        }
        if let Some(address) = address {
            self.profile.address = address;
        }
        self.updated_at = clock.utc();
    }
}

fn required_field(field: &'static str, value: String) -> Result<String, UserDomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(UserDomainError::EmptyProfileField(field));
    }
    Ok(trimmed.to_owned())
}
