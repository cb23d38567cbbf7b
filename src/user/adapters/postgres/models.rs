//! Diesel row models for user persistence.

use super::schema::users;
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for user records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct UserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Canonical passport number.
    pub passport_number: String,
    /// Surname.
    pub surname: String,
    /// Given name.
    pub name: String,
    /// Optional patronymic.
    pub patronymic: Option<String>,
    /// Address.
    pub address: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for user records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = users)]
pub struct NewUserRow {
    /// User identifier.
    pub id: uuid::Uuid,
    /// Canonical passport number.
    pub passport_number: String,
    /// Surname.
    pub surname: String,
    /// Given name.
    pub name: String,
    /// Optional patronymic.
    pub patronymic: Option<String>,
    /// Address.
    pub address: String,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Full-row changeset applied on update.
///
/// The domain merges partial updates before persistence, so every column is
/// written; `treat_none_as_null` lets an absent patronymic clear the column.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = users)]
#[diesel(treat_none_as_null = true)]
pub struct UserChangeset {
    /// Canonical passport number.
    pub passport_number: String,
    /// Surname.
    pub surname: String,
    /// Given name.
    pub name: String,
    /// Optional patronymic.
    pub patronymic: Option<String>,
    /// Address.
    pub address: String,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
