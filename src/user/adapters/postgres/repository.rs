//! `PostgreSQL` repository implementation for user storage.

use super::{
    models::{NewUserRow, UserChangeset, UserRow},
    schema::users,
};
use crate::user::{
    domain::{PassportNumber, PersistedUserData, User, UserId, UserProfile},
    ports::{Page, UserFilter, UserRepository, UserRepositoryError, UserRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by user adapters.
pub type UserPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed user repository.
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: UserPgPool,
}

impl PostgresUserRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: UserPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> UserRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> UserRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(UserRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(UserRepositoryError::persistence)?
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn insert(&self, user: &User) -> UserRepositoryResult<()> {
        let passport_number = user.passport_number().clone();
        let new_row = to_new_row(user);

        self.run_blocking(move |connection| {
            diesel::insert_into(users::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserRepositoryError::DuplicatePassport(passport_number.clone())
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, user: &User) -> UserRepositoryResult<()> {
        let id = user.id();
        let passport_number = user.passport_number().clone();
        let changeset = to_changeset(user);

        self.run_blocking(move |connection| {
            let updated = diesel::update(users::table.find(id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        UserRepositoryError::DuplicatePassport(passport_number.clone())
                    }
                    _ => UserRepositoryError::persistence(err),
                })?;

            if updated == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: UserId) -> UserRepositoryResult<Option<User>> {
        self.run_blocking(move |connection| {
            let row = users::table
                .find(id.into_inner())
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn find_by_passport(
        &self,
        passport_number: &PassportNumber,
    ) -> UserRepositoryResult<Option<User>> {
        let lookup = passport_number.as_str().to_owned();
        self.run_blocking(move |connection| {
            let row = users::table
                .filter(users::passport_number.eq(lookup))
                .select(UserRow::as_select())
                .first::<UserRow>(connection)
                .optional()
                .map_err(UserRepositoryError::persistence)?;
            row.map(row_to_user).transpose()
        })
        .await
    }

    async fn list(&self, filter: &UserFilter, page: Page) -> UserRepositoryResult<Vec<User>> {
        let filter = filter.clone();
        self.run_blocking(move |connection| {
            let mut query = users::table.into_boxed();
            if let Some(passport_number) = filter.passport_number {
                query = query.filter(users::passport_number.eq(passport_number));
            }
            if let Some(surname) = filter.surname {
                query = query.filter(users::surname.eq(surname));
            }
            if let Some(name) = filter.name {
                query = query.filter(users::name.eq(name));
            }
            if let Some(patronymic) = filter.patronymic {
                query = query.filter(users::patronymic.eq(patronymic));
            }
            if let Some(address) = filter.address {
                query = query.filter(users::address.eq(address));
            }

            let rows = query
                .order(users::created_at.asc())
                .limit(page.limit)
                .offset(page.offset)
                .select(UserRow::as_select())
                .load::<UserRow>(connection)
                .map_err(UserRepositoryError::persistence)?;
            rows.into_iter().map(row_to_user).collect()
        })
        .await
    }

    async fn delete(&self, id: UserId) -> UserRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let deleted = diesel::delete(users::table.find(id.into_inner()))
                .execute(connection)
                .map_err(UserRepositoryError::persistence)?;
            if deleted == 0 {
                return Err(UserRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_row(user: &User) -> NewUserRow {
    NewUserRow {
        id: user.id().into_inner(),
        passport_number: user.passport_number().as_str().to_owned(),
        surname: user.profile().surname().to_owned(),
        name: user.profile().name().to_owned(),
        patronymic: user.profile().patronymic().map(str::to_owned),
        address: user.profile().address().to_owned(),
        created_at: user.created_at(),
        updated_at: user.updated_at(),
    }
}

fn to_changeset(user: &User) -> UserChangeset {
    UserChangeset {
        passport_number: user.passport_number().as_str().to_owned(),
        surname: user.profile().surname().to_owned(),
        name: user.profile().name().to_owned(),
        patronymic: user.profile().patronymic().map(str::to_owned),
        address: user.profile().address().to_owned(),
        updated_at: user.updated_at(),
    }
}

fn row_to_user(row: UserRow) -> UserRepositoryResult<User> {
    let UserRow {
        id,
        passport_number: persisted_passport,
        surname,
        name,
        patronymic,
        address,
        created_at,
        updated_at,
    } = row;

    let passport_number =
        PassportNumber::new(persisted_passport).map_err(UserRepositoryError::persistence)?;
    let mut profile =
        UserProfile::new(surname, name, address).map_err(UserRepositoryError::persistence)?;
    if let Some(patronymic) = patronymic {
        profile = profile.with_patronymic(patronymic);
    }

    Ok(User::from_persisted(PersistedUserData {
        id: UserId::from_uuid(id),
        passport_number,
        profile,
        created_at,
        updated_at,
    }))
}
