//! Users Repository

use async_trait::async_trait;
use jiff_sqlx::Timestamp as SqlxTimestamp;
use mockall::automock;
use sqlx::{Error, FromRow, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::{
    database::Db,
    domain::users::{
        password::PasswordHash,
        records::{UserId, UserRecord},
    },
};

const LIST_USERS_SQL: &str = include_str!("sql/list_users.sql");
const GET_USER_SQL: &str = include_str!("sql/get_user.sql");
const CREATE_USER_SQL: &str = include_str!("sql/create_user.sql");
const UPDATE_USER_SQL: &str = include_str!("sql/update_user.sql");
const UPDATE_USER_WITH_PASSWORD_SQL: &str = include_str!("sql/update_user_with_password.sql");
const DELETE_USER_SQL: &str = include_str!("sql/delete_user.sql");

/// User columns as written to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct UserColumns {
    pub name: String,
    pub email: String,
    pub password_hash: Option<PasswordHash>,
}

#[derive(Debug, Clone)]
pub(crate) struct PgUsersRepository {
    db: Db,
}

impl PgUsersRepository {
    #[must_use]
    pub(crate) fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UsersRepository for PgUsersRepository {
    async fn fetch_user(&self, user: UserId) -> Result<Option<UserRecord>, Error> {
        let mut conn = self.db.acquire().await?;

        query_as::<Postgres, UserRecord>(GET_USER_SQL)
            .bind(user.into_i64())
            .fetch_optional(&mut *conn)
            .await
    }

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, Error> {
        let mut conn = self.db.acquire().await?;

        query_as::<Postgres, UserRecord>(LIST_USERS_SQL)
            .fetch_all(&mut *conn)
            .await
    }

    async fn create_user(&self, user: UserColumns) -> Result<Option<UserId>, Error> {
        let mut conn = self.db.acquire().await?;

        let id = query_scalar::<Postgres, i64>(CREATE_USER_SQL)
            .bind(user.name)
            .bind(user.email)
            .bind(user.password_hash.map(PasswordHash::into_string))
            .fetch_optional(&mut *conn)
            .await?;

        Ok(id.map(UserId::from_i64))
    }

    async fn update_user(&self, user: UserId, update: UserColumns) -> Result<u64, Error> {
        let mut conn = self.db.acquire().await?;

        let statement = match update.password_hash {
            Some(hash) => query(UPDATE_USER_WITH_PASSWORD_SQL)
                .bind(user.into_i64())
                .bind(update.name)
                .bind(update.email)
                .bind(hash.into_string()),
            None => query(UPDATE_USER_SQL)
                .bind(user.into_i64())
                .bind(update.name)
                .bind(update.email),
        };

        let rows_affected = statement.execute(&mut *conn).await?.rows_affected();

        Ok(rows_affected)
    }

    async fn delete_user(&self, user: UserId) -> Result<u64, Error> {
        let mut conn = self.db.acquire().await?;

        let rows_affected = query(DELETE_USER_SQL)
            .bind(user.into_i64())
            .execute(&mut *conn)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for UserRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            id: UserId::from_i64(row.try_get("id")?),
            name: row.try_get("name")?,
            email: row.try_get("email")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}

/// Single-statement user persistence.
#[automock]
#[async_trait]
pub(crate) trait UsersRepository: Send + Sync {
    async fn fetch_user(&self, user: UserId) -> Result<Option<UserRecord>, Error>;

    async fn fetch_users(&self) -> Result<Vec<UserRecord>, Error>;

    /// Insert a user, returning the id the store assigned.
    async fn create_user(&self, user: UserColumns) -> Result<Option<UserId>, Error>;

    /// Overwrite name and email, and the password hash when one is given.
    /// Returns the number of rows matched.
    async fn update_user(&self, user: UserId, update: UserColumns) -> Result<u64, Error>;

    /// Delete a user, returning the number of rows removed.
    async fn delete_user(&self, user: UserId) -> Result<u64, Error>;
}
