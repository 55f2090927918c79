//! Database connection management

use sqlx::{PgPool, Postgres, pool::PoolConnection};

#[derive(Debug, Clone)]
pub struct Db {
    pool: PgPool,
}

impl Db {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Check a connection out of the pool for the duration of one statement.
    ///
    /// The connection returns to the pool when dropped, on every path.
    ///
    /// # Errors
    ///
    /// Returns an error when no connection can be obtained from the pool.
    pub async fn acquire(&self) -> Result<PoolConnection<Postgres>, sqlx::Error> {
        self.pool.acquire().await
    }

    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Connect to `PostgreSQL`.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPool::connect(database_url).await
}

/// The server's error code (`SQLSTATE` for `PostgreSQL`), when the error came
/// from the database rather than the driver or pool.
#[must_use]
pub fn store_code(error: &sqlx::Error) -> Option<String> {
    error
        .as_database_error()
        .and_then(|error| error.code())
        .map(|code| code.into_owned())
}
