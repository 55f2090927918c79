//! App Context

use std::sync::Arc;

use thiserror::Error;

use crate::{
    database::{self, Db},
    domain::{
        audit::{AuditLog, PgAuditLog},
        products::{AuditedProductsService, ProductsService},
        users::{AuditedUsersService, UsersService},
    },
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to connect to database")]
    Database(#[source] sqlx::Error),
}

#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub users: Arc<dyn UsersService>,
    pub audit: Arc<dyn AuditLog>,
}

impl AppContext {
    /// Build application context from a database URL.
    ///
    /// # Errors
    ///
    /// Returns an error when establishing a database connection fails.
    pub async fn from_database_url(url: &str) -> Result<Self, AppInitError> {
        let pool = database::connect(url)
            .await
            .map_err(AppInitError::Database)?;

        Ok(Self::from_db(Db::new(pool)))
    }

    /// Wire every service to one pool. The audit recorder shares the pool but
    /// always checks out its own connection.
    #[must_use]
    pub fn from_db(db: Db) -> Self {
        let audit: Arc<dyn AuditLog> = Arc::new(PgAuditLog::new(db.clone()));

        Self {
            products: Arc::new(AuditedProductsService::new(db.clone(), Arc::clone(&audit))),
            users: Arc::new(AuditedUsersService::new(db, Arc::clone(&audit))),
            audit,
        }
    }
}
