//! Test context for service-level integration tests.

use std::sync::Arc;

use sqlx::query;

use crate::{
    database::Db,
    domain::{audit::PgAuditLog, products::AuditedProductsService, users::AuditedUsersService},
};

use super::db::TestDb;

pub(crate) struct TestContext {
    pub db: TestDb,
    pub audit: PgAuditLog,
    pub products: AuditedProductsService,
    pub users: AuditedUsersService,
}

impl TestContext {
    pub async fn new() -> Self {
        let test_db = TestDb::new().await;
        let db = Db::new(test_db.pool().clone());
        let audit = PgAuditLog::new(db.clone());

        Self {
            products: AuditedProductsService::new(db.clone(), Arc::new(audit.clone())),
            users: AuditedUsersService::new(db, Arc::new(audit.clone())),
            audit,
            db: test_db,
        }
    }

    /// Make every later audit insert fail while leaving existing rows readable.
    pub async fn reject_audit_writes(&self) {
        query(
            "ALTER TABLE audit_log \
             ADD CONSTRAINT audit_log_reject_writes CHECK (false) NOT VALID",
        )
        .execute(self.db.pool())
        .await
        .expect("Failed to add rejecting constraint to audit_log");
    }
}
