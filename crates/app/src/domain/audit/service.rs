//! Audit log recorder.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, error};

use crate::{
    database::Db,
    domain::audit::{
        data::NewAuditEntry,
        errors::AuditWriteError,
        records::AuditEntry,
        repository::{EncodedAuditEntry, PgAuditRepository},
        snapshot::Snapshot,
    },
};

#[derive(Debug, Clone)]
pub struct PgAuditLog {
    db: Db,
    repository: PgAuditRepository,
}

impl PgAuditLog {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgAuditRepository::new(),
        }
    }

    async fn write(&self, entry: &NewAuditEntry) -> Result<(), AuditWriteError> {
        let before = entry.before.as_ref().map(Snapshot::encode).transpose()?;
        let after = entry.after.as_ref().map(Snapshot::encode).transpose()?;

        // Own connection: the primary write has already been committed on another one.
        let mut conn = self.db.acquire().await?;

        self.repository
            .insert_entry(
                &mut conn,
                EncodedAuditEntry {
                    entry,
                    before,
                    after,
                },
            )
            .await?;

        Ok(())
    }

    /// All entries, newest first, surfacing read failures.
    ///
    /// # Errors
    ///
    /// Returns the store error when the trail cannot be read.
    pub async fn read_entries(&self) -> Result<Vec<AuditEntry>, sqlx::Error> {
        let mut conn = self.db.acquire().await?;

        self.repository.list_entries(&mut conn).await
    }
}

#[async_trait]
impl AuditLog for PgAuditLog {
    async fn record(&self, entry: NewAuditEntry) {
        match self.write(&entry).await {
            Ok(()) => debug!(
                operation = %entry.operation,
                table = %entry.table,
                record_id = ?entry.record_id,
                "recorded audit entry"
            ),
            Err(error) => error!(
                operation = %entry.operation,
                table = %entry.table,
                record_id = ?entry.record_id,
                "failed to record audit entry: {error}"
            ),
        }
    }

    async fn list_entries(&self) -> Vec<AuditEntry> {
        self.read_entries().await.unwrap_or_else(|error| {
            error!("failed to list audit entries: {error}");

            Vec::new()
        })
    }
}

/// Append-only audit trail.
///
/// Both operations are fail-soft: neither can report an error to its caller.
#[automock]
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Append one entry. A failed write is logged and discarded; nothing is retried.
    async fn record(&self, entry: NewAuditEntry);

    /// All entries, newest first. Returns an empty list when the trail cannot be read.
    async fn list_entries(&self) -> Vec<AuditEntry>;
}
