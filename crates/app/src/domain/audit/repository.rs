//! Audit Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{Error, FromRow, PgConnection, Postgres, Row, postgres::PgRow, query, query_as};

use crate::domain::audit::{
    data::{AuditOperation, NewAuditEntry},
    records::{AuditEntry, AuditEntryId},
};

const INSERT_AUDIT_ENTRY_SQL: &str = include_str!("sql/insert_audit_entry.sql");
const LIST_AUDIT_ENTRIES_SQL: &str = include_str!("sql/list_audit_entries.sql");

/// Audit row with its snapshots already encoded to text.
#[derive(Debug)]
pub(crate) struct EncodedAuditEntry<'a> {
    pub entry: &'a NewAuditEntry,
    pub before: Option<String>,
    pub after: Option<String>,
}

/// Audit statements run on a caller-supplied connection.
#[derive(Debug, Clone, Default)]
pub(crate) struct PgAuditRepository;

impl PgAuditRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn insert_entry(
        &self,
        conn: &mut PgConnection,
        encoded: EncodedAuditEntry<'_>,
    ) -> Result<(), Error> {
        let entry = encoded.entry;

        query(INSERT_AUDIT_ENTRY_SQL)
            .bind(entry.operation.as_str())
            .bind(entry.table.as_str())
            .bind(entry.record_id)
            .bind(encoded.before)
            .bind(encoded.after)
            .bind(entry.acting_user)
            .bind(entry.origin.as_deref())
            .execute(&mut *conn)
            .await?;

        Ok(())
    }

    pub(crate) async fn list_entries(
        &self,
        conn: &mut PgConnection,
    ) -> Result<Vec<AuditEntry>, Error> {
        query_as::<Postgres, AuditEntry>(LIST_AUDIT_ENTRIES_SQL)
            .fetch_all(&mut *conn)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for AuditEntry {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let operation = row
            .try_get::<String, _>("operation")?
            .parse::<AuditOperation>()
            .map_err(|e| Error::ColumnDecode {
                index: "operation".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            id: AuditEntryId::from_i64(row.try_get("id")?),
            operation,
            table: row.try_get("affected_table")?,
            record_id: row.try_get("record_id")?,
            before: row.try_get("before_snapshot")?,
            after: row.try_get("after_snapshot")?,
            acting_user_id: row.try_get("acting_user_id")?,
            origin_address: row.try_get("origin_address")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
        })
    }
}
