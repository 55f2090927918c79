//! Audit Records

use jiff::Timestamp;

use crate::{
    domain::audit::{
        data::AuditOperation,
        snapshot::{Snapshot, SnapshotError},
    },
    ids::TypedId,
};

/// Audit Entry Id
pub type AuditEntryId = TypedId<AuditEntry>;

/// Audit Entry Record
///
/// Affected table and snapshots are kept exactly as stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub operation: AuditOperation,
    pub table: String,
    pub record_id: Option<i64>,
    pub before: Option<String>,
    pub after: Option<String>,
    pub acting_user_id: Option<i64>,
    pub origin_address: Option<String>,
    pub created_at: Timestamp,
}

impl AuditEntry {
    /// Decode the stored before-state, if any.
    pub fn before_snapshot(&self) -> Option<Result<Snapshot, SnapshotError>> {
        self.before.as_deref().map(Snapshot::decode)
    }

    /// Decode the stored after-state, if any.
    pub fn after_snapshot(&self) -> Option<Result<Snapshot, SnapshotError>> {
        self.after.as_deref().map(Snapshot::decode)
    }
}
