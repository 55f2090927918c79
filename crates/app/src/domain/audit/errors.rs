//! Audit errors.

use thiserror::Error;

use crate::domain::audit::snapshot::SnapshotError;

/// Failure to persist an audit entry. Never leaves the recorder.
#[derive(Debug, Error)]
pub(crate) enum AuditWriteError {
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    #[error("storage error: {0}")]
    Sql(#[from] sqlx::Error),
}

/// A stored audit column held a value this build does not recognise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnknownAuditValue {
    #[error("unknown audit operation {0:?}")]
    Operation(String),
}
