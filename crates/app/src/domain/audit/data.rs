//! Audit Data

use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::domain::audit::{errors::UnknownAuditValue, snapshot::Snapshot};

/// Kind of mutation an audit entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditOperation {
    Create,
    Update,
    Delete,
}

impl AuditOperation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Create => "CREATE",
            Self::Update => "UPDATE",
            Self::Delete => "DELETE",
        }
    }
}

impl Display for AuditOperation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditOperation {
    type Err = UnknownAuditValue;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "CREATE" => Ok(Self::Create),
            "UPDATE" => Ok(Self::Update),
            "DELETE" => Ok(Self::Delete),
            other => Err(UnknownAuditValue::Operation(other.to_string())),
        }
    }
}

/// Audited table. The string form is the physical table name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AuditTable {
    Products,
    Users,
}

impl AuditTable {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Products => "produtos",
            Self::Users => "usuarios",
        }
    }
}

impl Display for AuditTable {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who asked for a mutation and from where.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditContext {
    /// Acting user id; there is no login yet so this is always empty today.
    pub acting_user: Option<i64>,

    /// Remote address of the requester.
    pub origin: Option<String>,
}

impl AuditContext {
    #[must_use]
    pub fn from_origin(origin: Option<String>) -> Self {
        Self {
            acting_user: None,
            origin,
        }
    }
}

/// New Audit Entry Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAuditEntry {
    pub operation: AuditOperation,
    pub table: AuditTable,
    pub record_id: Option<i64>,
    pub before: Option<Snapshot>,
    pub after: Option<Snapshot>,
    pub acting_user: Option<i64>,
    pub origin: Option<String>,
}

impl NewAuditEntry {
    #[must_use]
    pub fn created(context: AuditContext, table: AuditTable, id: i64, after: Snapshot) -> Self {
        Self::new(AuditOperation::Create, context, table, id, None, Some(after))
    }

    #[must_use]
    pub fn updated(
        context: AuditContext,
        table: AuditTable,
        id: i64,
        before: Option<Snapshot>,
        after: Snapshot,
    ) -> Self {
        Self::new(AuditOperation::Update, context, table, id, before, Some(after))
    }

    #[must_use]
    pub fn deleted(
        context: AuditContext,
        table: AuditTable,
        id: i64,
        before: Option<Snapshot>,
    ) -> Self {
        Self::new(AuditOperation::Delete, context, table, id, before, None)
    }

    fn new(
        operation: AuditOperation,
        context: AuditContext,
        table: AuditTable,
        id: i64,
        before: Option<Snapshot>,
        after: Option<Snapshot>,
    ) -> Self {
        Self {
            operation,
            table,
            record_id: Some(id),
            before,
            after,
            acting_user: context.acting_user,
            origin: context.origin,
        }
    }
}
