//! Extension traits

mod audit_context;
mod depot;
mod result;

pub(crate) use audit_context::AuditContextExt as _;
pub(crate) use depot::DepotExt as _;
pub(crate) use result::ResultExt as _;
