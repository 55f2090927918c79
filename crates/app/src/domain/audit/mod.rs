//! Audit Trail
//!
//! Every successful product or user mutation appends one entry describing
//! the change. Recording is best effort: the mutation has already committed
//! by the time the entry is written, and a failed write is only visible in
//! the operational logs.

pub mod data;
mod errors;
pub mod records;
mod repository;
pub mod service;
pub mod snapshot;

pub use errors::UnknownAuditValue;
pub use service::*;
