//! Audited product and user management: domain services, persistence and
//! the audit trail they write to.

pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
