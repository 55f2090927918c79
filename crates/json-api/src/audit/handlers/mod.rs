//! Audit Log Handlers

pub(crate) mod index;
