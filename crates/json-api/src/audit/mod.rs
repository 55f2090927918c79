//! Audit Log

mod handlers;

pub(crate) use handlers::*;
