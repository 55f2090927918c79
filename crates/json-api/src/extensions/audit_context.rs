//! Per-request audit context.

use salvo::Request;

use tally_app::domain::audit::data::AuditContext;

/// Build the audit context for a mutation from the incoming request.
pub(crate) trait AuditContextExt {
    fn audit_context(&self) -> AuditContext;
}

impl AuditContextExt for Request {
    fn audit_context(&self) -> AuditContext {
        let addr = self.remote_addr();

        let origin = addr
            .as_ipv4()
            .map(|v4| v4.ip().to_string())
            .or_else(|| addr.as_ipv6().map(|v6| v6.ip().to_string()));

        AuditContext::from_origin(origin)
    }
}
