//! Audit Log Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use tally_app::domain::audit::{
    records::AuditEntry,
    snapshot::{Snapshot, SnapshotError},
};

use crate::{extensions::*, state::State};

/// One recorded mutation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct AuditEntryResponse {
    pub id: i64,

    /// `CREATE`, `UPDATE` or `DELETE`
    pub operation: String,

    /// Affected table, as stored
    pub table: String,

    pub record_id: Option<i64>,

    /// Stored before-state, verbatim
    pub before: Option<String>,

    /// Stored after-state, verbatim
    pub after: Option<String>,

    /// Before-state as `field=value` pairs, when it decodes
    pub before_rendered: Option<String>,

    /// After-state as `field=value` pairs, when it decodes
    pub after_rendered: Option<String>,

    pub acting_user_id: Option<i64>,

    pub origin_address: Option<String>,

    pub created_at: String,
}

fn render(snapshot: Option<Result<Snapshot, SnapshotError>>) -> Option<String> {
    snapshot.and_then(Result::ok).as_ref().map(ToString::to_string)
}

impl From<AuditEntry> for AuditEntryResponse {
    fn from(entry: AuditEntry) -> Self {
        let before_rendered = render(entry.before_snapshot());
        let after_rendered = render(entry.after_snapshot());

        AuditEntryResponse {
            id: entry.id.into_i64(),
            operation: entry.operation.to_string(),
            table: entry.table,
            record_id: entry.record_id,
            before: entry.before,
            after: entry.after,
            before_rendered,
            after_rendered,
            acting_user_id: entry.acting_user_id,
            origin_address: entry.origin_address,
            created_at: entry.created_at.to_string(),
        }
    }
}

/// Audit Log Index Handler
///
/// Returns every audit entry, newest first. An unreadable trail is an empty list.
#[endpoint(tags("audit"), summary = "List Audit Entries")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<Vec<AuditEntryResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let entries = state.app.audit.list_entries().await;

    Ok(Json(entries.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use tally_app::domain::audit::{MockAuditLog, data::AuditOperation, records::AuditEntryId};

    use crate::test_helpers::audit_service;

    use super::*;

    fn make_service(audit: MockAuditLog) -> Service {
        audit_service(audit, Router::with_path("audit-log").get(handler))
    }

    fn price_update() -> Result<AuditEntry, SnapshotError> {
        let before = Snapshot::new().text("name", "Desk").decimal("price", 10.into());
        let after = Snapshot::new()
            .text("name", "Desk")
            .decimal("price", rust_decimal::Decimal::new(125, 1));

        Ok(AuditEntry {
            id: AuditEntryId::from_i64(2),
            operation: AuditOperation::Update,
            table: "produtos".to_string(),
            record_id: Some(3),
            before: Some(before.encode()?),
            after: Some(after.encode()?),
            acting_user_id: None,
            origin_address: Some("127.0.0.1".to_string()),
            created_at: Timestamp::UNIX_EPOCH,
        })
    }

    #[tokio::test]
    async fn test_index_renders_entries() -> TestResult {
        let entry = price_update()?;
        let raw_before = entry.before.clone();

        let mut audit = MockAuditLog::new();

        audit
            .expect_list_entries()
            .once()
            .return_once(move || vec![entry]);

        let mut res = TestClient::get("http://example.com/audit-log")
            .send(&make_service(audit))
            .await;

        let body: Vec<AuditEntryResponse> = res.take_json().await?;
        let first = body.first();

        assert_eq!(res.status_code, Some(StatusCode::OK), "expected 200");
        assert_eq!(first.map(|e| e.operation.as_str()), Some("UPDATE"), "operation");
        assert_eq!(first.and_then(|e| e.before.clone()), raw_before, "raw state kept");
        assert_eq!(
            first.and_then(|e| e.after_rendered.as_deref()),
            Some(r#"name="Desk", price=12.5"#),
            "after-state rendered"
        );

        Ok(())
    }

    #[tokio::test]
    async fn test_undecodable_state_is_returned_raw_only() -> TestResult {
        let entry = AuditEntry {
            before: Some("{'nome': 'Desk'}".to_string()),
            ..price_update()?
        };

        let mut audit = MockAuditLog::new();

        audit
            .expect_list_entries()
            .once()
            .return_once(move || vec![entry]);

        let mut res = TestClient::get("http://example.com/audit-log")
            .send(&make_service(audit))
            .await;

        let body: Vec<AuditEntryResponse> = res.take_json().await?;
        let first = body.first();

        assert_eq!(
            first.and_then(|e| e.before.as_deref()),
            Some("{'nome': 'Desk'}"),
            "raw text returned"
        );
        assert_eq!(first.and_then(|e| e.before_rendered.clone()), None, "not rendered");

        Ok(())
    }

    #[tokio::test]
    async fn test_unreadable_trail_is_an_empty_list() -> TestResult {
        let mut audit = MockAuditLog::new();

        audit.expect_list_entries().once().return_once(Vec::new);

        let mut res = TestClient::get("http://example.com/audit-log")
            .send(&make_service(audit))
            .await;

        let body: Vec<AuditEntryResponse> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK), "expected 200");
        assert!(body.is_empty(), "no entries");

        Ok(())
    }
}
