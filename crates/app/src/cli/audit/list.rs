use clap::Args;
use tally_app::{
    database::{self, Db},
    domain::audit::{
        PgAuditLog,
        records::AuditEntry,
        snapshot::{Snapshot, SnapshotError},
    },
};

#[derive(Debug, Args)]
pub(crate) struct ListAuditArgs {
    /// PostgreSQL connection string
    #[arg(long, env = "DATABASE_URL", hide_env_values = true)]
    database_url: String,

    /// Only show entries for this table, e.g. `usuarios`
    #[arg(long)]
    table: Option<String>,

    /// Show at most this many entries, newest first
    #[arg(long)]
    limit: Option<usize>,
}

pub(crate) async fn run(args: ListAuditArgs) -> Result<(), String> {
    let pool = database::connect(&args.database_url)
        .await
        .map_err(|error| format!("failed to connect to database: {error}"))?;

    let entries: Vec<AuditEntry> = PgAuditLog::new(Db::new(pool))
        .read_entries()
        .await
        .map_err(|error| format!("failed to read audit log: {error}"))?
        .into_iter()
        .filter(|entry| args.table.as_deref().is_none_or(|table| entry.table == table))
        .take(args.limit.unwrap_or(usize::MAX))
        .collect();

    if entries.is_empty() {
        println!("no audit entries found");
        return Ok(());
    }

    for entry in entries {
        println!("id: {}", entry.id);
        println!("created_at: {}", entry.created_at);
        println!("operation: {}", entry.operation);
        println!("table: {}", entry.table);
        println!("record_id: {}", display_or(entry.record_id, "none"));
        println!("acting_user_id: {}", display_or(entry.acting_user_id, "none"));
        println!(
            "origin_address: {}",
            entry.origin_address.as_deref().unwrap_or("unknown")
        );
        println!("before: {}", render_state(entry.before.as_deref(), entry.before_snapshot()));
        println!("after: {}", render_state(entry.after.as_deref(), entry.after_snapshot()));
        println!();
    }

    Ok(())
}

fn display_or<T: ToString>(value: Option<T>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |value| value.to_string())
}

/// Decoded snapshots are rendered field by field; anything else is shown raw.
fn render_state(raw: Option<&str>, decoded: Option<Result<Snapshot, SnapshotError>>) -> String {
    match (raw, decoded) {
        (_, Some(Ok(snapshot))) => snapshot.to_string(),
        (Some(raw), _) => format!("(raw) {raw}"),
        (None, _) => "none".to_string(),
    }
}
