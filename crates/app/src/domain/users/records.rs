//! User Records

use jiff::Timestamp;

use crate::{
    domain::audit::snapshot::{Snapshot, Snapshotable},
    ids::TypedId,
};

/// User Id
pub type UserId = TypedId<UserRecord>;

/// User Record
///
/// The password hash is write-only and never read back into a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub created_at: Timestamp,
}

impl Snapshotable for UserRecord {
    fn snapshot(&self) -> Snapshot {
        Snapshot::new()
            .text("name", &self.name)
            .text("email", &self.email)
    }
}
