//! Mutation outcomes shared by the entity services.

/// Result of an update that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// A row matched and was written.
    Updated,

    /// No row matched the id. Reported as success, and not audited.
    Unchanged,
}

impl UpdateOutcome {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::Unchanged => "unchanged",
        }
    }
}
