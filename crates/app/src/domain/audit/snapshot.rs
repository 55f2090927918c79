//! Before/after state snapshots.
//!
//! A snapshot is an ordered list of field name/value pairs tagged with a
//! format version. Snapshots are stored as JSON text, for example:
//!
//! ```text
//! {"v":1,"fields":[["name",{"type":"text","value":"Desk"}],["price",{"type":"decimal","value":"12.5"}]]}
//! ```
//!
//! Audit rows are forensic: readers decode on a best-effort basis and show
//! the raw text when a row does not decode.

use std::fmt::{self, Display, Formatter};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Current snapshot encoding version.
pub const SNAPSHOT_FORMAT_VERSION: u8 = 1;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode snapshot: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("unsupported snapshot version {0}")]
    UnsupportedVersion(u8),
}

/// A single captured field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum SnapshotValue {
    Null,
    Text(String),
    Integer(i64),
    Decimal(Decimal),
    /// The field was written but its value is never recorded.
    Redacted,
}

impl Display for SnapshotValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Text(value) => write!(f, "{value:?}"),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Decimal(value) => write!(f, "{value}"),
            Self::Redacted => f.write_str("[redacted]"),
        }
    }
}

impl From<Option<String>> for SnapshotValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Null, Self::Text)
    }
}

/// Ordered field name/value pairs describing a record's state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "v")]
    version: u8,
    fields: Vec<(String, SnapshotValue)>,
}

impl Snapshot {
    #[must_use]
    pub fn new() -> Self {
        Self {
            version: SNAPSHOT_FORMAT_VERSION,
            fields: Vec::new(),
        }
    }

    #[must_use]
    pub fn with(mut self, field: &str, value: SnapshotValue) -> Self {
        self.fields.push((field.to_string(), value));
        self
    }

    #[must_use]
    pub fn text(self, field: &str, value: &str) -> Self {
        self.with(field, SnapshotValue::Text(value.to_string()))
    }

    #[must_use]
    pub fn integer(self, field: &str, value: impl Into<i64>) -> Self {
        self.with(field, SnapshotValue::Integer(value.into()))
    }

    #[must_use]
    pub fn decimal(self, field: &str, value: Decimal) -> Self {
        self.with(field, SnapshotValue::Decimal(value))
    }

    #[must_use]
    pub fn redacted(self, field: &str) -> Self {
        self.with(field, SnapshotValue::Redacted)
    }

    #[must_use]
    pub fn version(&self) -> u8 {
        self.version
    }

    #[must_use]
    pub fn fields(&self) -> &[(String, SnapshotValue)] {
        &self.fields
    }

    /// Look up a field by name.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&SnapshotValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    /// Encode to the stored text form.
    ///
    /// # Errors
    ///
    /// Returns an error when JSON serialisation fails.
    pub fn encode(&self) -> Result<String, SnapshotError> {
        serde_json::to_string(self).map_err(SnapshotError::Encode)
    }

    /// Decode a stored snapshot.
    ///
    /// # Errors
    ///
    /// Returns an error when the text is not a snapshot or uses an unknown version.
    pub fn decode(text: &str) -> Result<Self, SnapshotError> {
        let snapshot: Self = serde_json::from_str(text).map_err(SnapshotError::Decode)?;

        if snapshot.version != SNAPSHOT_FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(snapshot.version));
        }

        Ok(snapshot)
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl Display for Snapshot {
    /// Renders `name="Desk", price=12.5`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (index, (field, value)) in self.fields.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{field}={value}")?;
        }

        Ok(())
    }
}

/// Capture the audited fields of a value.
pub trait Snapshotable {
    fn snapshot(&self) -> Snapshot;
}
