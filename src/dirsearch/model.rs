use serde::{Deserialize, Serialize};

/// One directory entry.
///
/// Records are loaded once and never mutated. Any field may be absent in the
/// source data; absent fields deserialize to empty strings and render as such.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub phone: String,
}

impl PersonRecord {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            phone: phone.into(),
        }
    }

    /// First and last name joined by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Position of a record inside its [`RecordStore`](crate::store::RecordStore).
///
/// Nothing in a record is guaranteed unique, so the position is the only
/// stable reference to it for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct RecordId(pub(crate) usize);

impl RecordId {
    pub fn position(self) -> usize {
        self.0
    }
}
