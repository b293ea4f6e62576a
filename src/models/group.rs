//! Group model representing a named collection of people in the Folk CRM.

use serde::{Deserialize, Serialize};

/// A group in the Folk CRM. An immutable snapshot of remote state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Group {
    /// Unique identifier (prefixed `grp_`)
    pub id: String,

    /// Display name of the group
    pub name: String,
}

impl Group {
    /// Create a new group snapshot.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
