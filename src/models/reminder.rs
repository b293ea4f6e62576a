//! Reminder model representing a scheduled notification tied to an entity.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who can see a reminder inside the workspace.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// Visible only to the creating user
    #[default]
    Private,
    /// Visible to the whole workspace; the API requires assigned users
    Public,
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Private => write!(f, "private"),
            Visibility::Public => write!(f, "public"),
        }
    }
}

impl FromStr for Visibility {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "private" => Ok(Visibility::Private),
            "public" => Ok(Visibility::Public),
            other => Err(format!(
                "Unknown visibility '{}' (expected 'private' or 'public')",
                other
            )),
        }
    }
}

/// A reminder attached to a Folk entity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Reminder {
    /// Unique identifier (prefixed `rmd_`)
    pub id: String,

    /// Reminder title
    pub name: String,

    /// When the reminder fires (ISO 8601 timestamp)
    pub trigger_time: String,

    /// Visibility scope
    pub visibility: Visibility,

    /// The entity (e.g. a person) this reminder is attached to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_id: Option<String>,

    /// Users the reminder is assigned to (`usr_` ids)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assigned_users: Vec<String>,
}

/// Request payload for creating a new reminder.
///
/// Serializes to the camelCase wire shape the Folk API expects. The
/// `assignedUsers` list is omitted entirely when empty rather than sent as
/// `[]`, which the API rejects for public reminders.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReminderRequest {
    pub entity_id: String,
    pub name: String,
    pub trigger_time: String,
    pub visibility: Visibility,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assigned_users: Vec<String>,
}
