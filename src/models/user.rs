//! User model representing an authenticated Folk workspace member.

use serde::{Deserialize, Serialize};

/// A workspace user. Fetched via `GET /users/me` to resolve the current
/// authenticated user, e.g. when defaulting assignees on public reminders.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct User {
    /// Unique identifier (prefixed `usr_`)
    pub id: String,

    /// Full name of the user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Email address the user signs in with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}
