//! Reminder creation and deletion tools.

use crate::client::AsyncFolkClient;
use crate::domain::{PersonId, ReminderId, UserId};
use crate::error::{FolkApiError, FolkApiResult};
use crate::models::{Reminder, Visibility};
use serde::Serialize;
use std::sync::Arc;

/// Parameters for creating a reminder.
#[derive(Debug, Clone)]
pub struct CreateReminderParams {
    /// The entity (person) the reminder attaches to
    pub entity_id: String,

    /// Reminder title
    pub name: String,

    /// When the reminder fires (ISO 8601 timestamp)
    pub trigger_time: String,

    /// Visibility scope (defaults to private)
    pub visibility: Visibility,

    /// Users to assign (`usr_` ids); for public reminders the client
    /// defaults this to the authenticated user when empty
    pub assigned_users: Vec<String>,
}

/// Response from delete_reminder.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteReminderResponse {
    /// The id that was deleted
    pub reminder_id: String,

    /// Whether the API confirmed deletion
    pub deleted: bool,
}

/// Reminder tools for scheduling and removing follow-ups.
pub struct ReminderTools {
    client: Arc<dyn AsyncFolkClient>,
}

impl ReminderTools {
    /// Create new reminder tools.
    pub fn new(client: Arc<dyn AsyncFolkClient>) -> Self {
        Self { client }
    }

    /// Create a reminder attached to an entity.
    ///
    /// The entity id prefix is validated locally before the API call so a
    /// mistyped id fails fast with a clear message.
    pub async fn create_reminder(&self, params: CreateReminderParams) -> FolkApiResult<Reminder> {
        let entity_id = PersonId::new(params.entity_id.as_str())
            .map_err(|e| FolkApiError::InvalidRequest(e.to_string()))?;

        if params.name.trim().is_empty() {
            return Err(FolkApiError::InvalidRequest(
                "Reminder name cannot be empty".to_string(),
            ));
        }

        for user_id in &params.assigned_users {
            UserId::new(user_id.as_str())
                .map_err(|e| FolkApiError::InvalidRequest(e.to_string()))?;
        }

        self.client
            .create_reminder(
                entity_id.as_str(),
                &params.name,
                &params.trigger_time,
                params.visibility,
                params.assigned_users,
            )
            .await
    }

    /// Delete a reminder by id.
    pub async fn delete_reminder(&self, reminder_id: &str) -> FolkApiResult<DeleteReminderResponse> {
        let reminder_id = ReminderId::new(reminder_id)
            .map_err(|e| FolkApiError::InvalidRequest(e.to_string()))?;

        let deleted = self.client.delete_reminder(reminder_id.as_str()).await?;

        Ok(DeleteReminderResponse {
            reminder_id: reminder_id.into_inner(),
            deleted,
        })
    }
}
