//! HTTP client for interacting with the Folk CRM API.
//!
//! This module provides a synchronous HTTP client that can be used from async
//! contexts via `tokio::task::spawn_blocking`. The client handles bearer
//! authentication, error mapping (including the raw error payload the API
//! returns) and the `{"data": {"items": [...]}}` response envelopes.

mod async_wrapper;
pub use async_wrapper::{AsyncFolkClient, AsyncFolkClientImpl};

use crate::config::Config;
use crate::error::{FolkApiError, FolkApiResult};
use crate::filter::Filter;
use crate::metrics::Metrics;
use crate::models::{CreateReminderRequest, Group, Person, Reminder, User, Visibility};
use serde::Deserialize;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Envelope for single-resource endpoints: `{"data": {...}}`.
#[derive(Debug, Deserialize)]
pub struct DataEnvelope<T> {
    /// The wrapped resource
    pub data: T,
}

/// Envelope for list endpoints: `{"data": {"items": [...]}}`.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    /// The wrapped page
    pub data: ListItems<T>,
}

/// The items page inside a list envelope.
#[derive(Debug, Deserialize)]
pub struct ListItems<T> {
    /// The data items for this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
}

/// HTTP client for the Folk CRM API.
///
/// This client uses `ureq` for synchronous HTTP requests and can be called
/// from async contexts using `tokio::task::spawn_blocking`. It owns its
/// connection agent; dropping the client releases pooled connections.
#[derive(Clone)]
pub struct FolkClient {
    /// Base URL for the Folk API
    base_url: String,

    /// API key for authentication
    api_key: String,

    /// HTTP client agent
    agent: Arc<ureq::Agent>,

    /// Metrics collector
    metrics: Metrics,
}

impl FolkClient {
    /// Create a new FolkClient from configuration.
    pub fn new(config: &Config) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.request_timeout))
            .build();

        Self {
            base_url: config.api_base_url.clone(),
            api_key: config.api_key.clone(),
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Create a FolkClient with a custom base URL (useful for testing).
    #[doc(hidden)]
    pub fn with_base_url(base_url: String, api_key: String) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(10))
            .build();

        Self {
            base_url,
            api_key,
            agent: Arc::new(agent),
            metrics: Metrics::new(),
        }
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Build a full URL from a path.
    fn build_url(&self, path: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Execute a GET request with authentication.
    fn get(&self, path: &str) -> Result<ureq::Response, FolkApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("GET {}", url);

        let result = self
            .agent
            .get(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .call()
            .map_err(map_error);

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    /// Execute a POST request with authentication and JSON body.
    fn post(&self, path: &str, body: &serde_json::Value) -> Result<ureq::Response, FolkApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("POST {}", url);
        tracing::debug!(
            "Request body: {}",
            serde_json::to_string_pretty(body).unwrap_or_else(|_| "<invalid json>".to_string())
        );

        let result = self
            .agent
            .post(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(map_error);

        let duration = start.elapsed();
        match &result {
            Ok(response) => {
                tracing::debug!("POST {} - Success (status: {})", url, response.status());
                self.metrics.record_http_request(duration);
            }
            Err(e) => {
                tracing::error!("POST {} - Error: {:?}", url, e);
                self.metrics.record_http_error();
                self.metrics.record_http_request(duration);
            }
        }

        result
    }

    /// Execute a DELETE request with authentication.
    fn delete(&self, path: &str) -> Result<ureq::Response, FolkApiError> {
        let start = Instant::now();
        let url = self.build_url(path);

        tracing::debug!("DELETE {}", url);

        let result = self
            .agent
            .delete(&url)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .call()
            .map_err(map_error);

        let duration = start.elapsed();
        if result.is_err() {
            self.metrics.record_http_error();
        }
        self.metrics.record_http_request(duration);

        result
    }

    // ========================= People Operations =========================

    /// List people, optionally narrowed by a filter expression.
    ///
    /// The filter serializes to the Folk query DSL's wire JSON and is passed
    /// through unmodified as a URL-encoded `filter` query parameter. Returns
    /// a possibly-empty vec, never an absent value.
    pub fn list_people(&self, limit: usize, filters: Option<&Filter>) -> FolkApiResult<Vec<Person>> {
        let mut path = format!("/people?limit={}", limit);
        if let Some(filter) = filters {
            path.push_str("&filter=");
            path.push_str(&urlencoding::encode(&filter.to_query_value()));
        }

        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| FolkApiError::Http(e.to_string()))?;

        let envelope: ListEnvelope<Person> =
            serde_json::from_str(&body).map_err(FolkApiError::Json)?;

        let people = envelope.data.items;
        self.metrics.record_people_fetched(people.len());
        Ok(people)
    }

    // ========================= Group Operations =========================

    /// List groups in the workspace.
    pub fn list_groups(&self, limit: usize) -> FolkApiResult<Vec<Group>> {
        let path = format!("/groups?limit={}", limit);
        let response = self.get(&path)?;
        let body = response
            .into_string()
            .map_err(|e| FolkApiError::Http(e.to_string()))?;

        let envelope: ListEnvelope<Group> =
            serde_json::from_str(&body).map_err(FolkApiError::Json)?;

        let groups = envelope.data.items;
        self.metrics.record_groups_fetched(groups.len());
        Ok(groups)
    }

    // ========================= User Operations =========================

    /// Get the authenticated user.
    pub fn get_current_user(&self) -> FolkApiResult<User> {
        let response = self.get("/users/me")?;
        let body = response
            .into_string()
            .map_err(|e| FolkApiError::Http(e.to_string()))?;

        let envelope: DataEnvelope<User> =
            serde_json::from_str(&body).map_err(FolkApiError::Json)?;
        Ok(envelope.data)
    }

    // ========================= Reminder Operations =========================

    /// Create a reminder attached to an entity.
    ///
    /// The API requires assigned users on public reminders; when none are
    /// supplied for a public reminder, the authenticated user is resolved via
    /// `get_current_user` and assigned.
    pub fn create_reminder(
        &self,
        entity_id: &str,
        name: &str,
        trigger_time: &str,
        visibility: Visibility,
        assigned_users: Vec<String>,
    ) -> FolkApiResult<Reminder> {
        tracing::info!(
            "Creating {} reminder for entity: {}, trigger: {}",
            visibility,
            entity_id,
            trigger_time
        );

        let assigned_users = if visibility == Visibility::Public && assigned_users.is_empty() {
            let me = self.get_current_user()?;
            vec![me.id]
        } else {
            assigned_users
        };

        let request = CreateReminderRequest {
            entity_id: entity_id.to_string(),
            name: name.to_string(),
            trigger_time: trigger_time.to_string(),
            visibility,
            assigned_users,
        };
        let body = serde_json::to_value(&request).map_err(FolkApiError::Json)?;

        let response = self.post("/reminders", &body)?;
        let response_body = response
            .into_string()
            .map_err(|e| FolkApiError::Http(e.to_string()))?;

        let envelope: DataEnvelope<Reminder> =
            serde_json::from_str(&response_body).map_err(FolkApiError::Json)?;

        let created = envelope.data;
        tracing::info!("Reminder created successfully with id: {}", created.id);
        self.metrics.record_reminder_created();
        Ok(created)
    }

    /// Delete a reminder by id. Returns whether the API confirmed deletion.
    pub fn delete_reminder(&self, reminder_id: &str) -> FolkApiResult<bool> {
        let path = format!("/reminders/{}", reminder_id);
        let response = self.delete(&path)?;
        Ok((200..300).contains(&response.status()))
    }
}

/// Map a ureq error to a FolkApiError, preserving the raw error payload.
fn map_error(error: ureq::Error) -> FolkApiError {
    match error {
        ureq::Error::Status(code, response) => {
            let body = response
                .into_string()
                .unwrap_or_else(|_| "Unknown error".to_string());
            error_from_status(code, &body)
        }
        ureq::Error::Transport(transport) => {
            if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                FolkApiError::Http("Connection failed".to_string())
            } else if transport.kind() == ureq::ErrorKind::Io {
                FolkApiError::Timeout
            } else {
                FolkApiError::Http(transport.to_string())
            }
        }
    }
}

/// Build the error variant for a non-success status and raw body.
///
/// The Folk API returns a JSON error document; its `message` field becomes
/// the error message and the whole document is retained as `details`.
fn error_from_status(status: u16, body: &str) -> FolkApiError {
    let details: serde_json::Value = serde_json::from_str(body).unwrap_or(serde_json::Value::Null);

    let message = details
        .get("message")
        .and_then(|v| v.as_str())
        .or_else(|| {
            details
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|v| v.as_str())
        })
        .unwrap_or(body)
        .to_string();

    match status {
        401 => FolkApiError::Unauthorized,
        404 => FolkApiError::NotFound(message),
        429 => FolkApiError::RateLimited,
        _ => FolkApiError::Api {
            status,
            message,
            details,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url() {
        let client = FolkClient::with_base_url(
            "https://api.folk.app/v1".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(
            client.build_url("/people"),
            "https://api.folk.app/v1/people"
        );

        assert_eq!(client.build_url("people"), "https://api.folk.app/v1/people");

        let client_with_slash = FolkClient::with_base_url(
            "https://api.folk.app/v1/".to_string(),
            "test-key".to_string(),
        );

        assert_eq!(
            client_with_slash.build_url("/people"),
            "https://api.folk.app/v1/people"
        );
    }

    #[test]
    fn test_client_creation() {
        let config = Config {
            api_base_url: "https://api.folk.app/v1".to_string(),
            api_key: "test-key-123".to_string(),
            request_timeout: 10,
            default_page_limit: 100,
            log_level: "error".to_string(),
        };

        let client = FolkClient::new(&config);
        assert_eq!(client.base_url, "https://api.folk.app/v1");
        assert_eq!(client.api_key, "test-key-123");
    }

    #[test]
    fn test_error_from_status_parses_message_and_details() {
        let err = error_from_status(422, r#"{"message": "triggerTime must be in the future"}"#);
        match err {
            FolkApiError::Api {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 422);
                assert_eq!(message, "triggerTime must be in the future");
                assert_eq!(details["message"], "triggerTime must be in the future");
            }
            other => panic!("Expected Api error, got: {:?}", other),
        }
    }

    #[test]
    fn test_error_from_status_nested_message() {
        let err = error_from_status(400, r#"{"error": {"message": "bad filter"}}"#);
        match err {
            FolkApiError::Api { message, .. } => assert_eq!(message, "bad filter"),
            other => panic!("Expected Api error, got: {:?}", other),
        }
    }

    #[test]
    fn test_error_from_status_non_json_body() {
        let err = error_from_status(500, "Internal server error");
        match err {
            FolkApiError::Api {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 500);
                assert_eq!(message, "Internal server error");
                assert_eq!(details, serde_json::Value::Null);
            }
            other => panic!("Expected Api error, got: {:?}", other),
        }
    }

    #[test]
    fn test_error_from_status_dedicated_variants() {
        assert!(matches!(
            error_from_status(401, "nope"),
            FolkApiError::Unauthorized
        ));
        assert!(matches!(
            error_from_status(404, "{\"message\": \"no such reminder\"}"),
            FolkApiError::NotFound(msg) if msg == "no such reminder"
        ));
        assert!(matches!(
            error_from_status(429, "slow down"),
            FolkApiError::RateLimited
        ));
    }
}
