//! Async wrapper around the synchronous FolkClient.
//!
//! This module provides an async interface to the synchronous FolkClient by
//! using `tokio::task::spawn_blocking` to run HTTP operations on a dedicated
//! thread pool, preventing blocking of the async runtime.

use crate::client::FolkClient;
use crate::error::{FolkApiError, FolkApiResult};
use crate::filter::Filter;
use crate::models::{Group, Person, Reminder, User, Visibility};
use async_trait::async_trait;
use std::sync::Arc;

/// Async trait for Folk API operations.
///
/// This trait provides async versions of all FolkClient methods and is the
/// seam mocked in tool tests.
#[async_trait]
pub trait AsyncFolkClient: Send + Sync {
    async fn list_people(&self, limit: usize, filters: Option<Filter>)
        -> FolkApiResult<Vec<Person>>;
    async fn list_groups(&self, limit: usize) -> FolkApiResult<Vec<Group>>;
    async fn get_current_user(&self) -> FolkApiResult<User>;

    async fn create_reminder(
        &self,
        entity_id: &str,
        name: &str,
        trigger_time: &str,
        visibility: Visibility,
        assigned_users: Vec<String>,
    ) -> FolkApiResult<Reminder>;
    async fn delete_reminder(&self, id: &str) -> FolkApiResult<bool>;
}

/// Async wrapper around the synchronous FolkClient.
///
/// Uses `tokio::task::spawn_blocking` to run synchronous HTTP operations on
/// a dedicated thread pool.
#[derive(Clone)]
pub struct AsyncFolkClientImpl {
    client: Arc<FolkClient>,
}

impl AsyncFolkClientImpl {
    pub fn new(client: FolkClient) -> Self {
        Self {
            client: Arc::new(client),
        }
    }
}

#[async_trait]
impl AsyncFolkClient for AsyncFolkClientImpl {
    async fn list_people(
        &self,
        limit: usize,
        filters: Option<Filter>,
    ) -> FolkApiResult<Vec<Person>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_people(limit, filters.as_ref()))
            .await
            .map_err(|e| FolkApiError::Http(format!("Task join error: {}", e)))?
    }

    async fn list_groups(&self, limit: usize) -> FolkApiResult<Vec<Group>> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.list_groups(limit))
            .await
            .map_err(|e| FolkApiError::Http(format!("Task join error: {}", e)))?
    }

    async fn get_current_user(&self) -> FolkApiResult<User> {
        let client = self.client.clone();

        tokio::task::spawn_blocking(move || client.get_current_user())
            .await
            .map_err(|e| FolkApiError::Http(format!("Task join error: {}", e)))?
    }

    async fn create_reminder(
        &self,
        entity_id: &str,
        name: &str,
        trigger_time: &str,
        visibility: Visibility,
        assigned_users: Vec<String>,
    ) -> FolkApiResult<Reminder> {
        let client = self.client.clone();
        let entity_id = entity_id.to_string();
        let name = name.to_string();
        let trigger_time = trigger_time.to_string();

        tokio::task::spawn_blocking(move || {
            client.create_reminder(&entity_id, &name, &trigger_time, visibility, assigned_users)
        })
        .await
        .map_err(|e| FolkApiError::Http(format!("Task join error: {}", e)))?
    }

    async fn delete_reminder(&self, id: &str) -> FolkApiResult<bool> {
        let client = self.client.clone();
        let id = id.to_string();

        tokio::task::spawn_blocking(move || client.delete_reminder(&id))
            .await
            .map_err(|e| FolkApiError::Http(format!("Task join error: {}", e)))?
    }
}
