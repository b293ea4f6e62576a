//! Group listing tools.

use crate::client::AsyncFolkClient;
use crate::error::FolkApiResult;
use crate::models::Group;
use serde::Serialize;
use std::sync::Arc;

/// A group reshaped for agent consumption.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupSummary {
    /// Group id (prefixed `grp_`)
    pub id: String,

    /// Display name
    pub name: String,
}

impl From<&Group> for GroupSummary {
    fn from(group: &Group) -> Self {
        Self {
            id: group.id.clone(),
            name: group.name.clone(),
        }
    }
}

/// Response from list_groups.
#[derive(Debug, Clone, Serialize)]
pub struct ListGroupsResponse {
    /// Number of groups returned
    pub count: usize,

    /// The groups
    pub groups: Vec<GroupSummary>,
}

/// Group tools for listing workspace groups.
pub struct GroupTools {
    client: Arc<dyn AsyncFolkClient>,
    default_limit: usize,
}

impl GroupTools {
    /// Create new group tools.
    pub fn new(client: Arc<dyn AsyncFolkClient>, default_limit: usize) -> Self {
        Self {
            client,
            default_limit,
        }
    }

    /// List groups in the workspace.
    ///
    /// # Arguments
    /// * `limit` - Maximum number of groups to return (falls back to the
    ///   configured default)
    pub async fn list_groups(&self, limit: Option<usize>) -> FolkApiResult<ListGroupsResponse> {
        let limit = limit.unwrap_or(self.default_limit);
        let groups = self.client.list_groups(limit).await?;

        Ok(ListGroupsResponse {
            count: groups.len(),
            groups: groups.iter().map(GroupSummary::from).collect(),
        })
    }
}
