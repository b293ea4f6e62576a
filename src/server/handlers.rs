//! MCP tool handlers for the Folk server.
//!
//! This module implements all the MCP tools using the rmcp SDK's tool_router pattern.

use crate::client::AsyncFolkClient;
use crate::error::FolkApiError;
use crate::models::Visibility;
use crate::tools::{CreateReminderParams, FindPeopleInGroupParams, GroupTools, PersonTools, ReminderTools};
use rmcp::handler::server::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::*;
use rmcp::{tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use schemars::JsonSchema;
use serde::Deserialize;
use std::borrow::Cow;
use std::sync::Arc;

/// The Folk MCP server that exposes tools for interacting with the Folk CRM.
#[derive(Clone)]
pub struct FolkMcpServer {
    group_tools: Arc<GroupTools>,
    person_tools: Arc<PersonTools>,
    reminder_tools: Arc<ReminderTools>,
    tool_router: ToolRouter<Self>,
}

// Implement ServerHandler using the tool_handler macro
#[tool_handler]
impl ServerHandler for FolkMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities {
                tools: Some(Default::default()),
                ..Default::default()
            },
            server_info: Implementation {
                name: "folk-mcp-server".into(),
                version: env!("CARGO_PKG_VERSION").into(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some("MCP server for the Folk CRM - lists groups and people (with fuzzy group-name resolution and custom-field filtering) and manages reminders.".into()),
        }
    }
}

// Helper structs for tool parameters
#[derive(Debug, Deserialize, JsonSchema)]
struct ListGroupsToolParams {
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct ListPeopleToolParams {
    #[serde(default)]
    limit: Option<usize>,
    #[serde(default)]
    group: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct FindPeopleInGroupToolParams {
    group_name: String,
    #[serde(default)]
    field: Option<String>,
    #[serde(default)]
    value: Option<serde_json::Value>,
    #[serde(default)]
    limit: Option<usize>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct CreateReminderToolParams {
    entity_id: String,
    name: String,
    trigger_time: String,
    #[serde(default)]
    visibility: Option<String>,
    #[serde(default)]
    assigned_users: Option<Vec<String>>,
}

#[derive(Debug, Deserialize, JsonSchema)]
struct DeleteReminderToolParams {
    reminder_id: String,
}

// Helper function to convert errors to MCP errors
fn to_mcp_error(e: impl std::fmt::Display) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.to_string()),
        data: None,
    }
}

// API errors keep their status/message/details payload in the message text
fn api_error_to_mcp(e: FolkApiError) -> McpError {
    McpError {
        code: ErrorCode::INTERNAL_ERROR,
        message: Cow::from(e.diagnostic()),
        data: None,
    }
}

// Tool router implementation
#[tool_router]
impl FolkMcpServer {
    /// Create a new Folk MCP server.
    pub fn new(client: Arc<dyn AsyncFolkClient>, default_page_limit: usize) -> Self {
        let group_tools = Arc::new(GroupTools::new(client.clone(), default_page_limit));
        let person_tools = Arc::new(PersonTools::new(client.clone(), default_page_limit));
        let reminder_tools = Arc::new(ReminderTools::new(client));

        Self {
            group_tools,
            person_tools,
            reminder_tools,
            tool_router: Self::tool_router(),
        }
    }

    /// List the groups in the Folk workspace.
    #[tool(description = "List the groups in the Folk workspace with their ids and names")]
    async fn list_groups(
        &self,
        params: Parameters<ListGroupsToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .group_tools
            .list_groups(params.limit)
            .await
            .map_err(api_error_to_mcp)?;

        let json_response = serde_json::to_string_pretty(&response).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// List people, optionally narrowed to a group by fuzzy name.
    #[tool(
        description = "List people in the Folk workspace. Optionally pass a group name (matched case-insensitively, exact then substring) to only list that group's members."
    )]
    async fn list_people(
        &self,
        params: Parameters<ListPeopleToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .person_tools
            .list_people(params.limit, params.group)
            .await
            .map_err(api_error_to_mcp)?;

        let json_response = serde_json::to_string_pretty(&response).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Find people in a group, optionally narrowed by a custom field value.
    #[tool(
        description = "Find people in a Folk group by group name (fuzzy, case-insensitive). Optionally narrow by a custom field value scoped to that group, e.g. field=\"Status\" value=\"Active\". Reports when no group matches instead of failing."
    )]
    async fn find_people_in_group(
        &self,
        params: Parameters<FindPeopleInGroupToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .person_tools
            .find_people_in_group(FindPeopleInGroupParams {
                group_name: params.group_name,
                field: params.field,
                value: params.value,
                limit: params.limit,
            })
            .await
            .map_err(api_error_to_mcp)?;

        let json_response = serde_json::to_string_pretty(&response).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Create a reminder attached to a person.
    #[tool(
        description = "Create a reminder attached to a person. trigger_time is an ISO 8601 timestamp. Visibility is 'private' (default) or 'public'; public reminders are assigned to the authenticated user unless assigned_users is given."
    )]
    async fn create_reminder(
        &self,
        params: Parameters<CreateReminderToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        tracing::info!("MCP Handler: create_reminder called");
        tracing::debug!(
            "Parameters: entity_id={}, name={}, trigger_time={}, visibility={:?}",
            params.entity_id,
            params.name,
            params.trigger_time,
            params.visibility
        );

        let visibility = match params.visibility.as_deref() {
            Some(s) => s
                .parse::<Visibility>()
                .map_err(|e| to_mcp_error(FolkApiError::InvalidRequest(e)))?,
            None => Visibility::Private,
        };

        let reminder = self
            .reminder_tools
            .create_reminder(CreateReminderParams {
                entity_id: params.entity_id,
                name: params.name,
                trigger_time: params.trigger_time,
                visibility,
                assigned_users: params.assigned_users.unwrap_or_default(),
            })
            .await
            .map_err(|e| {
                tracing::error!("Failed to create reminder: {:?}", e);
                api_error_to_mcp(e)
            })?;

        tracing::info!("Reminder created successfully: id={}", reminder.id);
        let json_response = serde_json::to_string_pretty(&reminder).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }

    /// Delete a reminder by id.
    #[tool(description = "Delete a reminder by its rmd_-prefixed id")]
    async fn delete_reminder(
        &self,
        params: Parameters<DeleteReminderToolParams>,
    ) -> Result<CallToolResult, McpError> {
        let params = params.0;

        let response = self
            .reminder_tools
            .delete_reminder(&params.reminder_id)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete reminder: {:?}", e);
                api_error_to_mcp(e)
            })?;

        let json_response = serde_json::to_string_pretty(&response).map_err(to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(json_response)]))
    }
}
