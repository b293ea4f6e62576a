//! Folk MCP Server - A Rust implementation of the Model Context Protocol server for the Folk CRM.
//!
//! This library provides an MCP server that enables AI assistants to interact
//! with a Folk workspace: listing groups and people (with fuzzy group-name
//! resolution and custom-field filtering) and managing reminders.
//!
//! # Architecture
//!
//! - **models**: Data structures for people, groups, reminders and users
//! - **domain**: Prefix-validated id value objects
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **filter**: Typed filter expressions for the Folk people query DSL
//! - **client**: HTTP client for the Folk API with an async wrapper
//! - **matching**: Fuzzy group-name resolution
//! - **metrics**: Counters for HTTP and API operations
//! - **tools**: MCP tool implementations
//! - **server**: MCP protocol server

// Re-export commonly used types
pub mod client;
pub mod config;
pub mod domain;
pub mod error;
pub mod filter;
pub mod matching;
pub mod metrics;
pub mod models;
pub mod server;
pub mod tools;

pub use client::FolkClient;
pub use config::Config;
pub use error::{ConfigError, FolkApiError};
pub use filter::Filter;
pub use matching::{resolve_group, GroupMatch, MatchTier};
pub use metrics::Metrics;
pub use models::{Group, Person, Reminder, User, Visibility};
pub use server::FolkMcpServer;
pub use tools::{
    CreateReminderParams, DeleteReminderResponse, FindPeopleInGroupParams,
    FindPeopleInGroupResponse, GroupSummary, GroupTools, ListGroupsResponse, PersonSummary,
    PersonTools, ReminderTools,
};
