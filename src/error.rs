//! Error types for the Folk MCP Server.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors that can occur when interacting with the Folk API.
#[derive(Error, Debug)]
pub enum FolkApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// API returned an error status code, carrying the raw error payload
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        details: serde_json::Value,
    },

    /// Failed to parse JSON response
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Authentication failed
    #[error("Authentication failed")]
    Unauthorized,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid request
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl FolkApiError {
    /// Render status, message and raw details in one line for diagnostics.
    pub fn diagnostic(&self) -> String {
        match self {
            FolkApiError::Api {
                status,
                message,
                details,
            } => format!("{} - {} - {}", status, message, details),
            other => other.to_string(),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Generic configuration error
    #[error("Configuration error: {0}")]
    Other(String),
}

/// Convenience type alias for Results with FolkApiError
pub type FolkApiResult<T> = Result<T, FolkApiError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
