//! Configuration management for the Folk MCP Server.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which MCP uses for communication) by loading the .env
//! file through dotenvy, which stays silent.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL for the Folk API.
pub const DEFAULT_API_BASE_URL: &str = "https://api.folk.app/v1";

/// Hard cap the Folk API places on page sizes.
const MAX_PAGE_LIMIT: usize = 500;

/// Configuration for the Folk MCP Server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Folk API base URL
    pub api_base_url: String,

    /// Folk API key for authentication
    pub api_key: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,

    /// Page size used when a tool caller does not pass a limit (default: 100)
    pub default_page_limit: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Required environment variables:
    /// - `FOLK_API_KEY`: API key for authentication
    ///
    /// Optional environment variables:
    /// - `FOLK_API_BASE_URL`: Base URL for the Folk API (default: https://api.folk.app/v1)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    /// - `DEFAULT_PAGE_LIMIT`: Page size for unbounded listings (default: 100, max 500)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let api_key = env::var("FOLK_API_KEY")
            .map_err(|_| ConfigError::MissingVar("FOLK_API_KEY".to_string()))?;

        if api_key.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "FOLK_API_KEY".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let api_base_url =
            env::var("FOLK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        if !api_base_url.starts_with("http://") && !api_base_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "FOLK_API_BASE_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 10)?;
        let default_page_limit = Self::parse_env_usize("DEFAULT_PAGE_LIMIT", 100)?;

        if default_page_limit == 0 || default_page_limit > MAX_PAGE_LIMIT {
            return Err(ConfigError::InvalidValue {
                var: "DEFAULT_PAGE_LIMIT".to_string(),
                reason: format!("Must be between 1 and {}", MAX_PAGE_LIMIT),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            api_base_url,
            api_key,
            request_timeout,
            default_page_limit,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_key: String::new(),
            request_timeout: 10,
            default_page_limit: 100,
            log_level: "error".to_string(),
        }
    }
}
