// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Service configuration: OAuth client credentials and upstream base URL.
//!
//! The embedding application injects credentials explicitly via
//! [`Config::new`]; [`Config::from_env`] is a convenience for processes
//! that carry them in environment variables.

use std::env;

/// Default base URL of the 42 intranet API.
pub const DEFAULT_BASE_URL: &str = "https://api.intra.42.fr";

/// Service configuration, built once and handed to the service.
#[derive(Debug, Clone)]
pub struct Config {
    /// OAuth client ID (public)
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// API base URL, without a trailing slash
    pub base_url: String,
}

impl Config {
    /// Build a configuration from explicit credentials.
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Override the API base URL (tests point this at a local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            client_id: env::var("INTRA_CLIENT_ID")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("INTRA_CLIENT_ID"))?,
            client_secret: env::var("INTRA_CLIENT_SECRET")
                .map(|v| v.trim().to_string())
                .map_err(|_| ConfigError::Missing("INTRA_CLIENT_SECRET"))?,
            base_url: env::var("INTRA_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        })
    }
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            client_id: "test_client_id".to_string(),
            client_secret: "test_secret".to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),
}
