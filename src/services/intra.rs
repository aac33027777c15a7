// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Low-level 42 intranet API client.
//!
//! Handles:
//! - Client-credentials token exchange
//! - User search by exact login
//! - Per-id user detail fetch
//!
//! Every call returns a typed stage error; nothing here retries.

use serde::Deserialize;

use crate::config::Config;
use crate::error::{DetailError, LookupError, TokenError};
use crate::models::{UserDetail, UserSummary};
use crate::services::token::AccessToken;

/// 42 intranet API client.
#[derive(Clone)]
pub struct IntraClient {
    http: reqwest::Client,
    base_url: String,
    client_id: String,
    client_secret: String,
}

/// Token exchange response body.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: Option<i64>,
}

impl IntraClient {
    /// Create a new client from injected credentials.
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
        }
    }

    /// Exchange the configured credentials for a bearer token.
    ///
    /// POST `{base}/oauth/token` with a form-encoded client-credentials
    /// grant. The caller ([`super::token::TokenProvider`]) decides when to
    /// invoke this; the client itself never caches.
    pub async fn exchange_token(&self) -> Result<AccessToken, TokenError> {
        let url = format!("{}/oauth/token", self.base_url);

        let response = self
            .http
            .post(&url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
            ])
            .send()
            .await
            .map_err(|e| TokenError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            tracing::error!(status, "token exchange failed");
            return Err(TokenError::Http(status));
        }

        let body: TokenResponse = response.json().await.map_err(|e| {
            tracing::error!(error = %e, "token response did not decode");
            TokenError::Malformed
        })?;

        Ok(AccessToken::new(body.access_token, body.expires_in))
    }

    /// Resolve a login to exactly one user.
    ///
    /// GET `{base}/v2/users?filter[login]=<login>`. The login is used
    /// verbatim (the caller trims); the query builder percent-encodes it.
    pub async fn search_user(
        &self,
        login: &str,
        token: &AccessToken,
    ) -> Result<UserSummary, LookupError> {
        let url = format!("{}/v2/users", self.base_url);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token.bearer())
            .query(&[("filter[login]", login)])
            .send()
            .await
            .map_err(|e| LookupError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(LookupError::Http(response.status().as_u16()));
        }

        let mut users: Vec<UserSummary> =
            response.json().await.map_err(|_| LookupError::Malformed)?;

        // Zero matches and ambiguous matches are the same failure: the
        // login did not resolve to one user.
        if users.len() != 1 {
            tracing::debug!(login, matches = users.len(), "login search not unique");
            return Err(LookupError::NotUnique);
        }

        Ok(users.remove(0))
    }

    /// Fetch the full nested profile for a resolved user id.
    ///
    /// GET `{base}/v2/users/<id>`.
    pub async fn user_detail(
        &self,
        user_id: u64,
        token: &AccessToken,
    ) -> Result<UserDetail, DetailError> {
        let url = format!("{}/v2/users/{}", self.base_url, user_id);

        let response = self
            .http
            .get(&url)
            .bearer_auth(token.bearer())
            .send()
            .await
            .map_err(|e| DetailError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            return Err(DetailError::Http(response.status().as_u16()));
        }

        response.json().await.map_err(|e| {
            tracing::error!(user_id, error = %e, "user detail did not decode");
            DetailError::Malformed
        })
    }
}
