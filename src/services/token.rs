// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Access token acquisition with a single-flight cache.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use crate::error::TokenError;
use crate::services::intra::IntraClient;

/// Bearer credential for upstream API calls.
///
/// Immutable once acquired; cloning is cheap enough for every request to
/// carry its own copy.
#[derive(Debug, Clone)]
pub struct AccessToken {
    token: String,
    acquired_at: DateTime<Utc>,
    expires_in: Option<i64>,
}

impl AccessToken {
    pub(crate) fn new(token: String, expires_in: Option<i64>) -> Self {
        Self {
            token,
            acquired_at: Utc::now(),
            expires_in,
        }
    }

    /// The raw bearer string for the `Authorization` header.
    pub fn bearer(&self) -> &str {
        &self.token
    }

    /// When this token was acquired.
    pub fn acquired_at(&self) -> DateTime<Utc> {
        self.acquired_at
    }

    /// Lifetime reported by the token endpoint, in seconds, if any.
    /// Informational only: the provider never re-acquires on expiry.
    pub fn expires_in(&self) -> Option<i64> {
        self.expires_in
    }
}

/// Acquires the service's bearer token once and hands out clones.
///
/// The mutex is held across the exchange, so concurrent callers racing on
/// a cold cache await the one in-flight request instead of issuing
/// duplicates. A failed exchange leaves the slot empty and a later call
/// retries; a successful token is kept for the provider's lifetime.
#[derive(Clone)]
pub struct TokenProvider {
    client: IntraClient,
    cache: Arc<Mutex<Option<AccessToken>>>,
}

impl TokenProvider {
    pub fn new(client: IntraClient) -> Self {
        Self {
            client,
            cache: Arc::new(Mutex::new(None)),
        }
    }

    /// Return the cached token, acquiring it on first use.
    pub async fn acquire(&self) -> Result<AccessToken, TokenError> {
        let mut slot = self.cache.lock().await;

        if let Some(token) = slot.as_ref() {
            return Ok(token.clone());
        }

        let token = self.client.exchange_token().await?;
        tracing::info!("access token acquired");

        *slot = Some(token.clone());
        Ok(token)
    }
}
