// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile aggregation orchestration: login string in, `Profile` out.

use crate::config::Config;
use crate::error::AggregationError;
use crate::models::Profile;
use crate::services::aggregate;
use crate::services::intra::IntraClient;
use crate::services::token::TokenProvider;

/// High-level service that chains token acquisition, the two-stage user
/// lookup, and cursus aggregation.
///
/// `Clone` shares the underlying HTTP client and token cache, so an
/// embedding application can hand one instance to as many tasks as it
/// likes; concurrent `fetch` calls only share the token.
#[derive(Clone)]
pub struct ProfileService {
    client: IntraClient,
    tokens: TokenProvider,
}

impl ProfileService {
    /// Create a service from injected configuration.
    pub fn new(config: &Config) -> Self {
        let client = IntraClient::new(config);
        Self {
            tokens: TokenProvider::new(client.clone()),
            client,
        }
    }

    /// Fetch and aggregate the profile for a login.
    ///
    /// Strictly sequential: token, then search, then detail, then the pure
    /// aggregation pass. The first failing stage aborts the whole call with
    /// its typed error; there are no retries and no partial results. Every
    /// `.await` is an ordinary cancellation point and cancelling wastes at
    /// most one in-flight request.
    pub async fn fetch(&self, login: &str) -> Result<Profile, AggregationError> {
        let token = self.tokens.acquire().await?;

        let user = self.client.search_user(login, &token).await?;
        let detail = self.client.user_detail(user.id, &token).await?;

        let cursus = aggregate::aggregate(&detail);
        if cursus.is_empty() {
            tracing::debug!(login, "every cursus membership filtered out");
            return Err(AggregationError::NoValidCursus);
        }

        tracing::info!(login, cursus = cursus.len(), "profile aggregated");

        Ok(Profile {
            user,
            image: detail.image.versions.small,
            cursus,
        })
    }
}
