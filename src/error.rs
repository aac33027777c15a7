// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Error types for each stage of profile aggregation.
//!
//! Each network stage has its own error enum; `AggregationError` wraps
//! whichever stage failed so callers can match on it without string
//! inspection. No stage retries or recovers locally.

/// Token exchange failure.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("token endpoint returned HTTP {0}")]
    Http(u16),

    #[error("token response body was malformed")]
    Malformed,

    #[error("token request failed: {0}")]
    Transport(String),
}

/// User search failure.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
    #[error("user search returned HTTP {0}")]
    Http(u16),

    /// The search returned zero or more than one user. The upstream API
    /// guarantees at most one exact login match, so both cases mean the
    /// login cannot be resolved.
    #[error("login did not match exactly one user")]
    NotUnique,

    #[error("user search response body was malformed")]
    Malformed,

    #[error("user search request failed: {0}")]
    Transport(String),
}

/// Profile detail fetch failure.
#[derive(Debug, thiserror::Error)]
pub enum DetailError {
    #[error("user detail returned HTTP {0}")]
    Http(u16),

    #[error("user detail response body was malformed")]
    Malformed,

    #[error("user detail request failed: {0}")]
    Transport(String),
}

/// Top-level result of a `fetch` call, tagging the stage that failed.
#[derive(Debug, thiserror::Error)]
pub enum AggregationError {
    #[error("token acquisition failed: {0}")]
    Token(#[from] TokenError),

    #[error("user lookup failed: {0}")]
    Lookup(#[from] LookupError),

    #[error("profile detail fetch failed: {0}")]
    Detail(#[from] DetailError),

    /// The user exists but every cursus membership was filtered out.
    #[error("user has no cursus with any progress")]
    NoValidCursus,
}

impl AggregationError {
    /// Whether retrying with a different login can succeed.
    ///
    /// A token failure means the configured credentials are wrong and the
    /// embedding application should stop issuing requests; an ambiguous
    /// lookup or an empty aggregate is just "try another login".
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            AggregationError::Lookup(LookupError::NotUnique) | AggregationError::NoValidCursus
        )
    }
}
