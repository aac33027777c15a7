// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Intra-Companion: profile aggregation for the 42 intranet API.
//!
//! This crate turns a login string into an assembled [`Profile`]: it
//! acquires a client-credentials bearer token, resolves the login to a
//! user id, fetches the nested profile detail, and reshapes the cursus,
//! project, and skill data into per-cursus view-models. Rendering and
//! everything else presentation-side is the embedding application's job;
//! it consumes the `Profile` as an opaque, validated value.

pub mod config;
pub mod error;
pub mod models;
pub mod services;

pub use config::Config;
pub use error::{AggregationError, DetailError, LookupError, TokenError};
pub use models::{CursusView, Profile};
pub use services::ProfileService;
