// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - the aggregation pipeline.

pub mod aggregate;
pub mod intra;
pub mod profile;
pub mod token;

pub use intra::IntraClient;
pub use profile::ProfileService;
pub use token::{AccessToken, TokenProvider};
