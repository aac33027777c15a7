// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Raw payload types returned by the 42 intranet API.
//!
//! Field names match the upstream JSON exactly. Deserialization is strict
//! for the fields aggregation depends on (id, login, level, cursus id);
//! a body missing any of them is reported as malformed, not as empty.

use serde::{Deserialize, Serialize};

/// One entry of the `/v2/users?filter[login]=…` search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSummary {
    /// Upstream user ID, the key for the detail lookup
    pub id: u64,
    /// Unique login handle
    pub login: String,
    /// Full display name
    pub displayname: String,
    /// Evaluation points balance
    pub correction_point: i32,
    /// Piscine month (e.g. "july")
    pub pool_month: String,
    /// Piscine year
    pub pool_year: i32,
    /// Wallet balance
    pub wallet: i32,
}

/// Full `/v2/users/<id>` detail response.
#[derive(Debug, Clone, Deserialize)]
pub struct UserDetail {
    pub image: UserImage,
    /// Cursus memberships, in upstream order
    pub cursus_users: Vec<CursusMembership>,
    /// Project attempts, in upstream order
    pub projects_users: Vec<ProjectMembership>,
}

/// Profile picture variants.
#[derive(Debug, Clone, Deserialize)]
pub struct UserImage {
    pub link: Option<String>,
    pub versions: ImageVersions,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageVersions {
    pub small: String,
}

/// One cursus the user is enrolled in.
#[derive(Debug, Clone, Deserialize)]
pub struct CursusMembership {
    /// Progress score as a decimal string; `"0.0"` marks an unstarted
    /// placeholder enrollment
    pub level: String,
    /// Rank title, absent for some cursus
    pub grade: Option<String>,
    pub cursus_id: u64,
    pub cursus: CursusName,
    #[serde(default)]
    pub skills: Vec<Skill>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CursusName {
    pub name: String,
}

/// One project attempt, possibly shared between several cursus.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMembership {
    /// Final grade, absent while the project is in progress
    pub final_mark: Option<i32>,
    pub status: String,
    pub validated: bool,
    pub project: ProjectName,
    /// IDs of every cursus this attempt counts toward
    pub cursus_ids: Vec<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectName {
    pub name: String,
}

/// A named proficiency within a cursus.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub level: f64,
}
