// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Aggregated profile handed to the presentation layer.

use serde::{Deserialize, Serialize};

use crate::models::user::{ProjectMembership, Skill, UserSummary};

/// Placeholder used when a cursus membership carries no grade, so the
/// presentation layer never has to handle absence.
pub const UNKNOWN_GRADE: &str = "Unknown grade";

/// Final aggregate for one user.
///
/// Only constructed when at least one cursus survives filtering; the
/// `cursus` list is never empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub user: UserSummary,
    /// Profile picture URL (small variant)
    pub image: String,
    /// One entry per retained cursus membership, in upstream order
    pub cursus: Vec<CursusView>,
}

/// Per-cursus view-model: the membership's own fields plus the projects
/// cross-referenced to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CursusView {
    /// Progress score as a decimal string (e.g. "5.42")
    pub level: String,
    /// Cursus display name
    pub name: String,
    /// Rank title, or [`UNKNOWN_GRADE`]
    pub grade: String,
    pub skills: Vec<Skill>,
    /// Project attempts whose cursus-id set contains this cursus,
    /// in upstream order
    pub projects: Vec<ProjectMembership>,
}
