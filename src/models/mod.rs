// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the service.

pub mod profile;
pub mod user;

pub use profile::{CursusView, Profile};
pub use user::{CursusMembership, ProjectMembership, Skill, UserDetail, UserImage, UserSummary};
