// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Pure cursus aggregation: filtering and project cross-referencing.

use crate::models::profile::{CursusView, UNKNOWN_GRADE};
use crate::models::user::UserDetail;

/// Build the per-cursus view list from a raw detail payload.
///
/// For each cursus membership, in upstream order:
/// - a level of exactly `"0.0"` marks an unstarted placeholder enrollment
///   and is dropped;
/// - the retained membership gets every project whose `cursus_ids` contain
///   its cursus id, preserving upstream project order (a project shared by
///   several cursus appears under each of them);
/// - a missing grade becomes the [`UNKNOWN_GRADE`] placeholder.
///
/// No I/O, no shared state: identical input yields identical output.
pub fn aggregate(detail: &UserDetail) -> Vec<CursusView> {
    detail
        .cursus_users
        .iter()
        .filter(|membership| membership.level != "0.0")
        .map(|membership| {
            let projects = detail
                .projects_users
                .iter()
                .filter(|project| project.cursus_ids.contains(&membership.cursus_id))
                .cloned()
                .collect();

            CursusView {
                level: membership.level.clone(),
                name: membership.cursus.name.clone(),
                grade: membership
                    .grade
                    .clone()
                    .unwrap_or_else(|| UNKNOWN_GRADE.to_string()),
                skills: membership.skills.clone(),
                projects,
            }
        })
        .collect()
}
