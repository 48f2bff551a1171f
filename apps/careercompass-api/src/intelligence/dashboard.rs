//! Dashboard generation — archetype selection plus the four content blocks.
//!
//! Pure and total: no I/O, no clock, no randomness. Identical profiles always
//! produce identical payloads.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::intelligence::archetype::{classify_archetype, Archetype};
use crate::intelligence::content::{content_for, ArchetypeContent, Priority, COMMON_DIRECTIVE};
use crate::intelligence::matrix::{build_skill_matrix, CompetenceEntry};
use crate::models::profile::UserProfile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directive {
    pub id: u32,
    pub description: String,
    pub estimated_duration: String,
    pub priority: Priority,
}

/// A suggested next role. `match_percent` and `missing_skills` are fixed per
/// archetype and do not look at the caller's skills.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerPathOption {
    pub role: String,
    pub match_percent: u32,
    pub missing_skills: Vec<String>,
    pub recommended_course: String,
    pub suggested_project: String,
    pub project_ready: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardData {
    pub archetype: Archetype,
    pub skill_matrix: Vec<CompetenceEntry>,
    pub directives: Vec<Directive>,
    pub insight: String,
    pub career_path: Vec<CareerPathOption>,
}

/// Builds the full dashboard payload for a profile.
pub fn generate_dashboard(profile: &UserProfile) -> DashboardData {
    let title = profile.normalized_title();
    let skills = profile.normalized_skills();

    let archetype = classify_archetype(&title, &skills);
    debug!(%archetype, skill_count = skills.len(), "Resolved dashboard archetype");

    let content = content_for(archetype);

    DashboardData {
        archetype,
        skill_matrix: build_skill_matrix(content, &skills),
        directives: build_directives(content),
        insight: build_insight(content, &profile.name),
        career_path: build_career_path(content),
    }
}

/// Two archetype-specific directives followed by the shared one.
pub fn build_directives(content: &ArchetypeContent) -> Vec<Directive> {
    content
        .directives
        .iter()
        .chain(std::iter::once(&COMMON_DIRECTIVE))
        .map(|seed| Directive {
            id: seed.id,
            description: seed.description.to_string(),
            estimated_duration: seed.estimated_duration.to_string(),
            priority: seed.priority,
        })
        .collect()
}

/// Renders the quoted insight line, e.g. `"Operative Ada, your code ..."`.
pub fn build_insight(content: &ArchetypeContent, name: &str) -> String {
    format!("\"Operative {name}, {}\"", content.insight_body)
}

pub fn build_career_path(content: &ArchetypeContent) -> Vec<CareerPathOption> {
    content
        .career_paths
        .iter()
        .map(|seed| CareerPathOption {
            role: seed.role.to_string(),
            match_percent: seed.match_percent,
            missing_skills: seed.missing_skills.iter().map(|s| s.to_string()).collect(),
            recommended_course: seed.recommended_course.to_string(),
            suggested_project: seed.suggested_project.to_string(),
            project_ready: seed.project_ready,
        })
        .collect()
}
