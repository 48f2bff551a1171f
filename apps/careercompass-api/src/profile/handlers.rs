use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppJson;
use crate::models::profile::UserProfile;
use crate::profile::draft::ProfileDraft;

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditSkillsRequest {
    pub profile: UserProfile,
    #[serde(default)]
    pub add: Vec<String>,
    #[serde(default)]
    pub remove: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct EditSkillsResponse {
    pub profile: UserProfile,
    pub added: Vec<String>,
    pub removed: Vec<String>,
    pub suggestions: Vec<String>,
}

/// POST /api/v1/profile/suggestions
pub async fn handle_suggestions(
    AppJson(profile): AppJson<UserProfile>,
) -> Json<SuggestionsResponse> {
    let suggestions = ProfileDraft::new(profile).suggestions();
    Json(SuggestionsResponse { suggestions })
}

/// POST /api/v1/profile/skills
/// Removals are applied before additions.
pub async fn handle_edit_skills(
    AppJson(req): AppJson<EditSkillsRequest>,
) -> Json<EditSkillsResponse> {
    Json(apply_skill_edits(req))
}

fn apply_skill_edits(req: EditSkillsRequest) -> EditSkillsResponse {
    let mut draft = ProfileDraft::new(req.profile);

    let removed: Vec<String> = req
        .remove
        .into_iter()
        .filter(|skill| draft.remove_skill(skill))
        .collect();
    let added: Vec<String> = req
        .add
        .into_iter()
        .filter(|skill| draft.add_skill(skill))
        .map(|skill| skill.trim().to_string())
        .collect();

    tracing::debug!(
        added = added.len(),
        removed = removed.len(),
        "Applied profile skill edits"
    );

    let suggestions = draft.suggestions();
    EditSkillsResponse {
        profile: draft.into_profile(),
        added,
        removed,
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_then_add() {
        let req = EditSkillsRequest {
            profile: UserProfile::new("Ada")
                .with_title("Urban Planner")
                .with_skills(["GIS", "Excel"]),
            add: vec![" AutoCAD ".to_string(), "GIS".to_string(), "".to_string()],
            remove: vec!["Excel".to_string(), "Fortran".to_string()],
        };

        let resp = apply_skill_edits(req);
        assert_eq!(resp.removed, vec!["Excel"]);
        assert_eq!(resp.added, vec!["AutoCAD"]);
        assert_eq!(resp.profile.skills, vec!["GIS", "AutoCAD"]);
        assert_eq!(resp.suggestions, vec!["Urban Planning", "Smart Grid"]);
    }

    #[test]
    fn test_removed_skill_can_be_re_added() {
        let req = EditSkillsRequest {
            profile: UserProfile::new("Ada").with_skills(["Python"]),
            add: vec!["Python".to_string()],
            remove: vec!["Python".to_string()],
        };

        let resp = apply_skill_edits(req);
        assert_eq!(resp.removed, vec!["Python"]);
        assert_eq!(resp.added, vec!["Python"]);
        assert_eq!(resp.profile.skills, vec!["Python"]);
    }
}
