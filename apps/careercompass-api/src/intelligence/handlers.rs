use axum::Json;
use serde::Serialize;

use crate::errors::{AppError, AppJson};
use crate::intelligence::archetype::{classify_archetype, Archetype};
use crate::intelligence::dashboard::{generate_dashboard, DashboardData};
use crate::models::profile::UserProfile;

#[derive(Debug, Serialize)]
pub struct ArchetypeResponse {
    pub archetype: Archetype,
}

/// POST /api/v1/dashboard
pub async fn handle_dashboard(
    AppJson(profile): AppJson<UserProfile>,
) -> Result<Json<DashboardData>, AppError> {
    require_name(&profile)?;
    Ok(Json(generate_dashboard(&profile)))
}

/// POST /api/v1/dashboard/archetype
pub async fn handle_archetype(AppJson(profile): AppJson<UserProfile>) -> Json<ArchetypeResponse> {
    let archetype = classify_archetype(&profile.normalized_title(), &profile.normalized_skills());
    Json(ArchetypeResponse { archetype })
}

fn require_name(profile: &UserProfile) -> Result<(), AppError> {
    if profile.name.trim().is_empty() {
        return Err(AppError::Validation("name must not be empty".to_string()));
    }
    Ok(())
}
