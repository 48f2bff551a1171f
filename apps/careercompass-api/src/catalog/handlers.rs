use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::catalog::{Domain, SkillHit};
use crate::errors::{AppError, AppQuery};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SkillSearchQuery {
    pub q: Option<String>,
    pub category: Option<String>,
}

/// GET /api/v1/catalog/domains
pub async fn handle_list_domains(State(state): State<AppState>) -> Json<Vec<Domain>> {
    Json(state.catalog.domains().to_vec())
}

/// GET /api/v1/catalog/domains/:id
pub async fn handle_get_domain(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Domain>, AppError> {
    state
        .catalog
        .domain(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Domain '{id}'")))
}

/// GET /api/v1/catalog/skills
pub async fn handle_search_skills(
    State(state): State<AppState>,
    AppQuery(params): AppQuery<SkillSearchQuery>,
) -> Json<Vec<SkillHit>> {
    Json(
        state
            .catalog
            .search(params.q.as_deref(), params.category.as_deref()),
    )
}

/// GET /api/v1/catalog/skills/:id
pub async fn handle_get_skill(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<SkillHit>, AppError> {
    state
        .catalog
        .skill_hit(&id)
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Skill '{id}'")))
}

/// GET /api/v1/catalog/ratings
pub async fn handle_rated_skills(State(state): State<AppState>) -> Json<Vec<SkillHit>> {
    Json(state.catalog.rated_skills())
}
