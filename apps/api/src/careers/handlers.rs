//! Axum route handlers for career matches.

use axum::{extract::Path, Json};
use serde::Serialize;

use crate::careers::catalog::{find_role, ranked_roles, top_match, RoleView};
use crate::errors::AppError;

#[derive(Debug, Serialize)]
pub struct MatchListResponse {
    pub top_match: Option<RoleView>,
    pub roles: Vec<RoleView>,
}

/// GET /api/v1/careers/matches
pub async fn handle_list_matches() -> Json<MatchListResponse> {
    Json(MatchListResponse {
        top_match: top_match().map(RoleView::from),
        roles: ranked_roles().into_iter().map(RoleView::from).collect(),
    })
}

/// GET /api/v1/careers/matches/:slug
pub async fn handle_get_match(Path(slug): Path<String>) -> Result<Json<RoleView>, AppError> {
    find_role(&slug)
        .map(|role| Json(RoleView::from(role)))
        .ok_or_else(|| AppError::NotFound(format!("Career role '{slug}' not found")))
}
