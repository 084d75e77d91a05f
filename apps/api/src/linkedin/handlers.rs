use axum::Json;

use crate::linkedin::content::{guidance, LinkedInGuidance};

/// GET /api/v1/linkedin/tips
pub async fn handle_tips() -> Json<LinkedInGuidance> {
    Json(guidance())
}
