use axum::Json;

use crate::skills::dashboard::{dashboard, SkillGapDashboard};

/// GET /api/v1/skills/gap
pub async fn handle_gap_dashboard() -> Json<SkillGapDashboard> {
    Json(dashboard())
}
