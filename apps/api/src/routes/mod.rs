pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::careers;
use crate::linkedin;
use crate::sentiment;
use crate::skills;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Sentiment API
        .route(
            "/api/v1/sentiment/analyze",
            post(sentiment::handlers::handle_analyze),
        )
        .route(
            "/api/v1/sentiment/lexicon",
            get(sentiment::handlers::handle_lexicon),
        )
        // Career guidance
        .route(
            "/api/v1/careers/matches",
            get(careers::handlers::handle_list_matches),
        )
        .route(
            "/api/v1/careers/matches/:slug",
            get(careers::handlers::handle_get_match),
        )
        .route("/api/v1/skills/gap", get(skills::handlers::handle_gap_dashboard))
        .route("/api/v1/linkedin/tips", get(linkedin::handlers::handle_tips))
        .with_state(state)
}
