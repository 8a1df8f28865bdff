pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::ats::handlers as ats;
use crate::jobs::handlers as jobs;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // ATS Checker
        .route("/api/v1/ats/check", post(ats::handle_check_cv))
        .route("/api/v1/ats/check-text", post(ats::handle_check_text))
        .route("/api/v1/ats/check-file", post(ats::handle_check_file))
        // Job Board
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_create_job),
        )
        .route("/api/v1/jobs/match", post(jobs::handle_match_jobs))
        .route("/api/v1/jobs/:id", get(jobs::handle_get_job))
        .layer(DefaultBodyLimit::max(body_limit))
        .with_state(state)
}
