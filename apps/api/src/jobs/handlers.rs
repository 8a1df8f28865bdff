//! Axum route handlers for the Job Board API.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::errors::AppError;
use crate::jobs::board::{JobQuery, NewJobPosting};
use crate::matching::JobMatch;
use crate::models::cv::CvData;
use crate::models::job::Job;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub cv: CvData,
    /// When omitted, the whole board is matched.
    #[serde(default)]
    pub jobs: Option<Vec<Job>>,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    Query(query): Query<JobQuery>,
) -> Result<Json<Vec<Job>>, AppError> {
    let jobs = state.job_board.list(&query).await?;
    Ok(Json(jobs))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    let job = state
        .job_board
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(job))
}

/// POST /api/v1/jobs
///
/// Employer portal: publishes a new posting after validation.
pub async fn handle_create_job(
    State(state): State<AppState>,
    Json(posting): Json<NewJobPosting>,
) -> Result<(StatusCode, Json<Job>), AppError> {
    let posting = posting.validated()?;
    let job = state.job_board.create(posting).await?;
    info!(job_id = %job.id, title = %job.title, "Job posted");
    Ok((StatusCode::CREATED, Json(job)))
}

/// POST /api/v1/jobs/match
///
/// Ranks jobs for a CV, best match first.
pub async fn handle_match_jobs(
    State(state): State<AppState>,
    Json(request): Json<MatchRequest>,
) -> Result<Json<Vec<JobMatch>>, AppError> {
    let jobs = match request.jobs {
        Some(jobs) => jobs,
        None => state.job_board.list(&JobQuery::default()).await?,
    };

    let ranked = state.job_matcher.rank(&request.cv, &jobs);
    info!(jobs = ranked.len(), "Matched CV against jobs");
    Ok(Json(ranked))
}
