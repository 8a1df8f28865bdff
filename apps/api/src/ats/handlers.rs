//! Axum route handlers for the ATS Checker API.

use axum::{
    extract::{multipart::MultipartError, Multipart},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::{info, warn};

use crate::ats::extract::extract_text;
use crate::ats::free_text::validate_input;
use crate::ats::{check, AtsCheckResult, AtsError, AtsSubmission};
use crate::errors::AppError;
use crate::models::cv::CvData;

#[derive(Debug, Deserialize)]
pub struct CheckTextRequest {
    pub text: String,
}

/// POST /api/v1/ats/check
///
/// Scores a structured CV from the builder.
pub async fn handle_check_cv(Json(cv): Json<CvData>) -> Result<Json<AtsCheckResult>, AppError> {
    let submission = AtsSubmission::Structured(cv);
    let result = check(&submission)?;
    info!(
        strategy = ?submission.strategy(),
        score = result.score,
        passed = result.passed,
        "ATS check"
    );
    Ok(Json(result))
}

/// POST /api/v1/ats/check-text
///
/// Scores a pasted CV. Text under 100 characters is rejected with 400.
pub async fn handle_check_text(
    Json(request): Json<CheckTextRequest>,
) -> Result<Json<AtsCheckResult>, AppError> {
    validate_input(&request.text)?;

    let result = check(&AtsSubmission::FreeText(request.text))?;
    info!(score = result.score, passed = result.passed, "Free-text ATS check");
    Ok(Json(result))
}

/// POST /api/v1/ats/check-file
///
/// Accepts a multipart upload with a `file` field (PDF or plain text), extracts
/// its text and scores it with the free-text rubric.
pub async fn handle_check_file(mut multipart: Multipart) -> Result<Json<AtsCheckResult>, AppError> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(String::from);
        let content_type = field.content_type().map(String::from);
        let data = field.bytes().await.map_err(multipart_error)?;

        // PDF parsing is CPU-bound
        let text = tokio::task::spawn_blocking(move || {
            extract_text(file_name.as_deref(), content_type.as_deref(), &data)
        })
        .await
        .map_err(|e| {
            if e.is_panic() {
                AppError::from(AtsError::Extraction(
                    "document could not be parsed".to_string(),
                ))
            } else {
                AppError::Internal(anyhow::anyhow!("Extraction task failed: {e}"))
            }
        })?
        .map_err(|e| {
            warn!("Rejected CV upload: {e}");
            AppError::from(e)
        })?;

        validate_input(&text)?;
        let result = check(&AtsSubmission::FreeText(text))?;
        info!(score = result.score, passed = result.passed, "Uploaded CV ATS check");
        return Ok(Json(result));
    }

    Err(AppError::Validation(
        "Multipart body must include a 'file' field".to_string(),
    ))
}

fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(err.body_text())
    } else {
        AppError::Validation(err.body_text())
    }
}
