//! ATS compatibility checks.
//!
//! Two independent rubrics approximate how an Applicant Tracking System would
//! treat a CV:
//! - `structured` scores a `CvData` built by the form wizard (base 100, deductions only).
//! - `free_text` scores a pasted or uploaded CV (base 50, bonuses and deductions).
//!
//! The rubrics differ in base score, deltas and checks. They are kept as two
//! named strategies and never merged into one parameterized scorer.

pub mod extract;
pub mod free_text;
pub mod handlers;
pub mod rubric;
pub mod structured;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::cv::CvData;

/// Score at or above which a CV is considered ATS-friendly.
pub const PASS_THRESHOLD: i32 = 70;

// ────────────────────────────────────────────────────────────────────────────
// Result types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Error,
    Warning,
    Success,
}

/// One finding raised by a rubric check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub category: String,
    pub message: String,
    pub recommendation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringStrategy {
    Structured,
    FreeText,
}

/// Outcome of a single ATS check. Throwaway value, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsCheckResult {
    pub score: u32, // 0 – 100
    pub passed: bool,
    pub issues: Vec<Issue>,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub strategy: ScoringStrategy,
    pub rubric_version: String,
}

/// Input to `check`: one CV in either of the two supported shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", content = "input", rename_all = "snake_case")]
pub enum AtsSubmission {
    Structured(CvData),
    FreeText(String),
}

impl AtsSubmission {
    pub fn strategy(&self) -> ScoringStrategy {
        match self {
            AtsSubmission::Structured(_) => ScoringStrategy::Structured,
            AtsSubmission::FreeText(_) => ScoringStrategy::FreeText,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum AtsError {
    #[error("CV text must be at least {min} characters (got {actual})")]
    TextTooShort { min: usize, actual: usize },

    #[error("Uploaded document contains no readable text")]
    EmptyDocument,

    #[error("Unsupported document type: {0}")]
    UnsupportedDocument(String),

    #[error("Could not read document: {0}")]
    Extraction(String),
}

/// Runs the rubric matching the submission's shape.
pub fn check(submission: &AtsSubmission) -> Result<AtsCheckResult, AtsError> {
    match submission {
        AtsSubmission::Structured(cv) => Ok(structured::score_cv(cv)),
        AtsSubmission::FreeText(text) => free_text::score_free_text(text),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Shared accumulator
// ────────────────────────────────────────────────────────────────────────────

/// Running state of one rubric pass. The score may leave 0..=100 while checks
/// run; it is clamped only in `finish`.
pub(crate) struct Scorecard {
    score: i32,
    issues: Vec<Issue>,
    strengths: Vec<String>,
    improvements: Vec<String>,
}

impl Scorecard {
    pub(crate) fn new(base: i32) -> Self {
        Self {
            score: base,
            issues: Vec::new(),
            strengths: Vec::new(),
            improvements: Vec::new(),
        }
    }

    pub(crate) fn adjust(&mut self, delta: i32) {
        self.score += delta;
    }

    pub(crate) fn issue(
        &mut self,
        kind: IssueKind,
        category: &str,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) {
        self.issues.push(Issue {
            kind,
            category: category.to_string(),
            message: message.into(),
            recommendation: recommendation.into(),
        });
    }

    pub(crate) fn strength(&mut self, text: impl Into<String>) {
        self.strengths.push(text.into());
    }

    pub(crate) fn improvement(&mut self, text: impl Into<String>) {
        self.improvements.push(text.into());
    }

    pub(crate) fn finish(self, strategy: ScoringStrategy, rubric_version: &str) -> AtsCheckResult {
        let score = self.score.clamp(0, 100);
        AtsCheckResult {
            score: score as u32,
            passed: score >= PASS_THRESHOLD,
            issues: self.issues,
            strengths: self.strengths,
            improvements: self.improvements,
            strategy,
            rubric_version: rubric_version.to_string(),
        }
    }
}
