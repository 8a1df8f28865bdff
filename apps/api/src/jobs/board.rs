//! Job Board — pluggable storage for job postings.
//!
//! `PgJobBoard` (see `jobs::postgres`) is used when a database is configured;
//! otherwise `InMemoryJobBoard` keeps postings for the lifetime of the process.
//! `AppState` holds an `Arc<dyn JobBoard>`.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::job::{Coordinates, Job};

// ────────────────────────────────────────────────────────────────────────────
// Query and posting models
// ────────────────────────────────────────────────────────────────────────────

/// Listing filters. All matching is case-insensitive substring containment.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobQuery {
    /// Searched in title, company and description.
    pub q: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub job_type: Option<String>,
}

impl JobQuery {
    pub fn matches(&self, job: &Job) -> bool {
        let contains = |haystack: &str, needle: &str| {
            haystack.to_lowercase().contains(&needle.to_lowercase())
        };

        let q_ok = self.q.as_deref().map_or(true, |q| {
            contains(&job.title, q) || contains(&job.company, q) || contains(&job.description, q)
        });
        let location_ok = self
            .location
            .as_deref()
            .map_or(true, |l| contains(&job.location, l));
        let type_ok = self
            .job_type
            .as_deref()
            .map_or(true, |t| contains(&job.job_type, t));

        q_ok && location_ok && type_ok
    }
}

/// A posting submitted through the employer portal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewJobPosting {
    pub title: String,
    pub company: String,
    pub location: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub salary: String,
    pub description: String,
    pub requirements: Vec<String>,
    pub coordinates: Option<Coordinates>,
}

impl NewJobPosting {
    /// Trims every field, drops blank requirements and rejects incomplete postings.
    pub fn validated(self) -> Result<Self, AppError> {
        let posting = NewJobPosting {
            title: self.title.trim().to_string(),
            company: self.company.trim().to_string(),
            location: self.location.trim().to_string(),
            job_type: self.job_type.trim().to_string(),
            salary: self.salary.trim().to_string(),
            description: self.description.trim().to_string(),
            requirements: self
                .requirements
                .iter()
                .map(|r| r.trim())
                .filter(|r| !r.is_empty())
                .map(String::from)
                .collect(),
            coordinates: self.coordinates,
        };

        let mut missing = Vec::new();
        for (field, value) in [
            ("title", &posting.title),
            ("company", &posting.company),
            ("location", &posting.location),
            ("description", &posting.description),
        ] {
            if value.is_empty() {
                missing.push(field);
            }
        }
        if posting.requirements.is_empty() {
            missing.push("requirements");
        }
        if !missing.is_empty() {
            return Err(AppError::Validation(format!(
                "Job posting is missing: {}",
                missing.join(", ")
            )));
        }

        Ok(posting)
    }

    /// Builds the stored job with a fresh id and today's date.
    pub fn into_job(self) -> Job {
        Job {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            company: self.company,
            location: self.location,
            job_type: self.job_type,
            salary: self.salary,
            description: self.description,
            requirements: self.requirements,
            posted_date: Utc::now().date_naive().format("%Y-%m-%d").to_string(),
            coordinates: self.coordinates,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

#[async_trait]
pub trait JobBoard: Send + Sync {
    /// Newest postings first.
    async fn list(&self, query: &JobQuery) -> Result<Vec<Job>, AppError>;

    async fn get(&self, id: &str) -> Result<Option<Job>, AppError>;

    /// Stores an already validated posting.
    async fn create(&self, posting: NewJobPosting) -> Result<Job, AppError>;

    /// Label for logs and the health endpoint.
    fn backend(&self) -> &'static str;
}

// ────────────────────────────────────────────────────────────────────────────
// InMemoryJobBoard
// ────────────────────────────────────────────────────────────────────────────

/// Process-local board. Postings are kept in insertion order and listed newest first.
#[derive(Default)]
pub struct InMemoryJobBoard {
    jobs: RwLock<Vec<Job>>,
}

impl InMemoryJobBoard {
    /// Seeds the board; the last seed job is treated as the newest.
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        Self {
            jobs: RwLock::new(jobs),
        }
    }
}

#[async_trait]
impl JobBoard for InMemoryJobBoard {
    async fn list(&self, query: &JobQuery) -> Result<Vec<Job>, AppError> {
        let jobs = self.jobs.read().await;
        Ok(jobs
            .iter()
            .rev()
            .filter(|job| query.matches(job))
            .cloned()
            .collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Job>, AppError> {
        let jobs = self.jobs.read().await;
        Ok(jobs.iter().find(|job| job.id == id).cloned())
    }

    async fn create(&self, posting: NewJobPosting) -> Result<Job, AppError> {
        let job = posting.into_job();
        self.jobs.write().await.push(job.clone());
        info!(job_id = %job.id, company = %job.company, "Job posting stored in memory");
        Ok(job)
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
