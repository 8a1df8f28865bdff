use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::models::job::Job;

/// Loads a JSON array of jobs used to pre-populate the in-memory board.
pub fn load_seed_jobs(path: &Path) -> Result<Vec<Job>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read job seed file '{}'", path.display()))?;
    let jobs: Vec<Job> = serde_json::from_str(&raw)
        .with_context(|| format!("Job seed file '{}' is not a JSON array of jobs", path.display()))?;

    info!("Loaded {} seed jobs from {}", jobs.len(), path.display());
    Ok(jobs)
}
