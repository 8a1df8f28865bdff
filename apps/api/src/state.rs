use std::sync::Arc;

use crate::config::Config;
use crate::jobs::board::JobBoard;
use crate::matching::JobMatcher;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Postgres-backed when `DATABASE_URL` is set, in-memory otherwise.
    pub job_board: Arc<dyn JobBoard>,
    /// Pluggable matcher. Default: KeywordJobMatcher.
    pub job_matcher: Arc<dyn JobMatcher>,
}
