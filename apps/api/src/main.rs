mod ats;
mod config;
mod db;
mod errors;
mod jobs;
mod matching;
mod models;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::jobs::board::{InMemoryJobBoard, JobBoard};
use crate::jobs::postgres::PgJobBoard;
use crate::jobs::seed::load_seed_jobs;
use crate::matching::KeywordJobMatcher;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CV Builder API v{}", env!("CARGO_PKG_VERSION"));

    let job_board = build_job_board(&config).await?;
    info!("Job board backend: {}", job_board.backend());

    let state = AppState {
        config: config.clone(),
        job_board,
        job_matcher: Arc::new(KeywordJobMatcher),
    };

    // The browser front end is served from another origin.
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Postgres when `DATABASE_URL` is set, otherwise an in-memory board
/// optionally seeded from `JOB_SEED_PATH`.
async fn build_job_board(config: &Config) -> Result<Arc<dyn JobBoard>> {
    if let Some(url) = &config.database_url {
        let pool = create_pool(url).await?;
        if config.job_seed_path.is_some() {
            info!("JOB_SEED_PATH is ignored when DATABASE_URL is set");
        }
        return Ok(Arc::new(PgJobBoard::new(pool)));
    }

    let seed = match &config.job_seed_path {
        Some(path) => load_seed_jobs(path)?,
        None => Vec::new(),
    };
    Ok(Arc::new(InMemoryJobBoard::with_jobs(seed)))
}
