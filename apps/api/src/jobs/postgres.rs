use async_trait::async_trait;
use chrono::Utc;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::jobs::board::{JobBoard, JobQuery, NewJobPosting};
use crate::models::job::{Job, JobRow};

/// Job board backed by the `jobs` table.
pub struct PgJobBoard {
    pool: PgPool,
}

impl PgJobBoard {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobBoard for PgJobBoard {
    async fn list(&self, query: &JobQuery) -> Result<Vec<Job>, AppError> {
        let rows = sqlx::query_as::<_, JobRow>(
            r#"
            SELECT * FROM jobs
            WHERE ($1::text IS NULL
                   OR title ILIKE $1 ESCAPE '\'
                   OR company ILIKE $1 ESCAPE '\'
                   OR description ILIKE $1 ESCAPE '\')
              AND ($2::text IS NULL OR location ILIKE $2 ESCAPE '\')
              AND ($3::text IS NULL OR job_type ILIKE $3 ESCAPE '\')
            ORDER BY posted_date DESC, created_at DESC
            "#,
        )
        .bind(query.q.as_deref().map(contains_pattern))
        .bind(query.location.as_deref().map(contains_pattern))
        .bind(query.job_type.as_deref().map(contains_pattern))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Job::from).collect())
    }

    async fn get(&self, id: &str) -> Result<Option<Job>, AppError> {
        // Ids that are not UUIDs cannot exist in this table.
        let Ok(id) = Uuid::parse_str(id) else {
            return Ok(None);
        };

        let row = sqlx::query_as::<_, JobRow>("SELECT * FROM jobs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(Job::from))
    }

    async fn create(&self, posting: NewJobPosting) -> Result<Job, AppError> {
        let (latitude, longitude) = match posting.coordinates {
            Some(c) => (Some(c.lat), Some(c.lng)),
            None => (None, None),
        };

        let row = sqlx::query_as::<_, JobRow>(
            r#"
            INSERT INTO jobs
                (id, title, company, location, job_type, salary, description,
                 requirements, posted_date, latitude, longitude)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&posting.title)
        .bind(&posting.company)
        .bind(&posting.location)
        .bind(&posting.job_type)
        .bind(&posting.salary)
        .bind(&posting.description)
        .bind(&posting.requirements)
        .bind(Utc::now().date_naive())
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await?;

        info!(job_id = %row.id, company = %row.company, "Job posting stored");
        Ok(Job::from(row))
    }

    fn backend(&self) -> &'static str {
        "postgres"
    }
}

/// `ILIKE` pattern for substring containment; `%`, `_` and `\` in the term match literally.
fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
