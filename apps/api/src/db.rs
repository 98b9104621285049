use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

const CREATE_REPORTS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS reports (
    id              UUID PRIMARY KEY,
    resume_text     TEXT NOT NULL,
    jd_text         TEXT NOT NULL,
    keywords        JSONB NOT NULL,
    report          JSONB NOT NULL,
    rewritten_text  TEXT,
    status          TEXT NOT NULL DEFAULT 'preview',
    created_at      TIMESTAMPTZ NOT NULL DEFAULT now(),
    updated_at      TIMESTAMPTZ NOT NULL DEFAULT now()
)
"#;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the `reports` table if it does not exist yet.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    sqlx::query(CREATE_REPORTS_TABLE).execute(pool).await?;
    info!("Schema ready");
    Ok(())
}
