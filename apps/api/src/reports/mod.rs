//! Report persistence. `AppState` holds an `Arc<dyn ReportStore>`; production uses Postgres.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::report::{ReportRow, ReportStatus};
use crate::scoring::{AnalysisReport, KeywordSet};

/// A freshly scored preview, ready to be stored.
pub struct NewReport<'a> {
    pub resume_text: &'a str,
    pub jd_text: &'a str,
    pub keywords: &'a KeywordSet,
    pub report: &'a AnalysisReport,
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    async fn insert_preview(&self, new: NewReport<'_>) -> Result<ReportRow, AppError>;

    async fn get(&self, id: Uuid) -> Result<Option<ReportRow>, AppError>;

    /// Attaches the rewrite and the before/after report, marking the row `full`.
    ///
    /// Only a row still in `preview` is updated. Returns `None` when no such row exists,
    /// either because the id is unknown or because another rewrite completed it first.
    async fn complete(
        &self,
        id: Uuid,
        rewritten_text: &str,
        report: &AnalysisReport,
    ) -> Result<Option<ReportRow>, AppError>;
}

pub struct PgReportStore {
    pool: PgPool,
}

impl PgReportStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportStore for PgReportStore {
    async fn insert_preview(&self, new: NewReport<'_>) -> Result<ReportRow, AppError> {
        let row = sqlx::query_as::<_, ReportRow>(
            r#"
            INSERT INTO reports (id, resume_text, jd_text, keywords, report, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.resume_text)
        .bind(new.jd_text)
        .bind(Json(new.keywords))
        .bind(Json(new.report))
        .bind(ReportStatus::Preview.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn get(&self, id: Uuid) -> Result<Option<ReportRow>, AppError> {
        let row = sqlx::query_as::<_, ReportRow>("SELECT * FROM reports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(row)
    }

    async fn complete(
        &self,
        id: Uuid,
        rewritten_text: &str,
        report: &AnalysisReport,
    ) -> Result<Option<ReportRow>, AppError> {
        let row = sqlx::query_as::<_, ReportRow>(
            r#"
            UPDATE reports
            SET rewritten_text = $2, report = $3, status = $4, updated_at = now()
            WHERE id = $1 AND status = $5
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(rewritten_text)
        .bind(Json(report))
        .bind(ReportStatus::Full.as_str())
        .bind(ReportStatus::Preview.as_str())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
