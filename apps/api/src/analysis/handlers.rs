//! Axum route handlers for the Analysis and Reports API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Deserialize;
use tracing::debug;
use uuid::Uuid;

use crate::analysis::service::{
    load_report, run_preview, run_rewrite, PreviewResponse, RewriteResponse,
};
use crate::analysis::upload::resume_text_from_pdf;
use crate::errors::AppError;
use crate::models::report::ReportRow;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PreviewRequest {
    pub resume_text: String,
    pub jd_text: String,
}

/// POST /api/v1/analysis/preview
///
/// Free keyword-gap preview: extracts JD keywords, scores the original resume and
/// stores the result so it can be rewritten later.
pub async fn handle_preview(
    State(state): State<AppState>,
    Json(request): Json<PreviewRequest>,
) -> Result<Json<PreviewResponse>, AppError> {
    let preview = run_preview(
        state.extractor.as_ref(),
        state.reports.as_ref(),
        &request.resume_text,
        &request.jd_text,
        state.config.min_input_chars,
    )
    .await?;

    Ok(Json(preview))
}

/// POST /api/v1/analysis/preview/upload
///
/// Multipart variant of the preview. Fields: `resume` (PDF file) or `resume_text`, and `jd_text`.
pub async fn handle_preview_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<PreviewResponse>, AppError> {
    let mut resume_text: Option<String> = None;
    let mut jd_text: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "resume" => {
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume file: {e}")))?;
                resume_text = Some(resume_text_from_pdf(data).await?);
            }
            "resume_text" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::Validation(format!("Failed to read resume_text: {e}")))?;
                resume_text.get_or_insert(text);
            }
            "jd_text" => {
                jd_text = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::Validation(format!("Failed to read jd_text: {e}")))?,
                );
            }
            other => debug!("Ignoring multipart field '{other}'"),
        }
    }

    let resume_text = resume_text
        .ok_or_else(|| AppError::Validation("Missing 'resume' file or 'resume_text' field".into()))?;
    let jd_text = jd_text.ok_or_else(|| AppError::Validation("Missing 'jd_text' field".into()))?;

    let preview = run_preview(
        state.extractor.as_ref(),
        state.reports.as_ref(),
        &resume_text,
        &jd_text,
        state.config.min_input_chars,
    )
    .await?;

    Ok(Json(preview))
}

/// POST /api/v1/reports/:id/rewrite
///
/// Rewrites the stored resume and returns before/after scores with improvements.
pub async fn handle_rewrite(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> Result<Json<RewriteResponse>, AppError> {
    let response = run_rewrite(state.rewriter.as_ref(), state.reports.as_ref(), report_id).await?;
    Ok(Json(response))
}

/// GET /api/v1/reports/:id
pub async fn handle_get_report(
    State(state): State<AppState>,
    Path(report_id): Path<Uuid>,
) -> Result<Json<ReportRow>, AppError> {
    let row = load_report(state.reports.as_ref(), report_id).await?;
    Ok(Json(row))
}
