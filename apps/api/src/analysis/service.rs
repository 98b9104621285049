//! Analysis pipeline: orchestrates extraction, scoring, rewriting and persistence.
//!
//! Preview: validate → extract keywords → score original → store as `preview`.
//! Rewrite: load stored preview → rewrite → rescore before/after → store as `full`.

use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::analysis::extractor::KeywordExtractor;
use crate::analysis::rewriter::ResumeRewriter;
use crate::errors::AppError;
use crate::models::report::ReportRow;
use crate::reports::{NewReport, ReportStore};
use crate::scoring::{analyze, AnalysisReport, KeywordSet};

#[derive(Debug, Clone, Serialize)]
pub struct PreviewResponse {
    pub report_id: Uuid,
    pub keywords: KeywordSet,
    pub report: AnalysisReport,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewriteResponse {
    pub report_id: Uuid,
    pub report: AnalysisReport,
    pub rewritten_resume: String,
}

/// Rejects resume or job-description text shorter than `min_chars` after trimming.
pub fn validate_inputs(resume_text: &str, jd_text: &str, min_chars: usize) -> Result<(), AppError> {
    for (field, text) in [("resume_text", resume_text), ("jd_text", jd_text)] {
        let len = text.trim().chars().count();
        if len < min_chars {
            return Err(AppError::Validation(format!(
                "{field} must be at least {min_chars} characters (got {len})"
            )));
        }
    }
    Ok(())
}

pub async fn run_preview(
    extractor: &dyn KeywordExtractor,
    store: &dyn ReportStore,
    resume_text: &str,
    jd_text: &str,
    min_chars: usize,
) -> Result<PreviewResponse, AppError> {
    validate_inputs(resume_text, jd_text, min_chars)?;

    let keywords = extractor.extract(jd_text).await?;
    let report = analyze(resume_text, &keywords, None);

    let row = store
        .insert_preview(NewReport {
            resume_text,
            jd_text,
            keywords: &keywords,
            report: &report,
        })
        .await?;

    info!(
        "Preview {}: ats={} overall_before={}",
        row.id, report.ats_score, report.overall_before
    );

    Ok(PreviewResponse {
        report_id: row.id,
        keywords,
        report,
    })
}

/// Produces the full before/after report for a stored preview.
/// A report that is already `full` is returned as stored, without a second rewrite.
/// When two rewrites race, the first to complete wins and both callers get its result.
pub async fn run_rewrite(
    rewriter: &dyn ResumeRewriter,
    store: &dyn ReportStore,
    report_id: Uuid,
) -> Result<RewriteResponse, AppError> {
    let row = load_report(store, report_id).await?;

    if row.is_full() {
        info!("Report {} already rewritten; returning stored result", report_id);
        return stored_rewrite(row);
    }

    let keywords = &row.keywords.0;
    let gaps = &row.report.0.gaps;
    let rewritten = rewriter.rewrite(&row.resume_text, &row.jd_text, gaps).await?;

    let report = analyze(&row.resume_text, keywords, Some(&rewritten));
    let Some(completed) = store.complete(report_id, &rewritten, &report).await? else {
        warn!("Report {} was completed concurrently; discarding this rewrite", report_id);
        return stored_rewrite(load_report(store, report_id).await?);
    };

    info!(
        "Report {} rewritten: overall {} -> {}",
        report_id,
        report.overall_before,
        report.overall_after.unwrap_or_default()
    );

    stored_rewrite(completed)
}

fn stored_rewrite(row: ReportRow) -> Result<RewriteResponse, AppError> {
    match (row.is_full(), row.rewritten_text) {
        (true, Some(rewritten_resume)) => Ok(RewriteResponse {
            report_id: row.id,
            report: row.report.0,
            rewritten_resume,
        }),
        _ => Err(AppError::Internal(anyhow::anyhow!(
            "Report {} has no completed rewrite",
            row.id
        ))),
    }
}

pub async fn load_report(store: &dyn ReportStore, report_id: Uuid) -> Result<ReportRow, AppError> {
    store
        .get(report_id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Report {report_id} not found")))
}

#[cfg(test)]
pub(crate) mod stubs {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::scoring::GapReport;

    /// Returns a fixed keyword set.
    pub struct FixedExtractor(pub KeywordSet);

    #[async_trait]
    impl KeywordExtractor for FixedExtractor {
        async fn extract(&self, _jd_text: &str) -> Result<KeywordSet, AppError> {
            Ok(self.0.clone())
        }
    }

    /// Appends every missing keyword to the resume as a new bullet, counting calls.
    #[derive(Default)]
    pub struct AppendingRewriter {
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl ResumeRewriter for AppendingRewriter {
        async fn rewrite(
            &self,
            resume_text: &str,
            _jd_text: &str,
            gaps: &GapReport,
        ) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let missing: Vec<&str> = gaps
                .required_skills
                .iter()
                .chain(&gaps.tools)
                .chain(&gaps.metrics_keywords)
                .chain(&gaps.soft_skills)
                .map(String::as_str)
                .collect();
            Ok(format!("{resume_text}\n- Applied {}", missing.join(", ")))
        }
    }

    /// Yields before answering so concurrent callers interleave. Each draft is numbered.
    #[derive(Default)]
    pub struct SlowRewriter {
        pub calls: AtomicUsize,
    }

    #[async_trait]
    impl ResumeRewriter for SlowRewriter {
        async fn rewrite(
            &self,
            resume_text: &str,
            _jd_text: &str,
            _gaps: &GapReport,
        ) -> Result<String, AppError> {
            let draft = self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok(format!("{resume_text}\n- Draft {draft} with SQL and Airflow"))
        }
    }

    pub struct FailingRewriter;

    #[async_trait]
    impl ResumeRewriter for FailingRewriter {
        async fn rewrite(&self, _: &str, _: &str, _: &GapReport) -> Result<String, AppError> {
            Err(AppError::Llm("provider unavailable".to_string()))
        }
    }

    pub fn sample_keywords() -> KeywordSet {
        KeywordSet {
            required_skills: vec!["Python".into(), "SQL".into()],
            tools: vec!["AWS".into(), "Airflow".into()],
            metrics_keywords: vec!["latency".into()],
            soft_skills: vec!["mentoring".into()],
        }
    }

    pub fn sample_resume() -> String {
        let mut lines = vec!["Jane Doe, Data Engineer".to_string()];
        for i in 0..8 {
            lines.push(format!(
                "- Built Python batch job number {i} on AWS for the analytics group"
            ));
        }
        lines.join("\n")
    }

    pub fn sample_jd() -> String {
        "We are hiring a data engineer to own batch pipelines. ".repeat(6)
    }
}
