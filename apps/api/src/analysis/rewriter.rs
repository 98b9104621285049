//! Resume rewrite: asks the model to close keyword gaps without inventing facts.

use async_trait::async_trait;
use tracing::info;

use crate::analysis::prompts::{REWRITE_PROMPT_TEMPLATE, REWRITE_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::{METRIC_PLACEHOLDER_INSTRUCTION, NO_FABRICATION_INSTRUCTION};
use crate::llm_client::{LlmClient, REWRITE_MAX_TOKENS};
use crate::scoring::GapReport;

/// Carried in `AppState` as `Arc<dyn ResumeRewriter>`.
#[async_trait]
pub trait ResumeRewriter: Send + Sync {
    async fn rewrite(
        &self,
        resume_text: &str,
        jd_text: &str,
        gaps: &GapReport,
    ) -> Result<String, AppError>;
}

pub struct LlmResumeRewriter(pub LlmClient);

#[async_trait]
impl ResumeRewriter for LlmResumeRewriter {
    async fn rewrite(
        &self,
        resume_text: &str,
        jd_text: &str,
        gaps: &GapReport,
    ) -> Result<String, AppError> {
        let prompt = build_rewrite_prompt(resume_text, jd_text, gaps)?;

        let rewritten = self
            .0
            .call_text(&prompt, REWRITE_SYSTEM, REWRITE_MAX_TOKENS)
            .await
            .map_err(|e| AppError::Llm(format!("Resume rewrite failed: {e}")))?;

        info!(
            "Rewrite produced {} words from {} words",
            rewritten.split_whitespace().count(),
            resume_text.split_whitespace().count()
        );
        Ok(rewritten)
    }
}

fn build_rewrite_prompt(
    resume_text: &str,
    jd_text: &str,
    gaps: &GapReport,
) -> Result<String, AppError> {
    let missing_keywords_json = serde_json::to_string_pretty(gaps)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Failed to serialize gaps: {e}")))?;

    Ok(fill_template(
        REWRITE_PROMPT_TEMPLATE,
        &[
            ("no_fabrication_instruction", NO_FABRICATION_INSTRUCTION),
            ("metric_instruction", METRIC_PLACEHOLDER_INSTRUCTION),
            ("missing_keywords_json", &missing_keywords_json),
            ("jd_text", jd_text),
            ("resume_text", resume_text),
        ],
    ))
}

/// Replaces `{name}` placeholders in one left-to-right pass over `template`.
/// Substituted values are never rescanned, so braces in user text stay literal.
fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let hit = vars.iter().find_map(|(name, value)| {
            tail.strip_prefix('{')
                .and_then(|t| t.strip_prefix(name))
                .and_then(|t| t.strip_prefix('}'))
                .map(|after| (*value, after))
        });
        match hit {
            Some((value, after)) => {
                out.push_str(value);
                rest = after;
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}
