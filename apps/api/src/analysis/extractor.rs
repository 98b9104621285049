//! Keyword extraction: turns a job description into a validated `KeywordSet`.
//!
//! The provider's JSON is never trusted as-is: `keyword_set_from_value` accepts any
//! shape and always yields four well-formed lists.

use std::collections::HashSet;

use async_trait::async_trait;
use serde_json::Value;
use tracing::{info, warn};

use crate::analysis::prompts::{EXTRACTION_PROMPT_TEMPLATE, EXTRACTION_SYSTEM};
use crate::errors::AppError;
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{LlmClient, EXTRACTION_MAX_TOKENS};
use crate::scoring::KeywordSet;

pub const MAX_KEYWORDS_PER_CATEGORY: usize = 25;

/// Carried in `AppState` as `Arc<dyn KeywordExtractor>`.
#[async_trait]
pub trait KeywordExtractor: Send + Sync {
    async fn extract(&self, jd_text: &str) -> Result<KeywordSet, AppError>;
}

pub struct LlmKeywordExtractor(pub LlmClient);

#[async_trait]
impl KeywordExtractor for LlmKeywordExtractor {
    async fn extract(&self, jd_text: &str) -> Result<KeywordSet, AppError> {
        let prompt = EXTRACTION_PROMPT_TEMPLATE.replace("{jd_text}", jd_text);
        let system = EXTRACTION_SYSTEM.replace("{json_only}", JSON_ONLY_SYSTEM);

        let raw: Value = self
            .0
            .call_json(&prompt, &system, EXTRACTION_MAX_TOKENS)
            .await
            .map_err(|e| AppError::Llm(format!("Keyword extraction failed: {e}")))?;

        let keywords = keyword_set_from_value(&raw);
        if keywords.is_empty() {
            warn!("Keyword extraction returned no usable keywords");
        }
        info!(
            "Extracted {} keywords (skills={}, tools={}, metrics={}, soft={})",
            keywords.len(),
            keywords.required_skills.len(),
            keywords.tools.len(),
            keywords.metrics_keywords.len(),
            keywords.soft_skills.len()
        );
        Ok(keywords)
    }
}

/// Builds a `KeywordSet` from arbitrary provider JSON.
///
/// Missing or non-array categories become empty. Non-string items and blanks are
/// dropped, items are trimmed, and case-insensitive duplicates keep the first spelling.
pub fn keyword_set_from_value(value: &Value) -> KeywordSet {
    KeywordSet {
        required_skills: category(value, "required_skills"),
        tools: category(value, "tools"),
        metrics_keywords: category(value, "metrics_keywords"),
        soft_skills: category(value, "soft_skills"),
    }
}

fn category(value: &Value, key: &str) -> Vec<String> {
    let Some(items) = value.get(key).and_then(Value::as_array) else {
        return Vec::new();
    };

    let mut seen = HashSet::new();
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .take(MAX_KEYWORDS_PER_CATEGORY)
        .map(str::to_string)
        .collect()
}
