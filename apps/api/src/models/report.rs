use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::scoring::{AnalysisReport, KeywordSet};

/// `preview` until a rewrite has been produced, then `full`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Preview,
    Full,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Preview => "preview",
            ReportStatus::Full => "full",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportRow {
    pub id: Uuid,
    pub resume_text: String,
    pub jd_text: String,
    pub keywords: Json<KeywordSet>,
    pub report: Json<AnalysisReport>,
    pub rewritten_text: Option<String>,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReportRow {
    pub fn is_full(&self) -> bool {
        self.status == ReportStatus::Full.as_str()
    }
}
