//! Keyword matching: case-insensitive substring containment over the four JD categories.
//!
//! Gap detection and improvement detection both go through `keyword_matches`.
//! There is no tokenization, stemming, or word-boundary check: "sql" matches
//! inside "mysqlite". Scores depend on this exact rule.

use serde::{Deserialize, Serialize};

/// Keywords extracted from a job description, grouped into four categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSet {
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub metrics_keywords: Vec<String>,
    #[serde(default)]
    pub soft_skills: Vec<String>,
}

impl KeywordSet {
    pub fn is_empty(&self) -> bool {
        self.required_skills.is_empty()
            && self.tools.is_empty()
            && self.metrics_keywords.is_empty()
            && self.soft_skills.is_empty()
    }

    pub fn len(&self) -> usize {
        self.required_skills.len()
            + self.tools.len()
            + self.metrics_keywords.len()
            + self.soft_skills.len()
    }
}

/// Coverage of one keyword category by a candidate text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub matched: usize,
    /// Floors at 1, so an empty category yields rate 0.
    pub total: usize,
    pub rate: f64,
}

/// Match results for all four categories against one candidate text.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryMatches {
    pub skills: MatchResult,
    pub tools: MatchResult,
    pub metrics: MatchResult,
    pub soft: MatchResult,
}

/// Keywords from each category missing from a candidate text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GapReport {
    pub required_skills: Vec<String>,
    pub tools: Vec<String>,
    pub metrics_keywords: Vec<String>,
    pub soft_skills: Vec<String>,
}

impl GapReport {
    pub fn is_empty(&self) -> bool {
        self.required_skills.is_empty()
            && self.tools.is_empty()
            && self.metrics_keywords.is_empty()
            && self.soft_skills.is_empty()
    }
}

/// Previously missing keywords that the rewritten text now contains.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ImprovementReport {
    pub required_skills_added: Vec<String>,
    pub tools_added: Vec<String>,
    pub metrics_added: Vec<String>,
    pub soft_skills_added: Vec<String>,
}

/// The single matching predicate. `text_lower` must already be lowercased.
pub fn keyword_matches(text_lower: &str, keyword: &str) -> bool {
    text_lower.contains(&keyword.to_lowercase())
}

pub fn match_category(text_lower: &str, keywords: &[String]) -> MatchResult {
    let matched = keywords
        .iter()
        .filter(|k| keyword_matches(text_lower, k))
        .count();
    let total = keywords.len().max(1);

    MatchResult {
        matched,
        total,
        rate: matched as f64 / total as f64,
    }
}

pub fn match_all(text_lower: &str, keywords: &KeywordSet) -> CategoryMatches {
    CategoryMatches {
        skills: match_category(text_lower, &keywords.required_skills),
        tools: match_category(text_lower, &keywords.tools),
        metrics: match_category(text_lower, &keywords.metrics_keywords),
        soft: match_category(text_lower, &keywords.soft_skills),
    }
}

/// Keywords not found in `text_lower`, in input order with original casing.
pub fn compute_gaps(keywords: &[String], text_lower: &str) -> Vec<String> {
    keywords
        .iter()
        .filter(|k| !keyword_matches(text_lower, k))
        .cloned()
        .collect()
}

pub fn compute_gap_report(keywords: &KeywordSet, text_lower: &str) -> GapReport {
    GapReport {
        required_skills: compute_gaps(&keywords.required_skills, text_lower),
        tools: compute_gaps(&keywords.tools, text_lower),
        metrics_keywords: compute_gaps(&keywords.metrics_keywords, text_lower),
        soft_skills: compute_gaps(&keywords.soft_skills, text_lower),
    }
}

pub fn compute_improvements(before: &GapReport, rewritten_lower: &str) -> ImprovementReport {
    let now_present = |gaps: &[String]| -> Vec<String> {
        gaps.iter()
            .filter(|k| keyword_matches(rewritten_lower, k))
            .cloned()
            .collect()
    };

    ImprovementReport {
        required_skills_added: now_present(&before.required_skills),
        tools_added: now_present(&before.tools),
        metrics_added: now_present(&before.metrics_keywords),
        soft_skills_added: now_present(&before.soft_skills),
    }
}
