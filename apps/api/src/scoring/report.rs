//! Before/after scoring pipeline and the report handed to persistence and rendering.

use serde::{Deserialize, Serialize};

use crate::scoring::keywords::{
    compute_gap_report, compute_improvements, match_all, CategoryMatches, GapReport,
    ImprovementReport, KeywordSet,
};
use crate::scoring::subscores::{
    compute_brevity_score, compute_impact_score, compute_overall, compute_skills_score,
    compute_weighted_match, SubScores,
};

/// Scores of one candidate text against a keyword set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSnapshot {
    pub subscores: SubScores,
    pub overall: u32,
    pub matches: CategoryMatches,
}

/// Full output of one analysis. `*_after` fields and `improvements` are only
/// present once a rewrite exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub ats_score: u32,
    pub overall_before: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_after: Option<u32>,
    pub subscores_before: SubScores,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscores_after: Option<SubScores>,
    pub gaps: GapReport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub improvements: Option<ImprovementReport>,
}

pub fn score_snapshot(text: &str, keywords: &KeywordSet) -> ScoreSnapshot {
    let text_lower = text.to_lowercase();
    let matches = match_all(&text_lower, keywords);

    let subscores = SubScores {
        skills: compute_skills_score(
            matches.skills.rate,
            matches.tools.rate,
            matches.metrics.rate,
        ),
        impact: compute_impact_score(text),
        brevity: compute_brevity_score(text),
    };
    let overall = compute_overall(subscores.skills, subscores.impact, subscores.brevity);

    ScoreSnapshot {
        subscores,
        overall,
        matches,
    }
}

/// Scores `resume_text` and, when given, `rewritten_text` against the same keywords.
///
/// The "after" snapshot is recomputed from scratch; nothing forces it to be
/// higher than "before".
pub fn analyze(
    resume_text: &str,
    keywords: &KeywordSet,
    rewritten_text: Option<&str>,
) -> AnalysisReport {
    let before = score_snapshot(resume_text, keywords);
    let gaps = compute_gap_report(keywords, &resume_text.to_lowercase());

    let (after, improvements) = match rewritten_text {
        Some(rewritten) => {
            let after = score_snapshot(rewritten, keywords);
            let improvements = compute_improvements(&gaps, &rewritten.to_lowercase());
            (Some(after), Some(improvements))
        }
        None => (None, None),
    };

    AnalysisReport {
        ats_score: compute_weighted_match(&before.matches),
        overall_before: before.overall,
        overall_after: after.map(|s| s.overall),
        subscores_before: before.subscores,
        subscores_after: after.map(|s| s.subscores),
        gaps,
        improvements,
    }
}
