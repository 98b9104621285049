//! Sub-scores (skills, impact, brevity), the overall blend, and the ATS keyword-coverage score.
//!
//! All scores are integers in [0, 100]. Rounding is `f64::round` (half away from zero),
//! which equals round-half-up for the non-negative values produced here.

use serde::{Deserialize, Serialize};

use crate::scoring::keywords::CategoryMatches;
use crate::scoring::signals::{content_lines, has_impact_signal, is_bullet_line, is_todo_line};

// ATS keyword-coverage weights. Sum = 7.0.
pub const ATS_WEIGHT_SKILLS: f64 = 2.0;
pub const ATS_WEIGHT_TOOLS: f64 = 1.5;
pub const ATS_WEIGHT_METRICS: f64 = 2.0;
pub const ATS_WEIGHT_SOFT: f64 = 1.0;

// Skills sub-score weights. Soft skills do not contribute.
pub const SKILLS_WEIGHT_REQUIRED: f64 = 0.6;
pub const SKILLS_WEIGHT_TOOLS: f64 = 0.25;
pub const SKILLS_WEIGHT_METRICS: f64 = 0.15;

// Overall blend weights. Sum = 1.0.
pub const OVERALL_WEIGHT_SKILLS: f64 = 0.55;
pub const OVERALL_WEIGHT_IMPACT: f64 = 0.30;
pub const OVERALL_WEIGHT_BREVITY: f64 = 0.15;

/// Per-line penalty for "TODO: add metric" placeholders.
const TODO_PENALTY: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubScores {
    pub skills: u32,
    pub impact: u32,
    pub brevity: u32,
}

/// `max(0, min(100, round(x)))`
pub fn clamp_score(x: f64) -> u32 {
    if x.is_nan() {
        return 0;
    }
    x.round().clamp(0.0, 100.0) as u32
}

/// Weighted keyword coverage across all four categories, 0–100.
pub fn compute_weighted_match(matches: &CategoryMatches) -> u32 {
    let weight_sum = ATS_WEIGHT_SKILLS + ATS_WEIGHT_TOOLS + ATS_WEIGHT_METRICS + ATS_WEIGHT_SOFT;
    let weighted = ATS_WEIGHT_SKILLS * matches.skills.rate
        + ATS_WEIGHT_TOOLS * matches.tools.rate
        + ATS_WEIGHT_METRICS * matches.metrics.rate
        + ATS_WEIGHT_SOFT * matches.soft.rate;

    clamp_score(weighted / weight_sum * 100.0)
}

pub fn compute_skills_score(rate_required: f64, rate_tools: f64, rate_metrics: f64) -> u32 {
    clamp_score(
        100.0
            * (SKILLS_WEIGHT_REQUIRED * rate_required
                + SKILLS_WEIGHT_TOOLS * rate_tools
                + SKILLS_WEIGHT_METRICS * rate_metrics),
    )
}

/// Rewards lines carrying quantified evidence; penalises unresolved metric placeholders.
pub fn compute_impact_score(text: &str) -> u32 {
    let lines = content_lines(text);
    let signal_lines = lines.iter().filter(|l| has_impact_signal(l)).count();
    let todo_lines = lines.iter().filter(|l| is_todo_line(l)).count() as u32;

    let signal_ratio = if lines.is_empty() {
        0.0
    } else {
        signal_lines as f64 / lines.len() as f64
    };

    let base: u32 = if signal_ratio >= 0.20 {
        90
    } else if signal_ratio >= 0.10 {
        75
    } else if signal_ratio > 0.0 {
        60
    } else {
        40
    };

    let penalty = todo_lines.saturating_mul(TODO_PENALTY);
    clamp_score(base as f64 - penalty as f64)
}

/// Piecewise word-count curve before the bullet bonus. Can go negative for very long text.
pub fn brevity_base(word_count: usize) -> f64 {
    let w = word_count as f64;
    if word_count <= 450 {
        85.0
    } else if word_count <= 900 {
        100.0
    } else if word_count <= 1300 {
        80.0 - ((w - 900.0) / 400.0) * 20.0
    } else {
        60.0 - ((w - 1300.0) / 700.0) * 30.0
    }
}

pub fn bullet_bonus(bullet_ratio: f64) -> f64 {
    if bullet_ratio >= 0.5 {
        10.0
    } else if bullet_ratio >= 0.35 {
        5.0
    } else {
        0.0
    }
}

pub fn compute_brevity_score(text: &str) -> u32 {
    let word_count = text.split_whitespace().count();

    let lines = content_lines(text);
    let bullet_lines = lines.iter().filter(|l| is_bullet_line(l)).count();
    let bullet_ratio = if lines.is_empty() {
        0.0
    } else {
        bullet_lines as f64 / lines.len() as f64
    };

    clamp_score(brevity_base(word_count) + bullet_bonus(bullet_ratio))
}

pub fn compute_overall(skills: u32, impact: u32, brevity: u32) -> u32 {
    clamp_score(
        OVERALL_WEIGHT_SKILLS * skills as f64
            + OVERALL_WEIGHT_IMPACT * impact as f64
            + OVERALL_WEIGHT_BREVITY * brevity as f64,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::keywords::MatchResult;

    fn rate(r: f64) -> MatchResult {
        MatchResult {
            matched: 0,
            total: 1,
            rate: r,
        }
    }

    fn matches(skills: f64, tools: f64, metrics: f64, soft: f64) -> CategoryMatches {
        CategoryMatches {
            skills: rate(skills),
            tools: rate(tools),
            metrics: rate(metrics),
            soft: rate(soft),
        }
    }

    /// `lines` lines of `words_per_line` tokens; the first `bullets` start with "- ".
    /// The "-" marker counts as one whitespace token.
    fn make_text(lines: usize, words_per_line: usize, bullets: usize) -> String {
        (0..lines)
            .map(|i| {
                if i < bullets {
                    format!("- {}", vec!["word"; words_per_line - 1].join(" "))
                } else {
                    vec!["word"; words_per_line].join(" ")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_weights_sum() {
        let ats = ATS_WEIGHT_SKILLS + ATS_WEIGHT_TOOLS + ATS_WEIGHT_METRICS + ATS_WEIGHT_SOFT;
        assert!((ats - 7.0).abs() < f64::EPSILON);
        let overall = OVERALL_WEIGHT_SKILLS + OVERALL_WEIGHT_IMPACT + OVERALL_WEIGHT_BREVITY;
        assert!((overall - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_weighted_match_full_coverage_is_100() {
        assert_eq!(compute_weighted_match(&matches(1.0, 1.0, 1.0, 1.0)), 100);
    }

    #[test]
    fn test_weighted_match_zero_coverage_is_0() {
        assert_eq!(compute_weighted_match(&matches(0.0, 0.0, 0.0, 0.0)), 0);
    }

    #[test]
    fn test_weighted_match_mixed() {
        // (2*0.5 + 1.5*1.0 + 0 + 0) / 7 * 100 = 35.71 → 36
        assert_eq!(compute_weighted_match(&matches(0.5, 1.0, 0.0, 0.0)), 36);
        // soft only: 1/7 * 100 = 14.29 → 14
        assert_eq!(compute_weighted_match(&matches(0.0, 0.0, 0.0, 1.0)), 14);
    }

    #[test]
    fn test_skills_score_excludes_soft() {
        assert_eq!(compute_skills_score(1.0, 1.0, 1.0), 100);
        assert_eq!(compute_skills_score(0.0, 0.0, 0.0), 0);
        // 100 * (0.6*0.5 + 0.25*1.0) = 55
        assert_eq!(compute_skills_score(0.5, 1.0, 0.0), 55);
    }

    #[test]
    fn test_impact_no_signals_is_40() {
        let text = "Led the platform team\nWorked with product\nOwned the roadmap";
        assert_eq!(compute_impact_score(text), 40);
    }

    #[test]
    fn test_impact_empty_text_is_40() {
        assert_eq!(compute_impact_score(""), 40);
        assert_eq!(compute_impact_score("\n  \n"), 40);
    }

    #[test]
    fn test_impact_thresholds() {
        let plain = "Collaborated with product";
        let signal = "Cut latency by 40%";

        // 1 of 5 = 0.20 → 90
        let text = [signal, plain, plain, plain, plain].join("\n");
        assert_eq!(compute_impact_score(&text), 90);

        // 1 of 10 = 0.10 → 75
        let mut lines = vec![signal];
        lines.extend(std::iter::repeat(plain).take(9));
        assert_eq!(compute_impact_score(&lines.join("\n")), 75);

        // 1 of 20 = 0.05 → 60
        let mut lines = vec![signal];
        lines.extend(std::iter::repeat(plain).take(19));
        assert_eq!(compute_impact_score(&lines.join("\n")), 60);
    }

    #[test]
    fn test_impact_todo_penalty() {
        let text = "- Shipped billing v2 in 3 weeks\n- Migrated auth (TODO: add metric)\n- Owned on-call (todo: add metric)";
        // 1/3 signal → 90, minus 2 * 3
        assert_eq!(compute_impact_score(text), 84);
    }

    #[test]
    fn test_impact_penalty_floors_at_zero() {
        let text = vec!["todo: add metric"; 40].join("\n");
        assert_eq!(compute_impact_score(&text), 0);
    }

    #[test]
    fn test_brevity_short_with_bullets() {
        // 10 lines × 30 tokens = 300 words, 6/10 bullets → 85 + 10
        let text = make_text(10, 30, 6);
        assert_eq!(text.split_whitespace().count(), 300);
        assert_eq!(compute_brevity_score(&text), 95);
    }

    #[test]
    fn test_brevity_long_text() {
        // 60 - (200/700)*30 = 51.43 → 51
        let text = make_text(1, 1500, 0);
        assert_eq!(compute_brevity_score(&text), 51);
    }

    #[test]
    fn test_brevity_sweet_spot_and_bonus_clamped() {
        // 600 words, all bullets: 100 + 10 → clamped to 100
        let text = make_text(20, 30, 20);
        assert_eq!(compute_brevity_score(&text), 100);
    }

    #[test]
    fn test_brevity_medium_bonus() {
        // 300 words, 4/10 bullets → 85 + 5
        let text = make_text(10, 30, 4);
        assert_eq!(compute_brevity_score(&text), 90);
    }

    #[test]
    fn test_bullet_bonus_thresholds_are_inclusive() {
        // 20 lines × 10 tokens = 200 words, base 85
        assert_eq!(compute_brevity_score(&make_text(20, 10, 10)), 95);
        assert_eq!(compute_brevity_score(&make_text(20, 10, 7)), 90);
        assert_eq!(compute_brevity_score(&make_text(20, 10, 6)), 85);

        assert_eq!(bullet_bonus(0.5), 10.0);
        assert_eq!(bullet_bonus(0.35), 5.0);
        assert_eq!(bullet_bonus(0.3499), 0.0);
    }

    #[test]
    fn test_brevity_interpolation_band() {
        assert!((brevity_base(900) - 100.0).abs() < f64::EPSILON);
        assert!((brevity_base(901) - 79.95).abs() < 1e-9);
        assert!((brevity_base(1100) - 70.0).abs() < 1e-9);
        assert!((brevity_base(1300) - 60.0).abs() < 1e-9);
        assert!((brevity_base(450) - 85.0).abs() < f64::EPSILON);
        assert!((brevity_base(451) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_brevity_extremely_long_text_floors_at_zero() {
        assert!(brevity_base(5000) < 0.0);
        let text = make_text(1, 5000, 0);
        assert_eq!(compute_brevity_score(&text), 0);
    }

    #[test]
    fn test_brevity_empty_text() {
        assert_eq!(compute_brevity_score(""), 85);
    }

    #[test]
    fn test_overall_rounds_half_up() {
        // 44 + 18 + 13.5 = 75.5 → 76
        assert_eq!(compute_overall(80, 60, 90), 76);
    }

    #[test]
    fn test_overall_bounds() {
        assert_eq!(compute_overall(0, 0, 0), 0);
        assert_eq!(compute_overall(100, 100, 100), 100);
    }

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(-12.0), 0);
        assert_eq!(clamp_score(140.0), 100);
        assert_eq!(clamp_score(2.5), 3);
        assert_eq!(clamp_score(2.4999), 2);
        assert_eq!(clamp_score(f64::NAN), 0);
    }

    #[test]
    fn test_scores_are_idempotent() {
        let text = make_text(12, 25, 7);
        assert_eq!(compute_brevity_score(&text), compute_brevity_score(&text));
        assert_eq!(compute_impact_score(&text), compute_impact_score(&text));
    }
}
