// Shared prompt fragments.
// Each caller keeps its own prompts.rs; only cross-cutting instructions live here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps rewrites grounded in the candidate's own resume.
pub const NO_FABRICATION_INSTRUCTION: &str = "\
    CRITICAL: Never invent employers, titles, dates, degrees, certifications or numbers. \
    Only rephrase, reorder and emphasise what the original resume already states. \
    A job-description keyword may be added only where the original resume supports it.";

/// The placeholder must match what the impact score penalises.
pub const METRIC_PLACEHOLDER_INSTRUCTION: &str = "\
    When a bullet would benefit from a number the resume does not provide, \
    do NOT make one up: append the exact marker `TODO: add metric` to that bullet instead.";
