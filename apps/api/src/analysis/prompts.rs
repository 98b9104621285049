// LLM prompt constants for keyword extraction and resume rewriting.
// Cross-cutting fragments come from llm_client::prompts.

/// System prompt for keyword extraction. `{json_only}` is filled from `JSON_ONLY_SYSTEM`.
pub const EXTRACTION_SYSTEM: &str = "You are an expert technical recruiter who knows how \
    applicant tracking systems screen resumes. Extract the keywords an ATS would look for \
    in a job description. {json_only}";

/// Keyword extraction prompt. Replace `{jd_text}` before sending.
pub const EXTRACTION_PROMPT_TEMPLATE: &str = r#"Extract ATS keywords from the job description below.

Return a JSON object with this EXACT schema (no extra fields):
{
  "required_skills": ["Python", "data modeling"],
  "tools": ["AWS", "Airflow"],
  "metrics_keywords": ["latency", "cost reduction"],
  "soft_skills": ["mentoring", "stakeholder communication"]
}

Rules:
- required_skills: hard requirements and core competencies the role demands.
- tools: named technologies, platforms, languages, frameworks and products.
- metrics_keywords: measurable outcomes the role is judged on (revenue, latency, uptime, conversion).
- soft_skills: non-technical competencies.
- Each item is a short phrase (1-4 words) exactly as a recruiter would search for it.
- No duplicates across or within categories. At most 15 items per category.
- Use an empty array when a category has nothing.

JOB DESCRIPTION:
{jd_text}"#;

/// System prompt for the rewrite pass. Output is plain text, not JSON.
pub const REWRITE_SYSTEM: &str = "You are an expert resume writer who optimizes resumes for \
    applicant tracking systems while keeping every statement truthful. \
    Respond with the rewritten resume as plain text only: no preamble, no commentary, \
    no markdown code fences.";

/// Rewrite prompt.
/// Replace: {no_fabrication_instruction}, {metric_instruction}, {missing_keywords_json},
///          {jd_text}, {resume_text}
pub const REWRITE_PROMPT_TEMPLATE: &str = r#"{no_fabrication_instruction}

{metric_instruction}

Rewrite the resume below so it scores well for the job description.

KEYWORDS THE CURRENT RESUME IS MISSING (work them in only where the resume supports them):
{missing_keywords_json}

FORMAT RULES:
1. Keep the original section order and every role, employer and date.
2. Write experience as bullets starting with "- ".
3. Lead each bullet with a strong verb and state the outcome; keep numbers the original gives.
4. Aim for 450-900 words in total. Cut filler before cutting substance.
5. Plain text only.

JOB DESCRIPTION:
{jd_text}

ORIGINAL RESUME:
{resume_text}"#;
