// Resume analysis service: keyword extraction, preview scoring, rewrite, report lookup.
// All LLM calls go through llm_client; all scoring goes through the scoring engine.

pub mod extractor;
pub mod handlers;
pub mod prompts;
pub mod rewriter;
pub mod service;
pub mod upload;
