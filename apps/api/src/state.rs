use std::sync::Arc;

use crate::analysis::extractor::KeywordExtractor;
use crate::analysis::rewriter::ResumeRewriter;
use crate::config::Config;
use crate::reports::ReportStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// JD → keyword set. Default: LlmKeywordExtractor.
    pub extractor: Arc<dyn KeywordExtractor>,
    /// Default: LlmResumeRewriter.
    pub rewriter: Arc<dyn ResumeRewriter>,
    pub reports: Arc<dyn ReportStore>,
}
