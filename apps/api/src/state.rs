use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::readiness::analyzer::ReadinessAnalyzer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub config: Config,
    /// Pluggable analyzer. Default: RuleBasedAnalyzer. Swap via ANALYSIS_BACKEND env.
    pub analyzer: Arc<dyn ReadinessAnalyzer>,
}
