//! Readiness analyzers: pluggable, trait-based backends behind one endpoint.
//!
//! Default: `RuleBasedAnalyzer` (pure-Rust, deterministic, offline).
//! Optional: `LlmAnalyzer` (remote chat completion, falls back to the rules on failure).
//!
//! `AppState` holds an `Arc<dyn ReadinessAnalyzer>`, chosen at startup via config.

use async_trait::async_trait;
use serde::Serialize;
use tracing::warn;

use crate::errors::AppError;
use crate::llm_client::LlmClient;
use crate::readiness::models::{AnalysisResult, InterviewSubmission};
use crate::readiness::prompts::{analysis_system_prompt, build_analysis_prompt};
use crate::readiness::scorer::score_submission;

pub const RULES_BACKEND: &str = "rules";
pub const LLM_BACKEND: &str = "llm";

/// An assessment plus the backend that actually produced it.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisOutcome {
    pub analysis: AnalysisResult,
    pub backend: &'static str,
}

/// Implement this to swap backends without touching the endpoint or handler code.
#[async_trait]
pub trait ReadinessAnalyzer: Send + Sync {
    async fn analyze(
        &self,
        submission: &InterviewSubmission,
    ) -> Result<AnalysisOutcome, AppError>;

    /// Configured backend name, for startup logging.
    fn backend(&self) -> &'static str;
}

pub struct RuleBasedAnalyzer;

#[async_trait]
impl ReadinessAnalyzer for RuleBasedAnalyzer {
    async fn analyze(
        &self,
        submission: &InterviewSubmission,
    ) -> Result<AnalysisOutcome, AppError> {
        Ok(rule_based_outcome(submission))
    }

    fn backend(&self) -> &'static str {
        RULES_BACKEND
    }
}

fn rule_based_outcome(submission: &InterviewSubmission) -> AnalysisOutcome {
    AnalysisOutcome {
        analysis: score_submission(submission),
        backend: RULES_BACKEND,
    }
}

/// Remote analyzer. On any client failure it either falls back to the rule
/// engine or surfaces `AppError::Llm`, depending on `fallback_to_rules`.
pub struct LlmAnalyzer {
    pub llm: LlmClient,
    pub fallback_to_rules: bool,
}

#[async_trait]
impl ReadinessAnalyzer for LlmAnalyzer {
    async fn analyze(
        &self,
        submission: &InterviewSubmission,
    ) -> Result<AnalysisOutcome, AppError> {
        let prompt = build_analysis_prompt(
            &submission.transcript,
            &submission.candidate_output,
            &submission.assignment,
        );

        let remote = self
            .llm
            .call_json::<AnalysisResult>(&prompt, &analysis_system_prompt())
            .await
            .map_err(AppError::from)
            .and_then(accept_remote);

        match remote {
            Ok(analysis) => Ok(AnalysisOutcome {
                analysis,
                backend: LLM_BACKEND,
            }),
            Err(e) if self.fallback_to_rules => {
                warn!("Remote analysis failed, falling back to rule engine: {e}");
                Ok(rule_based_outcome(submission))
            }
            Err(e) => Err(e),
        }
    }

    fn backend(&self) -> &'static str {
        LLM_BACKEND
    }
}

/// Rejects a parsed remote reply that breaks the result's range invariants.
fn accept_remote(analysis: AnalysisResult) -> Result<AnalysisResult, AppError> {
    match analysis.range_violation() {
        Some(violation) => Err(AppError::Llm(format!(
            "remote analysis out of range: {violation}"
        ))),
        None => Ok(analysis),
    }
}
