//! Axum route handlers for the readiness API.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::AppError;
use crate::readiness::analyzer::{AnalysisOutcome, ReadinessAnalyzer, RuleBasedAnalyzer};
use crate::readiness::models::InterviewSubmission;
use crate::readiness::rules::{Rule, RULES};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RulesResponse {
    pub rules: &'static [Rule],
}

#[derive(Debug, Serialize)]
pub struct ConnectionTestResponse {
    pub status: &'static str,
    pub reply: String,
}

/// POST /api/v1/interviews/analyze
///
/// Scores a submission with the configured analyzer. Empty fields are valid
/// and simply fail the AI-mention gate.
pub async fn handle_analyze(
    State(state): State<AppState>,
    Json(submission): Json<InterviewSubmission>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let outcome = state.analyzer.analyze(&submission).await?;
    Ok(Json(outcome))
}

/// POST /api/v1/interviews/analyze/local
///
/// Always uses the rule engine, regardless of the configured backend.
pub async fn handle_analyze_local(
    Json(submission): Json<InterviewSubmission>,
) -> Result<Json<AnalysisOutcome>, AppError> {
    let outcome = RuleBasedAnalyzer.analyze(&submission).await?;
    Ok(Json(outcome))
}

/// GET /api/v1/interviews/rules
pub async fn handle_list_rules() -> Json<RulesResponse> {
    Json(RulesResponse { rules: RULES })
}

/// POST /api/v1/llm/test-connection
pub async fn handle_test_connection(
    State(state): State<AppState>,
) -> Result<Json<ConnectionTestResponse>, AppError> {
    if !state.llm.has_token() {
        return Err(AppError::Validation("AI_PROXY_TOKEN is not configured".to_string()));
    }

    let reply = state.llm.test_connection().await?;

    Ok(Json(ConnectionTestResponse { status: "ok", reply }))
}
