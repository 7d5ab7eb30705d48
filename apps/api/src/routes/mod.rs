pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::readiness::handlers;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Readiness API
        .route("/api/v1/interviews/analyze", post(handlers::handle_analyze))
        .route(
            "/api/v1/interviews/analyze/local",
            post(handlers::handle_analyze_local),
        )
        .route("/api/v1/interviews/rules", get(handlers::handle_list_rules))
        // Remote connection check
        .route(
            "/api/v1/llm/test-connection",
            post(handlers::handle_test_connection),
        )
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::config::{AnalysisBackend, Config};
    use crate::llm_client::LlmClient;
    use crate::readiness::analyzer::RuleBasedAnalyzer;

    fn test_state() -> AppState {
        let config = Config {
            ai_proxy_url: "http://127.0.0.1:9/v1/chat/completions".to_string(),
            ai_proxy_token: None,
            analysis_backend: AnalysisBackend::Rules,
            llm_fallback_to_rules: true,
            port: 0,
            rust_log: "info".to_string(),
        };
        AppState {
            llm: LlmClient::new(config.ai_proxy_url.clone(), None).unwrap(),
            config,
            analyzer: Arc::new(RuleBasedAnalyzer),
        }
    }

    async fn send(request: Request<Body>) -> (StatusCode, Value) {
        let response = build_router(test_state()).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::post(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = send(Request::get("/health").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "readiness-api");
        assert_eq!(body["backend"], "rules");
    }

    #[tokio::test]
    async fn test_analyze_scenario() {
        let (status, body) = send(post_json(
            "/api/v1/interviews/analyze",
            json!({
                "transcript": "I used AI for research and used ai to create an outline",
                "candidateOutput": "Territory plan",
                "assignment": "Plan your first 90 days"
            }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "rules");
        let analysis = &body["analysis"];
        assert_eq!(analysis["overallScore"]["score"], 4);
        assert_eq!(analysis["detailedAnalysis"]["toolUsage"]["assessment"], 6);
        assert_eq!(analysis["detailedAnalysis"]["implementation"]["assessment"], 3);
        assert_eq!(analysis["detailedAnalysis"]["understanding"]["assessment"], 0);
        assert_eq!(analysis["aiUsagePatterns"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_analyze_accepts_missing_and_null_fields() {
        let (status, body) = send(post_json(
            "/api/v1/interviews/analyze",
            json!({ "candidateOutput": null }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["analysis"]["overallScore"]["score"], 2);
        assert_eq!(
            body["analysis"]["overallScore"]["scoringLevel"],
            "1-2: No AI Usage"
        );
        assert_eq!(body["analysis"]["keyStrengths"], json!([]));
    }

    #[tokio::test]
    async fn test_analyze_local_ignores_configured_backend() {
        let (status, body) = send(post_json(
            "/api/v1/interviews/analyze/local",
            json!({ "transcript": "we used an ai tool for outreach" }),
        ))
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["backend"], "rules");
        assert_eq!(body["analysis"]["overallScore"]["score"], 2);
    }

    #[tokio::test]
    async fn test_list_rules() {
        let (status, body) =
            send(Request::get("/api/v1/interviews/rules").body(Body::empty()).unwrap()).await;

        assert_eq!(status, StatusCode::OK);
        let rules = body["rules"].as_array().unwrap();
        assert_eq!(rules.len(), 11);
        assert_eq!(rules[0]["id"], "multi-use-strong");
        assert_eq!(rules[0]["dimension"], "toolUsage");
        assert_eq!(rules[0]["condition"]["kind"], "countAtLeast");
        assert_eq!(rules[0]["condition"]["min"], 3);
        assert_eq!(rules[10]["dimension"], "understanding");
    }

    #[tokio::test]
    async fn test_connection_check_requires_token() {
        let (status, body) = send(
            Request::post("/api/v1/llm/test-connection")
                .body(Body::empty())
                .unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let (status, body) =
            send(Request::get("/api/v1/nope").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
