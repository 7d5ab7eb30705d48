mod config;
mod errors;
mod llm_client;
mod readiness;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{AnalysisBackend, Config};
use crate::llm_client::LlmClient;
use crate::readiness::analyzer::{LlmAnalyzer, ReadinessAnalyzer, RuleBasedAnalyzer};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Readiness API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client (token presence only; never log the token)
    let llm = LlmClient::new(config.ai_proxy_url.clone(), config.ai_proxy_token.clone())
        .context("Failed to build HTTP client")?;
    info!(
        "LLM client initialized (model: {}, endpoint: {}, token present: {})",
        llm_client::MODEL,
        config.ai_proxy_url,
        llm.has_token()
    );

    // Initialize analyzer (RuleBasedAnalyzer by default; swap via ANALYSIS_BACKEND)
    let analyzer: Arc<dyn ReadinessAnalyzer> = match config.analysis_backend {
        AnalysisBackend::Rules => Arc::new(RuleBasedAnalyzer),
        AnalysisBackend::Llm => Arc::new(LlmAnalyzer {
            llm: llm.clone(),
            fallback_to_rules: config.llm_fallback_to_rules,
        }),
    };
    info!(
        "Analyzer backend: {} (fallback to rules: {})",
        analyzer.backend(),
        config.llm_fallback_to_rules
    );

    let state = AppState {
        llm,
        config: config.clone(),
        analyzer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
