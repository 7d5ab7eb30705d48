use anyhow::{bail, Context, Result};

const DEFAULT_AI_PROXY_URL: &str = "https://proxy.shopify.ai/v1/chat/completions";

/// Which analyzer backs `POST /api/v1/interviews/analyze`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisBackend {
    Rules,
    Llm,
}

impl AnalysisBackend {
    fn parse(raw: &str) -> Result<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "rules" => Ok(AnalysisBackend::Rules),
            "llm" => Ok(AnalysisBackend::Llm),
            other => bail!("ANALYSIS_BACKEND must be 'rules' or 'llm', got '{other}'"),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisBackend::Rules => "rules",
            AnalysisBackend::Llm => "llm",
        }
    }
}

/// Application configuration loaded from environment variables.
/// Fails at startup on malformed values or an `llm` backend without a token.
#[derive(Debug, Clone)]
pub struct Config {
    pub ai_proxy_url: String,
    pub ai_proxy_token: Option<String>,
    pub analysis_backend: AnalysisBackend,
    pub llm_fallback_to_rules: bool,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup so parsing stays testable
    /// without touching the process environment.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let ai_proxy_token = lookup("AI_PROXY_TOKEN").filter(|t| !t.trim().is_empty());

        let analysis_backend = match lookup("ANALYSIS_BACKEND") {
            Some(raw) => AnalysisBackend::parse(&raw)?,
            None => AnalysisBackend::Rules,
        };

        if analysis_backend == AnalysisBackend::Llm && ai_proxy_token.is_none() {
            bail!("ANALYSIS_BACKEND=llm requires AI_PROXY_TOKEN to be set");
        }

        let llm_fallback_to_rules = match lookup("LLM_FALLBACK_TO_RULES") {
            Some(raw) => raw
                .trim()
                .parse::<bool>()
                .context("LLM_FALLBACK_TO_RULES must be 'true' or 'false'")?,
            None => true,
        };

        Ok(Config {
            ai_proxy_url: lookup("AI_PROXY_URL")
                .unwrap_or_else(|| DEFAULT_AI_PROXY_URL.to_string()),
            ai_proxy_token,
            analysis_backend,
            llm_fallback_to_rules,
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
