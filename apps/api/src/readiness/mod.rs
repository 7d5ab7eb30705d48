// AI-readiness scoring for interview transcripts.
// The rule engine is the deterministic core; the LLM analyzer is an optional
// remote backend producing the same AnalysisResult schema.

pub mod analyzer;
pub mod handlers;
pub mod levels;
pub mod models;
pub mod prompts;
pub mod rules;
pub mod scorer;
