//! Readiness assessment schema, shared by the rule engine and the remote analyzer.
//!
//! Field names serialize in camelCase so both backends produce (and the remote
//! backend is parsed from) the same JSON document.

use serde::{Deserialize, Serialize};

use crate::readiness::rules::Dimension;

const MAX_OVERALL_SCORE: u32 = 10;

/// Input to every analyzer. Missing or `null` fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewSubmission {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub transcript: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub candidate_output: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub assignment: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub overall_score: OverallScore,
    #[serde(default)]
    pub key_strengths: Vec<KeyStrength>,
    #[serde(default)]
    pub areas_for_improvement: Vec<ImprovementArea>,
    #[serde(default)]
    pub ai_usage_patterns: Vec<UsagePattern>,
    pub detailed_analysis: DetailedAnalysis,
}

impl AnalysisResult {
    /// First broken range invariant, if any: overall 0–10, sub-assessments
    /// within their dimension max, exactly one usage pattern.
    pub fn range_violation(&self) -> Option<String> {
        if self.overall_score.score > MAX_OVERALL_SCORE {
            return Some(format!(
                "overallScore.score {} exceeds {MAX_OVERALL_SCORE}",
                self.overall_score.score
            ));
        }

        let detailed = &self.detailed_analysis;
        let dimensions = [
            ("toolUsage", Dimension::ToolUsage, &detailed.tool_usage),
            ("implementation", Dimension::Implementation, &detailed.implementation),
            ("understanding", Dimension::Understanding, &detailed.understanding),
        ];
        for (name, dimension, assessment) in dimensions {
            if assessment.assessment > dimension.max() {
                return Some(format!(
                    "detailedAnalysis.{name}.assessment {} exceeds {}",
                    assessment.assessment,
                    dimension.max()
                ));
            }
        }

        if self.ai_usage_patterns.len() != 1 {
            return Some(format!(
                "expected exactly one aiUsagePatterns entry, got {}",
                self.ai_usage_patterns.len()
            ));
        }

        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallScore {
    pub score: u32, // 0 – 10
    pub rationale: String,
    pub scoring_level: String,
    pub justification: String,
    /// "Yes" / "No"; requested from the remote backend, filled locally from the gate.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_usage: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyStrength {
    pub strength: String,
    pub example: String,
    pub impact: String,
    pub scoring_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementArea {
    pub area: String,
    pub current_state: String,
    pub target_level: String,
    pub recommendation: String,
    pub tools: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsagePattern {
    pub pattern: String,
    pub example: String,
    pub analysis: String,
    pub scoring_level: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetailedAnalysis {
    pub tool_usage: DimensionAssessment,
    pub implementation: DimensionAssessment,
    pub understanding: DimensionAssessment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionAssessment {
    pub assessment: u32,
    pub scoring_level: String,
    #[serde(default)]
    pub evidence: Vec<String>,
    pub impact: String,
}
