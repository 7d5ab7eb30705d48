//! Readiness Scorer: deterministic, offline substitute for the remote analyzer.
//!
//! Pure function of its inputs: lower-case, gate, fold the rule table, combine,
//! then assemble the narrative from fixed copy. Total over every string input.

use tracing::debug;

use crate::readiness::levels::{scoring_level, TARGET_LEVEL};
use crate::readiness::models::{
    AnalysisResult, DetailedAnalysis, DimensionAssessment, ImprovementArea, InterviewSubmission,
    KeyStrength, OverallScore, UsagePattern,
};
use crate::readiness::rules::{ai_mention_gate, Dimension, DimensionTally, Tally};

const GATE_FAILURE_SCORE: u32 = 2;
const STRONG_TOOL_USAGE_THRESHOLD: u32 = 6;
const EFFECTIVE_IMPLEMENTATION_THRESHOLD: u32 = 4;

// ────────────────────────────────────────────────────────────────────────────
// Canned copy
// ────────────────────────────────────────────────────────────────────────────

mod copy {
    pub const NO_USAGE_RATIONALE: &str = "No AI usage demonstrated in the response";
    pub const NO_USAGE_JUSTIFICATION: &str =
        "Candidate did not mention or demonstrate any AI usage";
    pub const NO_TOOL_USAGE_EVIDENCE: &str = "No AI usage demonstrated";
    pub const NO_IMPLEMENTATION_EVIDENCE: &str = "No AI implementation demonstrated";
    pub const NO_UNDERSTANDING_EVIDENCE: &str = "No AI understanding demonstrated";

    pub const OVERALL_RATIONALE: &str =
        "Overall AI readiness score based on tool usage, implementation, and understanding";

    pub const TOOL_USAGE_AREA: &str = "AI Tool Usage";
    pub const IMPLEMENTATION_AREA: &str = "AI Implementation";
    pub const IMPLEMENTATION_RECOMMENDATION: &str =
        "Develop structured approach to AI implementation";
    pub const IMPLEMENTATION_TOOLS: &str = "AI workflow templates, automation tools";
}

pub fn score_submission(submission: &InterviewSubmission) -> AnalysisResult {
    score(
        &submission.transcript,
        &submission.candidate_output,
        &submission.assignment,
    )
}

/// Scores one interview. `candidate_output` and `assignment` are part of the
/// contract but no rule reads them yet.
pub fn score(transcript: &str, candidate_output: &str, assignment: &str) -> AnalysisResult {
    debug!(
        "Scoring transcript ({} chars), candidate output ({} chars), assignment ({} chars)",
        transcript.len(),
        candidate_output.len(),
        assignment.len()
    );

    let lowered = transcript.to_lowercase();

    if !ai_mention_gate(&lowered) {
        debug!("AI-mention gate failed; returning minimum result");
        return no_usage_result();
    }

    let tally = Tally::from_transcript(&lowered);
    let overall = tally.overall();

    debug!(
        "Gate passed: tool_usage={}, implementation={}, understanding={}, overall={}",
        tally.tool_usage.score, tally.implementation.score, tally.understanding.score, overall
    );

    assemble(&tally, overall)
}

fn assemble(tally: &Tally, overall: u32) -> AnalysisResult {
    let tool_usage = tally.tool_usage.score;
    let implementation = tally.implementation.score;

    let mut key_strengths = Vec::with_capacity(2);
    let mut areas_for_improvement = Vec::with_capacity(1);

    if tool_usage >= STRONG_TOOL_USAGE_THRESHOLD {
        key_strengths.push(KeyStrength {
            strength: "Strong AI Tool Usage".to_string(),
            example: "Demonstrated effective use of AI tools in sales process".to_string(),
            impact: "Shows potential for AI-driven sales improvement".to_string(),
            scoring_level: scoring_level(tool_usage).to_string(),
        });
    } else {
        key_strengths.push(KeyStrength {
            strength: "Basic AI Tool Usage".to_string(),
            example: "Mentioned using AI for specific tasks".to_string(),
            impact: "Shows awareness of AI capabilities".to_string(),
            scoring_level: scoring_level(tool_usage).to_string(),
        });
    }

    if implementation >= EFFECTIVE_IMPLEMENTATION_THRESHOLD {
        key_strengths.push(KeyStrength {
            strength: "Effective AI Implementation".to_string(),
            example: "Showed clear process for AI integration".to_string(),
            impact: "Demonstrates ability to leverage AI for sales efficiency".to_string(),
            scoring_level: scoring_level(implementation).to_string(),
        });
    } else {
        areas_for_improvement.push(implementation_area("Limited AI implementation demonstrated"));
    }

    AnalysisResult {
        overall_score: OverallScore {
            score: overall,
            rationale: copy::OVERALL_RATIONALE.to_string(),
            scoring_level: scoring_level(overall).to_string(),
            justification: format!(
                "Scored {overall}/10 based on comprehensive analysis of AI readiness indicators"
            ),
            ai_usage: Some("Yes".to_string()),
        },
        key_strengths,
        areas_for_improvement,
        ai_usage_patterns: vec![UsagePattern {
            pattern: copy::TOOL_USAGE_AREA.to_string(),
            example: "Explicitly mentioned using AI tools".to_string(),
            analysis: "Demonstrates awareness and application of AI in sales process".to_string(),
            scoring_level: scoring_level(tool_usage).to_string(),
        }],
        detailed_analysis: DetailedAnalysis {
            tool_usage: assessment_from(Dimension::ToolUsage, &tally.tool_usage),
            implementation: assessment_from(Dimension::Implementation, &tally.implementation),
            understanding: assessment_from(Dimension::Understanding, &tally.understanding),
        },
    }
}

fn assessment_from(dimension: Dimension, tally: &DimensionTally) -> DimensionAssessment {
    DimensionAssessment {
        assessment: tally.score,
        scoring_level: scoring_level(tally.score).to_string(),
        evidence: tally.evidence.iter().map(|e| e.to_string()).collect(),
        impact: dimension.impact().to_string(),
    }
}

fn implementation_area(current_state: &str) -> ImprovementArea {
    ImprovementArea {
        area: copy::IMPLEMENTATION_AREA.to_string(),
        current_state: current_state.to_string(),
        target_level: TARGET_LEVEL.to_string(),
        recommendation: copy::IMPLEMENTATION_RECOMMENDATION.to_string(),
        tools: copy::IMPLEMENTATION_TOOLS.to_string(),
    }
}

fn zero_assessment(dimension: Dimension, evidence: &str) -> DimensionAssessment {
    DimensionAssessment {
        assessment: 0,
        scoring_level: scoring_level(0).to_string(),
        evidence: vec![evidence.to_string()],
        impact: dimension.impact().to_string(),
    }
}

/// Fixed minimum result for transcripts that fail the AI-mention gate.
fn no_usage_result() -> AnalysisResult {
    AnalysisResult {
        overall_score: OverallScore {
            score: GATE_FAILURE_SCORE,
            rationale: copy::NO_USAGE_RATIONALE.to_string(),
            scoring_level: scoring_level(GATE_FAILURE_SCORE).to_string(),
            justification: copy::NO_USAGE_JUSTIFICATION.to_string(),
            ai_usage: Some("No".to_string()),
        },
        key_strengths: vec![],
        areas_for_improvement: vec![
            ImprovementArea {
                area: copy::TOOL_USAGE_AREA.to_string(),
                current_state: "No AI tool usage demonstrated".to_string(),
                target_level: TARGET_LEVEL.to_string(),
                recommendation: "Start incorporating AI tools into daily sales activities"
                    .to_string(),
                tools: "ChatGPT, Claude, Sales AI assistants".to_string(),
            },
            implementation_area("No AI implementation demonstrated"),
        ],
        ai_usage_patterns: vec![UsagePattern {
            pattern: copy::TOOL_USAGE_AREA.to_string(),
            example: "No explicit AI tool usage".to_string(),
            analysis: "No demonstration of AI awareness or application".to_string(),
            scoring_level: scoring_level(GATE_FAILURE_SCORE).to_string(),
        }],
        detailed_analysis: DetailedAnalysis {
            tool_usage: zero_assessment(Dimension::ToolUsage, copy::NO_TOOL_USAGE_EVIDENCE),
            implementation: zero_assessment(
                Dimension::Implementation,
                copy::NO_IMPLEMENTATION_EVIDENCE,
            ),
            understanding: zero_assessment(
                Dimension::Understanding,
                copy::NO_UNDERSTANDING_EVIDENCE,
            ),
        },
    }
}
