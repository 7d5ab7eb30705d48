// All LLM prompt constants for the readiness analyzer.
// Reuses cross-cutting fragments from llm_client::prompts.

use crate::llm_client::prompts::JSON_ONLY_INSTRUCTION;

/// Role framing for the remote analyzer. Combined with `JSON_ONLY_INSTRUCTION`.
pub const ANALYSIS_SYSTEM_ROLE: &str = "You are an expert interviewer analyzing AI readiness \
    for sales roles. Your task is to evaluate how effectively candidates leverage AI tools \
    in their sales process.";

/// Analysis prompt template.
/// Replace: {assignment}, {transcript}, {candidate_output}
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"AI Interview Analysis
=====================

Role: Expert interviewer analyzing AI readiness for sales roles

Context:
- Primary focus: evaluate if and how the candidate leverages AI tools in their sales process
- Secondary focus: quality of AI implementation and understanding
- The candidate must explicitly mention AI tools or usage to score above 4

Scoring Guidelines:
9-10: Exceptional AI Integration
   - Explicitly mentions using AI tools (e.g. GPT, Claude, other AI assistants)
   - Demonstrates deep understanding of AI capabilities
   - Shows innovative and creative use of AI in sales workflows
   - Provides specific examples of AI usage
   - Explains how AI improved their sales process

7-8: Strong AI Usage
   - Clearly mentions using AI tools
   - Shows good understanding of AI capabilities
   - Provides examples of AI implementation
   - Explains AI usage in their process
   - Demonstrates consistent use of AI

5-6: Basic AI Usage
   - Mentions AI tools but lacks depth
   - Basic implementation of AI
   - Limited explanation of AI usage
   - Some examples of AI application

3-4: Limited AI Usage
   - Minimal or vague mention of AI
   - No specific AI tools mentioned
   - Unclear how AI was used
   - Relies heavily on manual processes

1-2: No AI Usage
   - No mention of AI tools or usage
   - Manual approach to all tasks
   - Missed opportunities for AI automation

Evaluation Criteria:
1. AI Tool Usage (weight 0.5): explicit mention of tools, specific examples, workflow integration
2. AI Implementation (weight 0.3): quality and efficiency of usage, AI-assisted outputs
3. AI Understanding (weight 0.2): capabilities, limitations, tool selection rationale

Assignment: {assignment}

Interview Transcript: {transcript}

Candidate Output: {candidate_output}

Return a JSON object with this EXACT schema:
{
  "overallScore": {
    "score": 0,
    "rationale": "",
    "scoringLevel": "",
    "justification": "",
    "aiUsage": "Yes/No"
  },
  "keyStrengths": [
    {"strength": "", "example": "", "impact": "", "scoringLevel": ""}
  ],
  "areasForImprovement": [
    {"area": "", "currentState": "", "targetLevel": "", "recommendation": "", "tools": ""}
  ],
  "aiUsagePatterns": [
    {"pattern": "", "example": "", "analysis": "", "scoringLevel": ""}
  ],
  "detailedAnalysis": {
    "toolUsage": {"assessment": 0, "scoringLevel": "", "evidence": [""], "impact": ""},
    "implementation": {"assessment": 0, "scoringLevel": "", "evidence": [""], "impact": ""},
    "understanding": {"assessment": 0, "scoringLevel": "", "evidence": [""], "impact": ""}
  }
}

All scores are integers. scoringLevel values must be one of the five guideline labels above."#;

pub fn analysis_system_prompt() -> String {
    format!("{ANALYSIS_SYSTEM_ROLE} {JSON_ONLY_INSTRUCTION}")
}

/// Fills the analysis template. The transcript is substituted last so that
/// placeholder-looking text inside the other fields is never re-expanded into it.
pub fn build_analysis_prompt(transcript: &str, candidate_output: &str, assignment: &str) -> String {
    let (head, tail) = ANALYSIS_PROMPT_TEMPLATE
        .split_once("{transcript}")
        .unwrap_or((ANALYSIS_PROMPT_TEMPLATE, ""));
    let head = head.replace("{assignment}", assignment);
    let tail = tail.replace("{candidate_output}", candidate_output);
    format!("{head}{transcript}{tail}")
}
