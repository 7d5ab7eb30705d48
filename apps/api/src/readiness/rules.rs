//! AI-mention gate and the data-driven rule table.
//!
//! Every rule is a literal substring test on the lower-cased transcript. Rules
//! never look at each other; the table order only fixes evidence order.

use serde::Serialize;

/// Any of these opens the gate.
pub const AI_MARKERS: &[&str] = &[
    " ai ", // space-padded so "ai" inside other words does not count
    "artificial intelligence",
    "chatgpt",
    "claude",
    "prompt",
    "gpt",
];

/// Generic mentions. Any of these closes the gate, even when a marker matched.
pub const GENERIC_MENTIONS: &[&str] = &["ai as a service", "ai assistant", "ai tool"];

const MULTI_USE_PHRASES: &[&str] = &["used ai for", "used ai to", "had ai create"];

const BASE_TOOL_USAGE: u32 = 3;
const BASE_TOOL_USAGE_EVIDENCE: &str = "Explicitly mentioned using AI tools";

/// Step 1: does the transcript credit any AI usage at all?
pub fn ai_mention_gate(lowered: &str) -> bool {
    contains_any(lowered, AI_MARKERS) && !contains_any(lowered, GENERIC_MENTIONS)
}

fn contains_any(lowered: &str, patterns: &[&str]) -> bool {
    patterns.iter().any(|p| lowered.contains(p))
}

/// Non-overlapping occurrences, summed across patterns.
fn occurrences(lowered: &str, patterns: &[&str]) -> usize {
    patterns.iter().map(|p| lowered.matches(p).count()).sum()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Dimension {
    ToolUsage,
    Implementation,
    Understanding,
}

impl Dimension {
    pub const ALL: [Dimension; 3] = [
        Dimension::ToolUsage,
        Dimension::Implementation,
        Dimension::Understanding,
    ];

    /// Composite weight in tenths (0.5 / 0.3 / 0.2).
    pub fn weight_tenths(&self) -> u32 {
        match self {
            Dimension::ToolUsage => 5,
            Dimension::Implementation => 3,
            Dimension::Understanding => 2,
        }
    }

    pub fn max(&self) -> u32 {
        match self {
            Dimension::ToolUsage => 8,
            Dimension::Implementation => 6,
            Dimension::Understanding => 4,
        }
    }

    pub fn impact(&self) -> &'static str {
        match self {
            Dimension::ToolUsage => "Critical for effective AI integration in sales",
            Dimension::Implementation => "Essential for successful AI adoption",
            Dimension::Understanding => "Important for sustainable AI usage",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Condition {
    ContainsAny {
        patterns: &'static [&'static str],
    },
    CountAtLeast {
        patterns: &'static [&'static str],
        min: usize,
    },
    CountExactly {
        patterns: &'static [&'static str],
        count: usize,
    },
}

impl Condition {
    pub fn matches(&self, lowered: &str) -> bool {
        match *self {
            Condition::ContainsAny { patterns } => contains_any(lowered, patterns),
            Condition::CountAtLeast { patterns, min } => occurrences(lowered, patterns) >= min,
            Condition::CountExactly { patterns, count } => occurrences(lowered, patterns) == count,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Rule {
    pub id: &'static str,
    pub condition: Condition,
    pub dimension: Dimension,
    pub delta: u32,
    pub evidence: &'static str,
}

/// Folded only after the gate has passed.
pub const RULES: &[Rule] = &[
    Rule {
        id: "multi-use-strong",
        condition: Condition::CountAtLeast {
            patterns: MULTI_USE_PHRASES,
            min: 3,
        },
        dimension: Dimension::ToolUsage,
        delta: 3,
        evidence: "Demonstrated comprehensive AI usage across multiple tasks",
    },
    Rule {
        id: "multi-use-moderate",
        condition: Condition::CountExactly {
            patterns: MULTI_USE_PHRASES,
            count: 2,
        },
        dimension: Dimension::ToolUsage,
        delta: 2,
        evidence: "Demonstrated multiple AI usage examples",
    },
    Rule {
        id: "active-use",
        condition: Condition::ContainsAny {
            patterns: &["utilizing ai", "using ai"],
        },
        dimension: Dimension::ToolUsage,
        delta: 1,
        evidence: "Demonstrated active use of AI in workflow",
    },
    Rule {
        id: "prompt-literacy",
        condition: Condition::ContainsAny {
            patterns: &["prompt", "prompting"],
        },
        dimension: Dimension::ToolUsage,
        delta: 1,
        evidence: "Showed understanding of prompt engineering",
    },
    Rule {
        id: "research-use",
        condition: Condition::ContainsAny {
            patterns: &["research"],
        },
        dimension: Dimension::ToolUsage,
        delta: 1,
        evidence: "Used AI for research and analysis",
    },
    Rule {
        id: "content-creation",
        condition: Condition::ContainsAny {
            patterns: &["create"],
        },
        dimension: Dimension::Implementation,
        delta: 2,
        evidence: "Used AI to create content or plans",
    },
    Rule {
        id: "structured-output",
        condition: Condition::ContainsAny {
            patterns: &["outline"],
        },
        dimension: Dimension::Implementation,
        delta: 1,
        evidence: "Used AI to create structured content",
    },
    Rule {
        id: "formatting",
        condition: Condition::ContainsAny {
            patterns: &["format"],
        },
        dimension: Dimension::Implementation,
        delta: 1,
        evidence: "Used AI to format content",
    },
    Rule {
        id: "productivity-awareness",
        condition: Condition::ContainsAny {
            patterns: &["productive"],
        },
        dimension: Dimension::Understanding,
        delta: 1,
        evidence: "Demonstrated understanding of AI for productivity",
    },
    Rule {
        id: "structural-awareness",
        condition: Condition::ContainsAny {
            patterns: &["structure"],
        },
        dimension: Dimension::Understanding,
        delta: 1,
        evidence: "Showed understanding of AI for content structure",
    },
    Rule {
        id: "efficiency-awareness",
        condition: Condition::ContainsAny {
            patterns: &["time"],
        },
        dimension: Dimension::Understanding,
        delta: 1,
        evidence: "Demonstrated understanding of AI for efficiency",
    },
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DimensionTally {
    pub score: u32,
    pub evidence: Vec<&'static str>,
}

/// Per-dimension scores and evidence for a gated-in transcript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    pub tool_usage: DimensionTally,
    pub implementation: DimensionTally,
    pub understanding: DimensionTally,
}

impl Tally {
    fn base() -> Self {
        Tally {
            tool_usage: DimensionTally {
                score: BASE_TOOL_USAGE,
                evidence: vec![BASE_TOOL_USAGE_EVIDENCE],
            },
            implementation: DimensionTally::default(),
            understanding: DimensionTally::default(),
        }
    }

    /// Folds `rules` over an already lower-cased transcript, then clamps each
    /// dimension to its max.
    pub fn fold_rules(lowered: &str, rules: &[Rule]) -> Self {
        rules
            .iter()
            .filter(|rule| rule.condition.matches(lowered))
            .fold(Self::base(), Tally::credit)
            .clamped()
    }

    pub fn from_transcript(lowered: &str) -> Self {
        Self::fold_rules(lowered, RULES)
    }

    pub fn dimension(&self, dimension: Dimension) -> &DimensionTally {
        match dimension {
            Dimension::ToolUsage => &self.tool_usage,
            Dimension::Implementation => &self.implementation,
            Dimension::Understanding => &self.understanding,
        }
    }

    fn dimension_mut(&mut self, dimension: Dimension) -> &mut DimensionTally {
        match dimension {
            Dimension::ToolUsage => &mut self.tool_usage,
            Dimension::Implementation => &mut self.implementation,
            Dimension::Understanding => &mut self.understanding,
        }
    }

    fn credit(mut self, rule: &Rule) -> Self {
        let tally = self.dimension_mut(rule.dimension);
        tally.score += rule.delta;
        tally.evidence.push(rule.evidence);
        self
    }

    fn clamped(mut self) -> Self {
        for dimension in Dimension::ALL {
            let tally = self.dimension_mut(dimension);
            tally.score = tally.score.min(dimension.max());
        }
        self
    }

    /// round(0.5·toolUsage + 0.3·implementation + 0.2·understanding), half-up.
    /// Computed in tenths so .5 cases never drift.
    pub fn overall(&self) -> u32 {
        let weighted: u32 = Dimension::ALL
            .iter()
            .map(|d| d.weight_tenths() * self.dimension(*d).score)
            .sum();
        (weighted + 5) / 10
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(id: &str) -> &'static Rule {
        RULES.iter().find(|r| r.id == id).unwrap()
    }

    #[test]
    fn test_gate_markers() {
        assert!(ai_mention_gate("i asked chatgpt for help"));
        assert!(ai_mention_gate("claude drafted it"));
        assert!(ai_mention_gate("i wrote a prompt"));
        assert!(ai_mention_gate("artificial intelligence helps"));
        assert!(ai_mention_gate("we use ai daily"));
        assert!(ai_mention_gate("gpt-4 wrote the email"));
    }

    #[test]
    fn test_gate_requires_space_padded_ai() {
        assert!(!ai_mention_gate("i maintain a pipeline"));
        assert!(!ai_mention_gate("ai at the start"));
        assert!(!ai_mention_gate("ends with ai"));
        assert!(!ai_mention_gate("we used ai."));
        assert!(!ai_mention_gate(""));
    }

    #[test]
    fn test_generic_mentions_override_markers() {
        assert!(!ai_mention_gate("we used an ai tool and gpt for outreach"));
        assert!(!ai_mention_gate("my ai assistant and chatgpt"));
        assert!(!ai_mention_gate("we sell ai as a service with claude"));
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let mut ids: Vec<&str> = RULES.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), RULES.len());
    }

    #[test]
    fn test_each_keyword_rule_fires_on_its_keyword() {
        let cases = [
            ("active-use", "i was using ai daily"),
            ("active-use", "utilizing ai heavily"),
            ("prompt-literacy", "good prompting"),
            ("research-use", "account research"),
            ("content-creation", "create a plan"),
            ("structured-output", "an outline"),
            ("formatting", "nice formatting"),
            ("productivity-awareness", "more productive"),
            ("structural-awareness", "clear structure"),
            ("efficiency-awareness", "saves time"),
        ];
        for (id, text) in cases {
            assert!(rule(id).condition.matches(text), "{id} should match {text:?}");
            assert!(!rule(id).condition.matches("nothing relevant here"), "{id}");
        }
    }

    #[test]
    fn test_keywords_match_inside_longer_words() {
        assert!(rule("efficiency-awareness").condition.matches("sometimes"));
        assert!(rule("content-creation").condition.matches("recreate"));
        assert!(rule("structural-awareness").condition.matches("unstructured"));
        assert!(rule("research-use").condition.matches("researcher"));

        // Only the bare "ai" marker is space-padded.
        assert!(!ai_mention_gate("we maintain it sometimes"));
        assert!(ai_mention_gate("we use ai sometimes"));

        let tally = Tally::from_transcript("we use ai sometimes");
        assert_eq!(tally.understanding.score, 1);
        assert_eq!(
            tally.understanding.evidence,
            vec!["Demonstrated understanding of AI for efficiency"]
        );
    }

    #[test]
    fn test_multi_use_rules_are_mutually_exclusive() {
        let strong = rule("multi-use-strong");
        let moderate = rule("multi-use-moderate");

        let once = "used ai for email";
        let twice = "used ai for email and used ai to plan";
        let thrice = "used ai for email, used ai to plan and had ai create slides";
        let four = "used ai for a, used ai for b, used ai to c, had ai create d";

        assert!(!strong.condition.matches(once) && !moderate.condition.matches(once));
        assert!(!strong.condition.matches(twice) && moderate.condition.matches(twice));
        assert!(strong.condition.matches(thrice) && !moderate.condition.matches(thrice));
        assert!(strong.condition.matches(four) && !moderate.condition.matches(four));
    }

    #[test]
    fn test_occurrences_counts_repeats() {
        assert_eq!(occurrences("used ai for x used ai for y", MULTI_USE_PHRASES), 2);
        assert_eq!(occurrences("", MULTI_USE_PHRASES), 0);
    }

    #[test]
    fn test_base_tally_with_no_rules_firing() {
        let tally = Tally::from_transcript("we use ai daily");
        assert_eq!(tally.tool_usage.score, 3);
        assert_eq!(tally.tool_usage.evidence, vec!["Explicitly mentioned using AI tools"]);
        assert_eq!(tally.implementation, DimensionTally::default());
        assert_eq!(tally.understanding, DimensionTally::default());
        // round(1.5) = 2
        assert_eq!(tally.overall(), 2);
    }

    #[test]
    fn test_evidence_follows_table_order() {
        let tally = Tally::from_transcript("research with a prompt, then using ai to create");
        assert_eq!(
            tally.tool_usage.evidence,
            vec![
                "Explicitly mentioned using AI tools",
                "Demonstrated active use of AI in workflow",
                "Showed understanding of prompt engineering",
                "Used AI for research and analysis",
            ]
        );
        assert_eq!(tally.tool_usage.score, 6);
        assert_eq!(tally.implementation.score, 2);
    }

    #[test]
    fn test_clamp_applies_per_dimension() {
        let text = "used ai for a, used ai for b, used ai for c. using ai with a prompt for \
                    research. create an outline and format it. productive, structure, time.";
        let unclamped: u32 = 3 + 3 + 1 + 1 + 1;
        assert!(unclamped > Dimension::ToolUsage.max());

        let tally = Tally::from_transcript(text);
        assert_eq!(tally.tool_usage.score, 8);
        assert_eq!(tally.implementation.score, 4);
        assert_eq!(tally.understanding.score, 3);
        // Evidence is still recorded for every rule that fired.
        assert_eq!(tally.tool_usage.evidence.len(), 5);
    }

    #[test]
    fn test_custom_rules_fold_and_clamp() {
        const GENEROUS: &[Rule] = &[Rule {
            id: "anything",
            condition: Condition::ContainsAny { patterns: &["x"] },
            dimension: Dimension::Understanding,
            delta: 10,
            evidence: "x",
        }];
        let tally = Tally::fold_rules("x", GENEROUS);
        assert_eq!(tally.understanding.score, 4);
        assert_eq!(tally.tool_usage.score, 3);
    }

    #[test]
    fn test_overall_rounds_half_up() {
        let tally = |t, i, u| Tally {
            tool_usage: DimensionTally {
                score: t,
                evidence: vec![],
            },
            implementation: DimensionTally {
                score: i,
                evidence: vec![],
            },
            understanding: DimensionTally {
                score: u,
                evidence: vec![],
            },
        };
        assert_eq!(tally(6, 3, 0).overall(), 4); // 3.9
        assert_eq!(tally(8, 1, 1).overall(), 5); // 4.5
        assert_eq!(tally(3, 1, 0).overall(), 2); // 1.8
        assert_eq!(tally(4, 0, 1).overall(), 2); // 2.2
        assert_eq!(tally(8, 6, 4).overall(), 7); // 6.6
        assert_eq!(tally(0, 0, 0).overall(), 0);
    }
}
