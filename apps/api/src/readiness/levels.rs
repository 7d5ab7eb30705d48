//! Scoring levels: the five fixed bands attached to any 0–10 score.

use serde::{Deserialize, Serialize};

/// Target band quoted in every improvement-area entry.
pub const TARGET_LEVEL: &str = "7-8: Strong AI Usage";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringLevel {
    Exceptional,
    Strong,
    Basic,
    Limited,
    NoUsage,
}

impl ScoringLevel {
    /// Inclusive lower bounds 9, 7, 5, 3; everything below is `NoUsage`.
    /// Sub-scores use the same bands even though they never reach 9.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 9 => ScoringLevel::Exceptional,
            s if s >= 7 => ScoringLevel::Strong,
            s if s >= 5 => ScoringLevel::Basic,
            s if s >= 3 => ScoringLevel::Limited,
            _ => ScoringLevel::NoUsage,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ScoringLevel::Exceptional => "9-10: Exceptional AI Integration",
            ScoringLevel::Strong => "7-8: Strong AI Usage",
            ScoringLevel::Basic => "5-6: Basic AI Usage",
            ScoringLevel::Limited => "3-4: Limited AI Usage",
            ScoringLevel::NoUsage => "1-2: No AI Usage",
        }
    }
}

pub fn scoring_level(score: u32) -> &'static str {
    ScoringLevel::from_score(score).label()
}
