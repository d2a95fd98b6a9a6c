use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::recommendation::Recommendation;

/// Scores of the ASRS v1.1 self-report screener.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AsrsResult {
    pub part_a_score: u32,
    /// Part-A items at or above their shading threshold (0–6).
    pub part_a_shaded_count: u32,
    pub part_b_score: u32,
    pub total_score: u32,
    pub inattention_score: u32,
    pub hyperactivity_score: u32,
    pub screening_positive: bool,
    pub interpretation: AsrsInterpretation,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum AsrsInterpretation {
    /// Screener positive.
    Positive { shaded_count: u32 },
    /// Screener negative but the total is above half the maximum.
    Borderline { total_score: u32 },
    Negative { total_score: u32 },
}
