use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::asrs::AsrsResult;
use super::criteria::{PresentationType, StructuredResult};
use super::executive::{ExecResult, Severity};
use super::recommendation::Recommendation;

/// Number of independent tools feeding the synthesis.
pub const TOOL_COUNT: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Confidence {
    High,
    Moderate,
    Low,
    NotApplicable,
}

impl Confidence {
    pub fn label(&self) -> &'static str {
        match self {
            Confidence::High => "High",
            Confidence::Moderate => "Moderate",
            Confidence::Low => "Low",
            Confidence::NotApplicable => "N/A",
        }
    }
}

/// A tool that contributed a positive signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "tool", rename_all = "snake_case")]
#[ts(export)]
pub enum Indicator {
    AsrsPositive,
    CriteriaPresentation { presentation: PresentationType },
    ExecutiveDifficulty { severity: Severity },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum SynthesisSummary {
    /// Two or more tools agree; one indicator per contributing tool.
    Convergent {
        positive: u32,
        total: u32,
        indicators: Vec<Indicator>,
    },
    Mixed { positive: u32, total: u32 },
    Negative { positive: u32, total: u32 },
}

/// Combined judgment over the three tools. Created once per session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GlobalAssessment {
    pub asrs: AsrsResult,
    pub structured: StructuredResult,
    pub executive: ExecResult,
    pub positive_indicator_count: u32,
    pub summary: SynthesisSummary,
    pub recommendation: Recommendation,
    pub confidence: Confidence,
}
