use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// What the respondent is advised to do next. Phrasing is left to the
/// presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Recommendation {
    /// Positive screener: full diagnostic evaluation by an adult-ADHD specialist.
    SpecialistEvaluation,
    /// Negative screener with an elevated total: consult if daily life is affected.
    ConsultIfImpairing,
    /// Negative screener: raise persistent concerns with a doctor.
    DiscussIfConcerned,
    /// Two or more tools agree: strong referral, bring the report along.
    StrongReferral,
    /// A single tool is positive: consult to explore possible causes.
    ConditionalConsult,
    /// No tool is positive.
    Reassurance,
}
