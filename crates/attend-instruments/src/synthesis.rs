use attend_core::models::asrs::AsrsResult;
use attend_core::models::criteria::StructuredResult;
use attend_core::models::executive::ExecResult;
use attend_core::models::recommendation::Recommendation;
use attend_core::models::synthesis::{
    Confidence, GlobalAssessment, Indicator, SynthesisSummary, TOOL_COUNT,
};
use tracing::debug;

/// Combine the three tool results into one confidence-rated assessment.
///
/// A tool is a positive indicator when the ASRS screen is positive, when
/// either DSM-5 symptom criterion is met, or when executive-function severity
/// is Moderate or High.
pub fn synthesize(
    asrs: AsrsResult,
    structured: StructuredResult,
    executive: ExecResult,
) -> GlobalAssessment {
    let mut indicators = Vec::new();
    if asrs.screening_positive {
        indicators.push(Indicator::AsrsPositive);
    }
    if structured.meets_symptom_criteria() {
        indicators.push(Indicator::CriteriaPresentation {
            presentation: structured.presentation_type,
        });
    }
    if executive.severity.is_elevated() {
        indicators.push(Indicator::ExecutiveDifficulty {
            severity: executive.severity,
        });
    }

    let positive = indicators.len() as u32;
    let (summary, recommendation, confidence) = match positive {
        0 => (
            SynthesisSummary::Negative {
                positive,
                total: TOOL_COUNT,
            },
            Recommendation::Reassurance,
            Confidence::NotApplicable,
        ),
        1 => (
            SynthesisSummary::Mixed {
                positive,
                total: TOOL_COUNT,
            },
            Recommendation::ConditionalConsult,
            Confidence::Low,
        ),
        _ => (
            SynthesisSummary::Convergent {
                positive,
                total: TOOL_COUNT,
                indicators,
            },
            Recommendation::StrongReferral,
            if positive == TOOL_COUNT {
                Confidence::High
            } else {
                Confidence::Moderate
            },
        ),
    };

    debug!(positive, confidence = confidence.label(), "synthesized assessment");

    GlobalAssessment {
        asrs,
        structured,
        executive,
        positive_indicator_count: positive,
        summary,
        recommendation,
        confidence,
    }
}
