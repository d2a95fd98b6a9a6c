//! English phrasing for the structured interpretations produced by the
//! scorers. Every function is deterministic: the same record always yields
//! the same text.

use attend_core::models::asrs::{AsrsInterpretation, AsrsResult};
use attend_core::models::criteria::{CriteriaInterpretation, Criterion, CriterionStatus};
use attend_core::models::executive::{ExecInterpretation, Severity};
use attend_core::models::recommendation::Recommendation;
use attend_core::models::synthesis::{Indicator, SynthesisSummary};

const ASRS_MAX_TOTAL: u32 = 72;
const PART_A_ITEMS: u32 = 6;

pub const DISCLAIMER: &str = "This self-assessment is a screening aid only. It does not establish \
a diagnosis of ADHD or of any other condition. Only a qualified health professional can make a \
diagnosis after a full clinical evaluation.";

pub fn asrs_interpretation(interpretation: &AsrsInterpretation) -> String {
    match interpretation {
        AsrsInterpretation::Positive { shaded_count } => format!(
            "The screening is POSITIVE ({shaded_count}/{PART_A_ITEMS} Part A answers in the \
             shaded zone). Your answers suggest symptoms consistent with adult ADHD. A thorough \
             clinical evaluation by a health professional is recommended."
        ),
        AsrsInterpretation::Borderline { total_score } => format!(
            "The screening is negative, but your total score ({total_score}/{ASRS_MAX_TOTAL}) is \
             relatively high. Some symptoms may be present without reaching the clinical \
             threshold, or may be related to other conditions."
        ),
        AsrsInterpretation::Negative { total_score } => format!(
            "The screening is negative (total score {total_score}/{ASRS_MAX_TOTAL}). Your answers \
             do not suggest significant ADHD symptoms."
        ),
    }
}

pub fn recommendation(recommendation: Recommendation) -> &'static str {
    match recommendation {
        Recommendation::SpecialistEvaluation => {
            "A consultation with a psychiatrist or neurologist specialised in adult ADHD is \
             recommended for a complete diagnostic evaluation."
        }
        Recommendation::ConsultIfImpairing => {
            "If these difficulties affect your daily life, a consultation could help explore \
             other possible causes."
        }
        Recommendation::DiscussIfConcerned => {
            "If you have persistent concerns about your attention or behaviour, do not hesitate \
             to discuss them with your doctor."
        }
        Recommendation::StrongReferral => {
            "A clinical evaluation by an adult-ADHD specialist (psychiatrist, neurologist) is \
             strongly recommended. Bring this report to your consultation."
        }
        Recommendation::ConditionalConsult => {
            "If these difficulties significantly affect your daily life, a consultation with a \
             health professional could help explore the possible causes."
        }
        Recommendation::Reassurance => {
            "The results of this self-assessment do not suggest ADHD. If you have persistent \
             concerns, do not hesitate to consult a health professional."
        }
    }
}

/// Headline sentence for the ASRS section of a report.
pub fn asrs_headline(result: &AsrsResult) -> String {
    let verdict = if result.screening_positive {
        "POSITIVE"
    } else {
        "negative"
    };
    format!(
        "Screening {verdict}: {}/{PART_A_ITEMS} shaded answers in Part A, total {}/{ASRS_MAX_TOTAL}.",
        result.part_a_shaded_count, result.total_score
    )
}

pub fn criterion_line(status: &CriterionStatus) -> String {
    let observed = status.observed;
    let required = status.required;
    let out_of = match status.possible {
        Some(possible) => format!("{observed}/{possible}"),
        None => observed.to_string(),
    };
    match status.criterion {
        Criterion::Inattention => {
            format!("Criterion A1 (Inattention): {out_of} symptoms (≥{required} required)")
        }
        Criterion::HyperactivityImpulsivity => format!(
            "Criterion A2 (Hyperactivity/Impulsivity): {out_of} symptoms (≥{required} required)"
        ),
        Criterion::ChildhoodOnset => {
            format!("Criterion B (Onset before age 12): {out_of} positive indicators")
        }
        Criterion::Impairment if status.met => {
            format!("Criterion C/D (Impairment): {out_of} domains affected")
        }
        Criterion::Impairment => format!(
            "Criterion C/D (Impairment): {out_of} domain(s) affected (≥{required} required)"
        ),
    }
}

/// "Criteria met" and "Criteria not met" blocks; an empty list is omitted.
pub fn criteria_interpretation(interpretation: &CriteriaInterpretation) -> String {
    let mut parts = Vec::new();
    if !interpretation.met.is_empty() {
        parts.push(bullet_block("Criteria met:", &interpretation.met));
    }
    if !interpretation.not_met.is_empty() {
        parts.push(bullet_block("Criteria not met:", &interpretation.not_met));
    }
    parts.join("\n\n")
}

fn bullet_block(title: &str, statuses: &[CriterionStatus]) -> String {
    let lines: Vec<_> = statuses.iter().map(criterion_line).collect();
    format!("{title}\n• {}", lines.join("\n• "))
}

pub fn exec_interpretation(interpretation: &ExecInterpretation) -> String {
    let mut text = match interpretation.severity {
        Severity::High => "Your answers indicate significant difficulties in several areas of \
             executive functioning. These difficulties are frequently associated with ADHD but \
             can also occur in other conditions."
            .to_string(),
        Severity::Moderate => "Your answers suggest moderate difficulties in some areas of \
             executive functioning. A more in-depth evaluation could be useful."
            .to_string(),
        Severity::Low => "Your answers do not suggest major difficulties in the executive \
             functions assessed."
            .to_string(),
    };

    if !interpretation.impaired.is_empty() {
        let names: Vec<_> = interpretation
            .impaired
            .iter()
            .map(|c| c.display_name())
            .collect();
        text.push_str(&format!("\n\nMost affected areas: {}.", names.join(", ")));
    }
    text
}

pub fn synthesis_summary(summary: &SynthesisSummary) -> String {
    match summary {
        SynthesisSummary::Convergent {
            positive,
            total,
            indicators,
        } => {
            let mut text = format!(
                "SUMMARY: {positive}/{total} assessment tools suggest symptoms consistent with \
                 ADHD.\n\n"
            );
            for indicator in indicators {
                text.push_str(&indicator_line(indicator));
                text.push('\n');
            }
            text
        }
        SynthesisSummary::Mixed { positive, total } => format!(
            "SUMMARY: {positive}/{total} assessment tool suggests symptoms possibly consistent \
             with ADHD.\n\nThe results are mixed and require clinical interpretation."
        ),
        SynthesisSummary::Negative { positive, total } => format!(
            "SUMMARY: {positive}/{total} assessment tools suggest ADHD symptoms. No significant \
             ADHD symptoms are indicated."
        ),
    }
}

fn indicator_line(indicator: &Indicator) -> String {
    match indicator {
        Indicator::AsrsPositive => "• ASRS: screening POSITIVE".to_string(),
        Indicator::CriteriaPresentation { presentation } => {
            format!("• DSM-5 criteria: {} presentation", presentation.label())
        }
        Indicator::ExecutiveDifficulty { severity } => {
            format!("• Executive functions: {} level of difficulty", severity.label())
        }
    }
}
