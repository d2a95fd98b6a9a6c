use attend_core::models::answers::AnswerMap;
use attend_core::models::executive::Severity;
use attend_core::models::criteria::PresentationType;
use attend_core::models::recommendation::Recommendation;
use attend_core::models::synthesis::{Confidence, Indicator, SynthesisSummary};
use attend_instruments::catalog::Catalog;
use attend_instruments::{
    score_executive_clusters, score_primary_screener, score_structured_criteria, synthesize,
};

fn assess(answers: &AnswerMap) -> attend_core::models::synthesis::GlobalAssessment {
    let catalog = Catalog::default();
    synthesize(
        score_primary_screener(answers, &catalog.asrs),
        score_structured_criteria(answers, &catalog.criteria),
        score_executive_clusters(answers, &catalog.executive),
    )
}

fn asrs_positive() -> Vec<(String, u32)> {
    (1..=6).map(|n| (format!("asrs_{n}"), 3)).collect()
}

fn inattentive() -> Vec<(String, u32)> {
    (1..=5).map(|n| (format!("diva_ia_{n}"), 1)).collect()
}

fn executive(value: u32) -> Vec<(String, u32)> {
    (1..=4).map(|n| (format!("ef_foc_{n}"), value)).collect()
}

#[test]
fn two_indicators_give_moderate_confidence() {
    let answers: AnswerMap = asrs_positive()
        .into_iter()
        .chain(inattentive())
        .chain(executive(1))
        .collect();

    let assessment = assess(&answers);
    assert!(assessment.asrs.screening_positive);
    assert!(assessment.structured.meets_inattention_criteria);
    assert_eq!(assessment.executive.severity, Severity::Low);

    assert_eq!(assessment.positive_indicator_count, 2);
    assert_eq!(assessment.confidence, Confidence::Moderate);
    assert_eq!(assessment.recommendation, Recommendation::StrongReferral);
    assert_eq!(
        assessment.summary,
        SynthesisSummary::Convergent {
            positive: 2,
            total: 3,
            indicators: vec![
                Indicator::AsrsPositive,
                Indicator::CriteriaPresentation {
                    presentation: PresentationType::PredominantlyInattentive
                },
            ],
        }
    );
}

#[test]
fn three_indicators_give_high_confidence() {
    let answers: AnswerMap = asrs_positive()
        .into_iter()
        .chain(inattentive())
        .chain(executive(3))
        .collect();

    let assessment = assess(&answers);
    assert_eq!(assessment.positive_indicator_count, 3);
    assert_eq!(assessment.confidence, Confidence::High);
    match &assessment.summary {
        SynthesisSummary::Convergent { indicators, .. } => {
            assert_eq!(
                indicators.last(),
                Some(&Indicator::ExecutiveDifficulty {
                    severity: Severity::High
                })
            );
        }
        other => panic!("expected convergent summary, got {other:?}"),
    }
}

#[test]
fn single_indicator_is_mixed_with_low_confidence() {
    let answers: AnswerMap = executive(2).into_iter().collect();

    let assessment = assess(&answers);
    assert_eq!(assessment.positive_indicator_count, 1);
    assert_eq!(assessment.confidence, Confidence::Low);
    assert_eq!(assessment.recommendation, Recommendation::ConditionalConsult);
    assert_eq!(
        assessment.summary,
        SynthesisSummary::Mixed {
            positive: 1,
            total: 3
        }
    );
}

#[test]
fn no_indicators_is_negative() {
    let assessment = assess(&AnswerMap::new());
    assert_eq!(assessment.positive_indicator_count, 0);
    assert_eq!(assessment.confidence, Confidence::NotApplicable);
    assert_eq!(assessment.confidence.label(), "N/A");
    assert_eq!(assessment.recommendation, Recommendation::Reassurance);
    assert_eq!(
        assessment.summary,
        SynthesisSummary::Negative {
            positive: 0,
            total: 3
        }
    );
}

#[test]
fn childhood_and_impairment_alone_are_not_indicators() {
    let answers: AnswerMap = (1..=5)
        .map(|n| (format!("diva_child_{n}"), 1))
        .chain((1..=5).map(|n| (format!("diva_imp_{n}"), 1)))
        .collect();

    let assessment = assess(&answers);
    assert!(assessment.structured.childhood_positive);
    assert!(assessment.structured.meets_impairment_criteria);
    assert_eq!(assessment.positive_indicator_count, 0);
}
