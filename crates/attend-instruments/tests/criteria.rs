use attend_core::models::answers::AnswerMap;
use attend_core::models::criteria::{Criterion, ImpairmentDomain, PresentationType};
use attend_instruments::catalog::CriteriaCatalog;
use attend_instruments::score_structured_criteria;

fn yes(prefix: &str, items: std::ops::RangeInclusive<u32>) -> Vec<(String, u32)> {
    items.map(|n| (format!("{prefix}{n}"), 1)).collect()
}

fn answers(groups: Vec<Vec<(String, u32)>>) -> AnswerMap {
    groups.into_iter().flatten().collect()
}

#[test]
fn nine_inattention_symptoms_is_predominantly_inattentive() {
    let result = score_structured_criteria(
        &answers(vec![yes("diva_ia_", 1..=9)]),
        &CriteriaCatalog::default(),
    );
    assert_eq!(result.inattention_count, 9);
    assert_eq!(result.hyperactivity_count, 0);
    assert!(result.meets_inattention_criteria);
    assert!(!result.meets_hyperactivity_criteria);
    assert_eq!(result.presentation_type, PresentationType::PredominantlyInattentive);
}

#[test]
fn both_symptom_lists_make_combined() {
    let result = score_structured_criteria(
        &answers(vec![yes("diva_ia_", 1..=5), yes("diva_hi_", 1..=5)]),
        &CriteriaCatalog::default(),
    );
    assert_eq!(result.presentation_type, PresentationType::Combined);
}

#[test]
fn hyperactivity_only_and_below_threshold() {
    let catalog = CriteriaCatalog::default();

    let result = score_structured_criteria(&answers(vec![yes("diva_hi_", 1..=5)]), &catalog);
    assert_eq!(
        result.presentation_type,
        PresentationType::PredominantlyHyperactiveImpulsive
    );

    let result = score_structured_criteria(
        &answers(vec![yes("diva_ia_", 1..=4), yes("diva_hi_", 1..=4)]),
        &catalog,
    );
    assert_eq!(result.presentation_type, PresentationType::BelowThreshold);
}

#[test]
fn only_yes_counts_as_endorsed() {
    let answers: AnswerMap = (1..=9).map(|n| (format!("diva_ia_{n}"), 0)).collect();
    let result = score_structured_criteria(&answers, &CriteriaCatalog::default());
    assert_eq!(result.inattention_count, 0);
}

#[test]
fn childhood_and_impairment_do_not_gate_presentation() {
    let result = score_structured_criteria(
        &answers(vec![yes("diva_ia_", 1..=6)]),
        &CriteriaCatalog::default(),
    );
    assert!(!result.childhood_positive);
    assert!(!result.meets_impairment_criteria);
    assert_eq!(result.presentation_type, PresentationType::PredominantlyInattentive);
}

#[test]
fn childhood_criterion_needs_two_indicators() {
    let catalog = CriteriaCatalog::default();

    let result = score_structured_criteria(&answers(vec![yes("diva_child_", 1..=1)]), &catalog);
    assert_eq!(result.childhood_count, 1);
    assert!(!result.childhood_positive);

    let result = score_structured_criteria(&answers(vec![yes("diva_child_", 1..=2)]), &catalog);
    assert!(result.childhood_positive);
}

#[test]
fn impairment_domains_are_labelled_in_catalog_order() {
    let answers: AnswerMap = [("diva_imp_5", 1), ("diva_imp_1", 1), ("diva_imp_3", 0)]
        .into_iter()
        .collect();
    let result = score_structured_criteria(&answers, &CriteriaCatalog::default());
    assert_eq!(
        result.impairment_domains,
        vec![ImpairmentDomain::WorkOrStudy, ImpairmentDomain::SelfEsteem]
    );
    assert!(result.meets_impairment_criteria);
    assert_eq!(result.impairment_domains[0].label(), "Work/Studies");
}

#[test]
fn unknown_impairment_ids_are_excluded() {
    let answers: AnswerMap = [("diva_imp_9", 1), ("diva_imp_2", 1)].into_iter().collect();
    let result = score_structured_criteria(&answers, &CriteriaCatalog::default());
    assert_eq!(
        result.impairment_domains,
        vec![ImpairmentDomain::FamilyRelationships]
    );
    assert!(!result.meets_impairment_criteria);
}

#[test]
fn duplicate_domain_mappings_count_once() {
    let mut catalog = CriteriaCatalog::default();
    catalog.impairment_domains[1].domain = ImpairmentDomain::WorkOrStudy;

    let answers: AnswerMap = [("diva_imp_1", 1), ("diva_imp_2", 1)].into_iter().collect();
    let result = score_structured_criteria(&answers, &catalog);
    assert_eq!(result.impairment_domains, vec![ImpairmentDomain::WorkOrStudy]);
    assert!(!result.meets_impairment_criteria);
}

#[test]
fn interpretation_lists_criteria_in_fixed_order() {
    let result = score_structured_criteria(
        &answers(vec![
            yes("diva_hi_", 1..=7),
            yes("diva_imp_", 1..=3),
            yes("diva_child_", 1..=1),
        ]),
        &CriteriaCatalog::default(),
    );

    let met: Vec<_> = result.interpretation.met.iter().map(|s| s.criterion).collect();
    let not_met: Vec<_> = result.interpretation.not_met.iter().map(|s| s.criterion).collect();
    assert_eq!(met, vec![Criterion::HyperactivityImpulsivity, Criterion::Impairment]);
    assert_eq!(not_met, vec![Criterion::Inattention, Criterion::ChildhoodOnset]);

    let hyper = &result.interpretation.met[0];
    assert_eq!(hyper.observed, 7);
    assert_eq!(hyper.possible, Some(9));
    assert_eq!(hyper.required, 5);

    let impairment = &result.interpretation.met[1];
    assert_eq!(impairment.observed, 3);
    assert_eq!(impairment.possible, None);
}

#[test]
fn only_canonical_item_ids_are_counted() {
    let answers: AnswerMap = [
        ("diva_ia_1", 1),
        ("diva_ia_01", 1),
        ("diva_ia_001", 1),
        ("diva_ia_x", 1),
        ("diva_ia_notes", 1),
        ("diva_hi_0", 1),
        ("diva_child_02", 1),
    ]
    .into_iter()
    .collect();
    let result = score_structured_criteria(&answers, &CriteriaCatalog::default());

    assert_eq!(result.inattention_count, 1);
    assert_eq!(result.hyperactivity_count, 0);
    assert_eq!(result.childhood_count, 0);
    assert!(!result.meets_inattention_criteria);
    assert_eq!(result.presentation_type, PresentationType::BelowThreshold);
}
