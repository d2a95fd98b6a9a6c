use attend_core::models::answers::AnswerMap;
use attend_core::models::asrs::AsrsInterpretation;
use attend_core::models::recommendation::Recommendation;
use attend_instruments::catalog::{AsrsCatalog, Catalog, CatalogOverrides};
use attend_instruments::score_primary_screener;

fn answers(pairs: &[(&str, u32)]) -> AnswerMap {
    pairs.iter().map(|(id, v)| (*id, *v)).collect()
}

fn asrs_all(value: u32) -> AnswerMap {
    (1..=18).map(|n| (format!("asrs_{n}"), value)).collect()
}

#[test]
fn part_a_all_often_screens_positive() {
    let answers = answers(&[
        ("asrs_1", 3),
        ("asrs_2", 3),
        ("asrs_3", 3),
        ("asrs_4", 3),
        ("asrs_5", 3),
        ("asrs_6", 3),
    ]);

    let result = score_primary_screener(&answers, &AsrsCatalog::default());
    assert_eq!(result.part_a_shaded_count, 6);
    assert_eq!(result.part_a_score, 18);
    assert_eq!(result.part_b_score, 0);
    assert_eq!(result.total_score, 18);
    assert!(result.screening_positive);
    assert_eq!(
        result.interpretation,
        AsrsInterpretation::Positive { shaded_count: 6 }
    );
    assert_eq!(result.recommendation, Recommendation::SpecialistEvaluation);
}

#[test]
fn screening_boundary_between_three_and_four_shaded() {
    let catalog = AsrsCatalog::default();

    // Items 1-3 shade at 2; items 4-6 need 3.
    let three = answers(&[("asrs_1", 2), ("asrs_2", 2), ("asrs_3", 2), ("asrs_4", 2)]);
    let result = score_primary_screener(&three, &catalog);
    assert_eq!(result.part_a_shaded_count, 3);
    assert!(!result.screening_positive);

    let four = answers(&[("asrs_1", 2), ("asrs_2", 2), ("asrs_3", 2), ("asrs_4", 3)]);
    let result = score_primary_screener(&four, &catalog);
    assert_eq!(result.part_a_shaded_count, 4);
    assert!(result.screening_positive);
}

#[test]
fn per_item_thresholds_apply() {
    let result = score_primary_screener(
        &answers(&[("asrs_5", 2), ("asrs_6", 2), ("asrs_1", 2)]),
        &AsrsCatalog::default(),
    );
    assert_eq!(result.part_a_shaded_count, 1);
}

#[test]
fn part_b_items_never_shade() {
    let result = score_primary_screener(&asrs_all(4), &AsrsCatalog::default());
    assert_eq!(result.part_a_shaded_count, 6);
    assert_eq!(result.part_a_score, 24);
    assert_eq!(result.part_b_score, 48);
    assert_eq!(result.total_score, 72);
}

#[test]
fn sub_dimensions_follow_fixed_item_partition() {
    let result = score_primary_screener(&asrs_all(1), &AsrsCatalog::default());
    // Items 1-4 and 7-11 are inattention; 5, 6 and 12-18 the rest.
    assert_eq!(result.inattention_score, 9);
    assert_eq!(result.hyperactivity_score, 9);

    let only_five = score_primary_screener(&answers(&[("asrs_5", 4)]), &AsrsCatalog::default());
    assert_eq!(only_five.inattention_score, 0);
    assert_eq!(only_five.hyperactivity_score, 4);
}

#[test]
fn negative_with_high_total_is_borderline() {
    // 2 everywhere: items 1-3 shade (3 shaded), total 36.
    let result = score_primary_screener(&asrs_all(2), &AsrsCatalog::default());
    assert_eq!(result.part_a_shaded_count, 3);
    assert!(!result.screening_positive);
    assert_eq!(result.total_score, 36);
    assert_eq!(
        result.interpretation,
        AsrsInterpretation::Borderline { total_score: 36 }
    );
    assert_eq!(result.recommendation, Recommendation::ConsultIfImpairing);
}

#[test]
fn negative_with_low_total_is_reassuring() {
    let mut pairs = asrs_all(2);
    pairs = pairs.accrete(&answers(&[("asrs_18", 1)]));
    let result = score_primary_screener(&pairs, &AsrsCatalog::default());
    assert_eq!(result.total_score, 35);
    assert_eq!(
        result.interpretation,
        AsrsInterpretation::Negative { total_score: 35 }
    );
    assert_eq!(result.recommendation, Recommendation::DiscussIfConcerned);
}

#[test]
fn unrelated_and_malformed_ids_are_ignored() {
    let result = score_primary_screener(
        &answers(&[
            ("asrs_x", 4),
            ("asrs_01", 4),
            ("asrs_0", 4),
            ("asrs_", 4),
            ("diva_ia_1", 1),
            ("ef_act_1", 3),
        ]),
        &AsrsCatalog::default(),
    );
    assert_eq!(result.total_score, 0);
    assert_eq!(result.part_a_shaded_count, 0);
}

#[test]
fn overridden_thresholds_change_shading() {
    let overrides = CatalogOverrides {
        shading_thresholds: [("asrs_1".to_string(), 4)].into_iter().collect(),
        default_shading_threshold: None,
    };
    let catalog = Catalog::default().with_overrides(&overrides);

    let result = score_primary_screener(&answers(&[("asrs_1", 3)]), &catalog.asrs);
    assert_eq!(result.part_a_shaded_count, 0);

    let result = score_primary_screener(&answers(&[("asrs_1", 4)]), &catalog.asrs);
    assert_eq!(result.part_a_shaded_count, 1);
}

#[test]
fn items_without_threshold_use_catalog_default() {
    let mut catalog = AsrsCatalog::default();
    catalog.shading_thresholds.remove("asrs_6");
    assert_eq!(catalog.shading_threshold("asrs_6"), 2);

    catalog.default_shading_threshold = 4;
    assert_eq!(catalog.shading_threshold("asrs_6"), 4);
    assert_eq!(catalog.shading_threshold("asrs_4"), 3);
}
