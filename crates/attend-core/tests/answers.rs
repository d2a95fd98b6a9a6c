use attend_core::error::CoreError;
use attend_core::models::answers::AnswerMap;
use attend_core::models::question::ResponseScale;

#[test]
fn parses_integers_and_integer_strings() {
    let answers = AnswerMap::from_json(r#"{"asrs_1": 3, "diva_ia_2": "1"}"#).unwrap();
    assert_eq!(answers.get("asrs_1"), Some(3));
    assert_eq!(answers.get("diva_ia_2"), Some(1));
    assert_eq!(answers.len(), 2);
}

#[test]
fn rejects_non_integer_values() {
    let err = AnswerMap::from_json(r#"{"asrs_1": 2.5}"#).unwrap_err();
    assert!(matches!(err, CoreError::InvalidAnswers(_)));

    let err = AnswerMap::from_json(r#"{"asrs_1": -1}"#).unwrap_err();
    assert!(matches!(err, CoreError::InvalidAnswers(_)));
}

#[test]
fn rejects_non_object_json() {
    let err = AnswerMap::from_json("[1, 2, 3]").unwrap_err();
    assert!(matches!(err, CoreError::InvalidAnswers(_)));

    let err = AnswerMap::from_json("not json").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}

#[test]
fn accrete_layers_later_steps_over_earlier_ones() {
    let page_one: AnswerMap = [("asrs_1", 1), ("asrs_2", 2)].into_iter().collect();
    let page_two: AnswerMap = [("asrs_2", 4), ("diva_ia_1", 1)].into_iter().collect();

    let merged = page_one.accrete(&page_two);
    assert_eq!(merged.get("asrs_1"), Some(1));
    assert_eq!(merged.get("asrs_2"), Some(4));
    assert_eq!(merged.get("diva_ia_1"), Some(1));

    // Inputs are untouched.
    assert_eq!(page_one.get("asrs_2"), Some(2));
    assert_eq!(page_one.get("diva_ia_1"), None);
}

#[test]
fn with_prefix_filters_and_orders_by_id() {
    let answers: AnswerMap = [("ef_foc_2", 1), ("ef_act_1", 2), ("ef_act2_1", 3), ("ef_act_2", 0)]
        .into_iter()
        .collect();

    let ids: Vec<_> = answers.with_prefix("ef_act_").map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["ef_act_1", "ef_act_2"]);
}

#[test]
fn serializes_as_flat_object() {
    let answers: AnswerMap = [("asrs_1", 3)].into_iter().collect();
    assert_eq!(serde_json::to_string(&answers).unwrap(), r#"{"asrs_1":3}"#);
}

#[test]
fn response_scales_expose_ranges_and_labels() {
    assert_eq!(ResponseScale::Frequency.max(), 4);
    assert_eq!(ResponseScale::YesNo.max(), 1);
    assert_eq!(ResponseScale::ProblemSeverity.max(), 3);

    assert!(ResponseScale::ProblemSeverity.contains(3));
    assert!(!ResponseScale::ProblemSeverity.contains(4));

    assert_eq!(ResponseScale::Frequency.option_label(4), Some("Very often"));
    assert_eq!(ResponseScale::YesNo.option_label(1), Some("Yes"));
    assert_eq!(ResponseScale::YesNo.option_label(2), None);
}
