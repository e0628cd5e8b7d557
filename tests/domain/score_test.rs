use speakwise::domain::{DomainError, Score, ScoreDimension, Scores};

fn uniform_scores(value: i64) -> Scores {
    let score = || Score::new(value, "reason").unwrap();
    Scores {
        clarity: score(),
        structure_flow: score(),
        persuasiveness: score(),
        storytelling_examples: score(),
        conciseness_vs_duration: score(),
        fit_for_audience_goal: score(),
        delivery_energy: score(),
    }
}

#[test]
fn given_bounds_when_creating_score_then_both_ends_are_accepted() {
    assert_eq!(Score::new(0, "silent").unwrap().value(), 0);
    assert_eq!(Score::new(10, "perfect").unwrap().value(), 10);
}

#[test]
fn given_value_above_ten_when_creating_score_then_fails() {
    assert_eq!(Score::new(11, "too high"), Err(DomainError::ScoreOutOfRange(11)));
}

#[test]
fn given_negative_value_when_creating_score_then_fails() {
    assert_eq!(Score::new(-1, "too low"), Err(DomainError::ScoreOutOfRange(-1)));
}

#[test]
fn given_out_of_range_json_when_deserializing_score_then_fails_instead_of_clamping() {
    let result: Result<Score, _> = serde_json::from_str(r#"{"value": 12, "reason": "x"}"#);

    let error = result.unwrap_err().to_string();
    assert!(error.contains("outside the allowed range"));
}

#[test]
fn given_score_without_reason_when_deserializing_then_fails() {
    let result: Result<Score, _> = serde_json::from_str(r#"{"value": 5}"#);

    assert!(result.is_err());
}

#[test]
fn given_scores_when_serialized_then_keys_match_dimension_table() {
    let json = serde_json::to_value(uniform_scores(5)).unwrap();
    let object = json.as_object().unwrap();

    assert_eq!(object.len(), ScoreDimension::ALL.len());
    for dimension in ScoreDimension::ALL {
        assert!(object.contains_key(dimension.key()), "missing {}", dimension);
    }
}

#[test]
fn given_scores_when_iterating_then_yields_seven_dimensions_in_table_order() {
    let scores = uniform_scores(3);

    let dimensions: Vec<ScoreDimension> = scores.iter().map(|(d, _)| d).collect();

    assert_eq!(dimensions, ScoreDimension::ALL.to_vec());
    assert!(scores.iter().all(|(_, s)| s.value() == 3));
}

#[test]
fn given_scores_missing_a_dimension_when_deserializing_then_fails() {
    let mut json = serde_json::to_value(uniform_scores(5)).unwrap();
    json.as_object_mut().unwrap().remove("delivery_energy");

    let result: Result<Scores, _> = serde_json::from_value(json);

    assert!(result.is_err());
}
