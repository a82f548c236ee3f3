use super::*;

#[test]
fn test_new_zeroes_non_finite_rates() {
    let input = ScoreInput::new("AAAA", 10, f64::NAN, f64::INFINITY);
    assert_eq!(input.offer_accept_rate, 0.0);
    assert_eq!(input.graft_survival, 0.0);
    assert_eq!(input.num_transplants, 10);
}

#[test]
fn test_coerce_form_cells() {
    let input = ScoreInput::coerce(
        "casf",
        &CellValue::Text("361.7".to_string()),
        &CellValue::Text("1.53".to_string()),
        &CellValue::Empty,
    );
    assert_eq!(input.center_code, "casf");
    assert_eq!(input.num_transplants, 361);
    assert_eq!(input.offer_accept_rate, 1.53);
    assert_eq!(input.graft_survival, 0.0);

    let negative = ScoreInput::coerce(
        "casf",
        &CellValue::Number(-3.0),
        &CellValue::Text("n/a".to_string()),
        &CellValue::Bool(true),
    );
    assert_eq!(negative.num_transplants, 0);
    assert_eq!(negative.offer_accept_rate, 0.0);
    assert_eq!(negative.graft_survival, 1.0);
}

#[test]
fn test_serializes_camel_case() {
    let json = serde_json::to_value(ScoreInput::new("AAAA", 5, 1.5, 95.0)).unwrap();
    assert_eq!(json["centerCode"], "AAAA");
    assert_eq!(json["numTransplants"], 5);
    assert_eq!(json["offerAcceptRate"], 1.5);
    assert_eq!(json["graftSurvival"], 95.0);
}
