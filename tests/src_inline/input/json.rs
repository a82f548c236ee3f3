use super::*;
use crate::input::InputError;
use crate::model::cell::CellValue;
use std::io::Cursor;

#[test]
fn test_parse_json_records() {
    let data = r#"[
        {"Center Code": "CASF", "Pediatric Center": 0, "2024-2025 - Transplants": 361},
        {"Center Code": "NYBU", "Pediatric Center": "1.0", "2024-2025 - Transplants": null}
    ]"#;
    let records = parse_json_records(Cursor::new(data)).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["2024-2025 - Transplants"], CellValue::Number(361.0));
    assert!(records[1]["Pediatric Center"].is_flag_set());
    assert!(records[1]["2024-2025 - Transplants"].is_empty());
}

#[test]
fn test_non_array_json_is_rejected() {
    let err = parse_json_records(Cursor::new(r#"{"Center Code": "CASF"}"#)).unwrap_err();
    assert!(matches!(err, InputError::Json(_)));
}
