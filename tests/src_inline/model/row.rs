use super::*;
use crate::model::cell::{CellValue, Record};
use crate::model::schema::ReferenceSchema;

fn record(pairs: &[(&str, CellValue)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

#[test]
fn test_from_record_reads_schema_columns() {
    let schema = ReferenceSchema::default();
    let rec = record(&[
        ("Center Code", CellValue::Text(" casf ".to_string())),
        ("Pediatric Center", CellValue::Text("1.0".to_string())),
        ("IOTA", CellValue::Number(1.0)),
        ("2022-2023 - Transplants", CellValue::Number(300.0)),
        ("2023-2024 - Transplants", CellValue::Empty),
        ("2024-2025 - Transplants", CellValue::Text("361".to_string())),
        ("2024-2025 - Organ Offer Acceptance Rate", CellValue::Number(1.53)),
        ("2024-2025 - Graft Survival Rate", CellValue::Number(0.954)),
    ]);

    let row = CenterRow::from_record(&rec, &schema);
    assert_eq!(row.code, "CASF");
    assert!(row.pediatric);
    assert!(row.iota);
    assert_eq!(row.baseline_transplants, [Some(300.0), None, Some(361.0)]);
    assert_eq!(row.performance_transplants, Some(361.0));
    assert_eq!(row.acceptance_rate, Some(1.53));
    assert_eq!(row.graft_survival, Some(0.954));
}

#[test]
fn test_missing_columns_become_none() {
    let schema = ReferenceSchema::default();
    let row = CenterRow::from_record(&Record::new(), &schema);
    assert!(row.code.is_empty());
    assert!(!row.pediatric);
    assert!(!row.iota);
    assert_eq!(row.baseline_transplants, [None, None, None]);
    assert_eq!(row.baseline_average(), None);
    assert_eq!(row.graft_survival_pct(), None);
}

#[test]
fn test_baseline_average_skips_missing_years() {
    let schema = ReferenceSchema::default();
    let rec = record(&[
        ("Center Code", CellValue::Text("ABCD".to_string())),
        ("2022-2023 - Transplants", CellValue::Number(10.0)),
        ("2023-2024 - Transplants", CellValue::Text("oops".to_string())),
        ("2024-2025 - Transplants", CellValue::Number(20.0)),
    ]);
    let row = CenterRow::from_record(&rec, &schema);
    assert_eq!(row.baseline_average(), Some(15.0));
}

#[test]
fn test_graft_survival_pct_normalizes_fractions() {
    let schema = ReferenceSchema::default();
    let fraction = record(&[("2024-2025 - Graft Survival Rate", CellValue::Number(0.9))]);
    let percentage = record(&[("2024-2025 - Graft Survival Rate", CellValue::Number(93.5))]);
    assert_eq!(
        CenterRow::from_record(&fraction, &schema).graft_survival_pct(),
        Some(90.0)
    );
    assert_eq!(
        CenterRow::from_record(&percentage, &schema).graft_survival_pct(),
        Some(93.5)
    );
}

#[test]
fn test_canonical_code() {
    assert_eq!(canonical_code("  abCd "), "ABCD");
}
