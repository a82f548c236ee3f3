use super::*;
use crate::test_support::{flat, national_rows, pediatric, row};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_national_growth_rate() {
    let table = ReferenceTable::new(national_rows());
    assert!(approx(national_growth_rate(&table), 0.15));
}

#[test]
fn test_pediatric_centers_do_not_move_growth() {
    let table = ReferenceTable::new(vec![
        pediatric(row("PEDS", flat(10.0), Some(1000.0), None, None)),
        row("ADLT", flat(100.0), Some(130.0), None, None),
    ]);
    assert!(approx(national_growth_rate(&table), 0.3));
}

#[test]
fn test_zero_baseline_total_gives_zero_growth() {
    let table = ReferenceTable::new(vec![row("AAAA", [None, None, None], Some(50.0), None, None)]);
    assert_eq!(national_growth_rate(&table), 0.0);
    assert_eq!(national_growth_rate(&ReferenceTable::default()), 0.0);
}

#[test]
fn test_run_stage2_target() {
    let table = ReferenceTable::new(national_rows());
    let center = table.find("AAAA").unwrap();
    let out = run_stage2(&table, center).unwrap();
    assert!(approx(out.baseline_average, 110.0));
    assert!(approx(out.target, 126.5));
}

#[test]
fn test_run_stage2_requires_baseline() {
    let table = ReferenceTable::new(national_rows());
    let center = table.find("NOBL").unwrap();
    assert!(run_stage2(&table, center).is_none());
}
