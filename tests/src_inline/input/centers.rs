use super::*;
use crate::model::cell::CellValue;
use crate::test_support::{make_temp_dir, national_rows};

fn directory() -> CenterDirectory {
    let schema = ReferenceSchema::default();
    let records: Vec<Record> = [("aaaa", "Alpha Medical Center"), ("BBBB", "Beta Hospital")]
        .iter()
        .map(|(code, name)| {
            let mut r = Record::new();
            r.insert("CTR_CD".to_string(), CellValue::Text(code.to_string()));
            r.insert("Name".to_string(), CellValue::Text(name.to_string()));
            r
        })
        .collect();
    CenterDirectory::from_records(&records, &schema)
}

#[test]
fn test_directory_names() {
    let dir = directory();
    assert_eq!(dir.len(), 2);
    assert_eq!(dir.name_of("AAAA"), Some("Alpha Medical Center"));
    assert_eq!(dir.name_of(" bbbb"), Some("Beta Hospital"));
    assert_eq!(dir.name_of("CCCC"), None);
}

#[test]
fn test_directory_load_or_empty() {
    let schema = ReferenceSchema::default();
    let tmp = make_temp_dir("centers");
    assert!(CenterDirectory::load_or_empty(&tmp.join("missing.csv"), &schema).is_empty());

    let path = tmp.join("centers.csv");
    std::fs::write(&path, "CTR_CD,Name\nAAAA,\"Alpha, Main Campus\"\n").unwrap();
    let dir = CenterDirectory::load(&path, &schema).unwrap();
    assert_eq!(dir.name_of("AAAA"), Some("Alpha, Main Campus"));
}

#[test]
fn test_lookup_known_participating_center() {
    let table = ReferenceTable::new(national_rows());
    let found = lookup_center(&table, &directory(), "aaaa", 4);
    assert_eq!(found.code, "AAAA");
    assert_eq!(found.name.as_deref(), Some("Alpha Medical Center"));
    assert!(found.exists);
    assert!(found.participating);
    assert_eq!(found.warning, None);

    let prefill = found.prefill.unwrap();
    assert_eq!(prefill.num_transplants, Some(120.0));
    assert_eq!(prefill.offer_accept_rate, Some(1.0));
    assert_eq!(prefill.graft_survival, Some(95.0));
}

#[test]
fn test_lookup_prefill_rounds_graft_to_one_decimal() {
    let table = ReferenceTable::new(national_rows());
    let found = lookup_center(&table, &CenterDirectory::default(), "CCCC", 4);
    assert_eq!(found.prefill.unwrap().graft_survival, Some(97.0));
    assert_eq!(found.name, None);
}

#[test]
fn test_lookup_warnings() {
    let mut rows = national_rows();
    rows[1].iota = false;
    let table = ReferenceTable::new(rows);
    let dir = CenterDirectory::default();

    let unknown = lookup_center(&table, &dir, "ZZZZ", 4);
    assert!(!unknown.exists);
    assert_eq!(unknown.warning, Some(NO_BASELINE_WARNING));
    assert!(unknown.prefill.is_none());

    let outside = lookup_center(&table, &dir, "BBBB", 4);
    assert!(outside.exists);
    assert!(!outside.participating);
    assert_eq!(outside.warning, Some(NOT_PARTICIPATING_WARNING));

    let partial = lookup_center(&table, &dir, "ZZ", 4);
    assert_eq!(partial.warning, None);
}
