use super::*;

#[test]
fn test_default_keys_and_labels() {
    let schema = ReferenceSchema::default();
    assert!(schema.performance_in_baseline());
    assert_eq!(schema.performance_transplants_key(), "2024-2025 - Transplants");
    assert_eq!(schema.graft_key(), "2024-2025 - Graft Survival Rate");
    assert_eq!(
        schema.volume_labels(),
        vec!["2022-2023", "2023-2024", "2024-2025", "2025-2026"]
    );
}

#[test]
fn test_performance_year_outside_baseline_gets_its_own_label() {
    let schema = ReferenceSchema {
        performance_year: "2025-2026".to_string(),
        projection_year: "2026-2027".to_string(),
        ..ReferenceSchema::default()
    };
    assert!(!schema.performance_in_baseline());
    assert_eq!(
        schema.volume_labels(),
        vec!["2022-2023", "2023-2024", "2024-2025", "2025-2026", "2026-2027"]
    );
}
