use super::*;
use crate::model::profile::ScoringProfile;
use crate::model::score_input::ScoreInput;
use crate::pipeline::stage5_compile::compile_center_results;
use crate::test_support::{make_temp_dir, national_tables};

#[test]
fn test_write_reports_creates_both_files() {
    let result = compile_center_results(
        &national_tables(),
        &ScoreInput::new("AAAA", 160, 2.5, 0.99),
        &ScoringProfile::default(),
    );
    let dir = make_temp_dir("reports").join("nested");
    let paths = write_reports(&result, &dir).unwrap();

    assert_eq!(paths.summary_json, dir.join("summary.json"));
    assert_eq!(paths.report_txt, dir.join("report.txt"));

    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&paths.summary_json).unwrap()).unwrap();
    assert_eq!(json["status"], "scored");
    assert_eq!(json["scores"]["totalScore"], 100);
    assert_eq!(json["meta"]["inputs"]["centerCode"], "AAAA");

    let text = std::fs::read_to_string(&paths.report_txt).unwrap();
    assert!(text.contains("Total:       100 / 100"));
}
