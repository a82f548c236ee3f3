use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::model::result::ScoreResult;
use crate::report::ReportError;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub summary_json: PathBuf,
    pub report_txt: PathBuf,
}

pub fn write_reports(result: &ScoreResult, out_dir: &Path) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(out_dir)?;

    let summary_json = out_dir.join("summary.json");
    let json = render_summary_json(result)?;
    write_text(&summary_json, &json)?;

    let report_txt = out_dir.join("report.txt");
    write_text(&report_txt, &render_report_text(result))?;

    tracing::info!(
        summary = %summary_json.display(),
        report = %report_txt.display(),
        "reports written"
    );

    Ok(ReportPaths {
        summary_json,
        report_txt,
    })
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage6_report.rs"]
mod tests;
