use crate::model::result::ScoreResult;

pub fn render_summary_json(result: &ScoreResult) -> Result<String, serde_json::Error> {
    let mut out = serde_json::to_string_pretty(result)?;
    out.push('\n');
    Ok(out)
}
