use std::path::Path;

use thiserror::Error;

pub mod cache;
pub mod centers;
pub mod csv;
pub mod json;
pub mod store;

use self::cache::open_maybe_gz;
use self::csv::parse_csv;
use self::json::parse_json_records;

use crate::model::cell::Record;
use crate::model::schema::ReferenceSchema;
use crate::model::table::{ReferenceTable, ReferenceTables};

#[derive(Debug, Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Csv,
    Json,
}

/// Picks the format from the file name, ignoring a trailing `.gz`.
pub fn detect_format(path: &Path) -> Result<RecordFormat, InputError> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    let name = name.strip_suffix(".gz").unwrap_or(&name);
    if name.ends_with(".csv") {
        Ok(RecordFormat::Csv)
    } else if name.ends_with(".json") {
        Ok(RecordFormat::Json)
    } else {
        Err(InputError::InvalidInput(format!(
            "unsupported reference file {} (expected .csv or .json, optionally .gz)",
            path.display()
        )))
    }
}

/// Reads a JSON schema override; absent keys keep their defaults.
pub fn load_schema(path: Option<&Path>) -> Result<ReferenceSchema, InputError> {
    let Some(path) = path else {
        return Ok(ReferenceSchema::default());
    };
    let text = std::fs::read_to_string(path)?;
    let schema: ReferenceSchema = serde_json::from_str(&text)?;
    tracing::debug!(path = %path.display(), "reference schema loaded");
    Ok(schema)
}

pub fn load_records(path: &Path) -> Result<Vec<Record>, InputError> {
    if !path.exists() {
        return Err(InputError::MissingInput(path.display().to_string()));
    }
    let format = detect_format(path)?;
    let reader = open_maybe_gz(path)?;
    let records = match format {
        RecordFormat::Csv => parse_csv(reader)?,
        RecordFormat::Json => parse_json_records(reader)?,
    };
    tracing::info!(path = %path.display(), rows = records.len(), "reference file loaded");
    Ok(records)
}

pub fn load_reference_table(
    path: &Path,
    schema: &ReferenceSchema,
) -> Result<ReferenceTable, InputError> {
    let records = load_records(path)?;
    audit_columns(&records, schema, path);
    Ok(ReferenceTable::from_records(&records, schema))
}

pub fn load_reference_tables(
    summary: &Path,
    graft: Option<&Path>,
    schema: &ReferenceSchema,
) -> Result<ReferenceTables, InputError> {
    let summary_table = load_reference_table(summary, schema)?;
    let graft_table = match graft {
        Some(path) => load_reference_table(path, schema)?,
        None => ReferenceTable::default(),
    };
    Ok(ReferenceTables::new(summary_table, graft_table).with_schema(schema.clone()))
}

/// Warns about schema columns the file never mentions and rows without a
/// center code. Such rows still feed the national aggregates.
pub fn audit_columns(records: &[Record], schema: &ReferenceSchema, path: &Path) {
    let Some(first) = records.first() else {
        warn_empty(path);
        return;
    };
    let mut expected = vec![
        schema.center_code.clone(),
        schema.pediatric.clone(),
        schema.performance_transplants_key(),
        schema.acceptance_key(),
        schema.graft_key(),
    ];
    expected.extend(schema.baseline_keys());
    for key in expected {
        if !first.contains_key(&key) {
            tracing::warn!(path = %path.display(), column = %key, "reference column not found");
        }
    }

    let missing_codes = records
        .iter()
        .filter(|r| {
            r.get(&schema.center_code)
                .and_then(|c| c.as_text())
                .is_none()
        })
        .count();
    if missing_codes > 0 {
        tracing::warn!(
            path = %path.display(),
            rows = missing_codes,
            "rows without a center code; they cannot be looked up"
        );
    }
}

fn warn_empty(path: &Path) {
    tracing::warn!(path = %path.display(), "reference file has no rows");
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
