use std::io::Read;

use ::csv::{ReaderBuilder, Trim};

use crate::input::InputError;
use crate::model::cell::{CellValue, Record};

/// Reads a comma-separated table with a header row into keyed records.
///
/// Quoting follows RFC 4180, so quoted fields may hold commas and line
/// breaks. Numeric-looking fields become numbers, rows with no content are
/// skipped, short rows are padded with empty cells.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Record>, InputError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_string())
        .collect();
    if headers.iter().all(|h| h.is_empty()) {
        return Err(InputError::Parse("CSV header is empty".to_string()));
    }

    let mut records = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let row = result?;
        if row.iter().all(str::is_empty) {
            continue;
        }
        if row.len() > headers.len() {
            tracing::warn!(
                record = idx + 1,
                fields = row.len(),
                columns = headers.len(),
                "CSV row has more fields than the header; extra fields ignored"
            );
        }

        let mut record = Record::new();
        for (col, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = row.get(col).map(CellValue::parse).unwrap_or_default();
            record.insert(header.clone(), value);
        }
        records.push(record);
    }

    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/csv.rs"]
mod tests;
