use std::io::BufRead;

use crate::input::InputError;
use crate::model::cell::Record;

/// Reads a JSON array of flat objects. Values may be null, numbers,
/// strings or booleans.
pub fn parse_json_records<R: BufRead>(reader: R) -> Result<Vec<Record>, InputError> {
    let records: Vec<Record> = serde_json::from_reader(reader)?;
    Ok(records)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/json.rs"]
mod tests;
