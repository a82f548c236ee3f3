use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One raw reference-table row, keyed by column header.
pub type Record = BTreeMap<String, CellValue>;

/// A single tabular cell as handed over by a loader.
///
/// Cells arrive already parsed: numeric-looking CSV text becomes `Number`,
/// JSON values keep their JSON type. Nothing here ever fails; callers ask for
/// the interpretation they need and get `None` when it does not apply.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
    #[default]
    Empty,
}

impl CellValue {
    /// Parses one CSV field. Blank fields are `Empty`, finite numeric text is
    /// a `Number`, anything else stays `Text`.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => CellValue::Number(v),
            _ => CellValue::Text(trimmed.to_string()),
        }
    }

    pub fn as_finite(&self) -> Option<f64> {
        let v = match self {
            CellValue::Number(v) => *v,
            CellValue::Bool(b) => {
                if *b {
                    1.0
                } else {
                    0.0
                }
            }
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Empty => return None,
        };
        if v.is_finite() { Some(v) } else { None }
    }

    /// Pediatric and participation flags are written as `1`, `1.0` or the
    /// string `"1.0"` depending on the exporter.
    pub fn is_flag_set(&self) -> bool {
        match self {
            CellValue::Number(v) => *v == 1.0,
            CellValue::Text(s) => s.trim() == "1.0",
            CellValue::Bool(_) | CellValue::Empty => false,
        }
    }

    pub fn as_text(&self) -> Option<String> {
        match self {
            CellValue::Text(s) => {
                let t = s.trim();
                if t.is_empty() { None } else { Some(t.to_string()) }
            }
            CellValue::Number(v) if v.is_finite() => {
                if v.fract() == 0.0 && v.abs() < 1e15 {
                    Some(format!("{}", *v as i64))
                } else {
                    Some(v.to_string())
                }
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/cell.rs"]
mod tests;
