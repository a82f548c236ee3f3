use crate::model::cell::CellValue;

/// Reads a cell as a finite number, or `fallback` when it has none.
pub fn as_num(cell: &CellValue, fallback: f64) -> f64 {
    cell.as_finite().unwrap_or(fallback)
}

/// Maps a rate to the 0-100 scale: values above 1 are taken as percentages
/// already, values at or below 1 as fractions.
pub fn normalize_percent(v: f64) -> f64 {
    if v > 1.0 { v } else { v * 100.0 }
}

/// Rounds half-way cases towards positive infinity (`-2.5 -> -2`, `2.5 -> 3`).
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    let m = sum / values.len() as f64;
    if m.is_finite() { Some(m) } else { None }
}

/// Keeps only finite values.
pub fn finite_values(values: impl IntoIterator<Item = f64>) -> Vec<f64> {
    values.into_iter().filter(|v| v.is_finite()).collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/numeric.rs"]
mod tests;
