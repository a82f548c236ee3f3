use crate::model::cell::{CellValue, Record};
use crate::model::schema::ReferenceSchema;
use crate::stats::numeric::{mean, normalize_percent};

/// One center of the national reference table, with every numeric field
/// already coerced. Missing or non-finite cells are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct CenterRow {
    /// Trimmed, upper-cased code; empty when the source row had none.
    pub code: String,
    pub pediatric: bool,
    pub iota: bool,
    pub baseline_transplants: [Option<f64>; 3],
    pub performance_transplants: Option<f64>,
    pub acceptance_rate: Option<f64>,
    pub graft_survival: Option<f64>,
}

impl CenterRow {
    pub fn from_record(record: &Record, schema: &ReferenceSchema) -> Self {
        let cell = |key: &str| record.get(key).unwrap_or(&CellValue::Empty);
        let [k0, k1, k2] = schema.baseline_keys();

        Self {
            code: cell(&schema.center_code)
                .as_text()
                .map(|c| canonical_code(&c))
                .unwrap_or_default(),
            pediatric: cell(&schema.pediatric).is_flag_set(),
            iota: cell(&schema.iota).is_flag_set(),
            baseline_transplants: [
                cell(&k0).as_finite(),
                cell(&k1).as_finite(),
                cell(&k2).as_finite(),
            ],
            performance_transplants: cell(&schema.performance_transplants_key()).as_finite(),
            acceptance_rate: cell(&schema.acceptance_key()).as_finite(),
            graft_survival: cell(&schema.graft_key()).as_finite(),
        }
    }

    /// Mean of the finite baseline-year counts.
    pub fn baseline_average(&self) -> Option<f64> {
        let vals: Vec<f64> = self.baseline_transplants.iter().flatten().copied().collect();
        mean(&vals)
    }

    pub fn graft_survival_pct(&self) -> Option<f64> {
        self.graft_survival.map(normalize_percent)
    }
}

pub fn canonical_code(raw: &str) -> String {
    raw.trim().to_ascii_uppercase()
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/row.rs"]
mod tests;
