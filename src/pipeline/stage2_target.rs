use crate::model::row::CenterRow;
use crate::model::table::ReferenceTable;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stage2Output {
    pub growth_rate: f64,
    pub baseline_average: f64,
    pub target: f64,
}

/// National year-over-year volume growth, pediatric centers excluded.
///
/// Baseline averages and performance-year counts are summed independently,
/// so a row missing one of them still contributes the other.
pub fn national_growth_rate(table: &ReferenceTable) -> f64 {
    let mut baseline_total = 0.0;
    let mut perf_total = 0.0;

    for row in table.non_pediatric() {
        if let Some(avg) = row.baseline_average() {
            baseline_total += avg;
        }
        if let Some(perf) = row.performance_transplants {
            perf_total += perf;
        }
    }

    if baseline_total == 0.0 || !baseline_total.is_finite() {
        return 0.0;
    }
    let rate = perf_total / baseline_total - 1.0;
    if rate.is_finite() { rate } else { 0.0 }
}

/// `None` when the center has no finite baseline average.
pub fn run_stage2(table: &ReferenceTable, row: &CenterRow) -> Option<Stage2Output> {
    let baseline_average = row.baseline_average()?;
    let growth_rate = national_growth_rate(table);
    tracing::debug!(
        growth_rate,
        baseline_average,
        center = %row.code,
        "national growth computed"
    );
    Some(Stage2Output {
        growth_rate,
        baseline_average,
        target: baseline_average * (1.0 + growth_rate),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_target.rs"]
mod tests;
