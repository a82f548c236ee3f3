use crate::model::profile::ScoringProfile;
use crate::model::table::{ReferenceTable, ReferenceTables};
use crate::stats::distribution::{Distribution, build_distribution};
use crate::stats::numeric::normalize_percent;

#[derive(Debug, Clone)]
pub struct Stage1Output {
    /// Performance-year acceptance rates of every center, pediatric included.
    pub acceptance_values: Vec<f64>,
    /// Positive graft-survival rates on the 0-100 scale.
    pub graft_values: Vec<f64>,
    pub acceptance: Distribution,
    pub graft_survival: Distribution,
}

pub fn run_stage1(tables: &ReferenceTables, profile: &ScoringProfile) -> Stage1Output {
    let acceptance_values = acceptance_population(&tables.summary, true);
    let graft_values = graft_population(tables);

    let acceptance =
        build_distribution(&acceptance_values, profile.bins).unwrap_or_else(Distribution::empty);
    let graft_survival =
        build_distribution(&graft_values, profile.bins).unwrap_or_else(Distribution::empty);

    Stage1Output {
        acceptance_values,
        graft_values,
        acceptance,
        graft_survival,
    }
}

pub fn acceptance_population(table: &ReferenceTable, include_pediatric: bool) -> Vec<f64> {
    table
        .rows()
        .iter()
        .filter(|r| include_pediatric || !r.pediatric)
        .filter_map(|r| r.acceptance_rate)
        .collect()
}

/// Normalized graft-survival population of one table: finite, strictly
/// positive rates mapped to 0-100.
pub fn graft_values(table: &ReferenceTable) -> Vec<f64> {
    table
        .rows()
        .iter()
        .filter_map(|r| r.graft_survival)
        .filter(|&v| v > 0.0)
        .map(normalize_percent)
        .collect()
}

/// Uses whichever of the graft table and the summary table has more usable
/// graft-survival values; the graft table wins ties.
pub fn graft_population(tables: &ReferenceTables) -> Vec<f64> {
    let from_graft = graft_values(&tables.graft);
    let from_summary = graft_values(&tables.summary);
    if from_summary.len() > from_graft.len() {
        from_summary
    } else {
        from_graft
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_distributions.rs"]
mod tests;
