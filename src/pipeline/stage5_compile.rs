use rand::Rng;

use crate::model::profile::ScoringProfile;
use crate::model::row::CenterRow;
use crate::model::result::{
    Distributions, ResultMeta, ResultStatus, ScoreResult, Scores, VolumeSeries,
};
use crate::model::schema::ReferenceSchema;
use crate::model::score_input::ScoreInput;
use crate::model::table::ReferenceTables;
use crate::pipeline::stage1_distributions::run_stage1;
use crate::pipeline::stage2_target::run_stage2;
use crate::pipeline::stage3_subscores::{Stage3Inputs, run_stage3};
use crate::pipeline::stage4_payments::{payment_details, payment_schedule};
use crate::stats::numeric::{mean, normalize_percent};
use crate::stats::percentile::percentile_rank;

/// Scores one center against the national reference tables.
///
/// Unknown or malformed codes and centers without a finite baseline average
/// produce a zeroed result rather than an error. The output is fully
/// determined by the arguments.
pub fn compile_center_results(
    tables: &ReferenceTables,
    input: &ScoreInput,
    profile: &ScoringProfile,
) -> ScoreResult {
    compile(tables, input, profile)
}

/// Same as [`compile_center_results`], plus the jittered per-transplant
/// detail rows drawn from `rng`. Totals never see the jitter.
pub fn compile_center_results_with_details<R: Rng + ?Sized>(
    tables: &ReferenceTables,
    input: &ScoreInput,
    profile: &ScoringProfile,
    rng: &mut R,
) -> ScoreResult {
    let mut result = compile(tables, input, profile);
    if result.is_scored() {
        let schedule = payment_schedule(result.scores.total_score, profile);
        result.payments = payment_details(&schedule, input.num_transplants, profile, rng);
        result.n_records = result.payments.len();
    }
    result
}

fn compile(tables: &ReferenceTables, input: &ScoreInput, profile: &ScoringProfile) -> ScoreResult {
    let volume_labels = tables.schema.volume_labels();
    let code = input.center_code.trim();

    if code.chars().count() != profile.code_len {
        tracing::debug!(code, "center code rejected");
        return ScoreResult::zeroed(
            input.clone(),
            profile.model_label,
            ResultStatus::InvalidCenter,
            volume_labels,
        );
    }

    let Some(row) = tables
        .summary
        .find(code)
        .filter(|r| r.baseline_average().is_some())
    else {
        tracing::debug!(code, "no baseline data for center");
        return ScoreResult::zeroed(
            input.clone(),
            profile.model_label,
            ResultStatus::NoBaseline,
            volume_labels,
        );
    };

    let stage1 = run_stage1(tables, profile);
    let Some(stage2) = run_stage2(&tables.summary, row) else {
        return ScoreResult::zeroed(
            input.clone(),
            profile.model_label,
            ResultStatus::NoBaseline,
            volume_labels,
        );
    };

    let n = input.num_transplants;
    let sub = run_stage3(&Stage3Inputs {
        summary: &tables.summary,
        graft_population: &stage1.graft_values,
        center_code: code,
        num_transplants: n,
        target: stage2.target,
        offer_accept_rate: input.offer_accept_rate,
        graft_survival: input.graft_survival,
        profile,
    });
    let total = sub.total();
    let schedule = payment_schedule(total, profile);

    let graft_input = normalize_percent(input.graft_survival);
    let benchmark_acceptance_rate = mean(&stage1.acceptance_values)
        .filter(|&m| m != 0.0)
        .unwrap_or(profile.fallback_acceptance_benchmark);

    let scores = Scores {
        transplant_target: stage2.target,
        current_transplants: n as f64,
        distance_from_target: stage2.target - n as f64,
        acceptance_percentile: percentile_rank(&stage1.acceptance_values, input.offer_accept_rate),
        graft_survival_percentile: percentile_rank(&stage1.graft_values, graft_input),
        benchmark_acceptance_rate,
        benchmark_graft_survival: mean(&stage1.graft_values),
        center_offer_accept_rate: row.acceptance_rate,
        center_graft_survival: row.graft_survival_pct(),
        center_transplants: row.performance_transplants,
        achievement_score: sub.achievement,
        efficiency_score: sub.efficiency,
        quality_score: sub.quality,
        total_score: total,
    };

    let transplant_volume = VolumeSeries {
        labels: volume_labels,
        volumes: historical_volumes(row, &tables.schema),
        projected: vec![n as f64],
        target: stage2.target,
    };

    ScoreResult {
        meta: ResultMeta {
            inputs: input.clone(),
            model: profile.model_label.to_string(),
            generated_at: None,
        },
        status: ResultStatus::Scored,
        growth_rate: stage2.growth_rate,
        per_transplant: schedule.per_transplant(),
        totals: schedule.totals(n),
        distribution: Distributions {
            acceptance: stage1.acceptance,
            graft_survival: stage1.graft_survival,
        },
        transplant_volume,
        scores,
        payments: Vec::new(),
        n_records: 0,
    }
}

/// Baseline counts, plus the performance-year count when that year is not
/// already a baseline year.
fn historical_volumes(row: &CenterRow, schema: &ReferenceSchema) -> Vec<Option<f64>> {
    let mut volumes = row.baseline_transplants.to_vec();
    if !schema.performance_in_baseline() {
        volumes.push(row.performance_transplants);
    }
    volumes
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_compile.rs"]
mod tests;
