use crate::model::profile::{ScoringProfile, tier_points};
use crate::model::table::ReferenceTable;
use crate::pipeline::stage1_distributions::acceptance_population;
use crate::stats::numeric::{normalize_percent, round_half_up};
use crate::stats::percentile::percentile_rank;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubScores {
    pub achievement: u32,
    pub efficiency: u32,
    pub quality: u32,
}

impl SubScores {
    pub fn total(&self) -> u32 {
        self.achievement + self.efficiency + self.quality
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EfficiencyBreakdown {
    pub achievement: u32,
    pub improvement: u32,
}

impl EfficiencyBreakdown {
    pub fn score(&self) -> u32 {
        self.achievement.max(self.improvement)
    }
}

#[derive(Debug, Clone)]
pub struct Stage3Inputs<'a> {
    pub summary: &'a ReferenceTable,
    /// Normalized graft-survival population.
    pub graft_population: &'a [f64],
    pub center_code: &'a str,
    pub num_transplants: u32,
    pub target: f64,
    pub offer_accept_rate: f64,
    pub graft_survival: f64,
    pub profile: &'a ScoringProfile,
}

pub fn run_stage3(inputs: &Stage3Inputs<'_>) -> SubScores {
    SubScores {
        achievement: achievement_score(inputs.num_transplants, inputs.target, inputs.profile),
        efficiency: efficiency_score(
            inputs.summary,
            inputs.center_code,
            inputs.offer_accept_rate,
            inputs.profile,
        ),
        quality: quality_score(inputs.graft_population, inputs.graft_survival, inputs.profile),
    }
}

/// Step score on `n / target`; no interpolation between breakpoints.
pub fn achievement_score(n: u32, target: f64, profile: &ScoringProfile) -> u32 {
    if target == 0.0 || !target.is_finite() {
        return 0;
    }
    let ratio = n as f64 / target;
    tier_points(profile.achievement_tiers, ratio, 0)
}

pub fn efficiency_breakdown(
    summary: &ReferenceTable,
    center_code: &str,
    proposed: f64,
    profile: &ScoringProfile,
) -> Option<EfficiencyBreakdown> {
    let current = summary.find(center_code)?.acceptance_rate?;

    let population = acceptance_population(summary, false);
    let pct = percentile_rank(&population, proposed);
    let achievement = tier_points(profile.efficiency_tiers, pct as f64, 0);

    Some(EfficiencyBreakdown {
        achievement,
        improvement: improvement_points(current, proposed, profile),
    })
}

pub fn efficiency_score(
    summary: &ReferenceTable,
    center_code: &str,
    proposed: f64,
    profile: &ScoringProfile,
) -> u32 {
    efficiency_breakdown(summary, center_code, proposed, profile)
        .map(|b| b.score())
        .unwrap_or(0)
}

/// Partial credit for closing the gap between the center's current rate and
/// `current * improvement_multiplier`.
pub fn improvement_points(current: f64, proposed: f64, profile: &ScoringProfile) -> u32 {
    let benchmark = current * profile.improvement_multiplier;
    let full = profile.improvement_points;
    if proposed >= benchmark {
        return full;
    }
    if proposed < current {
        return 0;
    }
    let span = benchmark - current;
    if span <= 0.0 {
        return 0;
    }
    let pts = round_half_up(full as f64 * (proposed - current) / span);
    pts.clamp(0.0, full as f64) as u32
}

/// Never below `quality_floor`, even against an empty population.
pub fn quality_score(population: &[f64], proposed: f64, profile: &ScoringProfile) -> u32 {
    let pct = percentile_rank(population, normalize_percent(proposed));
    tier_points(profile.quality_tiers, pct as f64, profile.quality_floor)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_subscores.rs"]
mod tests;
