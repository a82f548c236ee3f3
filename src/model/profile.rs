/// Lower bound of a scoring tier and the points awarded from it upward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    pub min: f64,
    pub points: u32,
}

const fn tier(min: f64, points: u32) -> Tier {
    Tier { min, points }
}

#[derive(Debug, Clone)]
pub struct ScoringProfile {
    pub model_label: &'static str,
    pub code_len: usize,
    pub bins: usize,

    /// Volume ratio tiers, highest first.
    pub achievement_tiers: &'static [Tier],
    /// Acceptance-rate percentile tiers, highest first.
    pub efficiency_tiers: &'static [Tier],
    pub improvement_multiplier: f64,
    pub improvement_points: u32,
    /// Graft-survival percentile tiers, highest first.
    pub quality_tiers: &'static [Tier],
    pub quality_floor: u32,

    pub upside_rate: f64,
    pub downside_rate: f64,
    pub upside_threshold: u32,
    pub downside_threshold: u32,
    pub score_span: f64,
    pub neutral_corridor: (u32, u32),

    pub detail_cap: usize,
    pub upside_jitter: (f64, f64),
    pub downside_jitter: (f64, f64),

    pub fallback_acceptance_benchmark: f64,
}

static ACHIEVEMENT_V1: [Tier; 7] = [
    tier(1.25, 60),
    tier(1.20, 55),
    tier(1.15, 50),
    tier(1.05, 40),
    tier(0.95, 30),
    tier(0.85, 20),
    tier(0.75, 10),
];

static EFFICIENCY_V1: [Tier; 4] = [tier(80.0, 20), tier(60.0, 15), tier(40.0, 10), tier(20.0, 6)];

static QUALITY_V1: [Tier; 5] = [
    tier(80.0, 20),
    tier(60.0, 18),
    tier(40.0, 16),
    tier(20.0, 14),
    tier(10.0, 12),
];

impl ScoringProfile {
    pub fn iota_v1() -> Self {
        Self {
            model_label: "iota-v1-sim",
            code_len: 4,
            bins: 10,
            achievement_tiers: &ACHIEVEMENT_V1,
            efficiency_tiers: &EFFICIENCY_V1,
            improvement_multiplier: 1.2,
            improvement_points: 15,
            quality_tiers: &QUALITY_V1,
            quality_floor: 10,
            upside_rate: 15_000.0,
            downside_rate: 2_000.0,
            upside_threshold: 60,
            downside_threshold: 40,
            score_span: 40.0,
            neutral_corridor: (41, 59),
            detail_cap: 1000,
            upside_jitter: (0.85, 1.15),
            downside_jitter: (0.75, 1.15),
            fallback_acceptance_benchmark: 52.0,
        }
    }

    pub fn achievement_max(&self) -> u32 {
        max_points(self.achievement_tiers, 0)
    }

    pub fn efficiency_max(&self) -> u32 {
        max_points(self.efficiency_tiers, self.improvement_points)
    }

    pub fn quality_max(&self) -> u32 {
        max_points(self.quality_tiers, self.quality_floor)
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::iota_v1()
    }
}

/// Points of the first tier whose lower bound `value` reaches, else `floor`.
pub fn tier_points(tiers: &[Tier], value: f64, floor: u32) -> u32 {
    tiers
        .iter()
        .find(|t| value >= t.min)
        .map(|t| t.points)
        .unwrap_or(floor)
}

fn max_points(tiers: &[Tier], other: u32) -> u32 {
    tiers.iter().map(|t| t.points).fold(other, u32::max)
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/profile.rs"]
mod tests;
