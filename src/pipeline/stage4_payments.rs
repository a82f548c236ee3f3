use rand::Rng;

use crate::model::profile::ScoringProfile;
use crate::model::result::{PaymentDetail, PaymentTotals, PerTransplant};
use crate::stats::numeric::round_half_up;

/// Unrounded per-transplant amounts for one total score.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaymentSchedule {
    pub per_upside: f64,
    pub per_downside: f64,
}

impl PaymentSchedule {
    pub fn per_transplant(&self) -> PerTransplant {
        PerTransplant {
            upside: round_half_up(self.per_upside),
            downside: round_half_up(self.per_downside),
        }
    }

    pub fn totals(&self, n: u32) -> PaymentTotals {
        PaymentTotals {
            upside_total: round_half_up(self.per_upside * n as f64),
            downside_total: round_half_up(self.per_downside * n as f64),
        }
    }
}

/// Upside is paid only at or above `upside_threshold`, the downside penalty
/// only below `downside_threshold`; the corridor in between pays nothing.
pub fn payment_schedule(total_score: u32, profile: &ScoringProfile) -> PaymentSchedule {
    let s = total_score as f64;
    let mut per_upside =
        profile.upside_rate * (s - profile.upside_threshold as f64) / profile.score_span;
    let mut per_downside =
        profile.downside_rate * (profile.downside_threshold as f64 - s) / profile.score_span;

    let (lo, hi) = profile.neutral_corridor;
    if (lo..=hi).contains(&total_score) {
        per_upside = 0.0;
        per_downside = 0.0;
    }
    if total_score < profile.upside_threshold {
        per_upside = 0.0;
    }
    if total_score >= profile.downside_threshold {
        per_downside = 0.0;
    }

    PaymentSchedule {
        per_upside,
        per_downside,
    }
}

/// Per-transplant display rows, each amount scaled by an independent
/// uniform draw. Capped at `detail_cap` rows.
pub fn payment_details<R: Rng + ?Sized>(
    schedule: &PaymentSchedule,
    n: u32,
    profile: &ScoringProfile,
    rng: &mut R,
) -> Vec<PaymentDetail> {
    let count = (n as usize).min(profile.detail_cap);
    let (up_lo, up_hi) = profile.upside_jitter;
    let (down_lo, down_hi) = profile.downside_jitter;

    (0..count)
        .map(|i| {
            let up = schedule.per_upside * rng.gen_range(up_lo..=up_hi);
            let down = schedule.per_downside * rng.gen_range(down_lo..=down_hi);
            PaymentDetail {
                id: format!("TX-{}", i + 1),
                upside: round_half_up(up),
                downside: round_half_up(down),
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_payments.rs"]
mod tests;
