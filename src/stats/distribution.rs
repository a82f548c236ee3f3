use serde::Serialize;

use crate::stats::numeric::{finite_values, round_half_up};

pub const DEFAULT_BINS: usize = 10;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Quantiles {
    pub p10: Option<f64>,
    pub p25: Option<f64>,
    pub p50: Option<f64>,
    pub p75: Option<f64>,
    pub p90: Option<f64>,
}

/// Equal-width histogram of a national population plus nearest-rank
/// quantiles. `bins` holds the rounded bin midpoints, `freqs` the rounded
/// share of observations per bin in percent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Distribution {
    pub bins: Vec<String>,
    pub freqs: Vec<u32>,
    pub values: Vec<f64>,
    pub percentiles: Quantiles,
}

impl Distribution {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

pub fn build_distribution(values: &[f64], bins: usize) -> Option<Distribution> {
    let mut sorted = finite_values(values.iter().copied());
    if sorted.is_empty() || bins == 0 {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let min = sorted[0];
    let max = sorted[sorted.len() - 1];
    let mut bin_size = (max - min) / bins as f64;
    if bin_size == 0.0 || !bin_size.is_finite() {
        bin_size = 1.0;
    }

    let mut counts = vec![0usize; bins];
    for &v in &sorted {
        let raw = ((v - min) / bin_size).floor();
        let idx = if raw <= 0.0 {
            0
        } else {
            (raw as usize).min(bins - 1)
        };
        counts[idx] += 1;
    }

    let labels = (0..bins)
        .map(|i| {
            let start = min + i as f64 * bin_size;
            let end = min + (i + 1) as f64 * bin_size;
            format!("{}", round_half_up((start + end) / 2.0) as i64)
        })
        .collect();

    let n = sorted.len() as f64;
    let freqs = counts
        .iter()
        .map(|&c| round_half_up(c as f64 / n * 100.0) as u32)
        .collect();

    let percentiles = Quantiles {
        p10: nearest_rank(&sorted, 0.10),
        p25: nearest_rank(&sorted, 0.25),
        p50: nearest_rank(&sorted, 0.50),
        p75: nearest_rank(&sorted, 0.75),
        p90: nearest_rank(&sorted, 0.90),
    };

    Some(Distribution {
        bins: labels,
        freqs,
        values: sorted,
        percentiles,
    })
}

/// `sorted[floor(q * len)]`, without interpolation.
pub fn nearest_rank(sorted: &[f64], q: f64) -> Option<f64> {
    let idx = (sorted.len() as f64 * q).floor();
    if idx < 0.0 {
        return None;
    }
    sorted.get(idx as usize).copied()
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/distribution.rs"]
mod tests;
