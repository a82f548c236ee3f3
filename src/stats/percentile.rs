use crate::stats::numeric::{finite_values, round_half_up};

/// Share of `population` strictly below `value`, as a whole percentage.
///
/// Ties are not counted as below. Non-finite members are ignored and an
/// empty population ranks everything at 0.
pub fn percentile_rank(population: &[f64], value: f64) -> u32 {
    let mut sorted = finite_values(population.iter().copied());
    if sorted.is_empty() {
        return 0;
    }
    sorted.sort_by(f64::total_cmp);
    let below = sorted.partition_point(|&v| v < value);
    round_half_up(100.0 * below as f64 / sorted.len() as f64) as u32
}

#[cfg(test)]
#[path = "../../tests/src_inline/stats/percentile.rs"]
mod tests;
