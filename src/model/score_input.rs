use serde::{Deserialize, Serialize};

use crate::model::cell::CellValue;
use crate::stats::numeric::as_num;

/// What a caller proposes for one center.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreInput {
    pub center_code: String,
    pub num_transplants: u32,
    pub offer_accept_rate: f64,
    pub graft_survival: f64,
}

impl ScoreInput {
    pub fn new(
        center_code: impl Into<String>,
        num_transplants: u32,
        offer_accept_rate: f64,
        graft_survival: f64,
    ) -> Self {
        Self {
            center_code: center_code.into(),
            num_transplants,
            offer_accept_rate: finite_or_zero(offer_accept_rate),
            graft_survival: finite_or_zero(graft_survival),
        }
    }

    /// Builds an input from raw form cells. Anything that is not a finite
    /// number becomes 0; the volume is truncated to a non-negative integer.
    pub fn coerce(
        center_code: &str,
        num_transplants: &CellValue,
        offer_accept_rate: &CellValue,
        graft_survival: &CellValue,
    ) -> Self {
        let n = as_num(num_transplants, 0.0).max(0.0).trunc();
        Self {
            center_code: center_code.to_string(),
            num_transplants: n.min(u32::MAX as f64) as u32,
            offer_accept_rate: as_num(offer_accept_rate, 0.0),
            graft_survival: as_num(graft_survival, 0.0),
        }
    }
}

fn finite_or_zero(v: f64) -> f64 {
    if v.is_finite() { v } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/score_input.rs"]
mod tests;
