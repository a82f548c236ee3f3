use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::model::score_input::ScoreInput;
use crate::stats::distribution::Distribution;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ResultStatus {
    Scored,
    InvalidCenter,
    NoBaseline,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultMeta {
    pub inputs: ScoreInput,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// Whole-dollar amounts per transplant. `downside` is the penalty magnitude.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PerTransplant {
    pub upside: f64,
    pub downside: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct PaymentTotals {
    pub upside_total: f64,
    pub downside_total: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentDetail {
    pub id: String,
    pub upside: f64,
    pub downside: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Distributions {
    pub acceptance: Distribution,
    pub graft_survival: Distribution,
}

/// Historical volumes per baseline year, then the projected next year.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolumeSeries {
    pub labels: Vec<String>,
    pub volumes: Vec<Option<f64>>,
    pub projected: Vec<f64>,
    pub target: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scores {
    pub transplant_target: f64,
    pub current_transplants: f64,
    pub distance_from_target: f64,
    pub acceptance_percentile: u32,
    pub graft_survival_percentile: u32,
    pub benchmark_acceptance_rate: f64,
    pub benchmark_graft_survival: Option<f64>,
    pub center_offer_accept_rate: Option<f64>,
    pub center_graft_survival: Option<f64>,
    pub center_transplants: Option<f64>,
    pub achievement_score: u32,
    pub efficiency_score: u32,
    pub quality_score: u32,
    pub total_score: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub meta: ResultMeta,
    pub status: ResultStatus,
    pub growth_rate: f64,
    pub per_transplant: PerTransplant,
    pub totals: PaymentTotals,
    pub distribution: Distributions,
    pub transplant_volume: VolumeSeries,
    pub scores: Scores,
    pub payments: Vec<PaymentDetail>,
    pub n_records: usize,
}

impl ScoreResult {
    /// Terminal result for an input that cannot be scored: every score and
    /// amount is zero, both distributions are empty and the historical
    /// volumes are unknown.
    pub fn zeroed(
        inputs: ScoreInput,
        model: &str,
        status: ResultStatus,
        volume_labels: Vec<String>,
    ) -> Self {
        let historical = volume_labels.len().saturating_sub(1);
        Self {
            meta: ResultMeta {
                inputs,
                model: model.to_string(),
                generated_at: None,
            },
            status,
            growth_rate: 0.0,
            per_transplant: PerTransplant::default(),
            totals: PaymentTotals::default(),
            distribution: Distributions::default(),
            transplant_volume: VolumeSeries {
                labels: volume_labels,
                volumes: vec![None; historical],
                projected: vec![0.0],
                target: 0.0,
            },
            scores: Scores {
                benchmark_graft_survival: Some(0.0),
                center_offer_accept_rate: Some(0.0),
                center_graft_survival: Some(0.0),
                center_transplants: Some(0.0),
                ..Scores::default()
            },
            payments: Vec::new(),
            n_records: 0,
        }
    }

    pub fn is_scored(&self) -> bool {
        self.status == ResultStatus::Scored
    }

    pub fn with_timestamp(mut self, at: DateTime<Utc>) -> Self {
        self.meta.generated_at = Some(at);
        self
    }
}
