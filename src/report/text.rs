use crate::model::result::{ResultStatus, ScoreResult};
use crate::report::{currency, format_f64_2, format_opt, percent};
use crate::stats::distribution::Distribution;

pub fn render_report_text(result: &ScoreResult) -> String {
    let mut out = String::new();
    let inputs = &result.meta.inputs;
    let scores = &result.scores;

    out.push_str("IOTA Transplant Center Payment Estimate\n");
    out.push_str("=======================================\n\n");

    out.push_str(&format!("Center: {}\n", inputs.center_code.trim()));
    out.push_str(&format!("Model: {}\n", result.meta.model));
    if let Some(at) = result.meta.generated_at {
        out.push_str(&format!("Generated: {}\n", at.to_rfc3339()));
    }
    out.push_str(&format!("Status: {}\n", status_label(result.status)));
    out.push_str(&format!(
        "Proposed: {} transplants, offer acceptance {}, graft survival {}\n\n",
        inputs.num_transplants,
        format_f64_2(inputs.offer_accept_rate),
        format_f64_2(inputs.graft_survival)
    ));

    out.push_str("1. Scores\n");
    out.push_str(&format!("Achievement: {} / 60\n", scores.achievement_score));
    out.push_str(&format!("Efficiency:  {} / 20\n", scores.efficiency_score));
    out.push_str(&format!("Quality:     {} / 20\n", scores.quality_score));
    out.push_str(&format!("Total:       {} / 100\n\n", scores.total_score));

    out.push_str("2. Payments\n");
    out.push_str(&format!(
        "Per transplant: upside {}, downside {}\n",
        currency(Some(result.per_transplant.upside)),
        currency(Some(result.per_transplant.downside))
    ));
    out.push_str(&format!(
        "Totals: upside {}, downside {}\n",
        currency(Some(result.totals.upside_total)),
        currency(Some(result.totals.downside_total))
    ));
    out.push_str(&format!("{}\n", payment_statement(scores.total_score)));
    if result.n_records > 0 {
        out.push_str(&format!("Detail rows: {}\n", result.n_records));
    }
    out.push('\n');

    out.push_str("3. Volume target\n");
    out.push_str(&format!(
        "National growth rate: {}\n",
        percent(Some(result.growth_rate * 100.0))
    ));
    out.push_str(&format!(
        "Target: {}\nDistance from target: {}\n",
        format_f64_2(scores.transplant_target),
        format_f64_2(scores.distance_from_target)
    ));
    let series = &result.transplant_volume;
    for (idx, label) in series.labels.iter().enumerate() {
        let value = match series.volumes.get(idx) {
            Some(v) => format_opt(*v),
            None => {
                let projected = series.projected.get(idx - series.volumes.len()).copied();
                format!("{} (projected)", format_opt(projected))
            }
        };
        out.push_str(&format!("  {}: {}\n", label, value));
    }
    out.push('\n');

    out.push_str("4. National position\n");
    out.push_str(&format!(
        "Offer acceptance percentile: {} (center last reported {}, national benchmark {})\n",
        scores.acceptance_percentile,
        format_opt(scores.center_offer_accept_rate),
        format_f64_2(scores.benchmark_acceptance_rate)
    ));
    out.push_str(&format!(
        "Graft survival percentile: {} (center last reported {}, national benchmark {})\n",
        scores.graft_survival_percentile,
        percent(scores.center_graft_survival),
        percent(scores.benchmark_graft_survival)
    ));
    out.push_str(&format!(
        "Acceptance distribution: {}\n",
        quantile_line(&result.distribution.acceptance)
    ));
    out.push_str(&format!(
        "Graft survival distribution: {}\n",
        quantile_line(&result.distribution.graft_survival)
    ));

    out
}

fn status_label(status: ResultStatus) -> &'static str {
    match status {
        ResultStatus::Scored => "scored",
        ResultStatus::InvalidCenter => "invalid center code",
        ResultStatus::NoBaseline => "no baseline data for this center",
    }
}

fn payment_statement(total: u32) -> &'static str {
    if total >= 60 {
        "Score qualifies for upside payment."
    } else if total < 40 {
        "Score falls in the downside payment range."
    } else {
        "Score falls in the neutral corridor; no payment adjustment."
    }
}

fn quantile_line(dist: &Distribution) -> String {
    if dist.is_empty() {
        return "no data".to_string();
    }
    let q = &dist.percentiles;
    format!(
        "n={} p10={} p25={} p50={} p75={} p90={}",
        dist.values.len(),
        format_opt(q.p10),
        format_opt(q.p25),
        format_opt(q.p50),
        format_opt(q.p75),
        format_opt(q.p90)
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
