pub mod json;
pub mod text;

use thiserror::Error;

use crate::stats::numeric::round_half_up;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

const MISSING: &str = "n/a";

/// Whole dollars with thousands separators, e.g. `$12,345` or `-$750`.
pub fn currency(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => {
            let rounded = round_half_up(x);
            let sign = if rounded < 0.0 { "-" } else { "" };
            format!("{sign}${}", group_thousands(rounded.abs() as u64))
        }
        _ => MISSING.to_string(),
    }
}

/// One decimal place and a percent sign, e.g. `95.4%`.
pub fn percent(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format!("{:.1}%", x),
        _ => MISSING.to_string(),
    }
}

pub fn format_f64_2(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_opt(v: Option<f64>) -> String {
    match v {
        Some(x) if x.is_finite() => format_f64_2(x),
        _ => MISSING.to_string(),
    }
}

fn group_thousands(mut n: u64) -> String {
    if n == 0 {
        return "0".to_string();
    }
    let mut groups = Vec::new();
    while n > 0 {
        groups.push(n % 1000);
        n /= 1000;
    }
    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    while let Some(g) = groups.pop() {
        out.push_str(&format!(",{:03}", g));
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
