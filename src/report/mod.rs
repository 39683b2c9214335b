use serde::Serialize;
use thiserror::Error;

use crate::model::metrics::{MetricName, MetricsResult};

pub mod json;
pub mod text;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Serialize)]
pub struct NamedStats {
    pub name: &'static str,
    pub mean: f64,
    pub median: f64,
    pub p90: f64,
    pub min: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub path: String,
    pub rows: usize,
    pub processed: usize,
    pub skipped: usize,
    pub skipped_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProfileSummary {
    pub pronoun_mode: String,
    pub complex_syllable_threshold: u32,
    pub fog_weight: f64,
    pub lexicon: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputSummary,
    pub profile: ProfileSummary,
    pub output_table: String,
    pub metrics: Vec<NamedStats>,
}

pub fn format_f64_6(v: f64) -> String {
    format!("{:.6}", v)
}

pub fn quantile_indexed(values: &[f64], p: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    let idx = ((n - 1) as f64 * p).ceil() as usize;
    sorted[idx]
}

pub fn median(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.5)
}

pub fn p90(values: &[f64]) -> f64 {
    quantile_indexed(values, 0.90)
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Distribution of one metric across the processed articles.
pub fn metric_stats(name: MetricName, results: &[MetricsResult]) -> NamedStats {
    let values: Vec<f64> = results
        .iter()
        .map(|r| r.metrics.get(name).as_f64())
        .collect();
    let min = values.iter().copied().reduce(f64::min).unwrap_or(0.0);
    let max = values.iter().copied().reduce(f64::max).unwrap_or(0.0);
    NamedStats {
        name: name.label(),
        mean: mean(&values),
        median: median(&values),
        p90: p90(&values),
        min,
        max,
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
