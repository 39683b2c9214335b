use crate::model::metrics::MetricName;
use crate::report::{NamedStats, SummaryData, format_f64_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    out.push_str("Article Readability & Sentiment Report\n");
    out.push_str("======================================\n\n");

    out.push_str("1. Input\n");
    out.push_str(&format!("Input table: {}\n", data.input.path));
    out.push_str(&format!("Rows: {}\n", data.input.rows));
    out.push_str(&format!("Processed: {}\n", data.input.processed));
    out.push_str(&format!("Skipped (no text): {}\n", data.input.skipped));
    if !data.input.skipped_ids.is_empty() {
        out.push_str(&format!(
            "Skipped ids: {}\n",
            data.input.skipped_ids.join(", ")
        ));
    }
    out.push('\n');

    out.push_str("2. Profile\n");
    out.push_str(&format!("Pronoun mode: {}\n", data.profile.pronoun_mode));
    out.push_str(&format!(
        "Complex word: more than {} syllables\n",
        data.profile.complex_syllable_threshold
    ));
    out.push_str(&format!(
        "Fog weight: {}\n",
        format_f64_6(data.profile.fog_weight)
    ));
    out.push_str(&format!("Sentiment lexicon: {}\n\n", data.profile.lexicon));

    out.push_str("3. Metric distributions\n");
    if data.metrics.is_empty() || data.input.processed == 0 {
        out.push_str("No articles processed.\n");
    } else {
        out.push_str("metric\tmean\tmedian\tp90\tmin\tmax\n");
        for stats in &data.metrics {
            out.push_str(&stats_line(stats));
        }
        out.push('\n');
        out.push_str(&format!(
            "Readability: {}\n",
            readability_statement(fog_median(&data.metrics))
        ));
    }

    out.push_str(&format!("\nOutput table: {}\n", data.output_table));
    out
}

fn stats_line(stats: &NamedStats) -> String {
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\n",
        stats.name,
        format_f64_6(stats.mean),
        format_f64_6(stats.median),
        format_f64_6(stats.p90),
        format_f64_6(stats.min),
        format_f64_6(stats.max)
    )
}

fn fog_median(metrics: &[NamedStats]) -> f64 {
    metrics
        .iter()
        .find(|s| s.name == MetricName::FogIndex.label())
        .map(|s| s.median)
        .unwrap_or(0.0)
}

fn readability_statement(fog: f64) -> &'static str {
    if fog >= 17.0 {
        "median fog index is at graduate level"
    } else if fog >= 12.0 {
        "median fog index is at college level"
    } else if fog >= 8.0 {
        "median fog index is at high-school level"
    } else {
        "median fog index is easily readable"
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
