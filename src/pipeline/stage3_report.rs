use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::input::table::{URL_ID_COLUMN, escape_field};
use crate::model::metrics::{MetricName, MetricValue, MetricsResult};
use crate::model::thresholds::MetricsProfile;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    InputSummary, ProfileSummary, ReportError, SummaryData, ToolMeta, format_f64_6, metric_stats,
};

pub const OUTPUT_TABLE: &str = "Output.tsv";
pub const SUMMARY_JSON: &str = "summary.json";
pub const REPORT_TEXT: &str = "report.txt";

#[derive(Debug, Clone)]
pub struct Stage3Input<'a> {
    pub results: &'a [MetricsResult],
    pub skipped: &'a [String],
    pub n_rows: usize,
    pub input_path: String,
    pub profile: &'a MetricsProfile,
    pub lexicon: String,

    pub tool_name: String,
    pub tool_version: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportPaths {
    pub table: PathBuf,
    pub summary: PathBuf,
    pub report: PathBuf,
}

pub fn write_reports(input: &Stage3Input<'_>, out_dir: &Path) -> Result<ReportPaths, ReportError> {
    fs::create_dir_all(out_dir)?;

    let table = out_dir.join(OUTPUT_TABLE);
    write_metrics_tsv(input.results, &table)?;

    let summary_data = build_summary(input, &table);

    let summary = out_dir.join(SUMMARY_JSON);
    write_text(&summary, &render_summary_json(&summary_data)?)?;

    let report = out_dir.join(REPORT_TEXT);
    write_text(&report, &render_report_text(&summary_data))?;

    tracing::info!(
        table = %table.display(),
        summary = %summary.display(),
        report = %report.display(),
        rows = input.results.len(),
        "wrote reports"
    );

    Ok(ReportPaths {
        table,
        summary,
        report,
    })
}

pub fn output_header() -> String {
    let mut columns = Vec::with_capacity(MetricName::ALL.len() + 1);
    columns.push(URL_ID_COLUMN);
    columns.extend(MetricName::ALL.iter().map(|m| m.label()));
    columns.join("\t")
}

pub fn write_metrics_tsv(results: &[MetricsResult], path: &Path) -> Result<(), ReportError> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "{}", output_header())?;
    for result in results {
        let mut row = Vec::with_capacity(MetricName::ALL.len() + 1);
        row.push(escape_field(&result.url_id));
        row.extend(result.metrics.values().map(|(_, value)| format_value(value)));
        writeln!(w, "{}", row.join("\t"))?;
    }
    w.flush()?;
    Ok(())
}

fn format_value(value: MetricValue) -> String {
    match value {
        MetricValue::Count(v) => v.to_string(),
        MetricValue::Real(v) => format_f64_6(v),
    }
}

fn build_summary(input: &Stage3Input<'_>, table: &Path) -> SummaryData {
    let metrics = MetricName::ALL
        .iter()
        .map(|&name| metric_stats(name, input.results))
        .collect();

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputSummary {
            path: input.input_path.clone(),
            rows: input.n_rows,
            processed: input.results.len(),
            skipped: input.skipped.len(),
            skipped_ids: input.skipped.to_vec(),
        },
        profile: ProfileSummary {
            pronoun_mode: input.profile.pronoun_mode.as_str().to_string(),
            complex_syllable_threshold: input.profile.complex_syllable_threshold,
            fog_weight: input.profile.fog_weight,
            lexicon: input.lexicon.clone(),
        },
        output_table: table.display().to_string(),
        metrics,
    }
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_report.rs"]
mod tests;
